use crate::parse::{ParseError, ParseResult};

/// A break period of a [`Beatmap`](crate::Beatmap).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Break {
    /// Start timestamp of the break, in milliseconds.
    pub start_time: f64,
    /// End timestamp of the break, in milliseconds.
    pub end_time: f64,
}

impl Break {
    /// Parse an `Events` line whose event code is `2`.
    pub fn parse(line: &str) -> ParseResult<Self> {
        let mut split = line.split(',').map(str::trim);

        // event code
        let _ = split.next();

        Ok(Self {
            start_time: split
                .next()
                .ok_or(ParseError::MissingField("start time"))?
                .parse()?,
            end_time: split
                .next()
                .ok_or(ParseError::MissingField("end time"))?
                .parse()?,
        })
    }

    /// Duration of the break.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}
