use std::cmp::Ordering;

use crate::parse::{ParseError, ParseResult};

/// Sample bank that hit sounds are played from.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SampleSet {
    None = 0,
    Normal = 1,
    Soft = 2,
    Drum = 3,
}

impl SampleSet {
    /// Decode the integer code used by both the text and the binary format.
    pub fn from_code(code: i32) -> ParseResult<Self> {
        match code {
            0 => Ok(Self::None),
            1 => Ok(Self::Normal),
            2 => Ok(Self::Soft),
            3 => Ok(Self::Drum),
            _ => Err(ParseError::InvalidSampleSet(code)),
        }
    }

    /// The integer code of this sample set.
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl Default for SampleSet {
    #[inline]
    fn default() -> Self {
        Self::Normal
    }
}

const KIAI_FLAG: i32 = 1 << 0;
const OMIT_FIRST_BAR_LINE_FLAG: i32 = 1 << 3;

/// A moment where timing or sample behavior changes.
///
/// `beat_duration_sv` is dual-purpose: for an uninherited point it is the
/// beat duration in milliseconds, for an inherited point it encodes the
/// slider velocity multiplier (see [`sv_multiplier`](Self::sv_multiplier)).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ControlPoint {
    /// Time at which the point takes effect, in milliseconds.
    pub offset: f64,
    /// Beat duration or slider velocity, depending on `inherited`.
    pub beat_duration_sv: f64,
    /// Beats per measure.
    pub beats_per_measure: i32,
    /// Sample bank from this point onward.
    pub sample_set: SampleSet,
    /// Index of the custom sample override, 0 for none.
    pub custom_sample_index: i32,
    /// Hit sound volume in percent.
    pub volume: f32,
    /// Whether the point inherits its timing from a prior uninherited point.
    pub inherited: bool,
    /// Whether the section starting here is a kiai section.
    pub kiai: bool,
    /// Whether the first bar line of the section is omitted.
    pub omit_first_bar_line: bool,
}

impl ControlPoint {
    /// The point returned by lookups on maps without any matching point:
    /// 120 BPM, 4/4, full volume, uninherited.
    pub const DEFAULT: Self = Self {
        offset: 0.0,
        beat_duration_sv: 500.0,
        beats_per_measure: 4,
        sample_set: SampleSet::Normal,
        custom_sample_index: 0,
        volume: 100.0,
        inherited: false,
        kiai: false,
        omit_first_bar_line: false,
    };

    /// Parse one `TimingPoints` line.
    ///
    /// Only offset and beat duration are required, every later field
    /// falls back to its default when the line ends early.
    pub fn parse(line: &str) -> ParseResult<Self> {
        let values: Vec<&str> = line.split(',').map(str::trim).collect();

        if values.len() < 2 {
            return Err(ParseError::MissingField("beat duration"));
        }

        let (kiai, omit_first_bar_line) = match values.get(7) {
            Some(value) => {
                let flags: i32 = value.parse()?;

                (
                    flags & KIAI_FLAG != 0,
                    flags & OMIT_FIRST_BAR_LINE_FLAG != 0,
                )
            }
            None => (false, false),
        };

        Ok(Self {
            offset: values[0].parse()?,
            beat_duration_sv: values[1].parse()?,
            beats_per_measure: match values.get(2) {
                Some(value) => value.parse()?,
                None => 4,
            },
            sample_set: match values.get(3) {
                Some(value) => SampleSet::from_code(value.parse()?)?,
                None => SampleSet::Normal,
            },
            custom_sample_index: match values.get(4) {
                Some(value) => value.parse()?,
                None => 0,
            },
            volume: match values.get(5) {
                Some(value) => value.parse()?,
                None => 100.0,
            },
            // the text format stores "uninherited", i.e. 1 for timing points
            inherited: match values.get(6) {
                Some(value) => value.parse::<i32>()? == 0,
                None => false,
            },
            kiai,
            omit_first_bar_line,
        })
    }

    /// The beats per minute of an uninherited point.
    #[inline]
    pub fn bpm(&self) -> f64 {
        60_000.0 / self.beat_duration_sv
    }

    /// The slider velocity multiplier encoded by an inherited point.
    #[inline]
    pub fn sv_multiplier(&self) -> f64 {
        if self.beat_duration_sv < 0.0 {
            -100.0 / self.beat_duration_sv
        } else {
            1.0
        }
    }
}

impl Default for ControlPoint {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl PartialOrd for ControlPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.offset.partial_cmp(&other.offset)
    }
}
