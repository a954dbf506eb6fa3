use bitflags::bitflags;

use crate::{
    beatmap::Color4,
    parse::{ParseError, ParseResult, Pos2},
};

bitflags! {
    /// Type flags of a hit object, as stored in the fourth field of its line.
    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    pub struct HitObjectFlags: u32 {
        const CIRCLE = 1 << 0;
        const SLIDER = 1 << 1;
        const NEW_COMBO = 1 << 2;
        const SPINNER = 1 << 3;
        /// Three bits encoding how many palette colors a new combo skips.
        const COMBO_OFFSET = (1 << 4) | (1 << 5) | (1 << 6);
        const HOLD = 1 << 7;
    }
}

macro_rules! next_field {
    ($opt:expr, $name:literal) => {
        $opt.ok_or(ParseError::MissingField($name))?
    };
}

/// One playable element of a [`Beatmap`](crate::Beatmap).
///
/// The original source line is retained in `raw` so that the binary cache
/// can re-derive everything else by re-parsing that single line.
/// `combo_index`, `color_index`, and `color` are not known at parse time;
/// they are stamped once all objects of a map have been collected.
#[derive(Clone, Debug, PartialEq)]
pub struct HitObject {
    /// Position on the playfield.
    pub pos: Pos2,
    /// Start time in milliseconds.
    pub time: f64,
    /// End time in milliseconds; the start time for circles and sliders.
    pub end_time: f64,
    /// Type flags.
    pub flags: HitObjectFlags,
    /// Palette colors skipped when this object starts a new combo.
    pub combo_offset: u32,
    /// 1-based position within the object's combo.
    pub combo_index: u32,
    /// Index into the map's combo color palette.
    pub color_index: usize,
    /// Resolved palette color.
    pub color: Color4,
    /// The unparsed source line.
    pub raw: String,
}

impl HitObject {
    /// Parse one `HitObjects` line.
    pub fn parse(line: &str) -> ParseResult<Self> {
        let mut split = line.split(',');

        let pos = Pos2 {
            x: next_field!(split.next(), "x").trim().parse()?,
            y: next_field!(split.next(), "y").trim().parse()?,
        };

        let time: f64 = next_field!(split.next(), "time").trim().parse()?;
        let kind: u32 = next_field!(split.next(), "type").trim().parse()?;

        let flags = HitObjectFlags::from_bits_truncate(kind);

        if !flags.intersects(
            HitObjectFlags::CIRCLE
                | HitObjectFlags::SLIDER
                | HitObjectFlags::SPINNER
                | HitObjectFlags::HOLD,
        ) {
            return Err(ParseError::UnknownHitObjectKind);
        }

        let combo_offset = (kind & HitObjectFlags::COMBO_OFFSET.bits()) >> 4;

        // hit sound, not needed here
        let _ = split.next();

        let mut end_time = time;

        if flags.contains(HitObjectFlags::SPINNER) {
            end_time = next_field!(split.next(), "end time").trim().parse()?;
        } else if flags.contains(HitObjectFlags::HOLD) {
            // hold extras look like `endTime:sampleSet:...`
            if let Some(extras) = split.next() {
                let end = next_field!(extras.split(':').next(), "end time");
                end_time = end_time.max(end.trim().parse()?);
            }
        }

        Ok(Self {
            pos,
            time,
            end_time,
            flags,
            combo_offset,
            combo_index: 0,
            color_index: 0,
            color: Color4::default(),
            raw: line.to_owned(),
        })
    }

    #[inline]
    pub fn is_circle(&self) -> bool {
        self.flags.contains(HitObjectFlags::CIRCLE)
    }

    #[inline]
    pub fn is_slider(&self) -> bool {
        self.flags.contains(HitObjectFlags::SLIDER)
    }

    #[inline]
    pub fn is_spinner(&self) -> bool {
        self.flags.contains(HitObjectFlags::SPINNER)
    }

    #[inline]
    pub fn is_hold(&self) -> bool {
        self.flags.contains(HitObjectFlags::HOLD)
    }

    /// Whether the object carries the new-combo marker.
    #[inline]
    pub fn new_combo(&self) -> bool {
        self.flags.contains(HitObjectFlags::NEW_COMBO)
    }
}
