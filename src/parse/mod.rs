mod control_point;
mod error;
mod hitobject;
mod pos2;

pub use control_point::{ControlPoint, SampleSet};
pub use error::{ParseError, ParseResult};
pub use hitobject::{HitObject, HitObjectFlags};
pub use pos2::Pos2;

use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use log::debug;

use crate::beatmap::{Beatmap, BeatmapBuilder, Break, Color4};

impl Beatmap {
    /// Parse a `.osu` file from disk.
    ///
    /// Any failure is reported as a single
    /// [`ParseError::Load`] wrapping the original cause.
    pub fn from_path(path: impl AsRef<Path>) -> ParseResult<Self> {
        let path = path.as_ref();
        debug!("loading beatmap {}", path.display());

        File::open(path)
            .map_err(ParseError::from)
            .and_then(|file| parse_document(file, path))
            .map_err(|source| ParseError::load(display_name(path), source))
    }

    /// Parse a `.osu` document from any reader.
    ///
    /// `source` is retained as the document's identity and used as the
    /// display name in error messages.
    pub fn parse<R: Read>(src: R, source: impl AsRef<Path>) -> ParseResult<Self> {
        let source = source.as_ref();

        parse_document(src, source).map_err(|e| ParseError::load(display_name(source), e))
    }
}

fn display_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn parse_document<R: Read>(src: R, source: &Path) -> ParseResult<Beatmap> {
    let mut reader = BufReader::new(src);
    let mut builder = BeatmapBuilder::new(source.to_owned());

    let mut buf = String::new();
    let mut section = Section::None;
    let mut first_line = true;

    while reader.read_line(&mut buf)? != 0 {
        let mut line = buf.trim_end();

        if first_line {
            line = line.trim_start_matches('\u{feff}');
            first_line = false;
        }

        process_line(line, &mut section, &mut builder)?;
        buf.clear();
    }

    Ok(builder.build())
}

fn process_line(
    line: &str,
    section: &mut Section,
    builder: &mut BeatmapBuilder,
) -> ParseResult<()> {
    if line.is_empty() || line.starts_with("//") {
        return Ok(());
    }

    if let Some(name) = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        *section = Section::from_name(name);

        // a `Colours` section fully replaces the default palette
        if matches!(section, Section::Colours) {
            builder.combo_colors.clear();
        }

        return Ok(());
    }

    match *section {
        // everything before the first section header
        Section::None => {}
        Section::General => {
            let (key, value) = split_key_value(line)?;

            if key == "AudioFilename" {
                builder.audio_filename = value.to_owned();
            }
        }
        Section::Editor => {
            let (key, value) = split_key_value(line)?;

            if key == "Bookmarks" {
                for bookmark in value.split(',') {
                    let bookmark = bookmark.trim();

                    if !bookmark.is_empty() {
                        builder.bookmarks.push(bookmark.parse()?);
                    }
                }
            }
        }
        Section::Metadata => {
            let (key, value) = split_key_value(line)?;

            match key {
                "Version" => builder.name = value.to_owned(),
                "BeatmapID" => builder.id = value.parse()?,
                _ => {}
            }
        }
        Section::Difficulty => {
            let (key, value) = split_key_value(line)?;

            match key {
                "HPDrainRate" => builder.hp_drain_rate = value.parse()?,
                "CircleSize" => builder.circle_size = value.parse()?,
                "OverallDifficulty" => builder.overall_difficulty = value.parse()?,
                "ApproachRate" => builder.approach_rate = value.parse()?,
                "SliderMultiplier" => builder.slider_multiplier = value.parse()?,
                "SliderTickRate" => builder.slider_tick_rate = value.parse()?,
                _ => {}
            }
        }
        Section::Events => {
            if !line.starts_with(|c: char| c.is_ascii_whitespace()) {
                let values: Vec<&str> = line.split(',').collect();

                match values.first().copied() {
                    Some("0") => {
                        let path = values.get(2).ok_or(ParseError::MissingField("filename"))?;
                        builder.background = strip_quotes(path).to_owned();
                    }
                    Some("2") => builder.breaks.push(Break::parse(line)?),
                    _ => {}
                }
            }
        }
        Section::TimingPoints => builder.control_points.push(ControlPoint::parse(line)?),
        Section::Colours => {
            let (key, value) = split_key_value(line)?;

            if key.starts_with("Combo") {
                builder.combo_colors.push(parse_color(value)?);
            }
        }
        Section::HitObjects => builder.hit_objects.push(HitObject::parse(line)?),
    }

    Ok(())
}

#[inline]
fn split_key_value(line: &str) -> ParseResult<(&str, &str)> {
    line.split_once(':')
        .map(|(key, value)| (key.trim(), value.trim()))
        .ok_or(ParseError::BadLine)
}

fn strip_quotes(path: &str) -> &str {
    path.strip_prefix('"')
        .and_then(|path| path.strip_suffix('"'))
        .unwrap_or(path)
}

fn parse_color(value: &str) -> ParseResult<Color4> {
    let mut split = value.split(',').map(str::trim);

    let mut next_channel = |name: &'static str| -> ParseResult<u8> {
        split
            .next()
            .ok_or(ParseError::MissingField(name))?
            .parse()
            .map_err(ParseError::from)
    };

    Ok(Color4::from_rgb(
        next_channel("red")?,
        next_channel("green")?,
        next_channel("blue")?,
    ))
}

#[derive(Copy, Clone, Debug)]
enum Section {
    None,
    General,
    Editor,
    Metadata,
    Difficulty,
    Events,
    TimingPoints,
    Colours,
    HitObjects,
}

impl Section {
    #[inline]
    fn from_name(name: &str) -> Self {
        match name {
            "General" => Self::General,
            "Editor" => Self::Editor,
            "Metadata" => Self::Metadata,
            "Difficulty" => Self::Difficulty,
            "Events" => Self::Events,
            "TimingPoints" => Self::TimingPoints,
            "Colours" => Self::Colours,
            "HitObjects" => Self::HitObjects,
            _ => Self::None,
        }
    }
}
