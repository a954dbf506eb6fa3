//! Binary cache codec for [`Beatmap`] documents.
//!
//! The cache is a little-endian, length-prefixed encoding of every field
//! of the document. Hit objects are stored as their raw source line only;
//! decoding re-runs the single-line parser on each stored line instead of
//! re-parsing the whole file, which is what makes cached re-loads cheap.

mod error;

pub use error::{CacheError, CacheResult};

use std::{
    io::{Read, Write},
    path::PathBuf,
};

use byteorder::{ReadBytesExt, WriteBytesExt, LE};
use log::debug;

use crate::{
    beatmap::{Beatmap, BeatmapBuilder, Break, Color4},
    parse::{ControlPoint, HitObject, SampleSet},
};

/// Magic bytes at the start of every cache file.
const MAGIC: &[u8; 4] = b"ROSB";

/// Bumped whenever the field layout changes.
const FORMAT_VERSION: u16 = 1;

impl Beatmap {
    /// Serialize the document into the binary cache format.
    pub fn encode<W: Write>(&self, mut dst: W) -> CacheResult<()> {
        dst.write_all(MAGIC)?;
        dst.write_u16::<LE>(FORMAT_VERSION)?;

        write_string(&mut dst, &self.source().to_string_lossy())?;
        write_string(&mut dst, self.audio_filename())?;
        write_string(&mut dst, self.name())?;
        dst.write_i64::<LE>(self.id())?;

        dst.write_u32::<LE>(self.bookmarks().len() as u32)?;

        for &bookmark in self.bookmarks() {
            dst.write_i32::<LE>(bookmark)?;
        }

        dst.write_f64::<LE>(self.hp_drain_rate())?;
        dst.write_f64::<LE>(self.circle_size())?;
        dst.write_f64::<LE>(self.overall_difficulty())?;
        dst.write_f64::<LE>(self.approach_rate())?;
        dst.write_f64::<LE>(self.slider_multiplier())?;
        dst.write_f64::<LE>(self.slider_tick_rate())?;

        dst.write_u32::<LE>(self.hit_objects().len() as u32)?;

        for object in self.hit_objects() {
            write_string(&mut dst, &object.raw)?;
        }

        dst.write_u32::<LE>(self.combo_colors().len() as u32)?;

        for color in self.combo_colors() {
            dst.write_f32::<LE>(color.r)?;
            dst.write_f32::<LE>(color.g)?;
            dst.write_f32::<LE>(color.b)?;
            dst.write_f32::<LE>(color.a)?;
        }

        write_string(&mut dst, self.background())?;

        dst.write_u32::<LE>(self.breaks().len() as u32)?;

        for brk in self.breaks() {
            dst.write_f64::<LE>(brk.start_time)?;
            dst.write_f64::<LE>(brk.end_time)?;
        }

        dst.write_u32::<LE>(self.control_points().len() as u32)?;

        for point in self.control_points() {
            dst.write_f64::<LE>(point.offset)?;
            dst.write_f64::<LE>(point.beat_duration_sv)?;
            dst.write_i32::<LE>(point.beats_per_measure)?;
            dst.write_i32::<LE>(point.sample_set.code())?;
            dst.write_i32::<LE>(point.custom_sample_index)?;
            dst.write_f32::<LE>(point.volume)?;
            dst.write_u8(u8::from(point.inherited))?;
            dst.write_u8(u8::from(point.kiai))?;
            dst.write_u8(u8::from(point.omit_first_bar_line))?;
        }

        Ok(())
    }

    /// Rebuild a document from the binary cache without re-running the
    /// text parser.
    ///
    /// Hit objects are recovered by re-parsing their stored source line;
    /// combo stamps and control point order are re-established by the
    /// same builder the text parser uses, so
    /// `Beatmap::decode(encoded) == original` holds for every field.
    pub fn decode<R: Read>(mut src: R) -> CacheResult<Self> {
        let mut magic = [0; 4];
        src.read_exact(&mut magic)?;

        if &magic != MAGIC {
            return Err(CacheError::BadMagic);
        }

        let version = src.read_u16::<LE>()?;

        if version != FORMAT_VERSION {
            return Err(CacheError::UnsupportedVersion(version));
        }

        let source = PathBuf::from(read_string(&mut src)?);
        debug!("decoding cached beatmap {}", source.display());

        let mut builder = BeatmapBuilder::new(source);
        builder.audio_filename = read_string(&mut src)?;
        builder.name = read_string(&mut src)?;
        builder.id = src.read_i64::<LE>()?;

        let bookmark_count = src.read_u32::<LE>()?;

        for _ in 0..bookmark_count {
            builder.bookmarks.push(src.read_i32::<LE>()?);
        }

        builder.hp_drain_rate = src.read_f64::<LE>()?;
        builder.circle_size = src.read_f64::<LE>()?;
        builder.overall_difficulty = src.read_f64::<LE>()?;
        builder.approach_rate = src.read_f64::<LE>()?;
        builder.slider_multiplier = src.read_f64::<LE>()?;
        builder.slider_tick_rate = src.read_f64::<LE>()?;

        let object_count = src.read_u32::<LE>()?;

        for _ in 0..object_count {
            let raw = read_string(&mut src)?;
            builder.hit_objects.push(HitObject::parse(&raw)?);
        }

        let color_count = src.read_u32::<LE>()?;
        builder.combo_colors.clear();

        for _ in 0..color_count {
            builder.combo_colors.push(Color4::new(
                src.read_f32::<LE>()?,
                src.read_f32::<LE>()?,
                src.read_f32::<LE>()?,
                src.read_f32::<LE>()?,
            ));
        }

        builder.background = read_string(&mut src)?;

        let break_count = src.read_u32::<LE>()?;

        for _ in 0..break_count {
            builder.breaks.push(Break {
                start_time: src.read_f64::<LE>()?,
                end_time: src.read_f64::<LE>()?,
            });
        }

        let point_count = src.read_u32::<LE>()?;

        for _ in 0..point_count {
            builder.control_points.push(ControlPoint {
                offset: src.read_f64::<LE>()?,
                beat_duration_sv: src.read_f64::<LE>()?,
                beats_per_measure: src.read_i32::<LE>()?,
                sample_set: SampleSet::from_code(src.read_i32::<LE>()?)?,
                custom_sample_index: src.read_i32::<LE>()?,
                volume: src.read_f32::<LE>()?,
                inherited: src.read_u8()? != 0,
                kiai: src.read_u8()? != 0,
                omit_first_bar_line: src.read_u8()? != 0,
            });
        }

        Ok(builder.build())
    }
}

fn write_string<W: Write>(dst: &mut W, value: &str) -> CacheResult<()> {
    dst.write_u32::<LE>(value.len() as u32)?;
    dst.write_all(value.as_bytes())?;

    Ok(())
}

fn read_string<R: Read>(src: &mut R) -> CacheResult<String> {
    let len = src.read_u32::<LE>()? as usize;
    let mut buf = vec![0; len];
    src.read_exact(&mut buf)?;

    Ok(String::from_utf8(buf)?)
}
