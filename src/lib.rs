//! Library to parse [osu!] beatmaps into an immutable document and cache
//! them in a compact binary format.
//!
//! ## Description
//!
//! `rosu-beatmap` loads `.osu` files into a [`Beatmap`]: metadata,
//! difficulty settings, breaks, combo colors, hit objects with assigned
//! combo stamps, and a sorted control point timeline with lookup by time.
//! A loaded document round-trips losslessly through a binary cache so
//! that repeated loads skip text parsing entirely; only the single raw
//! source line of each hit object is re-parsed on a cached load.
//!
//! ## Usage
//!
//! ```
//! use std::io::Cursor;
//! use rosu_beatmap::Beatmap;
//!
//! let text = "\
//! [Metadata]
//! Version:Insane
//!
//! [TimingPoints]
//! 0,350,4,1,0,100,1,0
//!
//! [HitObjects]
//! 256,192,1000,5,0
//! ";
//!
//! // decode the map
//! let map = Beatmap::parse(Cursor::new(text), "artist - title (creator) [Insane].osu").unwrap();
//! assert_eq!(map.name(), "Insane");
//! assert_eq!(map.timing_point_at(2000.0).beat_duration_sv, 350.0);
//!
//! // round-trip it through the binary cache
//! let mut cached = Vec::new();
//! map.encode(&mut cached).unwrap();
//! let reloaded = Beatmap::decode(cached.as_slice()).unwrap();
//! assert_eq!(reloaded, map);
//! ```
//!
//! [osu!]: https://osu.ppy.sh/home

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::struct_excessive_bools,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

mod beatmap;
mod cache;
mod parse;

pub use beatmap::{Beatmap, Break, Color4, CONTROL_POINT_LENIENCY};
pub use cache::{CacheError, CacheResult};
pub use parse::{
    ControlPoint, HitObject, HitObjectFlags, ParseError, ParseResult, Pos2, SampleSet,
};
