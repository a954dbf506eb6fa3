use std::{
    cmp::Ordering,
    path::{Path, PathBuf},
};

pub use self::{breaks::Break, color::Color4, control_points::CONTROL_POINT_LENIENCY};

use self::combo::ComboState;
use crate::parse::{ControlPoint, HitObject};

mod breaks;
mod color;
mod combo;
mod control_points;

/// A fully loaded beatmap document.
///
/// Built either by the text parser or by the binary cache decoder and
/// immutable afterwards; every field is reachable through a read accessor.
#[derive(Clone, Debug, PartialEq)]
pub struct Beatmap {
    source: PathBuf,
    audio_filename: String,
    name: String,
    id: i64,
    bookmarks: Vec<i32>,
    hp_drain_rate: f64,
    circle_size: f64,
    overall_difficulty: f64,
    approach_rate: f64,
    slider_multiplier: f64,
    slider_tick_rate: f64,
    background: String,
    breaks: Vec<Break>,
    combo_colors: Vec<Color4>,
    hit_objects: Vec<HitObject>,
    control_points: Vec<ControlPoint>,
}

impl Beatmap {
    /// The path the document was loaded from.
    #[inline]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The audio file the map is mapped to.
    #[inline]
    pub fn audio_filename(&self) -> &str {
        &self.audio_filename
    }

    /// The difficulty name, i.e. the `Version` metadata field.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The online beatmap id, 0 if the map has none.
    #[inline]
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Editor bookmarks in milliseconds.
    #[inline]
    pub fn bookmarks(&self) -> &[i32] {
        &self.bookmarks
    }

    /// The health drain rate.
    #[inline]
    pub fn hp_drain_rate(&self) -> f64 {
        self.hp_drain_rate
    }

    /// The circle size.
    #[inline]
    pub fn circle_size(&self) -> f64 {
        self.circle_size
    }

    /// The overall difficulty.
    #[inline]
    pub fn overall_difficulty(&self) -> f64 {
        self.overall_difficulty
    }

    /// The approach rate.
    #[inline]
    pub fn approach_rate(&self) -> f64 {
        self.approach_rate
    }

    /// Base slider velocity.
    #[inline]
    pub fn slider_multiplier(&self) -> f64 {
        self.slider_multiplier
    }

    /// Amount of slider ticks per beat.
    #[inline]
    pub fn slider_tick_rate(&self) -> f64 {
        self.slider_tick_rate
    }

    /// The background image path, empty if the map has none.
    #[inline]
    pub fn background(&self) -> &str {
        &self.background
    }

    /// All break periods.
    #[inline]
    pub fn breaks(&self) -> &[Break] {
        &self.breaks
    }

    /// The combo color palette, guaranteed to be non-empty.
    #[inline]
    pub fn combo_colors(&self) -> &[Color4] {
        &self.combo_colors
    }

    /// All hit objects in source order, with combo stamps assigned.
    #[inline]
    pub fn hit_objects(&self) -> &[HitObject] {
        &self.hit_objects
    }

    /// All control points, sorted ascending by offset.
    #[inline]
    pub fn control_points(&self) -> &[ControlPoint] {
        &self.control_points
    }
}

/// Accumulates raw fields from either load path.
///
/// [`build`](Self::build) enforces the document invariants exactly once:
/// a non-empty combo palette, control points stably sorted by offset, and
/// combo stamps on every hit object.
#[derive(Debug)]
pub(crate) struct BeatmapBuilder {
    pub(crate) source: PathBuf,
    pub(crate) audio_filename: String,
    pub(crate) name: String,
    pub(crate) id: i64,
    pub(crate) bookmarks: Vec<i32>,
    pub(crate) hp_drain_rate: f64,
    pub(crate) circle_size: f64,
    pub(crate) overall_difficulty: f64,
    pub(crate) approach_rate: f64,
    pub(crate) slider_multiplier: f64,
    pub(crate) slider_tick_rate: f64,
    pub(crate) background: String,
    pub(crate) breaks: Vec<Break>,
    pub(crate) combo_colors: Vec<Color4>,
    pub(crate) hit_objects: Vec<HitObject>,
    pub(crate) control_points: Vec<ControlPoint>,
}

impl BeatmapBuilder {
    pub(crate) fn new(source: PathBuf) -> Self {
        Self {
            source,
            audio_filename: String::from("audio.mp3"),
            name: String::new(),
            id: 0,
            bookmarks: Vec::new(),
            hp_drain_rate: 5.0,
            circle_size: 5.0,
            overall_difficulty: 5.0,
            approach_rate: 5.0,
            slider_multiplier: 1.4,
            slider_tick_rate: 1.0,
            background: String::new(),
            breaks: Vec::new(),
            combo_colors: color::default_palette(),
            hit_objects: Vec::new(),
            control_points: Vec::new(),
        }
    }

    pub(crate) fn build(mut self) -> Beatmap {
        if self.combo_colors.is_empty() {
            self.combo_colors = color::default_palette();
        }

        // stable so that points sharing an offset keep their source order
        self.control_points
            .sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let mut state = ComboState::new();

        for object in &mut self.hit_objects {
            state.assign(object, &self.combo_colors);
        }

        Beatmap {
            source: self.source,
            audio_filename: self.audio_filename,
            name: self.name,
            id: self.id,
            bookmarks: self.bookmarks,
            hp_drain_rate: self.hp_drain_rate,
            circle_size: self.circle_size,
            overall_difficulty: self.overall_difficulty,
            approach_rate: self.approach_rate,
            slider_multiplier: self.slider_multiplier,
            slider_tick_rate: self.slider_tick_rate,
            background: self.background,
            breaks: self.breaks,
            combo_colors: self.combo_colors,
            hit_objects: self.hit_objects,
            control_points: self.control_points,
        }
    }
}
