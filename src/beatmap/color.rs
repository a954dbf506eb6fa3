/// RGBA color with channels in `0.0..=1.0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color4 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color4 {
    /// Create a color from its channels.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from byte channels.
    #[inline]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: 1.0,
        }
    }
}

impl Default for Color4 {
    #[inline]
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }
}

/// The palette used when a map has no usable `Colours` section.
pub(crate) fn default_palette() -> Vec<Color4> {
    vec![
        Color4::from_rgb(255, 192, 0),
        Color4::from_rgb(0, 202, 0),
        Color4::from_rgb(18, 124, 255),
        Color4::from_rgb(242, 24, 57),
    ]
}
