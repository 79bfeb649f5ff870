// Raster surface contract shared by the per-frame components.
//
// The web frontend implements `Surface` on top of a 2D canvas context;
// host tests implement it with a recorder. Nothing in here touches a
// platform API.

use glam::Vec2;
use std::fmt;

/// Backing pixel box of a surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Fill or stroke colour understood by the surface.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    /// CSS colour literal such as `#6cf`.
    Css(&'static str),
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    /// Hue in degrees, saturation and lightness in percent.
    Hsl { h: f32, s: f32, l: f32 },
}

impl Paint {
    pub fn rgba(rgb: [u8; 3], a: f32) -> Self {
        Paint::Rgba {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a,
        }
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paint::Css(s) => f.write_str(s),
            Paint::Rgba { r, g, b, a } => write!(f, "rgba({}, {}, {}, {})", r, g, b, a),
            Paint::Hsl { h, s, l } => write!(f, "hsl({}, {}%, {}%)", h, s, l),
        }
    }
}

/// Mutable 2D pixel box with canvas-like drawing primitives.
pub trait Surface {
    fn size(&self) -> SurfaceSize;

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32);

    fn begin_path(&mut self);
    fn move_to(&mut self, p: Vec2);
    fn line_to(&mut self, p: Vec2);
    fn stroke(&mut self);

    fn set_fill(&mut self, paint: &Paint);
    fn set_stroke(&mut self, paint: &Paint);
    fn set_line_width(&mut self, width: f32);

    /// Clear the whole pixel box.
    fn clear(&mut self) {
        let size = self.size();
        self.clear_rect(0.0, 0.0, size.width, size.height);
    }

    /// Paint a translucent rectangle over the whole pixel box.
    fn wash(&mut self, paint: &Paint) {
        let size = self.size();
        self.set_fill(paint);
        self.fill_rect(0.0, 0.0, size.width, size.height);
    }
}
