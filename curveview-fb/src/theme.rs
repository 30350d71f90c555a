/// Color bridge between chart styles and tiny-skia, plus the fallback label size.

use curveview::Color;

pub trait ToSkia {
    fn to_skia(self) -> tiny_skia::Color;
}

impl ToSkia for Color {
    fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

/// Cap height relative to font size, used when no font is loaded.
pub const CAP_HEIGHT_RATIO: f32 = 0.7;
