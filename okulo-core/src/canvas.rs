//! Drawing surface trait and clipping
//!
//! The display is a write-only device: the only primitive anything above
//! the wire protocol needs is "fill this rectangle with this color". Every
//! higher-level shape in [`crate::raster`] reduces to it.

use embedded_graphics_core::pixelcolor::Rgb565;

/// A write-only rectangular pixel surface
///
/// Coordinates are signed so callers can pass geometry that hangs off any
/// edge; implementations clip via [`clip_rect`] and silently no-op when
/// nothing remains. An out-of-range draw request is never an error.
pub trait Canvas {
    /// Surface dimensions in pixels (width, height)
    fn size(&self) -> (u16, u16);

    /// Fill a rectangle with an opaque color, clipped to the surface
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb565);

    /// Fill the entire surface
    fn fill_screen(&mut self, color: Rgb565) {
        let (w, h) = self.size();
        self.fill_rect(0, 0, i32::from(w), i32::from(h), color);
    }
}

/// Clip a rectangle to a `(width, height)` surface
///
/// A negative origin is absorbed into the span (the visible part shrinks
/// from that side). Returns `None` when the clipped rectangle is empty.
pub fn clip_rect(
    mut x: i32,
    mut y: i32,
    mut w: i32,
    mut h: i32,
    bounds: (u16, u16),
) -> Option<(u16, u16, u16, u16)> {
    let bw = i32::from(bounds.0);
    let bh = i32::from(bounds.1);

    if x < 0 {
        w += x;
        x = 0;
    }
    if y < 0 {
        h += y;
        y = 0;
    }
    if w <= 0 || h <= 0 || x >= bw || y >= bh {
        return None;
    }
    if x + w > bw {
        w = bw - x;
    }
    if y + h > bh {
        h = bh - y;
    }

    Some((x as u16, y as u16, w as u16, h as u16))
}
