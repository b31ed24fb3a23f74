//! Geometric primitives
//!
//! Everything here is a sequence of clipped rectangle fills on a [`Canvas`].
//! The panel is write-only, so no primitive reads pixels back, and a filled
//! circle is swept as O(r) horizontal chords instead of O(r²) pixel writes -
//! the socket geometry is circle-heavy and the bus budget is tight.

use embedded_graphics_core::pixelcolor::Rgb565;

use crate::canvas::Canvas;

/// Horizontal run of pixels: a height-1 rectangle
pub fn hline<C: Canvas>(canvas: &mut C, x: i32, y: i32, len: i32, color: Rgb565) {
    canvas.fill_rect(x, y, len, 1, color);
}

/// Solid disc via the integer midpoint algorithm, one chord pair per octant
/// row. `r <= 0` degenerates to at most a single pixel row.
pub fn fill_circle<C: Canvas>(canvas: &mut C, cx: i32, cy: i32, r: i32, color: Rgb565) {
    let mut x = r;
    let mut y = 0;
    let mut err = 1 - r;

    while x >= y {
        hline(canvas, cx - x, cy + y, 2 * x + 1, color);
        hline(canvas, cx - x, cy - y, 2 * x + 1, color);
        hline(canvas, cx - y, cy + x, 2 * y + 1, color);
        hline(canvas, cx - y, cy - x, 2 * y + 1, color);

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x + 1);
        }
    }
}

/// Rounded rectangle: central band, two side bands, four corner discs
///
/// Bands are only emitted when the corresponding dimension exceeds `2r`.
/// The far corner centers are pulled in by one pixel so the discs meet the
/// bands without a seam; the overlap is harmless opaque overwrite.
pub fn round_rect<C: Canvas>(
    canvas: &mut C,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    r: i32,
    color: Rgb565,
) {
    if w > 2 * r {
        canvas.fill_rect(x + r, y, w - 2 * r, h, color);
    }
    if h > 2 * r {
        canvas.fill_rect(x, y + r, r, h - 2 * r, color);
        canvas.fill_rect(x + w - r, y + r, r, h - 2 * r, color);
    }
    fill_circle(canvas, x + r, y + r, r, color);
    fill_circle(canvas, x + w - r - 1, y + r, r, color);
    fill_circle(canvas, x + r, y + h - r - 1, r, color);
    fill_circle(canvas, x + w - r - 1, y + h - r - 1, r, color);
}

/// Thick line: Bresenham walk stamping a `t × t` square at every step
///
/// Near-horizontal (|dy| <= 2) and near-vertical (|dx| <= 2) lines collapse
/// to a single rectangle over the bounding box; stamped squares would show
/// staircase steps on shallow slopes.
pub fn thick_line<C: Canvas>(
    canvas: &mut C,
    mut x0: i32,
    mut y0: i32,
    x1: i32,
    y1: i32,
    t: i32,
    color: Rgb565,
) {
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();

    if dy <= 2 {
        let min_x = x0.min(x1);
        let max_x = x0.max(x1);
        canvas.fill_rect(min_x, (y0 + y1) / 2 - t / 2, max_x - min_x + 1, t, color);
        return;
    }
    if dx <= 2 {
        let min_y = y0.min(y1);
        let max_y = y0.max(y1);
        canvas.fill_rect((x0 + x1) / 2 - t / 2, min_y, t, max_y - min_y + 1, color);
        return;
    }

    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        canvas.fill_rect(x0 - t / 2, y0 - t / 2, t, t, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }
}
