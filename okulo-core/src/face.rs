//! Eye expressions
//!
//! Each expression is a pure composition of raster primitives positioned in
//! the two eye sockets. The dual-socket region is always cleared before an
//! expression is drawn so no stale geometry from the previous expression
//! survives.
//!
//! All geometry is compiled in; the panel is never configured at runtime.

use embedded_graphics_core::pixelcolor::{Rgb565, RgbColor};

use crate::canvas::Canvas;
use crate::raster::{fill_circle, round_rect, thick_line};

/// Drawing region containing both sockets plus margin
pub const FACE_X: i32 = 10;
pub const FACE_Y: i32 = 80;
pub const FACE_W: i32 = 220;
pub const FACE_H: i32 = 160;

/// Socket anchor columns (relative to `FACE_X`) and shared row
pub const LEFT_EYE_CX: i32 = 55;
pub const RIGHT_EYE_CX: i32 = 165;
pub const EYE_CY: i32 = 80;

/// Open-eye outline dimensions
pub const EYE_W: i32 = 50;
pub const EYE_H: i32 = 70;
pub const EYE_R: i32 = 18;

/// Gaze shift used by the look-* expressions, in pixels
pub const GAZE_SHIFT: i32 = 8;

/// Iris green (0x07E0)
pub const IRIS: Rgb565 = Rgb565::new(0, 63, 0);
/// Specular highlight (0xAFE0)
pub const HIGHLIGHT: Rgb565 = Rgb565::new(21, 63, 0);
/// Dimmed pupil fill (0x0320)
pub const PUPIL_DIM: Rgb565 = Rgb565::new(0, 25, 0);
/// Face background
pub const BACKGROUND: Rgb565 = Rgb565::BLACK;

/// The closed set of face expressions
///
/// Exactly one expression is current at any time; the gaze offset passed to
/// [`draw_expression`] only matters for the pupil-bearing variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Expression {
    Normal,
    Happy,
    Sad,
    Angry,
    Surprised,
    Sleepy,
    WinkLeft,
    WinkRight,
    Blink,
    Love,
    Dizzy,
    LookLeft,
    LookRight,
    LookUp,
    LookDown,
}

/// Paint the whole dual-socket region back to the background color
pub fn clear_face<C: Canvas>(canvas: &mut C) {
    canvas.fill_rect(FACE_X, FACE_Y, FACE_W, FACE_H, BACKGROUND);
}

/// Open eye: rounded outline plus a gaze-following highlight
///
/// The highlight center is clamped so the 5 px disc stays inside the
/// outline no matter what offset the scheduler asks for.
pub(crate) fn eye_normal<C: Canvas>(canvas: &mut C, cx: i32, ox: i32, oy: i32) {
    let sx = FACE_X + cx - EYE_W / 2;
    let sy = FACE_Y + EYE_CY - EYE_H / 2;
    round_rect(canvas, sx, sy, EYE_W, EYE_H, EYE_R, IRIS);

    let hx = (sx + 8 + ox).clamp(sx + 6, sx + EYE_W - 7);
    let hy = (sy + 10 + oy).clamp(sy + 6, sy + EYE_H - 7);
    fill_circle(canvas, hx, hy, 5, HIGHLIGHT);
}

/// Closed eyelid: one thin bar across the socket centerline
pub(crate) fn eye_closed<C: Canvas>(canvas: &mut C, cx: i32) {
    let sx = FACE_X + cx - EYE_W / 2 + 5;
    let sy = FACE_Y + EYE_CY;
    canvas.fill_rect(sx, sy - 3, EYE_W - 10, 7, IRIS);
}

/// Partially open eye at `pct` percent of full height
///
/// Below 10 px the sliver would be invisible, so it collapses to the
/// closed-eye bar instead.
pub(crate) fn eye_half<C: Canvas>(canvas: &mut C, cx: i32, pct: i32) {
    let h = EYE_H * pct / 100;
    if h < 10 {
        eye_closed(canvas, cx);
        return;
    }
    let sx = FACE_X + cx - EYE_W / 2;
    let sy = FACE_Y + EYE_CY + EYE_H / 2 - h;
    round_rect(canvas, sx, sy, EYE_W, h, EYE_R / 2, IRIS);
}

/// Smile-eye: a row of short dashes following a discrete parabola
///
/// Integer quadratic normalized to the half-width; no floating point.
fn eye_happy<C: Canvas>(canvas: &mut C, cx: i32) {
    let bx = FACE_X + cx;
    let by = FACE_Y + EYE_CY;
    let half = EYE_W / 2;
    for i in (-half + 3)..=(half - 3) {
        let n = i * i * 100 / (half * half);
        let y = by + 5 - 15 * (100 - n) / 100;
        canvas.fill_rect(bx + i, y - 4, 2, 6, IRIS);
    }
}

/// Drooping eye with a downward outer brow
fn eye_sad<C: Canvas>(canvas: &mut C, cx: i32) {
    let sx = FACE_X + cx - EYE_W / 2;
    let sy = FACE_Y + EYE_CY - EYE_H / 2 + 8;
    round_rect(canvas, sx, sy, EYE_W, EYE_H - 8, EYE_R, IRIS);
    thick_line(canvas, sx - 3, sy - 3, sx + EYE_W + 3, sy + 12, 5, IRIS);
}

/// Truncated eye with an inward-slanting brow
///
/// The brow slope flips between the left and right socket so both brows
/// point at the nose.
fn eye_angry<C: Canvas>(canvas: &mut C, cx: i32, is_left: bool) {
    let sx = FACE_X + cx - EYE_W / 2;
    let sy = FACE_Y + EYE_CY - EYE_H / 2 + 10;
    round_rect(canvas, sx, sy, EYE_W, EYE_H - 15, EYE_R - 3, IRIS);
    if is_left {
        thick_line(canvas, sx - 5, sy + 8, sx + EYE_W + 5, sy - 10, 6, IRIS);
    } else {
        thick_line(canvas, sx - 5, sy - 10, sx + EYE_W + 5, sy + 8, 6, IRIS);
    }
}

/// Dilated pupil: outer ring, dimmed disc, two highlights
fn eye_surprised<C: Canvas>(canvas: &mut C, cx: i32) {
    let x = FACE_X + cx;
    let y = FACE_Y + EYE_CY;
    fill_circle(canvas, x, y, EYE_H / 2 + 5, IRIS);
    fill_circle(canvas, x, y, EYE_H / 2 - 8, PUPIL_DIM);
    fill_circle(canvas, x - 8, y - 8, 7, HIGHLIGHT);
    fill_circle(canvas, x + 4, y + 4, 4, HIGHLIGHT);
}

/// Heart: two lobes plus a taper of shrinking horizontal runs
fn eye_heart<C: Canvas>(canvas: &mut C, cx: i32) {
    let x = FACE_X + cx;
    let y = FACE_Y + EYE_CY;
    let s = 18;
    fill_circle(canvas, x - s / 2 - 2, y - s / 3, s / 2 + 2, IRIS);
    fill_circle(canvas, x + s / 2 + 2, y - s / 3, s / 2 + 2, IRIS);
    for r in 0..s + 5 {
        let w = s + 5 - r;
        canvas.fill_rect(x - w, y - s / 3 + r, w * 2 + 1, 1, IRIS);
    }
}

/// Dizzy cross: two thick diagonals
fn eye_cross<C: Canvas>(canvas: &mut C, cx: i32) {
    let x = FACE_X + cx;
    let y = FACE_Y + EYE_CY;
    let s = EYE_H / 2 - 8;
    thick_line(canvas, x - s, y - s, x + s, y + s, 6, IRIS);
    thick_line(canvas, x + s, y - s, x - s, y + s, 6, IRIS);
}

/// Clear both sockets and draw `expr` with the given gaze offset
pub fn draw_expression<C: Canvas>(canvas: &mut C, expr: Expression, ox: i32, oy: i32) {
    clear_face(canvas);
    match expr {
        Expression::Normal => {
            eye_normal(canvas, LEFT_EYE_CX, ox, oy);
            eye_normal(canvas, RIGHT_EYE_CX, ox, oy);
        }
        Expression::Happy => {
            eye_happy(canvas, LEFT_EYE_CX);
            eye_happy(canvas, RIGHT_EYE_CX);
        }
        Expression::Sad => {
            eye_sad(canvas, LEFT_EYE_CX);
            eye_sad(canvas, RIGHT_EYE_CX);
        }
        Expression::Angry => {
            eye_angry(canvas, LEFT_EYE_CX, true);
            eye_angry(canvas, RIGHT_EYE_CX, false);
        }
        Expression::Surprised => {
            eye_surprised(canvas, LEFT_EYE_CX);
            eye_surprised(canvas, RIGHT_EYE_CX);
        }
        Expression::Sleepy => {
            eye_half(canvas, LEFT_EYE_CX, 30);
            eye_half(canvas, RIGHT_EYE_CX, 30);
        }
        Expression::WinkLeft => {
            eye_closed(canvas, LEFT_EYE_CX);
            eye_normal(canvas, RIGHT_EYE_CX, 0, 0);
        }
        Expression::WinkRight => {
            eye_normal(canvas, LEFT_EYE_CX, 0, 0);
            eye_closed(canvas, RIGHT_EYE_CX);
        }
        Expression::Blink => {
            eye_closed(canvas, LEFT_EYE_CX);
            eye_closed(canvas, RIGHT_EYE_CX);
        }
        Expression::Love => {
            eye_heart(canvas, LEFT_EYE_CX);
            eye_heart(canvas, RIGHT_EYE_CX);
        }
        Expression::Dizzy => {
            eye_cross(canvas, LEFT_EYE_CX);
            eye_cross(canvas, RIGHT_EYE_CX);
        }
        Expression::LookLeft => {
            eye_normal(canvas, LEFT_EYE_CX, -GAZE_SHIFT, 0);
            eye_normal(canvas, RIGHT_EYE_CX, -GAZE_SHIFT, 0);
        }
        Expression::LookRight => {
            eye_normal(canvas, LEFT_EYE_CX, GAZE_SHIFT, 0);
            eye_normal(canvas, RIGHT_EYE_CX, GAZE_SHIFT, 0);
        }
        Expression::LookUp => {
            eye_normal(canvas, LEFT_EYE_CX, 0, -GAZE_SHIFT);
            eye_normal(canvas, RIGHT_EYE_CX, 0, -GAZE_SHIFT);
        }
        Expression::LookDown => {
            eye_normal(canvas, LEFT_EYE_CX, 0, GAZE_SHIFT);
            eye_normal(canvas, RIGHT_EYE_CX, 0, GAZE_SHIFT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_frame::Frame;
    use embedded_graphics_core::pixelcolor::raw::RawU16;
    use embedded_graphics_core::prelude::RawData;

    const ALL: [Expression; 15] = [
        Expression::Normal,
        Expression::Happy,
        Expression::Sad,
        Expression::Angry,
        Expression::Surprised,
        Expression::Sleepy,
        Expression::WinkLeft,
        Expression::WinkRight,
        Expression::Blink,
        Expression::Love,
        Expression::Dizzy,
        Expression::LookLeft,
        Expression::LookRight,
        Expression::LookUp,
        Expression::LookDown,
    ];

    #[test]
    fn palette_matches_reference_values() {
        assert_eq!(RawU16::from(IRIS).into_inner(), 0x07E0);
        assert_eq!(RawU16::from(HIGHLIGHT).into_inner(), 0xAFE0);
        assert_eq!(RawU16::from(PUPIL_DIM).into_inner(), 0x0320);
        assert_eq!(RawU16::from(BACKGROUND).into_inner(), 0x0000);
    }

    #[test]
    fn drawing_twice_equals_drawing_once() {
        for expr in ALL {
            let mut once = Frame::new();
            draw_expression(&mut once, expr, 0, 0);

            let mut twice = Frame::new();
            draw_expression(&mut twice, expr, 0, 0);
            draw_expression(&mut twice, expr, 0, 0);

            assert!(once == twice, "{:?} not idempotent", expr);
        }
    }

    #[test]
    fn previous_expression_leaves_no_residue() {
        // Happy drawn over normal must pixel-match happy drawn fresh:
        // the socket clear has to wipe the rounded outline completely.
        let mut fresh = Frame::new();
        draw_expression(&mut fresh, Expression::Happy, 0, 0);

        let mut over = Frame::new();
        draw_expression(&mut over, Expression::Normal, 0, 0);
        draw_expression(&mut over, Expression::Happy, 0, 0);

        assert!(fresh == over);

        // And for every other pair starting from the largest expression
        for expr in ALL {
            let mut fresh = Frame::new();
            draw_expression(&mut fresh, expr, 0, 0);

            let mut over = Frame::new();
            draw_expression(&mut over, Expression::Surprised, 0, 0);
            draw_expression(&mut over, expr, 0, 0);

            assert!(fresh == over, "residue under {:?}", expr);
        }
    }

    #[test]
    fn every_expression_stays_inside_the_face_region() {
        for expr in ALL {
            let mut frame = Frame::new();
            draw_expression(&mut frame, expr, 0, 0);

            for y in 0..320 {
                for x in 0..240 {
                    let inside = x >= FACE_X
                        && x < FACE_X + FACE_W
                        && y >= FACE_Y
                        && y < FACE_Y + FACE_H;
                    if !inside {
                        assert_eq!(
                            frame.get(x, y),
                            0,
                            "{:?} painted outside face at ({}, {})",
                            expr,
                            x,
                            y
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn highlight_clamps_for_extreme_gaze_offsets() {
        let sx = FACE_X + LEFT_EYE_CX - EYE_W / 2;
        let sy = FACE_Y + EYE_CY - EYE_H / 2;

        let mut frame = Frame::new();
        draw_expression(&mut frame, Expression::Normal, -100, -100);

        // The highlight disc must not escape the outline's bounding box
        for y in 0..320 {
            for x in 0..240 {
                if frame.is_painted(x, y, HIGHLIGHT) {
                    assert!(x >= sx && y >= sy, "highlight leaked to ({}, {})", x, y);
                }
            }
        }
    }

    #[test]
    fn sleepy_collapses_to_closed_below_minimum_height() {
        // 10% of 70 px is 7 px, under the 10 px floor
        let mut sliver = Frame::new();
        eye_half(&mut sliver, LEFT_EYE_CX, 10);

        let mut closed = Frame::new();
        eye_closed(&mut closed, LEFT_EYE_CX);

        assert!(sliver == closed);
    }

    #[test]
    fn wink_left_closes_only_the_left_eye() {
        let mut frame = Frame::new();
        draw_expression(&mut frame, Expression::WinkLeft, 0, 0);

        // Left socket: no pixel above the eyelid bar
        let left_sx = FACE_X + LEFT_EYE_CX - EYE_W / 2;
        let bar_top = FACE_Y + EYE_CY - 3;
        for y in FACE_Y..bar_top {
            for x in left_sx..left_sx + EYE_W {
                assert_eq!(frame.get(x, y), 0);
            }
        }

        // Right socket: open outline reaches well above the centerline
        let right_sx = FACE_X + RIGHT_EYE_CX - EYE_W / 2;
        let outline_top = FACE_Y + EYE_CY - EYE_H / 2;
        assert!(frame.is_painted(right_sx + EYE_W / 2, outline_top, IRIS));
    }
}
