//! In-memory pixel grid used by host tests
//!
//! Mirrors the real panel: 240x320, RGB565, opaque overwrite, clipping via
//! the same [`clip_rect`] routine the driver uses.

use embedded_graphics_core::pixelcolor::raw::RawU16;
use embedded_graphics_core::pixelcolor::Rgb565;
use embedded_graphics_core::prelude::RawData;

use crate::canvas::{clip_rect, Canvas};

pub const WIDTH: u16 = 240;
pub const HEIGHT: u16 = 320;

#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    px: Vec<u16>,
}

impl Frame {
    pub fn new() -> Self {
        Self {
            px: vec![0; usize::from(WIDTH) * usize::from(HEIGHT)],
        }
    }

    pub fn get(&self, x: i32, y: i32) -> u16 {
        assert!(x >= 0 && x < i32::from(WIDTH) && y >= 0 && y < i32::from(HEIGHT));
        self.px[y as usize * usize::from(WIDTH) + x as usize]
    }

    pub fn is_painted(&self, x: i32, y: i32, color: Rgb565) -> bool {
        self.get(x, y) == RawU16::from(color).into_inner()
    }

    /// Count pixels not equal to `background`
    pub fn painted_count(&self, background: Rgb565) -> usize {
        let bg = RawU16::from(background).into_inner();
        self.px.iter().filter(|&&p| p != bg).count()
    }
}

impl Canvas for Frame {
    fn size(&self) -> (u16, u16) {
        (WIDTH, HEIGHT)
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb565) {
        let Some((x, y, w, h)) = clip_rect(x, y, w, h, (WIDTH, HEIGHT)) else {
            return;
        };
        let raw = RawU16::from(color).into_inner();
        for row in y..y + h {
            let start = usize::from(row) * usize::from(WIDTH) + usize::from(x);
            self.px[start..start + usize::from(w)].fill(raw);
        }
    }
}
