//! Board-agnostic core logic for the robot face firmware
//!
//! This crate contains everything that does not depend on the physical
//! display bus:
//!
//! - [`canvas`] - the write-only drawing surface trait and shared clipping
//! - [`raster`] - geometric primitives expressed as clipped rectangle fills
//! - [`face`] - eye expressions composed from the primitives
//! - [`animate`] - the cooperative blink/glance/demo scheduler
//!
//! All drawing is opaque 16-bit RGB565 overwrite; nothing ever reads pixels
//! back. The whole crate is deterministic given a canvas, a clock, and an
//! RNG, so it is tested on the host against an in-memory pixel grid.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod animate;
pub mod canvas;
pub mod face;
pub mod raster;

#[cfg(test)]
pub(crate) mod test_frame;

pub use animate::Animator;
pub use canvas::Canvas;
pub use face::Expression;
