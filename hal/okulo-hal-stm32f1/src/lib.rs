//! STM32F1 implementations of the Okulo HAL traits
//!
//! Maps the [`okulo_hal::PortWriter`] capability onto the F1 GPIO BSRR
//! registers (one 32-bit write sets and clears any pin subset atomically)
//! and the [`okulo_hal::Clock`] trait onto the embassy-time tick.

#![no_std]

pub mod gpio;
pub mod time;

pub use gpio::BsrrWriter;
pub use time::TickClock;
