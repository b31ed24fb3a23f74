//! Display driver implementations
//!
//! This crate provides the concrete wire-level driver behind the
//! `okulo-core` canvas abstraction:
//!
//! - ILI9341 over an 8-bit 8080-style parallel bus ([`ili9341`])
//!
//! The bus has no read path and no acknowledgement; correctness rests
//! entirely on pin ordering and strobe timing, which is why the bus layer
//! is written against the recordable `PortWriter` capability instead of
//! raw registers.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod ili9341;

pub use ili9341::{BusPinout, Ili9341, ParallelBus};
