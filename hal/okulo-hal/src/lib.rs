//! Okulo Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the display driver and animation
//! layer are written against, so the same code runs on real GPIO ports and
//! on recording mocks in host tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (okulo-firmware)           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  okulo-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ okulo-hal-    │       │  test mocks   │
//! │   stm32f1     │       │  (host only)  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::PortWriter`] - batched set/clear writes to whole GPIO ports
//! - [`time::Clock`] - monotonic millisecond tick source

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod time;

// Re-export key traits at crate root for convenience
pub use gpio::{PinLoc, Port, PortWriter};
pub use time::Clock;
