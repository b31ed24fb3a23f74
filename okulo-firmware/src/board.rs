//! Board wiring for the STM32F103C8 face controller
//!
//! The display rides on whatever pins the breakout happened to reach, so
//! the eight data lines are scattered across ports A, B and C. The bus
//! driver works from the [`BusPinout`] map; nothing here is ordered.

use core::mem::forget;

use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_stm32::Peripherals;

use okulo_drivers::BusPinout;
use okulo_hal::{PinLoc, Port};

/// Display wiring: D0-D7 plus the five control lines
pub const DISPLAY_PINS: BusPinout = BusPinout {
    data: [
        PinLoc::new(Port::A, 9),  // D0
        PinLoc::new(Port::C, 7),  // D1
        PinLoc::new(Port::A, 10), // D2
        PinLoc::new(Port::B, 3),  // D3
        PinLoc::new(Port::B, 5),  // D4
        PinLoc::new(Port::B, 4),  // D5
        PinLoc::new(Port::B, 10), // D6
        PinLoc::new(Port::A, 8),  // D7
    ],
    cs: PinLoc::new(Port::B, 0),
    dc: PinLoc::new(Port::A, 4),
    wr: PinLoc::new(Port::A, 1),
    rd: PinLoc::new(Port::A, 0),
    rst: PinLoc::new(Port::C, 1),
};

/// Configure every display pin as a push-pull output and leave it that way
///
/// The bus driver toggles pins through raw BSRR writes, so the embassy pin
/// objects only exist to latch the output mode. They are forgotten rather
/// than held: dropping one would put the pin back into analog mode mid-frame.
///
/// Initial levels match the bus idle state: control lines high (all strobes
/// are active-low), reset held low until the driver releases it, data lines
/// low.
pub fn claim_display_pins(p: Peripherals) {
    // Data lines D0-D7
    forget(Output::new(p.PA9, Level::Low, Speed::High));
    forget(Output::new(p.PC7, Level::Low, Speed::High));
    forget(Output::new(p.PA10, Level::Low, Speed::High));
    forget(Output::new(p.PB3, Level::Low, Speed::High));
    forget(Output::new(p.PB5, Level::Low, Speed::High));
    forget(Output::new(p.PB4, Level::Low, Speed::High));
    forget(Output::new(p.PB10, Level::Low, Speed::High));
    forget(Output::new(p.PA8, Level::Low, Speed::High));

    // Control lines
    forget(Output::new(p.PB0, Level::High, Speed::High)); // CS
    forget(Output::new(p.PA4, Level::High, Speed::High)); // DC
    forget(Output::new(p.PA1, Level::High, Speed::High)); // WR
    forget(Output::new(p.PA0, Level::High, Speed::High)); // RD
    forget(Output::new(p.PC1, Level::Low, Speed::High)); // RST
}
