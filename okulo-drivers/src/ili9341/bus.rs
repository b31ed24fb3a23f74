//! 8-bit 8080-style parallel bus
//!
//! The eight data lines are scattered across several GPIO ports, so a byte
//! is presented by computing one set/clear mask pair per port and applying
//! each port in a single atomic write. Per-bit toggling would both glitch
//! the lines mid-byte and blow the frame budget.
//!
//! Strobe contract: data lines settle first, then WR pulses low -> hold ->
//! high; the controller samples on the rising edge. There is no
//! acknowledgement - timing is the whole protocol.

use okulo_hal::{PinLoc, Port, PortWriter};

/// Where every bus line lives
///
/// `data[i]` carries bit `i` of each byte. `dc` selects command (low) or
/// data (high); `rd` is unused for writing and parked high.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusPinout {
    /// Data lines D0-D7
    pub data: [PinLoc; 8],
    /// Chip select, active low
    pub cs: PinLoc,
    /// Data/command select: low = command, high = data
    pub dc: PinLoc,
    /// Write strobe, active low
    pub wr: PinLoc,
    /// Read strobe, parked high (write-only bus)
    pub rd: PinLoc,
    /// Controller reset, active low
    pub rst: PinLoc,
}

/// Write-only parallel bus to the display controller
///
/// Every public write leaves the bus idle (CS high) on return; the next
/// caller assumes that invariant without negotiation.
pub struct ParallelBus<W> {
    pub(crate) writer: W,
    pins: BusPinout,
}

impl<W: PortWriter> ParallelBus<W> {
    pub fn new(writer: W, pins: BusPinout) -> Self {
        Self { writer, pins }
    }

    /// Drive all control lines to their idle levels (CS, WR, RD high)
    pub fn idle(&mut self) {
        self.writer.set_pin(self.pins.rd);
        self.writer.set_pin(self.pins.wr);
        self.writer.set_pin(self.pins.cs);
    }

    /// Assert the controller reset line (active low)
    pub fn reset_low(&mut self) {
        self.writer.clear_pin(self.pins.rst);
    }

    /// Release the controller reset line
    pub fn reset_high(&mut self) {
        self.writer.set_pin(self.pins.rst);
    }

    /// Present one byte on the data lines and pulse the write strobe
    ///
    /// All eight line states land before WR falls: one masked apply per
    /// involved port, ports in fixed order. The strobe hold keeps the low
    /// phase at or above one instruction.
    fn write_byte(&mut self, value: u8) {
        let mut set = [0u16; 5];
        let mut clear = [0u16; 5];

        for (bit, pin) in self.pins.data.iter().enumerate() {
            let i = pin.port.index();
            if value & (1 << bit) != 0 {
                set[i] |= pin.mask();
            } else {
                clear[i] |= pin.mask();
            }
        }

        for port in Port::ALL {
            let i = port.index();
            if set[i] != 0 || clear[i] != 0 {
                self.writer.apply(port, set[i], clear[i]);
            }
        }

        self.writer.clear_pin(self.pins.wr);
        self.writer.strobe_hold();
        self.writer.set_pin(self.pins.wr);
    }

    /// Send a command byte (DC low), CS held for the full byte
    pub fn write_command(&mut self, cmd: u8) {
        self.writer.clear_pin(self.pins.cs);
        self.writer.clear_pin(self.pins.dc);
        self.write_byte(cmd);
        self.writer.set_pin(self.pins.cs);
    }

    /// Send a single data byte (DC high)
    pub fn write_data(&mut self, data: u8) {
        self.writer.clear_pin(self.pins.cs);
        self.writer.set_pin(self.pins.dc);
        self.write_byte(data);
        self.writer.set_pin(self.pins.cs);
    }

    /// Send a run of data bytes under one chip-select assertion
    pub fn write_data_run(&mut self, bytes: &[u8]) {
        self.writer.clear_pin(self.pins.cs);
        self.writer.set_pin(self.pins.dc);
        for &b in bytes {
            self.write_byte(b);
        }
        self.writer.set_pin(self.pins.cs);
    }

    /// Send one 16-bit pixel, most-significant byte first
    pub fn write_pixel(&mut self, color: u16) {
        self.write_data((color >> 8) as u8);
        self.write_data(color as u8);
    }

    /// Stream `count` copies of a 16-bit pixel under one chip-select
    ///
    /// This is the bulk-fill path: the addressing window auto-increments,
    /// so the same two bytes repeat once per pixel in row-major order.
    pub fn write_pixel_run(&mut self, color: u16, count: u32) {
        let hi = (color >> 8) as u8;
        let lo = color as u8;

        self.writer.clear_pin(self.pins.cs);
        self.writer.set_pin(self.pins.dc);
        for _ in 0..count {
            self.write_byte(hi);
            self.write_byte(lo);
        }
        self.writer.set_pin(self.pins.cs);
    }
}
