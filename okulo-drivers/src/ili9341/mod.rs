//! ILI9341 display controller over the parallel bus
//!
//! Addressing protocol and bulk pixel-fill paths for a fixed 240x320
//! portrait panel. The bring-up script is an order-sensitive contract with
//! this controller model - reproduce it byte-for-byte and delay-for-delay,
//! never "optimize" it.

mod bus;

pub use bus::{BusPinout, ParallelBus};

use embedded_graphics_core::pixelcolor::raw::RawU16;
use embedded_graphics_core::pixelcolor::Rgb565;
use embedded_graphics_core::prelude::RawData;
use embedded_hal::delay::DelayNs;

use okulo_core::canvas::{clip_rect, Canvas};
use okulo_hal::PortWriter;

/// Panel width in pixels
pub const WIDTH: u16 = 240;
/// Panel height in pixels
pub const HEIGHT: u16 = 320;

/// ILI9341 command bytes used by this driver
mod cmd {
    /// Software Reset
    pub const SWRESET: u8 = 0x01;
    /// Sleep Out
    pub const SLPOUT: u8 = 0x11;
    /// Display On
    pub const DISPON: u8 = 0x29;
    /// Column Address Set
    pub const CASET: u8 = 0x2A;
    /// Page Address Set
    pub const PASET: u8 = 0x2B;
    /// Memory Write - leaves the controller accepting a raw pixel stream
    pub const RAMWR: u8 = 0x2C;
}

/// One step of the bring-up script
enum InitOp {
    /// Command byte followed by its parameter bytes
    Cmd(u8, &'static [u8]),
    /// Blocking settle time in milliseconds
    Settle(u32),
}

/// Vendor bring-up script, after hardware reset
///
/// Power, VCOM, gamma, 16-bit pixel format, portrait memory access, frame
/// rate and display function registers, exactly as the panel vendor
/// specifies for this module.
const BRING_UP: &[InitOp] = &[
    InitOp::Cmd(cmd::SWRESET, &[]),
    InitOp::Settle(100),
    InitOp::Cmd(cmd::SLPOUT, &[]),
    InitOp::Settle(120),
    InitOp::Cmd(0xCF, &[0x00, 0xC1, 0x30]), // Power control B
    InitOp::Cmd(0xED, &[0x64, 0x03, 0x12, 0x81]), // Power-on sequence control
    InitOp::Cmd(0xE8, &[0x85, 0x00, 0x78]), // Driver timing control A
    InitOp::Cmd(0xCB, &[0x39, 0x2C, 0x00, 0x34, 0x02]), // Power control A
    InitOp::Cmd(0xF7, &[0x20]),             // Pump ratio control
    InitOp::Cmd(0xEA, &[0x00, 0x00]),       // Driver timing control B
    InitOp::Cmd(0xC0, &[0x23]),             // Power control 1
    InitOp::Cmd(0xC1, &[0x10]),             // Power control 2
    InitOp::Cmd(0xC5, &[0x3E, 0x28]),       // VCOM control 1
    InitOp::Cmd(0xC7, &[0x86]),             // VCOM control 2
    InitOp::Cmd(0x36, &[0x48]),             // Memory access: portrait, BGR
    InitOp::Cmd(0x3A, &[0x55]),             // Pixel format: 16-bit
    InitOp::Cmd(0xB1, &[0x00, 0x18]),       // Frame rate control
    InitOp::Cmd(0xB6, &[0x08, 0x82, 0x27]), // Display function control
    InitOp::Cmd(0xF2, &[0x00]),             // 3-gamma function disable
    InitOp::Cmd(0x26, &[0x01]),             // Gamma curve select
    InitOp::Cmd(
        0xE0, // Positive gamma
        &[
            0x0F, 0x31, 0x2B, 0x0C, 0x0E, 0x08, 0x4E, 0xF1, 0x37, 0x07, 0x10, 0x03, 0x0E, 0x09,
            0x00,
        ],
    ),
    InitOp::Cmd(
        0xE1, // Negative gamma
        &[
            0x00, 0x0E, 0x14, 0x03, 0x11, 0x07, 0x31, 0xC1, 0x48, 0x08, 0x0F, 0x0C, 0x31, 0x36,
            0x0F,
        ],
    ),
    InitOp::Cmd(cmd::SLPOUT, &[]),
    InitOp::Settle(120),
    InitOp::Cmd(cmd::DISPON, &[]),
    InitOp::Settle(50),
];

/// ILI9341 panel behind an 8-bit parallel bus
///
/// Implements [`Canvas`], so the rasterizer and everything above it draws
/// through this type without knowing about windows or strobes.
pub struct Ili9341<W, D> {
    bus: ParallelBus<W>,
    delay: D,
}

impl<W: PortWriter, D: DelayNs> Ili9341<W, D> {
    /// Wrap a port writer and pin map; call [`init`](Self::init) before
    /// drawing.
    pub fn new(writer: W, pins: BusPinout, delay: D) -> Self {
        Self {
            bus: ParallelBus::new(writer, pins),
            delay,
        }
    }

    /// Hardware reset plus the full vendor bring-up script
    pub fn init(&mut self) {
        self.bus.idle();

        self.bus.reset_low();
        self.delay.delay_ms(50);
        self.bus.reset_high();
        self.delay.delay_ms(50);

        for op in BRING_UP {
            match op {
                InitOp::Cmd(code, params) => {
                    self.bus.write_command(*code);
                    if !params.is_empty() {
                        self.bus.write_data_run(params);
                    }
                }
                InitOp::Settle(ms) => self.delay.delay_ms(*ms),
            }
        }
    }

    /// Select the addressing window and enter memory-write mode
    ///
    /// Callers must pass a window fully inside the panel with `x1 <= x2`
    /// and `y1 <= y2`; [`fill_rect`](Canvas::fill_rect) clips before
    /// calling here.
    pub fn set_window(&mut self, x1: u16, y1: u16, x2: u16, y2: u16) {
        self.bus.write_command(cmd::CASET);
        self.bus
            .write_data_run(&[(x1 >> 8) as u8, x1 as u8, (x2 >> 8) as u8, x2 as u8]);
        self.bus.write_command(cmd::PASET);
        self.bus
            .write_data_run(&[(y1 >> 8) as u8, y1 as u8, (y2 >> 8) as u8, y2 as u8]);
        self.bus.write_command(cmd::RAMWR);
    }
}

impl<W: PortWriter, D: DelayNs> Canvas for Ili9341<W, D> {
    fn size(&self) -> (u16, u16) {
        (WIDTH, HEIGHT)
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb565) {
        let Some((x, y, w, h)) = clip_rect(x, y, w, h, (WIDTH, HEIGHT)) else {
            return;
        };
        self.set_window(x, y, x + w - 1, y + h - 1);
        self.bus
            .write_pixel_run(RawU16::from(color).into_inner(), u32::from(w) * u32::from(h));
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use okulo_hal::{PinLoc, Port, PortWriter};

    use super::BusPinout;

    /// Reference board pin map: data and control lines spread over three
    /// ports, exactly as the production wiring.
    pub fn reference_pinout() -> BusPinout {
        BusPinout {
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
        }
    }

    /// Everything a `PortWriter` ever saw
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Event {
        /// apply(port, set, clear)
        Apply(Port, u16, u16),
        /// strobe_hold()
        Hold,
    }

    /// Recording mock: keeps the raw apply stream and can replay it as
    /// decoded command/data bytes sampled at each WR rising edge.
    pub struct RecordingPort {
        pub events: Vec<Event>,
        pins: BusPinout,
    }

    impl RecordingPort {
        pub fn new() -> Self {
            Self {
                events: Vec::new(),
                pins: reference_pinout(),
            }
        }

        fn level_after_replay(&self, pin: PinLoc) -> bool {
            let mut levels = [0u16; 5];
            for e in &self.events {
                if let Event::Apply(p, set, clear) = e {
                    levels[p.index()] = (levels[p.index()] | set) & !clear;
                }
            }
            levels[pin.port.index()] & pin.mask() != 0
        }

        /// Is the pin currently driven high?
        pub fn is_high(&self, pin: PinLoc) -> bool {
            self.level_after_replay(pin)
        }

        /// Replay the stream, sampling the data lines at every WR rising
        /// edge. Returns `(dc_was_high, byte)` per strobe and checks that
        /// chip select was asserted for every sample.
        pub fn decoded(&self) -> Vec<(bool, u8)> {
            let pins = self.pins;
            let mut levels = [u16::MAX; 5]; // control lines idle high
            let mut out = Vec::new();

            let level = |levels: &[u16; 5], pin: PinLoc| levels[pin.port.index()] & pin.mask() != 0;

            for e in &self.events {
                let Event::Apply(p, set, clear) = *e else {
                    continue;
                };
                assert_eq!(set & clear, 0, "pin in both masks");

                let wr_was_low = !level(&levels, pins.wr);
                levels[p.index()] = (levels[p.index()] | set) & !clear;

                if p == pins.wr.port && set & pins.wr.mask() != 0 && wr_was_low {
                    assert!(!level(&levels, pins.cs), "strobe with CS deasserted");
                    let mut byte = 0u8;
                    for (bit, d) in pins.data.iter().enumerate() {
                        if level(&levels, *d) {
                            byte |= 1 << bit;
                        }
                    }
                    out.push((level(&levels, pins.dc), byte));
                }
            }
            out
        }

        /// Decoded data bytes only (DC high samples)
        pub fn decoded_data(&self) -> Vec<u8> {
            self.decoded()
                .into_iter()
                .filter_map(|(is_data, b)| is_data.then_some(b))
                .collect()
        }
    }

    impl PortWriter for RecordingPort {
        fn apply(&mut self, port: Port, set: u16, clear: u16) {
            self.events.push(Event::Apply(port, set, clear));
        }

        fn strobe_hold(&mut self) {
            self.events.push(Event::Hold);
        }
    }

    /// Delay mock recording each requested hold in milliseconds
    pub struct RecordingDelay {
        pub holds_ms: Vec<u32>,
    }

    impl RecordingDelay {
        pub fn new() -> Self {
            Self {
                holds_ms: Vec::new(),
            }
        }
    }

    impl embedded_hal::delay::DelayNs for RecordingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.holds_ms.push(ns / 1_000_000);
        }
    }
}
