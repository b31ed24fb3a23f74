//! GPIO pin-group abstractions
//!
//! The parallel display bus scatters its data lines across several GPIO
//! ports. To present a full byte at once, a port must accept one masked
//! set/clear write applied atomically (BSRR semantics on STM32), never
//! per-bit toggling. [`PortWriter`] is that capability; chip HALs implement
//! it, and host tests implement it with a recorder.

/// GPIO port identifier
///
/// Ports are independently writable groups of up to 16 pins. The reference
/// board only wires ports A-C to the display, but F1-series parts expose
/// through E.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    A,
    B,
    C,
    D,
    E,
}

impl Port {
    /// All ports in fixed application order
    pub const ALL: [Port; 5] = [Port::A, Port::B, Port::C, Port::D, Port::E];

    /// Dense index for per-port accumulator arrays
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A single pin location: port plus bit index (0-15)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinLoc {
    /// Port the pin lives on
    pub port: Port,
    /// Bit index within the port (0-15)
    pub pin: u8,
}

impl PinLoc {
    /// Create a pin location
    pub const fn new(port: Port, pin: u8) -> Self {
        Self { port, pin }
    }

    /// Bitmask for this pin within its port register
    pub const fn mask(self) -> u16 {
        1 << self.pin
    }
}

/// Batched GPIO port writer
///
/// One `apply` call changes any subset of a port's pins in a single
/// operation: pins in `set` go high, pins in `clear` go low, everything
/// else is untouched. A pin must not appear in both masks.
pub trait PortWriter {
    /// Apply a set/clear mask pair to one port as a single atomic write
    fn apply(&mut self, port: Port, set: u16, clear: u16);

    /// Minimum hold between strobe edges
    ///
    /// The display samples data on the rising write-strobe edge; the strobe
    /// must stay low for at least one instruction. Chip implementations
    /// issue a `nop` here. The default is empty, which is only correct for
    /// mocks and for ports slow enough that `apply` itself dominates.
    fn strobe_hold(&mut self) {}

    /// Drive a single pin high
    fn set_pin(&mut self, pin: PinLoc) {
        self.apply(pin.port, pin.mask(), 0);
    }

    /// Drive a single pin low
    fn clear_pin(&mut self, pin: PinLoc) {
        self.apply(pin.port, 0, pin.mask());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct LastApply {
        last: Option<(Port, u16, u16)>,
    }

    impl PortWriter for LastApply {
        fn apply(&mut self, port: Port, set: u16, clear: u16) {
            self.last = Some((port, set, clear));
        }
    }

    #[test]
    fn pin_mask_is_single_bit() {
        assert_eq!(PinLoc::new(Port::A, 0).mask(), 0x0001);
        assert_eq!(PinLoc::new(Port::B, 10).mask(), 0x0400);
        assert_eq!(PinLoc::new(Port::C, 15).mask(), 0x8000);
    }

    #[test]
    fn set_and_clear_pin_use_one_sided_masks() {
        let mut w = LastApply { last: None };

        w.set_pin(PinLoc::new(Port::B, 3));
        assert_eq!(w.last, Some((Port::B, 0x0008, 0)));

        w.clear_pin(PinLoc::new(Port::A, 4));
        assert_eq!(w.last, Some((Port::A, 0, 0x0010)));
    }
}
