//! BSRR-based port writer
//!
//! The F1 GPIO BSRR register applies `set` (low half) and `clear` (high
//! half) in one bus write, which is exactly the [`PortWriter`] contract.
//! Pins must already be configured as push-pull outputs (the firmware does
//! this once at bring-up through the embassy GPIO API).

use embassy_stm32::pac;

use okulo_hal::{Port, PortWriter};

/// Port writer backed by direct BSRR stores
///
/// Zero-sized: the GPIO blocks are memory-mapped and the display pins are
/// owned for the lifetime of the process.
pub struct BsrrWriter;

fn block(port: Port) -> pac::gpio::Gpio {
    match port {
        Port::A => pac::GPIOA,
        Port::B => pac::GPIOB,
        Port::C => pac::GPIOC,
        Port::D => pac::GPIOD,
        Port::E => pac::GPIOE,
    }
}

impl PortWriter for BsrrWriter {
    fn apply(&mut self, port: Port, set: u16, clear: u16) {
        let bits = u32::from(set) | (u32::from(clear) << 16);
        block(port).bsrr().write_value(pac::gpio::regs::Bsrr(bits));
    }

    fn strobe_hold(&mut self) {
        // One instruction keeps the WR low phase above the controller's
        // minimum pulse width at 64 MHz.
        cortex_m::asm::nop();
    }
}
