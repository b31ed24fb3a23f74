//! Okulo - Robot Face Firmware
//!
//! Main firmware binary for STM32F103-based face controllers. Drives an
//! ILI9341 panel over an 8-bit parallel bus and animates a pair of eyes.
//!
//! Named after the Esperanto "okulo" (eye) - the whole machine exists to
//! draw two of them.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Delay, Instant, Timer};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use {defmt_rtt as _, panic_probe as _};

use okulo_core::face::BACKGROUND;
use okulo_core::{Animator, Canvas, Expression};
use okulo_drivers::Ili9341;
use okulo_hal_stm32f1::{BsrrWriter, TickClock};

mod board;

/// Run the scripted expression showcase instead of autonomous idling
///
/// The showcase cycles every expression in a fixed order. Autonomous mode
/// sits on Normal and lets the scheduler blink and glance on jittered
/// timers, which is what a deployed face runs.
const DEMO_MODE: bool = true;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let mut config = embassy_stm32::Config::default();
    {
        use embassy_stm32::rcc::*;
        // HSI/2 (4 MHz) x 16 = 64 MHz system clock, APB1 capped at 32 MHz
        config.rcc.pll = Some(Pll {
            src: PllSource::HSI_DIV2,
            prediv: PllPreDiv::DIV1,
            mul: PllMul::MUL16,
        });
        config.rcc.sys = Sysclk::PLL1_P;
        config.rcc.ahb_pre = AHBPrescaler::DIV1;
        config.rcc.apb1_pre = APBPrescaler::DIV2;
        config.rcc.apb2_pre = APBPrescaler::DIV1;
    }
    let p = embassy_stm32::init(config);
    info!("Okulo firmware starting...");

    board::claim_display_pins(p);
    info!("Display pins configured");

    let mut display = Ili9341::new(BsrrWriter, board::DISPLAY_PINS, Delay);
    display.init();
    display.fill_screen(BACKGROUND);
    info!("Display initialized");

    // Boot time seeds the jitter; every power-up blinks differently
    let seed = Instant::now().as_ticks();
    let mut face = Animator::new(TickClock, Delay, SmallRng::seed_from_u64(seed));

    face.set_expression(&mut display, Expression::Normal);
    Timer::after_millis(500).await;
    info!("Face up, entering {} mode", if DEMO_MODE { "demo" } else { "idle" });

    loop {
        if DEMO_MODE {
            face.run_demo(&mut display);
        } else {
            face.idle_tick(&mut display);
            // The scheduler is a poll, not a wait; yield between ticks so
            // the executor's timer queue keeps running
            Timer::after_millis(20).await;
        }
    }
}
