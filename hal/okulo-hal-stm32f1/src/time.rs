//! embassy-time backed millisecond clock

use okulo_hal::Clock;

/// Monotonic millisecond clock from the embassy time driver
///
/// Truncates to `u32`; the animation layer diffs with wrapping arithmetic
/// so the ~49-day rollover is harmless.
pub struct TickClock;

impl Clock for TickClock {
    fn now_ms(&self) -> u32 {
        embassy_time::Instant::now().as_millis() as u32
    }
}
