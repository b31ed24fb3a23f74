//! Monotonic time source
//!
//! The animation layer only needs millisecond resolution and only ever
//! compares elapsed spans, so the tick is a bare `u32` that wraps after
//! ~49 days. Consumers must diff with `wrapping_sub`.

/// Monotonic millisecond tick reader
pub trait Clock {
    /// Milliseconds since some fixed epoch (typically boot)
    fn now_ms(&self) -> u32;

    /// Milliseconds elapsed since `earlier`, wrap-safe
    fn elapsed_since(&self, earlier: u32) -> u32 {
        self.now_ms().wrapping_sub(earlier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(u32);

    impl Clock for Fixed {
        fn now_ms(&self) -> u32 {
            self.0
        }
    }

    #[test]
    fn elapsed_handles_tick_wraparound() {
        let clock = Fixed(100);
        assert_eq!(clock.elapsed_since(u32::MAX - 49), 150);
    }

    #[test]
    fn elapsed_is_zero_for_frozen_clock() {
        let clock = Fixed(12_345);
        assert_eq!(clock.elapsed_since(12_345), 0);
    }
}
