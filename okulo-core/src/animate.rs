//! Cooperative animation scheduler
//!
//! One [`Animator`] owns the persistent current expression and the two idle
//! timers. Transient animations (blink, wink, look-around) run to completion
//! inside their call - pacing is a blocking delay, and only this layer ever
//! touches time or randomness. The rasterizer and bus below stay pure.

use embedded_hal::delay::DelayNs;
use rand_core::RngCore;

use okulo_hal::Clock;

use crate::canvas::Canvas;
use crate::face::{
    clear_face, draw_expression, eye_closed, eye_half, eye_normal, Expression, LEFT_EYE_CX,
    RIGHT_EYE_CX,
};

/// Minimum idle time before a blink may fire
const BLINK_MIN_MS: u32 = 2_500;
/// Random jitter added to the blink minimum
const BLINK_JITTER_MS: u32 = 2_000;
/// Minimum idle time before a random action may fire
const ACTION_MIN_MS: u32 = 6_000;
/// Random jitter added to the action minimum
const ACTION_JITTER_MS: u32 = 4_000;

/// How long the eyes stay fully shut mid-blink
const BLINK_CLOSED_MS: u32 = 40;
/// How long a wink holds before resetting
const WINK_HOLD_MS: u32 = 180;
/// Hold on each side of a look-around glance
const LOOK_HOLD_MS: u32 = 280;
/// Pause at center between the two glances
const LOOK_CENTER_MS: u32 = 80;
/// Hold after an idle-driver glance
const IDLE_GLANCE_MS: u32 = 300;

/// Animation scheduler
///
/// Owns the current expression and the blink/action timers; generic over
/// the platform tick source, blocking delay, and jitter RNG so host tests
/// can drive it with mocks.
pub struct Animator<K, D, R> {
    clock: K,
    delay: D,
    rng: R,
    current: Expression,
    last_blink: u32,
    last_action: u32,
}

impl<K: Clock, D: DelayNs, R: RngCore> Animator<K, D, R> {
    /// Create an animator; the current expression starts at `Normal`
    pub fn new(clock: K, delay: D, rng: R) -> Self {
        Self {
            clock,
            delay,
            rng,
            current: Expression::Normal,
            last_blink: 0,
            last_action: 0,
        }
    }

    /// The persistent current expression
    pub fn current(&self) -> Expression {
        self.current
    }

    /// Set and immediately draw a new persistent expression
    pub fn set_expression<C: Canvas>(&mut self, canvas: &mut C, expr: Expression) {
        self.current = expr;
        draw_expression(canvas, expr, 0, 0);
    }

    /// Blink both eyes, then restore whatever expression was current
    ///
    /// The persistent state is never mutated by a blink.
    pub fn blink<C: Canvas>(&mut self, canvas: &mut C) {
        clear_face(canvas);
        eye_half(canvas, LEFT_EYE_CX, 50);
        eye_half(canvas, RIGHT_EYE_CX, 50);

        clear_face(canvas);
        eye_closed(canvas, LEFT_EYE_CX);
        eye_closed(canvas, RIGHT_EYE_CX);
        self.delay.delay_ms(BLINK_CLOSED_MS);

        clear_face(canvas);
        eye_half(canvas, LEFT_EYE_CX, 50);
        eye_half(canvas, RIGHT_EYE_CX, 50);

        draw_expression(canvas, self.current, 0, 0);
    }

    /// Wink the left eye, then force the expression back to `Normal`
    ///
    /// Unlike blink this is a one-way reset: the pre-wink expression is not
    /// restored. The open eye renders with a zero gaze offset regardless of
    /// what was on screen before.
    pub fn wink_left<C: Canvas>(&mut self, canvas: &mut C) {
        clear_face(canvas);
        eye_closed(canvas, LEFT_EYE_CX);
        eye_normal(canvas, RIGHT_EYE_CX, 0, 0);
        self.delay.delay_ms(WINK_HOLD_MS);
        self.set_expression(canvas, Expression::Normal);
    }

    /// Wink the right eye, then force the expression back to `Normal`
    pub fn wink_right<C: Canvas>(&mut self, canvas: &mut C) {
        clear_face(canvas);
        eye_normal(canvas, LEFT_EYE_CX, 0, 0);
        eye_closed(canvas, RIGHT_EYE_CX);
        self.delay.delay_ms(WINK_HOLD_MS);
        self.set_expression(canvas, Expression::Normal);
    }

    /// Glance left, return to center, glance right, return to center
    pub fn look_around<C: Canvas>(&mut self, canvas: &mut C) {
        self.set_expression(canvas, Expression::LookLeft);
        self.delay.delay_ms(LOOK_HOLD_MS);
        self.set_expression(canvas, Expression::Normal);
        self.delay.delay_ms(LOOK_CENTER_MS);
        self.set_expression(canvas, Expression::LookRight);
        self.delay.delay_ms(LOOK_HOLD_MS);
        self.set_expression(canvas, Expression::Normal);
    }

    /// One pass of the autonomous idle behavior
    ///
    /// The blink and action timers are independent; each fires when its
    /// elapsed time strictly exceeds the minimum plus a fresh random jitter,
    /// so a frozen clock never fires either.
    pub fn idle_tick<C: Canvas>(&mut self, canvas: &mut C) {
        let now = self.clock.now_ms();

        let blink_due = BLINK_MIN_MS + self.rng.next_u32() % BLINK_JITTER_MS;
        if now.wrapping_sub(self.last_blink) > blink_due {
            self.blink(canvas);
            self.last_blink = now;
        }

        let action_due = ACTION_MIN_MS + self.rng.next_u32() % ACTION_JITTER_MS;
        if now.wrapping_sub(self.last_action) > action_due {
            match self.rng.next_u32() % 5 {
                0 => {
                    self.set_expression(canvas, Expression::LookLeft);
                    self.delay.delay_ms(IDLE_GLANCE_MS);
                }
                1 => {
                    self.set_expression(canvas, Expression::LookRight);
                    self.delay.delay_ms(IDLE_GLANCE_MS);
                }
                2 => self.wink_left(canvas),
                3 => self.wink_right(canvas),
                _ => self.look_around(canvas),
            }
            self.set_expression(canvas, Expression::Normal);
            self.last_action = now;
        }
    }

    /// Fixed showcase script: every expression and every transient in order
    pub fn run_demo<C: Canvas>(&mut self, canvas: &mut C) {
        self.set_expression(canvas, Expression::Normal);
        self.delay.delay_ms(1_000);
        self.blink(canvas);
        self.delay.delay_ms(500);
        self.set_expression(canvas, Expression::Happy);
        self.delay.delay_ms(1_000);
        self.set_expression(canvas, Expression::Sad);
        self.delay.delay_ms(1_000);
        self.set_expression(canvas, Expression::Angry);
        self.delay.delay_ms(1_000);
        self.set_expression(canvas, Expression::Surprised);
        self.delay.delay_ms(1_000);
        self.wink_left(canvas);
        self.delay.delay_ms(400);
        self.wink_right(canvas);
        self.delay.delay_ms(400);
        self.set_expression(canvas, Expression::Love);
        self.delay.delay_ms(1_000);
        self.set_expression(canvas, Expression::Sleepy);
        self.delay.delay_ms(1_000);
        self.set_expression(canvas, Expression::Dizzy);
        self.delay.delay_ms(1_000);
        self.look_around(canvas);
        self.delay.delay_ms(500);
    }
}
