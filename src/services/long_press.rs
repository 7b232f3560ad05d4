//! Long-press detection for touch input.
//!
//! The directory UI opens the floating context menu on a 500 ms long press.
//! This is a single-shot debounce per pointer-down: moving or lifting the
//! finger before the threshold cancels it. Modeled as a state machine over
//! `Instant`, driven by the event loop's ticks rather than a timer.

use std::time::{Duration, Instant};

/// How long a touch must be held before the context menu opens.
pub const LONG_PRESS_THRESHOLD: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Pending,
    Fired,
}

/// Single-shot long-press detector for one pointer.
#[derive(Debug)]
pub struct LongPressDetector {
    state: State,
    pressed_at: Option<Instant>,
    threshold: Duration,
}

impl LongPressDetector {
    pub fn new() -> Self {
        Self::with_threshold(LONG_PRESS_THRESHOLD)
    }

    pub fn with_threshold(threshold: Duration) -> Self {
        Self {
            state: State::Idle,
            pressed_at: None,
            threshold,
        }
    }

    /// Pointer went down: arm the detector. A new press while one is
    /// pending restarts the countdown.
    pub fn touch_start(&mut self, now: Instant) {
        self.state = State::Pending;
        self.pressed_at = Some(now);
    }

    /// Pointer moved: cancel a pending press.
    pub fn touch_move(&mut self) {
        if self.state == State::Pending {
            self.reset();
        }
    }

    /// Pointer lifted: cancel a pending press and rearm for the next one.
    pub fn touch_end(&mut self) {
        self.reset();
    }

    /// Returns `true` exactly once when the press has been held for at
    /// least the threshold. Call on each tick of the event loop.
    pub fn poll(&mut self, now: Instant) -> bool {
        match (self.state, self.pressed_at) {
            (State::Pending, Some(start)) if now.duration_since(start) >= self.threshold => {
                self.state = State::Fired;
                true
            }
            _ => false,
        }
    }

    fn reset(&mut self) {
        self.state = State::Idle;
        self.pressed_at = None;
    }
}

impl Default for LongPressDetector {
    fn default() -> Self {
        Self::new()
    }
}
