//! Debounced digital input
//!
//! Turns noisy level samples into a single press edge. A level only becomes
//! stable after it has been held for the whole settle window; releases update
//! the stable level but are not reported.

use embassy_time::{Duration, Instant};

/// How the button is physically wired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonWiring {
    /// Button pulls the pin to ground, pin reads low when pressed
    ActiveLow,
    /// Button pulls the pin to supply, pin reads high when pressed
    ActiveHigh,
}

impl ButtonWiring {
    /// Convert a raw pin level to a logical pressed state
    pub const fn is_pressed(self, is_high: bool) -> bool {
        match self {
            Self::ActiveLow => !is_high,
            Self::ActiveHigh => is_high,
        }
    }
}

/// Debounced edge reported to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEvent {
    /// Logical release-to-press transition
    Press,
}

/// Settle-window debouncer for one digital input
#[derive(Debug, Clone)]
pub struct Debouncer {
    wiring: ButtonWiring,
    settle_window: Duration,
    /// Last level accepted as stable (true = pressed)
    stable: bool,
    /// Last raw sample (true = pressed)
    raw: bool,
    /// When `raw` last changed
    changed_at: Instant,
}

impl Debouncer {
    /// Create a debouncer that starts in the released state
    pub const fn new(wiring: ButtonWiring, settle_window: Duration) -> Self {
        Self {
            wiring,
            settle_window,
            stable: false,
            raw: false,
            changed_at: Instant::from_ticks(0),
        }
    }

    /// Feed one raw pin sample
    ///
    /// Returns [`EdgeEvent::Press`] once per debounced press. Bounces shorter
    /// than the settle window restart the timer and never produce an edge.
    pub fn sample(&mut self, is_high: bool, now: Instant) -> Option<EdgeEvent> {
        let pressed = self.wiring.is_pressed(is_high);

        if pressed != self.raw {
            self.raw = pressed;
            self.changed_at = now;
            return None;
        }

        if pressed == self.stable {
            return None;
        }

        if now.saturating_duration_since(self.changed_at) < self.settle_window {
            return None;
        }

        self.stable = pressed;
        if pressed { Some(EdgeEvent::Press) } else { None }
    }

    /// Debounced pressed state
    pub const fn is_pressed(&self) -> bool {
        self.stable
    }
}
