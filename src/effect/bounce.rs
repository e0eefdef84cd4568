//! Single lit indicator bouncing between both ends of the bank
//!
//! Used for both the wave and the knight rider effects; each owns its own
//! instance so their positions are independent.

use embassy_time::Duration;
use rand::RngCore;

use super::Effect;
use crate::bank::{Frame, MAX_INTENSITY};

#[derive(Debug, Clone)]
pub struct BounceEffect {
    index: usize,
    forward: bool,
    interval: Duration,
}

impl BounceEffect {
    pub const fn new(interval: Duration) -> Self {
        Self {
            index: 0,
            forward: true,
            interval,
        }
    }

    /// Indicator lit by the next step
    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn is_forward(&self) -> bool {
        self.forward
    }
}

impl Effect for BounceEffect {
    fn step_interval(&self) -> Duration {
        self.interval
    }

    fn step(&mut self, frame: &mut Frame<'_>, _rng: &mut dyn RngCore) {
        let len = frame.primary.len();
        if len == 0 {
            return;
        }

        let last = len - 1;
        self.index = self.index.min(last);

        frame.clear();
        frame.primary[self.index] = MAX_INTENSITY;

        if self.index == last {
            self.forward = false;
        }
        if self.index == 0 {
            self.forward = true;
        }
        if last > 0 {
            self.index = if self.forward { self.index + 1 } else { self.index - 1 };
        }
    }
}
