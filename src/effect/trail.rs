//! Single indicator running forward and wrapping at the end

use embassy_time::Duration;
use rand::RngCore;

use super::Effect;
use crate::bank::{Frame, MAX_INTENSITY};

const STEP_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Default)]
pub struct TrailEffect {
    index: usize,
}

impl TrailEffect {
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// Indicator lit by the next step
    pub const fn index(&self) -> usize {
        self.index
    }
}

impl Effect for TrailEffect {
    fn step_interval(&self) -> Duration {
        STEP_INTERVAL
    }

    fn step(&mut self, frame: &mut Frame<'_>, _rng: &mut dyn RngCore) {
        let len = frame.primary.len();
        if len == 0 {
            return;
        }

        frame.clear();
        self.index %= len;
        frame.primary[self.index] = MAX_INTENSITY;
        self.index = (self.index + 1) % len;
    }
}
