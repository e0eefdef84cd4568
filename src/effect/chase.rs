//! Decaying tail behind a moving head

use embassy_time::Duration;
use rand::RngCore;

use super::Effect;
use crate::bank::{Frame, MAX_INTENSITY};

const STEP_INTERVAL: Duration = Duration::from_millis(60);
const DECAY: u8 = 48;

#[derive(Debug, Clone, Default)]
pub struct ChaseEffect {
    head: usize,
}

impl ChaseEffect {
    pub const fn new() -> Self {
        Self { head: 0 }
    }

    /// Indicator forced to full by the next step
    pub const fn head(&self) -> usize {
        self.head
    }
}

impl Effect for ChaseEffect {
    fn step_interval(&self) -> Duration {
        STEP_INTERVAL
    }

    fn step(&mut self, frame: &mut Frame<'_>, _rng: &mut dyn RngCore) {
        let len = frame.primary.len();
        if len == 0 {
            return;
        }

        for channel in frame.primary.iter_mut() {
            *channel = channel.saturating_sub(DECAY);
        }
        self.head %= len;
        frame.primary[self.head] = MAX_INTENSITY;
        frame.directional.fill(false);

        self.head = (self.head + 1) % len;
    }
}
