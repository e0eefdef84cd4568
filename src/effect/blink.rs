//! Everything toggling together

use embassy_time::Duration;
use rand::RngCore;

use super::Effect;
use crate::bank::{Frame, MAX_INTENSITY};

const STEP_INTERVAL: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Default)]
pub struct BlinkAllEffect {
    on: bool,
}

impl BlinkAllEffect {
    pub const fn new() -> Self {
        Self { on: false }
    }

    /// State shown by the most recent step
    pub const fn is_on(&self) -> bool {
        self.on
    }
}

impl Effect for BlinkAllEffect {
    fn step_interval(&self) -> Duration {
        STEP_INTERVAL
    }

    fn step(&mut self, frame: &mut Frame<'_>, _rng: &mut dyn RngCore) {
        self.on = !self.on;
        let intensity = if self.on { MAX_INTENSITY } else { 0 };
        frame.primary.fill(intensity);
        frame.directional.fill(self.on);
    }
}
