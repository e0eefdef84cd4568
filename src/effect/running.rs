//! Sine brightness profile travelling along the bank

use embassy_time::Duration;
use rand::RngCore;

use super::Effect;
use crate::bank::Frame;
use crate::math8::{advance_phase, sine8};

const STEP_INTERVAL: Duration = Duration::from_millis(30);
/// Phase advance per step, in indicator positions
const PHASE_STEP: f32 = 0.25;

#[derive(Debug, Clone, Default)]
pub struct RunningEffect {
    phase: f32,
}

impl RunningEffect {
    pub const fn new() -> Self {
        Self { phase: 0.0 }
    }

    pub const fn phase(&self) -> f32 {
        self.phase
    }
}

impl Effect for RunningEffect {
    fn step_interval(&self) -> Duration {
        STEP_INTERVAL
    }

    #[allow(clippy::cast_precision_loss)]
    fn step(&mut self, frame: &mut Frame<'_>, _rng: &mut dyn RngCore) {
        let len = frame.primary.len();
        if len == 0 {
            return;
        }

        let period = len as f32;
        for (i, channel) in frame.primary.iter_mut().enumerate() {
            *channel = sine8(i as f32 + self.phase, period);
        }
        frame.directional.fill(false);

        self.phase = advance_phase(self.phase, PHASE_STEP, period);
    }
}
