//! Low-intensity sine sweep
//!
//! Primary indicators follow a dim sine profile that slides one offset step
//! per call. Directional indicators are randomized every step.

use embassy_time::Duration;
use rand::{Rng, RngCore};

use super::Effect;
use crate::bank::Frame;
use crate::math8::{advance_phase, scale8, sine8};

const STEP_INTERVAL: Duration = Duration::from_millis(40);
/// Peak intensity of the sweep
const PEAK: u8 = 64;
/// Sine period in indicator positions, independent of bank size
const PERIOD: f32 = 8.0;
const OFFSET_STEP: f32 = 0.5;

#[derive(Debug, Clone, Default)]
pub struct GradientEffect {
    offset: f32,
}

impl GradientEffect {
    pub const fn new() -> Self {
        Self { offset: 0.0 }
    }

    pub const fn offset(&self) -> f32 {
        self.offset
    }
}

impl Effect for GradientEffect {
    fn step_interval(&self) -> Duration {
        STEP_INTERVAL
    }

    #[allow(clippy::cast_precision_loss)]
    fn step(&mut self, frame: &mut Frame<'_>, rng: &mut dyn RngCore) {
        for (i, channel) in frame.primary.iter_mut().enumerate() {
            *channel = scale8(sine8(i as f32 + self.offset, PERIOD), PEAK);
        }
        for channel in frame.directional.iter_mut() {
            *channel = rng.gen_bool(0.5);
        }

        self.offset = advance_phase(self.offset, OFFSET_STEP, PERIOD);
    }
}
