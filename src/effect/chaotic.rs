//! Every indicator randomized on each step

use embassy_time::Duration;
use rand::{Rng, RngCore};

use super::Effect;
use crate::bank::Frame;

const STEP_INTERVAL: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Default)]
pub struct ChaoticBlinkEffect;

impl ChaoticBlinkEffect {
    pub const fn new() -> Self {
        Self
    }
}

impl Effect for ChaoticBlinkEffect {
    fn step_interval(&self) -> Duration {
        STEP_INTERVAL
    }

    fn step(&mut self, frame: &mut Frame<'_>, rng: &mut dyn RngCore) {
        for channel in frame.primary.iter_mut() {
            *channel = rng.gen_range(0..=u8::MAX);
        }
        for channel in frame.directional.iter_mut() {
            *channel = rng.gen_bool(0.5);
        }
    }
}
