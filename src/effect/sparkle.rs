//! One random indicator lit per step

use embassy_time::Duration;
use rand::{Rng, RngCore};

use super::Effect;
use crate::bank::{Frame, MAX_INTENSITY};

const STEP_INTERVAL: Duration = Duration::from_millis(120);

#[derive(Debug, Clone, Default)]
pub struct SparkleEffect;

impl SparkleEffect {
    pub const fn new() -> Self {
        Self
    }
}

impl Effect for SparkleEffect {
    fn step_interval(&self) -> Duration {
        STEP_INTERVAL
    }

    fn step(&mut self, frame: &mut Frame<'_>, rng: &mut dyn RngCore) {
        frame.clear();

        if !frame.primary.is_empty() {
            let index = rng.gen_range(0..frame.primary.len());
            frame.primary[index] = MAX_INTENSITY;
        }
        if !frame.directional.is_empty() {
            let index = rng.gen_range(0..frame.directional.len());
            frame.directional[index] = true;
        }
    }
}
