//! Shared brightness ramp
//!
//! All primary indicators follow one brightness that climbs to full and falls
//! back to zero. The directional bank only changes at the two extremes: on at
//! full brightness, off at zero.

use embassy_time::Duration;
use rand::RngCore;

use super::Effect;
use crate::bank::{Frame, MAX_INTENSITY};

const STEP_INTERVAL: Duration = Duration::from_millis(10);
/// Divides 255 so both extremes are hit exactly
const FADE_STEP: u8 = 5;

#[derive(Debug, Clone)]
pub struct FadeAllEffect {
    brightness: u8,
    rising: bool,
}

impl Default for FadeAllEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl FadeAllEffect {
    pub const fn new() -> Self {
        Self {
            brightness: 0,
            rising: true,
        }
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn is_rising(&self) -> bool {
        self.rising
    }
}

impl Effect for FadeAllEffect {
    fn step_interval(&self) -> Duration {
        STEP_INTERVAL
    }

    fn step(&mut self, frame: &mut Frame<'_>, _rng: &mut dyn RngCore) {
        self.brightness = if self.rising {
            self.brightness.saturating_add(FADE_STEP)
        } else {
            self.brightness.saturating_sub(FADE_STEP)
        };

        if self.brightness == MAX_INTENSITY {
            self.rising = false;
            frame.directional.fill(true);
        } else if self.brightness == 0 {
            self.rising = true;
            frame.directional.fill(false);
        }

        frame.primary.fill(self.brightness);
    }
}
