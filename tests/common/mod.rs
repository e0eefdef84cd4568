//! Shared test infrastructure

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use arcade_led_feedback::{Controller, DeviceConfig, HostLink, Instant, OutputDriver, TickInputs};
use rand::SeedableRng;
use rand::rngs::SmallRng;

pub const PRIMARY: usize = 6;
pub const DIRECTIONAL: usize = 4;
pub const LINK_SIZE: usize = 16;

/// Light level comfortably above the default threshold
pub const LIGHT: u16 = 600;
/// Light level below the default threshold
pub const DARK: u16 = 20;

pub type TestController<'a> =
    Controller<'a, RecordingDriver, SmallRng, PRIMARY, DIRECTIONAL, LINK_SIZE>;

/// Driver that keeps the last written outputs
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub primary: std::vec::Vec<u8>,
    pub directional: std::vec::Vec<bool>,
    pub writes: usize,
}

impl OutputDriver for RecordingDriver {
    fn write(&mut self, primary: &[u8], directional: &[bool]) {
        self.primary = primary.to_vec();
        self.directional = directional.to_vec();
        self.writes += 1;
    }
}

pub fn ms(millis: u64) -> Instant {
    Instant::from_millis(millis)
}

pub fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Button released (active-low pin reads high), lid open
pub fn idle() -> TickInputs {
    TickInputs {
        button_high: true,
        light_level: LIGHT,
    }
}

/// Button held down, lid open
pub fn held() -> TickInputs {
    TickInputs {
        button_high: false,
        light_level: LIGHT,
    }
}

pub fn dark() -> TickInputs {
    TickInputs {
        button_high: true,
        light_level: DARK,
    }
}

pub fn controller<'a>(link: &'a HostLink<LINK_SIZE>, config: &DeviceConfig) -> TestController<'a> {
    Controller::new(RecordingDriver::default(), link, rng(7), config)
}

/// Press and release the mode button cleanly, starting at `start`
///
/// Returns the time after the release settled.
pub fn press_button(controller: &mut TestController<'_>, start: u64) -> u64 {
    controller.tick(ms(start), held());
    controller.tick(ms(start + 60), held());
    controller.tick(ms(start + 70), idle());
    controller.tick(ms(start + 130), idle());
    start + 130
}
