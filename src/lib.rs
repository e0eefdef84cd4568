#![no_std]

#[macro_use]
mod log;

pub mod bank;
pub mod config;
pub mod control_loop;
pub mod controller;
pub mod debounce;
pub mod detector;
pub mod effect;
pub mod host;
pub mod lid;
pub mod link;
pub mod math8;
pub mod mode;
pub mod preset;
pub mod scheduler;
pub mod status;

pub use bank::{Frame, IndicatorBank};
pub use config::DeviceConfig;
pub use control_loop::{ControlLoop, LoopResult};
pub use controller::{Controller, DeviceState, TickInputs, TickReport};
pub use debounce::{ButtonWiring, Debouncer, EdgeEvent};
pub use effect::{EffectId, EffectLibrary, EffectSlot};
pub use host::{HostInputError, HostParser};
pub use lid::{LidMonitor, LidTransition, SavedState};
pub use link::{HostLink, LinkFull};
pub use mode::Mode;
pub use scheduler::{EffectScheduler, EffectSession};
pub use status::StatusEvent;

pub use embassy_time::{Duration, Instant};

/// Hardware side of the indicator bank
///
/// The controller pushes both groups once per tick, whether or not anything
/// changed. PWM channels, shift registers or a test recorder all fit here.
pub trait OutputDriver {
    /// Write primary intensities (0-255) and directional on/off states.
    ///
    /// `directional` is empty when the directional bank is disabled.
    fn write(&mut self, primary: &[u8], directional: &[bool]);
}
