//! Diagnostic status lines
//!
//! The controller reports what changed on each tick. The firmware writes the
//! `Display` form of each event to the serial port; the host side ignores
//! anything that is not part of the preset protocol.

use crate::effect::EffectId;
use crate::host::HostInputError;
use crate::mode::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusEvent {
    /// Mode button advanced the idle mode
    ModeChanged(Mode),
    /// Scheduler drew a new idle effect
    EffectSwitched(EffectId),
    /// Lid closed, outputs suspended
    LidClosed,
    /// Lid opened, state restored
    LidOpened { mode: Mode, preset: usize },
    /// Host value accepted (already clamped)
    PresetApplied { requested: u32, applied: usize },
    /// Host value rejected
    InvalidInput(HostInputError),
}

impl core::fmt::Display for StatusEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StatusEvent::ModeChanged(mode) => write!(f, "mode: {}", mode.as_str()),
            StatusEvent::EffectSwitched(id) => write!(f, "effect: {}", id.as_str()),
            StatusEvent::LidClosed => write!(f, "lights off"),
            StatusEvent::LidOpened { mode, preset } => {
                write!(f, "lights on: mode {}, preset {}", mode.as_str(), preset)
            }
            StatusEvent::PresetApplied { requested, applied }
                if usize::try_from(*requested).is_ok_and(|r| r == *applied) =>
            {
                write!(f, "preset: {}", applied)
            }
            StatusEvent::PresetApplied { requested, applied } => {
                write!(f, "preset: {} (clamped from {})", applied, requested)
            }
            StatusEvent::InvalidInput(err) => write!(f, "invalid input: {}", err),
        }
    }
}
