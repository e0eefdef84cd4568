//! Lid light monitor
//!
//! An ambient light sensor inside the cabinet tells whether the lid is open.
//! Closing the lid snapshots the mode and preset and forces both to their
//! dark values; opening it restores the snapshot.
//!
//! The comparison has no hysteresis band, so a reading that hovers exactly at
//! the threshold toggles on every pass. A zero threshold never reports a
//! closed lid.

use crate::controller::DeviceState;

/// Mode and preset captured when the lid closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedState {
    pub state: DeviceState,
}

/// Light level transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LidTransition {
    /// Light dropped below the threshold
    Closed(SavedState),
    /// Light came back; the snapshot was restored
    Opened(SavedState),
}

#[derive(Debug, Clone)]
pub struct LidMonitor {
    threshold: u16,
    light_detected: bool,
    saved: Option<SavedState>,
}

impl LidMonitor {
    /// Create a monitor that assumes the lid starts open
    pub const fn new(threshold: u16) -> Self {
        Self {
            threshold,
            light_detected: true,
            saved: None,
        }
    }

    pub const fn is_closed(&self) -> bool {
        !self.light_detected
    }

    pub const fn saved(&self) -> Option<SavedState> {
        self.saved
    }

    /// Mutable access to the snapshot while the lid is closed
    pub fn saved_mut(&mut self) -> Option<&mut SavedState> {
        self.saved.as_mut()
    }

    /// Compare a sensor reading against the threshold and apply transitions
    pub fn check(&mut self, level: u16, state: &mut DeviceState) -> Option<LidTransition> {
        let detected = level >= self.threshold;
        if detected == self.light_detected {
            return None;
        }
        self.light_detected = detected;

        if detected {
            let saved = self.saved.take().unwrap_or(SavedState { state: *state });
            *state = saved.state;
            status!("lid opened, restoring {}", saved.state.mode.as_str());
            Some(LidTransition::Opened(saved))
        } else {
            let saved = SavedState { state: *state };
            self.saved = Some(saved);
            *state = DeviceState::default();
            status!("lid closed");
            Some(LidTransition::Closed(saved))
        }
    }
}
