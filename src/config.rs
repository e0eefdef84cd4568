//! Device configuration
//!
//! Bank sizes are const generics on the controller; everything else that can
//! differ between cabinets lives here.

use embassy_time::Duration;

use crate::debounce::ButtonWiring;

/// Minimum time the mode button must hold a level before it counts.
pub const DEFAULT_SETTLE_WINDOW: Duration = Duration::from_millis(50);

/// Time an idle effect stays selected before a new one is drawn.
pub const DEFAULT_REROLL_INTERVAL: Duration = Duration::from_millis(15_000);

/// Light sensor reading below which the lid counts as closed.
///
/// The sensor is read on a 10-bit scale (0-1023).
pub const DEFAULT_LIGHT_THRESHOLD: u16 = 100;

/// Threshold for cabinets without a light sensor.
///
/// Every reading is at or above zero, so the lid never counts as closed.
pub const LID_SENSOR_DISABLED: u16 = 0;

/// Period of one control loop pass.
pub const DEFAULT_LOOP_PERIOD: Duration = Duration::from_millis(1);

/// Configuration for the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Debounce settle window for the mode button
    pub settle_window: Duration,
    /// Effect rotation interval in cycling mode
    pub reroll_interval: Duration,
    /// Lid sensor threshold, no hysteresis
    ///
    /// Readings at or above it count as an open lid.
    /// [`LID_SENSOR_DISABLED`] turns the lid monitor off, so a floating
    /// sensor pin can never blank the outputs.
    pub light_threshold: u16,
    /// How the mode button is wired
    pub button_wiring: ButtonWiring,
    /// Directional enable switch, sampled once at startup
    pub directional_enabled: bool,
    /// Target control loop period
    pub loop_period: Duration,
}

impl DeviceConfig {
    pub const fn new() -> Self {
        Self {
            settle_window: DEFAULT_SETTLE_WINDOW,
            reroll_interval: DEFAULT_REROLL_INTERVAL,
            light_threshold: DEFAULT_LIGHT_THRESHOLD,
            button_wiring: ButtonWiring::ActiveLow,
            directional_enabled: true,
            loop_period: DEFAULT_LOOP_PERIOD,
        }
    }

    /// Set the directional enable state read from the startup switch
    #[must_use]
    pub const fn with_directional(mut self, enabled: bool) -> Self {
        self.directional_enabled = enabled;
        self
    }

    /// Set the lid sensor threshold
    #[must_use]
    pub const fn with_light_threshold(mut self, threshold: u16) -> Self {
        self.light_threshold = threshold;
        self
    }

    /// Run without a lid sensor
    #[must_use]
    pub const fn without_lid_sensor(self) -> Self {
        self.with_light_threshold(LID_SENSOR_DISABLED)
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self::new()
    }
}
