use heapless::Vec;
use rand::RngCore;

use embassy_time::Instant;

use crate::OutputDriver;
use crate::bank::IndicatorBank;
use crate::config::DeviceConfig;
use crate::debounce::{Debouncer, EdgeEvent};
use crate::host::HostParser;
use crate::lid::{LidMonitor, LidTransition};
use crate::link::HostLink;
use crate::mode::Mode;
use crate::preset::{self, clamp_preset};
use crate::scheduler::{EffectScheduler, EffectSession};
use crate::status::StatusEvent;

/// Most status events a single tick can produce
pub const MAX_TICK_EVENTS: usize = 4;

/// Mode and preset, the state the lid monitor saves and restores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceState {
    /// Idle mode selected by the button
    pub mode: Mode,
    /// Host button count, 0 when idle
    pub preset: usize,
}

/// Raw inputs sampled by the firmware for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInputs {
    /// Mode button pin level
    pub button_high: bool,
    /// Ambient light sensor reading
    pub light_level: u16,
}

/// What happened during one tick
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    pub events: Vec<StatusEvent, MAX_TICK_EVENTS>,
}

impl TickReport {
    fn push(&mut self, event: StatusEvent) {
        let _ = self.events.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Device state and the per-tick pipeline
///
/// Each pass checks the lid, drains host input, samples the mode button and
/// then pushes the bank to the driver.
pub struct Controller<'a, D: OutputDriver, R: RngCore, const N: usize, const M: usize, const LINK_SIZE: usize>
{
    // Hardware and shared resources
    driver: D,
    link: &'a HostLink<LINK_SIZE>,
    rng: R,

    // Device state
    state: DeviceState,
    bank: IndicatorBank<N, M>,

    // Input handling and effects
    parser: HostParser,
    debouncer: Debouncer,
    lid: LidMonitor,
    scheduler: EffectScheduler,
}

impl<'a, D: OutputDriver, R: RngCore, const N: usize, const M: usize, const LINK_SIZE: usize>
    Controller<'a, D, R, N, M, LINK_SIZE>
{
    /// Create a controller with all outputs dark
    pub fn new(driver: D, link: &'a HostLink<LINK_SIZE>, rng: R, config: &DeviceConfig) -> Self {
        let mut controller = Self {
            driver,
            link,
            rng,
            state: DeviceState::default(),
            bank: IndicatorBank::new(config.directional_enabled),
            parser: HostParser::new(),
            debouncer: Debouncer::new(config.button_wiring, config.settle_window),
            lid: LidMonitor::new(config.light_threshold),
            scheduler: EffectScheduler::new(config.reroll_interval),
        };
        controller.flush();
        controller
    }

    /// Run one control loop pass
    pub fn tick(&mut self, now: Instant, inputs: TickInputs) -> TickReport {
        let mut report = TickReport::default();

        self.process_lid(inputs.light_level, &mut report);
        self.process_host(&mut report);
        self.process_button(inputs.button_high, now, &mut report);
        self.render(now, &mut report);
        self.flush();

        report
    }

    /// Apply a host button count directly
    ///
    /// Returns the clamped value. While the lid is closed the value is kept
    /// for when it reopens.
    pub fn apply_host_value(&mut self, value: u32) -> usize {
        let applied = clamp_preset(value, N);
        if !self.lid.is_closed() {
            self.state.preset = applied;
        } else if let Some(saved) = self.lid.saved_mut() {
            saved.state.preset = applied;
        }
        applied
    }

    fn process_lid(&mut self, level: u16, report: &mut TickReport) {
        match self.lid.check(level, &mut self.state) {
            Some(LidTransition::Closed(_)) => report.push(StatusEvent::LidClosed),
            Some(LidTransition::Opened(saved)) => report.push(StatusEvent::LidOpened {
                mode: saved.state.mode,
                preset: saved.state.preset,
            }),
            None => {}
        }
    }

    fn process_host(&mut self, report: &mut TickReport) {
        match self.parser.poll(self.link) {
            Some(Ok(requested)) => {
                let applied = self.apply_host_value(requested);
                status!("preset: {} (requested {})", applied, requested);
                report.push(StatusEvent::PresetApplied { requested, applied });
            }
            Some(Err(err)) => {
                status!("invalid input: {}", err);
                report.push(StatusEvent::InvalidInput(err));
            }
            None => {}
        }
    }

    fn process_button(&mut self, button_high: bool, now: Instant, report: &mut TickReport) {
        // Always sampled so a press during a preset or with the lid closed
        // does not fire later
        let Some(EdgeEvent::Press) = self.debouncer.sample(button_high, now) else {
            return;
        };
        if self.lid.is_closed() || self.state.preset != 0 {
            return;
        }

        self.state.mode = self.state.mode.next();
        status!("mode: {}", self.state.mode.as_str());
        report.push(StatusEvent::ModeChanged(self.state.mode));
    }

    fn render(&mut self, now: Instant, report: &mut TickReport) {
        if self.lid.is_closed() {
            self.bank.clear();
            return;
        }

        if self.state.preset > 0 {
            preset::apply_count(&mut self.bank, self.state.preset);
            return;
        }

        if self.state.mode.paint(&mut self.bank) {
            return;
        }

        let mut frame = self.bank.frame();
        if let Some(id) = self.scheduler.tick(now, &mut frame, &mut self.rng) {
            report.push(StatusEvent::EffectSwitched(id));
        }
    }

    fn flush(&mut self) {
        self.driver.write(self.bank.primary(), self.bank.directional());
    }

    pub const fn state(&self) -> DeviceState {
        self.state
    }

    pub const fn mode(&self) -> Mode {
        self.state.mode
    }

    pub const fn preset(&self) -> usize {
        self.state.preset
    }

    pub const fn is_lid_closed(&self) -> bool {
        self.lid.is_closed()
    }

    pub const fn session(&self) -> EffectSession {
        self.scheduler.session()
    }

    pub const fn bank(&self) -> &IndicatorBank<N, M> {
        &self.bank
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

}
