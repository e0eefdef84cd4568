//! Fixed-rate pacing for the controller
//!
//! The firmware owns the timer. Each pass reports how long to wait before
//! the next one, so the same loop runs under a blocking delay or an async
//! executor.

use embassy_time::{Duration, Instant};
use rand::RngCore;

use crate::OutputDriver;
use crate::config::DeviceConfig;
use crate::controller::{Controller, TickInputs, TickReport};

/// Outcome of one paced pass
#[derive(Debug, Clone)]
pub struct LoopResult {
    /// When the next pass is due.
    pub next_deadline: Instant,
    /// Time left until `next_deadline`, zero when running late.
    pub sleep_duration: Duration,
    /// Status events produced by this pass.
    pub report: TickReport,
}

/// Runs one controller tick per pass and keeps passes on a fixed grid.
///
/// # Usage
///
/// ```ignore
/// let mut control = ControlLoop::from_config(controller, &config);
///
/// loop {
///     let now = Instant::now();
///     let inputs = TickInputs { button_high: pin.is_high(), light_level: adc.read() };
///     let result = control.tick(now, inputs);
///     for event in &result.report.events {
///         writeln!(uart, "{}", event).ok();
///     }
///     Timer::after(result.sleep_duration).await;
/// }
/// ```
pub struct ControlLoop<'a, D: OutputDriver, R: RngCore, const N: usize, const M: usize, const LINK_SIZE: usize>
{
    controller: Controller<'a, D, R, N, M, LINK_SIZE>,
    next_pass: Option<Instant>,
    period: Duration,
}

impl<'a, D: OutputDriver, R: RngCore, const N: usize, const M: usize, const LINK_SIZE: usize>
    ControlLoop<'a, D, R, N, M, LINK_SIZE>
{
    pub fn new(controller: Controller<'a, D, R, N, M, LINK_SIZE>, period: Duration) -> Self {
        Self {
            controller,
            next_pass: None,
            period,
        }
    }

    /// Pace `controller` at the configured loop period
    pub fn from_config(
        controller: Controller<'a, D, R, N, M, LINK_SIZE>,
        config: &DeviceConfig,
    ) -> Self {
        Self::new(controller, config.loop_period)
    }

    /// Run one pass and return timing information.
    ///
    /// If the loop has fallen more than two periods behind, the backlog is
    /// skipped instead of running a burst of catch-up passes.
    pub fn tick(&mut self, now: Instant, inputs: TickInputs) -> LoopResult {
        let max_drift = self.period * 2;
        let scheduled = match self.next_pass {
            Some(next) if now.saturating_duration_since(next) <= max_drift => next,
            _ => now,
        };

        let report = self.controller.tick(now, inputs);

        let next_deadline = scheduled + self.period;
        self.next_pass = Some(next_deadline);

        LoopResult {
            next_deadline,
            sleep_duration: next_deadline.saturating_duration_since(now),
            report,
        }
    }

    pub fn controller(&self) -> &Controller<'a, D, R, N, M, LINK_SIZE> {
        &self.controller
    }
}
