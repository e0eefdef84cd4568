//! Idle effect rotation
//!
//! Decides *which* effect runs and *when* to switch; the effects themselves
//! decide how fast they animate. A new effect is drawn uniformly at random
//! once the re-roll interval has passed, never repeating the previous one.

use embassy_time::{Duration, Instant};
use rand::{Rng, RngCore};

use crate::bank::Frame;
use crate::effect::{EFFECT_COUNT, EffectId, EffectLibrary};

/// Which effect is active and since when
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EffectSession {
    /// Effect stepped by the scheduler, `None` before the first draw
    pub active: Option<EffectId>,
    /// Effect that was active before the latest draw
    pub last: Option<EffectId>,
    /// When `active` was selected
    pub switched_at: Option<Instant>,
}

/// Effect scheduler for cycling mode
#[derive(Debug, Clone)]
pub struct EffectScheduler {
    reroll_interval: Duration,
    session: EffectSession,
    library: EffectLibrary,
}

impl EffectScheduler {
    pub fn new(reroll_interval: Duration) -> Self {
        Self {
            reroll_interval,
            session: EffectSession::default(),
            library: EffectLibrary::new(),
        }
    }

    pub const fn session(&self) -> EffectSession {
        self.session
    }

    /// Run one control loop pass in cycling mode
    ///
    /// Draws a new effect when none is selected yet or when the re-roll
    /// interval has been exceeded, then steps the active effect if its own
    /// interval allows. Returns the newly selected effect, if any.
    pub fn tick(
        &mut self,
        now: Instant,
        frame: &mut Frame<'_>,
        rng: &mut dyn RngCore,
    ) -> Option<EffectId> {
        let expired = match self.session.switched_at {
            None => true,
            Some(at) => now.saturating_duration_since(at) > self.reroll_interval,
        };

        let switched = if expired {
            let next = draw_effect(self.session.active, rng);
            self.session.last = self.session.active;
            self.session.active = Some(next);
            self.session.switched_at = Some(now);
            status!("effect: {}", next.as_str());
            Some(next)
        } else {
            None
        };

        if let Some(active) = self.session.active {
            self.library.step(active, now, frame, rng);
        }

        switched
    }
}

/// Draw an effect uniformly at random, rejecting `previous`
pub fn draw_effect(previous: Option<EffectId>, rng: &mut dyn RngCore) -> EffectId {
    loop {
        let candidate = EffectId::ALL[rng.gen_range(0..EFFECT_COUNT)];
        if Some(candidate) != previous {
            return candidate;
        }
    }
}
