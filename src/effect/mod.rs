//! Idle animations for cycling mode
//!
//! The set of effects is closed, so `EffectSlot` dispatches with a plain
//! `match`. `EffectLibrary` owns one slot per id for the whole program run,
//! which is what lets an effect pick up where it stopped when the scheduler
//! draws it again.

mod blink;
mod bounce;
mod chase;
mod chaotic;
mod fade;
mod gradient;
mod running;
mod sparkle;
mod trail;

use embassy_time::{Duration, Instant};
use rand::RngCore;

pub use blink::BlinkAllEffect;
pub use bounce::BounceEffect;
pub use chaotic::ChaoticBlinkEffect;
pub use chase::ChaseEffect;
pub use fade::FadeAllEffect;
pub use gradient::GradientEffect;
pub use running::RunningEffect;
pub use sparkle::SparkleEffect;
pub use trail::TrailEffect;

use crate::bank::Frame;

/// Number of effects in the library
pub const EFFECT_COUNT: usize = 10;

const EFFECT_NAME_TRAIL: &str = "trail";
const EFFECT_NAME_BLINK_ALL: &str = "blink_all";
const EFFECT_NAME_FADE_ALL: &str = "fade_all";
const EFFECT_NAME_WAVE: &str = "wave";
const EFFECT_NAME_CHAOTIC_BLINK: &str = "chaotic_blink";
const EFFECT_NAME_RUNNING: &str = "running";
const EFFECT_NAME_SPARKLE: &str = "sparkle";
const EFFECT_NAME_KNIGHT_RIDER: &str = "knight_rider";
const EFFECT_NAME_GRADIENT: &str = "gradient";
const EFFECT_NAME_CHASE: &str = "chase";

const EFFECT_ID_TRAIL: u8 = 0;
const EFFECT_ID_BLINK_ALL: u8 = 1;
const EFFECT_ID_FADE_ALL: u8 = 2;
const EFFECT_ID_WAVE: u8 = 3;
const EFFECT_ID_CHAOTIC_BLINK: u8 = 4;
const EFFECT_ID_RUNNING: u8 = 5;
const EFFECT_ID_SPARKLE: u8 = 6;
const EFFECT_ID_KNIGHT_RIDER: u8 = 7;
const EFFECT_ID_GRADIENT: u8 = 8;
const EFFECT_ID_CHASE: u8 = 9;

const WAVE_INTERVAL: Duration = Duration::from_millis(80);
const KNIGHT_RIDER_INTERVAL: Duration = Duration::from_millis(50);

pub trait Effect {
    /// Minimum time between two visual steps
    fn step_interval(&self) -> Duration;

    /// Advance the animation by one visual step
    fn step(&mut self, frame: &mut Frame<'_>, rng: &mut dyn RngCore);
}

/// Effect ids the scheduler draws from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    Trail = EFFECT_ID_TRAIL,
    BlinkAll = EFFECT_ID_BLINK_ALL,
    FadeAll = EFFECT_ID_FADE_ALL,
    Wave = EFFECT_ID_WAVE,
    ChaoticBlink = EFFECT_ID_CHAOTIC_BLINK,
    Running = EFFECT_ID_RUNNING,
    Sparkle = EFFECT_ID_SPARKLE,
    KnightRider = EFFECT_ID_KNIGHT_RIDER,
    Gradient = EFFECT_ID_GRADIENT,
    Chase = EFFECT_ID_CHASE,
}

impl EffectId {
    /// Every effect id, in id order
    pub const ALL: [Self; EFFECT_COUNT] = [
        Self::Trail,
        Self::BlinkAll,
        Self::FadeAll,
        Self::Wave,
        Self::ChaoticBlink,
        Self::Running,
        Self::Sparkle,
        Self::KnightRider,
        Self::Gradient,
        Self::Chase,
    ];

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_TRAIL => Self::Trail,
            EFFECT_ID_BLINK_ALL => Self::BlinkAll,
            EFFECT_ID_FADE_ALL => Self::FadeAll,
            EFFECT_ID_WAVE => Self::Wave,
            EFFECT_ID_CHAOTIC_BLINK => Self::ChaoticBlink,
            EFFECT_ID_RUNNING => Self::Running,
            EFFECT_ID_SPARKLE => Self::Sparkle,
            EFFECT_ID_KNIGHT_RIDER => Self::KnightRider,
            EFFECT_ID_GRADIENT => Self::Gradient,
            EFFECT_ID_CHASE => Self::Chase,
            _ => return None,
        })
    }

    pub const fn raw(self) -> u8 {
        self as u8
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn to_slot(self) -> EffectSlot {
        match self {
            Self::Trail => EffectSlot::Trail(TrailEffect::new()),
            Self::BlinkAll => EffectSlot::BlinkAll(BlinkAllEffect::new()),
            Self::FadeAll => EffectSlot::FadeAll(FadeAllEffect::new()),
            Self::Wave => EffectSlot::Wave(BounceEffect::new(WAVE_INTERVAL)),
            Self::ChaoticBlink => EffectSlot::ChaoticBlink(ChaoticBlinkEffect::new()),
            Self::Running => EffectSlot::Running(RunningEffect::new()),
            Self::Sparkle => EffectSlot::Sparkle(SparkleEffect::new()),
            Self::KnightRider => {
                EffectSlot::KnightRider(BounceEffect::new(KNIGHT_RIDER_INTERVAL))
            }
            Self::Gradient => EffectSlot::Gradient(GradientEffect::new()),
            Self::Chase => EffectSlot::Chase(ChaseEffect::new()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trail => EFFECT_NAME_TRAIL,
            Self::BlinkAll => EFFECT_NAME_BLINK_ALL,
            Self::FadeAll => EFFECT_NAME_FADE_ALL,
            Self::Wave => EFFECT_NAME_WAVE,
            Self::ChaoticBlink => EFFECT_NAME_CHAOTIC_BLINK,
            Self::Running => EFFECT_NAME_RUNNING,
            Self::Sparkle => EFFECT_NAME_SPARKLE,
            Self::KnightRider => EFFECT_NAME_KNIGHT_RIDER,
            Self::Gradient => EFFECT_NAME_GRADIENT,
            Self::Chase => EFFECT_NAME_CHASE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }
}

/// One library entry with its phase state
#[derive(Debug, Clone)]
pub enum EffectSlot {
    /// Single lit indicator running forward
    Trail(TrailEffect),
    /// Everything toggling together
    BlinkAll(BlinkAllEffect),
    /// Shared brightness ramping up and down
    FadeAll(FadeAllEffect),
    /// Single lit indicator bouncing between the ends
    Wave(BounceEffect),
    /// Every indicator randomized
    ChaoticBlink(ChaoticBlinkEffect),
    /// Sine brightness profile travelling along the bank
    Running(RunningEffect),
    /// One random indicator per step
    Sparkle(SparkleEffect),
    /// Bounce with its own phase and cadence
    KnightRider(BounceEffect),
    /// Low-intensity sine sweep with random directionals
    Gradient(GradientEffect),
    /// Decaying tail behind a moving head
    Chase(ChaseEffect),
}

impl EffectSlot {
    /// Minimum time between two visual steps of this effect
    pub fn step_interval(&self) -> Duration {
        match self {
            Self::Trail(effect) => effect.step_interval(),
            Self::BlinkAll(effect) => effect.step_interval(),
            Self::FadeAll(effect) => effect.step_interval(),
            Self::Wave(effect) => effect.step_interval(),
            Self::ChaoticBlink(effect) => effect.step_interval(),
            Self::Running(effect) => effect.step_interval(),
            Self::Sparkle(effect) => effect.step_interval(),
            Self::KnightRider(effect) => effect.step_interval(),
            Self::Gradient(effect) => effect.step_interval(),
            Self::Chase(effect) => effect.step_interval(),
        }
    }

    /// Advance this effect by one step
    pub fn step(&mut self, frame: &mut Frame<'_>, rng: &mut dyn RngCore) {
        match self {
            Self::Trail(effect) => effect.step(frame, rng),
            Self::BlinkAll(effect) => effect.step(frame, rng),
            Self::FadeAll(effect) => effect.step(frame, rng),
            Self::Wave(effect) => effect.step(frame, rng),
            Self::ChaoticBlink(effect) => effect.step(frame, rng),
            Self::Running(effect) => effect.step(frame, rng),
            Self::Sparkle(effect) => effect.step(frame, rng),
            Self::KnightRider(effect) => effect.step(frame, rng),
            Self::Gradient(effect) => effect.step(frame, rng),
            Self::Chase(effect) => effect.step(frame, rng),
        }
    }

    /// Id this slot was built from
    pub fn id(&self) -> EffectId {
        match self {
            Self::Trail(_) => EffectId::Trail,
            Self::BlinkAll(_) => EffectId::BlinkAll,
            Self::FadeAll(_) => EffectId::FadeAll,
            Self::Wave(_) => EffectId::Wave,
            Self::ChaoticBlink(_) => EffectId::ChaoticBlink,
            Self::Running(_) => EffectId::Running,
            Self::Sparkle(_) => EffectId::Sparkle,
            Self::KnightRider(_) => EffectId::KnightRider,
            Self::Gradient(_) => EffectId::Gradient,
            Self::Chase(_) => EffectId::Chase,
        }
    }
}

/// Table of every effect with its persisted phase state
///
/// Each effect is stepped only once its own interval has passed since its
/// previous step, so no effect ever blocks the control loop.
#[derive(Debug, Clone)]
pub struct EffectLibrary {
    slots: [EffectSlot; EFFECT_COUNT],
    last_step: [Option<Instant>; EFFECT_COUNT],
}

impl EffectLibrary {
    pub fn new() -> Self {
        Self {
            slots: EffectId::ALL.map(EffectId::to_slot),
            last_step: [None; EFFECT_COUNT],
        }
    }

    /// Whether `id` is due for its next step at `now`
    pub fn is_ready(&self, id: EffectId, now: Instant) -> bool {
        match self.last_step[id.index()] {
            None => true,
            Some(last) => {
                now.saturating_duration_since(last) >= self.slots[id.index()].step_interval()
            }
        }
    }

    /// Step `id` if its interval has elapsed
    ///
    /// Returns whether the frame was touched.
    pub fn step(
        &mut self,
        id: EffectId,
        now: Instant,
        frame: &mut Frame<'_>,
        rng: &mut dyn RngCore,
    ) -> bool {
        if !self.is_ready(id, now) {
            return false;
        }
        self.slots[id.index()].step(frame, rng);
        self.last_step[id.index()] = Some(now);
        true
    }
}

impl Default for EffectLibrary {
    fn default() -> Self {
        Self::new()
    }
}
