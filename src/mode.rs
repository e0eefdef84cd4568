//! Idle mode selector
//!
//! The mode button cycles Blackout -> FullOn -> Cycling -> Blackout. The two
//! static modes paint the bank directly; Cycling hands the bank to the effect
//! scheduler.

use crate::bank::IndicatorBank;

const MODE_NAME_BLACKOUT: &str = "blackout";
const MODE_NAME_FULL_ON: &str = "full_on";
const MODE_NAME_CYCLING: &str = "cycling";

/// Idle behavior when no host preset is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Mode {
    /// All outputs off
    #[default]
    Blackout = 0,
    /// All outputs at maximum
    FullOn = 1,
    /// Rotating idle effects
    Cycling = 2,
}

impl Mode {
    /// Mode selected by the next button press
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Blackout => Self::FullOn,
            Self::FullOn => Self::Cycling,
            Self::Cycling => Self::Blackout,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blackout => MODE_NAME_BLACKOUT,
            Self::FullOn => MODE_NAME_FULL_ON,
            Self::Cycling => MODE_NAME_CYCLING,
        }
    }

    /// Paint a static mode onto the bank
    ///
    /// Returns `false` for [`Mode::Cycling`], which the bank leaves to the
    /// effect scheduler.
    pub fn paint<const N: usize, const M: usize>(self, bank: &mut IndicatorBank<N, M>) -> bool {
        match self {
            Self::Blackout => {
                bank.clear();
                true
            }
            Self::FullOn => {
                bank.fill_max();
                true
            }
            Self::Cycling => false,
        }
    }
}
