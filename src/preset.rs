//! Host preset application
//!
//! A preset is the button count of the game running on the host. Zero hands
//! the bank back to the idle logic; anything else lights that many primary
//! indicators from the start of the bank plus the whole directional bank.

use crate::bank::{IndicatorBank, MAX_INTENSITY};

/// Clamp a host value to the number of primary indicators
pub fn clamp_preset(value: u32, primary_len: usize) -> usize {
    usize::try_from(value).map_or(primary_len, |value| value.min(primary_len))
}

/// Apply `button_count` to the bank
///
/// Returns the clamped count. A zero count leaves the bank untouched.
pub fn apply<const N: usize, const M: usize>(
    bank: &mut IndicatorBank<N, M>,
    button_count: u32,
) -> usize {
    apply_count(bank, clamp_preset(button_count, N))
}

/// Light the first `count` primary indicators and every directional one
///
/// `count` is clamped to the bank width.
pub fn apply_count<const N: usize, const M: usize>(
    bank: &mut IndicatorBank<N, M>,
    count: usize,
) -> usize {
    let count = count.min(N);
    if count == 0 {
        return 0;
    }

    bank.clear();
    bank.primary_mut()[..count].fill(MAX_INTENSITY);
    bank.fill_directional(true);
    count
}
