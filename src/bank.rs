//! Indicator bank
//!
//! Holds the current intensity of every primary indicator and the on/off
//! state of every directional indicator. Channel counts are fixed at compile
//! time; the directional group can additionally be disabled at startup, in
//! which case every view of it is empty.

/// Full intensity for a primary indicator
pub const MAX_INTENSITY: u8 = 255;

/// In-memory copy of the indicator outputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorBank<const N: usize, const M: usize> {
    primary: [u8; N],
    directional: [bool; M],
    directional_enabled: bool,
}

/// Mutable view of the active channels, handed to effects
#[derive(Debug)]
pub struct Frame<'a> {
    pub primary: &'a mut [u8],
    pub directional: &'a mut [bool],
}

impl<const N: usize, const M: usize> IndicatorBank<N, M> {
    /// Create a dark bank
    pub const fn new(directional_enabled: bool) -> Self {
        Self {
            primary: [0; N],
            directional: [false; M],
            directional_enabled,
        }
    }

    /// Number of active directional channels (0 when disabled)
    pub const fn directional_len(&self) -> usize {
        if self.directional_enabled { M } else { 0 }
    }

    pub fn primary(&self) -> &[u8] {
        &self.primary
    }

    pub fn directional(&self) -> &[bool] {
        &self.directional[..self.directional_len()]
    }

    pub fn primary_mut(&mut self) -> &mut [u8] {
        &mut self.primary
    }

    /// Set every primary indicator to the same intensity
    pub fn fill_primary(&mut self, intensity: u8) {
        self.primary.fill(intensity);
    }

    /// Switch every active directional indicator
    pub fn fill_directional(&mut self, on: bool) {
        let len = self.directional_len();
        self.directional[..len].fill(on);
    }

    /// Turn everything off
    pub fn clear(&mut self) {
        self.fill_primary(0);
        self.fill_directional(false);
    }

    /// Turn everything on at full intensity
    pub fn fill_max(&mut self) {
        self.fill_primary(MAX_INTENSITY);
        self.fill_directional(true);
    }

    /// Whether every channel is off
    pub fn is_dark(&self) -> bool {
        self.primary().iter().all(|&v| v == 0) && self.directional().iter().all(|&on| !on)
    }

    /// Borrow the active channels as a frame
    pub fn frame(&mut self) -> Frame<'_> {
        let len = self.directional_len();
        Frame {
            primary: &mut self.primary,
            directional: &mut self.directional[..len],
        }
    }
}

impl<const N: usize, const M: usize> Default for IndicatorBank<N, M> {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Frame<'_> {
    /// Turn every channel in the frame off
    pub fn clear(&mut self) {
        self.primary.fill(0);
        self.directional.fill(false);
    }
}
