//! Host signal parsing
//!
//! The host sends the button count of the running game as ASCII decimal
//! digits followed by any non-digit byte (normally `\n`). Digits may arrive
//! spread over several ticks; the parser keeps the partial value until the
//! terminator shows up. Once a value or an error is produced, whatever else
//! is queued on the link is thrown away.

use crate::link::HostLink;

/// Rejected host input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostInputError {
    /// A minus sign followed by digits
    Negative,
    /// A byte that cannot start a value
    Malformed(u8),
}

impl core::fmt::Display for HostInputError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HostInputError::Negative => write!(f, "negative button count"),
            HostInputError::Malformed(byte) => {
                write!(f, "unexpected byte 0x{:02x} in host input", byte)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    Idle,
    Digits(u32),
    Negative { has_digits: bool },
}

/// Incremental host value parser
#[derive(Debug, Clone)]
pub struct HostParser {
    state: ParseState,
}

impl HostParser {
    pub const fn new() -> Self {
        Self {
            state: ParseState::Idle,
        }
    }

    /// Whether a value is partially received
    pub const fn is_pending(&self) -> bool {
        !matches!(self.state, ParseState::Idle)
    }

    /// Feed one byte
    ///
    /// Returns a completed value or error, after which the parser is idle
    /// again.
    pub fn feed(&mut self, byte: u8) -> Option<Result<u32, HostInputError>> {
        let digit = byte.is_ascii_digit().then(|| u32::from(byte - b'0'));

        match (self.state, digit) {
            (ParseState::Idle, Some(d)) => {
                self.state = ParseState::Digits(d);
                None
            }
            (ParseState::Idle, None) => {
                if byte == b'-' {
                    self.state = ParseState::Negative { has_digits: false };
                    None
                } else if is_separator(byte) {
                    None
                } else {
                    Some(Err(HostInputError::Malformed(byte)))
                }
            }
            (ParseState::Digits(value), Some(d)) => {
                self.state = ParseState::Digits(value.saturating_mul(10).saturating_add(d));
                None
            }
            (ParseState::Digits(value), None) => {
                self.state = ParseState::Idle;
                Some(Ok(value))
            }
            (ParseState::Negative { .. }, Some(_)) => {
                self.state = ParseState::Negative { has_digits: true };
                None
            }
            (ParseState::Negative { has_digits }, None) => {
                self.state = ParseState::Idle;
                if has_digits {
                    Some(Err(HostInputError::Negative))
                } else {
                    Some(Err(HostInputError::Malformed(b'-')))
                }
            }
        }
    }

    /// Drain the link until one value or error is complete
    ///
    /// Leftover bytes behind a completed value are discarded. Returns `None`
    /// when the link ran dry first; partial digits are kept for the next
    /// poll.
    pub fn poll<const SIZE: usize>(
        &mut self,
        link: &HostLink<SIZE>,
    ) -> Option<Result<u32, HostInputError>> {
        while let Some(byte) = link.pop() {
            if let Some(result) = self.feed(byte) {
                link.discard();
                return Some(result);
            }
        }
        None
    }
}

impl Default for HostParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Whitespace and control bytes skipped before a value
const fn is_separator(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte.is_ascii_control()
}
