//! Host-side detector core
//!
//! The detector runs on the host machine, polls for the running program and
//! tells the controller how many buttons that program uses. Process polling
//! stays with the host; this module holds the parts shared with the device:
//! the program lookup table, change-only reporting and the wire encoding.

use core::fmt::Write;

use heapless::String;

/// Longest encoded preset: three digits and the terminator
pub const ENCODED_PRESET_LEN: usize = 4;

/// Static program id to button count table
///
/// Programs missing from the table map to 0, which leaves the device idle.
#[derive(Debug, Clone, Copy)]
pub struct PresetTable<'a> {
    entries: &'a [(&'a str, u8)],
}

impl<'a> PresetTable<'a> {
    pub const fn new(entries: &'a [(&'a str, u8)]) -> Self {
        Self { entries }
    }

    /// Button count for `program`
    pub fn lookup(&self, program: &str) -> u8 {
        self.entries
            .iter()
            .find(|(name, _)| *name == program)
            .map(|&(_, count)| count)
            .unwrap_or(0)
    }

    /// Button count for the detected program, 0 when nothing is detected
    pub fn resolve(&self, program: Option<&str>) -> u8 {
        program.map_or(0, |name| self.lookup(name))
    }
}

/// Sends a value only when it differs from the previous one
#[derive(Debug, Clone, Default)]
pub struct PresetReporter {
    last_sent: Option<u8>,
}

impl PresetReporter {
    pub const fn new() -> Self {
        Self { last_sent: None }
    }

    pub const fn last_sent(&self) -> Option<u8> {
        self.last_sent
    }

    /// Record a poll result, returning the value to send if it changed
    pub fn update(&mut self, count: u8) -> Option<u8> {
        if self.last_sent == Some(count) {
            return None;
        }
        self.last_sent = Some(count);
        Some(count)
    }
}

/// Encode a button count the way the controller expects it
pub fn encode_preset(count: u8) -> String<ENCODED_PRESET_LEN> {
    let mut out = String::new();
    // u8 plus newline always fits
    let _ = writeln!(out, "{}", count);
    out
}
