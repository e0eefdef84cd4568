//! Host byte link
//!
//! The UART receive interrupt pushes bytes here and the control loop drains
//! them once per tick. Access is guarded by `critical-section`, the storage is
//! a fixed-size `heapless::Deque`.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// Error returned when the link buffer is full.
///
/// Carries the number of bytes that were accepted before it filled up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkFull(pub usize);

impl core::fmt::Display for LinkFull {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "host link full after {} bytes", self.0)
    }
}

/// Bounded byte queue shared between the receive interrupt and the loop
pub struct HostLink<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<u8, SIZE>>>,
}

impl<const SIZE: usize> HostLink<SIZE> {
    /// Create an empty link.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Queue one received byte.
    pub fn push(&self, byte: u8) -> Result<(), LinkFull> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(byte).map_err(|_| LinkFull(0))
        })
    }

    /// Queue a run of received bytes.
    ///
    /// Bytes that do not fit are dropped.
    pub fn push_slice(&self, bytes: &[u8]) -> Result<(), LinkFull> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            for (accepted, &byte) in bytes.iter().enumerate() {
                if queue.push_back(byte).is_err() {
                    return Err(LinkFull(accepted));
                }
            }
            Ok(())
        })
    }

    /// Take the oldest byte, if any.
    pub fn pop(&self) -> Option<u8> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    /// Drop everything still queued.
    pub fn discard(&self) {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().clear());
    }

    pub fn is_empty(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().is_empty())
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }
}

impl<const SIZE: usize> Default for HostLink<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}
