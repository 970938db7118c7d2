//! Patient id allocation.

use crate::PatientId;

/// Monotonic id counter owned by a single store.
///
/// Ids start at 1 and are never handed out twice. The counter lives inside
/// the store rather than in process-wide static state, so every store (and
/// every test) starts from a fresh sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGenerator {
    next: u32,
}

impl IdGenerator {
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Return the current counter value, then advance it.
    ///
    /// The owning store calls this at most once per stored record, and store
    /// capacity is capped at [`MAX_CAPACITY`](crate::MAX_CAPACITY), so the
    /// counter stays within `u32`.
    pub const fn next_id(&mut self) -> PatientId {
        let id = PatientId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to [`next_id`](Self::next_id) will return.
    #[must_use]
    pub const fn peek(&self) -> PatientId {
        PatientId(self.next)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
