//! Latest-wins sequencing for overlapping backend requests.
//!
//! Each fetch takes a ticket before the request is sent. When the response
//! arrives it may only be applied if no newer ticket has been issued since;
//! otherwise it is stale and dropped. In-flight requests are never cancelled.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic ticket issued to one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Issues tickets and decides whether a response is still current.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    issued: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a request about to be sent.
    pub fn issue(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// True if `ticket` is the most recently issued one.
    ///
    /// Callers must check this while holding the lock on whatever the
    /// response is applied to.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.issued.load(Ordering::Acquire) == ticket.0
    }

    /// Number of tickets issued so far.
    pub fn issued(&self) -> u64 {
        self.issued.load(Ordering::Acquire)
    }
}
