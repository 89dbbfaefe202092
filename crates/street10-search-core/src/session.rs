//! Stale-response discarding for interactive consumers
//!
//! The search box debounces keystrokes and must never let a slow, older
//! response overwrite a newer one. Instead of timer closures, the consumer
//! holds a [`QuerySession`] and takes a [`QueryTicket`] before each
//! aggregator call; only the most recently issued ticket is current, so the
//! UI applies a response only when `ticket.is_current()` still holds.
//!
//! Nothing here cancels the in-flight request itself; the contract is
//! last-query-wins by discarding stale responses.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Debounce window consumers should apply between keystrokes, in
/// milliseconds. Bounds the aggregator's expected call frequency.
pub const DEBOUNCE_MS: u64 = 300;

/// Generation counter shared by all queries of one search box
#[derive(Debug, Default, Clone)]
pub struct QuerySession {
    latest: Arc<AtomicU64>,
}

impl QuerySession {
    /// Create a new session
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new query, invalidating every ticket issued before
    pub fn begin(&self) -> QueryTicket {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        QueryTicket {
            generation,
            latest: Arc::clone(&self.latest),
        }
    }

    /// Generation of the most recently started query
    pub fn current_generation(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }
}

/// Handle identifying one query against its session
#[derive(Debug, Clone)]
pub struct QueryTicket {
    generation: u64,
    latest: Arc<AtomicU64>,
}

impl QueryTicket {
    /// Whether this ticket still belongs to the newest query. A response
    /// carried by a stale ticket must be dropped.
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.generation
    }

    /// Generation this ticket was issued at
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_ticket_is_current() {
        let session = QuerySession::new();
        let ticket = session.begin();
        assert!(ticket.is_current());
        assert_eq!(ticket.generation(), 1);
    }

    #[test]
    fn test_newer_query_invalidates_older_ticket() {
        let session = QuerySession::new();
        let first = session.begin();
        let second = session.begin();

        assert!(!first.is_current());
        assert!(second.is_current());
        assert_eq!(session.current_generation(), 2);
    }

    #[test]
    fn test_clone_shares_generation() {
        let session = QuerySession::new();
        let clone = session.clone();

        let ticket = session.begin();
        assert_eq!(clone.current_generation(), 1);

        // A query begun on the clone invalidates the original's ticket
        let _ = clone.begin();
        assert!(!ticket.is_current());
    }

    #[test]
    fn test_stale_response_discarded() {
        let session = QuerySession::new();

        // Slow first query still in flight when a second one starts
        let slow = session.begin();
        let fast = session.begin();

        // Simulated responses arrive out of order
        let mut shown: Option<&str> = None;
        if fast.is_current() {
            shown = Some("fast results");
        }
        if slow.is_current() {
            shown = Some("slow results");
        }

        assert_eq!(shown, Some("fast results"));
    }
}
