//! Request sequence numbers for last-request-wins rendering.
//!
//! # Design
//! Lookup issues one request per keystroke and the transport gives no
//! ordering guarantee, so a slow early response could overwrite the results
//! of a later query. Every request issued through a handler therefore
//! carries a monotonically increasing sequence number; a response is only
//! rendered if its number is at least the last rendered one, making
//! last-request-wins deterministic.

/// Hands out sequence numbers for outgoing requests and decides whether an
/// arriving response is still current.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    next: u64,
    last_rendered: u64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the sequence number for a request about to be issued.
    pub fn begin(&mut self) -> u64 {
        self.next += 1;
        self.next
    }

    /// Record that the response for `seq` is about to be rendered. Returns
    /// `false` if a response with a higher number has already been rendered,
    /// in which case this one must be dropped.
    pub fn commit(&mut self, seq: u64) -> bool {
        if seq < self.last_rendered {
            return false;
        }
        self.last_rendered = seq;
        true
    }
}
