//! Ordering of overlapping list fetches.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

/// Orders overlapping list fetches on one panel.
///
/// Every fetch takes a ticket; only the most recently issued ticket may
/// publish its response. A slow response started before a reconfiguration
/// is dropped instead of overwriting newer data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchSequence {
    latest: u64,
}

impl FetchSequence {
    /// Issue a ticket for a fetch that is about to start, superseding all
    /// earlier ones.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether a fetch holding `ticket` is still the current one.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest == ticket
    }
}
