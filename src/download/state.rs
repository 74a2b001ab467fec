//! Run state tracking.

/// Counters for one pipeline run.
///
/// `accepted` only increments on a verified successful write; `attempted`
/// increments on every download attempt. Sequence numbers are derived from
/// `accepted`, so filenames are dense: a failed attempt never leaves a gap.
#[derive(Debug, Clone, Default)]
pub struct RunState {
    /// Successful downloads written to disk.
    pub accepted: usize,
    /// Download attempts started, including failures.
    pub attempted: usize,
    /// Requested maximum; `accepted` never exceeds it.
    pub limit: usize,
}

impl RunState {
    pub fn new(limit: usize) -> Self {
        Self {
            accepted: 0,
            attempted: 0,
            limit,
        }
    }

    /// Whether the run has downloaded everything it was asked for.
    pub fn is_complete(&self) -> bool {
        self.accepted >= self.limit
    }

    /// Record a download attempt being started.
    pub fn record_attempt(&mut self) {
        self.attempted += 1;
    }

    /// Record a verified successful write and return the sequence number
    /// assigned to it.
    pub fn record_success(&mut self) -> usize {
        debug_assert!(self.accepted < self.limit);
        self.accepted += 1;
        self.accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dense_sequence_numbers() {
        let mut state = RunState::new(3);
        state.record_attempt();
        assert_eq!(state.record_success(), 1);
        // A failed attempt consumes no sequence number
        state.record_attempt();
        state.record_attempt();
        assert_eq!(state.record_success(), 2);
        assert_eq!(state.attempted, 3);
        assert_eq!(state.accepted, 2);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_complete_at_limit() {
        let mut state = RunState::new(1);
        state.record_attempt();
        state.record_success();
        assert!(state.is_complete());
    }
}
