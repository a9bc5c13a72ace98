//! Shared control and configuration for running searches across threads.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::errors::{ChessError, ChessResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadingConfig {
    pub threads: usize,
}

impl Default for ThreadingConfig {
    fn default() -> Self {
        Self { threads: 1 }
    }
}

impl ThreadingConfig {
    #[inline]
    pub fn normalized_threads(self) -> usize {
        self.threads.max(1)
    }
}

/// Cooperative cancellation flag plus a node counter, shared by every
/// thread working on one search.
#[derive(Debug, Default)]
pub struct SearchControl {
    stop: AtomicBool,
    nodes_visited: AtomicU64,
}

impl SearchControl {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn should_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes_visited.load(Ordering::Relaxed)
    }

    /// Counts one node and fails once a stop has been requested.
    #[inline]
    pub fn visit(&self) -> ChessResult<()> {
        if self.should_stop() {
            return Err(ChessError::SearchCancelled);
        }
        self.nodes_visited.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    pub fn reset(&self) {
        self.stop.store(false, Ordering::Relaxed);
        self.nodes_visited.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::{SearchControl, ThreadingConfig};
    use crate::errors::ChessError;

    #[test]
    fn threading_config_normalizes_threads() {
        assert_eq!(ThreadingConfig { threads: 0 }.normalized_threads(), 1);
        assert_eq!(ThreadingConfig::default().threads, 1);
    }

    #[test]
    fn control_counts_nodes_until_stopped() {
        let control = SearchControl::new();
        assert!(control.visit().is_ok());
        assert!(control.visit().is_ok());
        assert_eq!(control.nodes(), 2);

        control.request_stop();
        assert_eq!(control.visit(), Err(ChessError::SearchCancelled));
        assert_eq!(control.nodes(), 2);

        control.reset();
        assert!(!control.should_stop());
        assert_eq!(control.nodes(), 0);
    }
}
