//! Bookkeeping for sample-based statistics.
//!
//! A trial (sample attempt) is exactly one of completed, failed or
//! in-progress. The collector guards against double-counting completed
//! samples when `read_sample` is called more than once per trial.

use serde::{Deserialize, Serialize};

/// Counters for sample-based statistics collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsCollector {
    /// Number of completed samples
    n_samples: usize,
    /// Number of failed sample attempts
    n_failed: usize,
    /// `true` iff the current sample has not yet been started
    sample_new: bool,
}

impl Default for StatisticsCollector {
    fn default() -> Self {
        Self {
            n_samples: 0,
            n_failed: 0,
            sample_new: true,
        }
    }
}

impl StatisticsCollector {
    /// Create a collector ready to begin a new sample.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero both counters and mark the current sample as new.
    pub fn reset(&mut self) {
        self.n_samples = 0;
        self.n_failed = 0;
        self.sample_new = true;
    }

    /// Mark the current in-progress sample as started.
    pub fn init_sample(&mut self) {
        self.sample_new = false;
    }

    /// Count a sample attempt that aborted before completion.
    pub fn init_failed(&mut self) {
        self.n_failed += 1;
    }

    /// Signal that the current sample is complete.
    ///
    /// Increments the completed-sample counter only if the sample had been
    /// started, then marks the next sample as new. Calling this twice for the
    /// same trial counts it once.
    pub fn read_sample(&mut self) {
        if !self.sample_new {
            self.n_samples += 1;
            self.sample_new = true;
        }
    }

    /// Number of completed samples collected so far.
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Number of failed sample attempts.
    pub fn n_failed(&self) -> usize {
        self.n_failed
    }

    /// Check whether the current sample has not yet been started.
    pub fn is_sample_new(&self) -> bool {
        self.sample_new
    }
}

/// The outcome of a single stochastic trial: which variant fixated, where the
/// initial mutant was placed, and how long fixation took.
///
/// `mutant_node == -1` means no sample has been collected. Families without a
/// spatial index concept (SDE) force the field to `0` instead, since `-1` is
/// reserved for "unset".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixationData {
    /// Index of the node where the initial mutant was placed; `-1` if unset
    pub mutant_node: i32,
    /// Trait of the initial mutant
    pub mutant_trait: usize,
    /// Trait of the resident population
    pub resident_trait: usize,
    /// Trait that ultimately fixated
    pub type_fixed: usize,
    /// Time at which fixation occurred, in generations
    pub time_fixed: f64,
    /// Number of elementary updates until fixation
    pub updates_fixed: f64,
}

impl Default for FixationData {
    fn default() -> Self {
        Self {
            mutant_node: -1,
            mutant_trait: 0,
            resident_trait: 0,
            type_fixed: 0,
            time_fixed: 0.0,
            updates_fixed: 0.0,
        }
    }
}

impl FixationData {
    /// Clear the record back to the "no sample collected" state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check whether a sample has been collected.
    pub fn is_set(&self) -> bool {
        self.mutant_node >= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_starts_new() {
        let stats = StatisticsCollector::new();

        assert_eq!(stats.n_samples(), 0);
        assert_eq!(stats.n_failed(), 0);
        assert!(stats.is_sample_new());
    }

    #[test]
    fn test_single_sample_cycle() {
        let mut stats = StatisticsCollector::new();

        stats.reset();
        stats.init_sample();
        stats.read_sample();

        assert_eq!(stats.n_samples(), 1);
        assert_eq!(stats.n_failed(), 0);
        assert!(stats.is_sample_new());
    }

    #[test]
    fn test_read_sample_idempotent() {
        let mut stats = StatisticsCollector::new();

        stats.init_sample();
        stats.read_sample();
        // second read without an intervening init must not count again
        stats.read_sample();

        assert_eq!(stats.n_samples(), 1);
    }

    #[test]
    fn test_read_without_init_does_not_count() {
        let mut stats = StatisticsCollector::new();

        stats.read_sample();

        assert_eq!(stats.n_samples(), 0);
        assert!(stats.is_sample_new());
    }

    #[test]
    fn test_failed_attempts_counted_separately() {
        let mut stats = StatisticsCollector::new();

        stats.init_sample();
        stats.init_failed();
        stats.init_sample();
        stats.read_sample();

        assert_eq!(stats.n_samples(), 1);
        assert_eq!(stats.n_failed(), 1);
    }

    #[test]
    fn test_reset_zeroes_counters() {
        let mut stats = StatisticsCollector::new();
        stats.init_sample();
        stats.read_sample();
        stats.init_failed();

        stats.reset();

        assert_eq!(stats.n_samples(), 0);
        assert_eq!(stats.n_failed(), 0);
        assert!(stats.is_sample_new());
    }

    #[test]
    fn test_fixation_data_unset_by_default() {
        let data = FixationData::default();

        assert!(!data.is_set());
        assert_eq!(data.mutant_node, -1);
    }

    #[test]
    fn test_fixation_data_reset() {
        let mut data = FixationData {
            mutant_node: 17,
            mutant_trait: 1,
            resident_trait: 0,
            type_fixed: 1,
            time_fixed: 42.5,
            updates_fixed: 4250.0,
        };
        assert!(data.is_set());

        data.reset();
        assert!(!data.is_set());
    }
}
