//! Result-set aggregation.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg waiting time | mean(turnaround − burst) |
//! | Avg turnaround time | mean(completion − arrival) |
//!
//! An empty result set is rejected rather than averaged to zero.

use serde::{Deserialize, Serialize};

use crate::process::ProcessOutcome;
use crate::scheduler::{Algorithm, InputReason, SimError};

/// Averages over one result set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub avg_waiting_time: f64,
    pub avg_turnaround_time: f64,
}

impl Metrics {
    /// Reduce `outcomes` to their averages.
    ///
    /// # Errors
    /// [`SimError::InvalidInput`] with [`InputReason::NoProcesses`] if
    /// `outcomes` is empty.
    pub fn from_outcomes(outcomes: &[ProcessOutcome]) -> Result<Self, SimError> {
        if outcomes.is_empty() {
            return Err(SimError::InvalidInput(InputReason::NoProcesses));
        }

        let n = outcomes.len() as f64;
        // Summed as f64: individual times fit in `Time`, their total may not.
        let total_wait: f64 = outcomes.iter().map(|o| o.waiting_time as f64).sum();
        let total_tat: f64 = outcomes.iter().map(|o| o.turnaround_time as f64).sum();

        Ok(Self {
            avg_waiting_time: total_wait / n,
            avg_turnaround_time: total_tat / n,
        })
    }
}

/// Averages for one strategy, as reported by the comparator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyStatistic {
    #[serde(rename = "name")]
    pub algorithm: Algorithm,
    pub avg_waiting_time: f64,
    pub avg_turnaround_time: f64,
}

impl StrategyStatistic {
    pub fn new(algorithm: Algorithm, metrics: Metrics) -> Self {
        Self {
            algorithm,
            avg_waiting_time: metrics.avg_waiting_time,
            avg_turnaround_time: metrics.avg_turnaround_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessRecord;

    #[test]
    fn averages_over_outcomes() {
        let outcomes = vec![
            ProcessOutcome::finalize(&ProcessRecord::numbered(1, 0, 5), 5),
            ProcessOutcome::finalize(&ProcessRecord::numbered(2, 1, 3), 8),
        ];
        let m = Metrics::from_outcomes(&outcomes).unwrap();
        assert!((m.avg_waiting_time - 2.0).abs() < 1e-10);
        assert!((m.avg_turnaround_time - 6.0).abs() < 1e-10);
    }

    #[test]
    fn averages_do_not_overflow_on_large_times() {
        let big = i64::MAX / 2;
        let outcomes = vec![
            ProcessOutcome::finalize(&ProcessRecord::numbered(1, 0, 1), big),
            ProcessOutcome::finalize(&ProcessRecord::numbered(2, 0, 1), big + 1),
            ProcessOutcome::finalize(&ProcessRecord::numbered(3, 0, 1), big + 2),
        ];
        let m = Metrics::from_outcomes(&outcomes).unwrap();
        assert!(m.avg_turnaround_time > 0.0);
        assert!((m.avg_turnaround_time - (big as f64 + 1.0)).abs() / (big as f64) < 1e-9);
    }

    #[test]
    fn empty_result_set_is_rejected() {
        assert_eq!(
            Metrics::from_outcomes(&[]),
            Err(SimError::InvalidInput(InputReason::NoProcesses))
        );
    }

    #[test]
    fn statistic_serializes_algorithm_as_name() {
        let s = StrategyStatistic::new(
            Algorithm::Sjf,
            Metrics { avg_waiting_time: 1.0, avg_turnaround_time: 2.0 },
        );
        let yaml = serde_yaml::to_string(&s).unwrap();
        assert!(yaml.contains("name: SJF"), "got: {yaml}");
    }
}
