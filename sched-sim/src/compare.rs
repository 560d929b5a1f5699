/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Side-by-side comparison of all four strategies.
//!
//! [`compare`] runs every [`Algorithm`] on the same process set and returns
//! one [`StrategyStatistic`] each, in the fixed order FCFS, SJF, SRTF, RR.
//! Ordering by quality is left to the caller; [`rank`] implements the rule
//! consumers rely on:
//!
//! 1. ascending average waiting time;
//! 2. on equal averages, strategy precedence FCFS < SJF < SRTF < RR.
//!
//! Each strategy builds its own working set from the shared `&[ProcessRecord]`
//! borrow, so no run can observe another run's bookkeeping.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::SimConfig;
use crate::metrics::{Metrics, StrategyStatistic};
use crate::process::ProcessRecord;
use crate::scheduler::{Algorithm, SimError};
use crate::validation;

/// Run all four strategies on `records`.
///
/// # Errors
/// [`SimError::InvalidInput`] if `records` fails validation.
pub fn compare(
    records: &[ProcessRecord],
    config: &SimConfig,
) -> Result<Vec<StrategyStatistic>, SimError> {
    validation::validate(records)?;

    info!(
        process_count = records.len(),
        quantum = config.quantum.get(),
        "=== compare() ==="
    );

    Algorithm::ALL
        .iter()
        .map(|&algorithm| -> Result<StrategyStatistic, SimError> {
            let schedule = algorithm.run(records, config);
            let metrics = Metrics::from_outcomes(&schedule.outcomes)?;
            debug!(
                algorithm = %algorithm,
                avg_waiting_time = metrics.avg_waiting_time,
                avg_turnaround_time = metrics.avg_turnaround_time,
                "strategy evaluated"
            );
            Ok(StrategyStatistic::new(algorithm, metrics))
        })
        .collect()
}

/// Total order used for ranking: waiting time, then precedence.
fn ranking_order(a: &StrategyStatistic, b: &StrategyStatistic) -> Ordering {
    a.avg_waiting_time
        .total_cmp(&b.avg_waiting_time)
        .then_with(|| a.algorithm.cmp(&b.algorithm))
}

// ── Ranking ───────────────────────────────────────────────────────────────────

/// Statistics sorted best-first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Ranking {
    entries: Vec<StrategyStatistic>,
}

/// Sort `stats` best-first.
pub fn rank(stats: &[StrategyStatistic]) -> Ranking {
    let mut entries = stats.to_vec();
    entries.sort_by(ranking_order);
    Ranking { entries }
}

impl Ranking {
    pub fn entries(&self) -> &[StrategyStatistic] {
        &self.entries
    }

    pub fn best(&self) -> Option<&StrategyStatistic> {
        self.entries.first()
    }

    pub fn worst(&self) -> Option<&StrategyStatistic> {
        self.entries.last()
    }

    /// 0-based rank of `algorithm`, or `None` if it was not compared.
    pub fn position(&self, algorithm: Algorithm) -> Option<usize> {
        self.entries.iter().position(|s| s.algorithm == algorithm)
    }

    /// How much more average waiting time `algorithm` incurs than the best.
    pub fn gap_to_best(&self, algorithm: Algorithm) -> Option<f64> {
        let best = self.best()?;
        let this = self.entries.iter().find(|s| s.algorithm == algorithm)?;
        Some(this.avg_waiting_time - best.avg_waiting_time)
    }

    /// `(worst − best) / worst × 100`.  `None` when the worst strategy already
    /// has zero average waiting time.
    pub fn saving_percent(&self) -> Option<f64> {
        let best = self.best()?;
        let worst = self.worst()?;
        if worst.avg_waiting_time <= 0.0 {
            return None;
        }
        Some((worst.avg_waiting_time - best.avg_waiting_time) / worst.avg_waiting_time * 100.0)
    }
}

// ── Insight ───────────────────────────────────────────────────────────────────

/// Headline of a ranking: which strategy won, by how much.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub best: Algorithm,
    pub best_label: &'static str,
    pub best_preemptive: bool,
    pub worst: Algorithm,
    pub saving_percent: Option<f64>,
}

impl Ranking {
    /// Summarise the ranking.  `None` for an empty ranking.
    pub fn insight(&self) -> Option<Insight> {
        let best = self.best()?.algorithm;
        let worst = self.worst()?.algorithm;
        Some(Insight {
            best,
            best_label: best.label(),
            best_preemptive: best.is_preemptive(),
            worst,
            saving_percent: self.saving_percent(),
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
