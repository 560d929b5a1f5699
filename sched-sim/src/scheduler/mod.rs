/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! CPU scheduling strategies and the `Simulate` entry point.
//!
//! Four strategies turn a validated process set into a [`Schedule`]: an
//! execution [`Timeline`] plus one [`ProcessOutcome`] per process:
//!
//! | Algorithm | Preemptive | Selection rule | Tie-break |
//! |---|---|---|---|
//! | `FCFS` | no | earliest arrival | input order |
//! | `SJF` | no | smallest burst among arrived | arrival, then input order |
//! | `SRTF` | yes, at every time unit | smallest remaining among arrived | arrival, then input order |
//! | `RR` | yes, after each quantum | FIFO ready queue | arrival, then input order |
//!
//! # Design
//!
//! | Topic | Approach |
//! |---|---|
//! | State | Stateless; every run builds its own working set from `&[ProcessRecord]` |
//! | Idle label | `Label::Idle` / `Label::Busy(id)` instead of a string sentinel |
//! | Block merging | Done once, in [`Timeline::push`] |
//! | Errors | Checked before any strategy runs; strategies themselves cannot fail |
//! | Thread safety | Pure functions, no shared state, safe to call concurrently |
//!
//! # Example
//! ```rust
//! use sched_sim::config::SimConfig;
//! use sched_sim::process::ProcessRecord;
//! use sched_sim::scheduler::{simulate, Algorithm};
//!
//! let procs = vec![ProcessRecord::numbered(1, 0, 5), ProcessRecord::numbered(2, 1, 3)];
//! let report = simulate(Algorithm::Srtf, &procs, &SimConfig::default()).unwrap();
//! assert_eq!(report.avg_waiting_time, 1.5);
//! ```

pub mod error;
pub mod fcfs;
pub mod round_robin;
pub mod sjf;
pub mod srtf;

pub use error::{InputReason, SimError};

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::SimConfig;
use crate::metrics::Metrics;
use crate::process::{ProcessOutcome, ProcessRecord};
use crate::timeline::{Timeline, TimelineBlock};
use crate::validation;

// ── Algorithm ─────────────────────────────────────────────────────────────────

/// Scheduling strategy selector.
///
/// The derived `Ord` follows declaration order, which is also the fixed
/// precedence used to break ties when ranking: FCFS < SJF < SRTF < RR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "FCFS")]
    Fcfs,
    #[serde(rename = "SJF")]
    Sjf,
    #[serde(rename = "SRTF")]
    Srtf,
    #[serde(rename = "RR")]
    RoundRobin,
}

impl Algorithm {
    /// Every strategy, in precedence order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srtf,
        Algorithm::RoundRobin,
    ];

    /// Short wire name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Srtf => "SRTF",
            Algorithm::RoundRobin => "RR",
        }
    }

    /// Human-readable description.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First-Come, First-Served",
            Algorithm::Sjf => "Shortest Job First (non-preemptive)",
            Algorithm::Srtf => "Shortest Remaining Time First (preemptive)",
            Algorithm::RoundRobin => "Round Robin",
        }
    }

    pub fn is_preemptive(self) -> bool {
        matches!(self, Algorithm::Srtf | Algorithm::RoundRobin)
    }

    /// Run this strategy on an already validated process set.
    pub fn run(self, records: &[ProcessRecord], config: &SimConfig) -> Schedule {
        match self {
            Algorithm::Fcfs => fcfs::run(records, config),
            Algorithm::Sjf => sjf::run(records, config),
            Algorithm::Srtf => srtf::run(records, config),
            Algorithm::RoundRobin => round_robin::run(records, config),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SimError;

    /// Case-insensitive; `RR` may also be spelled `ROUND_ROBIN` / `round-robin`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "FCFS" => Ok(Algorithm::Fcfs),
            "SJF" => Ok(Algorithm::Sjf),
            "SRTF" => Ok(Algorithm::Srtf),
            "RR" | "ROUND_ROBIN" => Ok(Algorithm::RoundRobin),
            _ => Err(SimError::InvalidAlgorithm(s.to_string())),
        }
    }
}

// ── Schedule ──────────────────────────────────────────────────────────────────

/// Raw output of one strategy run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    pub timeline: Timeline,
    /// One entry per process, in completion order.
    pub outcomes: Vec<ProcessOutcome>,
}

impl Schedule {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            timeline: Timeline::new(),
            outcomes: Vec::with_capacity(n),
        }
    }

    /// Outcomes sorted by process id (display order).
    pub fn outcomes_by_id(&self) -> Vec<ProcessOutcome> {
        let mut v = self.outcomes.clone();
        v.sort_by_key(|o| o.id);
        v
    }
}

// ── SimulationReport ──────────────────────────────────────────────────────────

/// Response of the `Simulate` operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub algorithm: Algorithm,
    /// Result set, in completion order.
    pub result: Vec<ProcessOutcome>,
    /// Gantt timeline.
    pub gantt: Vec<TimelineBlock>,
    pub avg_waiting_time: f64,
    pub avg_turnaround_time: f64,
}

impl SimulationReport {
    /// Sort the result set by process id in place.
    pub fn sort_result_by_id(&mut self) {
        self.result.sort_by_key(|o| o.id);
    }
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Simulate `records` under `algorithm`.
///
/// # Errors
/// [`SimError::InvalidInput`] if `records` fails validation.  Nothing is
/// simulated in that case.
pub fn simulate(
    algorithm: Algorithm,
    records: &[ProcessRecord],
    config: &SimConfig,
) -> Result<SimulationReport, SimError> {
    validation::validate(records)?;

    info!(
        algorithm = %algorithm,
        preemptive = algorithm.is_preemptive(),
        process_count = records.len(),
        quantum = config.quantum.get(),
        origin = ?config.clock_origin,
        "=== simulate() ==="
    );

    let schedule = algorithm.run(records, config);
    let metrics = Metrics::from_outcomes(&schedule.outcomes)?;

    info!(
        algorithm = %algorithm,
        blocks = schedule.timeline.len(),
        makespan = ?schedule.timeline.end(),
        avg_waiting_time = metrics.avg_waiting_time,
        avg_turnaround_time = metrics.avg_turnaround_time,
        "=== Simulation complete ==="
    );

    Ok(SimulationReport {
        algorithm,
        result: schedule.outcomes,
        gantt: schedule.timeline.into_blocks(),
        avg_waiting_time: metrics.avg_waiting_time,
        avg_turnaround_time: metrics.avg_turnaround_time,
    })
}

/// Like [`simulate`], but takes the algorithm by name.
///
/// # Errors
/// [`SimError::InvalidAlgorithm`] for an unrecognised name, otherwise as
/// [`simulate`].
pub fn simulate_named(
    algorithm: &str,
    records: &[ProcessRecord],
    config: &SimConfig,
) -> Result<SimulationReport, SimError> {
    let algorithm: Algorithm = algorithm.parse()?;
    simulate(algorithm, records, config)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
