/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Process data structures shared by every scheduling strategy.
//!
//! Three types model the three stages of one simulation:
//!
//! ```text
//! caller ──(ProcessRecord)──►  SimProcess  ──(strategy)──►  ProcessOutcome
//!            ↑ input               ↑ per-run working copy        ↑ output
//!            never mutated         remaining_time ticks down      derived metrics
//! ```
//!
//! # Ownership model
//! Strategies borrow `&[ProcessRecord]` and build their own `Vec<SimProcess>`
//! for the duration of one run.  No strategy can observe another strategy's
//! bookkeeping, so the comparator can hand the same slice to all four.

use serde::{Deserialize, Serialize};

/// Stable identifier of a process within one simulation request.
pub type ProcessId = u32;

/// Simulated clock value.  Signed so that invalid input (negative arrivals)
/// can be represented and rejected by validation instead of by a parser.
pub type Time = i64;

// ── ProcessRecord (input) ─────────────────────────────────────────────────────

/// One schedulable unit as supplied by the caller.
///
/// Field aliases accept the camelCase names used by request payloads, so a
/// record can be read either as `arrival_time` or `arrivalTime`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Unique identifier; also the last-resort ordering key for display.
    pub id: ProcessId,

    /// Display label.
    pub name: String,

    /// Clock value at which the process becomes eligible to run.
    #[serde(alias = "arrivalTime")]
    pub arrival_time: Time,

    /// Total CPU time the process needs.
    #[serde(alias = "burstTime")]
    pub burst_time: Time,
}

impl ProcessRecord {
    /// Create a record with an explicit display name.
    pub fn new(id: ProcessId, name: impl Into<String>, arrival_time: Time, burst_time: Time) -> Self {
        Self {
            id,
            name: name.into(),
            arrival_time,
            burst_time,
        }
    }

    /// Create a record named `P<id>`.
    pub fn numbered(id: ProcessId, arrival_time: Time, burst_time: Time) -> Self {
        Self::new(id, format!("P{id}"), arrival_time, burst_time)
    }
}

// ── SimProcess (working copy) ─────────────────────────────────────────────────

/// Per-run mutable state for one process.
///
/// `index` points back into the caller's record slice; it doubles as the
/// input-order tie-breaker.  Invariant:
/// `0 <= remaining_time <= burst_time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SimProcess {
    pub index: usize,
    pub id: ProcessId,
    pub arrival_time: Time,
    pub burst_time: Time,
    pub remaining_time: Time,
}

impl SimProcess {
    pub fn from_record(index: usize, record: &ProcessRecord) -> Self {
        Self {
            index,
            id: record.id,
            arrival_time: record.arrival_time,
            burst_time: record.burst_time,
            remaining_time: record.burst_time,
        }
    }

    /// Build a fresh working set, one entry per record, in input order.
    pub fn working_set(records: &[ProcessRecord]) -> Vec<SimProcess> {
        records
            .iter()
            .enumerate()
            .map(|(i, r)| SimProcess::from_record(i, r))
            .collect()
    }

    pub fn has_arrived(&self, clock: Time) -> bool {
        self.arrival_time <= clock
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }

    /// Run for `units` (clamped to what is left).  Returns the units consumed.
    pub fn run_for(&mut self, units: Time) -> Time {
        let used = units.min(self.remaining_time);
        self.remaining_time -= used;
        debug_assert!(self.remaining_time >= 0 && self.remaining_time <= self.burst_time);
        used
    }
}

// ── ProcessOutcome (output) ───────────────────────────────────────────────────

/// Final per-process result of one strategy run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    pub id: ProcessId,
    pub name: String,
    pub arrival_time: Time,
    pub burst_time: Time,
    pub completion_time: Time,
    /// `completion_time - arrival_time`.
    pub turnaround_time: Time,
    /// `turnaround_time - burst_time`.
    pub waiting_time: Time,
}

impl ProcessOutcome {
    /// Derive turnaround and waiting time from a completion instant.
    pub fn finalize(record: &ProcessRecord, completion_time: Time) -> Self {
        let turnaround_time = completion_time - record.arrival_time;
        let waiting_time = turnaround_time - record.burst_time;
        debug_assert!(
            waiting_time >= 0,
            "process {} completed at {} before it could have finished",
            record.id,
            completion_time
        );

        Self {
            id: record.id,
            name: record.name.clone(),
            arrival_time: record.arrival_time,
            burst_time: record.burst_time,
            completion_time,
            turnaround_time,
            waiting_time,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
