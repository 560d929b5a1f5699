/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Structured error types for the simulation engine.
//!
//! Two types model the two failure layers:
//!
//! * [`InputReason`]: which precondition a process set violated (carries the
//!   offending id and value).
//! * [`SimError`]: top-level failure returned from
//!   [`simulate()`](super::simulate) and [`compare()`](crate::compare::compare).
//!
//! Both are detected before any strategy runs.  Once a simulation starts it
//! cannot fail, so there is no mid-run error variant.

use thiserror::Error;

use crate::process::{ProcessId, Time};

// ── Input preconditions ───────────────────────────────────────────────────────

/// Detailed reason why a process set was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputReason {
    /// The process list (or result set) was empty.
    NoProcesses,

    /// A process declared an arrival time below zero.
    NegativeArrival { id: ProcessId, arrival_time: Time },

    /// A process declared a burst time of zero or less.
    NonPositiveBurst { id: ProcessId, burst_time: Time },

    /// Two processes share the same id.
    DuplicateId { id: ProcessId },

    /// The latest arrival plus the total burst time does not fit in [`Time`],
    /// so the simulated clock could not represent the makespan.
    ClockOverflow { latest_arrival: Time },
}

impl std::fmt::Display for InputReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputReason::NoProcesses => write!(f, "process list is empty"),

            InputReason::NegativeArrival { id, arrival_time } => write!(
                f,
                "process {} has negative arrival time {}",
                id, arrival_time
            ),

            InputReason::NonPositiveBurst { id, burst_time } => write!(
                f,
                "process {} has non-positive burst time {}",
                id, burst_time
            ),

            InputReason::DuplicateId { id } => {
                write!(f, "process id {} appears more than once", id)
            }

            InputReason::ClockOverflow { latest_arrival } => write!(
                f,
                "latest arrival {} plus total burst time exceeds the clock range",
                latest_arrival
            ),
        }
    }
}

// ── Top-level errors ──────────────────────────────────────────────────────────

/// Top-level error type of the engine.
///
/// | Variant | Typical HTTP mapping |
/// |---|---|
/// | `InvalidAlgorithm` | 400 Bad Request |
/// | `InvalidInput` | 400 Bad Request |
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// The algorithm name is not recognised.
    #[error("invalid algorithm: '{0}' (valid: FCFS, SJF, SRTF, RR)")]
    InvalidAlgorithm(String),

    /// The process set failed a precondition check.
    #[error("invalid input: {0}")]
    InvalidInput(InputReason),
}

impl From<InputReason> for SimError {
    fn from(reason: InputReason) -> Self {
        SimError::InvalidInput(reason)
    }
}
