/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! sched-sim – CPU scheduling simulation engine
//!
//! Module layout:
//!
//! ```text
//! lib.rs
//! ├── process       – input records, per-run working copies, outcomes
//! ├── timeline      – Idle | Busy(id) blocks, self-merging Gantt timeline
//! ├── validation    – precondition checks (empty set, bad times, duplicate ids)
//! ├── config/       – quantum / clock origin, YAML workload files
//! ├── scheduler/    – FCFS, SJF, SRTF, RR + `simulate()`
//! ├── metrics       – average waiting and turnaround time
//! └── compare       – all four strategies on one input, ranking
//! ```

pub mod compare;
pub mod config;
pub mod metrics;
pub mod process;
pub mod scheduler;
pub mod timeline;
pub mod validation;
