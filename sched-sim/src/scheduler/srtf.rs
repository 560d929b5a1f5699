/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Shortest Remaining Time First (preemptive).
//!
//! # Reference semantics
//! Time advances in unit ticks.  At every tick the arrived, unfinished
//! process with the smallest `remaining_time` runs for one unit; ties go to
//! the earliest arrival, then to input order.  A tick with no eligible
//! process is idle.  [`run_per_tick`] implements exactly this.
//!
//! # Event-driven execution
//! [`run`] produces identical output without visiting every tick.  Between
//! two arrivals the running process only gets shorter while every other
//! candidate stays put, so the selection cannot change until either the
//! running process finishes or a new process arrives.  `run` therefore jumps
//! straight to `min(completion, next arrival)`.  Cost is
//! O(n · (n + arrivals)) instead of O(n · Σ burst).

use tracing::debug;

use crate::config::SimConfig;
use crate::process::{ProcessOutcome, ProcessRecord, SimProcess, Time};
use crate::timeline::Label;

use super::Schedule;

/// Index of the process that should run at `clock`, if any.
fn select(procs: &[SimProcess], clock: Time) -> Option<usize> {
    procs
        .iter()
        .filter(|p| p.has_arrived(clock) && !p.is_finished())
        .min_by_key(|p| (p.remaining_time, p.arrival_time, p.index))
        .map(|p| p.index)
}

/// Earliest arrival strictly after `clock`.
fn next_arrival(procs: &[SimProcess], clock: Time) -> Option<Time> {
    procs
        .iter()
        .filter(|p| !p.has_arrived(clock))
        .map(|p| p.arrival_time)
        .min()
}

/// Run SRTF on a validated, non-empty process set (event-driven).
pub fn run(records: &[ProcessRecord], config: &SimConfig) -> Schedule {
    let mut procs = SimProcess::working_set(records);
    let mut schedule = Schedule::with_capacity(records.len());
    let mut clock = config.clock_origin.start_time(records);
    let mut finished = 0usize;

    while finished < procs.len() {
        let upcoming = next_arrival(&procs, clock);

        let Some(i) = select(&procs, clock) else {
            let Some(next) = upcoming else {
                break;
            };
            debug!(from = clock, to = next, "SRTF idle until next arrival");
            schedule.timeline.idle_until(clock, next);
            clock = next;
            continue;
        };

        let p = &mut procs[i];
        let horizon = match upcoming {
            Some(t) => (t - clock).min(p.remaining_time),
            None => p.remaining_time,
        };

        let start = clock;
        clock += p.run_for(horizon);
        schedule.timeline.push(Label::Busy(p.id), start, clock);

        debug!(
            id = p.id,
            start,
            end = clock,
            remaining = p.remaining_time,
            "SRTF slice"
        );

        if p.is_finished() {
            finished += 1;
            schedule
                .outcomes
                .push(ProcessOutcome::finalize(&records[i], clock));
        }
    }

    schedule
}

/// Run SRTF one time unit at a time.
///
/// Slower than [`run`] but a direct transcription of the selection rule; kept
/// as the reference the event-driven version is checked against.
pub fn run_per_tick(records: &[ProcessRecord], config: &SimConfig) -> Schedule {
    let mut procs = SimProcess::working_set(records);
    let mut schedule = Schedule::with_capacity(records.len());
    let mut clock = config.clock_origin.start_time(records);
    let mut finished = 0usize;

    while finished < procs.len() {
        match select(&procs, clock) {
            None => schedule.timeline.push(Label::Idle, clock, clock + 1),
            Some(i) => {
                let p = &mut procs[i];
                p.run_for(1);
                schedule.timeline.push(Label::Busy(p.id), clock, clock + 1);
                if p.is_finished() {
                    finished += 1;
                    schedule
                        .outcomes
                        .push(ProcessOutcome::finalize(&records[i], clock + 1));
                }
            }
        }
        clock += 1;
    }

    schedule
}
