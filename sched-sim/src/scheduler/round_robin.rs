/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Round Robin with a fixed quantum.
//!
//! Processes enter a FIFO ready queue in arrival order (ties: input order).
//! The head runs for `min(remaining, quantum)`.  After each slice, processes
//! that arrived during the slice are enqueued first; only then is the
//! preempted process (if unfinished) appended to the back.  An empty queue
//! with processes still to come idles the clock forward to the next arrival.

use std::collections::VecDeque;

use tracing::debug;

use crate::config::SimConfig;
use crate::process::{ProcessOutcome, ProcessRecord, SimProcess, Time};
use crate::timeline::Label;

use super::Schedule;

/// Move every process in `arrivals[*next..]` that has arrived by `clock`
/// onto the back of `queue`.
fn admit(
    procs: &[SimProcess],
    arrivals: &[usize],
    next: &mut usize,
    clock: Time,
    queue: &mut VecDeque<usize>,
) {
    while let Some(&i) = arrivals.get(*next) {
        if !procs[i].has_arrived(clock) {
            break;
        }
        queue.push_back(i);
        *next += 1;
    }
}

/// Run Round Robin on a validated, non-empty process set.
pub fn run(records: &[ProcessRecord], config: &SimConfig) -> Schedule {
    let quantum = config.quantum.get();
    let mut procs = SimProcess::working_set(records);

    // Arrival order; the stable sort keeps input order for equal arrivals.
    let mut arrivals: Vec<usize> = (0..procs.len()).collect();
    arrivals.sort_by_key(|&i| procs[i].arrival_time);

    let mut schedule = Schedule::with_capacity(records.len());
    let mut clock = config.clock_origin.start_time(records);
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(procs.len());
    let mut next = 0usize;

    admit(&procs, &arrivals, &mut next, clock, &mut queue);

    while !queue.is_empty() || next < arrivals.len() {
        if queue.is_empty() {
            let jump_to = procs[arrivals[next]].arrival_time;
            debug!(from = clock, to = jump_to, "RR idle until next arrival");
            schedule.timeline.idle_until(clock, jump_to);
            clock = jump_to;
            admit(&procs, &arrivals, &mut next, clock, &mut queue);
        }

        let Some(i) = queue.pop_front() else {
            break;
        };

        let start = clock;
        clock += procs[i].run_for(quantum);
        schedule.timeline.push(Label::Busy(procs[i].id), start, clock);

        debug!(
            id = procs[i].id,
            start,
            end = clock,
            remaining = procs[i].remaining_time,
            queued = queue.len(),
            "RR slice"
        );

        admit(&procs, &arrivals, &mut next, clock, &mut queue);

        if procs[i].is_finished() {
            schedule
                .outcomes
                .push(ProcessOutcome::finalize(&records[i], clock));
        } else {
            queue.push_back(i);
        }
    }

    schedule
}
