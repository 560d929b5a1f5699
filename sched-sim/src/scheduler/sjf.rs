/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Shortest Job First (non-preemptive).
//!
//! At each decision point the arrived process with the smallest burst time is
//! started and runs to completion.  Ties: earliest arrival, then input order.
//! When nothing has arrived the clock jumps to the next arrival.

use tracing::debug;

use crate::config::SimConfig;
use crate::process::{ProcessOutcome, ProcessRecord};
use crate::timeline::Label;

use super::Schedule;

/// Run SJF on a validated, non-empty process set.
pub fn run(records: &[ProcessRecord], config: &SimConfig) -> Schedule {
    // Indices of processes not yet started, in input order.
    let mut pending: Vec<usize> = (0..records.len()).collect();

    let mut schedule = Schedule::with_capacity(records.len());
    let mut clock = config.clock_origin.start_time(records);

    while !pending.is_empty() {
        let pick = pending
            .iter()
            .enumerate()
            .filter(|&(_, &i)| records[i].arrival_time <= clock)
            .min_by_key(|&(_, &i)| (records[i].burst_time, records[i].arrival_time, i))
            .map(|(pos, _)| pos);

        let Some(pos) = pick else {
            let Some(next) = pending.iter().map(|&i| records[i].arrival_time).min() else {
                break;
            };
            debug!(from = clock, to = next, "SJF idle until next arrival");
            schedule.timeline.idle_until(clock, next);
            clock = next;
            continue;
        };

        let r = &records[pending.remove(pos)];
        let start = clock;
        clock += r.burst_time;
        schedule.timeline.push(Label::Busy(r.id), start, clock);
        schedule.outcomes.push(ProcessOutcome::finalize(r, clock));

        debug!(id = r.id, burst = r.burst_time, start, end = clock, "SJF dispatch");
    }

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::TimelineBlock;

    fn ids(s: &Schedule) -> Vec<u32> {
        s.outcomes.iter().map(|o| o.id).collect()
    }

    #[test]
    fn reference_scenario_matches_fcfs() {
        let procs = vec![ProcessRecord::numbered(1, 0, 5), ProcessRecord::numbered(2, 1, 3)];
        let s = run(&procs, &SimConfig::default());
        let f = super::super::fcfs::run(&procs, &SimConfig::default());
        assert_eq!(s, f);
    }

    #[test]
    fn shortest_arrived_job_goes_next() {
        let procs = vec![
            ProcessRecord::numbered(1, 0, 4),
            ProcessRecord::numbered(2, 1, 5),
            ProcessRecord::numbered(3, 2, 1),
        ];
        let s = run(&procs, &SimConfig::default());
        assert_eq!(ids(&s), vec![1, 3, 2]);
        assert_eq!(
            s.timeline.blocks(),
            &[
                TimelineBlock::new(Label::Busy(1), 0, 4),
                TimelineBlock::new(Label::Busy(3), 4, 5),
                TimelineBlock::new(Label::Busy(2), 5, 10),
            ]
        );
    }

    #[test]
    fn equal_burst_prefers_earlier_arrival_then_input_order() {
        let procs = vec![
            ProcessRecord::numbered(1, 0, 6),
            ProcessRecord::numbered(2, 3, 2),
            ProcessRecord::numbered(3, 1, 2),
            ProcessRecord::numbered(4, 1, 2),
        ];
        let s = run(&procs, &SimConfig::default());
        assert_eq!(ids(&s), vec![1, 3, 4, 2]);
    }

    #[test]
    fn idles_until_next_arrival() {
        let procs = vec![ProcessRecord::numbered(1, 0, 1), ProcessRecord::numbered(2, 4, 2)];
        let s = run(&procs, &SimConfig::default());
        assert_eq!(
            s.timeline.blocks(),
            &[
                TimelineBlock::new(Label::Busy(1), 0, 1),
                TimelineBlock::new(Label::Idle, 1, 4),
                TimelineBlock::new(Label::Busy(2), 4, 6),
            ]
        );
    }
}
