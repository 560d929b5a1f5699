/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! First-Come, First-Served.
//!
//! Processes run to completion in arrival order.  The sort is stable, so
//! equal arrivals keep their input order.  O(n log n).

use tracing::debug;

use crate::config::SimConfig;
use crate::process::{ProcessOutcome, ProcessRecord};
use crate::timeline::Label;

use super::Schedule;

/// Run FCFS on a validated, non-empty process set.
pub fn run(records: &[ProcessRecord], config: &SimConfig) -> Schedule {
    let mut order: Vec<&ProcessRecord> = records.iter().collect();
    order.sort_by_key(|r| r.arrival_time);

    let mut schedule = Schedule::with_capacity(records.len());
    let mut clock = config.clock_origin.start_time(records);

    for r in order {
        if clock < r.arrival_time {
            schedule.timeline.idle_until(clock, r.arrival_time);
            clock = r.arrival_time;
        }

        let start = clock;
        clock += r.burst_time;
        schedule.timeline.push(Label::Busy(r.id), start, clock);
        schedule.outcomes.push(ProcessOutcome::finalize(r, clock));

        debug!(id = r.id, start, end = clock, "FCFS dispatch");
    }

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClockOrigin;
    use crate::timeline::TimelineBlock;

    #[test]
    fn reference_scenario() {
        let procs = vec![ProcessRecord::numbered(1, 0, 5), ProcessRecord::numbered(2, 1, 3)];
        let s = run(&procs, &SimConfig::default());

        assert_eq!(
            s.timeline.blocks(),
            &[
                TimelineBlock::new(Label::Busy(1), 0, 5),
                TimelineBlock::new(Label::Busy(2), 5, 8),
            ]
        );
        assert_eq!(s.outcomes[0].completion_time, 5);
        assert_eq!(s.outcomes[0].waiting_time, 0);
        assert_eq!(s.outcomes[1].completion_time, 8);
        assert_eq!(s.outcomes[1].waiting_time, 4);
    }

    #[test]
    fn equal_arrivals_keep_input_order() {
        let procs = vec![
            ProcessRecord::numbered(3, 2, 1),
            ProcessRecord::numbered(1, 0, 2),
            ProcessRecord::numbered(2, 2, 1),
        ];
        let s = run(&procs, &SimConfig::default());
        let ids: Vec<_> = s.outcomes.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[test]
    fn gap_between_arrivals_is_idle() {
        let procs = vec![ProcessRecord::numbered(1, 0, 2), ProcessRecord::numbered(2, 5, 1)];
        let s = run(&procs, &SimConfig::default());
        assert_eq!(
            s.timeline.blocks(),
            &[
                TimelineBlock::new(Label::Busy(1), 0, 2),
                TimelineBlock::new(Label::Idle, 2, 5),
                TimelineBlock::new(Label::Busy(2), 5, 6),
            ]
        );
        assert_eq!(s.outcomes[1].waiting_time, 0);
    }

    #[test]
    fn late_first_arrival_starts_there_by_default() {
        let procs = vec![ProcessRecord::numbered(1, 3, 2)];
        let s = run(&procs, &SimConfig::default());
        assert_eq!(s.timeline.blocks(), &[TimelineBlock::new(Label::Busy(1), 3, 5)]);
    }

    #[test]
    fn zero_origin_emits_idle_prefix() {
        let procs = vec![ProcessRecord::numbered(1, 3, 2)];
        let cfg = SimConfig::default().with_origin(ClockOrigin::Zero);
        let s = run(&procs, &cfg);
        assert_eq!(
            s.timeline.blocks(),
            &[
                TimelineBlock::new(Label::Idle, 0, 3),
                TimelineBlock::new(Label::Busy(1), 3, 5),
            ]
        );
        assert_eq!(s.outcomes[0].completion_time, 5);
    }
}
