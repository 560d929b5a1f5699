//! Precondition checks for a simulation request.
//!
//! Detects:
//! - Empty process list
//! - Negative arrival times
//! - Non-positive burst times
//! - Duplicate process ids
//! - A makespan bound (latest arrival + total burst) beyond the clock range
//!
//! Checks run before any strategy so that no partial result is ever produced
//! for an invalid request.

use std::collections::HashSet;

use crate::process::{ProcessRecord, Time};
use crate::scheduler::{InputReason, SimError};

/// Collect every precondition violation, in input order.
///
/// Per process the arrival check precedes the burst check, which precedes the
/// duplicate-id check.  The clock-range check is reported last, once for the
/// whole set.  An empty list yields exactly `[NoProcesses]`.
pub fn violations(records: &[ProcessRecord]) -> Vec<InputReason> {
    if records.is_empty() {
        return vec![InputReason::NoProcesses];
    }

    let mut errors = Vec::new();
    let mut seen = HashSet::with_capacity(records.len());

    for r in records {
        if r.arrival_time < 0 {
            errors.push(InputReason::NegativeArrival {
                id: r.id,
                arrival_time: r.arrival_time,
            });
        }
        if r.burst_time <= 0 {
            errors.push(InputReason::NonPositiveBurst {
                id: r.id,
                burst_time: r.burst_time,
            });
        }
        if !seen.insert(r.id) {
            errors.push(InputReason::DuplicateId { id: r.id });
        }
    }

    let latest_arrival = records.iter().map(|r| r.arrival_time.max(0)).max().unwrap_or(0);
    if makespan_bound(records, latest_arrival).is_none() {
        errors.push(InputReason::ClockOverflow { latest_arrival });
    }

    errors
}

/// `latest_arrival + Σ burst_time`, or `None` on overflow.  No strategy's
/// clock can pass this value.  Non-positive bursts are already reported by
/// the per-process checks and count as zero here.
fn makespan_bound(records: &[ProcessRecord], latest_arrival: Time) -> Option<Time> {
    records
        .iter()
        .map(|r| r.burst_time.max(0))
        .try_fold(latest_arrival, |acc, burst| acc.checked_add(burst))
}

/// Validate `records`, reporting the first violation found.
///
/// # Errors
/// [`SimError::InvalidInput`] with the first entry of [`violations`].
pub fn validate(records: &[ProcessRecord]) -> Result<(), SimError> {
    match violations(records).into_iter().next() {
        Some(reason) => Err(SimError::InvalidInput(reason)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: u32, arrival: i64, burst: i64) -> ProcessRecord {
        ProcessRecord::numbered(id, arrival, burst)
    }

    #[test]
    fn valid_set_passes() {
        assert!(validate(&[p(1, 0, 5), p(2, 1, 3)]).is_ok());
    }

    #[test]
    fn empty_list_is_rejected() {
        assert_eq!(
            validate(&[]),
            Err(SimError::InvalidInput(InputReason::NoProcesses))
        );
    }

    #[test]
    fn zero_burst_is_rejected() {
        let err = validate(&[p(1, 0, 5), p(2, 1, 0)]).unwrap_err();
        assert_eq!(
            err,
            SimError::InvalidInput(InputReason::NonPositiveBurst { id: 2, burst_time: 0 })
        );
    }

    #[test]
    fn negative_arrival_is_rejected() {
        let err = validate(&[p(1, -1, 5)]).unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidInput(InputReason::NegativeArrival { id: 1, arrival_time: -1 })
        ));
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let err = validate(&[p(1, 0, 5), p(1, 2, 3)]).unwrap_err();
        assert_eq!(err, SimError::InvalidInput(InputReason::DuplicateId { id: 1 }));
    }

    #[test]
    fn all_violations_are_collected_in_order() {
        let v = violations(&[p(1, -2, 0), p(1, 0, 1)]);
        assert_eq!(
            v,
            vec![
                InputReason::NegativeArrival { id: 1, arrival_time: -2 },
                InputReason::NonPositiveBurst { id: 1, burst_time: 0 },
                InputReason::DuplicateId { id: 1 },
            ]
        );
    }

    #[test]
    fn late_arrival_past_clock_range_is_rejected() {
        let err = validate(&[p(1, i64::MAX - 1, 5)]).unwrap_err();
        assert_eq!(
            err,
            SimError::InvalidInput(InputReason::ClockOverflow { latest_arrival: i64::MAX - 1 })
        );
    }

    #[test]
    fn total_burst_past_clock_range_is_rejected() {
        let half = i64::MAX / 2 + 1;
        assert_eq!(
            violations(&[p(1, 0, half), p(2, 0, half)]),
            vec![InputReason::ClockOverflow { latest_arrival: 0 }]
        );
    }

    #[test]
    fn makespan_exactly_at_clock_limit_passes() {
        assert!(validate(&[p(1, i64::MAX - 5, 5)]).is_ok());
        assert!(validate(&[p(1, 0, i64::MAX - 3), p(2, 0, 3)]).is_ok());
    }
}
