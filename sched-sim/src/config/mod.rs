//! Simulation configuration and workload file loading.
//!
//! [`SimConfig`] carries the two knobs the engine understands: the
//! Round-Robin quantum and where the simulated clock starts.
//!
//! Workloads can be read from a YAML file:
//! ```yaml
//! quantum: 2            # optional, Round-Robin only
//! origin: first-arrival # optional: first-arrival | zero
//! processes:
//!   - id: 1
//!     name: P1          # optional, defaults to "P<id>"
//!     arrival_time: 0
//!     burst_time: 5
//!   - id: 2
//!     arrivalTime: 1    # camelCase is accepted as well
//!     burstTime: 3
//! ```
//!
//! Loading only checks structure.  Semantic checks (negative arrivals, zero
//! bursts, duplicate ids) belong to [`crate::validation`].

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::process::{ProcessId, ProcessRecord, Time};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Quantum used when none is given or the given one is not positive.
pub const DEFAULT_QUANTUM: Time = 2;

// ── Quantum ───────────────────────────────────────────────────────────────────

/// Round-Robin time slice.  Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Quantum(Time);

impl Quantum {
    /// Normalise a caller-supplied value: missing or non-positive falls back
    /// to [`DEFAULT_QUANTUM`].
    pub fn normalize(raw: Option<i64>) -> Self {
        match raw {
            Some(q) if q > 0 => Quantum(q),
            Some(q) => {
                debug!(quantum = q, default = DEFAULT_QUANTUM, "non-positive quantum, using default");
                Quantum(DEFAULT_QUANTUM)
            }
            None => Quantum(DEFAULT_QUANTUM),
        }
    }

    pub fn get(self) -> Time {
        self.0
    }
}

impl Default for Quantum {
    fn default() -> Self {
        Quantum(DEFAULT_QUANTUM)
    }
}

// ── ClockOrigin ───────────────────────────────────────────────────────────────

/// Where the simulated clock starts.
///
/// Completion, turnaround and waiting times do not depend on the origin; only
/// the presence of a leading idle block does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClockOrigin {
    /// Start at the earliest arrival time; the timeline has no idle prefix.
    #[default]
    FirstArrival,
    /// Start at `0`; an idle block precedes a late first arrival.
    Zero,
}

impl ClockOrigin {
    /// Initial clock value for `records` (which must be non-empty).
    pub fn start_time(self, records: &[ProcessRecord]) -> Time {
        match self {
            ClockOrigin::Zero => 0,
            ClockOrigin::FirstArrival => records
                .iter()
                .map(|r| r.arrival_time)
                .min()
                .unwrap_or(0),
        }
    }
}

impl FromStr for ClockOrigin {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "first-arrival" | "first_arrival" => Ok(ClockOrigin::FirstArrival),
            "zero" | "0" => Ok(ClockOrigin::Zero),
            other => Err(format!(
                "unknown clock origin '{other}' (valid: first-arrival, zero)"
            )),
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Per-request engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimConfig {
    pub quantum: Quantum,
    pub clock_origin: ClockOrigin,
}

impl SimConfig {
    pub fn with_origin(mut self, clock_origin: ClockOrigin) -> Self {
        self.clock_origin = clock_origin;
        self
    }
}

// ── Private YAML deserialization types ────────────────────────────────────────

/// Top-level wrapper that maps directly onto the YAML file layout.
#[derive(Debug, Deserialize)]
struct WorkloadFile {
    #[serde(default)]
    quantum: Option<i64>,
    #[serde(default)]
    origin: Option<ClockOrigin>,
    #[serde(default)]
    processes: Vec<ProcessEntry>,
}

/// Per-process fields as they appear in the YAML file.
#[derive(Debug, Deserialize)]
struct ProcessEntry {
    id: ProcessId,
    name: Option<String>,
    #[serde(alias = "arrivalTime")]
    arrival_time: Time,
    #[serde(alias = "burstTime")]
    burst_time: Time,
}

// ── Workload ──────────────────────────────────────────────────────────────────

/// A process set plus the optional settings read from a workload file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workload {
    pub processes: Vec<ProcessRecord>,
    /// Raw quantum from the file; normalised by [`Workload::config`].
    pub quantum: Option<i64>,
    pub clock_origin: Option<ClockOrigin>,
}

impl Workload {
    /// Parse a workload file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or the YAML does not match
    /// the expected layout.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading workload from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open workload file: {}", path.display()))?;

        Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to parse workload file: {}", path.display()))
    }

    /// Parse a workload from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let file: WorkloadFile =
            serde_yaml::from_str(content).context("workload YAML does not match expected layout")?;

        if file.processes.is_empty() {
            warn!("Workload contains no processes");
        }

        let processes: Vec<ProcessRecord> = file
            .processes
            .into_iter()
            .map(|e| {
                let name = e.name.unwrap_or_else(|| format!("P{}", e.id));
                debug!(
                    "  Process: {} | id: {} | arrival: {} | burst: {}",
                    name, e.id, e.arrival_time, e.burst_time
                );
                ProcessRecord::new(e.id, name, e.arrival_time, e.burst_time)
            })
            .collect();

        info!(
            process_count = processes.len(),
            quantum = ?file.quantum,
            origin = ?file.origin,
            "Workload loaded"
        );

        Ok(Self {
            processes,
            quantum: file.quantum,
            clock_origin: file.origin,
        })
    }

    /// Resolve the engine config.  Explicit overrides win over file values.
    pub fn config(&self, quantum: Option<i64>, origin: Option<ClockOrigin>) -> SimConfig {
        SimConfig {
            quantum: Quantum::normalize(quantum.or(self.quantum)),
            clock_origin: origin.or(self.clock_origin).unwrap_or_default(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper: write a YAML string to a temp file and return it.
    fn yaml_tempfile(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    // ── Quantum ───────────────────────────────────────────────────────────────

    #[test]
    fn quantum_defaults_when_missing_or_non_positive() {
        assert_eq!(Quantum::normalize(None).get(), DEFAULT_QUANTUM);
        assert_eq!(Quantum::normalize(Some(0)).get(), DEFAULT_QUANTUM);
        assert_eq!(Quantum::normalize(Some(-3)).get(), DEFAULT_QUANTUM);
        assert_eq!(Quantum::normalize(Some(5)).get(), 5);
    }

    // ── ClockOrigin ───────────────────────────────────────────────────────────

    #[test]
    fn clock_origin_start_time() {
        let records = vec![ProcessRecord::numbered(1, 4, 1), ProcessRecord::numbered(2, 3, 1)];
        assert_eq!(ClockOrigin::FirstArrival.start_time(&records), 3);
        assert_eq!(ClockOrigin::Zero.start_time(&records), 0);
    }

    #[test]
    fn clock_origin_parses_from_str() {
        assert_eq!("zero".parse::<ClockOrigin>(), Ok(ClockOrigin::Zero));
        assert_eq!(
            "First-Arrival".parse::<ClockOrigin>(),
            Ok(ClockOrigin::FirstArrival)
        );
        assert!("later".parse::<ClockOrigin>().is_err());
    }

    // ── Workload: load_from_file ──────────────────────────────────────────────

    #[test]
    fn load_example_yaml() {
        let yaml = r#"
quantum: 3
origin: zero
processes:
  - id: 1
    name: editor
    arrival_time: 0
    burst_time: 5
  - id: 2
    arrivalTime: 1
    burstTime: 3
"#;
        let f = yaml_tempfile(yaml);
        let w = Workload::load_from_file(f.path()).unwrap();

        assert_eq!(w.quantum, Some(3));
        assert_eq!(w.clock_origin, Some(ClockOrigin::Zero));
        assert_eq!(
            w.processes,
            vec![
                ProcessRecord::new(1, "editor", 0, 5),
                ProcessRecord::new(2, "P2", 1, 3),
            ]
        );
    }

    #[test]
    fn optional_settings_absent() {
        let w = Workload::from_yaml_str("processes:\n  - {id: 1, arrival_time: 0, burst_time: 1}\n")
            .unwrap();
        assert_eq!(w.quantum, None);
        assert_eq!(w.clock_origin, None);
        assert_eq!(w.config(None, None), SimConfig::default());
    }

    #[test]
    fn overrides_win_over_file_values() {
        let w = Workload {
            quantum: Some(4),
            clock_origin: Some(ClockOrigin::Zero),
            ..Default::default()
        };
        let cfg = w.config(Some(1), Some(ClockOrigin::FirstArrival));
        assert_eq!(cfg.quantum.get(), 1);
        assert_eq!(cfg.clock_origin, ClockOrigin::FirstArrival);

        // File value applies when no override is given; bad values normalise.
        let w = Workload { quantum: Some(-1), ..Default::default() };
        assert_eq!(w.config(None, None).quantum.get(), DEFAULT_QUANTUM);
    }

    #[test]
    fn missing_file_returns_error() {
        let result = Workload::load_from_file(Path::new("/nonexistent/path/workload.yaml"));
        assert!(result.is_err());
    }

    #[test]
    fn malformed_yaml_returns_error() {
        let f = yaml_tempfile("processes: [ {id: one, arrival_time: x} ]");
        assert!(Workload::load_from_file(f.path()).is_err());
    }

    // ── Shipped demo workloads ────────────────────────────────────────────────

    fn demo(name: &str) -> Workload {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../demos").join(name);
        Workload::load_from_file(&path).unwrap()
    }

    fn demo_waits(w: &Workload) -> Vec<f64> {
        let cfg = w.config(None, None);
        crate::compare::compare(&w.processes, &cfg)
            .unwrap()
            .iter()
            .map(|s| s.avg_waiting_time)
            .collect()
    }

    #[test]
    fn demo_two_processes_loads_and_compares() {
        let w = demo("two_processes.yaml");
        assert_eq!(w.processes.len(), 2);
        assert_eq!(w.config(None, None), SimConfig::default());
        assert_eq!(demo_waits(&w), vec![2.0, 2.0, 1.5, 3.0]);
    }

    #[test]
    fn demo_late_start_loads_and_compares() {
        let w = demo("late_start.yaml");
        assert_eq!(w.processes.len(), 4);
        assert_eq!(w.processes[0], ProcessRecord::new(1, "compiler", 2, 6));

        let cfg = w.config(None, None);
        assert_eq!(cfg.quantum.get(), 3);
        assert_eq!(cfg.clock_origin, ClockOrigin::Zero);
        assert_eq!(demo_waits(&w), vec![2.75, 2.75, 2.0, 3.25]);
    }

    #[test]
    fn negative_values_are_loaded_for_validation_to_reject() {
        let w = Workload::from_yaml_str(
            "processes:\n  - {id: 1, arrival_time: -1, burst_time: 0}\n",
        )
        .unwrap();
        assert_eq!(w.processes[0].arrival_time, -1);
        assert_eq!(w.processes[0].burst_time, 0);
    }
}
