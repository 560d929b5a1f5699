/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};

use sched_sim::compare::{compare, rank, Insight, Ranking};
use sched_sim::config::{ClockOrigin, Workload};
use sched_sim::metrics::StrategyStatistic;
use sched_sim::scheduler::{simulate, Algorithm};

// ── CLI argument definition ───────────────────────────────────────────────────

/// CPU scheduling simulator.
///
/// Example:
///   sched-sim simulate -a SRTF -w demos/two_processes.yaml
///   sched-sim compare -w demos/two_processes.yaml -q 3
#[derive(Debug, Parser)]
#[command(
    name = "sched-sim",
    about = "CPU scheduling simulator – FCFS, SJF, SRTF, RR",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Simulate one algorithm and print its timeline and per-process results.
    Simulate {
        /// Algorithm: FCFS, SJF, SRTF or RR.
        #[arg(short = 'a', long = "algorithm")]
        algorithm: String,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Run all four algorithms and rank them by average waiting time.
    Compare {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Debug, Args)]
struct InputArgs {
    /// Path to the YAML workload file.
    #[arg(short = 'w', long = "workload")]
    workload: PathBuf,

    /// Round-Robin quantum; overrides the file.  Non-positive means default (2).
    #[arg(short = 'q', long = "quantum", allow_negative_numbers = true)]
    quantum: Option<i64>,

    /// Clock origin: first-arrival or zero; overrides the file.
    #[arg(short = 'o', long = "origin")]
    origin: Option<ClockOrigin>,
}

// ── Compare output ────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct CompareOutput {
    stats: Vec<StrategyStatistic>,
    ranking: Ranking,
    insight: Option<Insight>,
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn run_simulate(algorithm: &str, input: &InputArgs) -> Result<String> {
    let algorithm: Algorithm = algorithm.parse()?;
    let workload = Workload::load_from_file(&input.workload)?;
    let config = workload.config(input.quantum, input.origin);

    let mut report = simulate(algorithm, &workload.processes, &config)
        .with_context(|| format!("{algorithm} simulation failed"))?;
    report.sort_result_by_id();

    serde_yaml::to_string(&report).context("Failed to serialise simulation report")
}

fn run_compare(input: &InputArgs) -> Result<String> {
    let workload = Workload::load_from_file(&input.workload)?;
    let config = workload.config(input.quantum, input.origin);

    let stats = compare(&workload.processes, &config).context("comparison failed")?;
    let ranking = rank(&stats);

    let insight = ranking.insight();
    if let Some(i) = &insight {
        info!(
            best = %i.best,
            label = i.best_label,
            saving_percent = ?i.saving_percent,
            "Best algorithm for this input"
        );
    }

    let output = CompareOutput {
        stats,
        ranking,
        insight,
    };

    serde_yaml::to_string(&output).context("Failed to serialise comparison")
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    // Logs go to stderr; stdout carries the YAML report.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Command::Simulate { algorithm, input } => run_simulate(algorithm, input),
        Command::Compare { input } => run_compare(input),
    };

    match result {
        Ok(yaml) => print!("{yaml}"),
        Err(e) => {
            error!("{:#}", e);
            process::exit(1);
        }
    }
}
