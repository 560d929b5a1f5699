/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Execution timeline (Gantt chart data).
//!
//! A [`Timeline`] is an ordered list of [`TimelineBlock`]s.  Strategies only
//! ever append through [`Timeline::push`], which keeps three invariants:
//!
//! * every block has `end > start`;
//! * blocks are contiguous (`blocks[i].end == blocks[i + 1].start`);
//! * no two adjacent blocks carry the same [`Label`] – a run that continues
//!   the previous block's label extends it instead of opening a new one.

use serde::{Deserialize, Serialize};

use crate::process::{ProcessId, Time};

// ── Label ─────────────────────────────────────────────────────────────────────

/// What occupied the CPU during a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    /// No process was eligible.
    Idle,
    /// The given process was running.
    Busy(ProcessId),
}

impl Label {
    pub fn is_idle(&self) -> bool {
        matches!(self, Label::Idle)
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Idle => write!(f, "idle"),
            Label::Busy(id) => write!(f, "{id}"),
        }
    }
}

// ── TimelineBlock ─────────────────────────────────────────────────────────────

/// One contiguous interval `[start, end)` with a single occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineBlock {
    pub label: Label,
    pub start: Time,
    pub end: Time,
}

impl TimelineBlock {
    pub fn new(label: Label, start: Time, end: Time) -> Self {
        Self { label, start, end }
    }

    pub fn duration(&self) -> Time {
        self.end - self.start
    }
}

// ── Timeline ──────────────────────────────────────────────────────────────────

/// Append-only, self-merging sequence of blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    blocks: Vec<TimelineBlock>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `[start, end)` for `label`.
    ///
    /// Empty intervals are ignored.  If the previous block has the same label
    /// it is extended to `end`.
    pub fn push(&mut self, label: Label, start: Time, end: Time) {
        if end <= start {
            return;
        }
        debug_assert!(
            self.end().map_or(true, |e| e == start),
            "timeline gap or overlap: last end {:?}, new start {}",
            self.end(),
            start
        );

        match self.blocks.last_mut() {
            Some(last) if last.label == label => last.end = end,
            _ => self.blocks.push(TimelineBlock::new(label, start, end)),
        }
    }

    /// Append an idle block covering `[from, to)` if there is a gap.
    pub fn idle_until(&mut self, from: Time, to: Time) {
        self.push(Label::Idle, from, to);
    }

    pub fn blocks(&self) -> &[TimelineBlock] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<TimelineBlock> {
        self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn start(&self) -> Option<Time> {
        self.blocks.first().map(|b| b.start)
    }

    pub fn end(&self) -> Option<Time> {
        self.blocks.last().map(|b| b.end)
    }

    /// Total time spent running processes (idle blocks excluded).
    pub fn busy_time(&self) -> Time {
        self.blocks
            .iter()
            .filter(|b| !b.label.is_idle())
            .map(TimelineBlock::duration)
            .sum()
    }

    /// Total idle time.
    pub fn idle_time(&self) -> Time {
        self.blocks
            .iter()
            .filter(|b| b.label.is_idle())
            .map(TimelineBlock::duration)
            .sum()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
