use std::sync::Mutex;
use std::time::Duration;

use once_cell::sync::Lazy;
use serde::Serialize;

/// One node of the explored search tree.
///
/// `column` is the move that led here (`None` at the root), `maximizing` the
/// role of the side to act in this position. Children appear in exploration
/// order; branches cut off by alpha-beta were never visited and have no node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchNode {
    pub column: Option<usize>,
    pub score: i32,
    pub maximizing: bool,
    pub children: Vec<SearchNode>,
}

impl SearchNode {
    /// Nodes in this subtree, itself included.
    pub fn size(&self) -> u64 {
        1 + self.children.iter().map(SearchNode::size).sum::<u64>()
    }
}

/// Root-level score for one legal column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EvaluatedMove {
    pub column: usize,
    pub score: i32,
}

/// Everything a completed search produced, packaged for rendering and
/// logging collaborators. Immutable once built; each AI turn supersedes the
/// previous report wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub chosen_column: usize,
    pub principal_variation: Vec<usize>,
    pub evaluated_moves: Vec<EvaluatedMove>,
    pub tree: SearchNode,
    pub nodes_expanded: u64,
    pub elapsed: Duration,
    pub search_depth: u32,
}

impl SearchReport {
    /// Elapsed search time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Serialize the report as a standalone JSON copy for an external
    /// renderer. The internal tree is never handed out by reference.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

static LATEST_REPORT: Lazy<Mutex<Option<SearchReport>>> = Lazy::new(|| Mutex::new(None));

fn latest_slot() -> std::sync::MutexGuard<'static, Option<SearchReport>> {
    match LATEST_REPORT.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Process-wide holder of the most recent [`SearchReport`].
///
/// Strictly last-write-wins: each AI move replaces the slot wholesale, and
/// readers receive a clone. Assumes one AI inference in flight at a time; a
/// host serving several concurrent games needs its own per-session storage
/// instead of this slot.
pub struct DiagnosticsRecorder;

impl DiagnosticsRecorder {
    /// Replace the latest report.
    pub fn record(report: &SearchReport) {
        *latest_slot() = Some(report.clone());
    }

    /// A copy of the most recent report, if any search has run.
    pub fn latest() -> Option<SearchReport> {
        latest_slot().clone()
    }

    /// Empty the slot, e.g. when the hosting game restarts.
    pub fn clear() {
        *latest_slot() = None;
    }
}
