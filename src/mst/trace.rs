//! Step-by-step trace of one Kruskal run.
//!
//! Every decision point appends one [`StepEntry`] holding owned copies of
//! the spanning-tree accumulator and the DSU parent array as they were at
//! that moment. Entries are never mutated after being appended; the trace
//! is the sole audit trail of a run and replays it without re-execution.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::mst::dsu::DisjointSetUnion;
use crate::mst::edge::{Edge, MstEdge};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Initial,
    EdgeAdded,
    EdgeSkipped,
    Finished,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StepKind::Initial => "initial",
            StepKind::EdgeAdded => "edge_added",
            StepKind::EdgeSkipped => "edge_skipped",
            StepKind::Finished => "finished",
        };
        write!(f, "{label}")
    }
}

/// One decision point of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepEntry {
    pub kind: StepKind,
    pub description: String,
    /// Edge under consideration; absent for the `initial` entry and reused
    /// unchanged by the `finished` entry.
    pub processed_edge: Option<MstEdge>,
    /// Spanning-tree accumulator at this point, owned copy.
    pub mst_snapshot: Vec<MstEdge>,
    /// DSU parent array at this point, owned copy of length `n_nodes`.
    pub dsu_snapshot: Vec<usize>,
}

impl StepEntry {
    pub(crate) fn initial(n_nodes: usize, dsu: &DisjointSetUnion) -> Self {
        Self {
            kind: StepKind::Initial,
            description: format!("initial state: {n_nodes} nodes, each in its own component"),
            processed_edge: None,
            mst_snapshot: Vec::new(),
            dsu_snapshot: dsu.parents().to_vec(),
        }
    }

    pub(crate) fn added(edge: Edge, mst: &[MstEdge], dsu: &DisjointSetUnion) -> Self {
        Self {
            kind: StepKind::EdgeAdded,
            description: format!(
                "edge ({}, {}) with weight {} added to the spanning tree",
                edge.u, edge.v, edge.weight
            ),
            processed_edge: Some(MstEdge::from(edge)),
            mst_snapshot: mst.to_vec(),
            dsu_snapshot: dsu.parents().to_vec(),
        }
    }

    pub(crate) fn skipped(edge: Edge, mst: &[MstEdge], dsu: &DisjointSetUnion) -> Self {
        Self {
            kind: StepKind::EdgeSkipped,
            description: format!(
                "edge ({}, {}) with weight {} skipped: nodes {} and {} are already connected",
                edge.u, edge.v, edge.weight, edge.u, edge.v
            ),
            processed_edge: Some(MstEdge::from(edge)),
            mst_snapshot: mst.to_vec(),
            dsu_snapshot: dsu.parents().to_vec(),
        }
    }

    pub(crate) fn finished(
        edge: Edge,
        mst: &[MstEdge],
        total_weight: i64,
        dsu: &DisjointSetUnion,
    ) -> Self {
        Self {
            kind: StepKind::Finished,
            description: format!(
                "spanning tree complete: {} edges, total weight {total_weight}",
                mst.len()
            ),
            processed_edge: Some(MstEdge::from(edge)),
            mst_snapshot: mst.to_vec(),
            dsu_snapshot: dsu.parents().to_vec(),
        }
    }
}

impl fmt::Display for StepEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.description)
    }
}

/// Resolves every node's representative from a frozen parent array.
///
/// Walks parent pointers without compressing anything, so it is safe to run
/// against a trace snapshot. Nodes sharing a return value are in the same
/// component at that step.
pub fn snapshot_roots(parents: &[usize]) -> Vec<usize> {
    (0..parents.len())
        .map(|node| {
            let mut root = node;
            while parents[root] != root {
                root = parents[root];
            }
            root
        })
        .collect()
}
