//! Kruskal driver: sorted edge loop over a fresh DSU, emitting the trace.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::mst::dsu::DisjointSetUnion;
use crate::mst::edge::{Edge, MstEdge};
use crate::mst::trace::StepEntry;

/// Result of one [`compute_mst`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MstRun {
    pub n_nodes: usize,
    /// Accepted edges in acceptance order.
    pub mst_edges: Vec<MstEdge>,
    pub total_weight: i64,
    pub trace: Vec<StepEntry>,
}

impl MstRun {
    /// True iff the accepted edges span all nodes (`n_nodes - 1` of them;
    /// trivially true for zero or one node). False means the input graph
    /// was disconnected and `mst_edges` is a partial forest.
    pub fn is_spanning(&self) -> bool {
        self.mst_edges.len() + 1 == self.n_nodes.max(1)
    }
}

/// Computes a minimum spanning tree of the undirected graph on the nodes
/// `0..n_nodes` with the given weighted edges, via Kruskal's algorithm.
///
/// Every edge endpoint must lie in `0..n_nodes`; that is the caller's
/// contract (see [`crate::parse`]) and violations panic. The input slice is
/// left untouched; a sorted copy drives the loop.
///
/// The returned trace starts with an `initial` entry, holds one entry per
/// processed edge, and ends with a `finished` entry exactly when the run
/// accepted `n_nodes - 1` edges — at which point remaining edges are not
/// processed at all. A trace without a `finished` entry signals a
/// disconnected graph.
pub fn compute_mst(n_nodes: usize, edges: &[Edge]) -> MstRun {
    let mut sorted_edges = edges.to_vec();
    sorted_edges.sort();

    let mut dsu = DisjointSetUnion::new(n_nodes);
    let mut mst_edges: Vec<MstEdge> = Vec::new();
    let mut total_weight = 0i64;
    let mut trace = Vec::with_capacity(sorted_edges.len() + 2);

    trace.push(StepEntry::initial(n_nodes, &dsu));

    for edge in sorted_edges {
        if dsu.find(edge.u) != dsu.find(edge.v) {
            dsu.union(edge.u, edge.v);
            mst_edges.push(MstEdge::from(edge));
            total_weight += edge.weight;
            debug!("accepted edge {edge}, tree now has {} edges", mst_edges.len());
            trace.push(StepEntry::added(edge, &mst_edges, &dsu));

            if mst_edges.len() + 1 == n_nodes {
                debug!("spanning tree complete at total weight {total_weight}");
                trace.push(StepEntry::finished(edge, &mst_edges, total_weight, &dsu));
                break;
            }
        } else {
            debug!("skipped edge {edge}: would close a cycle");
            trace.push(StepEntry::skipped(edge, &mst_edges, &dsu));
        }
    }

    MstRun {
        n_nodes,
        mst_edges,
        total_weight,
        trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mst::trace::{StepKind, snapshot_roots};

    fn edges(list: &[(i64, usize, usize)]) -> Vec<Edge> {
        list.iter().map(|&(w, u, v)| Edge::new(w, u, v)).collect()
    }

    #[test]
    fn basic_connected_graph() {
        let input = edges(&[(1, 0, 1), (3, 0, 2), (2, 1, 2), (4, 1, 3), (5, 2, 3)]);
        let run = compute_mst(4, &input);

        assert_eq!(run.total_weight, 7);
        assert_eq!(run.mst_edges.len(), 3);
        assert!(run.is_spanning());
        assert_eq!(run.trace.last().unwrap().kind, StepKind::Finished);
    }

    #[test]
    fn disconnected_graph_yields_partial_forest() {
        let input = edges(&[(1, 0, 1), (10, 2, 3)]);
        let run = compute_mst(4, &input);

        assert_eq!(run.mst_edges.len(), 2);
        assert!(run.mst_edges.len() < 4 - 1);
        assert_eq!(run.total_weight, 11);
        assert!(!run.is_spanning());
        assert!(run.trace.iter().all(|entry| entry.kind != StepKind::Finished));
        // initial + both edges processed
        assert_eq!(run.trace.len(), 3);
    }

    #[test]
    fn cycle_edge_is_skipped() {
        let input = edges(&[(1, 0, 1), (2, 1, 2), (5, 0, 2)]);
        let run = compute_mst(3, &input);

        assert_eq!(run.total_weight, 3);
        assert_eq!(run.mst_edges.len(), 2);
        assert!(
            !run.mst_edges
                .iter()
                .any(|edge| edge.weight == 5 && (edge.u, edge.v) == (0, 2))
        );
    }

    #[test]
    fn single_node_trace_is_just_the_initial_entry() {
        let run = compute_mst(1, &[]);
        assert!(run.mst_edges.is_empty());
        assert_eq!(run.total_weight, 0);
        assert_eq!(run.trace.len(), 1);
        assert_eq!(run.trace[0].kind, StepKind::Initial);
        assert_eq!(run.trace[0].dsu_snapshot, vec![0]);
        assert!(run.is_spanning());
    }

    #[test]
    fn zero_nodes_yield_an_empty_initial_snapshot() {
        let run = compute_mst(0, &[]);
        assert_eq!(run.trace.len(), 1);
        assert!(run.trace[0].dsu_snapshot.is_empty());
        assert!(run.is_spanning());
    }

    #[test]
    fn uniform_weight_cycle_keeps_total_fixed() {
        let input = edges(&[(10, 0, 1), (10, 1, 2), (10, 2, 3), (10, 3, 0)]);
        let run = compute_mst(4, &input);
        assert_eq!(run.total_weight, 30);
        assert_eq!(run.mst_edges.len(), 3);
    }

    #[test]
    fn ties_are_processed_in_lexicographic_edge_order() {
        // All weights equal: processing order must follow (weight, u, v).
        let input = edges(&[(5, 2, 3), (5, 0, 2), (5, 0, 1), (5, 1, 3)]);
        let run = compute_mst(4, &input);
        let processed: Vec<(usize, usize)> = run
            .trace
            .iter()
            .filter_map(|entry| entry.processed_edge)
            .map(|edge| (edge.u, edge.v))
            .collect();
        // Sorted order is (0,1), (0,2), (1,3), (2,3); the first three are
        // accepted, finished repeats (1,3), and (2,3) is never reached.
        assert_eq!(processed, vec![(0, 1), (0, 2), (1, 3), (1, 3)]);
    }

    #[test]
    fn early_termination_leaves_remaining_edges_untraced() {
        let input = edges(&[(1, 0, 1), (2, 1, 2), (3, 0, 2), (4, 1, 2), (5, 0, 1)]);
        let run = compute_mst(3, &input);
        // initial, two added, finished; the weight-3..5 edges never appear.
        assert_eq!(run.trace.len(), 4);
        let kinds: Vec<StepKind> = run.trace.iter().map(|entry| entry.kind).collect();
        assert_eq!(
            kinds,
            vec![
                StepKind::Initial,
                StepKind::EdgeAdded,
                StepKind::EdgeAdded,
                StepKind::Finished,
            ]
        );
    }

    #[test]
    fn self_loops_and_duplicates_are_rejected_as_cycles() {
        let input = edges(&[(1, 0, 0), (2, 0, 1), (2, 0, 1), (3, 1, 1)]);
        let run = compute_mst(2, &input);
        assert_eq!(run.mst_edges.len(), 1);
        assert_eq!(run.total_weight, 2);
        let kinds: Vec<StepKind> = run.trace.iter().map(|entry| entry.kind).collect();
        // Self-loop (1,0,0) sorts first and is skipped, then (2,0,1) is
        // accepted, reaching n - 1 = 1 edges and finishing early.
        assert_eq!(
            kinds,
            vec![
                StepKind::Initial,
                StepKind::EdgeSkipped,
                StepKind::EdgeAdded,
                StepKind::Finished,
            ]
        );
    }

    #[test]
    fn input_slice_is_not_reordered() {
        let input = edges(&[(9, 0, 1), (1, 1, 2), (4, 0, 2)]);
        let before = input.clone();
        let _ = compute_mst(3, &input);
        assert_eq!(input, before);
    }

    #[test]
    fn runs_are_deterministic() {
        let input = edges(&[(2, 0, 1), (2, 1, 2), (2, 0, 2), (7, 2, 3), (7, 0, 3)]);
        let first = compute_mst(4, &input);
        let second = compute_mst(4, &input);
        assert_eq!(first, second);
    }

    #[test]
    fn trace_length_counts_initial_plus_processed_edges() {
        let input = edges(&[(1, 0, 1), (10, 2, 3)]);
        let run = compute_mst(5, &input);
        // Disconnected: every edge is processed, no finished entry.
        assert_eq!(run.trace.len(), 1 + input.len());
    }

    #[test]
    fn snapshots_record_history_not_the_final_state() {
        let input = edges(&[(1, 0, 1), (2, 1, 2), (3, 2, 3)]);
        let run = compute_mst(4, &input);

        assert!(run.trace[0].mst_snapshot.is_empty());
        assert_eq!(run.trace[0].dsu_snapshot, vec![0, 1, 2, 3]);

        assert_eq!(run.trace[1].mst_snapshot.len(), 1);
        assert_eq!(run.trace[1].dsu_snapshot, vec![0, 0, 2, 3]);

        assert_eq!(run.trace[2].mst_snapshot.len(), 2);
        assert_eq!(run.trace[3].mst_snapshot.len(), 3);

        // Mutating the returned accumulator must not touch the snapshots.
        let mut run = run;
        run.mst_edges.clear();
        assert_eq!(run.trace[3].mst_snapshot.len(), 3);
        assert_eq!(run.trace[1].mst_snapshot.len(), 1);
    }

    #[test]
    fn component_grouping_follows_the_trace() {
        let input = edges(&[(1, 0, 1), (5, 2, 3), (9, 1, 2)]);
        let run = compute_mst(4, &input);

        let after_first = snapshot_roots(&run.trace[1].dsu_snapshot);
        assert_eq!(after_first[0], after_first[1]);
        assert_ne!(after_first[0], after_first[2]);
        assert_ne!(after_first[2], after_first[3]);

        let after_last = snapshot_roots(&run.trace.last().unwrap().dsu_snapshot);
        assert!(after_last.iter().all(|&root| root == after_last[0]));
    }
}
