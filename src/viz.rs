//! DOT export for trace replay.
//!
//! Derives one rendering per trace step: nodes are colored by their DSU
//! component at that step, edges already in the tree are drawn green and
//! thick, the edge under consideration orange, everything else gray. The
//! output is plain Graphviz DOT; the actual display loop lives outside this
//! crate.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use itertools::Itertools;
use petgraph::dot::{Config, Dot};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::mst::{Edge, StepEntry, snapshot_roots};

/// tab10-style palette; component colors wrap past ten components.
const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

const MST_COLOR: &str = "#2ca02c";
const PROCESSED_COLOR: &str = "#ff7f0e";
const IDLE_COLOR: &str = "gray";
const IDLE_NODE_FILL: &str = "lightblue";

fn build_graph(n_nodes: usize, edges: &[Edge]) -> UnGraph<usize, i64> {
    let mut graph = UnGraph::with_capacity(n_nodes, edges.len());
    let nodes: Vec<NodeIndex> = (0..n_nodes).map(|node| graph.add_node(node)).collect();
    for edge in edges {
        graph.add_edge(nodes[edge.u], nodes[edge.v], edge.weight);
    }
    graph
}

fn ordered(u: usize, v: usize, weight: i64) -> (usize, usize, i64) {
    if u <= v { (u, v, weight) } else { (v, u, weight) }
}

/// Rendering of the bare input graph, no run state.
pub fn graph_dot(n_nodes: usize, edges: &[Edge]) -> String {
    let graph = build_graph(n_nodes, edges);
    Dot::with_attr_getters(
        &graph,
        &[Config::NodeNoLabel, Config::EdgeNoLabel],
        &|_, edge| format!("label = \"{}\", color = {IDLE_COLOR}", edge.weight()),
        &|_, (_, node)| {
            format!("label = \"{node}\", style = filled, fillcolor = \"{IDLE_NODE_FILL}\"")
        },
    )
    .to_string()
}

/// Rendering of one trace step.
///
/// `edges` must be the same input list the run was computed from, and the
/// step must come from a run over `n_nodes` nodes. Duplicate edges share
/// their highlight, which matches how a duplicate could have been the one
/// accepted.
pub fn step_dot(n_nodes: usize, edges: &[Edge], step: &StepEntry) -> String {
    let graph = build_graph(n_nodes, edges);
    let roots = snapshot_roots(&step.dsu_snapshot);

    // Sorted unique roots get palette slots, so colors are stable for a
    // given snapshot regardless of node order.
    let mut color_index: IndexMap<usize, usize> = IndexMap::new();
    for root in roots.iter().copied().sorted().dedup() {
        let slot = color_index.len();
        color_index.insert(root, slot);
    }

    let tree: HashSet<(usize, usize, i64)> = step
        .mst_snapshot
        .iter()
        .map(|edge| ordered(edge.u, edge.v, edge.weight))
        .collect();
    let processed = step
        .processed_edge
        .map(|edge| ordered(edge.u, edge.v, edge.weight));

    Dot::with_attr_getters(
        &graph,
        &[Config::NodeNoLabel, Config::EdgeNoLabel],
        &|_, edge| {
            let key = ordered(edge.source().index(), edge.target().index(), *edge.weight());
            if processed == Some(key) {
                format!(
                    "label = \"{}\", color = \"{PROCESSED_COLOR}\", penwidth = 4",
                    edge.weight()
                )
            } else if tree.contains(&key) {
                format!(
                    "label = \"{}\", color = \"{MST_COLOR}\", penwidth = 3",
                    edge.weight()
                )
            } else {
                format!("label = \"{}\", color = {IDLE_COLOR}", edge.weight())
            }
        },
        &|_, (_, node)| {
            let slot = color_index[&roots[*node]];
            let fill = PALETTE[slot % PALETTE.len()];
            format!("label = \"{node}\", style = filled, fillcolor = \"{fill}\"")
        },
    )
    .to_string()
}

/// Writes a DOT string, creating parent directories as needed.
pub fn write_dot<P: AsRef<Path>>(path: P, dot: &str) -> std::io::Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, dot)
}
