//! mst-steps - Kruskal's minimum spanning tree with a replayable trace
//!
//! The crate computes an MST of a weighted undirected graph and records
//! every decision along the way, so a visualizer can replay the forest
//! merging process step by step.
//!
//! * [`mst`] - the engine: union-find ([`mst::DisjointSetUnion`]) and the
//!   Kruskal driver ([`mst::compute_mst`]) emitting the decision trace
//! * [`parse`] - edge-list text parsing and node-id validation; the engine
//!   relies on this boundary and does no bounds checking of its own
//! * [`config`] - TOML settings for the edge-list format
//! * [`report`] - serializable run report (JSON)
//! * [`viz`] - per-step DOT renderings with component coloring
//! * [`options`] - command-line options of the `mst` binary

pub mod config;
pub mod mst;
pub mod options;
pub mod parse;
pub mod report;
pub mod viz;
