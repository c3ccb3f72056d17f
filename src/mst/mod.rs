//! # Kruskal MST engine with a replayable decision trace
//!
//! Given `n` nodes and weighted undirected edges, the engine sorts the
//! edges ascending by `(weight, u, v)` and greedily accepts each edge whose
//! endpoints lie in different [`DisjointSetUnion`] components, until
//! `n - 1` edges are accepted or the edges run out. Every decision appends
//! a [`StepEntry`] carrying owned snapshots of the tree accumulator and the
//! DSU parent array, so a consumer can replay the construction one step at
//! a time (see [`crate::viz`]).
//!
//! ## Example
//!
//! ```rust
//! use mst_steps::mst::{Edge, StepKind, compute_mst};
//!
//! let edges = vec![
//!     Edge::new(1, 0, 1),
//!     Edge::new(2, 1, 2),
//!     Edge::new(5, 0, 2),
//! ];
//! let run = compute_mst(3, &edges);
//!
//! assert_eq!(run.total_weight, 3);
//! assert_eq!(run.mst_edges.len(), 2);
//! assert!(run.is_spanning());
//! assert_eq!(run.trace.first().unwrap().kind, StepKind::Initial);
//! assert_eq!(run.trace.last().unwrap().kind, StepKind::Finished);
//! ```

pub mod dsu;
pub mod edge;
pub mod kruskal;
pub mod trace;

pub use dsu::DisjointSetUnion;
pub use edge::{Edge, MstEdge};
pub use kruskal::{MstRun, compute_mst};
pub use trace::{StepEntry, StepKind, snapshot_roots};
