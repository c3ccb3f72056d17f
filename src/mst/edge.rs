//! Edge value types.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Input edge of the weighted undirected graph.
///
/// Ordered lexicographically by `(weight, u, v)`; that order is the
/// processing order of the Kruskal loop and is observable in the trace
/// whenever weights tie. Self-loops (`u == v`) and duplicates are legal
/// inputs, they just can never be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub weight: i64,
    pub u: usize,
    pub v: usize,
}

impl Edge {
    pub fn new(weight: i64, u: usize, v: usize) -> Self {
        Self { weight, u, v }
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.weight, self.u, self.v).cmp(&(other.weight, other.u, other.v))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.weight, self.u, self.v)
    }
}

/// An edge accepted into the spanning tree, in `(u, v, weight)` shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MstEdge {
    pub u: usize,
    pub v: usize,
    pub weight: i64,
}

impl From<Edge> for MstEdge {
    fn from(edge: Edge) -> Self {
        Self {
            u: edge.u,
            v: edge.v,
            weight: edge.weight,
        }
    }
}

impl fmt::Display for MstEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) weight {}", self.u, self.v, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_lexicographic_on_weight_then_endpoints() {
        let mut edges = vec![
            Edge::new(2, 0, 3),
            Edge::new(1, 2, 0),
            Edge::new(2, 0, 1),
            Edge::new(1, 0, 5),
        ];
        edges.sort();
        assert_eq!(
            edges,
            vec![
                Edge::new(1, 0, 5),
                Edge::new(1, 2, 0),
                Edge::new(2, 0, 1),
                Edge::new(2, 0, 3),
            ]
        );
    }

    #[test]
    fn mst_edge_keeps_endpoint_order() {
        let edge = MstEdge::from(Edge::new(7, 3, 1));
        assert_eq!((edge.u, edge.v, edge.weight), (3, 1, 7));
    }
}
