//! Disjoint-set union (union-find) over the node ids `0..n_nodes`.

/// Partition of `{0, .., n_nodes - 1}` with union by rank and path
/// compression.
///
/// Indices outside `0..n_nodes` are a caller bug; lookups panic via slice
/// indexing rather than returning an error.
#[derive(Debug, Clone)]
pub struct DisjointSetUnion {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl DisjointSetUnion {
    /// Builds the trivial partition: every node is its own component.
    pub fn new(n_nodes: usize) -> Self {
        Self {
            parent: (0..n_nodes).collect(),
            rank: vec![0; n_nodes],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of `node`'s component.
    ///
    /// Two passes: walk to the root, then rewrite every visited parent
    /// pointer directly to it. The partition itself is unchanged.
    pub fn find(&mut self, node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cursor = node;
        while cursor != root {
            cursor = std::mem::replace(&mut self.parent[cursor], root);
        }
        root
    }

    /// Merges the components of `a` and `b`.
    ///
    /// Returns `true` iff a merge occurred; `false` means the nodes were
    /// already connected and nothing was mutated. On equal ranks `a`'s root
    /// wins and its rank grows by one.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        if self.rank[root_a] < self.rank[root_b] {
            self.parent[root_a] = root_b;
        } else if self.rank[root_b] < self.rank[root_a] {
            self.parent[root_b] = root_a;
        } else {
            self.parent[root_b] = root_a;
            self.rank[root_a] += 1;
        }
        true
    }

    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Current parent array; cloned by trace snapshots.
    pub fn parents(&self) -> &[usize] {
        &self.parent
    }

    /// Number of distinct components.
    pub fn component_count(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(node, &parent)| node == parent)
            .count()
    }
}
