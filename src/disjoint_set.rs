//! Union-find over vertex indices, used by the spanning forest builder to
//! tell whether a road would close a cycle.

use crate::vertex::VertexIdx;

#[derive(Clone, Debug)]
pub struct DisjointVertexSets {
    parent: Vec<VertexIdx>,
    rank: Vec<u8>,
    partitions: usize,
}

impl DisjointVertexSets {
    /// One singleton partition per vertex.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            partitions: n,
        }
    }

    /// Representative of the partition holding `vertex`. Compresses the path
    /// it walked.
    pub fn find(&mut self, mut vertex: VertexIdx) -> VertexIdx {
        let mut root = vertex;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[vertex] != vertex {
            let parent = self.parent[vertex];
            self.parent[vertex] = root;
            vertex = parent;
        }

        root
    }

    /// Merge the partitions of `left` and `right`. Returns `false` if they
    /// were already one partition.
    pub fn union(&mut self, left: VertexIdx, right: VertexIdx) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.partitions -= 1;
        true
    }

    pub fn same_partition(&mut self, left: VertexIdx, right: VertexIdx) -> bool {
        self.find(left) == self.find(right)
    }

    /// Number of partitions left.
    pub fn partitions(&self) -> usize {
        self.partitions
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
