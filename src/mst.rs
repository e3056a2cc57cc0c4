use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use tracing::debug;

use crate::disjoint_set::DisjointVertexSets;
use crate::edge::RoadIdx;
use crate::graph::Graph;

/// Roads accepted by Kruskal, in acceptance order (non-decreasing weight).
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest {
    roads: Vec<RoadIdx>,
    total_weight: f64,
    vertex_count: usize,
    components: usize,
}

impl SpanningForest {
    pub fn roads(&self) -> &[RoadIdx] {
        &self.roads
    }

    pub fn len(&self) -> usize {
        self.roads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Connected components covered by the forest; 1 for a connected graph.
    pub fn components(&self) -> usize {
        self.components
    }

    /// True when the forest is a single tree touching every vertex.
    pub fn is_spanning_tree(&self) -> bool {
        self.components <= 1 && self.roads.len() + 1 == self.vertex_count.max(1)
    }
}

/// Kruskal's algorithm. Roads are pulled lightest first; ties go to the road
/// that was added to the graph first, so repeated runs pick the same roads.
pub fn kruskal(graph: &Graph) -> SpanningForest {
    // Every road sits on two adjacency lists; keying the queue by road index
    // keeps a single entry for each.
    let mut queue: PriorityQueue<RoadIdx, Reverse<(OrderedFloat<f64>, RoadIdx)>> =
        PriorityQueue::with_capacity(graph.road_count());
    for vertex in graph.vertices() {
        for adjacent in vertex.adjacency() {
            let weight = graph.road(adjacent.road).weight();
            queue.push(adjacent.road, Reverse((OrderedFloat(weight), adjacent.road)));
        }
    }

    let mut sets = DisjointVertexSets::new(graph.vertex_count());
    let mut roads = Vec::with_capacity(graph.vertex_count().saturating_sub(1));
    let mut total_weight = 0.0;

    while sets.partitions() > 1 {
        let Some((road_idx, _)) = queue.pop() else {
            break;
        };
        let road = graph.road(road_idx);
        let (start, end) = road.endpoints();
        if sets.union(start, end) {
            total_weight += road.weight();
            roads.push(road_idx);
        }
    }

    debug!(
        accepted = roads.len(),
        components = sets.partitions(),
        total_weight,
        "spanning forest built"
    );

    SpanningForest {
        roads,
        total_weight,
        vertex_count: graph.vertex_count(),
        components: sets.partitions(),
    }
}
