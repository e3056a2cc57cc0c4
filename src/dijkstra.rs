use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::{debug, trace};

use crate::error::Result;
use crate::graph::Graph;
use crate::path::{reconstruct_path, Route};
use crate::vertex::VertexIdx;

#[derive(Copy, Clone, PartialEq, Eq)]
struct State {
    cost: OrderedFloat<f64>,
    vertex: VertexIdx,
}

// Min-heap by cost, ties broken by the lower vertex index.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Per-vertex scratch record for one search.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchState {
    pub distance: f64,
    pub visited: bool,
    pub predecessor: Option<VertexIdx>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            distance: f64::INFINITY,
            visited: false,
            predecessor: None,
        }
    }
}

/// Outcome of a single-source, single-target Dijkstra run.
///
/// Holds its own scratch state, so every search starts from the defaults and
/// several searches over one graph never interfere.
#[derive(Clone, Debug)]
pub struct ShortestPathSearch {
    source: VertexIdx,
    target: VertexIdx,
    found: bool,
    states: Vec<SearchState>,
    settled: Vec<(VertexIdx, f64)>,
}

impl ShortestPathSearch {
    /// Search from `source` until `target` is settled. Stale heap entries left
    /// behind by later improvements are skipped when popped.
    pub fn run(graph: &Graph, source: VertexIdx, target: VertexIdx) -> Self {
        let mut states = vec![SearchState::default(); graph.vertex_count()];
        let mut settled = Vec::new();
        let mut heap = BinaryHeap::new();
        let mut found = false;

        states[source].distance = 0.0;
        heap.push(State {
            cost: OrderedFloat(0.0),
            vertex: source,
        });

        while let Some(State { cost, vertex }) = heap.pop() {
            if states[vertex].visited {
                continue;
            }
            states[vertex].visited = true;
            settled.push((vertex, cost.0));
            trace!(vertex = graph.vertex(vertex).id(), distance = cost.0, "settled");

            if vertex == target {
                found = true;
                break;
            }

            for adjacent in graph.neighbours(vertex) {
                let next = adjacent.neighbor;
                if states[next].visited {
                    continue;
                }
                let next_cost = cost.0 + graph.road(adjacent.road).weight();
                if next_cost < states[next].distance {
                    states[next].distance = next_cost;
                    states[next].predecessor = Some(vertex);
                    heap.push(State {
                        cost: OrderedFloat(next_cost),
                        vertex: next,
                    });
                }
            }
        }

        debug!(
            source = graph.vertex(source).id(),
            target = graph.vertex(target).id(),
            found,
            settled = settled.len(),
            "shortest path search finished"
        );

        Self {
            source,
            target,
            found,
            states,
            settled,
        }
    }

    pub fn source(&self) -> VertexIdx {
        self.source
    }

    pub fn target(&self) -> VertexIdx {
        self.target
    }

    /// Whether the target was reached. `false` means it lies in another component.
    pub fn found(&self) -> bool {
        self.found
    }

    /// Final distance to `vertex`, if the search settled it.
    pub fn distance_to(&self, vertex: VertexIdx) -> Option<f64> {
        self.states
            .get(vertex)
            .filter(|state| state.visited)
            .map(|state| state.distance)
    }

    pub fn state(&self, vertex: VertexIdx) -> Option<&SearchState> {
        self.states.get(vertex)
    }

    /// Vertices in the order they left the frontier, with their final distance.
    pub fn settled(&self) -> &[(VertexIdx, f64)] {
        &self.settled
    }

    /// Route from `destination` back to this search's source.
    pub fn path_to(&self, graph: &Graph, destination: VertexIdx) -> Result<Route> {
        reconstruct_path(graph, self, destination, self.source)
    }
}
