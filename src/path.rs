use crate::dijkstra::ShortestPathSearch;
use crate::edge::RoadIdx;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::vertex::VertexIdx;

/// A shortest route, stored destination first as it is recovered from
/// predecessor links. A route always holds at least one vertex: the
/// destination, which is also the source when the two coincide.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    vertices: Vec<VertexIdx>,
    distance: f64,
}

impl Route {
    /// Vertices from destination back to source, both inclusive.
    pub fn vertices(&self) -> &[VertexIdx] {
        &self.vertices
    }

    /// Vertices in travel order, source first.
    pub fn travel_order(&self) -> impl Iterator<Item = VertexIdx> + '_ {
        self.vertices.iter().rev().copied()
    }

    /// Distance recorded at the destination when the search settled it.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn source(&self) -> VertexIdx {
        self.vertices[self.vertices.len() - 1]
    }

    pub fn destination(&self) -> VertexIdx {
        self.vertices[0]
    }

    /// Number of intersections on the route, at least 1.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Intersection identities in travel order.
    pub fn ids<'g>(&self, graph: &'g Graph) -> Vec<&'g str> {
        self.travel_order()
            .map(|idx| graph.vertex(idx).id())
            .collect()
    }

    /// Roads driven, in travel order. Where parallel roads join the same two
    /// intersections the lightest one is reported.
    pub fn roads(&self, graph: &Graph) -> Vec<RoadIdx> {
        let stops: Vec<VertexIdx> = self.travel_order().collect();
        stops
            .windows(2)
            .filter_map(|pair| {
                graph
                    .neighbours(pair[0])
                    .iter()
                    .filter(|adjacent| adjacent.neighbor == pair[1])
                    .map(|adjacent| adjacent.road)
                    .min_by(|a, b| graph.road(*a).weight().total_cmp(&graph.road(*b).weight()))
            })
            .collect()
    }

    /// Sum of the weights of [`Route::roads`].
    pub fn road_weight(&self, graph: &Graph) -> f64 {
        self.roads(graph)
            .into_iter()
            .map(|road| graph.road(road).weight())
            .sum()
    }
}

/// Walk predecessor links from `destination` back to `source`.
///
/// Fails instead of looping when the chain is broken, when it does not end at
/// `source`, or when it is longer than the number of vertices.
pub fn reconstruct_path(
    graph: &Graph,
    search: &ShortestPathSearch,
    destination: VertexIdx,
    source: VertexIdx,
) -> Result<Route> {
    let failure = |reason: &str| Error::PathReconstruction {
        origin: vertex_label(graph, source),
        destination: vertex_label(graph, destination),
        reason: reason.to_string(),
    };

    let distance = match search.state(destination) {
        Some(state) if state.visited => state.distance,
        Some(_) => return Err(failure("destination was not settled by the search")),
        None => return Err(failure("destination is not in the graph")),
    };

    let limit = graph.vertex_count();
    let mut vertices = vec![destination];
    let mut current = destination;
    while current != source {
        if vertices.len() > limit {
            return Err(failure("predecessor chain is longer than the graph"));
        }
        current = match search.state(current).and_then(|state| state.predecessor) {
            Some(previous) => previous,
            None => return Err(failure("predecessor chain ends before reaching the source")),
        };
        vertices.push(current);
    }

    Ok(Route { vertices, distance })
}

fn vertex_label(graph: &Graph, idx: VertexIdx) -> String {
    graph
        .vertices()
        .get(idx)
        .map(|vertex| vertex.id().to_string())
        .unwrap_or_else(|| format!("#{idx}"))
}
