use fnv::FnvHashMap;
use tracing::debug;

use crate::dijkstra::ShortestPathSearch;
use crate::edge::{Road, RoadIdx};
use crate::error::{Error, Result};
use crate::geo::{Bounds, DistanceUnit};
use crate::mst::SpanningForest;
use crate::path::Route;
use crate::vertex::{Adjacent, Intersection, VertexIdx};

/// Road network built once from intersections and roads, then queried.
///
/// Intersections and roads are stored in arenas and addressed by dense
/// indices; the identity map resolves the string keys used by map files and
/// callers.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    unit: DistanceUnit,
    vertices: Vec<Intersection>,
    roads: Vec<Road>,
    id_to_idx: FnvHashMap<String, VertexIdx>,
}

impl Graph {
    /// Empty graph whose road weights are measured in miles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty graph whose road weights are measured in `unit`.
    pub fn with_unit(unit: DistanceUnit) -> Self {
        Self {
            unit,
            ..Self::default()
        }
    }

    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    /// Register an intersection. Identities are unique within a graph.
    pub fn add_intersection(&mut self, vertex: Intersection) -> Result<VertexIdx> {
        if self.id_to_idx.contains_key(vertex.id()) {
            return Err(Error::DuplicateVertex {
                id: vertex.id().to_string(),
            });
        }
        let idx = self.vertices.len();
        self.id_to_idx.insert(vertex.id().to_string(), idx);
        self.vertices.push(vertex);
        Ok(idx)
    }

    /// Add an undirected road between two registered intersections. The road
    /// is listed in both endpoints' adjacency.
    pub fn add_road(&mut self, id: impl Into<String>, start: &str, end: &str) -> Result<RoadIdx> {
        let start_idx = self.index_of(start)?;
        let end_idx = self.index_of(end)?;
        let road = Road::between(
            id.into(),
            (start_idx, &self.vertices[start_idx]),
            (end_idx, &self.vertices[end_idx]),
            self.unit,
        );
        let road_idx = self.roads.len();
        debug!(
            road = road.id(),
            start,
            end,
            weight = road.weight(),
            "adding road"
        );
        self.roads.push(road);
        self.vertices[start_idx].connect(end_idx, road_idx);
        self.vertices[end_idx].connect(start_idx, road_idx);
        Ok(road_idx)
    }

    /// Resolve an intersection identity to its index.
    pub fn index_of(&self, id: &str) -> Result<VertexIdx> {
        self.id_to_idx
            .get(id)
            .copied()
            .ok_or_else(|| Error::VertexNotFound { id: id.to_string() })
    }

    pub fn get(&self, id: &str) -> Option<&Intersection> {
        self.id_to_idx.get(id).map(|&idx| &self.vertices[idx])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.id_to_idx.contains_key(id)
    }

    pub fn vertex(&self, idx: VertexIdx) -> &Intersection {
        &self.vertices[idx]
    }

    pub fn road(&self, idx: RoadIdx) -> &Road {
        &self.roads[idx]
    }

    pub fn vertices(&self) -> &[Intersection] {
        &self.vertices
    }

    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Neighbours of an intersection as (neighbour, road) pairs.
    pub fn neighbours(&self, idx: VertexIdx) -> &[Adjacent] {
        self.vertices[idx].adjacency()
    }

    /// Latitude/longitude box around every intersection, `None` for an empty graph.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.vertices.iter().map(Intersection::location))
    }

    /// Run Dijkstra from `start` until `end` is settled or the frontier runs dry.
    pub fn shortest_path(&self, start: &str, end: &str) -> Result<ShortestPathSearch> {
        let source = self.index_of(start)?;
        let target = self.index_of(end)?;
        Ok(ShortestPathSearch::run(self, source, target))
    }

    /// Shortest route from `start` to `end`, or `None` when they are not connected.
    pub fn directions(&self, start: &str, end: &str) -> Result<Option<Route>> {
        let search = self.shortest_path(start, end)?;
        if !search.found() {
            debug!(start, end, "no route between intersections");
            return Ok(None);
        }
        search.path_to(self, search.target()).map(Some)
    }

    /// Kruskal minimum spanning forest over every road in the graph.
    pub fn minimum_spanning_forest(&self) -> SpanningForest {
        crate::mst::kruskal(self)
    }
}
