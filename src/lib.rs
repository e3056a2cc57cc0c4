//! Road network routing.
//!
//! A [`Graph`] of intersections joined by roads weighted with their
//! great-circle length. Two queries run over it: Dijkstra shortest routes
//! ([`Graph::shortest_path`], [`Graph::directions`]) and a Kruskal minimum
//! spanning forest ([`Graph::minimum_spanning_forest`]).

pub mod dijkstra;
pub mod disjoint_set;
pub mod edge;
pub mod error;
pub mod geo;
pub mod graph;
pub mod mapfile;
pub mod mst;
pub mod path;
pub mod vertex;

pub use dijkstra::{SearchState, ShortestPathSearch};
pub use disjoint_set::DisjointVertexSets;
pub use edge::{Road, RoadIdx};
pub use error::{Error, Result};
pub use geo::{haversine, Bounds, Coordinates, DistanceUnit};
pub use graph::Graph;
pub use mapfile::{load_map, read_map, MapRecord};
pub use mst::SpanningForest;
pub use path::{reconstruct_path, Route};
pub use vertex::{Adjacent, Intersection, VertexIdx};
