use crate::geo::DistanceUnit;
use crate::vertex::{Intersection, VertexIdx};

/// Dense index of a road inside its [`Graph`](crate::graph::Graph).
pub type RoadIdx = usize;

/// An undirected road between two intersections. The weight is the
/// great-circle distance between the endpoints, fixed at construction.
#[derive(Clone, Debug)]
pub struct Road {
    id: String,
    endpoints: (VertexIdx, VertexIdx),
    weight: f64,
}

impl Road {
    pub(crate) fn between(
        id: String,
        (start_idx, start): (VertexIdx, &Intersection),
        (end_idx, end): (VertexIdx, &Intersection),
        unit: DistanceUnit,
    ) -> Self {
        let weight = start.location().distance_to(&end.location(), unit);
        Self {
            id,
            endpoints: (start_idx, end_idx),
            weight,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Endpoints in the order the road was declared.
    pub fn endpoints(&self) -> (VertexIdx, VertexIdx) {
        self.endpoints
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// The endpoint across from `vertex`, or `None` if `vertex` is not on this road.
    pub fn opposite(&self, vertex: VertexIdx) -> Option<VertexIdx> {
        match self.endpoints {
            (a, b) if a == vertex => Some(b),
            (a, b) if b == vertex => Some(a),
            _ => None,
        }
    }

    pub fn connects(&self, a: VertexIdx, b: VertexIdx) -> bool {
        self.opposite(a) == Some(b)
    }
}
