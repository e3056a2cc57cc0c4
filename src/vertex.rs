use crate::edge::RoadIdx;
use crate::error::{Error, Result};
use crate::geo::Coordinates;

/// Dense index of an intersection inside its [`Graph`](crate::graph::Graph).
pub type VertexIdx = usize;

/// One entry of an adjacency list: the intersection on the far side and the
/// road that leads there.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Adjacent {
    pub neighbor: VertexIdx,
    pub road: RoadIdx,
}

/// An intersection: identity, position and the roads touching it.
///
/// Search bookkeeping (distance, visited, predecessor) lives in the per-query
/// [`ShortestPathSearch`](crate::dijkstra::ShortestPathSearch), not here, so a
/// graph can be queried repeatedly without resetting anything.
#[derive(Clone, Debug)]
pub struct Intersection {
    id: String,
    location: Coordinates,
    adjacency: Vec<Adjacent>,
}

impl Intersection {
    /// Create an intersection, rejecting NaN, infinite or out-of-range coordinates.
    pub fn new(id: impl Into<String>, latitude: f64, longitude: f64) -> Result<Self> {
        let id = id.into();
        let location = Coordinates::new(latitude, longitude);
        if !location.is_finite() {
            return Err(Error::NonFiniteCoordinate {
                id,
                latitude,
                longitude,
            });
        }
        if !location.in_range() {
            return Err(Error::CoordinateOutOfRange {
                id,
                latitude,
                longitude,
            });
        }
        Ok(Self {
            id,
            location,
            adjacency: Vec::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn location(&self) -> Coordinates {
        self.location
    }

    pub fn latitude(&self) -> f64 {
        self.location.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.location.longitude
    }

    /// Incident roads in insertion order.
    pub fn adjacency(&self) -> &[Adjacent] {
        &self.adjacency
    }

    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }

    pub(crate) fn connect(&mut self, neighbor: VertexIdx, road: RoadIdx) {
        self.adjacency.push(Adjacent { neighbor, road });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_finite_coordinates() {
        for (lat, lon) in [(f64::NAN, 0.0), (0.0, f64::INFINITY), (f64::NEG_INFINITY, 1.0)] {
            let err = Intersection::new("X", lat, lon).unwrap_err();
            assert!(matches!(err, Error::NonFiniteCoordinate { ref id, .. } if id == "X"));
        }
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        for (lat, lon) in [(91.0, 0.0), (-90.5, 0.0), (0.0, 180.1), (2.0, 2000.0)] {
            let err = Intersection::new("X", lat, lon).unwrap_err();
            assert!(matches!(err, Error::CoordinateOutOfRange { ref id, .. } if id == "X"));
        }
        for (lat, lon) in [(90.0, 180.0), (-90.0, -180.0)] {
            assert!(Intersection::new("Y", lat, lon).is_ok());
        }
    }

    #[test]
    fn starts_without_roads() {
        let vertex = Intersection::new("A", 50.0, 50.0).unwrap();
        assert_eq!(vertex.id(), "A");
        assert_eq!(vertex.latitude(), 50.0);
        assert_eq!(vertex.longitude(), 50.0);
        assert_eq!(vertex.degree(), 0);
    }
}
