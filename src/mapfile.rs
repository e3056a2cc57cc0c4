//! Reader for tab-separated map files.
//!
//! ```text
//! i<TAB>id<TAB>latitude<TAB>longitude
//! r<TAB>id<TAB>start_id<TAB>end_id
//! ```
//!
//! Intersections must be declared before any road that references them.

use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::geo::DistanceUnit;
use crate::graph::Graph;
use crate::vertex::Intersection;

/// One parsed line of a map file.
#[derive(Clone, Debug, PartialEq)]
pub enum MapRecord {
    Intersection {
        id: String,
        latitude: f64,
        longitude: f64,
    },
    Road {
        id: String,
        start: String,
        end: String,
    },
}

impl MapRecord {
    /// Interpret a record. Returns `Ok(None)` for record kinds this reader
    /// does not know about.
    pub fn parse(record: &StringRecord, line: u64) -> Result<Option<Self>> {
        let malformed = |message: String| Error::MalformedRecord { line, message };
        let kind = record.get(0).unwrap_or_default();
        if kind != "i" && kind != "r" {
            return Ok(None);
        }
        if record.len() < 4 {
            return Err(malformed(format!(
                "expected 4 tab-separated fields, found {}",
                record.len()
            )));
        }

        let id = record[1].to_string();
        if id.is_empty() {
            return Err(malformed("empty identity".to_string()));
        }

        let parsed = match kind {
            "i" => {
                let latitude = parse_coordinate(&record[2], "latitude", 90.0).map_err(malformed)?;
                let longitude = parse_coordinate(&record[3], "longitude", 180.0).map_err(malformed)?;
                MapRecord::Intersection {
                    id,
                    latitude,
                    longitude,
                }
            }
            _ => MapRecord::Road {
                id,
                start: record[2].to_string(),
                end: record[3].to_string(),
            },
        };
        Ok(Some(parsed))
    }
}

fn parse_coordinate(field: &str, name: &str, limit: f64) -> std::result::Result<f64, String> {
    let value: f64 = field
        .trim()
        .parse()
        .map_err(|_| format!("{name} {field:?} is not a number"))?;
    if !value.is_finite() {
        return Err(format!("{name} {field:?} is not finite"));
    }
    if value.abs() > limit {
        return Err(format!("{name} {field:?} is outside [-{limit}, {limit}]"));
    }
    Ok(value)
}

/// Load a map file from disk.
pub fn load_map<P: AsRef<Path>>(path: P, unit: DistanceUnit) -> Result<Graph> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading map");
    let file = File::open(path)?;
    read_map(file, unit)
}

/// Build a graph from map records read out of `reader`.
pub fn read_map<R: Read>(reader: R, unit: DistanceUnit) -> Result<Graph> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut graph = Graph::with_unit(unit);
    let mut lines = 0_u64;
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(lines + 1);
        lines += 1;
        match MapRecord::parse(&record, line)? {
            Some(MapRecord::Intersection {
                id,
                latitude,
                longitude,
            }) => {
                graph.add_intersection(Intersection::new(id, latitude, longitude)?)?;
            }
            Some(MapRecord::Road { id, start, end }) => {
                graph.add_road(id, &start, &end)?;
            }
            None => {
                warn!(line, kind = record.get(0).unwrap_or_default(), "skipping unknown record");
            }
        }
    }

    debug!(
        records = lines,
        intersections = graph.vertex_count(),
        roads = graph.road_count(),
        "map loaded"
    );
    Ok(graph)
}
