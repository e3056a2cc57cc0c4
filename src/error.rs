use thiserror::Error;

/// Convenient result alias for the road graph library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A road or query referenced an intersection that was never added.
    #[error("unknown intersection: {id}")]
    VertexNotFound { id: String },

    /// An intersection identity was registered twice.
    #[error("intersection {id} is already defined")]
    DuplicateVertex { id: String },

    /// Coordinates must be finite so distance comparisons stay meaningful.
    #[error("intersection {id} has non-finite coordinates ({latitude}, {longitude})")]
    NonFiniteCoordinate {
        id: String,
        latitude: f64,
        longitude: f64,
    },

    /// Latitude must lie in [-90, 90] and longitude in [-180, 180].
    #[error("intersection {id} has out-of-range coordinates ({latitude}, {longitude})")]
    CoordinateOutOfRange {
        id: String,
        latitude: f64,
        longitude: f64,
    },

    /// The predecessor chain did not lead back to the expected source.
    #[error("cannot reconstruct path from {origin} to {destination}: {reason}")]
    PathReconstruction {
        origin: String,
        destination: String,
        reason: String,
    },

    /// A map file line could not be interpreted.
    #[error("malformed record on line {line}: {message}")]
    MalformedRecord { line: u64, message: String },

    /// Wrapper for CSV reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
