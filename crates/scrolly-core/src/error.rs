// File: crates/scrolly-core/src/error.rs
// Summary: Error taxonomy for loading, reshaping and rendering.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Dataset document is not a JSON array of records.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// No wide records survived filtering; there is nothing to draw.
    #[error("dataset is empty")]
    EmptyDataset,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Skia surface creation or PNG encoding failed.
    #[error("raster error: {0}")]
    Raster(&'static str),
}
