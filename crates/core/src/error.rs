//! Error types for map parsing and texture loading.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("map header missing: expected `<width> <height>` on the first line")]
    MissingHeader,

    #[error("invalid map header `{0}`")]
    BadHeader(String),

    #[error("map dimensions must be non-zero (got {width}x{height})")]
    Empty { width: usize, height: usize },

    #[error("map has {found} rows, header declares {expected}")]
    RowCount { expected: usize, found: usize },

    #[error("map row {row} has {found} cells, header declares {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown map cell `{ch}` at ({x}, {y})")]
    UnknownCell { ch: char, x: usize, y: usize },

    #[error("player start cell ({x}, {y}) is not floor")]
    SpawnBlocked { x: usize, y: usize },
}

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("failed to load texture {path}: {reason}")]
    Load { path: PathBuf, reason: String },

    #[error("pixel buffer of {len} bytes does not match {width}x{height} RGB")]
    BadBuffer {
        width: u32,
        height: u32,
        len: usize,
    },
}
