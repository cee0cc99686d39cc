//! Error types for loading maps, snapshots, and configuration.
//!
//! The progression rules themselves never fail; errors only arise at the
//! I/O boundary.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::game::Coord;

/// Reasons an ASCII map cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapParseError {
    /// No rows, or an empty first row.
    Empty,
    /// A row's length differs from the first row.
    Ragged {
        /// Zero-based index of the offending row.
        row: usize,
        /// Glyph count of the first row.
        expected: usize,
        /// Glyph count of the offending row.
        found: usize,
    },
    /// A glyph outside the map legend.
    UnknownGlyph {
        /// The glyph.
        glyph: char,
        /// Where it was found.
        coord: Coord,
    },
    /// Width or height exceeds `u16::MAX`.
    TooLarge,
}

impl fmt::Display for MapParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map has no tiles"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} tiles, expected {expected}"),
            Self::UnknownGlyph { glyph, coord } => {
                write!(f, "unknown glyph {glyph:?} at ({}, {})", coord.x, coord.y)
            }
            Self::TooLarge => write!(f, "map exceeds {} tiles per side", u16::MAX),
        }
    }
}

impl std::error::Error for MapParseError {}

/// Error type for reading snapshots and configuration files.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read or written.
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The contents are not valid JSON for the expected type.
    Json(serde_json::Error),
    /// The embedded map is malformed.
    Map(MapParseError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Json(e) => write!(f, "invalid JSON: {e}"),
            Self::Map(e) => write!(f, "invalid map: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(e) => Some(e),
            Self::Map(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<MapParseError> for LoadError {
    fn from(e: MapParseError) -> Self {
        Self::Map(e)
    }
}
