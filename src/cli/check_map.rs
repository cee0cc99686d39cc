//! Map check command implementation.

use super::CliError;
use std::fs;
use std::path::Path;
use warband::{Coord, Map};

/// What `check-map` reports about a parsed map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct MapSummary {
    /// Map width in tiles.
    pub(super) width: u16,
    /// Map height in tiles.
    pub(super) height: u16,
    /// Tiles a warrior can stand on.
    pub(super) passable: usize,
    /// Exit tiles in row-major order.
    pub(super) exits: Vec<Coord>,
    /// Exits with no passable neighbour.
    pub(super) sealed_exits: Vec<Coord>,
}

impl MapSummary {
    /// Summarise a parsed map.
    pub(super) fn of(map: &Map) -> Self {
        let exits: Vec<Coord> = map.exits().collect();
        let sealed_exits = exits
            .iter()
            .copied()
            .filter(|exit| {
                let (neighbours, count) = exit.adjacent(map.width(), map.height());
                !neighbours[..usize::from(count)]
                    .iter()
                    .any(|&next| map.tile_at(next).is_passable())
            })
            .collect();

        Self {
            width: map.width(),
            height: map.height(),
            passable: map.iter().filter(|(_, tile)| tile.is_passable()).count(),
            exits,
            sealed_exits,
        }
    }
}

/// Execute the check-map command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the map is malformed.
pub(crate) fn execute(path: &Path) -> Result<(), CliError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CliError::new(format!("Failed to read {}: {e}", path.display())))?;

    let rows: Vec<&str> = contents.lines().collect();
    let summary = MapSummary::of(&Map::from_ascii(&rows)?);

    println!("Map: {}", path.display());
    println!("  Size:     {} x {}", summary.width, summary.height);
    println!("  Passable: {} tiles", summary.passable);
    println!("  Exits:    {}", summary.exits.len());
    for exit in &summary.exits {
        println!("    ({}, {})", exit.x, exit.y);
    }

    if summary.exits.is_empty() {
        println!();
        println!("Warning: no exit tiles; reach-exit runs here end only by defeat or round limit");
    }
    for exit in &summary.sealed_exits {
        tracing::warn!(x = exit.x, y = exit.y, "exit has no passable neighbour");
    }

    Ok(())
}
