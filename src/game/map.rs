//! Map and tile types.

use serde::{Deserialize, Serialize};

use crate::error::MapParseError;
use crate::game::Warrior;
use crate::progression::{ExitTile, Terrain};

/// A coordinate on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// X coordinate (column).
    pub x: u16,
    /// Y coordinate (row).
    pub y: u16,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Get adjacent coordinates (up, down, left, right).
    ///
    /// Returns a fixed-size array and count to avoid heap allocation.
    /// The array contains valid coordinates in indices 0..count.
    #[must_use]
    #[inline]
    pub fn adjacent(&self, width: u16, height: u16) -> ([Coord; 4], u8) {
        let mut result = [Coord::new(0, 0); 4];
        let mut count = 0u8;

        for next in Direction::ALL.into_iter().filter_map(|d| self.step(d)) {
            if next.x < width && next.y < height {
                result[count as usize] = next;
                count += 1;
            }
        }

        (result, count)
    }

    /// The neighbouring coordinate in `direction`, if it is representable.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Option<Self> {
        let (x, y) = match direction {
            Direction::North => (Some(self.x), self.y.checked_sub(1)),
            Direction::South => (Some(self.x), self.y.checked_add(1)),
            Direction::West => (self.x.checked_sub(1), Some(self.y)),
            Direction::East => (self.x.checked_add(1), Some(self.y)),
        };
        match (x, y) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }
}

/// One of the four compass directions a warrior can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Towards row 0.
    North,
    /// Away from row 0.
    South,
    /// Away from column 0.
    East,
    /// Towards column 0.
    West,
}

impl Direction {
    /// All directions, clockwise from north.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];
}

/// A single map tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tile {
    /// Open ground.
    Floor = 0,
    /// Impassable wall.
    Wall = 1,
    /// Exit tile; standing here can complete the map.
    Exit = 2,
    /// Nothing. Also reported for positions outside the map.
    Void = 3,
}

impl Tile {
    /// Check if warriors can stand on this tile.
    #[must_use]
    pub const fn is_passable(self) -> bool {
        matches!(self, Self::Floor | Self::Exit)
    }

    /// ASCII glyph used in map files.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Floor => '.',
            Self::Wall => '#',
            Self::Exit => '>',
            Self::Void => ' ',
        }
    }

    /// Tile for an ASCII glyph, if the glyph is known.
    #[must_use]
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Self::Floor),
            '#' => Some(Self::Wall),
            '>' => Some(Self::Exit),
            ' ' => Some(Self::Void),
            _ => None,
        }
    }
}

impl ExitTile for Tile {
    fn is_exit(&self) -> bool {
        matches!(self, Self::Exit)
    }
}

/// The game map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    /// Width of the map in tiles.
    width: u16,
    /// Height of the map in tiles.
    height: u16,
    /// Tiles stored in row-major order.
    tiles: Vec<Tile>,
}

impl Map {
    /// Create a new map filled with floor tiles.
    ///
    /// Returns `None` if width or height is zero.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }

        let size = usize::from(width) * usize::from(height);
        let tiles = vec![Tile::Floor; size];

        Some(Self {
            width,
            height,
            tiles,
        })
    }

    /// Parse a map from ASCII rows.
    ///
    /// Legend: `.` floor, `#` wall, `>` exit, space for void. Every row must
    /// have the same number of glyphs.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, the rows differ in length, the
    /// map is larger than `u16::MAX` in either dimension, or a glyph is not
    /// in the legend.
    pub fn from_ascii<S: AsRef<str>>(rows: &[S]) -> Result<Self, MapParseError> {
        let expected = rows.first().map_or(0, |row| row.as_ref().chars().count());
        if expected == 0 {
            return Err(MapParseError::Empty);
        }

        let width = u16::try_from(expected).map_err(|_| MapParseError::TooLarge)?;
        let height = u16::try_from(rows.len()).map_err(|_| MapParseError::TooLarge)?;

        let mut tiles = Vec::with_capacity(usize::from(width) * usize::from(height));
        for (y, row) in (0..height).zip(rows) {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != expected {
                return Err(MapParseError::Ragged {
                    row: usize::from(y),
                    expected,
                    found,
                });
            }

            for (x, glyph) in (0..width).zip(row.chars()) {
                let tile = Tile::from_glyph(glyph).ok_or(MapParseError::UnknownGlyph {
                    glyph,
                    coord: Coord::new(x, y),
                })?;
                tiles.push(tile);
            }
        }

        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// Render the map back into ASCII rows.
    #[must_use]
    pub fn to_ascii(&self) -> Vec<String> {
        self.tiles
            .chunks(usize::from(self.width))
            .map(|row| row.iter().map(|tile| tile.glyph()).collect())
            .collect()
    }

    /// Get the width of the map.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the height of the map.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Check if a coordinate is within the map bounds.
    #[must_use]
    pub const fn in_bounds(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Convert a coordinate to an index into the tiles array.
    fn coord_to_index(&self, coord: Coord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(usize::from(coord.y) * usize::from(self.width) + usize::from(coord.x))
        } else {
            None
        }
    }

    /// Get the tile at the given coordinate.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Tile> {
        self.coord_to_index(coord).map(|idx| self.tiles[idx])
    }

    /// The tile at `coord`, or [`Tile::Void`] outside the map.
    #[must_use]
    pub fn tile_at(&self, coord: Coord) -> Tile {
        self.get(coord).unwrap_or(Tile::Void)
    }

    /// Set the tile at the given coordinate.
    ///
    /// Returns `false` if the coordinate is out of bounds.
    pub fn set(&mut self, coord: Coord, tile: Tile) -> bool {
        if let Some(idx) = self.coord_to_index(coord) {
            self.tiles[idx] = tile;
            true
        } else {
            false
        }
    }

    /// Iterate over all coordinates and tiles.
    #[allow(clippy::cast_possible_truncation)]
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Tile)> + '_ {
        let width = usize::from(self.width);
        self.tiles.iter().enumerate().map(move |(idx, tile)| {
            let x = (idx % width) as u16;
            let y = (idx / width) as u16;
            (Coord::new(x, y), *tile)
        })
    }

    /// Coordinates of every exit tile, in row-major order.
    pub fn exits(&self) -> impl Iterator<Item = Coord> + '_ {
        self.iter()
            .filter(|(_, tile)| tile.is_exit())
            .map(|(coord, _)| coord)
    }
}

impl Terrain<Warrior> for Map {
    type Tile = Tile;

    fn look_down(&self, warrior: &Warrior) -> Tile {
        self.tile_at(warrior.position)
    }
}
