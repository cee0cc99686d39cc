//! Game layer for Warband.
//!
//! The concrete collaborators the progression rules query:
//! - Map with tiles (floor, walls, exits)
//! - Warriors with health and a position
//! - Append-only turn history with a round counter

mod history;
mod map;
mod warrior;

pub use history::{Action, History, TurnRecord};
pub use map::{Coord, Direction, Map, Tile};
pub use warrior::{Warrior, WarriorId, DEFAULT_MAX_HEALTH};
