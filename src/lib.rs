// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Warband: the progression engine of a turn-based warrior combat simulator.
//!
//! Players write decision logic for autonomous warriors that explore a tile
//! map and fight. At the end of every round the game loop asks a progression
//! rule whether the roster advances to the next map, the run is over, or play
//! continues.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   CLI (evaluate, batch, check-map)  │
//! ├─────────────────────────────────────┤
//! │   Snapshots + Config (JSON)         │
//! ├─────────────────────────────────────┤
//! │   Progression rules                 │
//! ├─────────────────────────────────────┤
//! │   Game layer (map, warriors, log)   │
//! └─────────────────────────────────────┘
//! ```

pub mod error;
pub mod game;
pub mod progression;
pub mod snapshot;

pub use error::{LoadError, MapParseError};

// Re-export key types at crate root for convenience
pub use game::{Action, Coord, Direction, History, Map, Tile, Warrior, WarriorId};
pub use progression::{
    from_fn, with_round_limit, LastStanding, Outcome, Progression, ProgressionConfig, ReachExit,
    RoundLimit, RuleKind,
};
pub use snapshot::{evaluate_all, Snapshot};
