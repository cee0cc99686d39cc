//! Warrior state management.

use serde::{Deserialize, Serialize};

use crate::game::Coord;
use crate::progression::Combatant;

/// Unique identifier for a warrior.
pub type WarriorId = u32;

/// Health a warrior starts with unless told otherwise.
pub const DEFAULT_MAX_HEALTH: u32 = 20;

const fn default_health() -> u32 {
    DEFAULT_MAX_HEALTH
}

/// State for a single warrior.
///
/// Deserialized health is clamped to `max_health`, the same as
/// [`Warrior::with_health`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WarriorRecord")]
pub struct Warrior {
    /// Unique identifier for this warrior.
    pub id: WarriorId,
    /// Display name chosen by the warrior's author.
    pub name: String,
    /// Current position on the map.
    pub position: Coord,
    /// Remaining health. Zero means defeated.
    pub health: u32,
    /// Health ceiling for healing.
    pub max_health: u32,
}

/// Warrior as written in a snapshot, before health is clamped.
#[derive(Deserialize)]
struct WarriorRecord {
    id: WarriorId,
    name: String,
    position: Coord,
    #[serde(default = "default_health")]
    health: u32,
    #[serde(default = "default_health")]
    max_health: u32,
}

impl From<WarriorRecord> for Warrior {
    fn from(record: WarriorRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            position: record.position,
            health: record.health.min(record.max_health),
            max_health: record.max_health,
        }
    }
}

impl Warrior {
    /// Create a warrior at full health.
    #[must_use]
    pub fn new(id: WarriorId, name: impl Into<String>, position: Coord) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            health: DEFAULT_MAX_HEALTH,
            max_health: DEFAULT_MAX_HEALTH,
        }
    }

    /// Returns the warrior with the given health, clamped to its maximum.
    #[must_use]
    pub fn with_health(mut self, health: u32) -> Self {
        self.health = health.min(self.max_health);
        self
    }

    /// Check if this warrior is still in play.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Apply damage. Returns the health left afterwards.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.health = self.health.saturating_sub(amount);
        self.health
    }

    /// Restore health up to the maximum. The defeated cannot be healed.
    pub fn heal(&mut self, amount: u32) {
        if self.is_alive() {
            self.health = self.health.saturating_add(amount).min(self.max_health);
        }
    }

    /// Defeat this warrior outright.
    pub fn defeat(&mut self) {
        self.health = 0;
    }

    /// Move to a new position.
    pub fn move_to(&mut self, position: Coord) {
        self.position = position;
    }
}

impl Combatant for Warrior {
    fn is_alive(&self) -> bool {
        Warrior::is_alive(self)
    }
}
