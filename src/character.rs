//! Core character types for the habit RPG.
//!
//! Contains the character entity, the six stat channels, the class enum,
//! and the pure progression math (power level, xp-to-next-level,
//! stat-threshold achievements).

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Stats
// ============================================================================

/// The six stat channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    Health,
    Focus,
    Creativity,
    Social,
    Discipline,
    Wisdom,
}

impl StatKind {
    pub fn name(&self) -> &'static str {
        match self {
            StatKind::Health => "health",
            StatKind::Focus => "focus",
            StatKind::Creativity => "creativity",
            StatKind::Social => "social",
            StatKind::Discipline => "discipline",
            StatKind::Wisdom => "wisdom",
        }
    }

    pub fn all() -> [StatKind; 6] {
        [
            StatKind::Health,
            StatKind::Focus,
            StatKind::Creativity,
            StatKind::Social,
            StatKind::Discipline,
            StatKind::Wisdom,
        ]
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Stat values container. Also used for equipment bonus totals, where each
/// channel starts at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Stats {
    pub health: u32,
    pub focus: u32,
    pub creativity: u32,
    pub social: u32,
    pub discipline: u32,
    pub wisdom: u32,
}

impl Stats {
    pub fn new(
        health: u32,
        focus: u32,
        creativity: u32,
        social: u32,
        discipline: u32,
        wisdom: u32,
    ) -> Self {
        Self {
            health,
            focus,
            creativity,
            social,
            discipline,
            wisdom,
        }
    }

    pub fn get(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::Health => self.health,
            StatKind::Focus => self.focus,
            StatKind::Creativity => self.creativity,
            StatKind::Social => self.social,
            StatKind::Discipline => self.discipline,
            StatKind::Wisdom => self.wisdom,
        }
    }

    pub fn add(&mut self, kind: StatKind, amount: u32) {
        match kind {
            StatKind::Health => self.health += amount,
            StatKind::Focus => self.focus += amount,
            StatKind::Creativity => self.creativity += amount,
            StatKind::Social => self.social += amount,
            StatKind::Discipline => self.discipline += amount,
            StatKind::Wisdom => self.wisdom += amount,
        }
    }

    /// Sum of all six channels.
    pub fn total(&self) -> u32 {
        self.health + self.focus + self.creativity + self.social + self.discipline + self.wisdom
    }
}

// ============================================================================
// Classes
// ============================================================================

/// The five character archetypes. Immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Warrior,
    Scholar,
    Artist,
    Explorer,
    Sage,
}

impl CharacterClass {
    pub fn name(&self) -> &'static str {
        match self {
            CharacterClass::Warrior => "warrior",
            CharacterClass::Scholar => "scholar",
            CharacterClass::Artist => "artist",
            CharacterClass::Explorer => "explorer",
            CharacterClass::Sage => "sage",
        }
    }

    /// Get all character classes.
    pub fn all() -> &'static [CharacterClass] {
        &[
            CharacterClass::Warrior,
            CharacterClass::Scholar,
            CharacterClass::Artist,
            CharacterClass::Explorer,
            CharacterClass::Sage,
        ]
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Name validation
// ============================================================================

/// Minimum hero name length after trimming.
pub const NAME_MIN_LEN: usize = 2;

/// Maximum hero name length after trimming.
pub const NAME_MAX_LEN: usize = 20;

/// Error from hero name validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Hero name is required")]
    Blank,
    #[error("Hero name must be at least {} characters", NAME_MIN_LEN)]
    TooShort,
    #[error("Hero name must be {} characters or less", NAME_MAX_LEN)]
    TooLong,
}

/// Validate a hero name for the creation flow and return the trimmed form.
///
/// [`Character::new`] assumes a name that already passed this check; the
/// creation flow is expected to call it first.
pub fn validate_name(raw: &str) -> Result<String, NameError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NameError::Blank);
    }
    let len = trimmed.chars().count();
    if len < NAME_MIN_LEN {
        return Err(NameError::TooShort);
    }
    if len > NAME_MAX_LEN {
        return Err(NameError::TooLong);
    }
    Ok(trimmed.to_string())
}

// ============================================================================
// Character
// ============================================================================

/// A player character.
///
/// Stats hold base values plus level-up growth; equipment bonuses are
/// derived separately and never written back into `stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub level: u32,
    pub xp: u32,
    pub next_level_xp: u32,
    pub stats: Stats,
    pub class: CharacterClass,
    pub equipment: Vec<String>,
    pub achievements: Vec<String>,
}

impl Character {
    /// Create a level-1 character with the class's base stats.
    ///
    /// The name is assumed valid (see [`validate_name`]).
    pub fn new(name: impl Into<String>, class: CharacterClass) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            level: 1,
            xp: 0,
            next_level_xp: 100,
            stats: class.data().base_stats,
            class,
            equipment: Vec::new(),
            achievements: Vec::new(),
        }
    }

    /// XP still needed to reach the next level.
    pub fn xp_to_next_level(&self) -> u32 {
        self.next_level_xp.saturating_sub(self.xp)
    }

    /// Single scalar power rating: `floor(sum(stats) * level * 1.5)`.
    pub fn power(&self) -> u32 {
        self.stats.total() * self.level * 3 / 2
    }

    /// Evaluate the stat-threshold achievement battery.
    ///
    /// Returns the satisfied subset in a fixed order: the level check first,
    /// then the stat checks.
    pub fn check_achievements(&self) -> Vec<&'static str> {
        let mut achievements = Vec::new();

        if self.level >= 5 {
            achievements.push("level_5_master");
        }
        if self.stats.health >= 20 {
            achievements.push("health_champion");
        }
        if self.stats.wisdom >= 20 {
            achievements.push("wisdom_seeker");
        }
        if self.stats.creativity >= 20 {
            achievements.push("creative_soul");
        }
        if self.stats.social >= 20 {
            achievements.push("social_butterfly");
        }
        if self.stats.discipline >= 20 {
            achievements.push("discipline_master");
        }
        if self.stats.focus >= 20 {
            achievements.push("focus_expert");
        }

        achievements
    }
}
