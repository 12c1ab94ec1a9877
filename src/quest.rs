//! Quest and habit types.
//!
//! A habit is the raw user-specified recurring behavior; a quest is the
//! gamified wrapper the narrative engine generates around it.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for quests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestId(pub Uuid);

impl QuestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for QuestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Habits
// ============================================================================

/// How often a habit recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitFrequency {
    Daily,
    Weekly,
    Custom,
}

/// The raw recurring behavior a quest is generated from. Input only; the
/// store never holds habits. Target is expected in `[1, 100]`, enforced by
/// the habit-entry flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub name: String,
    pub frequency: HabitFrequency,
    pub target: u32,
}

impl Habit {
    pub fn new(name: impl Into<String>, frequency: HabitFrequency, target: u32) -> Self {
        Self {
            name: name.into(),
            frequency,
            target,
        }
    }
}

// ============================================================================
// Quests
// ============================================================================

/// Quest difficulty, fixed at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Epic,
}

impl Difficulty {
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Epic => "epic",
        }
    }

    /// Base XP reward before the level bonus.
    pub fn base_xp(&self) -> u32 {
        match self {
            Difficulty::Easy => 25,
            Difficulty::Medium => 50,
            Difficulty::Hard => 100,
            Difficulty::Epic => 200,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Quest lifecycle state.
///
/// `Locked` is reserved for future gating; no transition produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestStatus {
    Locked,
    Available,
    Active,
    Completed,
}

impl QuestStatus {
    pub fn name(&self) -> &'static str {
        match self {
            QuestStatus::Locked => "locked",
            QuestStatus::Available => "available",
            QuestStatus::Active => "active",
            QuestStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for QuestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Rewards granted exactly once, when the quest completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestRewards {
    pub xp: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
}

/// Flavor text generated once at quest creation and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestNarrative {
    pub introduction: String,
    /// Progress-update ladder, selected by completion fraction.
    pub progress_updates: Vec<String>,
    pub completion: String,
}

/// A gamified wrapper around a habit-tracking goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quest {
    pub id: QuestId,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub status: QuestStatus,
    pub progress: u32,
    pub max_progress: u32,
    pub rewards: QuestRewards,
    pub narrative: QuestNarrative,
}

impl Quest {
    pub fn is_complete(&self) -> bool {
        self.status == QuestStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_base_xp() {
        assert_eq!(Difficulty::Easy.base_xp(), 25);
        assert_eq!(Difficulty::Medium.base_xp(), 50);
        assert_eq!(Difficulty::Hard.base_xp(), 100);
        assert_eq!(Difficulty::Epic.base_xp(), 200);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&QuestStatus::Available).unwrap();
        assert_eq!(json, "\"available\"");
        let back: QuestStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(back, QuestStatus::Completed);
    }

    #[test]
    fn test_rewards_items_omitted_when_absent() {
        let rewards = QuestRewards { xp: 50, items: None };
        let json = serde_json::to_string(&rewards).unwrap();
        assert_eq!(json, "{\"xp\":50}");
    }

    #[test]
    fn test_unique_quest_ids() {
        assert_ne!(QuestId::new(), QuestId::new());
    }
}
