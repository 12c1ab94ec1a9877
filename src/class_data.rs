//! Class data for the five archetypes.
//!
//! Contains base stats, level-up stat boosts, narrative theme words, and
//! development guidance for each class.

use crate::character::{CharacterClass, StatKind, Stats};

/// Class-specific data tables.
pub struct ClassData {
    /// Stats a fresh level-1 character starts with.
    pub base_stats: Stats,
    /// Stat increases applied on every level-up.
    pub level_boosts: &'static [(StatKind, u32)],
    /// Theme words the narrative generator draws from.
    pub themes: &'static [&'static str],
    /// Habit-coaching guidance shown on the character sheet.
    pub guidance: DevelopmentPath,
}

/// A suggested development direction for a class.
#[derive(Debug, Clone, Copy)]
pub struct DevelopmentPath {
    pub primary_focus: &'static str,
    pub recommended_habits: &'static [&'static str],
    pub skills_to_improve: &'static [StatKind],
}

impl CharacterClass {
    /// Get the data tables for this class.
    pub fn data(&self) -> ClassData {
        match self {
            CharacterClass::Warrior => ClassData {
                base_stats: Stats::new(15, 8, 6, 7, 12, 7),
                level_boosts: &[
                    (StatKind::Health, 3),
                    (StatKind::Discipline, 2),
                    (StatKind::Focus, 1),
                ],
                themes: &["battle", "strength", "courage", "victory"],
                guidance: DevelopmentPath {
                    primary_focus: "Physical strength and discipline",
                    recommended_habits: &["exercise", "meditation", "healthy eating"],
                    skills_to_improve: &[StatKind::Health, StatKind::Discipline],
                },
            },
            CharacterClass::Scholar => ClassData {
                base_stats: Stats::new(8, 15, 10, 7, 10, 15),
                level_boosts: &[
                    (StatKind::Wisdom, 3),
                    (StatKind::Focus, 2),
                    (StatKind::Creativity, 1),
                ],
                themes: &["knowledge", "wisdom", "study", "learn"],
                guidance: DevelopmentPath {
                    primary_focus: "Knowledge acquisition and mental clarity",
                    recommended_habits: &["reading", "journaling", "learning new skills"],
                    skills_to_improve: &[StatKind::Wisdom, StatKind::Focus],
                },
            },
            CharacterClass::Artist => ClassData {
                base_stats: Stats::new(10, 12, 18, 12, 8, 12),
                level_boosts: &[
                    (StatKind::Creativity, 3),
                    (StatKind::Wisdom, 2),
                    (StatKind::Social, 1),
                ],
                themes: &["creativity", "inspiration", "beauty", "expression"],
                guidance: DevelopmentPath {
                    primary_focus: "Creative expression and inspiration",
                    recommended_habits: &[
                        "creative practice",
                        "inspiration seeking",
                        "skill development",
                    ],
                    skills_to_improve: &[StatKind::Creativity, StatKind::Wisdom],
                },
            },
            CharacterClass::Explorer => ClassData {
                base_stats: Stats::new(12, 10, 12, 16, 10, 10),
                level_boosts: &[
                    (StatKind::Social, 2),
                    (StatKind::Focus, 2),
                    (StatKind::Health, 2),
                ],
                themes: &["adventure", "discovery", "journey", "explore"],
                guidance: DevelopmentPath {
                    primary_focus: "Adventure and social connection",
                    recommended_habits: &["networking", "travel", "new experiences"],
                    skills_to_improve: &[StatKind::Social, StatKind::Focus],
                },
            },
            CharacterClass::Sage => ClassData {
                base_stats: Stats::new(10, 14, 11, 9, 14, 17),
                level_boosts: &[
                    (StatKind::Wisdom, 2),
                    (StatKind::Discipline, 2),
                    (StatKind::Health, 1),
                    (StatKind::Focus, 1),
                ],
                themes: &["balance", "harmony", "understanding", "enlightenment"],
                guidance: DevelopmentPath {
                    primary_focus: "Balance and inner wisdom",
                    recommended_habits: &["meditation", "reflection", "teaching others"],
                    skills_to_improve: &[StatKind::Wisdom, StatKind::Discipline],
                },
            },
        }
    }

    /// Suggested development direction for this class.
    pub fn development_path(&self) -> DevelopmentPath {
        self.data().guidance
    }

    /// Get a short description of the class.
    pub fn description(&self) -> &'static str {
        match self {
            CharacterClass::Warrior => "A disciplined fighter who grows through physical practice",
            CharacterClass::Scholar => "A seeker of knowledge who grows through study",
            CharacterClass::Artist => "A creative spirit who grows through expression",
            CharacterClass::Explorer => "An adventurer who grows through new experiences",
            CharacterClass::Sage => "A balanced soul who grows through reflection",
        }
    }
}
