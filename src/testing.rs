//! Test fixtures.
//!
//! Sample entities with fixed, predictable values for unit and integration
//! tests. Quest fixtures skip the narrative engine entirely so tests can
//! assert against known strings.

use crate::character::{Character, CharacterClass};
use crate::quest::{
    Difficulty, Habit, HabitFrequency, Quest, QuestId, QuestNarrative, QuestRewards, QuestStatus,
};

/// A fresh level-1 character named "Test Hero".
pub fn sample_character(class: CharacterClass) -> Character {
    Character::new("Test Hero", class)
}

/// A daily hydration habit with a target of 8.
pub fn sample_habit() -> Habit {
    Habit::new("drink water", HabitFrequency::Daily, 8)
}

/// An easy 8-step quest worth 50 XP, with fixed narrative strings and the
/// given starting status.
pub fn sample_quest(status: QuestStatus) -> Quest {
    Quest {
        id: QuestId::new(),
        title: "Hydration Quest".to_string(),
        description: "Drink 8 glasses of water".to_string(),
        difficulty: Difficulty::Easy,
        status,
        progress: 0,
        max_progress: 8,
        rewards: QuestRewards {
            xp: 50,
            items: None,
        },
        narrative: QuestNarrative {
            introduction: "Begin your hydration journey".to_string(),
            progress_updates: vec![
                "Quarter way there!".to_string(),
                "Halfway complete!".to_string(),
                "Almost finished!".to_string(),
            ],
            completion: "Quest completed!".to_string(),
        },
    }
}
