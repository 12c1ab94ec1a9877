//! Habit-tracking RPG engine.
//!
//! This crate provides:
//! - Character progression: classes, stats, leveling, achievements, equipment
//! - Quest generation: habits become quests with class-themed narrative
//! - A game state store coordinating the two rule engines
//! - Versioned JSON persistence of game snapshots
//!
//! The rule engines are stateless and injected into the store; only the
//! `GameState` snapshot is ever serialized.
//!
//! # Quick Start
//!
//! ```
//! use habit_alchemy::{
//!     validate_name, Character, CharacterClass, GameStore, Habit, HabitFrequency,
//!     NarrativeEngine,
//! };
//!
//! let name = validate_name("  Thorin ").expect("valid name");
//! let mut store = GameStore::new(NarrativeEngine::new());
//! store.set_character(Character::new(name, CharacterClass::Warrior));
//!
//! let habit = Habit::new("drink water", HabitFrequency::Daily, 8);
//! let quest_id = store.begin_quest(&habit).expect("character exists");
//!
//! let outcome = store.update_quest_progress(quest_id, 8).expect("quest is active");
//! assert!(outcome.completed);
//! assert_eq!(store.character().expect("character exists").xp, 30);
//! ```

pub mod character;
pub mod class_data;
pub mod equipment;
pub mod milestones;
pub mod narrative;
pub mod persist;
pub mod quest;
pub mod store;
pub mod testing;

// Primary public API
pub use character::{
    validate_name, Character, CharacterClass, CharacterId, NameError, StatKind, Stats,
};
pub use class_data::{ClassData, DevelopmentPath};
pub use equipment::{bonuses_for, equipment_for_achievement, find_equipment, EquipmentItem};
pub use milestones::{evaluate as evaluate_milestones, Milestone, MilestoneStatus};
pub use narrative::{NarrativeEngine, QuestProgress, XpAward};
pub use persist::{PersistError, SaveMetadata, SavedGame};
pub use quest::{
    Difficulty, Habit, HabitFrequency, Quest, QuestId, QuestNarrative, QuestRewards, QuestStatus,
};
pub use store::{GameState, GameStore, ProgressOutcome, StoreError};
