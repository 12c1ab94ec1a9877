//! The game state store.
//!
//! `GameState` is the serializable snapshot: the character plus the three
//! quest collections and the current story arc. `GameStore` owns a snapshot
//! together with an injected `NarrativeEngine` and provides the only entry
//! points that mutate it. The engine is stateless and never serialized; a
//! reload constructs a fresh one via [`GameStore::from_state`].

use crate::character::Character;
use crate::narrative::{NarrativeEngine, QuestProgress};
use crate::quest::{Habit, Quest, QuestId, QuestRewards, QuestStatus};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Story arc every new game starts in.
const OPENING_STORY_ARC: &str = "The Beginning";

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("quest {id} cannot be added with status {status}")]
    UnstorableStatus { id: QuestId, status: QuestStatus },
}

/// The complete persisted game snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// `None` until the one-time character creation flow runs.
    pub character: Option<Character>,
    pub active_quests: Vec<Quest>,
    pub available_quests: Vec<Quest>,
    pub completed_quests: Vec<Quest>,
    pub current_story_arc: String,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            character: None,
            active_quests: Vec::new(),
            available_quests: Vec::new(),
            completed_quests: Vec::new(),
            current_story_arc: OPENING_STORY_ARC.to_string(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// The outcome of a quest-progress step, aggregated for display layers.
#[derive(Debug, Clone)]
pub struct ProgressOutcome {
    pub quest_id: QuestId,
    /// Flavor text for the step: a ladder entry or the completion string.
    pub narrative_update: String,
    /// Whether this step completed the quest.
    pub completed: bool,
    /// Rewards granted by this step, if it completed the quest.
    pub rewards: Option<QuestRewards>,
    pub leveled_up: bool,
    /// Congratulatory text, present only when the reward XP leveled the
    /// character.
    pub level_up_narrative: Option<String>,
}

/// Holds the authoritative game snapshot and mutates it through the rules
/// engines.
pub struct GameStore {
    state: GameState,
    engine: NarrativeEngine,
}

impl GameStore {
    /// Create an empty store with the given engine.
    pub fn new(engine: NarrativeEngine) -> Self {
        Self {
            state: GameState::new(),
            engine,
        }
    }

    /// Rebuild a store around a previously saved snapshot. The engine is
    /// always constructed fresh; it is never part of the snapshot.
    pub fn from_state(state: GameState, engine: NarrativeEngine) -> Self {
        Self { state, engine }
    }

    /// Set the opening story arc.
    pub fn with_story_arc(mut self, arc: impl Into<String>) -> Self {
        self.state.current_story_arc = arc.into();
        self
    }

    /// The current snapshot. Read-only from the caller's perspective.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Consume the store, yielding the snapshot for persistence.
    pub fn into_state(self) -> GameState {
        self.state
    }

    pub fn character(&self) -> Option<&Character> {
        self.state.character.as_ref()
    }

    /// Replace the character snapshot wholesale. Used once, at creation.
    pub fn set_character(&mut self, character: Character) {
        self.state.character = Some(character);
    }

    /// File a quest into the collection matching its status.
    ///
    /// Only `Active` and `Available` quests are storable; anything else is
    /// rejected rather than silently dropped.
    pub fn add_quest(&mut self, quest: Quest) -> Result<(), StoreError> {
        match quest.status {
            QuestStatus::Active => {
                self.state.active_quests.push(quest);
                Ok(())
            }
            QuestStatus::Available => {
                self.state.available_quests.push(quest);
                Ok(())
            }
            status => Err(StoreError::UnstorableStatus {
                id: quest.id,
                status,
            }),
        }
    }

    /// Promote an available quest to the active collection.
    ///
    /// Returns the activated quest, or `None` if the id is not in the
    /// available collection.
    pub fn activate_quest(&mut self, quest_id: QuestId) -> Option<&Quest> {
        let idx = self
            .state
            .available_quests
            .iter()
            .position(|q| q.id == quest_id)?;
        let mut quest = self.state.available_quests.remove(idx);
        quest.status = QuestStatus::Active;
        self.state.active_quests.push(quest);
        self.state.active_quests.last()
    }

    /// Advance an active quest by `increment` (which may be negative).
    ///
    /// Only active quests are progressable; an id not found there leaves the
    /// state untouched and returns `None`. Completion moves the quest into
    /// the completed collection and awards its XP to the character.
    pub fn update_quest_progress(
        &mut self,
        quest_id: QuestId,
        increment: i64,
    ) -> Option<ProgressOutcome> {
        let idx = self
            .state
            .active_quests
            .iter()
            .position(|q| q.id == quest_id)?;

        let QuestProgress {
            quest: updated,
            narrative_update,
            rewards_earned,
        } = self
            .engine
            .update_quest_progress(&self.state.active_quests[idx], increment);

        let mut leveled_up = false;
        let mut level_up_narrative = None;
        if let Some(rewards) = &rewards_earned {
            if let Some(character) = self.state.character.take() {
                let award = self.engine.award_xp(&character, rewards.xp);
                leveled_up = award.leveled_up;
                level_up_narrative = award.narrative_update;
                self.state.character = Some(award.character);
            }
        }

        let completed = updated.status == QuestStatus::Completed;
        if completed {
            self.state.active_quests.remove(idx);
            self.state.completed_quests.push(updated);
        } else {
            self.state.active_quests[idx] = updated;
        }

        Some(ProgressOutcome {
            quest_id,
            narrative_update,
            completed,
            rewards: rewards_earned,
            leveled_up,
            level_up_narrative,
        })
    }

    /// Complete an active quest directly.
    ///
    /// Drives the quest's remaining progress through the same routine as
    /// incremental progress, so rewards and completion narrative are granted
    /// exactly once on either path.
    pub fn complete_quest(&mut self, quest_id: QuestId) -> Option<ProgressOutcome> {
        let remaining = self
            .state
            .active_quests
            .iter()
            .find(|q| q.id == quest_id)
            .map(|q| q.max_progress.saturating_sub(q.progress))?;
        self.update_quest_progress(quest_id, remaining as i64)
    }

    /// Generate a quest for the current character without storing it (the
    /// habit-entry preview path). `None` before character creation.
    pub fn generate_quest(&self, habit: &Habit) -> Option<Quest> {
        let character = self.state.character.as_ref()?;
        Some(self.engine.generate_quest(habit, character))
    }

    /// Generate a quest and start it immediately in the active collection.
    pub fn begin_quest(&mut self, habit: &Habit) -> Option<QuestId> {
        let mut quest = self.generate_quest(habit)?;
        quest.status = QuestStatus::Active;
        let id = quest.id;
        self.state.active_quests.push(quest);
        Some(id)
    }
}
