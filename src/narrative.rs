//! The narrative engine: quest generation, progress advancement, and
//! experience awards.
//!
//! `NarrativeEngine` is stateless; it resolves inputs into new values and
//! never mutates its arguments. Randomness (theme and title selection) is
//! confined to quest generation and can be injected for deterministic tests
//! via the `_with_rng` variant.

use crate::character::Character;
use crate::quest::{Difficulty, Habit, Quest, QuestId, QuestNarrative, QuestRewards, QuestStatus};
use rand::Rng;

/// Title prefixes, one picked at random per quest.
const TITLE_PREFIXES: [&str; 4] = ["The", "Quest of", "Journey to", "Path of"];

/// The result of advancing a quest's progress.
#[derive(Debug, Clone)]
pub struct QuestProgress {
    /// The updated quest value.
    pub quest: Quest,
    /// Flavor text for the step: a ladder entry, or the completion string.
    pub narrative_update: String,
    /// Present exactly when this step completed the quest.
    pub rewards_earned: Option<QuestRewards>,
}

/// The result of awarding experience.
#[derive(Debug, Clone)]
pub struct XpAward {
    /// The updated character value.
    pub character: Character,
    pub leveled_up: bool,
    /// Congratulatory text, present only on a level-up.
    pub narrative_update: Option<String>,
}

/// Generates quests from habits and applies progression rules.
pub struct NarrativeEngine;

impl NarrativeEngine {
    pub fn new() -> Self {
        Self
    }

    /// Generate a quest from a habit and the character taking it on.
    pub fn generate_quest(&self, habit: &Habit, character: &Character) -> Quest {
        self.generate_quest_with_rng(habit, character, &mut rand::thread_rng())
    }

    /// Generate with a specific RNG (useful for testing).
    pub fn generate_quest_with_rng<R: Rng>(
        &self,
        habit: &Habit,
        character: &Character,
        rng: &mut R,
    ) -> Quest {
        let difficulty = self.calculate_difficulty(habit, character);
        let rewards = self.calculate_rewards(difficulty, character.level);
        let narrative = self.generate_narrative(habit, character, rng);

        Quest {
            id: QuestId::new(),
            title: self.generate_title(habit, rng),
            description: format!("Complete {} {} actions", habit.target, habit.name),
            difficulty,
            status: QuestStatus::Available,
            progress: 0,
            max_progress: habit.target,
            rewards,
            narrative,
        }
    }

    /// Advance a quest's progress by `increment` (which may be negative).
    ///
    /// Progress is clamped to `[0, max_progress]`. Reaching the maximum
    /// completes the quest and surfaces its rewards; this is the sole
    /// trigger for reward granting.
    pub fn update_quest_progress(&self, quest: &Quest, increment: i64) -> QuestProgress {
        let mut updated = quest.clone();
        let raw = (quest.progress as i64).saturating_add(increment);
        updated.progress = raw.clamp(0, quest.max_progress as i64) as u32;

        if updated.progress >= updated.max_progress {
            updated.status = QuestStatus::Completed;
            QuestProgress {
                narrative_update: updated.narrative.completion.clone(),
                rewards_earned: Some(updated.rewards.clone()),
                quest: updated,
            }
        } else {
            QuestProgress {
                narrative_update: self.progress_narrative(&updated),
                rewards_earned: None,
                quest: updated,
            }
        }
    }

    /// Add experience, advancing at most one level per call.
    ///
    /// Excess XP past the threshold carries into the new level; the new
    /// threshold is `new_level * 100`. A level-up also applies the class's
    /// fixed stat boosts.
    pub fn award_xp(&self, character: &Character, xp: u32) -> XpAward {
        let mut updated = character.clone();
        updated.xp += xp;

        let mut leveled_up = false;
        let mut narrative_update = None;

        if updated.xp >= updated.next_level_xp {
            leveled_up = true;
            let excess = updated.xp - updated.next_level_xp;
            updated.level += 1;
            updated.xp = excess;
            updated.next_level_xp = updated.level * 100;
            for (kind, amount) in updated.class.data().level_boosts {
                updated.stats.add(*kind, *amount);
            }
            narrative_update = Some(format!(
                "🎉 Level up! You are now level {}!",
                updated.level
            ));
        }

        XpAward {
            character: updated,
            leveled_up,
            narrative_update,
        }
    }

    /// Character level dominates habit target when fixing difficulty.
    fn calculate_difficulty(&self, habit: &Habit, character: &Character) -> Difficulty {
        if character.level >= 10 {
            Difficulty::Epic
        } else if character.level >= 5 {
            Difficulty::Hard
        } else if habit.target >= 10 {
            Difficulty::Medium
        } else {
            Difficulty::Easy
        }
    }

    fn calculate_rewards(&self, difficulty: Difficulty, level: u32) -> QuestRewards {
        QuestRewards {
            xp: difficulty.base_xp() + level * 5,
            items: None,
        }
    }

    fn generate_narrative<R: Rng>(
        &self,
        habit: &Habit,
        character: &Character,
        rng: &mut R,
    ) -> QuestNarrative {
        let themes = character.class.data().themes;
        let theme = themes[rng.gen_range(0..themes.len())];

        QuestNarrative {
            introduction: format!(
                "Embark on a quest of {theme} through {}. Your journey begins now, brave {}!",
                habit.name, character.class
            ),
            progress_updates: vec![
                format!("Your {theme} grows stronger!"),
                format!("Halfway through your {theme} quest!"),
                format!("The path of {theme} nears completion!"),
            ],
            completion: format!(
                "🎉 Quest completed! Your mastery of {theme} through {} has made you stronger!",
                habit.name
            ),
        }
    }

    fn generate_title<R: Rng>(&self, habit: &Habit, rng: &mut R) -> String {
        let prefix = TITLE_PREFIXES[rng.gen_range(0..TITLE_PREFIXES.len())];
        format!("{prefix} {}", capitalize_first(&habit.name))
    }

    /// Pick a ladder entry by completion fraction: index
    /// `floor(fraction * len)` clamped to the ladder's range.
    fn progress_narrative(&self, quest: &Quest) -> String {
        let updates = &quest.narrative.progress_updates;
        if updates.is_empty() || quest.max_progress == 0 {
            return "Progress made!".to_string();
        }
        let fraction = quest.progress as f64 / quest.max_progress as f64;
        let index = ((fraction * updates.len() as f64) as usize).min(updates.len() - 1);
        updates
            .get(index)
            .cloned()
            .unwrap_or_else(|| "Progress made!".to_string())
    }
}

impl Default for NarrativeEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
