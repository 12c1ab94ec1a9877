//! Milestone achievements computed over the whole game state.
//!
//! Distinct from the per-character stat-threshold achievements: milestones
//! track quest counts, level marks, and accumulated progress across the
//! entire snapshot. The battery is a fixed table; evaluation is pure.

use crate::store::GameState;

/// Display grouping for a milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneCategory {
    Quests,
    Level,
    Character,
}

/// The state metric a milestone measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneMetric {
    /// Number of quests in the completed collection.
    CompletedQuests,
    /// Current character level (0 before character creation).
    CharacterLevel,
    /// Progress points summed across every quest collection.
    TotalProgress,
}

/// A whole-state achievement definition.
#[derive(Debug, Clone, Copy)]
pub struct Milestone {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub requirement: u32,
    pub category: MilestoneCategory,
    pub metric: MilestoneMetric,
}

/// The fixed milestone battery.
pub static MILESTONES: [Milestone; 6] = [
    Milestone {
        id: "first_quest",
        title: "First Steps",
        description: "Complete your first quest",
        requirement: 1,
        category: MilestoneCategory::Quests,
        metric: MilestoneMetric::CompletedQuests,
    },
    Milestone {
        id: "quest_master",
        title: "Quest Master",
        description: "Complete 5 quests",
        requirement: 5,
        category: MilestoneCategory::Quests,
        metric: MilestoneMetric::CompletedQuests,
    },
    Milestone {
        id: "legendary_hero",
        title: "Legendary Hero",
        description: "Complete 25 quests",
        requirement: 25,
        category: MilestoneCategory::Quests,
        metric: MilestoneMetric::CompletedQuests,
    },
    Milestone {
        id: "level_up",
        title: "Rising Star",
        description: "Reach character level 5",
        requirement: 5,
        category: MilestoneCategory::Level,
        metric: MilestoneMetric::CharacterLevel,
    },
    Milestone {
        id: "max_level",
        title: "Grandmaster",
        description: "Reach character level 20",
        requirement: 20,
        category: MilestoneCategory::Level,
        metric: MilestoneMetric::CharacterLevel,
    },
    Milestone {
        id: "dedication",
        title: "Dedicated",
        description: "Accumulate 100 total quest progress points",
        requirement: 100,
        category: MilestoneCategory::Character,
        metric: MilestoneMetric::TotalProgress,
    },
];

/// Evaluation of one milestone against a snapshot.
#[derive(Debug, Clone, Copy)]
pub struct MilestoneStatus {
    pub milestone: &'static Milestone,
    pub unlocked: bool,
    /// Progress toward the requirement, capped at the requirement.
    pub progress: u32,
}

/// Evaluate the full battery against a snapshot.
pub fn evaluate(state: &GameState) -> Vec<MilestoneStatus> {
    let completed_quests = state.completed_quests.len() as u32;
    let level = state.character.as_ref().map(|c| c.level).unwrap_or(0);
    let total_progress: u32 = state
        .active_quests
        .iter()
        .chain(&state.available_quests)
        .chain(&state.completed_quests)
        .map(|q| q.progress)
        .sum();

    MILESTONES
        .iter()
        .map(|milestone| {
            let value = match milestone.metric {
                MilestoneMetric::CompletedQuests => completed_quests,
                MilestoneMetric::CharacterLevel => level,
                MilestoneMetric::TotalProgress => total_progress,
            };
            MilestoneStatus {
                milestone,
                unlocked: value >= milestone.requirement,
                progress: value.min(milestone.requirement),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::CharacterClass;
    use crate::quest::QuestStatus;
    use crate::testing::{sample_character, sample_quest};

    fn status_of<'a>(statuses: &'a [MilestoneStatus], id: &str) -> &'a MilestoneStatus {
        statuses
            .iter()
            .find(|s| s.milestone.id == id)
            .expect("milestone in battery")
    }

    #[test]
    fn test_fresh_state_unlocks_nothing() {
        let statuses = evaluate(&GameState::new());
        assert_eq!(statuses.len(), MILESTONES.len());
        assert!(statuses.iter().all(|s| !s.unlocked));
        assert!(statuses.iter().all(|s| s.progress == 0));
    }

    #[test]
    fn test_completed_quests_unlock_in_order() {
        let mut state = GameState::new();
        for _ in 0..5 {
            let mut quest = sample_quest(QuestStatus::Completed);
            quest.progress = quest.max_progress;
            state.completed_quests.push(quest);
        }

        let statuses = evaluate(&state);
        assert!(status_of(&statuses, "first_quest").unlocked);
        assert!(status_of(&statuses, "quest_master").unlocked);

        let legendary = status_of(&statuses, "legendary_hero");
        assert!(!legendary.unlocked);
        assert_eq!(legendary.progress, 5);
    }

    #[test]
    fn test_level_milestones() {
        let mut state = GameState::new();
        let mut character = sample_character(CharacterClass::Sage);
        character.level = 5;
        state.character = Some(character);

        let statuses = evaluate(&state);
        assert!(status_of(&statuses, "level_up").unlocked);
        assert!(!status_of(&statuses, "max_level").unlocked);
        assert_eq!(status_of(&statuses, "max_level").progress, 5);
    }

    #[test]
    fn test_total_progress_spans_collections() {
        let mut state = GameState::new();

        let mut active = sample_quest(QuestStatus::Active);
        active.progress = 3;
        state.active_quests.push(active);

        let mut done = sample_quest(QuestStatus::Completed);
        done.progress = done.max_progress;
        state.completed_quests.push(done);

        let statuses = evaluate(&state);
        assert_eq!(status_of(&statuses, "dedication").progress, 11);
        assert!(!status_of(&statuses, "dedication").unlocked);
    }

    #[test]
    fn test_progress_caps_at_requirement() {
        let mut state = GameState::new();
        let mut character = sample_character(CharacterClass::Warrior);
        character.level = 30;
        state.character = Some(character);

        let statuses = evaluate(&state);
        let grandmaster = status_of(&statuses, "max_level");
        assert!(grandmaster.unlocked);
        assert_eq!(grandmaster.progress, 20);
    }
}
