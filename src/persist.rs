//! Save/load for game snapshots.
//!
//! Serializes the game state to versioned, human-readable JSON. The rule
//! engines are stateless and never persisted; a load reconstructs them
//! fresh (see `GameStore::from_state`).

use crate::store::GameState;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tokio::fs;

/// Errors from persistence operations.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}

/// Current save file version.
const SAVE_VERSION: u32 = 1;

/// A saved game with everything needed to resume play.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedGame {
    /// Save format version for compatibility checking.
    pub version: u32,

    /// When the save was created.
    pub saved_at: String,

    /// The complete game snapshot.
    pub state: GameState,

    /// Metadata about the save.
    pub metadata: SaveMetadata,
}

/// Metadata about the save file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveMetadata {
    /// Hero name, or a placeholder before character creation.
    pub character_name: String,

    /// Character level (0 before character creation).
    pub level: u32,

    /// Current story arc.
    pub story_arc: String,

    /// Number of active quests.
    pub active_quests: usize,

    /// Number of completed quests.
    pub completed_quests: usize,

    /// When the save was created (duplicated from parent for peek access).
    #[serde(default)]
    pub saved_at: String,
}

impl SavedGame {
    /// Create a new saved game from a snapshot.
    pub fn new(state: GameState) -> Self {
        let saved_at = timestamp_now();
        let metadata = SaveMetadata {
            character_name: state
                .character
                .as_ref()
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "Unnamed Hero".to_string()),
            level: state.character.as_ref().map(|c| c.level).unwrap_or(0),
            story_arc: state.current_story_arc.clone(),
            active_quests: state.active_quests.len(),
            completed_quests: state.completed_quests.len(),
            saved_at: saved_at.clone(),
        };

        Self {
            version: SAVE_VERSION,
            saved_at,
            state,
            metadata,
        }
    }

    /// Save to a JSON file.
    pub async fn save_json(&self, path: impl AsRef<Path>) -> Result<(), PersistError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Load from a JSON file.
    pub async fn load_json(path: impl AsRef<Path>) -> Result<Self, PersistError> {
        let content = fs::read_to_string(path).await?;
        let saved: Self = serde_json::from_str(&content)?;

        if saved.version != SAVE_VERSION {
            return Err(PersistError::VersionMismatch {
                expected: SAVE_VERSION,
                found: saved.version,
            });
        }

        Ok(saved)
    }

    /// Read a save file's metadata without loading the full snapshot.
    pub async fn peek_metadata(path: impl AsRef<Path>) -> Result<SaveMetadata, PersistError> {
        let content = fs::read_to_string(path).await?;

        // Parse just enough to get metadata
        #[derive(Deserialize)]
        struct Partial {
            version: u32,
            metadata: SaveMetadata,
        }

        let partial: Partial = serde_json::from_str(&content)?;

        if partial.version != SAVE_VERSION {
            return Err(PersistError::VersionMismatch {
                expected: SAVE_VERSION,
                found: partial.version,
            });
        }

        Ok(partial.metadata)
    }
}

/// List all save files in a directory.
pub async fn list_saves(dir: impl AsRef<Path>) -> Result<Vec<SaveInfo>, PersistError> {
    let mut saves = Vec::new();
    let mut entries = fs::read_dir(dir).await?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().map(|e| e == "json").unwrap_or(false) {
            if let Ok(metadata) = SavedGame::peek_metadata(&path).await {
                saves.push(SaveInfo {
                    path: path.to_string_lossy().to_string(),
                    metadata,
                });
            }
        }
    }

    saves.sort_by(|a, b| b.path.cmp(&a.path));
    Ok(saves)
}

/// Information about a save file.
#[derive(Debug, Clone)]
pub struct SaveInfo {
    /// Path to the save file.
    pub path: String,

    /// Save metadata.
    pub metadata: SaveMetadata,
}

/// Create an auto-save file name from the hero's name.
pub fn auto_save_path(base_dir: impl AsRef<Path>, hero_name: &str) -> std::path::PathBuf {
    let sanitized = hero_name
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect::<String>();
    base_dir.as_ref().join(format!("{sanitized}_autosave.json"))
}

/// Current timestamp as Unix seconds.
fn timestamp_now() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();

    format!("{}", now.as_secs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::CharacterClass;
    use crate::quest::QuestStatus;
    use crate::testing::{sample_character, sample_quest};

    #[test]
    fn test_metadata_from_snapshot() {
        let mut state = GameState::new();
        state.character = Some(sample_character(CharacterClass::Warrior));
        state.active_quests.push(sample_quest(QuestStatus::Active));

        let saved = SavedGame::new(state);
        assert_eq!(saved.version, 1);
        assert_eq!(saved.metadata.character_name, "Test Hero");
        assert_eq!(saved.metadata.level, 1);
        assert_eq!(saved.metadata.story_arc, "The Beginning");
        assert_eq!(saved.metadata.active_quests, 1);
        assert_eq!(saved.metadata.completed_quests, 0);
    }

    #[test]
    fn test_metadata_before_character_creation() {
        let saved = SavedGame::new(GameState::new());
        assert_eq!(saved.metadata.character_name, "Unnamed Hero");
        assert_eq!(saved.metadata.level, 0);
    }

    #[test]
    fn test_auto_save_path_sanitizes() {
        let path = auto_save_path("/tmp/saves", "Sir Drinks-a-Lot");
        assert_eq!(
            path.to_string_lossy(),
            "/tmp/saves/Sir_Drinks_a_Lot_autosave.json"
        );
    }
}
