//! QA tests for save/load functionality.
//!
//! These tests verify that game snapshots are properly saved and restored,
//! that metadata can be peeked without a full load, and that version
//! mismatches are reported.
//!
//! Run with: `cargo test --test qa_persistence`

use habit_alchemy::testing::sample_habit;
use habit_alchemy::{
    persist, Character, CharacterClass, GameStore, NarrativeEngine, PersistError, SavedGame,
};
use tempfile::TempDir;

fn played_store() -> GameStore {
    let mut store = GameStore::new(NarrativeEngine::new());
    store.set_character(Character::new("Thorin", CharacterClass::Warrior));
    let quest_id = store.begin_quest(&sample_habit()).expect("character");
    store.update_quest_progress(quest_id, 3).expect("active");
    store
}

// =============================================================================
// SAVE AND LOAD
// =============================================================================

#[tokio::test]
async fn test_save_and_load_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let save_path = temp_dir.path().join("test_save.json");

    let store = played_store();
    let saved = SavedGame::new(store.into_state());
    saved.save_json(&save_path).await.expect("Failed to save");
    assert!(save_path.exists());

    let loaded = SavedGame::load_json(&save_path).await.expect("Failed to load");
    assert_eq!(loaded.version, saved.version);

    // Rebuild a store around the loaded snapshot; the engine is fresh.
    let store = GameStore::from_state(loaded.state, NarrativeEngine::new());
    let character = store.character().expect("character survives the trip");
    assert_eq!(character.name, "Thorin");
    assert_eq!(store.state().active_quests.len(), 1);
    assert_eq!(store.state().active_quests[0].progress, 3);

    // And the restored store still plays.
    let quest_id = store.state().active_quests[0].id;
    let mut store = store;
    let outcome = store.complete_quest(quest_id).expect("still active");
    assert!(outcome.completed);
}

#[tokio::test]
async fn test_peek_metadata_without_full_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let save_path = temp_dir.path().join("peek_save.json");

    SavedGame::new(played_store().into_state())
        .save_json(&save_path)
        .await
        .expect("Failed to save");

    let metadata = SavedGame::peek_metadata(&save_path)
        .await
        .expect("Failed to peek");
    assert_eq!(metadata.character_name, "Thorin");
    assert_eq!(metadata.level, 1);
    assert_eq!(metadata.story_arc, "The Beginning");
    assert_eq!(metadata.active_quests, 1);
    assert_eq!(metadata.completed_quests, 0);
}

#[tokio::test]
async fn test_version_mismatch_is_reported() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let save_path = temp_dir.path().join("future_save.json");

    let mut saved = SavedGame::new(played_store().into_state());
    saved.version = 99;
    let content = serde_json::to_string_pretty(&saved).expect("serializable");
    tokio::fs::write(&save_path, content).await.expect("write");

    match SavedGame::load_json(&save_path).await {
        Err(PersistError::VersionMismatch { expected, found }) => {
            assert_eq!(expected, 1);
            assert_eq!(found, 99);
        }
        other => panic!("expected VersionMismatch, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_file_is_an_io_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("nope.json");

    assert!(matches!(
        SavedGame::load_json(&missing).await,
        Err(PersistError::Io(_))
    ));
}

// =============================================================================
// SAVE DISCOVERY
// =============================================================================

#[tokio::test]
async fn test_list_saves_finds_valid_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    for name in ["alpha", "beta"] {
        let path = temp_dir.path().join(format!("{name}.json"));
        SavedGame::new(played_store().into_state())
            .save_json(&path)
            .await
            .expect("Failed to save");
    }
    // Non-JSON and junk files are skipped.
    tokio::fs::write(temp_dir.path().join("notes.txt"), "junk")
        .await
        .expect("write");
    tokio::fs::write(temp_dir.path().join("corrupt.json"), "{not json")
        .await
        .expect("write");

    let saves = persist::list_saves(temp_dir.path()).await.expect("listable");
    assert_eq!(saves.len(), 2);
    assert!(saves.iter().all(|s| s.metadata.character_name == "Thorin"));
}

#[test]
fn test_auto_save_path_shape() {
    let path = persist::auto_save_path("/tmp/saves", "Thorin Ironforge");
    assert_eq!(
        path.to_string_lossy(),
        "/tmp/saves/Thorin_Ironforge_autosave.json"
    );
}
