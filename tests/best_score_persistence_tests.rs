//! End-to-end persistence: engine wins flowing through the JSON store.

use std::fs;
use std::path::PathBuf;

use tui_pairs::engine::GameEngine;
use tui_pairs::store::JsonScoreStore;
use tui_pairs::types::Difficulty;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "tui-pairs-it-{}-{}.json",
        std::process::id(),
        name
    ))
}

/// Solve the whole board in pair-id order.
fn solve(engine: &mut GameEngine) {
    let pairs = engine.session().expect("session").config().pairs;
    for pair_id in 0..pairs {
        let positions: Vec<usize> = engine
            .session()
            .unwrap()
            .deck()
            .cards()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.pair_id == pair_id)
            .map(|(i, _)| i)
            .collect();
        engine.click(positions[0]);
        engine.click(positions[1]);
        engine.advance(500);
    }
}

#[test]
fn single_player_win_lands_in_the_score_file() {
    let path = temp_path("win");
    let _ = fs::remove_file(&path);

    let mut engine = GameEngine::new(Box::new(JsonScoreStore::new(path.clone())), 12345);
    engine.start(Difficulty::Easy, 1).unwrap();
    solve(&mut engine);
    assert!(engine.outcome().unwrap().new_best);

    // The file holds one easy-tier record with the run's counters.
    let text = fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["easy"]["moves"], 8);
    assert_eq!(json["easy"]["difficulty"], "easy");
    assert!(json.get("medium").is_none());

    // A fresh engine sees the persisted best.
    let engine = GameEngine::new(Box::new(JsonScoreStore::new(path.clone())), 6);
    let best = engine.best_scores().get(Difficulty::Easy).unwrap();
    assert_eq!(best.moves, 8);

    let _ = fs::remove_file(&path);
}

#[test]
fn multiplayer_win_leaves_no_file_behind() {
    let path = temp_path("multi");
    let _ = fs::remove_file(&path);

    let mut engine = GameEngine::new(Box::new(JsonScoreStore::new(path.clone())), 12345);
    engine.start(Difficulty::Easy, 2).unwrap();
    solve(&mut engine);
    assert!(engine.snapshot().unwrap().won);

    assert!(!path.exists());
}

#[test]
fn unreadable_store_still_allows_play_and_wins() {
    // A directory where the file should be makes every read and write fail.
    let path = temp_path("blocked");
    let _ = fs::remove_file(&path);
    fs::create_dir_all(&path).unwrap();

    let mut engine = GameEngine::new(Box::new(JsonScoreStore::new(path.clone())), 12345);
    engine.start(Difficulty::Easy, 1).unwrap();
    solve(&mut engine);

    // No prior record readable, so the run still counts as a new best in
    // memory; the failed save is swallowed.
    assert!(engine.outcome().unwrap().new_best);

    let _ = fs::remove_dir(&path);
}
