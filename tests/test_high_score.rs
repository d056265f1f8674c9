use std::fs;

use alien_invasion::error::GameError;
use alien_invasion::high_score::*;

#[test]
fn missing_file_loads_as_zero() {
    let dir = tempfile::tempdir().unwrap();
    let store = HighScoreFile::new(dir.path().join("score.txt"));
    assert_eq!(store.load(), 0);
}

#[test]
fn saved_score_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("score.txt");
    let mut store = HighScoreFile::new(&path);

    store.save(4250).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "4250");
    assert_eq!(HighScoreFile::new(&path).load(), 4250);
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("score.txt");
    fs::write(&path, "  780\n").unwrap();
    assert_eq!(HighScoreFile::new(&path).load(), 780);
}

#[test]
fn garbage_file_loads_as_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("score.txt");
    fs::write(&path, "lots").unwrap();
    assert_eq!(HighScoreFile::new(&path).load(), 0);
}

#[test]
fn unwritable_location_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = HighScoreFile::new(dir.path().join("missing").join("score.txt"));
    let err = store.save(10).unwrap_err();
    assert!(matches!(err, GameError::HighScoreWrite { .. }));
    assert!(err.to_string().contains("score.txt"));
}

#[test]
fn memory_store_counts_saves() {
    let mut store = MemoryHighScore::default();
    assert_eq!(store.load(), 0);
    store.save(30).unwrap();
    store.save(60).unwrap();
    assert_eq!(store.load(), 60);
    assert_eq!(store.saves, 2);
}
