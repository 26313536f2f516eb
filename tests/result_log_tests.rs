#![cfg(feature = "persist")]

use std::fs;
use std::sync::Arc;

use battleships::{
    AsyncResultLog, GameResult, JsonlResultLog, MemoryResultLog, Outcome, ResultLog,
};
use tempfile::tempdir;

#[test]
fn test_memory_log_lists_newest_first() {
    let log = MemoryResultLog::new();
    log.append(GameResult::new("Ada", Outcome::Win, 100)).unwrap();
    log.append(GameResult::new("Bob", Outcome::Loss, 300)).unwrap();
    log.append(GameResult::new("Cy", Outcome::Win, 200)).unwrap();

    let names: Vec<_> = log
        .list_all()
        .unwrap()
        .iter()
        .map(|r| r.player_name().to_string())
        .collect();
    assert_eq!(names, ["Bob", "Cy", "Ada"]);
}

#[test]
fn test_equal_timestamps_keep_later_append_first() {
    let log = MemoryResultLog::new();
    log.append(GameResult::new("first", Outcome::Win, 7)).unwrap();
    log.append(GameResult::new("second", Outcome::Loss, 7)).unwrap();
    let all = log.list_all().unwrap();
    assert_eq!(all[0].player_name(), "second");
    assert_eq!(all[1].player_name(), "first");
}

#[test]
fn test_jsonl_missing_file_is_empty() {
    let dir = tempdir().unwrap();
    let log = JsonlResultLog::new(dir.path().join("none.jsonl"));
    assert!(log.list_all().unwrap().is_empty());
}

#[test]
fn test_jsonl_appends_and_reads_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.jsonl");
    let log = JsonlResultLog::new(&path);
    log.append(GameResult::new("Ada", Outcome::Win, 10)).unwrap();
    log.append(GameResult::new("Ada", Outcome::Loss, 20)).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 2);

    // a second handle on the same file sees the same history
    let reopened = JsonlResultLog::new(&path);
    let all = reopened.list_all().unwrap();
    assert_eq!(
        all,
        vec![
            GameResult::new("Ada", Outcome::Loss, 20),
            GameResult::new("Ada", Outcome::Win, 10),
        ]
    );
}

#[test]
fn test_jsonl_skips_unreadable_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.jsonl");
    let log = JsonlResultLog::new(&path);
    log.append(GameResult::new("Ada", Outcome::Win, 1)).unwrap();
    let mut contents = fs::read_to_string(&path).unwrap();
    contents.push_str("not json\n\n");
    fs::write(&path, contents).unwrap();
    log.append(GameResult::new("Bob", Outcome::Loss, 2)).unwrap();

    let all = log.list_all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].player_name(), "Bob");
}

#[test]
fn test_jsonl_unwritable_path_is_an_error() {
    let dir = tempdir().unwrap();
    let log = JsonlResultLog::new(dir.path().join("missing").join("results.jsonl"));
    assert!(log.append(GameResult::new("Ada", Outcome::Win, 1)).is_err());
}

#[tokio::test]
async fn test_async_log_writes_in_background() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.jsonl");
    let inner: Arc<dyn ResultLog> = Arc::new(JsonlResultLog::new(&path));
    let (log, writer) = AsyncResultLog::spawn(inner);

    log.append(GameResult::new("Ada", Outcome::Win, 1)).unwrap();
    log.append(GameResult::new("Bob", Outcome::Loss, 2)).unwrap();
    drop(log);
    writer.await.unwrap();

    let all = JsonlResultLog::new(&path).list_all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].player_name(), "Bob");
}

#[tokio::test]
async fn test_async_log_survives_inner_failure() {
    let dir = tempdir().unwrap();
    let inner: Arc<dyn ResultLog> =
        Arc::new(JsonlResultLog::new(dir.path().join("missing").join("r.jsonl")));
    let (log, writer) = AsyncResultLog::spawn(inner);

    // queued without error even though the write will fail
    log.append(GameResult::new("Ada", Outcome::Win, 1)).unwrap();
    drop(log);
    writer.await.unwrap();
}
