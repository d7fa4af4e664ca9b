//! Tests for the flush pipeline: fan-out, recovery, and failure handling.

use locyst::{Error, Logger};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn records(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .skip(1)
        .map(ToString::to_string)
        .collect()
}

#[test]
fn flush_fans_out_and_clears_once() {
    let tmp = TempDir::new().unwrap();
    let a = tmp.path().join("a.txt");
    let b = tmp.path().join("sub").join("b.txt");
    let mut logger = Logger::builder().target(&a).target(&b).build().unwrap();
    logger.initialize();

    logger.info("one").unwrap();
    logger.info("two").unwrap();
    logger.info("three").unwrap();
    let pending = logger.get_buffered_logs().to_vec();
    assert_eq!(pending.len(), 3);

    logger.flush().unwrap();

    assert!(logger.get_buffered_logs().is_empty());
    assert_eq!(records(&a), pending);
    assert_eq!(records(&b), pending);
}

#[test]
fn flushed_file_round_trips() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("log.txt");
    let mut logger = Logger::builder().target(&path).build().unwrap();
    logger.initialize_as("Main");

    logger.warn("careful").unwrap();
    logger.error("broken").unwrap();
    let pending = logger.get_buffered_logs().to_vec();
    logger.flush().unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.ends_with('\n'));
    let lines: Vec<&str> = content.lines().collect();
    assert!(chrono::NaiveDateTime::parse_from_str(lines[0], "%Y-%m-%d-%H-%M-%S").is_ok());
    assert_eq!(&lines[1..], pending.as_slice());
    assert!(lines[1].ends_with("[Main/WARN] careful"));
    assert!(lines[2].ends_with("[Main/ERROR] broken"));
}

#[test]
fn flushes_append_in_order() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("log.txt");
    let mut logger = Logger::builder().target(&path).build().unwrap();
    logger.initialize();

    logger.info("1").unwrap();
    logger.flush().unwrap();
    logger.info("2").unwrap();
    logger.info("3").unwrap();
    logger.flush().unwrap();

    let got: Vec<String> = records(&path)
        .iter()
        .map(|l| l.rsplit(' ').next().unwrap().to_string())
        .collect();
    assert_eq!(got, ["1", "2", "3"]);
}

#[test]
fn empty_flush_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("log.txt");
    let mut logger = Logger::builder().target(&path).build().unwrap();
    logger.initialize();

    let before = fs::read_to_string(&path).unwrap();
    logger.flush().unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn missing_file_is_recreated_and_receives_batch() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("log.txt");
    let mut logger = Logger::builder().target(&path).build().unwrap();
    logger.initialize();

    logger.info("pending").unwrap();
    fs::remove_file(&path).unwrap();

    logger.flush().unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert!(chrono::NaiveDateTime::parse_from_str(lines[0], "%Y-%m-%d-%H-%M-%S").is_ok());
    assert_eq!(lines.len(), 2);
    assert!(lines[1].ends_with("pending"));

    // the warning waits for the next flush instead of joining this batch
    let buffered = logger.get_buffered_logs();
    assert_eq!(buffered.len(), 1);
    assert!(buffered[0].contains("/WARN] File "));
    assert!(buffered[0].ends_with("does not exist"));

    logger.flush().unwrap();
    assert!(logger.get_buffered_logs().is_empty());
    assert!(records(&path)[1].ends_with("does not exist"));
}

#[test]
fn missing_directory_is_recreated() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("logs");
    let path = dir.join("log.txt");
    let mut logger = Logger::builder().target(&path).build().unwrap();
    logger.initialize();

    logger.info("pending").unwrap();
    fs::remove_dir_all(&dir).unwrap();

    logger.flush().unwrap();
    assert!(records(&path)[0].ends_with("pending"));
}

#[test]
fn unrecoverable_target_fails_and_keeps_cache() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("log.txt");
    let mut logger = Logger::builder().target(&path).build().unwrap();
    logger.initialize();

    logger.info("keep me").unwrap();
    fs::remove_file(&path).unwrap();
    fs::create_dir(&path).unwrap();

    let err = logger.flush().unwrap_err();
    assert!(matches!(err, Error::MissingTarget(ref p) if p == &path));

    // notes from a failed flush go to stderr only
    assert_eq!(logger.get_buffered_logs().len(), 1);
    assert!(logger.get_buffered_logs()[0].ends_with("keep me"));
}

#[test]
fn repeated_failures_do_not_pile_up_warnings() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("log.txt");
    let mut logger = Logger::builder().target(&path).build().unwrap();
    logger.initialize();

    logger.info("keep me").unwrap();
    fs::remove_file(&path).unwrap();
    fs::create_dir(&path).unwrap();

    for _ in 0..3 {
        assert!(logger.flush().is_err());
    }
    assert_eq!(logger.get_buffered_logs().len(), 1);

    fs::remove_dir(&path).unwrap();
    logger.flush().unwrap();
    assert_eq!(records(&path).len(), 1);

    let warnings: Vec<&String> = logger
        .get_buffered_logs()
        .iter()
        .filter(|l| l.ends_with("does not exist"))
        .collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(logger.get_buffered_logs().len(), 1);
}

#[test]
fn auto_flush_against_broken_target_buffers_records_only() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("log.txt");
    let mut logger = Logger::builder()
        .target(&path)
        .auto_flush(true)
        .build()
        .unwrap();
    logger.initialize();

    fs::remove_file(&path).unwrap();
    fs::create_dir(&path).unwrap();

    for msg in ["a", "b", "c"] {
        assert!(logger.info(msg).is_err());
    }
    let buffered = logger.get_buffered_logs();
    assert_eq!(buffered.len(), 3);
    assert!(buffered.iter().all(|l| !l.contains("does not exist")));
}

#[test]
fn failure_on_later_target_keeps_cache_for_retry() {
    let tmp = TempDir::new().unwrap();
    let good = tmp.path().join("good.txt");
    let bad = tmp.path().join("bad.txt");
    let mut logger = Logger::builder().target(&good).target(&bad).build().unwrap();
    logger.initialize();

    logger.info("batch").unwrap();
    fs::remove_file(&bad).unwrap();
    fs::create_dir(&bad).unwrap();

    assert!(logger.flush().is_err());
    // no cross-target atomicity: the first target already has the batch
    assert_eq!(records(&good).len(), 1);
    assert!(logger.get_buffered_logs()[0].ends_with("batch"));

    fs::remove_dir(&bad).unwrap();
    logger.flush().unwrap();
    // batch twice on the first target, once on the recreated one
    assert_eq!(records(&good).len(), 2);
    assert_eq!(records(&bad).len(), 1);
    let buffered = logger.get_buffered_logs();
    assert_eq!(buffered.len(), 1);
    assert!(buffered[0].ends_with("does not exist"));
}
