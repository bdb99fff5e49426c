//! Tests for the exit code returned by each kind of run.

use super::parse;
use crate::cli::commands::run_open;
use linktab_core::ExtractConfig;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn json_file(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn no_path_prints_usage_and_exits_zero() {
    assert_eq!(parse(&["linktab"]).run().unwrap(), 0);
}

#[test]
fn missing_file_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");
    assert_eq!(run_open(&path, &ExtractConfig::default(), true).unwrap(), 1);
}

#[test]
fn empty_path_exits_one() {
    assert_eq!(run_open(Path::new(""), &ExtractConfig::default(), true).unwrap(), 1);
}

#[test]
fn invalid_json_exits_one() {
    let f = json_file("{not valid json");
    assert_eq!(run_open(f.path(), &ExtractConfig::default(), true).unwrap(), 1);
}

#[test]
fn missing_list_key_exits_one() {
    let f = json_file(r#"{"Other": [{"Media Download Url": "https://a"}]}"#);
    assert_eq!(run_open(f.path(), &ExtractConfig::default(), true).unwrap(), 1);
}

#[test]
fn empty_list_exits_zero() {
    let f = json_file(r#"{"Saved Media": []}"#);
    assert_eq!(run_open(f.path(), &ExtractConfig::default(), true).unwrap(), 0);
}

#[test]
fn dry_run_with_links_exits_zero() {
    let f = json_file(
        r#"{"Saved Media": [{"Media Download Url": "https://a"}, {"Media Download Url": "ftp://b"}]}"#,
    );
    assert_eq!(run_open(f.path(), &ExtractConfig::default(), true).unwrap(), 0);
}
