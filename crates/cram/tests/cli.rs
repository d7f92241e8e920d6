//! CLI integration tests for cram commands.
//!
//! These tests focus on exit codes and basic behavioral verification,
//! not specific output formatting which may change.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

/// Sample study text with a clearly repeated phrase.
const SAMPLE_TEXT: &str = "Natural language processing enables computers to understand \
    text. Natural language processing is powerful.";

/// Helper to get a cram command.
fn cram() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("cram").unwrap()
}

/// Writes the sample text to `notes.txt` in a temp dir, returning the path.
fn sample_file(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("notes.txt");
    fs::write(&path, SAMPLE_TEXT).unwrap();
    path
}

mod extract {
    use super::*;

    #[test]
    fn extracts_keywords_from_txt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = sample_file(&dir);

        cram()
            .arg("extract")
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("language"));
    }

    #[test]
    fn reads_text_from_stdin() {
        cram()
            .arg("extract")
            .arg("-")
            .write_stdin(SAMPLE_TEXT)
            .assert()
            .success()
            .stdout(predicate::str::contains("language"));
    }

    #[test]
    fn json_output_parses_and_caps_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = sample_file(&dir);

        let output = cram()
            .arg("extract")
            .arg(&path)
            .arg("--json")
            .arg("-n")
            .arg("3")
            .output()
            .unwrap();
        assert!(output.status.success());

        let records: serde_json::Value =
            serde_json::from_slice(&output.stdout).unwrap();
        let records = records.as_array().unwrap();
        assert!(records.len() <= 3);
        for record in records {
            assert!(record["term"].is_string());
            assert!(record["score"].is_number());
            assert!(record["scores"]["yake"].is_number());
        }
    }

    #[test]
    fn extracts_from_json_documents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cards.json");
        fs::write(
            &path,
            r#"{"front": "What is photosynthesis?", "back": "Photosynthesis converts light."}"#,
        )
        .unwrap();

        cram()
            .arg("extract")
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("photosynthesis"));
    }

    #[test]
    fn fails_on_missing_file() {
        cram()
            .arg("extract")
            .arg("/nonexistent/notes.txt")
            .assert()
            .failure()
            .stderr(predicate::str::contains("error"));
    }

    #[test]
    fn fails_on_unknown_language() {
        let dir = tempfile::tempdir().unwrap();
        let path = sample_file(&dir);

        cram()
            .arg("extract")
            .arg(&path)
            .arg("--language")
            .arg("klingon")
            .assert()
            .failure()
            .stderr(predicate::str::contains("unsupported language"));
    }

    #[test]
    fn domain_vocab_flag_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = sample_file(&dir);
        let vocab = dir.path().join("vocab.txt");
        fs::write(&vocab, "language\nprocessing\n").unwrap();

        cram()
            .arg("extract")
            .arg(&path)
            .arg("--domain-vocab")
            .arg(&vocab)
            .assert()
            .success();
    }

    #[test]
    fn missing_embeddings_degrade_instead_of_failing() {
        let dir = tempfile::tempdir().unwrap();
        let path = sample_file(&dir);

        cram()
            .arg("extract")
            .arg(&path)
            .arg("--embeddings")
            .arg("/nonexistent/vectors.txt")
            .assert()
            .success();
    }
}

mod context {
    use super::*;

    #[test]
    fn annotates_keywords_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = sample_file(&dir);

        cram()
            .arg("context")
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("Context"));
    }

    #[test]
    fn json_output_includes_offsets() {
        let dir = tempfile::tempdir().unwrap();
        let path = sample_file(&dir);

        let output = cram()
            .arg("context")
            .arg(&path)
            .arg("--json")
            .output()
            .unwrap();
        assert!(output.status.success());

        let records: serde_json::Value =
            serde_json::from_slice(&output.stdout).unwrap();
        let records = records.as_array().unwrap();
        assert!(!records.is_empty());
        assert!(
            records
                .iter()
                .any(|r| r["context"]["offset"].is_number() && r["context"]["snippet"].is_string())
        );
    }
}
