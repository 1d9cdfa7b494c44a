use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

const LEXICON: &str = r#"{
  "senses": [
    {
      "id": "bank.n.01",
      "pos": "noun",
      "definition": "sloping land beside a body of water"
    },
    {
      "id": "bank.n.02",
      "pos": "noun",
      "definition": "a financial institution that accepts deposits"
    },
    {
      "id": "money.n.01",
      "pos": "noun",
      "definition": "deposits held by a financial institution"
    },
    {
      "id": "river.n.01",
      "pos": "noun",
      "definition": "a large natural stream of water"
    }
  ]
}"#;

fn write_lexicon(dir: &Path) -> PathBuf {
    let path = dir.join("lexicon.json");
    fs::write(&path, LEXICON).unwrap();
    path
}

#[allow(deprecated)]
fn wsd() -> Command {
    Command::cargo_bin("wsd").expect("binary")
}

#[test]
fn score_prints_quadratic_overlap() {
    wsd()
        .args([
            "score",
            "The house is full of rabbits and snakes",
            "My house is overriden by rabbits and snakes",
        ])
        .assert()
        .success()
        .stdout("13\n");
}

#[test]
fn overlap_prints_longest_shared_phrase() {
    wsd()
        .args([
            "overlap",
            "The house is full of rabbits and snakes",
            "My house is overriden by rabbits and snakes",
        ])
        .assert()
        .success()
        .stdout("rabbits and snakes\n");
}

#[test]
fn score_json_reports_both_values() {
    let output = wsd()
        .args(["score", "--json", "ghost player", "baseball superstar"])
        .output()
        .expect("command run");
    assert!(output.status.success());

    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(body["score"], 0);
    assert_eq!(body["overlap"], Value::Array(Vec::new()));
}

#[test]
fn disambiguate_prints_selected_sense() {
    let temp = tempdir().unwrap();
    let lexicon = write_lexicon(temp.path());

    wsd()
        .current_dir(temp.path())
        .arg("--quiet")
        .arg("disambiguate")
        .arg("--lexicon")
        .arg(&lexicon)
        .args(["--word", "bank", "--sentence", "money in the bank"])
        .assert()
        .success()
        .stdout(predicates::str::starts_with("bank.n.02\t10\t"));
}

#[test]
fn disambiguate_json_reports_fallback_and_logs_guess() {
    let temp = tempdir().unwrap();
    let lexicon = write_lexicon(temp.path());
    let guess_log = temp.path().join("guesses").join("guessed.txt");

    let output = wsd()
        .current_dir(temp.path())
        .arg("disambiguate")
        .arg("--lexicon")
        .arg(&lexicon)
        .arg("--guess-log")
        .arg(&guess_log)
        .args(["--word", "river", "--sentence", "money in the bank", "--json"])
        .output()
        .expect("command run");
    assert!(output.status.success());

    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(body["outcome"], "fallback");
    assert_eq!(body["sense"]["id"], "river.n.01");
    assert_eq!(
        fs::read_to_string(&guess_log).unwrap(),
        "word: river in sentence: money bank\n"
    );
}

#[test]
fn window_flag_limits_context() {
    let temp = tempdir().unwrap();
    let lexicon = write_lexicon(temp.path());

    let output = wsd()
        .current_dir(temp.path())
        .arg("disambiguate")
        .arg("--lexicon")
        .arg(&lexicon)
        .args(["--word", "bank", "--sentence", "money river bank"])
        .args(["--window", "1", "--json"])
        .output()
        .expect("command run");
    assert!(output.status.success());

    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(body["window"], serde_json::json!(["river", "bank"]));
    assert_eq!(body["sense"]["id"], "bank.n.01");
}

#[test]
fn unknown_word_fails() {
    let temp = tempdir().unwrap();
    let lexicon = write_lexicon(temp.path());

    wsd()
        .current_dir(temp.path())
        .arg("disambiguate")
        .arg("--lexicon")
        .arg(&lexicon)
        .args(["--word", "zzz", "--sentence", "zzz bank"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("No senses found for 'zzz'"));
}

#[test]
fn missing_lexicon_fails_with_context() {
    let temp = tempdir().unwrap();

    wsd()
        .current_dir(temp.path())
        .args(["disambiguate", "--lexicon", "absent.json"])
        .args(["--word", "bank", "--sentence", "the bank"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Failed to load lexicon"));
}

#[test]
fn invalid_pos_is_rejected() {
    let temp = tempdir().unwrap();
    let lexicon = write_lexicon(temp.path());

    wsd()
        .arg("disambiguate")
        .arg("--lexicon")
        .arg(&lexicon)
        .args(["--word", "bank", "--sentence", "the bank", "--pos", "preposition"])
        .assert()
        .failure();
}
