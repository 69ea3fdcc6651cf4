mod common;

use regex::Regex;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    dir: TempDir,
    input_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input_path = dir.path().join("cipher.txt");
        fs::write(&input_path, common::ciphertext()).unwrap();
        Self { dir, input_path }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cipherforge"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

const QUICK: [&str; 6] = ["-r", "2", "--iter", "2000", "-S", "11"];

#[test]
fn crack_writes_result_file() {
    let ctx = TestContext::new();
    let out_path = ctx.path("result.txt");

    let mut args = vec![
        "crack",
        "-i",
        ctx.input_path.to_str().unwrap(),
        "-o",
        out_path.to_str().unwrap(),
    ];
    args.extend_from_slice(&QUICK);
    let output = run(&args);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let written = fs::read_to_string(&out_path).unwrap();
    let re = Regex::new(r"^-?\d+\.\d{4}\n(?:[a-z]->[a-z], ){25}[a-z]->[a-z]\n").unwrap();
    assert!(re.is_match(&written), "unexpected file layout:\n{}", written);

    // plaintext keeps the ciphertext's shape
    let plaintext: String = written.splitn(3, '\n').nth(2).unwrap().to_string();
    assert_eq!(plaintext.len(), common::ciphertext().len());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let score_re = Regex::new(r"BEST SCORE: (-?\d+\.\d{4})").unwrap();
    let caps = score_re.captures(&stdout).expect("score line missing");
    assert!(written.starts_with(&caps[1]));
}

#[test]
fn crack_json_output_parses() {
    let ctx = TestContext::new();
    let mut args = vec!["crack", "-i", ctx.input_path.to_str().unwrap(), "--json"];
    args.extend_from_slice(&QUICK);
    let output = run(&args);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json["score"].is_f64());
    assert_eq!(json["key"].as_str().unwrap().len(), 26);
    assert_eq!(json["restarts"].as_array().unwrap().len(), 2);
    assert!(json["mapping"].as_str().unwrap().starts_with("a->"));
}

#[test]
fn config_file_values_yield_to_flags() {
    let ctx = TestContext::new();
    let cfg_path = ctx.path("cfg.json");
    fs::write(
        &cfg_path,
        r#"{ "search": { "restarts": 5, "max_iterations": 1000, "seed": 3 } }"#,
    )
    .unwrap();

    let output = run(&[
        "crack",
        "-i",
        ctx.input_path.to_str().unwrap(),
        "--config",
        cfg_path.to_str().unwrap(),
        "-r",
        "1",
        "--json",
    ]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["restarts"].as_array().unwrap().len(), 1);
}

#[test]
fn score_reports_breakdown_for_true_key() {
    let ctx = TestContext::new();
    let output = run(&[
        "score",
        "-i",
        ctx.input_path.to_str().unwrap(),
        "-k",
        common::SECRET_ALPHABET,
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("quadgram"));
    assert!(stdout.contains("It was the best of times"));
    let re = Regex::new(r"Score: (-?\d+\.\d{4})").unwrap();
    let score: f64 = re.captures(&stdout).unwrap()[1].parse().unwrap();
    assert!(score < 0.0);
}

#[test]
fn short_input_exits_with_failure() {
    let ctx = TestContext::new();
    let short = ctx.path("short.txt");
    fs::write(&short, "Too short to crack").unwrap();
    let output = run(&["crack", "-i", short.to_str().unwrap(), "-r", "3"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No candidates"));
}

#[test]
fn bad_key_exits_with_failure() {
    let ctx = TestContext::new();
    let output = run(&["score", "-i", ctx.input_path.to_str().unwrap(), "-k", "abc"]);
    assert!(!output.status.success());
}

#[test]
fn demo_mode_runs_without_input() {
    let output = run(&["crack", "-r", "1", "--iter", "1000", "-S", "1"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("BEST KEY: a->"));
}

#[test]
fn score_rejects_search_flags() {
    let ctx = TestContext::new();
    let input = ctx.input_path.to_str().unwrap();
    for flag in [["--restarts", "4"], ["--seed", "1"], ["--iter", "100"]] {
        let output = run(&[
            "score",
            "-i",
            input,
            "-k",
            common::SECRET_ALPHABET,
            flag[0],
            flag[1],
        ]);
        assert!(!output.status.success(), "{} was accepted", flag[0]);
    }
}

#[test]
fn score_honours_model_flags() {
    let ctx = TestContext::new();
    let input = ctx.input_path.to_str().unwrap();
    let score_of = |extra: &[&str]| -> f64 {
        let mut args = vec!["score", "-i", input, "-k", common::SECRET_ALPHABET, "--json"];
        args.extend_from_slice(extra);
        let output = run(&args);
        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        json["score"]["composite"].as_f64().unwrap()
    };

    let default = score_of(&[]);
    let bigram_only = score_of(&[
        "--weight-bigram",
        "1.0",
        "--weight-trigram",
        "0",
        "--weight-quadgram",
        "0",
    ]);
    assert!((default - bigram_only).abs() > 1e-6);
}
