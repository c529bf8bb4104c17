//! Integration tests for the scoreboard command line
//!
//! Exercises the script runner through the library and the `scoreboard`
//! binary end to end.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;
use worldcup_scoreboard::cli::{run_script, CliError, RunOptions};
use worldcup_scoreboard::config::OutputFormat;
use worldcup_scoreboard::observability::{JournaledScoreboard, Logger};
use worldcup_scoreboard::scoreboard::{InMemoryScoreboard, Match, Scoreboard};

const WORLD_CUP: &str = "\
# group stage
start Mexico Canada
start Spain Brazil
start Germany France
start Uruguay Italy
start Argentina Australia
update Mexico Canada 0 5
update Spain Brazil 10 2
update Germany France 2 2
update Uruguay Italy 6 6
update Argentina Australia 3 1
summary
";

fn scoreboard_bin(config: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_scoreboard"));
    cmd.arg("--config")
        .arg(config)
        .env_remove("SCOREBOARD_CONFIG")
        .env_remove("SCOREBOARD_LOG_LEVEL")
        .env_remove("SCOREBOARD_LOG_FILE")
        .env_remove("RUST_LOG");
    cmd
}

fn write_config(dir: &Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("scoreboard.toml");
    fs::write(&path, body).unwrap();
    path
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_json_summary_in_rank_order() {
    let scoreboard = InMemoryScoreboard::default();
    let opts = RunOptions {
        render: worldcup_scoreboard::cli::RenderOptions {
            format: OutputFormat::Json,
            ..Default::default()
        },
        ..RunOptions::default()
    };
    let mut out = Vec::new();
    let report = run_script(&scoreboard, WORLD_CUP, &mut out, &opts).unwrap();
    assert_eq!(report.applied, 10);

    let rows: Vec<Match> = serde_json::from_slice(&out).unwrap();
    let order: Vec<&str> = rows.iter().map(|m| m.home_team.as_str()).collect();
    assert_eq!(order, vec!["Uruguay", "Spain", "Mexico", "Argentina", "Germany"]);
}

#[test]
fn test_journaled_script_records_rejections() {
    let temp_dir = TempDir::new().unwrap();
    let journal = temp_dir.path().join("journal.md");
    let logger = Logger::new(Some(journal.as_path()), Some("DEBUG")).unwrap();
    let scoreboard = JournaledScoreboard::new(InMemoryScoreboard::default(), logger);

    let opts = RunOptions {
        keep_going: true,
        ..RunOptions::default()
    };
    let mut out = Vec::new();
    let script = "start Mexico Canada\nfinish Croatia Sweden\nsummary\n";
    let report = run_script(&scoreboard, script, &mut out, &opts).unwrap();
    assert_eq!(report.applied, 1);
    assert_eq!(report.failures.len(), 1);

    let content = fs::read_to_string(&journal).unwrap();
    assert!(content.contains("Match Started"));
    assert!(content.contains("**Reason:** This match(Croatia-Sweden) has not been started."));
    assert!(content.contains("1. Mexico 0 - Canada 0"));
}

#[test]
fn test_script_error_keeps_scoreboard_cause() {
    let scoreboard = InMemoryScoreboard::default();
    let mut out = Vec::new();
    let err = run_script(
        &scoreboard,
        "start Mexico Canada\nupdate Mexico Canada 0 0\n",
        &mut out,
        &RunOptions::default(),
    )
    .unwrap_err();

    assert!(matches!(err, CliError::Script { line: 2, .. }));
    assert_eq!(err.to_string(), "line 2: The score input is already recorded.");
    assert!(err.scoreboard_error().unwrap().is_consistency());
    assert_eq!(scoreboard.summary()[0].home_score, 0);
}

#[test]
fn test_binary_runs_script() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(
        temp_dir.path(),
        "[scoreboard]\nname = \"Qatar 2022\"\n\n[display]\ncolor = false\n",
    );
    let script = temp_dir.path().join("world_cup.txt");
    fs::write(&script, WORLD_CUP).unwrap();

    let output = scoreboard_bin(&config).arg("run").arg(&script).output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let text = stdout(&output);
    assert!(text.starts_with("Qatar 2022\n"));
    let uruguay = text.find("Uruguay").unwrap();
    let germany = text.find("Germany").unwrap();
    assert!(uruguay < germany);
    assert!(text.contains("10 - 2"));
}

#[test]
fn test_binary_reports_failed_lines() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path(), "[display]\ncolor = false\n");
    let script = temp_dir.path().join("bad.txt");
    fs::write(&script, "start Mexico Canada\nstart Mexico Canada\nsummary\n").unwrap();

    let output = scoreboard_bin(&config)
        .args(["run", "--keep-going", "--format", "json"])
        .arg(&script)
        .output()
        .unwrap();
    assert!(!output.status.success());

    let text = stdout(&output);
    assert!(text.contains("line 2: This match(Mexico-Canada) has already started."));
    assert!(text.contains("\"home_team\": \"Mexico\""));
    assert!(String::from_utf8_lossy(&output.stderr).contains("1 of 2 commands failed"));
}

#[test]
fn test_binary_stops_at_first_failure() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path(), "");
    let script = temp_dir.path().join("stop.txt");
    fs::write(&script, "finish Croatia Sweden\nsummary\n").unwrap();

    let output = scoreboard_bin(&config).arg("run").arg(&script).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("line 1: This match(Croatia-Sweden) has not been started."));
}

#[test]
fn test_binary_rejects_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path(), "[logging]\nlog_level = \"LOUD\"\n");

    let output = scoreboard_bin(&config).arg("config-check").output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Configuration error"));
}

#[test]
fn test_binary_config_check() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path(), "[scoreboard]\nname = \"Qatar 2022\"\n");

    let output = scoreboard_bin(&config).arg("config-check").output().unwrap();
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Config file is valid"));
    assert!(text.contains("name = \"Qatar 2022\""));
}

#[test]
fn test_binary_repl_keeps_going() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path(), "[display]\ncolor = false\n");

    let mut child = scoreboard_bin(&config)
        .arg("repl")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"start A B\nstart A B\nupdate A B 1 0\nsummary\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let text = stdout(&output);
    assert!(text.contains("ok: start A B\n"));
    assert!(text.contains("line 2: This match(A-B) has already started."));
    assert!(text.contains("ok: update A B 1 0\n"));
    assert!(text.contains("1 - 0"));

    // Rejections are reported once, on stdout
    assert!(!String::from_utf8_lossy(&output.stderr).contains("already started"));
}

#[test]
fn test_binary_journal_flag_without_log_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path(), "[display]\ncolor = false\n");
    let script = temp_dir.path().join("final.txt");
    fs::write(&script, "start Argentina France\nupdate Argentina France 3 3\n").unwrap();
    let tmp = temp_dir.path().join("tmp");
    fs::create_dir_all(&tmp).unwrap();

    let output = scoreboard_bin(&config)
        .env("TMPDIR", &tmp)
        .args(["run", "--journal"])
        .arg(&script)
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let journals: Vec<_> = fs::read_dir(tmp.join("scoreboard-logs"))
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(journals.len(), 1);

    let content = fs::read_to_string(&journals[0]).unwrap();
    assert!(content.contains("Session Started"));
    assert!(content.contains("**Score:** 3 - 3"));
    assert!(content.contains("**Reason:** finished"));
}

#[test]
fn test_binary_without_journal_writes_none() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path(), "");
    let script = temp_dir.path().join("final.txt");
    fs::write(&script, "start Argentina France\n").unwrap();
    let tmp = temp_dir.path().join("tmp");
    fs::create_dir_all(&tmp).unwrap();

    let output = scoreboard_bin(&config)
        .env("TMPDIR", &tmp)
        .arg("run")
        .arg(&script)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(!tmp.join("scoreboard-logs").exists());
}
