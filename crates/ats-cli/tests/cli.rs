//! End-to-end tests for the `ats` binary.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const RESUME: &str = "Jane Doe
Email: jane@example.com | Phone: 555-0100

Professional Summary
Backend engineer with seven years of experience building APIs.

Work Experience
Senior Engineer, Acme Corp
- Built REST API services in Python and Go on AWS with Docker and Kubernetes
- Led migration from MySQL to PostgreSQL
- Key achievement: cut deployment time with CI/CD pipelines in Jenkins

Education
BSc Computer Science, State University

Skills
Python, Go, JavaScript, React, SQL, Git, Linux, Terraform
";

/// Command with config lookups confined to a temporary home.
fn ats(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ats").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"));
    cmd
}

fn write_resume(dir: &Path, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).unwrap();
    path
}

#[test]
fn test_analyze_json_report() {
    let home = TempDir::new().unwrap();
    let resume = write_resume(home.path(), "jane.txt", RESUME);

    let output = ats(&home)
        .args(["analyze", resume.to_str().unwrap(), "--seed", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["industry"], "technology");
    assert_eq!(json["jobMatches"].as_array().unwrap().len(), 4);
    let found: Vec<&str> = json["sections"]["keywords"]["found"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert!(found.contains(&"Python"));
    assert!(found.contains(&"Kubernetes"));
}

#[test]
fn test_analyze_seed_is_reproducible() {
    let home = TempDir::new().unwrap();
    let resume = write_resume(home.path(), "jane.txt", RESUME);

    let run = || {
        ats(&home)
            .args(["analyze", resume.to_str().unwrap(), "--seed", "42"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_analyze_text_report_with_job_description() {
    let home = TempDir::new().unwrap();
    let resume = write_resume(home.path(), "jane.txt", RESUME);

    ats(&home)
        .args([
            "analyze",
            resume.to_str().unwrap(),
            "-f",
            "text",
            "--job-description",
            "Looking for Rust and Kubernetes experience",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("ATS score:"))
        .stdout(predicate::str::contains("Job description coverage: 50.00%"))
        .stdout(predicate::str::contains("Job matches:"));
}

#[test]
fn test_analyze_csv_to_file() {
    let home = TempDir::new().unwrap();
    let resume = write_resume(home.path(), "jane.txt", RESUME);
    let out = home.path().join("report.csv");

    ats(&home)
        .args(["analyze", resume.to_str().unwrap(), "-f", "csv", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Output written to"));

    let csv = std::fs::read_to_string(&out).unwrap();
    let mut lines = csv.lines();
    assert!(lines.next().unwrap().starts_with("file,overall_score,industry"));
    assert!(lines.next().unwrap().starts_with("jane.txt,"));
}

#[test]
fn test_analyze_job_search_request() {
    let home = TempDir::new().unwrap();
    let resume = write_resume(home.path(), "jane.txt", RESUME);

    let output = ats(&home)
        .args(["analyze", resume.to_str().unwrap(), "--job-search-request", "user-7"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["user_id"], "user-7");
    assert_eq!(json["suggested_roles"][0], "Senior Software Developer");
    assert!(json["keywords"].as_array().unwrap().len() >= 10);
}

#[test]
fn test_analyze_rejects_short_text() {
    let home = TempDir::new().unwrap();
    let resume = write_resume(home.path(), "short.txt", "hi there.");

    ats(&home)
        .args(["analyze", resume.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unable to extract sufficient text"));
}

#[test]
fn test_analyze_missing_file() {
    let home = TempDir::new().unwrap();

    ats(&home)
        .args(["analyze", "does-not-exist.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_batch_summary_continues_on_error() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("in");
    let out = home.path().join("out");
    std::fs::create_dir_all(&input).unwrap();
    write_resume(&input, "a.txt", RESUME);
    write_resume(&input, "b.txt", "too short");

    let pattern = format!("{}/*.txt", input.display());
    ats(&home)
        .args(["batch", &pattern, "--summary", "--continue-on-error", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 successful, 1 failed"));

    assert!(out.join("a.json").exists());
    assert!(!out.join("b.json").exists());

    let summary = std::fs::read_to_string(out.join("summary.csv")).unwrap();
    assert_eq!(summary.lines().count(), 3);
    assert!(summary.contains("success"));
    assert!(summary.contains("error"));
}

#[test]
fn test_batch_stops_on_first_error() {
    let home = TempDir::new().unwrap();
    write_resume(home.path(), "bad.txt", "too short");

    let pattern = format!("{}/*.txt", home.path().display());
    ats(&home)
        .args(["batch", &pattern])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed"));
}

#[test]
fn test_catalog_listings() {
    let home = TempDir::new().unwrap();

    ats(&home)
        .args(["catalog", "industries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("technology"))
        .stdout(predicate::str::contains("(default)"));

    ats(&home)
        .args(["catalog", "keywords", "finance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GAAP"));

    ats(&home)
        .args(["catalog", "keywords", "law"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown industry"));

    ats(&home)
        .args(["catalog", "sections"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Critical:"));
}

#[test]
fn test_config_init_set_get() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("ats.json");
    let path = path.to_str().unwrap();

    ats(&home)
        .args(["-c", path, "config", "init"])
        .assert()
        .success();

    ats(&home)
        .args(["-c", path, "config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    ats(&home)
        .args(["-c", path, "config", "set", "extraction.min_text_length", "20"])
        .assert()
        .success();

    ats(&home)
        .args(["-c", path, "config", "get", "extraction.min_text_length"])
        .assert()
        .success()
        .stdout(predicate::str::diff("20\n"));

    ats(&home)
        .args(["-c", path, "config", "set", "scoring.nope", "1"])
        .assert()
        .failure();
}

#[test]
fn test_config_set_rejects_bad_section_pattern() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("ats.json");
    let path = path.to_str().unwrap();

    ats(&home)
        .args(["-c", path, "config", "set", "sections.technical_skills_pattern", "(broken"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid pattern"));
    assert!(!Path::new(path).exists());
}

#[test]
fn test_config_file_changes_analysis() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("ats.json");
    let resume = write_resume(home.path(), "short.txt", "Rust and Go, shipped.");

    ats(&home)
        .args(["-c", path.to_str().unwrap(), "config", "set", "extraction.min_text_length", "5"])
        .assert()
        .success();

    ats(&home)
        .args(["-c", path.to_str().unwrap(), "analyze", resume.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"overallScore\""));
}
