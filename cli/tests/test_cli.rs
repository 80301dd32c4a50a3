use std::io::Cursor;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::predicate;

use clump::serialization::ClumpReport;

#[test]
fn file_doesnt_exist() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("clump")?;
    cmd.arg("test/file/doesnt/exist");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No such file or directory"));

    Ok(())
}

#[test]
fn clump_summary() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("clump")?;
    cmd.args(&["-k", "3"])
        .args(&["-w", "15"])
        .args(&["-t", "3"])
        .arg("tests/data/small.fa");
    cmd.assert().success().stdout(predicate::str::contains(
        "(15, 3)-clumps of 3-mers found in tests/data/small.fa: 2",
    ));

    Ok(())
}

#[test]
fn clump_summary_default_params() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("clump")?;
    cmd.arg("tests/data/small.fa");
    cmd.assert().success().stdout(predicate::str::contains(
        "(500, 3)-clumps of 9-mers found in tests/data/small.fa: 0",
    ));

    Ok(())
}

#[test]
fn clump_summary_multiple_files() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("clump")?;
    cmd.args(&["-k", "3"])
        .args(&["-w", "25"])
        .arg("tests/data/small.fa")
        .arg("tests/data/small.fa");
    let expected = "(25, 3)-clumps of 3-mers found in tests/data/small.fa: 4";
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(expected).count(2));

    Ok(())
}

#[test]
fn clump_json_report() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("clump")?;
    cmd.args(&["-k", "3"])
        .args(&["-w", "15"])
        .args(&["-t", "3"])
        .arg("-O")
        .arg("tests/data/small.fa");
    cmd.assert().success();

    let output = Cursor::new(cmd.output().unwrap().stdout);
    let reports: Vec<ClumpReport> = serde_json::from_reader(output)?;
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].name, "tests/data/small.fa");
    assert_eq!(reports[0].kmer_length, 3);
    assert_eq!(reports[0].window_length, 15);
    assert_eq!(reports[0].threshold, 3);
    assert_eq!(reports[0].seq_length, 40);
    assert_eq!(reports[0].num_kmers, 38);
    assert_eq!(reports[0].clumps, vec!["ACA".to_string(), "CAT".to_string()]);

    Ok(())
}

#[test]
fn zero_kmer_length_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("clump")?;
    cmd.args(&["-k", "0"]).arg("tests/data/small.fa");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("kmer-length must be at least 1"));

    Ok(())
}

#[test]
fn window_shorter_than_kmer_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("clump")?;
    cmd.args(&["-k", "9"])
        .args(&["-w", "5"])
        .arg("tests/data/small.fa");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("window-length"));

    Ok(())
}

#[test]
fn non_integer_threshold_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("clump")?;
    cmd.args(&["-t", "lots"]).arg("tests/data/small.fa");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("threshold must be a positive integer"));

    Ok(())
}
