use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn edge_list(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn lexgraphs() -> Command {
    Command::cargo_bin("lexgraphs").unwrap()
}

const SUN: &str = "0 1\n1 2\n2 0\n3 0\n3 1\n4 1\n4 2\n5 2\n5 0\n";

#[test]
fn lexbfs_prints_ordering() {
    let file = edge_list("0 1\n0 2\n1 2\n1 3\n2 3\n2 4\n3 4\n3 5\n4 5\n");

    lexgraphs()
        .arg("lexbfs")
        .arg(file.path())
        .assert()
        .success()
        .stdout("[0, 1, 2, 3, 4, 5]\n");
}

#[test]
fn lexbfs_reports_original_ids() {
    let file = edge_list("10 40\n10 20\n20 30\n");

    lexgraphs()
        .arg("lexbfs")
        .arg(file.path())
        .assert()
        .success()
        .stdout("[10, 20, 40, 30]\n");
}

#[test]
fn chordal_verdicts() {
    let cycle = edge_list("0 1\n1 2\n2 3\n3 0\n");
    lexgraphs()
        .arg("chordal")
        .arg(cycle.path())
        .assert()
        .success()
        .stdout("false\n");

    let tree = edge_list("0 1\n1 2\n1 3\n");
    lexgraphs()
        .arg("chordal")
        .arg(tree.path())
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn interval_verdicts() {
    let sun = edge_list(SUN);
    lexgraphs()
        .arg("chordal")
        .arg(sun.path())
        .assert()
        .success()
        .stdout("true\n");
    lexgraphs()
        .arg("interval")
        .arg(sun.path())
        .assert()
        .success()
        .stdout("false\n");

    let path = edge_list("0 1\n1 2\n2 3\n3 4\n");
    lexgraphs()
        .arg("interval")
        .arg(path.path())
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn malformed_lines_and_comments() {
    let file = edge_list("# path\n0 1\nfoo\n1 2 3\n1 2\n");

    lexgraphs()
        .args(["lexbfs", "--comment", "#"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("[0, 1, 2]\n");

    lexgraphs()
        .args(["lexbfs", "--comment", "#", "--strict"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Line 3"));
}

#[test]
fn unknown_task_is_a_usage_error() {
    let file = edge_list("0 1\n");

    lexgraphs()
        .arg("bipartite")
        .arg(file.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid value 'bipartite'"));
}

#[test]
fn missing_file_fails() {
    lexgraphs()
        .args(["chordal", "/this/file/does/not/exist.txt"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "failed to read /this/file/does/not/exist.txt",
        ));
}

#[test]
fn empty_graph_fails() {
    let file = edge_list("no edges here\n");

    lexgraphs()
        .arg("interval")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("graph has no nodes"));
}
