// tests/integration/cli.rs
use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn dirsize() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dirsize"))
}

fn fixture() -> tempfile::TempDir {
    let dir = tempdir().expect("temp dir");
    fs::write(dir.path().join("a.txt"), vec![b'a'; 100]).unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/b.txt"), vec![b'b'; 50]).unwrap();
    dir
}

fn stdout_lines(output: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(output).lines().map(str::to_owned).collect()
}

#[test]
fn shows_help() {
    dirsize()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--verbose").and(predicate::str::contains("--reverse")));
}

#[test]
fn lists_smallest_first() {
    let dir = fixture();
    let output = dirsize().arg(dir.path()).output().expect("run");
    assert!(output.status.success());

    let lines = stdout_lines(&output.stdout);
    assert_eq!(lines[0].trim_end(), "        Size  Name");
    assert_eq!(lines[1], "-".repeat(14 + 5));
    assert_eq!(lines[2].trim_end(), "         50B  sub");
    assert_eq!(lines[3].trim_end(), "        100B  a.txt");
    assert_eq!(lines.len(), 4);
}

#[test]
fn reverse_lists_largest_first() {
    let dir = fixture();
    let output = dirsize().args(["-r"]).arg(dir.path()).output().expect("run");
    assert!(output.status.success());

    let lines = stdout_lines(&output.stdout);
    assert_eq!(lines[2].trim_end(), "        100B  a.txt");
    assert_eq!(lines[3].trim_end(), "         50B  sub");
}

#[test]
fn verbose_adds_detail_columns() {
    let dir = fixture();
    dirsize()
        .arg("--verbose")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("Verbose output is on\nPath = ")
                .and(predicate::str::contains("Last Modified"))
                .and(predicate::str::contains("Owner:Group")),
        );
}

#[test]
fn verbose_path_line_drops_current_dir_marker() {
    let dir = fixture();
    let cwd = dir.path().canonicalize().expect("canonical temp dir");
    let output = dirsize().current_dir(&cwd).args(["-v", "."]).output().expect("run");
    assert!(output.status.success());

    let lines = stdout_lines(&output.stdout);
    assert_eq!(lines[1], format!("Path = {}", cwd.display()));
}

#[test]
fn kibibyte_renders_as_one_k_in_both_modes() {
    let dir = tempdir().expect("temp dir");
    fs::write(dir.path().join("k.bin"), vec![0u8; 1024]).unwrap();

    for flag in [None, Some("-v")] {
        let mut cmd = dirsize();
        if let Some(flag) = flag {
            cmd.arg(flag);
        }
        cmd.arg(dir.path()).assert().success().stdout(predicate::str::contains("        1.0K  "));
    }
}

#[test]
fn defaults_to_current_directory() {
    let dir = fixture();
    dirsize()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt").and(predicate::str::contains("sub")));
}

#[test]
fn invalid_path_fails_without_listing() {
    let dir = tempdir().expect("temp dir");
    dirsize()
        .arg(dir.path().join("does-not-exist"))
        .assert()
        .failure()
        .stdout("Invalid directory path.\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn file_path_fails() {
    let dir = fixture();
    dirsize().arg(dir.path().join("a.txt")).assert().failure().stdout(predicate::str::is_empty());
}

#[cfg(unix)]
#[test]
fn symlink_entry_shows_target_and_unknown_type() {
    use std::os::unix::fs::symlink;

    let dir = fixture();
    symlink("sub", dir.path().join("alias")).unwrap();

    dirsize()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("alias -> sub").and(predicate::str::contains("Unknown item type:")));
}
