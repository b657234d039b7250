// tests/integration/listing.rs
use predicates::prelude::*;

use crate::common::{Tree, dirlist, list_ok, names};

fn sample() -> Tree {
    let tree = Tree::new();
    tree.file("b.txt", "bbb");
    tree.file("a.txt", "a");
    tree.file(".hidden", "");
    tree
}

#[test]
fn hidden_entries_are_excluded_by_default() {
    let tree = sample();
    let mut listed = names(&list_ok(&[], tree.path()));
    listed.sort();
    assert_eq!(listed, ["a.txt", "b.txt"]);
}

#[test]
fn all_flag_includes_hidden_entries_once() {
    let tree = sample();
    let listed = names(&list_ok(&["-a"], tree.path()));
    assert_eq!(listed.iter().filter(|n| *n == ".hidden").count(), 1);
    assert_eq!(listed.len(), 3);
}

#[test]
fn line_carries_size_and_name() {
    let tree = sample();
    let stdout = list_ok(&["-r"], tree.path());
    let first: Vec<&str> = stdout.lines().next().unwrap().split(' ').collect();

    // `%e` pads single-digit days, which yields an empty field.
    let fields: Vec<&str> = first.iter().copied().filter(|f| !f.is_empty()).collect();
    // perms uid owner group size month day time name
    assert_eq!(fields.len(), 9, "{first:?}");
    assert_eq!(fields[0].len(), 9);
    assert_eq!(fields[4], "3");
    assert_eq!(fields[8], "b.txt");
}

#[cfg(unix)]
#[test]
fn permissions_and_owner_id_come_from_stat() {
    use std::os::unix::fs::{MetadataExt, PermissionsExt};

    let tree = Tree::new();
    let script = tree.file("run.sh", "#!/bin/sh\n");
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o754)).unwrap();
    let uid = std::fs::metadata(&script).unwrap().uid();

    let stdout = list_ok(&[], tree.path());
    let line = stdout.lines().next().unwrap();
    assert!(line.starts_with(&format!("rwxr-xr-- {uid} ")), "{line}");
}

#[test]
fn long_flag_does_not_change_output() {
    let tree = sample();
    assert_eq!(list_ok(&["-l", "-r"], tree.path()), list_ok(&["-r"], tree.path()));
}

#[test]
fn unknown_flags_are_ignored() {
    let tree = sample();
    dirlist()
        .args(["-x", "--color=never", "-r"])
        .arg(tree.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("b.txt"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn repeated_flags_list_like_single_flags() {
    let tree = sample();
    let once = list_ok(&["-a"], tree.path());
    assert_eq!(list_ok(&["-a", "-a"], tree.path()), once);
    assert_eq!(list_ok(&["-aa"], tree.path()), once);
    assert_eq!(list_ok(&["-la", "-l"], tree.path()), once);
}

#[test]
fn short_help_flag_is_ignored() {
    let tree = sample();
    assert_eq!(list_ok(&["-h"], tree.path()), list_ok(&[], tree.path()));
}

#[test]
fn empty_directory_prints_nothing() {
    let tree = Tree::new();
    dirlist().arg(tree.path()).assert().success().stdout("");
}

#[test]
fn defaults_to_current_directory() {
    let tree = sample();
    dirlist()
        .current_dir(tree.path())
        .arg("-r")
        .assert()
        .success()
        .stdout(predicate::str::ends_with(" a.txt\n"));
}

#[test]
fn repeated_runs_are_identical() {
    let tree = sample();
    let first = list_ok(&["-a", "-t"], tree.path());
    let second = list_ok(&["-a", "-t"], tree.path());
    assert_eq!(first, second);
}
