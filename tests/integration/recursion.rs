// tests/integration/recursion.rs
use crate::common::{Tree, dirlist, list_ok};

#[test]
fn recursive_listing_prints_header_then_children() {
    let tree = Tree::new();
    tree.file("sub/x.txt", "x");

    let stdout = list_ok(&["-R"], tree.path());
    let lines: Vec<&str> = stdout.lines().collect();
    let header = format!("{}:", tree.path().join("sub").display());

    assert_eq!(lines.len(), 4, "{stdout}");
    assert!(lines[0].ends_with(" sub"));
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], header);
    assert!(lines[3].ends_with(" x.txt"));
}

#[test]
fn nested_directories_are_visited_depth_first() {
    let tree = Tree::new();
    tree.file("a/inner/deep.txt", "");
    tree.file("z.txt", "");

    let stdout = list_ok(&["-R", "-r"], tree.path());
    let headers: Vec<&str> = stdout.lines().filter(|l| l.ends_with(':')).collect();
    let a = format!("{}:", tree.path().join("a").display());
    let inner = format!("{}:", tree.path().join("a").join("inner").display());
    assert_eq!(headers, [a.as_str(), inner.as_str()]);
    assert!(stdout.lines().next().unwrap().ends_with(" z.txt"));
    assert!(stdout.trim_end().ends_with(" deep.txt"));
}

#[test]
fn without_recursive_flag_subdirectories_are_not_entered() {
    let tree = Tree::new();
    tree.file("sub/x.txt", "x");
    let stdout = list_ok(&[], tree.path());
    assert_eq!(stdout.lines().count(), 1);
    assert!(!stdout.contains("x.txt"));
}

#[test]
fn hidden_directories_are_entered_only_with_all_flag() {
    let tree = Tree::new();
    tree.file(".cache/blob", "");
    tree.file("visible", "");

    assert!(!list_ok(&["-R"], tree.path()).contains("blob"));
    assert!(list_ok(&["-R", "-a"], tree.path()).contains(" blob"));
}

#[cfg(unix)]
#[test]
fn symlink_cycle_is_reported_and_listing_finishes() {
    let tree = Tree::new();
    tree.dir("sub");
    std::os::unix::fs::symlink(tree.path(), tree.path().join("sub").join("loop")).unwrap();

    let output = dirlist().arg("-R").arg(tree.path()).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert!(output.status.success());
    assert!(stdout.lines().any(|l| l.ends_with(" loop")));
    assert!(!stdout.contains("loop:"));
    assert!(stderr.contains("directory cycle detected"));
}
