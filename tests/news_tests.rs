//! Integration tests for the news commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::path::Path;

mod common;
use common::{init_newsroom, newsroom_in, sign_up};

fn add_news(dir: &Path, name: &str, email: &str, title: &str, time: &str) {
    newsroom_in(dir)
        .args(["news", "add", "--name", name, "--email", email])
        .args(["--title", title, "--summary", "Story about it", "--time", time])
        .assert()
        .success();
}

#[test]
fn test_add_files_under_department() {
    let temp = init_newsroom();
    sign_up(temp.path(), "Ana", "a@x.com", "Sports");

    newsroom_in(temp.path())
        .args(["news", "add", "--name", "Ana", "--email", "a@x.com"])
        .args(["--title", "Goal!", "--summary", "...", "--time", "2025-01-17 18:30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Filed under Sports"));

    newsroom_in(temp.path())
        .args(["news", "list", "--category", "Sports"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Sports News ==="))
        .stdout(predicate::str::contains("Title: Goal!"))
        .stdout(predicate::str::contains("Broadcast Time: 2025-01-17 18:30"));

    newsroom_in(temp.path())
        .args(["news", "list", "--category", "Politics"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No news found"))
        .stdout(predicate::str::contains("Goal!").not());
}

#[test]
fn test_add_requires_known_editor() {
    let temp = init_newsroom();

    newsroom_in(temp.path())
        .args(["news", "add", "--name", "Ana", "--email", "a@x.com"])
        .args(["--title", "Goal!", "--summary", "...", "--time", "2025-01-17 18:30"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Editor not found"));
}

#[test]
fn test_add_with_bad_time_is_rejected() {
    let temp = init_newsroom();
    sign_up(temp.path(), "Ana", "a@x.com", "Sports");

    newsroom_in(temp.path())
        .args(["news", "add", "--name", "Ana", "--email", "a@x.com"])
        .args(["--title", "Goal!", "--summary", "...", "--time", "tonight"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid timestamp: 'tonight'"));

    newsroom_in(temp.path())
        .args(["news", "show", "Goal!"])
        .assert()
        .code(4);
}

#[test]
fn test_show_includes_author_details() {
    let temp = init_newsroom();
    sign_up(temp.path(), "Ana", "a@x.com", "Sports");
    add_news(temp.path(), "Ana", "a@x.com", "Goal!", "2025-01-17 18:30");

    newsroom_in(temp.path())
        .args(["news", "show", "Goal!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Editor: Ana <a@x.com>"))
        .stdout(predicate::str::contains("Phone: 555\nDepartment: Sports"));
}

#[test]
fn test_table_lists_all_news() {
    let temp = init_newsroom();
    sign_up(temp.path(), "Ana", "a@x.com", "Sports");
    sign_up(temp.path(), "Bo", "b@x.com", "Politics");
    add_news(temp.path(), "Ana", "a@x.com", "Goal!", "2025-01-17 18:30");
    add_news(temp.path(), "Bo", "b@x.com", "Vote", "2025-01-17 20:00");

    newsroom_in(temp.path())
        .args(["news", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current News List:"))
        .stdout(predicate::str::contains("Goal!"))
        .stdout(predicate::str::contains("Vote"))
        .stdout(predicate::str::contains("Politics"));
}

#[test]
fn test_edit_by_owner() {
    let temp = init_newsroom();
    sign_up(temp.path(), "Ana", "a@x.com", "Sports");
    add_news(temp.path(), "Ana", "a@x.com", "Goal!", "2025-01-17 18:30");

    newsroom_in(temp.path())
        .args(["news", "edit", "Goal!", "--name", "Ana", "--email", "a@x.com"])
        .args(["--new-title", "Late Goal!", "--summary", "Winner in stoppage time"])
        .args(["--time", "2025-01-17 19:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("News 'Late Goal!' updated."));

    newsroom_in(temp.path())
        .args(["news", "show", "Late Goal!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary: Winner in stoppage time"))
        .stdout(predicate::str::contains("Broadcast Time: 2025-01-17 19:00"))
        .stdout(predicate::str::contains("Category: Sports"));
}

#[test]
fn test_edit_by_other_editor_is_not_found() {
    let temp = init_newsroom();
    sign_up(temp.path(), "Ana", "a@x.com", "Sports");
    sign_up(temp.path(), "Bo", "b@x.com", "Sports");
    add_news(temp.path(), "Ana", "a@x.com", "Goal!", "2025-01-17 18:30");

    newsroom_in(temp.path())
        .args(["news", "edit", "Goal!", "--name", "Bo", "--email", "b@x.com"])
        .args(["--summary", "Hijacked"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("you do not have permission"));

    newsroom_in(temp.path())
        .args(["news", "show", "Goal!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hijacked").not());
}

#[test]
fn test_edit_without_changes() {
    let temp = init_newsroom();
    sign_up(temp.path(), "Ana", "a@x.com", "Sports");
    add_news(temp.path(), "Ana", "a@x.com", "Goal!", "2025-01-17 18:30");

    newsroom_in(temp.path())
        .args(["news", "edit", "Goal!", "--name", "Ana", "--email", "a@x.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to change"));
}

#[test]
fn test_delete_twice() {
    let temp = init_newsroom();
    sign_up(temp.path(), "Ana", "a@x.com", "Sports");
    add_news(temp.path(), "Ana", "a@x.com", "Goal!", "2025-01-17 18:30");

    newsroom_in(temp.path())
        .args(["news", "delete", "Goal!", "--name", "Ana", "--email", "a@x.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("News deleted."));

    newsroom_in(temp.path())
        .args(["news", "delete", "Goal!", "--name", "Ana", "--email", "a@x.com"])
        .assert()
        .code(4);
}

#[test]
fn test_category_counts_follow_config() {
    let temp = init_newsroom();
    sign_up(temp.path(), "Ana", "a@x.com", "Sports");
    add_news(temp.path(), "Ana", "a@x.com", "Goal!", "2025-01-17 18:30");
    add_news(temp.path(), "Ana", "a@x.com", "Derby", "2025-01-18 18:30");

    newsroom_in(temp.path())
        .args(["news", "categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{:<15} 2", "Sports")))
        .stdout(predicate::str::contains(format!("{:<15} 0", "Politics")));

    newsroom_in(temp.path())
        .args(["config", "categories", "Weather"])
        .assert()
        .success();

    newsroom_in(temp.path())
        .args(["news", "categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weather"))
        .stdout(predicate::str::contains("Sports").not());
}
