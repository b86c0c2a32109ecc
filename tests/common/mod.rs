#![allow(deprecated, dead_code)]

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

pub fn newsroom_cmd() -> Command {
    let mut cmd = Command::cargo_bin("newsroom").unwrap();
    cmd.env_remove("NEWSROOM_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Command running inside `dir`
pub fn newsroom_in(dir: &Path) -> Command {
    let mut cmd = newsroom_cmd();
    cmd.current_dir(dir);
    cmd
}

/// Fresh newsroom in a temp directory
pub fn init_newsroom() -> TempDir {
    let temp = TempDir::new().unwrap();
    newsroom_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

pub fn sign_up(dir: &Path, name: &str, email: &str, department: &str) {
    newsroom_in(dir)
        .args(["signup", "--name", name, "--phone", "555", "--email", email])
        .args(["--department", department])
        .assert()
        .success();
}
