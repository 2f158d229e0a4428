#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a per-test directory so a real
/// user config is never read or written.
pub fn mk(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("milklog");
    cmd.env("HOME", home).env("APPDATA", home);
    cmd
}

/// Fresh, empty home directory for one test.
pub fn setup_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_milklog_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path.to_string_lossy().to_string()
}

/// Create a unique workbook path inside the system temp dir and remove any
/// existing file
pub fn setup_test_workbook(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_milklog.sqlite", name));
    let wb_path = path.to_string_lossy().to_string();
    fs::remove_file(&wb_path).ok();
    wb_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a config file into `home` with an admin password.
pub fn write_admin_config(home: &str, workbook: &str, password: &str) {
    let dir = PathBuf::from(home).join(".milklog");
    fs::create_dir_all(&dir).expect("create config dir");
    fs::write(
        dir.join("milklog.conf"),
        format!("workbook: {workbook}\nadmin_password: {password}\n"),
    )
    .expect("write config");
}

/// Initialize a workbook and register the given names in order.
pub fn init_with_names(home: &str, workbook: &str, names: &[&str]) {
    mk(home)
        .args(["--workbook", workbook, "--test", "init"])
        .assert()
        .success();

    for (i, name) in names.iter().enumerate() {
        let at = format!("2025-09-0{} 08:1{}:00", 1 + i % 2, i % 10);
        mk(home)
            .args(["--workbook", workbook, "add", name, "--at", &at])
            .assert()
            .success();
    }
}
