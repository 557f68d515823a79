use std::fs;
use std::sync::{Mutex, MutexGuard, OnceLock};

use assert_cmd::Command;
use tempfile::TempDir;

pub fn lock_test_env() -> MutexGuard<'static, ()> {
    static TEST_ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    TEST_ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|err| err.into_inner())
}

/// Temp HOME with an rc file pinning the anchor date and disabling color
#[allow(dead_code)]
pub fn setup_test_env(extra_rc: &str) -> (TempDir, MutexGuard<'static, ()>) {
    let guard = lock_test_env();
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join(".gymdesk");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("rc"),
        format!("mock.today=2026-03-15\ncolor=never\n{}", extra_rc),
    )
    .unwrap();
    (temp_dir, guard)
}

#[allow(dead_code)]
pub fn gymdesk_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gymdesk").unwrap();
    cmd.env("HOME", temp_dir.path());
    cmd.env_remove("GYMDESK_LOG");
    cmd
}

#[allow(dead_code)]
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success();
    String::from_utf8(output.get_output().stdout.clone()).unwrap()
}
