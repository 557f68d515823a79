use predicates::prelude::*;
mod test_env;
use test_env::{gymdesk_cmd, setup_test_env, stdout_of};

#[test]
fn test_hash_prints_seed_per_key() {
    let (temp_dir, _guard) = setup_test_env("");

    gymdesk_cmd(&temp_dir)
        .args(["hash", "lead-0", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lead-0\t1106756097"))
        .stdout(predicate::str::contains("hello\t99162322"));
}

#[test]
fn test_hash_is_stable_across_runs() {
    let (temp_dir, _guard) = setup_test_env("");

    let first = stdout_of(gymdesk_cmd(&temp_dir).args(["hash", "member-3"]));
    let second = stdout_of(gymdesk_cmd(&temp_dir).args(["hash", "member-3"]));
    assert_eq!(first, second);
    assert_eq!(first.trim(), "member-3\t649440832");
}

#[test]
fn test_hash_requires_a_key() {
    let (temp_dir, _guard) = setup_test_env("");

    gymdesk_cmd(&temp_dir).args(["hash"]).assert().failure();
}

#[test]
fn test_classify_with_explicit_thresholds() {
    let (temp_dir, _guard) = setup_test_env("");

    for (days, expected) in [("5", "fresh"), ("10", "aging"), ("20", "stale"), ("7", "fresh"), ("14", "aging")] {
        gymdesk_cmd(&temp_dir)
            .args(["classify", days, "--fresh", "7", "--aging", "14"])
            .assert()
            .success()
            .stdout(format!("{}\n", expected));
    }
}

#[test]
fn test_classify_with_stage() {
    let (temp_dir, _guard) = setup_test_env("");

    // trial is 7,14 by default
    gymdesk_cmd(&temp_dir)
        .args(["classify", "10", "--stage", "trial"])
        .assert()
        .success()
        .stdout("aging\n");
}

#[test]
fn test_classify_stage_honors_config_override() {
    let (temp_dir, _guard) = setup_test_env("pipeline.trial.thresholds=12,20\n");

    gymdesk_cmd(&temp_dir)
        .args(["classify", "10", "--stage", "trial"])
        .assert()
        .success()
        .stdout("fresh\n");
}

#[test]
fn test_classify_json_includes_classes() {
    let (temp_dir, _guard) = setup_test_env("");

    let out = stdout_of(gymdesk_cmd(&temp_dir).args(["classify", "20", "--fresh", "7", "--aging", "14", "--json"]));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["status"], "stale");
    assert_eq!(value["border_class"], "border-l-red-500");
    assert_eq!(value["text_class"], "text-red-600");
    assert_eq!(value["fresh_max"], 7);
    assert_eq!(value["aging_max"], 14);
}

#[test]
fn test_classify_rejects_inverted_thresholds() {
    let (temp_dir, _guard) = setup_test_env("");

    gymdesk_cmd(&temp_dir)
        .args(["classify", "3", "--fresh", "14", "--aging", "7"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("must not exceed"));
}

#[test]
fn test_classify_rejects_negative_days() {
    let (temp_dir, _guard) = setup_test_env("");

    gymdesk_cmd(&temp_dir)
        .args(["classify", "-3", "--fresh", "7", "--aging", "14"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("non-negative"));
}

#[test]
fn test_classify_unknown_stage_suggests() {
    let (temp_dir, _guard) = setup_test_env("");

    gymdesk_cmd(&temp_dir)
        .args(["classify", "3", "--stage", "trail"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Did you mean: trial?"));
}

#[test]
fn test_classify_needs_thresholds() {
    let (temp_dir, _guard) = setup_test_env("");

    gymdesk_cmd(&temp_dir)
        .args(["classify", "3"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--stage"));
}
