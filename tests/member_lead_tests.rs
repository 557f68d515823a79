use predicates::prelude::*;
use std::fs;
mod test_env;
use test_env::{gymdesk_cmd, setup_test_env, stdout_of};

#[test]
fn test_member_list_shows_configured_count() {
    let (temp_dir, _guard) = setup_test_env("mock.members=12\n");

    gymdesk_cmd(&temp_dir)
        .args(["members", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status"))
        .stdout(predicate::str::contains("member-11"))
        .stdout(predicate::str::contains("12 member(s)"));
}

#[test]
fn test_member_list_is_deterministic() {
    let (temp_dir, _guard) = setup_test_env("");

    let first = stdout_of(gymdesk_cmd(&temp_dir).args(["members", "list", "--json"]));
    let second = stdout_of(gymdesk_cmd(&temp_dir).args(["members", "list", "--json"]));
    assert_eq!(first, second);
}

#[test]
fn test_member_list_status_filter() {
    let (temp_dir, _guard) = setup_test_env("");

    let out = stdout_of(gymdesk_cmd(&temp_dir).args(["members", "list", "--status", "active", "--json"]));
    let members: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
    assert!(!members.is_empty());
    assert!(members.iter().all(|m| m["status"] == "active"));
}

#[test]
fn test_member_list_sort_descending_fee() {
    let (temp_dir, _guard) = setup_test_env("");

    let out = stdout_of(gymdesk_cmd(&temp_dir).args(["members", "list", "--sort", "-fee", "--json"]));
    let members: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
    let fees: Vec<u64> = members.iter().map(|m| m["monthly_fee_cents"].as_u64().unwrap()).collect();
    assert!(fees.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_member_list_bad_sort_column() {
    let (temp_dir, _guard) = setup_test_env("");

    gymdesk_cmd(&temp_dir)
        .args(["members", "list", "--sort", "height"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot sort by 'height'"));
}

#[test]
fn test_member_list_bad_status() {
    let (temp_dir, _guard) = setup_test_env("");

    gymdesk_cmd(&temp_dir)
        .args(["members", "list", "--status", "retired"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid status"));
}

#[test]
fn test_member_list_unknown_brand_suggests() {
    let (temp_dir, _guard) = setup_test_env("");

    gymdesk_cmd(&temp_dir)
        .args(["members", "list", "--brand", "pulze"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Did you mean: pulse?"));
}

#[test]
fn test_member_show_profile_is_stable() {
    let (temp_dir, _guard) = setup_test_env("");

    let first = stdout_of(gymdesk_cmd(&temp_dir).args(["members", "show", "member-3"]));
    let second = stdout_of(gymdesk_cmd(&temp_dir).args(["members", "show", "member-3"]));
    assert_eq!(first, second);
    assert!(first.contains("(member-3)"));
    assert!(first.contains("Coach:"));
    assert!(first.contains("Next appt:"));
    assert!(first.contains("Visits ("));
}

#[test]
fn test_member_show_json() {
    let (temp_dir, _guard) = setup_test_env("");

    let out = stdout_of(gymdesk_cmd(&temp_dir).args(["members", "show", "member-3", "--json"]));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["member"]["id"], "member-3");
    assert_eq!(value["profile"]["seed"], 649440832u64);
    assert!(value["profile"]["visits"].as_array().unwrap().len() >= 1);
}

#[test]
fn test_member_show_not_found() {
    let (temp_dir, _guard) = setup_test_env("");

    gymdesk_cmd(&temp_dir)
        .args(["members", "show", "member-9999"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_member_show_rejects_blank_id() {
    let (temp_dir, _guard) = setup_test_env("");

    gymdesk_cmd(&temp_dir)
        .args(["members", "show", "  "])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ID cannot be empty"));
}

#[test]
fn test_show_file_backed_ids_with_punctuation() {
    let (temp_dir, _guard) = setup_test_env("data.location=./data\n");
    let data_dir = temp_dir.path().join(".gymdesk").join("data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(
        data_dir.join("members.json"),
        r#"[{"id":"IW 2024/017","name":"Ana Lopez","brand":"ironworks","plan":"Plus",
             "status":"active","joined":"2024-05-01","monthly_fee_cents":4999}]"#,
    )
    .unwrap();
    fs::write(
        data_dir.join("leads.json"),
        r#"[{"id":"walk in #4","name":"Sam Roe","brand":"pulse","source":"walk-in",
             "stage":"trial","days_in_stage":3,"value_cents":100}]"#,
    )
    .unwrap();

    gymdesk_cmd(&temp_dir)
        .args(["members", "show", "IW 2024/017"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ana Lopez"));

    let out = stdout_of(gymdesk_cmd(&temp_dir).args(["leads", "show", "walk in #4", "--json"]));
    let lead: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(lead["id"], "walk in #4");
    assert_eq!(lead["aging"], "fresh");
}

#[test]
fn test_lead_list_aging_filter() {
    let (temp_dir, _guard) = setup_test_env("");

    let out = stdout_of(gymdesk_cmd(&temp_dir).args(["leads", "list", "--aging", "stale", "--json"]));
    let leads: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
    assert!(leads.iter().all(|l| l["aging"] == "stale"));
}

#[test]
fn test_lead_list_from_data_location() {
    let (temp_dir, _guard) = setup_test_env("data.location=./data\n");
    let data_dir = temp_dir.path().join(".gymdesk").join("data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(
        data_dir.join("leads.json"),
        r#"[
            {"id":"lead-a","name":"Pat Doe","brand":"pulse","source":"event","stage":"trial","days_in_stage":3,"value_cents":100},
            {"id":"lead-b","name":"Sam Roe","brand":"pulse","source":"event","stage":"trial","days_in_stage":30,"value_cents":100}
        ]"#,
    )
    .unwrap();

    gymdesk_cmd(&temp_dir)
        .args(["leads", "list", "--sort", "-days"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sam Roe"))
        .stdout(predicate::str::contains("stale"))
        .stdout(predicate::str::contains("2 lead(s)"));

    let out = stdout_of(gymdesk_cmd(&temp_dir).args(["leads", "list", "--aging", "fresh", "--json"]));
    let leads: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0]["id"], "lead-a");
    assert_eq!(leads[0]["stage_label"], "Trial Active");
}

#[test]
fn test_lead_stage_ids_ignore_case() {
    let (temp_dir, _guard) = setup_test_env("data.location=./data\n");
    let data_dir = temp_dir.path().join(".gymdesk").join("data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(
        data_dir.join("leads.json"),
        r#"[{"id":"lead-a","name":"Pat Doe","brand":"pulse","source":"event","stage":"Trial","days_in_stage":10,"value_cents":100}]"#,
    )
    .unwrap();

    let out = stdout_of(gymdesk_cmd(&temp_dir).args(["leads", "list", "--stage", "trial", "--json"]));
    let leads: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0]["aging"], "aging");
    assert_eq!(leads[0]["stage_label"], "Trial Active");

    let out = stdout_of(gymdesk_cmd(&temp_dir).args(["pipeline", "--json"]));
    let board: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(board["skipped"], 0);
}

#[test]
fn test_lead_list_unknown_stage() {
    let (temp_dir, _guard) = setup_test_env("");

    gymdesk_cmd(&temp_dir)
        .args(["leads", "list", "--stage", "contact"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Did you mean: contacted?"));
}

#[test]
fn test_lead_show() {
    let (temp_dir, _guard) = setup_test_env("");

    gymdesk_cmd(&temp_dir)
        .args(["leads", "show", "lead-0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(lead-0)"))
        .stdout(predicate::str::contains("Stage:"));
}

#[test]
fn test_today_flag_shifts_dates_only() {
    let (temp_dir, _guard) = setup_test_env("");

    let a = stdout_of(gymdesk_cmd(&temp_dir).args(["members", "show", "member-3", "--json"]));
    let b = stdout_of(gymdesk_cmd(&temp_dir).args(["--today", "2026-04-15", "members", "show", "member-3", "--json"]));
    let a: serde_json::Value = serde_json::from_str(&a).unwrap();
    let b: serde_json::Value = serde_json::from_str(&b).unwrap();
    assert_eq!(a["profile"]["coach"], b["profile"]["coach"]);
    assert_eq!(a["profile"]["alerts"], b["profile"]["alerts"]);
    assert_ne!(a["profile"]["next_appointment"]["date"], b["profile"]["next_appointment"]["date"]);
}

#[test]
fn test_bad_today_flag() {
    let (temp_dir, _guard) = setup_test_env("");

    gymdesk_cmd(&temp_dir)
        .args(["--today", "someday", "members", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unsupported date expression"));
}

#[test]
fn test_today_flag_out_of_calendar_range() {
    let (temp_dir, _guard) = setup_test_env("");

    gymdesk_cmd(&temp_dir)
        .args(["--today", "+100000000d", "members", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("outside the supported calendar range"));
}
