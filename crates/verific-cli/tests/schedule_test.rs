use verific_testing::assertions::{assert_bucket_ids, assert_bucket_order};
use verific_testing::{TestWorld, fixtures};

fn schedule_world() -> TestWorld {
    TestWorld::new()
        .with_config("timezone = \"America/Sao_Paulo\"\n")
        .with_records("schedule.json", &fixtures::sample_schedule())
}

#[test]
fn test_schedule_plain_output() {
    let world = schedule_world();

    let result = world
        .run(&["schedule", "schedule.json", "--now", "2024-01-15"])
        .expect("Failed to run schedule");

    assert!(result.success(), "stderr: {}", result.stderr());
    insta::assert_snapshot!(result.stdout().trim_end(), @r"
    Today (2)
      09:00-10:00   Abertura @ Auditório
      10:00-10:30   Coffee break

    Tomorrow (1)
      14:00-17:00   Oficina de Rust

    20 de janeiro (1)
      18:00         Encerramento
    ");
}

#[test]
fn test_schedule_json_is_chronological_within_days() {
    let world = schedule_world();

    let result = world
        .run(&[
            "--format",
            "json",
            "schedule",
            "schedule.json",
            "--now",
            "2024-01-15T08:00",
        ])
        .expect("Failed to run schedule");
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().expect("Parse failed");
    assert_bucket_order(&json, &["Today", "Tomorrow", "20 de janeiro"]).unwrap();
    assert_bucket_ids(&json, "Today", &["a1", "a2"]).unwrap();

    let summaries = json["content"]["summaries"]
        .as_array()
        .expect("Expected summaries array");
    assert_eq!(summaries.len(), 3);
    assert_eq!(summaries[0]["activities"], 2);
    assert_eq!(summaries[0]["kind"], "today");
    assert_eq!(json["content"]["reference"]["timezone"], "America/Sao_Paulo");
}

#[test]
fn test_schedule_timezone_flag_moves_days() {
    // Seen from Tokyo (UTC+9) the 18:00 Sao Paulo closing is already the 21st
    let world = schedule_world();

    let result = world
        .run(&[
            "--format",
            "json",
            "schedule",
            "schedule.json",
            "--now",
            "2024-01-15T22:00",
            "--tz",
            "Asia/Tokyo",
        ])
        .expect("Failed to run schedule");
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().expect("Parse failed");
    assert_bucket_ids(&json, "21 de janeiro", &["a4"]).unwrap();
}

#[test]
fn test_schedule_rejects_malformed_activity() {
    let world = TestWorld::new().with_file(
        "broken.jsonl",
        "{\"id\":\"a1\",\"name\":\"Ok\",\"startsAt\":\"2024-01-15T09:00:00Z\"}\n{\"id\":\"a2\",\"name\":\"No start\"}\n",
    );

    let result = world
        .run(&["schedule", "broken.jsonl", "--now", "2024-01-15"])
        .expect("Failed to run schedule");

    assert!(!result.success());
    assert!(
        result.stderr().contains("Invalid activity at index 1"),
        "stderr: {}",
        result.stderr()
    );
}

#[test]
fn test_schedule_empty_file() {
    let world = TestWorld::new().with_file("empty.json", "[]");

    let result = world
        .run(&["schedule", "empty.json", "--now", "2024-01-15"])
        .expect("Failed to run schedule");

    assert!(result.success());
    assert_eq!(result.stdout().trim(), "No activities scheduled.");
}
