//! Tests for the report formatter

use super::*;
use crate::types::PollOption;
use pretty_assertions::assert_eq;

fn poll(id: i64, question: &str, created_at: &str, options: Vec<PollOption>) -> Poll {
    Poll {
        id,
        question: question.to_string(),
        created_at: created_at.to_string(),
        owner_id: 1,
        options,
    }
}

fn render(polls: &[Poll]) -> String {
    let mut out = Vec::new();
    write_polls(&mut out, polls).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_empty_input_emits_single_notice() {
    assert_eq!(render(&[]), "No polls to display.\n");
}

#[test]
fn test_report_contains_all_fields() {
    let polls = vec![poll(
        12,
        "What's for lunch?",
        "2024-03-01T09:30:00Z",
        vec![
            PollOption {
                id: 40,
                text: "Pizza".to_string(),
                poll_id: 12,
            },
            PollOption {
                id: 41,
                text: "Salad".to_string(),
                poll_id: 12,
            },
        ],
    )];

    let report = render(&polls);
    assert_eq!(
        report,
        "Displaying 1 polls:\n\
         ============================================================\n\
         \n\
         Poll #12: What's for lunch?\n\
         \x20 Owner:   1\n\
         \x20 Created: 2024-03-01 09:30:00\n\
         \x20 Options:\n\
         \x20   1. Pizza (id 40)\n\
         \x20   2. Salad (id 41)\n\
         ----------------------------------------\n"
    );
}

#[test]
fn test_unparsable_timestamp_falls_back_to_raw() {
    let polls = vec![poll(1, "q", "yesterday-ish", vec![])];
    let report = render(&polls);
    assert!(report.contains("Created: yesterday-ish"));
}

#[test]
fn test_empty_timestamp_falls_back_to_raw() {
    let polls = vec![poll(1, "q", "", vec![])];
    let report = render(&polls);
    assert!(report.contains("Created: \n"));
}

#[test]
fn test_naive_timestamp_without_offset_parses() {
    let polls = vec![poll(1, "q", "2024-03-01T09:30:00", vec![])];
    let report = render(&polls);
    assert!(report.contains("Created: 2024-03-01 09:30:00"));
}

#[test]
fn test_fractional_seconds_are_dropped() {
    let polls = vec![poll(1, "q", "2024-03-01T09:30:00.123456", vec![])];
    let report = render(&polls);
    assert!(report.contains("Created: 2024-03-01 09:30:00"));
}

#[test]
fn test_offset_timestamp_keeps_local_clock_time() {
    // The rendered time is the clock time the server sent, not UTC
    let polls = vec![poll(1, "q", "2024-03-01T09:30:00+02:00", vec![])];
    let report = render(&polls);
    assert!(report.contains("Created: 2024-03-01 09:30:00"));
}

#[test]
fn test_poll_without_options_gets_marker() {
    let polls = vec![poll(3, "Lonely poll?", "2024-03-01T09:30:00Z", vec![])];
    let report = render(&polls);
    assert!(report.contains("Options: none"));
}

#[test]
fn test_option_enumeration_is_one_based_and_ordered() {
    let options = vec![
        PollOption {
            id: 7,
            text: "first".to_string(),
            poll_id: 1,
        },
        PollOption {
            id: 8,
            text: "second".to_string(),
            poll_id: 1,
        },
        PollOption {
            id: 9,
            text: "third".to_string(),
            poll_id: 1,
        },
    ];
    let report = render(&[poll(1, "q", "", options)]);

    let first = report.find("1. first (id 7)").unwrap();
    let second = report.find("2. second (id 8)").unwrap();
    let third = report.find("3. third (id 9)").unwrap();
    assert!(first < second && second < third);
}

#[test]
fn test_display_polls_does_not_panic() {
    display_polls(&[]);
    display_polls(&[poll(1, "q", "bad timestamp", vec![])]);
}
