use chrono::{DateTime, Duration, Utc};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use netquiz_backend::models::attempt::{QuizAttempt, STATUS_COMPLETED};
use netquiz_backend::models::question_result::{GradingStatus, QuestionKind, QuestionResult};
use netquiz_backend::models::section::Section;
use netquiz_backend::models::test::Test;
use netquiz_backend::services::result_service::assemble_payload;

fn test_row() -> Test {
    Test {
        id: Uuid::new_v4(),
        name: "Network Fundamentals".to_string(),
        description: Some("Intro course".to_string()),
        author_name: "edu-team".to_string(),
        is_ready: true,
        is_retakeable: false,
        created_at: Utc::now(),
    }
}

fn section_row(test: &Test, is_exam: bool, available_from: Option<DateTime<Utc>>) -> Section {
    Section {
        id: Uuid::new_v4(),
        test_id: test.id,
        name: "Final exam".to_string(),
        description: None,
        timer_minutes: Some(60),
        question_count: 3,
        is_exam,
        results_available_from: available_from,
        created_at: Utc::now(),
    }
}

fn completed_attempt(section: &Section) -> QuizAttempt {
    let started = Utc::now() - Duration::minutes(42);
    QuizAttempt {
        id: Uuid::new_v4(),
        section_id: section.id,
        user_id: Uuid::new_v4(),
        status: STATUS_COMPLETED.to_string(),
        started_at: started,
        completed_at: Some(started + Duration::minutes(40)),
        time_spent_seconds: Some(2400),
        created_at: started,
        updated_at: started + Duration::minutes(40),
    }
}

fn question(
    attempt: &QuizAttempt,
    position: i32,
    kind: QuestionKind,
    grading_status: GradingStatus,
    is_correct: Option<bool>,
    score: i32,
    max_score: i32,
    network_guid: Option<&str>,
) -> QuestionResult {
    QuestionResult {
        id: Uuid::new_v4(),
        attempt_id: attempt.id,
        position,
        question_text: format!("Question {}", position),
        kind,
        grading_status,
        is_correct,
        score,
        max_score,
        network_guid: network_guid.map(str::to_string),
        graded_at: None,
    }
}

#[test]
fn disclosed_payload_carries_full_scores_on_the_wire() {
    let test = test_row();
    let section = section_row(&test, false, None);
    let attempt = completed_attempt(&section);
    let results = vec![
        question(&attempt, 1, QuestionKind::Theory, GradingStatus::Graded, Some(true), 1, 1, None),
        question(&attempt, 2, QuestionKind::Theory, GradingStatus::Graded, Some(false), 0, 1, None),
        question(
            &attempt,
            3,
            QuestionKind::Practice,
            GradingStatus::Graded,
            None,
            3,
            5,
            Some("topology-abc"),
        ),
    ];

    let payload = assemble_payload(&attempt, &section, &test, &results, Utc::now());
    let json = serde_json::to_value(&payload).unwrap();

    assert_eq!(json["answer_available"], JsonValue::Bool(true));
    assert_eq!(json["test_name"], "Network Fundamentals");
    assert_eq!(json["section_name"], "Final exam");
    assert_eq!(json["theory_correct"], 1);
    assert_eq!(json["theory_count"], 2);
    assert_eq!(json["total_score"], 4);
    assert_eq!(json["total_max"], 7);
    assert_eq!(json["time_spent"], "40:00");

    let results_json = json["results"].as_array().unwrap();
    assert_eq!(results_json.len(), 3);
    assert_eq!(results_json[0]["kind"], "theory");
    assert_eq!(results_json[0]["is_correct"], JsonValue::Bool(true));
    assert_eq!(results_json[2]["kind"], "practice");
    assert_eq!(results_json[2]["score"], 3);
    assert_eq!(results_json[2]["network_guid"], "topology-abc");

    let practice_json = json["practice_results"].as_array().unwrap();
    assert_eq!(practice_json.len(), 1);
    assert_eq!(practice_json[0]["max_score"], 5);

    // deferred-release marker is absent once disclosed
    assert!(json.get("results_available_from").is_none());
}

#[test]
fn withheld_exam_payload_omits_scores_but_keeps_topology_references() {
    let test = test_row();
    let release = Utc::now() + Duration::days(2);
    let section = section_row(&test, true, Some(release));
    let attempt = completed_attempt(&section);
    let results = vec![
        question(&attempt, 1, QuestionKind::Theory, GradingStatus::Graded, Some(true), 1, 1, None),
        question(
            &attempt,
            2,
            QuestionKind::ExamPractice,
            GradingStatus::Pending,
            None,
            0,
            0,
            Some("topology-pending"),
        ),
    ];

    let payload = assemble_payload(&attempt, &section, &test, &results, Utc::now());
    let json = serde_json::to_value(&payload).unwrap();

    assert_eq!(json["answer_available"], JsonValue::Bool(false));
    assert_eq!(json["is_exam"], JsonValue::Bool(true));
    for key in ["theory_correct", "theory_count", "total_score", "total_max"] {
        assert!(json.get(key).is_none(), "{} must be omitted while withheld", key);
    }

    let results_json = json["results"].as_array().unwrap();
    for row in results_json {
        assert!(row.get("is_correct").is_none());
        assert!(row.get("score").is_none());
        assert!(row.get("max_score").is_none());
    }
    assert_eq!(results_json[1]["grading_status"], "pending");
    assert_eq!(results_json[1]["kind"], "exam_practice");
    assert_eq!(results_json[1]["network_guid"], "topology-pending");

    // the schedule is surfaced so the participant knows when to check back
    let surfaced: DateTime<Utc> =
        serde_json::from_value(json["results_available_from"].clone()).unwrap();
    assert_eq!(surfaced, release);
}

#[test]
fn graded_exam_with_past_schedule_discloses_everything() {
    let test = test_row();
    let section = section_row(&test, true, Some(Utc::now() - Duration::days(1)));
    let attempt = completed_attempt(&section);
    let results = vec![
        question(&attempt, 1, QuestionKind::Theory, GradingStatus::Graded, Some(true), 1, 1, None),
        question(
            &attempt,
            2,
            QuestionKind::ExamPractice,
            GradingStatus::Graded,
            None,
            4,
            5,
            Some("topology-xyz"),
        ),
    ];

    let payload = assemble_payload(&attempt, &section, &test, &results, Utc::now());

    assert!(payload.answer_available);
    assert_eq!(payload.total_score, Some(5));
    assert_eq!(payload.total_max, Some(6));
    assert_eq!(payload.practice_results.len(), 1);
    assert_eq!(payload.practice_results[0].score, Some(4));
}

#[test]
fn repeated_assembly_over_unchanged_state_is_bit_identical() {
    let test = test_row();
    let section = section_row(&test, true, None);
    let attempt = completed_attempt(&section);
    let results = vec![
        question(&attempt, 1, QuestionKind::Theory, GradingStatus::Graded, Some(false), 0, 1, None),
        question(
            &attempt,
            2,
            QuestionKind::Practice,
            GradingStatus::Graded,
            None,
            2,
            5,
            Some("topology-1"),
        ),
    ];

    let now = Utc::now();
    let first = serde_json::to_string(&assemble_payload(&attempt, &section, &test, &results, now))
        .unwrap();
    let second = serde_json::to_string(&assemble_payload(&attempt, &section, &test, &results, now))
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn pending_practice_stays_out_of_the_denominator_for_non_exam_sections() {
    let test = test_row();
    let section = section_row(&test, false, None);
    let attempt = completed_attempt(&section);
    let results = vec![
        question(&attempt, 1, QuestionKind::Theory, GradingStatus::Graded, Some(true), 1, 1, None),
        question(
            &attempt,
            2,
            QuestionKind::Practice,
            GradingStatus::Pending,
            None,
            0,
            0,
            Some("topology-wip"),
        ),
    ];

    let payload = assemble_payload(&attempt, &section, &test, &results, Utc::now());

    // non-exam sections disclose immediately, but an ungraded question
    // must not be counted as zero-of-zero
    assert!(payload.answer_available);
    assert_eq!(payload.total_score, Some(1));
    assert_eq!(payload.total_max, Some(1));

    // the pending row itself shows no score yet
    assert!(payload.results[1].score.is_none());
    assert_eq!(payload.results[1].network_guid.as_deref(), Some("topology-wip"));
}
