use serde::{Deserialize, Serialize};

use crate::models::question_result::{GradingStatus, QuestionKind, QuestionResult};

/// One question outcome as shown to the participant. Score and
/// correctness fields are populated only when disclosure is allowed and
/// the row is graded; a withheld or pending practice row still exposes
/// its opaque network reference for topology review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResultDto {
    pub question_text: String,
    pub kind: QuestionKind,
    pub grading_status: GradingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_guid: Option<String>,
}

impl QuestionResultDto {
    pub fn from_result(result: &QuestionResult, disclosed: bool) -> Self {
        let show_outcome = disclosed && result.is_graded();
        Self {
            question_text: result.question_text.clone(),
            kind: result.kind,
            grading_status: result.grading_status,
            is_correct: if show_outcome { result.is_correct } else { None },
            score: if show_outcome { Some(result.score) } else { None },
            max_score: if show_outcome { Some(result.max_score) } else { None },
            network_guid: if result.kind.is_practice() {
                result.network_guid.clone()
            } else {
                None
            },
        }
    }
}

/// The assembled result view for one completed attempt: the contract the
/// presentation layer consumes. A snapshot; later grading changes are
/// only visible through a fresh assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultPayload {
    pub test_name: String,
    pub section_name: String,
    pub is_exam: bool,
    pub started_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<String>,
    pub results: Vec<QuestionResultDto>,
    /// Subset of `results` with practice/exam-practice kind, derived from
    /// the same snapshot.
    pub practice_results: Vec<QuestionResultDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theory_correct: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theory_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_max: Option<i32>,
    pub answer_available: bool,
    /// Present only while disclosure is deferred with a known schedule;
    /// `None` with `answer_available == false` means "pending review".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results_available_from: Option<chrono::DateTime<chrono::Utc>>,
}
