use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "question_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Theory,
    Practice,
    ExamPractice,
}

impl QuestionKind {
    pub fn is_practice(&self) -> bool {
        matches!(self, QuestionKind::Practice | QuestionKind::ExamPractice)
    }
}

/// Explicit pending/graded marker. Aggregation and disclosure branch on
/// this, never on a zero `max_score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "grading_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum GradingStatus {
    Pending,
    Graded,
}

/// One question outcome within an attempt, ordered by `position`. Rows
/// are committed atomically by the grader: a reader sees either the prior
/// pending row or the fully graded one.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuestionResult {
    pub id: Uuid,
    pub attempt_id: Uuid,
    pub position: i32,
    pub question_text: String,
    pub kind: QuestionKind,
    pub grading_status: GradingStatus,
    pub is_correct: Option<bool>,
    pub score: i32,
    pub max_score: i32,
    pub network_guid: Option<String>,
    pub graded_at: Option<DateTime<Utc>>,
}

impl QuestionResult {
    pub fn is_graded(&self) -> bool {
        self.grading_status == GradingStatus::Graded
    }

    pub fn is_well_formed(&self) -> bool {
        self.score >= 0 && self.max_score >= 0 && self.score <= self.max_score
    }
}
