use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TestDto {
    pub test_id: Uuid,
    pub test_name: String,
    pub author_name: String,
    pub description: Option<String>,
    pub is_retakeable: bool,
    pub is_ready: bool,
    pub section_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionDto {
    pub section_id: Uuid,
    pub section_name: String,
    pub description: Option<String>,
    pub timer_minutes: Option<i32>,
    pub question_count: i32,
    pub is_exam: bool,
    pub answer_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results_available_from: Option<DateTime<Utc>>,
    pub attempts_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListSectionsQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StartAttemptRequest {
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartAttemptResponse {
    pub attempt_id: Uuid,
    pub section_id: Uuid,
    pub status: String,
    pub started_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinishAttemptResponse {
    pub attempt_id: Uuid,
    pub status: String,
    pub completed_at: DateTime<Utc>,
    pub time_spent_seconds: i32,
}
