use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Section {
    pub id: Uuid,
    pub test_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub timer_minutes: Option<i32>,
    pub question_count: i32,
    pub is_exam: bool,
    pub results_available_from: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
