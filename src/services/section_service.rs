use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::dto::quiz_dto::SectionDto;
use crate::error::{Error, Result};
use crate::services::release_service::ReleaseService;
use crate::utils::time;

#[derive(Debug, FromRow)]
struct SectionListRow {
    section_id: Uuid,
    section_name: String,
    description: Option<String>,
    timer_minutes: Option<i32>,
    question_count: i32,
    is_exam: bool,
    results_available_from: Option<DateTime<Utc>>,
    attempts_count: i64,
    last_completed_at: Option<DateTime<Utc>>,
}

#[derive(Clone)]
pub struct SectionService {
    pool: PgPool,
}

impl SectionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists a test's sections with the per-user attempt counters and the
    /// section-level availability flag, evaluated against the current
    /// clock on every call.
    pub async fn list_sections(&self, test_id: Uuid, user_id: Uuid) -> Result<Vec<SectionDto>> {
        let exists: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM tests WHERE id = $1"#)
            .bind(test_id)
            .fetch_one(&self.pool)
            .await?;
        if exists == 0 {
            return Err(Error::NotFound(format!("Test not found: {}", test_id)));
        }

        let rows = sqlx::query_as::<_, SectionListRow>(
            r#"
            SELECT s.id AS section_id,
                   s.name AS section_name,
                   s.description,
                   s.timer_minutes,
                   s.question_count,
                   s.is_exam,
                   s.results_available_from,
                   COUNT(a.id) AS attempts_count,
                   MAX(a.completed_at) AS last_completed_at
            FROM sections s
            LEFT JOIN quiz_attempts a ON a.section_id = s.id AND a.user_id = $2
            WHERE s.test_id = $1
            GROUP BY s.id
            ORDER BY s.created_at ASC
            "#,
        )
        .bind(test_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let now = time::now();
        let sections = rows
            .into_iter()
            .map(|row| SectionDto {
                section_id: row.section_id,
                section_name: row.section_name,
                description: row.description,
                timer_minutes: row.timer_minutes,
                question_count: row.question_count,
                is_exam: row.is_exam,
                answer_available: ReleaseService::section_answer_available(
                    row.results_available_from,
                    now,
                ),
                results_available_from: row.results_available_from,
                attempts_count: row.attempts_count,
                last_completed_at: row.last_completed_at,
            })
            .collect();

        Ok(sections)
    }
}
