use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::attempt::{QuizAttempt, STATUS_COMPLETED, STATUS_IN_PROGRESS};
use crate::models::section::Section;
use crate::models::test::Test;
use crate::utils::time;

#[derive(Clone)]
pub struct AttemptService {
    pool: PgPool,
}

impl AttemptService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a new in-progress attempt on a section. Non-retakeable exam
    /// sections admit a single attempt per user.
    pub async fn start_attempt(&self, section_id: Uuid, user_id: Uuid) -> Result<QuizAttempt> {
        let section = sqlx::query_as::<_, Section>(r#"SELECT * FROM sections WHERE id = $1"#)
            .bind(section_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Section not found: {}", section_id)))?;

        let test = sqlx::query_as::<_, Test>(r#"SELECT * FROM tests WHERE id = $1"#)
            .bind(section.test_id)
            .fetch_one(&self.pool)
            .await?;

        if section.is_exam && !test.is_retakeable {
            let existing: i64 = sqlx::query_scalar(
                r#"SELECT COUNT(*) FROM quiz_attempts WHERE section_id = $1 AND user_id = $2"#,
            )
            .bind(section_id)
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

            if existing > 0 {
                return Err(Error::BadRequest(
                    "This exam section cannot be retaken; an attempt already exists".to_string(),
                ));
            }
        }

        let attempt = sqlx::query_as::<_, QuizAttempt>(
            r#"
            INSERT INTO quiz_attempts (section_id, user_id, status)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(section_id)
        .bind(user_id)
        .bind(STATUS_IN_PROGRESS)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(attempt_id = %attempt.id, %section_id, %user_id, "attempt started");
        Ok(attempt)
    }

    /// Marks an attempt completed and freezes its time spent. The guarded
    /// update makes the transition one-shot: a second submission finds no
    /// row to update and is rejected.
    pub async fn complete_attempt(&self, attempt_id: Uuid) -> Result<QuizAttempt> {
        let now = time::now();
        let updated = sqlx::query_as::<_, QuizAttempt>(
            r#"
            UPDATE quiz_attempts
            SET status = $1, completed_at = $2,
                time_spent_seconds = ROUND(EXTRACT(EPOCH FROM ($2 - started_at)))::integer,
                updated_at = $2
            WHERE id = $3 AND completed_at IS NULL
            RETURNING *
            "#,
        )
        .bind(STATUS_COMPLETED)
        .bind(now)
        .bind(attempt_id)
        .fetch_optional(&self.pool)
        .await?;

        match updated {
            Some(attempt) => {
                tracing::info!(%attempt_id, "attempt completed");
                Ok(attempt)
            }
            None => {
                let attempt = self.get_attempt(attempt_id).await?;
                Err(Error::BadRequest(format!(
                    "Attempt {} has already been completed",
                    attempt.id
                )))
            }
        }
    }

    pub async fn get_attempt(&self, attempt_id: Uuid) -> Result<QuizAttempt> {
        sqlx::query_as::<_, QuizAttempt>(r#"SELECT * FROM quiz_attempts WHERE id = $1"#)
            .bind(attempt_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(Error::AttemptNotFound(attempt_id))
    }
}
