use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::result_dto::{QuestionResultDto, ResultPayload};
use crate::error::{Error, Result};
use crate::models::attempt::QuizAttempt;
use crate::models::question_result::QuestionResult;
use crate::models::section::Section;
use crate::models::test::Test;
use crate::services::release_service::ReleaseService;
use crate::services::scoring_service::ScoringService;
use crate::utils::time;

#[derive(Clone)]
pub struct ResultService {
    pool: PgPool,
}

impl ResultService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Assembles the result payload for a completed attempt: one read
    /// pass over attempt, section, test, and question results, then a
    /// pure snapshot build against the current wall clock.
    pub async fn assemble(&self, attempt_id: Uuid) -> Result<ResultPayload> {
        let (attempt, section, test) = self.load_attempt_context(attempt_id).await?;
        if !attempt.is_completed() {
            return Err(Error::AttemptNotCompleted(attempt_id));
        }
        let results = self.load_question_results(attempt_id).await?;
        Ok(assemble_payload(
            &attempt,
            &section,
            &test,
            &results,
            time::now(),
        ))
    }

    /// Resolves the attempt together with its section and test, the
    /// explicit naming context the payload carries instead of any
    /// session-scoped display state.
    pub async fn load_attempt_context(
        &self,
        attempt_id: Uuid,
    ) -> Result<(QuizAttempt, Section, Test)> {
        let attempt =
            sqlx::query_as::<_, QuizAttempt>(r#"SELECT * FROM quiz_attempts WHERE id = $1"#)
                .bind(attempt_id)
                .fetch_optional(&self.pool)
                .await?
                .ok_or(Error::AttemptNotFound(attempt_id))?;

        let section = sqlx::query_as::<_, Section>(r#"SELECT * FROM sections WHERE id = $1"#)
            .bind(attempt.section_id)
            .fetch_one(&self.pool)
            .await?;

        let test = sqlx::query_as::<_, Test>(r#"SELECT * FROM tests WHERE id = $1"#)
            .bind(section.test_id)
            .fetch_one(&self.pool)
            .await?;

        Ok((attempt, section, test))
    }

    pub async fn load_question_results(&self, attempt_id: Uuid) -> Result<Vec<QuestionResult>> {
        let rows = sqlx::query_as::<_, QuestionResult>(
            r#"SELECT * FROM question_results WHERE attempt_id = $1 ORDER BY position ASC"#,
        )
        .bind(attempt_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

/// Pure snapshot assembly: everything downstream of the store read is a
/// function of the loaded state and `now`.
///
/// When disclosure is withheld the payload carries the question list with
/// network references only, no scores or aggregates, plus the scheduled
/// release time when one is known.
pub fn assemble_payload(
    attempt: &QuizAttempt,
    section: &Section,
    test: &Test,
    results: &[QuestionResult],
    now: DateTime<Utc>,
) -> ResultPayload {
    let answer_available = ReleaseService::answer_available(section, results, now);

    let question_dtos: Vec<QuestionResultDto> = results
        .iter()
        .map(|r| QuestionResultDto::from_result(r, answer_available))
        .collect();
    let practice_results: Vec<QuestionResultDto> = question_dtos
        .iter()
        .filter(|dto| dto.kind.is_practice())
        .cloned()
        .collect();

    let summary = if answer_available {
        Some(ScoringService::aggregate(results))
    } else {
        None
    };

    ResultPayload {
        test_name: test.name.clone(),
        section_name: section.name.clone(),
        is_exam: section.is_exam,
        started_at: time::to_rfc3339(attempt.started_at),
        time_spent: attempt.time_spent_seconds.map(time::format_duration),
        results: question_dtos,
        practice_results,
        theory_correct: summary.map(|s| s.theory_correct),
        theory_count: summary.map(|s| s.theory_count),
        total_score: summary.map(|s| s.total_score),
        total_max: summary.map(|s| s.total_max),
        answer_available,
        results_available_from: if answer_available {
            None
        } else {
            section.results_available_from
        },
    }
}
