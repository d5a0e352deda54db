use sqlx::PgPool;

use crate::dto::quiz_dto::TestDto;
use crate::error::Result;

#[derive(Clone)]
pub struct TestService {
    pool: PgPool,
}

impl TestService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists published tests with their section counts, oldest first.
    pub async fn list_tests(&self) -> Result<Vec<TestDto>> {
        let tests = sqlx::query_as::<_, TestDto>(
            r#"
            SELECT t.id AS test_id,
                   t.name AS test_name,
                   t.author_name,
                   t.description,
                   t.is_retakeable,
                   t.is_ready,
                   COUNT(s.id) AS section_count
            FROM tests t
            LEFT JOIN sections s ON s.test_id = t.id
            WHERE t.is_ready = TRUE
            GROUP BY t.id
            ORDER BY t.created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tests)
    }
}
