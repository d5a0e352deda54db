pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    attempt_service::AttemptService, result_service::ResultService,
    section_service::SectionService, test_service::TestService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub test_service: TestService,
    pub section_service: SectionService,
    pub attempt_service: AttemptService,
    pub result_service: ResultService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let test_service = TestService::new(pool.clone());
        let section_service = SectionService::new(pool.clone());
        let attempt_service = AttemptService::new(pool.clone());
        let result_service = ResultService::new(pool.clone());

        Self {
            pool,
            test_service,
            section_service,
            attempt_service,
            result_service,
        }
    }
}
