#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;
use student_registry::application::services::StudentService;
use student_registry::infrastructure::persistence::{
    InMemoryStudentRepository, PgStudentRepository,
};
use student_registry::state::AppState;

pub async fn create_test_student(pool: &PgPool, name: &str, email: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO students (name, email) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// State backed by an empty in-memory repository.
pub fn create_memory_state() -> AppState {
    let repo = Arc::new(InMemoryStudentRepository::new());
    AppState::new(Arc::new(StudentService::new(repo)), None)
}

/// State backed by PostgreSQL.
pub fn create_pg_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);
    let repo = Arc::new(PgStudentRepository::new(pool.clone()));
    AppState::new(Arc::new(StudentService::new(repo)), Some(pool))
}
