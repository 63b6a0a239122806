//! Shared state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::StudentService;

#[derive(Clone)]
pub struct AppState {
    pub student_service: Arc<StudentService>,
    /// Database pool used by the health check; `None` with in-memory storage.
    pub db: Option<Arc<PgPool>>,
}

impl AppState {
    pub fn new(student_service: Arc<StudentService>, db: Option<Arc<PgPool>>) -> Self {
        Self {
            student_service,
            db,
        }
    }
}
