//! PostgreSQL implementation of the student repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{SaveStudent, Student};
use crate::domain::repositories::StudentRepository;
use crate::error::AppError;
use serde_json::json;

/// PostgreSQL repository backed by the `students` table.
pub struct PgStudentRepository {
    pool: Arc<PgPool>,
}

impl PgStudentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    async fn find_all(&self) -> Result<Vec<Student>, AppError> {
        let rows = sqlx::query_as::<_, Student>(
            r#"
            SELECT id, name, email
            FROM students
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        let row = sqlx::query_as::<_, Student>(
            r#"
            SELECT id, name, email
            FROM students
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn save(&self, student: SaveStudent) -> Result<Student, AppError> {
        match student {
            SaveStudent::New(new_student) => {
                let row = sqlx::query_as::<_, Student>(
                    r#"
                    INSERT INTO students (name, email)
                    VALUES ($1, $2)
                    RETURNING id, name, email
                    "#,
                )
                .bind(new_student.name)
                .bind(new_student.email)
                .fetch_one(self.pool.as_ref())
                .await?;

                Ok(row)
            }
            SaveStudent::Existing(existing) => {
                let id = existing.id;
                let row = sqlx::query_as::<_, Student>(
                    r#"
                    UPDATE students SET
                        name  = $2,
                        email = $3
                    WHERE id = $1
                    RETURNING id, name, email
                    "#,
                )
                .bind(id)
                .bind(existing.name)
                .bind(existing.email)
                .fetch_optional(self.pool.as_ref())
                .await?;

                row.ok_or_else(|| AppError::not_found("Student not found", json!({"id": id})))
            }
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(id, "Delete of missing student ignored");
        }

        Ok(())
    }
}
