//! Repository trait for student records.

use crate::domain::entities::{SaveStudent, Student};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for student records keyed by integer id.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStudentRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryStudentRepository`] - process-local map
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_student.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Returns every stored student. Order is store-defined.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self) -> Result<Vec<Student>, AppError>;

    /// Finds a student by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError>;

    /// Inserts a new student or overwrites an existing one.
    ///
    /// Inserts assign a fresh id; the returned record is what was stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if an existing student disappeared before the write.
    /// Returns [`AppError::Internal`] on database errors.
    async fn save(&self, student: SaveStudent) -> Result<Student, AppError>;

    /// Deletes a student by id. Deleting a missing id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}
