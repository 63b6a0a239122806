//! Student management service.

use crate::domain::entities::{NewStudent, SaveStudent, Student, StudentChanges};
use crate::domain::repositories::StudentRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service exposing the student operations.
///
/// Every operation forwards to the repository. The only extra step is in
/// [`StudentService::update_student`], which merges the supplied fields onto
/// the stored record before saving it.
pub struct StudentService {
    repository: Arc<dyn StudentRepository>,
}

impl StudentService {
    /// Creates a new student service.
    pub fn new(repository: Arc<dyn StudentRepository>) -> Self {
        Self { repository }
    }

    /// Lists all stored students.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_students(&self) -> Result<Vec<Student>, AppError> {
        self.repository.find_all().await
    }

    /// Retrieves a student by id, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_student(&self, id: i64) -> Result<Option<Student>, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Retrieves a student by id, failing when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no student has that id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn require_student(&self, id: i64) -> Result<Student, AppError> {
        self.get_student(id).await?.ok_or_else(|| {
            AppError::not_found(format!("Student of ID {id} not found"), json!({"id": id}))
        })
    }

    /// Stores a new student and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn add_student(&self, student: NewStudent) -> Result<Student, AppError> {
        self.repository.save(SaveStudent::New(student)).await
    }

    /// Copies `name` and `email` onto the student with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no student has that id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_student(
        &self,
        id: i64,
        changes: StudentChanges,
    ) -> Result<Student, AppError> {
        let mut student = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Student not found", json!({"id": id})))?;

        student.apply(changes);

        self.repository.save(SaveStudent::Existing(student)).await
    }

    /// Deletes a student. Missing ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_student(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete_by_id(id).await
    }
}
