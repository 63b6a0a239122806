//! In-memory student repository for running without a database.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{SaveStudent, Student};
use crate::domain::repositories::StudentRepository;
use crate::error::AppError;
use serde_json::json;

/// A repository that keeps students in a process-local map.
///
/// Ids start at 1 and are never reused, even after deletes. Contents are lost
/// when the process exits.
///
/// # Use Cases
///
/// - Development environments without PostgreSQL
/// - Handler tests that should not depend on a database
pub struct InMemoryStudentRepository {
    inner: RwLock<Store>,
}

#[derive(Default)]
struct Store {
    rows: BTreeMap<i64, Student>,
    last_id: i64,
}

impl InMemoryStudentRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        debug!("Using in-memory student storage");
        Self {
            inner: RwLock::new(Store::default()),
        }
    }
}

impl Default for InMemoryStudentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn find_all(&self) -> Result<Vec<Student>, AppError> {
        let store = self.inner.read().await;
        Ok(store.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        let store = self.inner.read().await;
        Ok(store.rows.get(&id).cloned())
    }

    async fn save(&self, student: SaveStudent) -> Result<Student, AppError> {
        let mut store = self.inner.write().await;

        match student {
            SaveStudent::New(new_student) => {
                store.last_id += 1;
                let saved = Student::new(store.last_id, new_student.name, new_student.email);
                store.rows.insert(saved.id, saved.clone());
                Ok(saved)
            }
            SaveStudent::Existing(existing) => match store.rows.get_mut(&existing.id) {
                Some(row) => {
                    *row = existing.clone();
                    Ok(existing)
                }
                None => Err(AppError::not_found(
                    "Student not found",
                    json!({"id": existing.id}),
                )),
            },
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let mut store = self.inner.write().await;
        store.rows.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NewStudent;

    fn new_student(name: &str, email: &str) -> SaveStudent {
        SaveStudent::New(NewStudent {
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = InMemoryStudentRepository::new();

        let first = repo.save(new_student("Alice", "a@x.com")).await.unwrap();
        let second = repo.save(new_student("Bob", "b@x.com")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = InMemoryStudentRepository::new();

        let first = repo.save(new_student("Alice", "a@x.com")).await.unwrap();
        repo.delete_by_id(first.id).await.unwrap();
        let second = repo.save(new_student("Bob", "b@x.com")).await.unwrap();

        assert_eq!(second.id, 2);
        assert!(repo.find_by_id(first.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_existing() {
        let repo = InMemoryStudentRepository::new();
        let mut student = repo.save(new_student("Alice", "a@x.com")).await.unwrap();

        student.name = "Alice B".to_string();
        let saved = repo.save(SaveStudent::Existing(student)).await.unwrap();

        assert_eq!(saved.id, 1);
        assert_eq!(
            repo.find_by_id(1).await.unwrap().unwrap().name,
            "Alice B"
        );
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = InMemoryStudentRepository::new();

        let result = repo
            .save(SaveStudent::Existing(Student::new(
                42,
                "Ghost".to_string(),
                "g@x.com".to_string(),
            )))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_missing_is_ok() {
        let repo = InMemoryStudentRepository::new();

        assert!(repo.delete_by_id(99).await.is_ok());
    }
}
