//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and
//! are implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`StudentRepository`] - Student CRUD operations

pub mod student_repository;

pub use student_repository::StudentRepository;

#[cfg(test)]
pub use student_repository::MockStudentRepository;
