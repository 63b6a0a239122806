//! Repository implementations.
//!
//! # Repositories
//!
//! - [`PgStudentRepository`] - PostgreSQL storage using SQLx
//! - [`InMemoryStudentRepository`] - process-local storage for development and tests

pub mod memory_student_repository;
pub mod pg_student_repository;

pub use memory_student_repository::InMemoryStudentRepository;
pub use pg_student_repository::PgStudentRepository;
