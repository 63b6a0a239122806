//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Student`] - A stored student record
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation
//! and modification:
//! - [`NewStudent`] - For records that have not been stored yet
//! - [`StudentChanges`] - Fields copied onto an existing record by an update
//! - [`SaveStudent`] - Insert-or-update argument for the repository

pub mod student;

pub use student::{NewStudent, SaveStudent, Student, StudentChanges};
