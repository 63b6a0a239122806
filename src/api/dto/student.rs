//! DTOs for student endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewStudent, Student, StudentChanges};

/// Request body for `POST /students` and `PUT /students/{id}`.
///
/// An `id` field, if sent, is ignored: the store assigns ids on create and
/// the path decides which record an update touches.
#[derive(Debug, Deserialize)]
pub struct StudentRequest {
    pub name: String,
    pub email: String,
}

impl From<StudentRequest> for NewStudent {
    fn from(req: StudentRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
        }
    }
}

impl From<StudentRequest> for StudentChanges {
    fn from(req: StudentRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
        }
    }
}

/// Student as returned by the API.
#[derive(Debug, Serialize)]
pub struct StudentItem {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<Student> for StudentItem {
    fn from(s: Student) -> Self {
        Self {
            id: s.id,
            name: s.name,
            email: s.email,
        }
    }
}
