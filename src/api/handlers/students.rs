//! Handlers for student endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::student::{StudentItem, StudentRequest};
use crate::api::extract::{ApiJson, ApiPath};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all students.
///
/// # Endpoint
///
/// `GET /students`
pub async fn student_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentItem>>, AppError> {
    let students = state.student_service.list_students().await?;

    Ok(Json(students.into_iter().map(StudentItem::from).collect()))
}

/// Returns a single student.
///
/// # Endpoint
///
/// `GET /students/{id}`
///
/// # Errors
///
/// Returns 400 if the id is not an integer.
/// Returns 404 if no student has the given id.
pub async fn get_student_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<StudentItem>, AppError> {
    let student = state.student_service.require_student(id).await?;

    Ok(Json(student.into()))
}

/// Creates a student. Any `id` in the body is ignored.
///
/// # Endpoint
///
/// `POST /students`
///
/// # Errors
///
/// Returns 400 if the body is not JSON or lacks `name`/`email`.
pub async fn create_student_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<StudentRequest>,
) -> Result<(StatusCode, Json<StudentItem>), AppError> {
    let student = state.student_service.add_student(payload.into()).await?;

    tracing::info!(id = student.id, "Student created");

    Ok((StatusCode::CREATED, Json(student.into())))
}

/// Replaces `name` and `email` of an existing student.
///
/// # Endpoint
///
/// `PUT /students/{id}`
///
/// # Errors
///
/// Returns 400 if the id is not an integer.
/// Returns 404 if no student has the given id.
pub async fn update_student_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<StudentRequest>,
) -> Result<Json<StudentItem>, AppError> {
    let student = state
        .student_service
        .update_student(id, payload.into())
        .await?;

    Ok(Json(student.into()))
}

/// Deletes a student.
///
/// # Endpoint
///
/// `DELETE /students/{id}`
///
/// Deleting an id that does not exist still returns 204.
pub async fn delete_student_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.student_service.delete_student(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
