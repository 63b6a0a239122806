//! Student API route configuration.

use crate::api::handlers::{
    create_student_handler, delete_student_handler, get_student_handler, student_list_handler,
    update_student_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Student CRUD routes, nested under `/students` by the top-level router.
///
/// # Endpoints
///
/// - `GET    /`      - List all students
/// - `POST   /`      - Create a student
/// - `GET    /{id}`  - Get a student
/// - `PUT    /{id}`  - Update a student's name and email
/// - `DELETE /{id}`  - Delete a student
pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(student_list_handler).post(create_student_handler))
        .route(
            "/{id}",
            get(get_student_handler)
                .put(update_student_handler)
                .delete(delete_student_handler),
        )
}
