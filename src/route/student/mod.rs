use axum::{
	routing::{get, post},
	Router,
};

use crate::AppState;

pub mod model;
pub mod route;
pub mod store;

/// The canonical listing route for students.
pub const LISTING: &str = "/students";

pub fn routes() -> Router<AppState> {
	use route::*;

	Router::new()
		.route(LISTING, get(list_students))
		.route("/student/:id", get(get_student))
		.route("/student/add", get(add_student_form).post(add_student))
		.route(
			"/student/edit/:id/",
			get(edit_student_form).post(edit_student),
		)
		.route("/student/delete/:id/", post(delete_student))
}
