use axum::{routing::get, Router};

use crate::AppState;

pub mod model;
pub mod route;

/// The canonical listing route for courses.
pub const LISTING: &str = "/course";

pub fn routes() -> Router<AppState> {
	use route::*;

	Router::new()
		.route(LISTING, get(list_courses))
		.route("/course/add", get(add_course_form).post(add_course))
}
