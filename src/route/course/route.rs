use std::sync::Arc;

use axum::{
	extract::State,
	response::{IntoResponse, Redirect, Response},
};
use tera::{Context, Tera};

use crate::{
	board::Board,
	extract::{Flash, Form},
	form::FieldError,
	view, Error,
};

use super::{model, LISTING};

fn form_context(errors: &[FieldError]) -> Context {
	let mut context = Context::new();
	context.insert("levels", &model::Level::ALL);
	context.insert("errors", errors);
	context
}

/// Lists the in-memory courses.
pub async fn list_courses(
	State(templates): State<Arc<Tera>>,
	State(board): State<Arc<Board>>,
	flash: Flash,
) -> Result<Response, Error> {
	let mut context = Context::new();
	context.insert("courses", &board.courses());

	view::render(&templates, "courses.html", context, flash)
}

pub async fn add_course_form(
	State(templates): State<Arc<Tera>>,
	flash: Flash,
) -> Result<Response, Error> {
	view::render(&templates, "course_add.html", form_context(&[]), flash)
}

/// Appends a course once every field rule passes, otherwise re-renders the
/// form with one message per violated rule.
pub async fn add_course(
	State(templates): State<Arc<Tera>>,
	State(board): State<Arc<Board>>,
	flash: Flash,
	Form(input): Form<model::CourseForm>,
) -> Result<Response, Error> {
	match input.validate_into() {
		Ok(course) => {
			tracing::info!(title = %course.title, "added course");
			board.push_course(course);

			Ok(Redirect::to(LISTING).into_response())
		}
		Err(errors) => view::render(&templates, "course_add.html", form_context(&errors), flash),
	}
}
