use std::sync::Arc;

use axum::{
	extract::State,
	response::{IntoResponse, Redirect, Response},
};
use sea_orm::DatabaseConnection;
use tera::{Context, Tera};

use crate::{
	extract::{Flash, Form, Path},
	flash,
	form::OrderedForm,
	view, Error,
};

use super::{model, store, LISTING};

fn student_context(student: &model::Model) -> Context {
	let mut context = Context::new();
	context.insert("student", student);
	context
}

/// Lists every student.
pub async fn list_students(
	State(db): State<DatabaseConnection>,
	State(templates): State<Arc<Tera>>,
	flash: Flash,
) -> Result<Response, Error> {
	let students = store::list(&db).await?;

	let mut context = Context::new();
	context.insert("students", &students);

	view::render(&templates, "students.html", context, flash)
}

pub async fn get_student(
	State(db): State<DatabaseConnection>,
	State(templates): State<Arc<Tera>>,
	flash: Flash,
	Path(id): Path<i32>,
) -> Result<Response, Error> {
	let student = store::get_or_404(&db, id).await?;

	view::render(&templates, "student.html", student_context(&student), flash)
}

pub async fn add_student_form(
	State(templates): State<Arc<Tera>>,
	flash: Flash,
) -> Result<Response, Error> {
	view::render(&templates, "student_add.html", Context::new(), flash)
}

/// Creates a student, or re-renders the blank form with the first failing
/// rule. A duplicate email is a storage error and is not caught here.
pub async fn add_student(
	State(db): State<DatabaseConnection>,
	State(templates): State<Arc<Tera>>,
	mut flash: Flash,
	Form(input): Form<model::StudentInput>,
) -> Result<Response, Error> {
	if let Err(message) = input.check() {
		flash.push(message);

		return view::render(&templates, "student_add.html", Context::new(), flash);
	}

	let student = store::create(&db, &input).await?;

	tracing::info!(id = student.id, "created student");

	Ok(Redirect::to(LISTING).into_response())
}

/// Shows the edit form filled with the stored values.
pub async fn edit_student_form(
	State(db): State<DatabaseConnection>,
	State(templates): State<Arc<Tera>>,
	flash: Flash,
	Path(id): Path<i32>,
) -> Result<Response, Error> {
	let student = store::get_or_404(&db, id).await?;

	view::render(
		&templates,
		"student_edit.html",
		student_context(&student),
		flash,
	)
}

/// Replaces every mutable field. The student must exist before the body is
/// even parsed.
pub async fn edit_student(
	State(db): State<DatabaseConnection>,
	State(templates): State<Arc<Tera>>,
	mut flash: Flash,
	Path(id): Path<i32>,
	form: Result<Form<model::StudentInput>, Error>,
) -> Result<Response, Error> {
	let student = store::get_or_404(&db, id).await?;
	let Form(input) = form?;

	if let Err(message) = input.check() {
		flash.push(message);

		return view::render(
			&templates,
			"student_edit.html",
			student_context(&student),
			flash,
		);
	}

	store::update(&db, student, &input).await?;

	tracing::info!(id, "updated student");

	Ok(Redirect::to(LISTING).into_response())
}

/// Deletes a student, leaving a confirmation that names them.
pub async fn delete_student(
	State(db): State<DatabaseConnection>,
	Path(id): Path<i32>,
) -> Result<Response, Error> {
	let student = store::get_or_404(&db, id).await?;
	let message = format!("\"{}\" was successfully deleted!", student.full_name());

	store::delete(&db, student).await?;

	tracing::info!(id, "deleted student");

	Ok(flash::redirect_with(LISTING, &message).into_response())
}
