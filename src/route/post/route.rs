use std::sync::Arc;

use axum::{
	extract::State,
	response::{IntoResponse, Redirect, Response},
};
use sqlx::SqliteConnection;
use tera::{Context, Tera};

use crate::{
	extract::{Flash, Form, Path},
	flash,
	form::OrderedForm,
	view, Database, Error,
};

use super::{model, store, LISTING};

/// Looks up a post, turning a missing row into a 404.
async fn find_post(conn: &mut SqliteConnection, id: i64) -> Result<model::Post, Error> {
	store::get_post(conn, id)
		.await?
		.ok_or(Error::UnknownPost(id))
}

fn edit_context(post: &model::Post) -> Context {
	let mut context = Context::new();
	context.insert("post", post);
	context
}

/// Lists every post.
pub async fn list_posts(
	State(database): State<Database>,
	State(templates): State<Arc<Tera>>,
	flash: Flash,
) -> Result<Response, Error> {
	let mut conn = store::connect(&database).await?;
	let posts = store::list_posts(&mut conn).await?;

	let mut context = Context::new();
	context.insert("posts", &posts);

	view::render(&templates, "dbcourse.html", context, flash)
}

pub async fn create_post_form(
	State(templates): State<Arc<Tera>>,
	flash: Flash,
) -> Result<Response, Error> {
	view::render(&templates, "dbcourse_create.html", Context::new(), flash)
}

/// Inserts a post, or re-renders the blank form with the first failing rule.
pub async fn create_post(
	State(database): State<Database>,
	State(templates): State<Arc<Tera>>,
	mut flash: Flash,
	Form(input): Form<model::PostInput>,
) -> Result<Response, Error> {
	if let Err(message) = input.check() {
		flash.push(message);

		return view::render(&templates, "dbcourse_create.html", Context::new(), flash);
	}

	let mut conn = store::connect(&database).await?;
	let id = store::insert_post(&mut conn, &input.title, &input.content).await?;

	tracing::info!(id, "created post");

	Ok(Redirect::to(LISTING).into_response())
}

/// Shows the edit form filled with the stored values.
pub async fn edit_post_form(
	State(database): State<Database>,
	State(templates): State<Arc<Tera>>,
	flash: Flash,
	Path(id): Path<i64>,
) -> Result<Response, Error> {
	let mut conn = store::connect(&database).await?;
	let post = find_post(&mut conn, id).await?;

	view::render(&templates, "dbcourse_edit.html", edit_context(&post), flash)
}

/// Overwrites a post. The post must exist before the body is even parsed.
pub async fn edit_post(
	State(database): State<Database>,
	State(templates): State<Arc<Tera>>,
	mut flash: Flash,
	Path(id): Path<i64>,
	form: Result<Form<model::PostInput>, Error>,
) -> Result<Response, Error> {
	let mut conn = store::connect(&database).await?;
	let post = find_post(&mut conn, id).await?;
	let Form(input) = form?;

	if let Err(message) = input.check() {
		flash.push(message);

		return view::render(&templates, "dbcourse_edit.html", edit_context(&post), flash);
	}

	store::update_post(&mut conn, id, &input.title, &input.content).await?;

	tracing::info!(id, "updated post");

	Ok(Redirect::to(LISTING).into_response())
}

/// Deletes a post, leaving a confirmation that names it.
pub async fn delete_post(
	State(database): State<Database>,
	Path(id): Path<i64>,
) -> Result<Response, Error> {
	let mut conn = store::connect(&database).await?;
	let post = find_post(&mut conn, id).await?;

	store::delete_post(&mut conn, id).await?;

	tracing::info!(id, "deleted post");

	let message = format!("\"{}\" was successfully deleted!", post.title);

	Ok(flash::redirect_with(LISTING, &message).into_response())
}
