use std::sync::Arc;

use axum::{
	extract::State,
	response::{IntoResponse, Redirect, Response},
};
use tera::{Context, Tera};

use crate::{
	board::Board,
	extract::{Flash, Form},
	form::OrderedForm,
	view, Error,
};

use super::{model, LISTING};

/// Lists the in-memory messages.
pub async fn list_messages(
	State(templates): State<Arc<Tera>>,
	State(board): State<Arc<Board>>,
	flash: Flash,
) -> Result<Response, Error> {
	let mut context = Context::new();
	context.insert("messages", &board.messages());

	view::render(&templates, "message.html", context, flash)
}

pub async fn create_message_form(
	State(templates): State<Arc<Tera>>,
	flash: Flash,
) -> Result<Response, Error> {
	view::render(&templates, "create_message.html", Context::new(), flash)
}

/// Appends a message, or re-renders the blank form with the first
/// failing rule.
pub async fn create_message(
	State(templates): State<Arc<Tera>>,
	State(board): State<Arc<Board>>,
	mut flash: Flash,
	Form(input): Form<model::Message>,
) -> Result<Response, Error> {
	if let Err(message) = input.check() {
		flash.push(message);

		return view::render(&templates, "create_message.html", Context::new(), flash);
	}

	board.push_message(input);

	Ok(Redirect::to(LISTING).into_response())
}
