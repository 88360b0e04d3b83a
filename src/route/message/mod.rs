use axum::{routing::get, Router};

use crate::AppState;

pub mod model;
pub mod route;

/// The canonical listing route for messages.
pub const LISTING: &str = "/messages/";

pub fn routes() -> Router<AppState> {
	use route::*;

	Router::new()
		.route(LISTING, get(list_messages))
		.route(
			"/messages/create",
			get(create_message_form).post(create_message),
		)
}
