use std::sync::Arc;

use axum::{extract::State, response::Response, routing::get, Router};
use tera::{Context, Tera};

use crate::{extract::Flash, view, AppState, Error};

pub const COMMENTS: [&str; 4] = [
	"This is the first comment.",
	"This is the second comment.",
	"This is the third comment.",
	"This is the fourth comment.",
];

pub fn routes() -> Router<AppState> {
	Router::new()
		.route("/", get(index))
		.route("/about/", get(about))
		.route("/comments/", get(comments))
}

/// Landing page, showing the current UTC time.
pub async fn index(State(templates): State<Arc<Tera>>, flash: Flash) -> Result<Response, Error> {
	let mut context = Context::new();
	context.insert(
		"utc_dt",
		&chrono::Utc::now()
			.format("%Y-%m-%d %H:%M:%S UTC")
			.to_string(),
	);

	view::render(&templates, "index.html", context, flash)
}

pub async fn about(State(templates): State<Arc<Tera>>, flash: Flash) -> Result<Response, Error> {
	view::render(&templates, "about.html", Context::new(), flash)
}

pub async fn comments(
	State(templates): State<Arc<Tera>>,
	flash: Flash,
) -> Result<Response, Error> {
	let mut context = Context::new();
	context.insert("comments", &COMMENTS);

	view::render(&templates, "comments.html", context, flash)
}

/// Fallback for every unmatched route.
pub async fn not_found() -> Error {
	Error::UnknownRoute
}

#[cfg(test)]
mod test {
	use crate::test::*;

	#[sqlx::test]
	async fn test_static_pages(pool: Database) {
		let app = app(pool).await;

		let response = app.get("/").await;

		assert_eq!(response.status_code(), StatusCode::OK);
		assert!(response.text().contains("UTC"));

		let response = app.get("/about/").await;

		assert_eq!(response.status_code(), StatusCode::OK);

		let response = app.get("/comments/").await;

		assert_eq!(response.status_code(), StatusCode::OK);
		assert!(response.text().contains("This is the fourth comment."));
	}

	#[sqlx::test]
	async fn test_unknown_route_renders_custom_page(pool: Database) {
		let app = app(pool).await;

		let response = app.get("/no/such/page").await;

		assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
		assert!(response.text().contains("Page Not Found"));
	}
}
