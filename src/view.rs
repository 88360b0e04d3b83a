use std::sync::Arc;

use axum::{
	extract::State,
	http::{header, HeaderValue, StatusCode},
	response::{Html, IntoResponse, Response},
};
use tera::{Context, Tera};

use crate::{extract::Flash, flash, Error};

/// Loads every template under `dir`, named by their path relative to it.
pub fn load(dir: &str) -> Result<Tera, tera::Error> {
	let templates = Tera::new(&format!("{}/**/*", dir.trim_end_matches('/')))?;

	tracing::debug!(
		count = templates.get_template_names().count(),
		"loaded templates"
	);

	Ok(templates)
}

/// Renders the template `name` with `context`.
///
/// Flash messages are always exposed as `flashes`; if one came in through
/// the flash cookie, the response clears it so it is shown only once.
pub fn render(
	templates: &Tera,
	name: &str,
	mut context: Context,
	flash: Flash,
) -> Result<Response, Error> {
	context.insert("flashes", &flash.messages());

	let mut response = Html(templates.render(name, &context)?).into_response();

	if flash.consumed() {
		if let Ok(value) = HeaderValue::from_str(&flash::clear_cookie().to_string()) {
			response.headers_mut().append(header::SET_COOKIE, value);
		}
	}

	Ok(response)
}

/// Replaces the body of every 404 response with the custom error page.
pub async fn not_found_page(State(templates): State<Arc<Tera>>, response: Response) -> Response {
	if response.status() != StatusCode::NOT_FOUND {
		return response;
	}

	match render(&templates, "404.html", Context::new(), Flash::default()) {
		Ok(page) => (StatusCode::NOT_FOUND, page).into_response(),
		Err(error) => {
			tracing::error!(%error, "failed to render not found page");
			response
		}
	}
}
