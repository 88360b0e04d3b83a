use axum::{
	http::header,
	response::{IntoResponse, Redirect},
};

pub const COOKIE_NAME: &str = "flash";

/// Creates a flash cookie carrying `message` to the next rendered page.
///
/// The value is percent-encoded when written, so it may hold any text.
pub fn create_cookie(message: &str) -> cookie::Cookie<'static> {
	cookie::Cookie::build((COOKIE_NAME, message.to_owned()))
		.http_only(true)
		.path("/")
		.into()
}

/// Creates an empty flash cookie used to discard one that has been shown
pub fn clear_cookie() -> cookie::Cookie<'static> {
	cookie::Cookie::build(COOKIE_NAME)
		.http_only(true)
		.path("/")
		.max_age(cookie::time::Duration::ZERO)
		.into()
}

/// Redirects (303) to `to`, leaving `message` for the next page to show.
pub fn redirect_with(to: &str, message: &str) -> impl IntoResponse {
	let cookie = create_cookie(message);

	(
		[(header::SET_COOKIE, cookie.encoded().to_string())],
		Redirect::to(to),
	)
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_cookie_is_encoded() {
		let cookie = create_cookie("\"First Post\" was successfully deleted!");
		let encoded = cookie.encoded().to_string();

		assert!(encoded.starts_with("flash="));
		assert!(!encoded.contains('"'));

		let parsed = cookie::Cookie::parse_encoded(encoded).unwrap();

		assert_eq!(parsed.value(), "\"First Post\" was successfully deleted!");
	}

	#[test]
	fn test_clear_cookie_expires() {
		let cookie = clear_cookie();

		assert_eq!(cookie.value(), "");
		assert_eq!(cookie.max_age(), Some(cookie::time::Duration::ZERO));
	}
}
