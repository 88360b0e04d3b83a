use std::convert::Infallible;

use axum::{
	extract::FromRequestParts,
	http::{header, request},
};

use crate::flash;

/// Flash messages for the page being rendered.
///
/// Holds the message left by a previous redirect (if any) and the messages
/// raised while handling this request. Rendering through
/// [`crate::view::render`] shows all of them and clears the cookie.
///
/// ```rust
/// async fn route(mut flash: Flash) {
///   flash.push("Title is required");
/// }
/// ```
#[derive(Debug, Default)]
pub struct Flash {
	incoming: Option<String>,
	pending: Vec<String>,
}

impl Flash {
	pub fn push(&mut self, message: impl Into<String>) {
		self.pending.push(message.into());
	}

	/// All messages, oldest first.
	pub fn messages(&self) -> Vec<&str> {
		self.incoming
			.iter()
			.chain(&self.pending)
			.map(String::as_str)
			.collect()
	}

	/// Whether the request carried a flash cookie that must now be cleared.
	pub fn consumed(&self) -> bool {
		self.incoming.is_some()
	}
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for Flash
where
	S: Sync + Send,
{
	type Rejection = Infallible;

	/// Reads the flash cookie, ignoring it when it is empty or malformed.
	async fn from_request_parts(
		parts: &mut request::Parts,
		_state: &S,
	) -> Result<Self, Self::Rejection> {
		let incoming = parts
			.headers
			.get_all(header::COOKIE)
			.into_iter()
			.filter_map(|value| value.to_str().ok())
			.flat_map(cookie::Cookie::split_parse_encoded)
			.filter_map(Result::ok)
			.find(|cookie| cookie.name() == flash::COOKIE_NAME)
			.map(|cookie| cookie.value().to_owned())
			.filter(|message| !message.is_empty());

		Ok(Self {
			incoming,
			pending: Vec::new(),
		})
	}
}
