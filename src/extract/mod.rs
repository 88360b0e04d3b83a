mod flash;

pub use flash::Flash;

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request;
use serde::de;

use crate::error::Error;

/// Extractor that deserializes an urlencoded form body.
///
/// Unlike JSON APIs, a failed rule must re-render the page the form came
/// from, so validation is left to the handler.
///
/// ```rust
/// async fn route(Form(input): Form<PostInput>) {
///   // ...
/// }
/// ```
pub struct Form<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for Form<T>
where
	T: de::DeserializeOwned,
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
		let result = axum::extract::Form::<T>::from_request(req, state).await?.0;

		Ok(Self(result))
	}
}

/// Extractor that deserializes a path parameter.
///
/// A parameter that fails to parse (such as a non-numeric id) is reported
/// as [`Error::UnknownRoute`], so it gets the same 404 page as any other
/// unmatched path.
pub struct Path<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequestParts<S> for Path<T>
where
	T: de::DeserializeOwned + Send,
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(
		parts: &mut request::Parts,
		state: &S,
	) -> Result<Self, Self::Rejection> {
		let result = axum::extract::Path::<T>::from_request_parts(parts, state)
			.await
			.map_err(|_| Error::UnknownRoute)?
			.0;

		Ok(Self(result))
	}
}
