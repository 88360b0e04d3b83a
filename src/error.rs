use axum::{
	body::Body,
	extract::rejection::FormRejection,
	http::{Response, StatusCode},
	response::IntoResponse,
};

/// Error type for the application.
///
/// The Display trait is not sent to the client, so it can show
/// sensitive information. Not-found variants produce a bare 404 which
/// [`crate::view::not_found_page`] then renders as the custom error page.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("unknown post {0}")]
	UnknownPost(i64),
	#[error("unknown student {0}")]
	UnknownStudent(i32),
	#[error("no route matched")]
	UnknownRoute,
	#[error("form error: {0}")]
	Form(#[from] FormRejection),
	#[error("template error: {0}")]
	Template(#[from] tera::Error),
	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),
	#[error("orm error: {0}")]
	Orm(#[from] sea_orm::DbErr),
}

impl Error {
	pub fn status(&self) -> StatusCode {
		match self {
			Self::UnknownPost(..) | Self::UnknownStudent(..) | Self::UnknownRoute => {
				StatusCode::NOT_FOUND
			}
			Self::Form(rejection) => rejection.status(),
			Self::Template(..) | Self::Database(..) | Self::Orm(..) => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> Response<Body> {
		let status = self.status();

		if status.is_server_error() {
			tracing::error!(error = %self, "request failed");
		} else {
			tracing::debug!(error = %self, "request rejected");
		}

		match self {
			Error::Form(rejection) => (status, rejection.body_text()).into_response(),
			_ => (status, status.canonical_reason().unwrap_or_default()).into_response(),
		}
	}
}

#[cfg(test)]
mod test {
	use axum::http::StatusCode;

	use super::Error;

	#[test]
	fn test_missing_resources_are_not_found() {
		assert_eq!(Error::UnknownPost(1).status(), StatusCode::NOT_FOUND);
		assert_eq!(Error::UnknownStudent(1).status(), StatusCode::NOT_FOUND);
		assert_eq!(Error::UnknownRoute.status(), StatusCode::NOT_FOUND);
	}

	#[test]
	fn test_storage_errors_are_server_errors() {
		let error = Error::from(sqlx::Error::RowNotFound);

		assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);

		let error = Error::from(sea_orm::DbErr::Custom("duplicate".into()));

		assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
	}
}
