use serde::Serialize;
use validator::{Validate, ValidationErrors};

/// A single violated rule, as shown next to a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
	pub field: &'static str,
	pub message: String,
}

/// A form whose rules are checked in a fixed field order, reporting only
/// the first one that fails.
pub trait OrderedForm: Validate {
	/// Field names, in the order their rules are reported.
	const FIELDS: &'static [&'static str];

	/// Returns the message of the first failing rule, if any.
	fn check(&self) -> Result<(), String> {
		self.validate().map_err(|errors| {
			field_errors(&errors, Self::FIELDS)
				.into_iter()
				.next()
				.map_or_else(|| errors.to_string(), |error| error.message)
		})
	}
}

/// Flattens validation errors into one [`FieldError`] per violated rule,
/// following `order`.
pub fn field_errors(errors: &ValidationErrors, order: &[&'static str]) -> Vec<FieldError> {
	let by_field = errors.field_errors();

	order
		.iter()
		.filter_map(|field| by_field.get(*field).map(|errors| (*field, errors)))
		.flat_map(|(field, errors)| {
			errors.iter().map(move |error| FieldError {
				field,
				message: error
					.message
					.as_ref()
					.map_or_else(|| error.code.to_string(), ToString::to_string),
			})
		})
		.collect()
}
