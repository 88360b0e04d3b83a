use std::{borrow::Cow, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::form::{self, FieldError};

/// The difficulty of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Level {
	Beginner,
	Intermediate,
	Advanced,
}

impl Level {
	pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Beginner => "Beginner",
			Self::Intermediate => "Intermediate",
			Self::Advanced => "Advanced",
		}
	}
}

impl fmt::Display for Level {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Level {
	type Err = ValidationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.is_empty() {
			return Err(error("required", "This field is required."));
		}

		Self::ALL
			.into_iter()
			.find(|level| level.as_str() == s)
			.ok_or_else(|| error("choice", "Not a valid choice."))
	}
}

/// A course kept in memory for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
	pub title: String,
	pub description: String,
	pub price: f64,
	pub available: bool,
	pub level: Level,
}

/// The raw course form.
///
/// Every rule is checked and reported, one message per violation.
/// `available` is a checkbox, so it is only sent when ticked.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CourseForm {
	#[validate(length(
		min = 10,
		max = 100,
		message = "Title must be between 10 and 100 characters long."
	))]
	pub title: String,
	#[validate(length(
		min = 1,
		max = 200,
		message = "Description must be between 1 and 200 characters long."
	))]
	pub description: String,
	#[validate(custom(function = "validate_price"))]
	pub price: String,
	pub available: Option<String>,
	#[validate(custom(function = "validate_level"))]
	pub level: String,
}

impl CourseForm {
	pub const FIELDS: &'static [&'static str] = &["title", "description", "price", "level"];

	/// Validates every rule and coerces the fields into a [`Course`].
	pub fn validate_into(self) -> Result<Course, Vec<FieldError>> {
		self.validate()
			.map_err(|errors| form::field_errors(&errors, Self::FIELDS))?;

		let invalid = |field: &'static str, error: ValidationError| {
			vec![FieldError {
				field,
				message: error.message.unwrap_or(error.code).into_owned(),
			}]
		};

		let price = parse_price(&self.price).map_err(|error| invalid("price", error))?;
		let level = self
			.level
			.parse::<Level>()
			.map_err(|error| invalid("level", error))?;

		Ok(Course {
			title: self.title,
			description: self.description,
			price,
			available: self.available.is_some(),
			level,
		})
	}
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
	let mut error = ValidationError::new(code);
	error.message = Some(Cow::Borrowed(message));
	error
}

/// Parses a non-negative decimal price.
fn parse_price(price: &str) -> Result<f64, ValidationError> {
	let price = price.trim();

	if price.is_empty() {
		return Err(error("required", "This field is required."));
	}

	match price.parse::<f64>() {
		Ok(price) if !price.is_finite() => Err(error("decimal", "Not a valid decimal value.")),
		Ok(price) if price < 0.0 => Err(error("range", "Price must be at least 0.")),
		Ok(price) => Ok(price),
		Err(_) => Err(error("decimal", "Not a valid decimal value.")),
	}
}

fn validate_price(price: &str) -> Result<(), ValidationError> {
	parse_price(price).map(|_| ())
}

fn validate_level(level: &str) -> Result<(), ValidationError> {
	level.parse::<Level>().map(|_| ())
}
