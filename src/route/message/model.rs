use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::form::OrderedForm;

/// A message kept in memory for the lifetime of the process.
///
/// Doubles as the create form, since the form has exactly these fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct Message {
	#[validate(length(min = 1, message = "Title is required"))]
	pub title: String,
	#[validate(length(min = 1, message = "Content is required"))]
	pub content: String,
}

impl Message {
	pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			content: content.into(),
		}
	}
}

impl OrderedForm for Message {
	const FIELDS: &'static [&'static str] = &["title", "content"];
}
