use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::form::OrderedForm;

/// A single post, stored in the `posts` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Post {
	/// The unique identifier of the post.
	pub id: i64,
	/// The title of the post.
	pub title: String,
	/// The content of the post.
	pub content: String,
}

/// Fields submitted by the create and edit forms.
///
/// Storage accepts empty strings, so this is the only place the non-empty
/// rule is enforced.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct PostInput {
	#[validate(length(min = 1, message = "Title is required"))]
	pub title: String,
	#[validate(length(min = 1, message = "Content is required"))]
	pub content: String,
}

impl OrderedForm for PostInput {
	const FIELDS: &'static [&'static str] = &["title", "content"];
}
