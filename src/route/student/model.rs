use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::form::OrderedForm;

/// A single student, stored in the `students` table.
///
/// `created_at` is stamped once when the row is inserted and never
/// touched again.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
	#[sea_orm(primary_key)]
	pub id: i32,
	pub firstname: String,
	pub lastname: String,
	#[sea_orm(unique)]
	pub email: String,
	pub age: Option<i32>,
	pub created_at: DateTimeUtc,
	#[sea_orm(column_type = "Text")]
	pub bio: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
	async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
	where
		C: ConnectionTrait,
	{
		if insert {
			self.created_at = Set(chrono::Utc::now());
		}

		Ok(self)
	}
}

impl Model {
	pub fn full_name(&self) -> String {
		format!("{} {}", self.firstname, self.lastname)
	}
}

fn validate_age(age: &str) -> Result<(), ValidationError> {
	let age = age.trim();

	if age.is_empty() || age.parse::<i32>().is_ok() {
		return Ok(());
	}

	let mut error = ValidationError::new("age");
	error.message = Some("Age must be a whole number".into());

	Err(error)
}

/// Fields submitted by the add and edit forms.
///
/// `age` and `bio` are optional; leaving them empty stores `NULL`. A
/// non-empty `bio` is stored exactly as submitted.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct StudentInput {
	#[validate(length(min = 1, message = "First name is required"))]
	pub firstname: String,
	#[validate(length(min = 1, message = "Last name is required"))]
	pub lastname: String,
	#[validate(length(min = 1, message = "Email is required"))]
	pub email: String,
	#[validate(custom(function = "validate_age"))]
	pub age: String,
	pub bio: String,
}

impl StudentInput {
	pub fn age(&self) -> Option<i32> {
		self.age.trim().parse().ok()
	}

	pub fn bio(&self) -> Option<String> {
		(!self.bio.is_empty()).then(|| self.bio.clone())
	}
}

impl OrderedForm for StudentInput {
	const FIELDS: &'static [&'static str] = &["firstname", "lastname", "email", "age"];
}
