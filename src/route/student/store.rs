use sea_orm::{
	ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
	QueryOrder, Schema, Set, TransactionTrait,
};

use crate::Error;

use super::model::{self, ActiveModel, Entity as Student, StudentInput};

/// Creates the `students` table from the entity definition, if missing.
pub async fn init(db: &DatabaseConnection) -> Result<(), DbErr> {
	let backend = db.get_database_backend();
	let mut table = Schema::new(backend).create_table_from_entity(Student);
	table.if_not_exists();

	db.execute(backend.build(&table)).await?;

	Ok(())
}

#[tracing::instrument(skip_all)]
pub async fn list(db: &DatabaseConnection) -> Result<Vec<model::Model>, DbErr> {
	Student::find()
		.order_by_asc(model::Column::Id)
		.all(db)
		.await
}

/// Looks up a student, turning a missing row into a 404.
#[tracing::instrument(skip(db))]
pub async fn get_or_404(db: &DatabaseConnection, id: i32) -> Result<model::Model, Error> {
	Student::find_by_id(id)
		.one(db)
		.await?
		.ok_or(Error::UnknownStudent(id))
}

/// Inserts a student and commits.
///
/// A duplicate email fails the insert and the transaction is rolled back.
#[tracing::instrument(skip_all)]
pub async fn create(db: &DatabaseConnection, input: &StudentInput) -> Result<model::Model, DbErr> {
	let txn = db.begin().await?;

	let student = ActiveModel {
		firstname: Set(input.firstname.clone()),
		lastname: Set(input.lastname.clone()),
		email: Set(input.email.clone()),
		age: Set(input.age()),
		bio: Set(input.bio()),
		..Default::default()
	}
	.insert(&txn)
	.await?;

	txn.commit().await?;

	Ok(student)
}

/// Replaces every mutable field of `student` and commits.
#[tracing::instrument(skip_all, fields(id = student.id))]
pub async fn update(
	db: &DatabaseConnection,
	student: model::Model,
	input: &StudentInput,
) -> Result<model::Model, DbErr> {
	let txn = db.begin().await?;

	let mut active: ActiveModel = student.into();
	active.firstname = Set(input.firstname.clone());
	active.lastname = Set(input.lastname.clone());
	active.email = Set(input.email.clone());
	active.age = Set(input.age());
	active.bio = Set(input.bio());

	let student = active.update(&txn).await?;

	txn.commit().await?;

	Ok(student)
}

#[tracing::instrument(skip_all, fields(id = student.id))]
pub async fn delete(db: &DatabaseConnection, student: model::Model) -> Result<(), DbErr> {
	let txn = db.begin().await?;

	student.delete(&txn).await?;

	txn.commit().await
}
