use sqlx::{pool::PoolConnection, Sqlite, SqliteConnection};

use crate::Database;

use super::model::Post;

/// Acquires a connection for the current request.
///
/// The connection goes back to the pool when dropped, on every exit path.
pub async fn connect(database: &Database) -> Result<PoolConnection<Sqlite>, sqlx::Error> {
	database.acquire().await
}

/// Returns every post in storage order.
#[tracing::instrument(skip_all)]
pub async fn list_posts(conn: &mut SqliteConnection) -> Result<Vec<Post>, sqlx::Error> {
	sqlx::query_as::<_, Post>(
		r#"
			SELECT id, title, content FROM posts
		"#,
	)
	.fetch_all(conn)
	.await
}

#[tracing::instrument(skip(conn))]
pub async fn get_post(conn: &mut SqliteConnection, id: i64) -> Result<Option<Post>, sqlx::Error> {
	sqlx::query_as::<_, Post>(
		r#"
			SELECT id, title, content FROM posts
			WHERE id = ?
		"#,
	)
	.bind(id)
	.fetch_optional(conn)
	.await
}

/// Inserts a post, returning its new id.
#[tracing::instrument(skip(conn, content))]
pub async fn insert_post(
	conn: &mut SqliteConnection,
	title: &str,
	content: &str,
) -> Result<i64, sqlx::Error> {
	let result = sqlx::query(
		r#"
			INSERT INTO posts (title, content)
			VALUES (?, ?)
		"#,
	)
	.bind(title)
	.bind(content)
	.execute(conn)
	.await?;

	Ok(result.last_insert_rowid())
}

/// Overwrites both fields of a post, returning the number of rows changed.
#[tracing::instrument(skip(conn, content))]
pub async fn update_post(
	conn: &mut SqliteConnection,
	id: i64,
	title: &str,
	content: &str,
) -> Result<u64, sqlx::Error> {
	let result = sqlx::query(
		r#"
			UPDATE posts
			SET title = ?, content = ?
			WHERE id = ?
		"#,
	)
	.bind(title)
	.bind(content)
	.bind(id)
	.execute(conn)
	.await?;

	Ok(result.rows_affected())
}

#[tracing::instrument(skip(conn))]
pub async fn delete_post(conn: &mut SqliteConnection, id: i64) -> Result<u64, sqlx::Error> {
	let result = sqlx::query(
		r#"
			DELETE FROM posts
			WHERE id = ?
		"#,
	)
	.bind(id)
	.execute(conn)
	.await?;

	Ok(result.rows_affected())
}
