use axum::{
	routing::{get, post},
	Router,
};

use crate::AppState;

pub mod model;
pub mod route;
pub mod store;

/// The canonical listing route for posts.
pub const LISTING: &str = "/dbcourse";

pub fn routes() -> Router<AppState> {
	use route::*;

	Router::new()
		.route(LISTING, get(list_posts))
		.route(
			"/dbcourse/create",
			get(create_post_form).post(create_post),
		)
		.route("/dbcourse/edit/:id", get(edit_post_form).post(edit_post))
		.route("/dbcourse/delete/:id", post(delete_post))
}

#[cfg(test)]
mod test {
	use crate::route::post::store;
	use crate::test::*;

	async fn count(pool: &Database) -> usize {
		let mut conn = store::connect(pool).await.unwrap();

		store::list_posts(&mut conn).await.unwrap().len()
	}

	#[sqlx::test]
	async fn test_create_then_list(pool: Database) {
		let app = app(pool.clone()).await;

		let response = app
			.post("/dbcourse/create")
			.form(&[("title", "First Post"), ("content", "Hello, posts")])
			.await;

		assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
		assert_eq!(response.header("location"), "/dbcourse");

		let mut conn = store::connect(&pool).await.unwrap();
		let posts = store::list_posts(&mut conn).await.unwrap();

		assert_eq!(posts.len(), 1);
		assert_eq!(posts[0].title, "First Post");
		assert_eq!(posts[0].content, "Hello, posts");

		let response = app.get("/dbcourse").await;

		assert_eq!(response.status_code(), StatusCode::OK);
		assert!(response.text().contains("Hello, posts"));
	}

	#[sqlx::test]
	async fn test_empty_fields_rerender(pool: Database) {
		let app = app(pool.clone()).await;

		for (title, content, message) in [
			("", "some content", "Title is required"),
			("", "", "Title is required"),
			("A title", "", "Content is required"),
		] {
			let response = app
				.post("/dbcourse/create")
				.form(&[("title", title), ("content", content)])
				.await;

			assert_eq!(response.status_code(), StatusCode::OK);
			assert!(response.text().contains(message));
		}

		assert_eq!(count(&pool).await, 0);
	}

	#[sqlx::test]
	async fn test_missing_fields_rerender(pool: Database) {
		let app = app(pool.clone()).await;

		let response = app.post("/dbcourse/create").form(&[("content", "x")]).await;

		assert_eq!(response.status_code(), StatusCode::OK);
		assert_eq!(count(&pool).await, 0);
	}

	#[sqlx::test]
	async fn test_edit_post(pool: Database) {
		let mut conn = store::connect(&pool).await.unwrap();
		let id = store::insert_post(&mut conn, "Draft", "draft body")
			.await
			.unwrap();
		drop(conn);

		let app = app(pool.clone()).await;

		let response = app.get(&format!("/dbcourse/edit/{id}")).await;

		assert_eq!(response.status_code(), StatusCode::OK);
		assert!(response.text().contains("draft body"));

		let response = app
			.post(&format!("/dbcourse/edit/{id}"))
			.form(&[("title", "Final"), ("content", "final body")])
			.await;

		assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
		assert_eq!(response.header("location"), "/dbcourse");

		let mut conn = store::connect(&pool).await.unwrap();
		let post = store::get_post(&mut conn, id).await.unwrap().unwrap();

		assert_eq!(post.title, "Final");
		assert_eq!(post.content, "final body");
	}

	#[sqlx::test]
	async fn test_edit_with_empty_title_keeps_post(pool: Database) {
		let mut conn = store::connect(&pool).await.unwrap();
		let id = store::insert_post(&mut conn, "Keep", "me").await.unwrap();
		drop(conn);

		let app = app(pool.clone()).await;

		let response = app
			.post(&format!("/dbcourse/edit/{id}"))
			.form(&[("title", ""), ("content", "changed")])
			.await;

		assert_eq!(response.status_code(), StatusCode::OK);
		assert!(response.text().contains("Title is required"));

		let mut conn = store::connect(&pool).await.unwrap();
		let post = store::get_post(&mut conn, id).await.unwrap().unwrap();

		assert_eq!(post.content, "me");
	}

	#[sqlx::test]
	async fn test_unknown_post_is_not_found(pool: Database) {
		let app = app(pool).await;

		let response = app.get("/dbcourse/edit/999").await;

		assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
		assert!(response.text().contains("Page Not Found"));

		let response = app
			.post("/dbcourse/edit/999")
			.form(&[("title", "a"), ("content", "b")])
			.await;

		assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

		// no body at all still reports the missing post
		let response = app.post("/dbcourse/edit/999").await;

		assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

		let response = app.post("/dbcourse/delete/999").await;

		assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

		let response = app.get("/dbcourse/edit/not-a-number").await;

		assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
	}

	#[sqlx::test]
	async fn test_delete_post(pool: Database) {
		let mut conn = store::connect(&pool).await.unwrap();
		let id = store::insert_post(&mut conn, "Doomed", "bye").await.unwrap();
		drop(conn);

		let app = app(pool.clone()).await;

		let response = app.post(&format!("/dbcourse/delete/{id}")).await;

		assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
		assert_eq!(response.header("location"), "/dbcourse");

		// the confirmation is shown once, on the next rendered page
		let response = app.get("/dbcourse").await;

		assert!(response.text().contains("was successfully deleted!"));
		assert!(response.text().contains("Doomed"));

		let response = app.get("/dbcourse").await;

		assert!(!response.text().contains("was successfully deleted!"));

		let response = app.get(&format!("/dbcourse/edit/{id}")).await;

		assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
		assert_eq!(count(&pool).await, 0);
	}
}
