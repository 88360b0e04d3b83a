//! Shared helpers for router tests.

use std::sync::Arc;

pub use axum::http::StatusCode;
pub use axum_test::TestServer;

pub use crate::Database;
use crate::{board::Board, config, route, view, State};

/// A fresh, empty in-memory students database.
pub async fn students() -> sea_orm::DatabaseConnection {
	let mut options = sea_orm::ConnectOptions::new("sqlite::memory:");
	// every connection to `:memory:` is a separate database
	options.max_connections(1).sqlx_logging(false);

	let db = sea_orm::Database::connect(options)
		.await
		.expect("failed to open students database");

	route::student::store::init(&db)
		.await
		.expect("failed to create students table");

	db
}

/// Application state around the migrated posts pool from `#[sqlx::test]`.
pub async fn state(pool: Database) -> State {
	let templates =
		view::load(config::DEFAULT_TEMPLATES_DIR).expect("failed to load templates");

	State {
		database: pool,
		students: students().await,
		templates: Arc::new(templates),
		board: Arc::new(Board::seeded()),
	}
}

/// A test server that keeps cookies between requests, so flash messages
/// survive redirects like they do in a browser.
pub fn server(state: State) -> TestServer {
	let config = axum_test::TestServerConfig {
		save_cookies: true,
		..axum_test::TestServerConfig::default()
	};

	TestServer::new_with_config(crate::app(state), config).expect("failed to start test server")
}

pub async fn app(pool: Database) -> TestServer {
	server(state(pool).await)
}
