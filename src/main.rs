#![warn(clippy::pedantic)]

mod board;
mod config;
mod error;
mod extract;
mod flash;
mod form;
mod route;
#[cfg(test)]
mod test;
mod trace;
mod view;

use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

pub use error::Error;

/// Connection pool for the raw SQL `posts` database.
pub type Database = sqlx::SqlitePool;
pub type AppState = State;

/// The shared application state.
///
/// Both databases are reached through handles that hand out one connection
/// (or transaction) per request. The in-memory [`board::Board`] is the only
/// process-wide mutable data.
#[derive(Clone, axum::extract::FromRef)]
pub struct State {
	pub database: Database,
	pub students: sea_orm::DatabaseConnection,
	pub templates: Arc<tera::Tera>,
	pub board: Arc<board::Board>,
}

/// Builds the full router with every resource mounted.
pub fn app(state: State) -> Router {
	Router::new()
		.merge(route::page::routes())
		.merge(route::message::routes())
		.merge(route::course::routes())
		.merge(route::post::routes())
		.merge(route::student::routes())
		.fallback(route::page::not_found)
		.layer(middleware::map_response_with_state(
			state.clone(),
			view::not_found_page,
		))
		.layer(TraceLayer::new_for_http())
		.with_state(state)
}

#[tokio::main]
async fn main() {
	trace::init_tracing_subscriber();
	dotenvy::dotenv().ok();

	let config = config::Config::from_env().expect("invalid configuration");

	let database = Database::connect(&config.posts_database_url)
		.await
		.expect("failed to connect to posts database");

	sqlx::migrate!()
		.run(&database)
		.await
		.expect("failed to prepare posts table");

	let students = sea_orm::Database::connect(config.students_database_url.as_str())
		.await
		.expect("failed to connect to students database");

	route::student::store::init(&students)
		.await
		.expect("failed to prepare students table");

	let templates = view::load(&config.templates_dir).expect("failed to load templates");

	let state = State {
		database,
		students,
		templates: Arc::new(templates),
		board: Arc::new(board::Board::seeded()),
	};

	let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
		.await
		.expect("failed to bind to port");

	tracing::info!("listening on {}:{}", config.host, config.port);

	axum::serve(listener, app(state))
		.await
		.expect("server error");
}
