use std::num::ParseIntError;

pub const DEFAULT_POSTS_DATABASE_URL: &str = "sqlite:database.db?mode=rwc";
pub const DEFAULT_STUDENTS_DATABASE_URL: &str = "sqlite:students.db?mode=rwc";
pub const DEFAULT_TEMPLATES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("PORT must be a number: {0}")]
	Port(#[from] ParseIntError),
}

/// Runtime settings, read from the environment (and `.env`, if present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	pub posts_database_url: String,
	pub students_database_url: String,
	pub templates_dir: String,
	pub host: String,
	pub port: u16,
}

impl Config {
	pub fn from_env() -> Result<Self, Error> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Builds the config from any key lookup, falling back to defaults for
	/// keys that are absent.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
		let or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

		let port = match lookup("PORT") {
			Some(port) => port.parse()?,
			None => DEFAULT_PORT,
		};

		Ok(Self {
			posts_database_url: or("POSTS_DATABASE_URL", DEFAULT_POSTS_DATABASE_URL),
			students_database_url: or("STUDENTS_DATABASE_URL", DEFAULT_STUDENTS_DATABASE_URL),
			templates_dir: or("TEMPLATES_DIR", DEFAULT_TEMPLATES_DIR),
			host: or("HOST", DEFAULT_HOST),
			port,
		})
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = Config::from_lookup(|_| None).unwrap();

		assert_eq!(config.posts_database_url, DEFAULT_POSTS_DATABASE_URL);
		assert_eq!(config.students_database_url, DEFAULT_STUDENTS_DATABASE_URL);
		assert_eq!(config.port, DEFAULT_PORT);
	}

	#[test]
	fn test_overrides() {
		let config = Config::from_lookup(|key| match key {
			"PORT" => Some("8080".into()),
			"HOST" => Some("0.0.0.0".into()),
			_ => None,
		})
		.unwrap();

		assert_eq!(config.port, 8080);
		assert_eq!(config.host, "0.0.0.0");
	}

	#[test]
	fn test_bad_port() {
		let config = Config::from_lookup(|key| (key == "PORT").then(|| "abc".into()));

		assert!(matches!(config, Err(Error::Port(..))));
	}
}
