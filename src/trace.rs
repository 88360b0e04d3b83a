use tracing::{level_filters::LevelFilter, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes the global tracing subscriber.
///
/// Debug builds log at `DEBUG` so request spans from the trace layer are
/// visible, release builds at `INFO`.
pub fn init_tracing_subscriber() {
	let level = if cfg!(debug_assertions) {
		Level::DEBUG
	} else {
		Level::INFO
	};

	tracing_subscriber::registry()
		.with(LevelFilter::from_level(level))
		.with(tracing_subscriber::fmt::layer().with_ansi(true))
		.init();
}
