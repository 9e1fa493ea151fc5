use super::Sub;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;

const DEFAULT_LEVEL: &str = "warn";

pub fn init<S: Sub>() -> impl Layer<S> {
	EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}
