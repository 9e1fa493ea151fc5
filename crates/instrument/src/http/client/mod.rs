mod event;
mod user_agent;

pub use self::event::{EventHeader, EventName, EVENT_HEADER};
pub use self::user_agent::UserAgent;

use crate::config::Config;
use reqwest_middleware::ClientBuilder;
use reqwest_tracing::TracingMiddleware;
use std::sync::Arc;

/// Installs the request decorators every API client should carry
///
/// The analytics event and user agent headers are attached before the
/// tracing middleware, so request spans see the headers that go on the wire.
pub fn decorate(builder: ClientBuilder, config: Arc<Config>) -> ClientBuilder {
	let user_agent = UserAgent::new(config.user_agent().unwrap_or_default());

	builder
		.with(EventHeader::new(config))
		.with(user_agent)
		.with(TracingMiddleware::default())
}
