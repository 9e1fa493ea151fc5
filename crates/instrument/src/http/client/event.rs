use crate::config::EventSource;

use async_trait::async_trait;
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};
use std::sync::Arc;
use task_local_extensions::Extensions;
use tracing::warn;

pub static EVENT_HEADER: HeaderName = HeaderName::from_static("x-cli-event");

/// Per-request event name, set through `RequestBuilder::with_extension`
///
/// Takes precedence over the configured event name when non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventName(pub String);

/// Middleware that tags outgoing requests with the `X-CLI-Event` header
///
/// The event name is looked up on every request, so changes made to the
/// source after the client is built are picked up. When no event name is
/// available the request goes through untouched.
///
/// An event name that is not a valid header value is dropped with a warning
/// and the request is still sent, rather than failing it.
pub struct EventHeader {
	source: Arc<dyn EventSource>,
}

impl EventHeader {
	pub fn new(source: Arc<dyn EventSource>) -> EventHeader {
		EventHeader { source }
	}

	fn resolve(&self, extensions: &Extensions) -> Option<String> {
		match extensions.get::<EventName>() {
			Some(EventName(name)) if !name.is_empty() => Some(name.clone()),
			_ => self.source.event_name().filter(|name| !name.is_empty()),
		}
	}
}

#[async_trait]
impl Middleware for EventHeader {
	async fn handle(
		&self,
		mut req: Request,
		extensions: &mut Extensions,
		next: Next<'_>,
	) -> reqwest_middleware::Result<Response> {
		if let Some(name) = self.resolve(extensions) {
			match HeaderValue::from_str(&name) {
				Ok(value) => {
					req.headers_mut().insert(EVENT_HEADER.clone(), value);
				}
				Err(_) => warn!(event = %name, "event name is not a valid header value"),
			}
		}

		next.run(req, extensions).await
	}
}
