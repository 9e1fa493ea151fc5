use std::env;
use std::sync::{PoisonError, RwLock};

const DEFAULT_API_BASE_URL: &str = "https://api.upsun.com";

/// Source of the analytics event name attached to outgoing requests
///
/// Implementations are read on every request, so they must be cheap and safe
/// to call from concurrent requests.
pub trait EventSource: Send + Sync + 'static {
	fn event_name(&self) -> Option<String>;
}

/// Process-wide CLI settings shared between the command layer and the HTTP client
///
/// Values are resolved from an in-memory override first, and from
/// `{env_prefix}<NAME>` environment variables otherwise.
#[derive(Debug)]
pub struct Config {
	env_prefix: String,
	user_agent: Option<String>,
	event_name: RwLock<Option<String>>,
}

impl Config {
	pub fn new(env_prefix: impl Into<String>) -> Config {
		Config {
			env_prefix: env_prefix.into(),
			user_agent: None,
			event_name: RwLock::new(None),
		}
	}

	pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Config {
		self.user_agent = non_empty(user_agent.into());
		self
	}

	pub fn user_agent(&self) -> Option<&str> {
		self.user_agent.as_deref()
	}

	pub fn set_event_name(&self, name: impl Into<String>) {
		let mut slot = self.event_name.write().unwrap_or_else(PoisonError::into_inner);
		*slot = Some(name.into());
	}

	pub fn clear_event_name(&self) {
		let mut slot = self.event_name.write().unwrap_or_else(PoisonError::into_inner);
		*slot = None;
	}

	pub fn api_base_url(&self) -> String {
		self.var("API_BASE_URL")
			.unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
	}

	fn var(&self, name: &str) -> Option<String> {
		env::var(format!("{}{}", self.env_prefix, name))
			.ok()
			.and_then(non_empty)
	}
}

impl EventSource for Config {
	fn event_name(&self) -> Option<String> {
		let overridden = self
			.event_name
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.clone();

		match overridden {
			Some(name) => non_empty(name),
			None => self.var("EVENT_NAME"),
		}
	}
}

fn non_empty(value: String) -> Option<String> {
	if value.is_empty() {
		None
	} else {
		Some(value)
	}
}
