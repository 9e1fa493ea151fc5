use async_trait::async_trait;
use reqwest::header::{HeaderValue, USER_AGENT};
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Middleware to fill in the `User-Agent` header when the request lacks one
///
/// An empty `User-Agent` counts as missing.
pub struct UserAgent {
	value: Option<HeaderValue>,
}

impl UserAgent {
	pub fn new(user_agent: &str) -> UserAgent {
		let value = match user_agent {
			"" => None,
			ua => HeaderValue::from_str(ua).ok(),
		};

		UserAgent { value }
	}
}

#[async_trait]
impl Middleware for UserAgent {
	async fn handle(
		&self,
		mut req: Request,
		extensions: &mut Extensions,
		next: Next<'_>,
	) -> reqwest_middleware::Result<Response> {
		if let Some(value) = &self.value {
			let missing = req
				.headers()
				.get(USER_AGENT)
				.map_or(true, |ua| ua.is_empty());

			if missing {
				req.headers_mut().insert(USER_AGENT, value.clone());
			}
		}

		next.run(req, extensions).await
	}
}
