use instrument::config::Config;
use instrument::http::client;
use reqwest::Client;
use reqwest_middleware::ClientBuilder;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

pub async fn get(config: Arc<Config>, path: &str) -> reqwest_middleware::Result<String> {
	let url = format!("{}{}", config.api_base_url().trim_end_matches('/'), path);

	let client = client::decorate(ClientBuilder::new(Client::new()), config).build();

	info!(url = %url, "requesting");

	let response = client.get(&url).send().await?.error_for_status()?;
	let text = response.text().await?;

	Ok(render(&text))
}

fn render(text: &str) -> String {
	serde_json::from_str::<Value>(text)
		.and_then(|value| serde_json::to_string_pretty(&value))
		.unwrap_or_else(|_| text.to_string())
}
