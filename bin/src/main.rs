mod api;
mod cli;

use instrument::config::Config;
use std::{env, process, sync::Arc};

const ENV_PREFIX: &str = "UPSUN_CLI_";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[tokio::main]
async fn main() -> Result<(), reqwest_middleware::Error> {
	instrument::init();

	let Some(args) = cli::parse(env::args().skip(1)) else {
		eprintln!("{}", cli::USAGE);
		process::exit(2);
	};

	let config = Arc::new(Config::new(ENV_PREFIX).with_user_agent(USER_AGENT));
	config.set_event_name(args.command);

	let output = api::get(config, &args.path).await?;
	println!("{}", output);

	Ok(())
}
