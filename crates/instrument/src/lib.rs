pub mod config;
pub mod http;
mod level;
mod logs;

use tracing_core::Subscriber;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub trait Sub: Subscriber + for<'span> LookupSpan<'span> {}
impl<T: Subscriber + for<'span> LookupSpan<'span>> Sub for T {}

pub fn init() {
	tracing_subscriber::registry()
		.with(level::init())
		.with(logs::init())
		.try_init()
		.expect("Unable to register tracing subscriber");
}
