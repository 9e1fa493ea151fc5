use super::Sub;

use std::io;
use tracing_subscriber::fmt;
use tracing_subscriber::Layer;

/// JSON lines on stderr, keeping stdout for command output
pub fn init<S: Sub + 'static>() -> impl Layer<S> {
	fmt::layer()
		.json()
		.with_current_span(true)
		.with_span_list(false)
		.with_thread_ids(true)
		.with_file(true)
		.with_line_number(true)
		.with_writer(io::stderr)
}
