/// Parsed command line: the command being run and the API path it reads
#[derive(Debug, PartialEq, Eq)]
pub struct Args {
	pub command: String,
	pub path: String,
}

pub const USAGE: &str = "usage: cli <command> [path]";

pub fn parse(args: impl IntoIterator<Item = String>) -> Option<Args> {
	let mut args = args.into_iter();
	let command = args.next().filter(|c| !c.is_empty())?;

	let path = match args.next() {
		Some(path) => path,
		None => default_path(&command)?.to_string(),
	};

	Some(Args { command, path })
}

fn default_path(command: &str) -> Option<&'static str> {
	match command {
		"auth:info" => Some("/users/me"),
		"org:list" => Some("/organizations"),
		"project:list" => Some("/projects"),
		_ => None,
	}
}
