use std::env;
use log::error;

mod app;
mod commands;
mod keys;

fn main() {
	if env::var("RUST_LOG").is_err() {
		// log level not explicitly set by the user
		env::set_var("RUST_LOG", "info");
	}
	pretty_env_logger::init();

	let keys = keys::build_keys();
	let app = app::build_app(keys);
	let commands = commands::build_commands();

	let matches = app.get_matches();

	let res = match matches.subcommand() {
		Some((key, mtx)) => match commands.get(key) {
			Some(command) => command.evaluate(mtx),
			None => {
				error!("Unknown command: {}, run gmk --help for the list of commands", key);
				return;
			},
		},
		None => {
			error!("No command specified, run gmk --help for the list of commands");
			return;
		},
	};

	if let Err(e) = res {
		error!("{}", e);
		std::process::exit(1);
	}
}
