use std::collections::HashMap;
use clap::{Command, Arg};

use crate::keys::key_names;
use crate::commands;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn build_app<'a>(key_map: HashMap<&'static str, Arg<'a>>) -> Command<'a> {
	Command::new("gmk")
		.about("A command-line interface for inspecting and rewriting legacy .gmk project files")
		.version(self::VERSION)
		.subcommand(
			Command::new("verify")
				.version(commands::verify::VERSION)
				.about("Verifies that a project decodes cleanly")
				.arg(key_map.get(key_names::INPUT).unwrap())
				.arg(key_map.get(key_names::SEED).unwrap()),
		)
		.subcommand(
			Command::new("list")
				.version(commands::list::VERSION)
				.about("Lists every resource in a project")
				.arg(key_map.get(key_names::INPUT).unwrap())
				.arg(key_map.get(key_names::SEED).unwrap())
				.arg(key_map.get(key_names::SORT).unwrap()),
		)
		.subcommand(
			Command::new("tree")
				.version(commands::tree::VERSION)
				.about("Prints the resource tree of a project")
				.arg(key_map.get(key_names::INPUT).unwrap())
				.arg(key_map.get(key_names::SEED).unwrap()),
		)
		.subcommand(
			Command::new("repack")
				.version(commands::repack::VERSION)
				.about("Decodes a project and encodes it again, optionally with a new seed or version")
				// Files
				.arg(key_map.get(key_names::INPUT).unwrap())
				.arg(key_map.get(key_names::OUTPUT).unwrap())
				// Cipher
				.arg(key_map.get(key_names::SEED).unwrap())
				.arg(key_map.get(key_names::OUT_SEED).unwrap())
				// Modifiers
				.arg(key_map.get(key_names::VERSION).unwrap()),
		)
		.subcommand(
			Command::new("new")
				.version(commands::new::VERSION)
				.about("Writes an empty project with a random game id")
				.arg(key_map.get(key_names::OUTPUT).unwrap())
				.arg(key_map.get(key_names::OUT_SEED).unwrap())
				.arg(key_map.get(key_names::VERSION).unwrap()),
		)
}
