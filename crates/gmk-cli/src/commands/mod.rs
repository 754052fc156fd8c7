use std::collections::HashMap;

use clap::ArgMatches;
use anyhow::Result;

// A common progress bar style for all commands
const PROGRESS_BAR_STYLE: &str = "[{elapsed_precise}] {spinner} {bar:50.cyan/blue} {pos:>3}% {msg}";

// Trait that must be implemented by all subcommands
pub trait CommandTrait: Sync {
	fn evaluate(&self, args: &ArgMatches) -> Result<()>;
}

// All sub-commands are defined in the below modules
pub mod list;
pub mod new;
pub mod repack;
pub mod tree;
pub mod verify;

pub fn build_commands() -> HashMap<&'static str, Box<dyn CommandTrait>> {
	let mut map: HashMap<&'static str, Box<dyn CommandTrait>> = HashMap::new();

	map.insert("verify", Box::new(verify::Evaluator));
	map.insert("list", Box::new(list::Evaluator));
	map.insert("tree", Box::new(tree::Evaluator));
	map.insert("repack", Box::new(repack::Evaluator));
	map.insert("new", Box::new(new::Evaluator));

	map
}
