use gmk::prelude::*;

use super::CommandTrait;
use crate::keys::{key_names, parse_seed};

pub const VERSION: &str = "0.1.0";

/// This command prints a project's resource tree, one node per line
pub struct Evaluator;

impl CommandTrait for Evaluator {
	fn evaluate(&self, args: &clap::ArgMatches) -> anyhow::Result<()> {
		let input_path = match args.value_of(key_names::INPUT) {
			Some(path) => path,
			None => anyhow::bail!("Please provide an input path using the -i or --input key"),
		};

		let config = LoaderConfig::default().seed(parse_seed(args, key_names::SEED)?);
		let project = read_project(input_path, &config, None)?;

		// The root is implicit, only its descendants are printed
		project.tree.walk(&mut |node, depth| {
			if depth == 0 {
				return;
			}

			let indent = "  ".repeat(depth - 1);
			match node.node_type {
				NodeType::CHILD => println!("{}- {} #{}", indent, node.name, node.id),
				NodeType::PRIMARY | NodeType::GROUP => println!("{}+ {}", indent, node.name),
				NodeType(other) => println!("{}? {} (node type {})", indent, node.name, other),
			}
		});

		println!("{} node(s)", project.tree.count() - 1);
		Ok(())
	}
}
