use gmk::archive::*;

use super::CommandTrait;
use crate::keys::{key_names, parse_seed};

pub const VERSION: &str = "0.1.0";

/// This command verifies that a project decodes cleanly, end to end
pub struct Evaluator;

impl CommandTrait for Evaluator {
	fn evaluate(&self, args: &clap::ArgMatches) -> anyhow::Result<()> {
		let input_path = match args.value_of(key_names::INPUT) {
			Some(path) => path,
			None => anyhow::bail!("Please provide an input path using the -i or --input key"),
		};

		let config = LoaderConfig::default().seed(parse_seed(args, key_names::SEED)?);

		match read_project(input_path, &config, None) {
			Ok(project) => {
				println!(
					"{} is a valid version {} project, game id: {}",
					input_path, project.version, project.game_id
				);
			},
			Err(err) => match err {
				InternalError::InvalidMagic(m) => anyhow::bail!(
					"Invalid magic: {}, expected: {}. If the project is ciphered, provide its seed using -s or --seed",
					m,
					gmk::MAGIC
				),
				InternalError::MalformedArchive(m) => anyhow::bail!("Malformed project: {}", m),
				e => anyhow::bail!("Unable to verify the project, error: {}", e.to_string()),
			},
		};

		Ok(())
	}
}
