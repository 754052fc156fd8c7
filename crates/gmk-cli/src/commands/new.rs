use std::{io::BufWriter, path::Path};

use tempfile::NamedTempFile;
use gmk::prelude::*;

use super::CommandTrait;
use crate::keys::{key_names, parse_seed};

pub const VERSION: &str = "0.1.0";

/// This command writes a fresh, empty project with a random game id
pub struct Evaluator;

impl CommandTrait for Evaluator {
	fn evaluate(&self, args: &clap::ArgMatches) -> anyhow::Result<()> {
		let output_path = match args.value_of(key_names::OUTPUT) {
			Some(path) => path,
			None => anyhow::bail!("Please provide an output path using the -o or --output key"),
		};

		let mut project = Project::new();
		project.game_id = Project::random_game_id();

		if let Some(version) = args.value_of(key_names::VERSION) {
			project.version = version.parse::<i32>()?;
		};

		let config = WriterConfig::default().seed(parse_seed(args, key_names::OUT_SEED)?);

		let directory = Path::new(output_path)
			.parent()
			.filter(|p| !p.as_os_str().is_empty())
			.unwrap_or_else(|| Path::new("."));

		let mut temporary_file = NamedTempFile::new_in(directory)?;
		let bytes_written = dump(BufWriter::new(&mut temporary_file), &project, &config, None)?;
		temporary_file.persist(output_path)?;

		println!(
			"Generated a new project @ {}; game id: {}, Bytes written: {}",
			output_path, project.game_id, bytes_written
		);

		Ok(())
	}
}
