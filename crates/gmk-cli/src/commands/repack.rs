use std::{io::BufWriter, path::Path};

use tempfile::NamedTempFile;
use indicatif::{ProgressBar, ProgressStyle};
use gmk::prelude::*;

use super::CommandTrait;
use crate::keys::{key_names, parse_seed};

pub const VERSION: &str = "0.1.0";

/// This command decodes a project and encodes it again, optionally under a new seed or layout version
pub struct Evaluator;

impl CommandTrait for Evaluator {
	fn evaluate(&self, args: &clap::ArgMatches) -> anyhow::Result<()> {
		let input_path = match args.value_of(key_names::INPUT) {
			Some(path) => path,
			None => anyhow::bail!("Please provide an input path using the -i or --input key"),
		};

		let output_path = match args.value_of(key_names::OUTPUT) {
			Some(path) => path,
			None => anyhow::bail!("Please provide an output path using the -o or --output key"),
		};

		let loader_config = LoaderConfig::default().seed(parse_seed(args, key_names::SEED)?);

		let mut writer_config = WriterConfig::default().seed(parse_seed(args, key_names::OUT_SEED)?);
		if let Some(version) = args.value_of(key_names::VERSION) {
			writer_config = writer_config.version(version.parse::<i32>()?);
		};

		let progress = ProgressBar::new(100);
		progress.set_style(
			ProgressStyle::default_bar()
				.template(super::PROGRESS_BAR_STYLE)?
				.progress_chars("█░-")
				.tick_chars("⢀ ⡀ ⠄ ⢂ ⡂ ⠅ ⢃ ⡃ ⠍ ⢋ ⡋ ⠍⠁⢋⠁⡋⠁⠍⠉⠋⠉⠋⠉⠉⠙⠉⠙⠉⠩⠈⢙⠈⡙⢈⠩⡀⢙⠄⡙⢂⠩⡂⢘⠅⡘⢃⠨⡃⢐⠍⡐⢋⠠⡋⢀⠍⡁⢋⠁⡋⠁⠍⠉⠋⠉⠋⠉⠉⠙⠉⠙⠉⠩⠈⢙⠈⡙⠈⠩ ⢙ ⡙ ⠩ ⢘ ⡘ ⠨ ⢐ ⡐ ⠠ ⢀ ⡀"),
		);

		// indicatif wraps its state in an Arc, so a shared reference is all the callback needs
		let mut callback = |p: &Progress| {
			progress.set_position(p.percentage as u64);
			progress.set_message(p.message);
		};

		let project = read_project(input_path, &loader_config, Some(&mut callback))?;
		progress.println(format!(
			"Read {} @ version {}, game id: {}",
			input_path, project.version, project.game_id
		));

		// Write next to the destination, so persisting is a plain rename
		let directory = Path::new(output_path)
			.parent()
			.filter(|p| !p.as_os_str().is_empty())
			.unwrap_or_else(|| Path::new("."));

		let mut temporary_file = NamedTempFile::new_in(directory)?;
		progress.reset();

		let bytes_written = dump(
			BufWriter::new(&mut temporary_file),
			&project,
			&writer_config,
			Some(&mut callback),
		)?;
		temporary_file.persist(output_path)?;

		progress.finish_and_clear();
		println!(
			"Repacked {} into {} @ version {}; Bytes written: {}",
			input_path,
			output_path,
			writer_config.version.unwrap_or(project.version),
			bytes_written
		);

		Ok(())
	}
}
