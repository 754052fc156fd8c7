use std::{
	fs::OpenOptions,
	io::{BufWriter, Write},
	path::Path,
};

use log::{debug, warn};

mod config;
pub(crate) mod encoder;
pub(crate) mod records;
mod tree;

pub use config::WriterConfig;

use crate::global::{cipher::SwapTable, error::*, header::Header, section::*};
use crate::model::Project;
use encoder::Encoder;
use records::*;

/// Writes an entire [`Project`] into `target`, section by section, in the fixed legacy order.
/// Returns the number of bytes written.
///
/// The optional `callback` is notified once before every section, and once more when done.
/// Failures abort immediately and leave whatever was already written in the target, atomic replacement is up to the caller.
pub fn dump<W: Write>(
	target: W, project: &Project, config: &WriterConfig, mut callback: Option<&mut dyn FnMut(&Progress)>,
) -> InternalResult<u64> {
	let version = config.version.unwrap_or(project.version);
	let mut enc = Encoder::new(target, SwapTable::new(config.seed), version);

	if !project.data_files.is_empty() || project.next_data_file_id != crate::model::DATA_FILE_ID_MIN {
		warn!(
			"{} data file(s) and the data file counter are not persisted by this layout",
			project.data_files.len()
		);
	}

	if !project.assets.is_empty() {
		warn!("{} asset name(s) are not persisted by this layout", project.assets.len());
	}

	let mut report = |section: Section, position: u64| {
		debug!("Writing {} at byte {}", section, position);

		if let Some(callback) = callback.as_mut() {
			callback(&Progress::writing(section));
		}
	};

	report(Section::Header, enc.position());
	enc.write_bytes(&Header::new(version, project.game_id).to_bytes())?;

	report(Section::Settings, enc.position());
	project.settings.encode(&mut enc)?;

	report(Section::Triggers, enc.position());
	write_list(&mut enc, Section::Triggers, version, &project.triggers)?;
	enc.write_f64(project.triggers_last_changed)?;

	report(Section::Constants, enc.position());
	write_constants(&mut enc, &project.constants, project.constants_last_changed)?;

	report(Section::Sounds, enc.position());
	write_list(&mut enc, Section::Sounds, TAG_RESOURCE, &project.sounds)?;

	report(Section::Sprites, enc.position());
	write_list(&mut enc, Section::Sprites, TAG_RESOURCE, &project.sprites)?;

	report(Section::Backgrounds, enc.position());
	write_list(&mut enc, Section::Backgrounds, TAG_RESOURCE, &project.backgrounds)?;

	report(Section::Paths, enc.position());
	write_list(&mut enc, Section::Paths, TAG_RESOURCE, &project.paths)?;

	report(Section::Scripts, enc.position());
	write_list(&mut enc, Section::Scripts, TAG_RESOURCE, &project.scripts)?;

	// Data files occupy no bytes at all
	report(Section::DataFiles, enc.position());

	report(Section::Fonts, enc.position());
	write_list(&mut enc, Section::Fonts, TAG_RESOURCE, &project.fonts)?;

	report(Section::Timelines, enc.position());
	write_list(&mut enc, Section::Timelines, TAG_RESOURCE, &project.timelines)?;

	report(Section::Objects, enc.position());
	write_list(&mut enc, Section::Objects, TAG_RESOURCE, &project.objects)?;

	report(Section::Rooms, enc.position());
	write_list(&mut enc, Section::Rooms, TAG_RESOURCE, &project.rooms)?;

	enc.write_i32(project.next_instance_id)?;
	enc.write_i32(project.next_tile_id)?;
	enc.write_i32(TAG_RESOURCE)?;

	report(Section::Includes, enc.position());
	enc.write_len(project.includes.len(), "Includes")?;
	for include in &project.includes {
		include.encode(&mut enc)?;
	}

	enc.write_i32(TAG_RESOURCE)?;

	report(Section::Packages, enc.position());
	enc.write_i32(700)?;
	enc.write_len(project.packages.len(), "Packages")?;
	for package in &project.packages {
		enc.write_str(package)?;
	}

	enc.write_i32(500)?;

	report(Section::GameInformation, enc.position());
	project.game_information.encode(&mut enc)?;

	enc.write_i32(500)?;

	report(Section::Libraries, enc.position());
	enc.write_len(project.libraries.len(), "Libraries")?;
	for library in &project.libraries {
		enc.write_str(library)?;
	}

	report(Section::Tree, enc.position());
	tree::write_tree(&mut enc, &project.tree)?;

	let bytes_written = enc.finish()?;
	report(Section::Finished, bytes_written);

	Ok(bytes_written)
}

/// Writes a [`Project`] over an existing file, truncating it first.
/// Fails with [`InternalError::MissingSourceFile`] if `path` does not exist
pub fn write_project<P: AsRef<Path>>(
	path: P, project: &Project, config: &WriterConfig, callback: Option<&mut dyn FnMut(&Progress)>,
) -> InternalResult<u64> {
	let path = path.as_ref();
	if !path.exists() {
		return Err(InternalError::MissingSourceFile(path.to_path_buf()));
	}

	let file = OpenOptions::new().write(true).truncate(true).open(path)?;
	dump(BufWriter::new(file), project, config, callback)
}
