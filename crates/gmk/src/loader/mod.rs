use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

use log::debug;

mod config;
pub(crate) mod decoder;
pub(crate) mod records;
mod tree;

pub use config::LoaderConfig;

use crate::global::{cipher::SwapTable, error::*, header::Header, section::*, stream::CipherReader};
use crate::model::{GameInformation, Include, Project, Settings};
use decoder::Decoder;
use records::*;

/// Reconstructs a [`Project`] from an archive, traversing the sections in the same fixed order [`dump`](crate::builder::dump) writes them.
///
/// Every decode call owns its state, so independent sources can be decoded in parallel.
/// Truncated or inconsistent data fails with [`InternalError::MalformedArchive`].
pub fn load<R: Read>(
	source: R, config: &LoaderConfig, mut callback: Option<&mut dyn FnMut(&Progress)>,
) -> InternalResult<Project> {
	let mut dec = Decoder::new(CipherReader::new(source, SwapTable::new(config.seed)));

	let mut report = |section: Section, position: u64| {
		debug!("Reading {} at byte {}", section, position);

		if let Some(callback) = callback.as_mut() {
			callback(&Progress::reading(section));
		}
	};

	report(Section::Header, 0);
	let header = Header::from_handle(dec.source_mut())?;

	let mut project = Project::new();
	project.version = header.version;
	project.game_id = header.game_id;

	report(Section::Settings, dec.get_ref().position());
	project.settings = Settings::decode(&mut dec)?;

	report(Section::Triggers, dec.get_ref().position());
	project.triggers = read_list(&mut dec, Section::Triggers, header.version)?;
	project.triggers_last_changed = dec.read_f64()?;

	report(Section::Constants, dec.get_ref().position());
	let (constants, last_changed) = read_constants(&mut dec)?;
	project.constants = constants;
	project.constants_last_changed = last_changed;

	report(Section::Sounds, dec.get_ref().position());
	project.sounds = read_list(&mut dec, Section::Sounds, TAG_RESOURCE)?;

	report(Section::Sprites, dec.get_ref().position());
	project.sprites = read_list(&mut dec, Section::Sprites, TAG_RESOURCE)?;

	report(Section::Backgrounds, dec.get_ref().position());
	project.backgrounds = read_list(&mut dec, Section::Backgrounds, TAG_RESOURCE)?;

	report(Section::Paths, dec.get_ref().position());
	project.paths = read_list(&mut dec, Section::Paths, TAG_RESOURCE)?;

	report(Section::Scripts, dec.get_ref().position());
	project.scripts = read_list(&mut dec, Section::Scripts, TAG_RESOURCE)?;

	report(Section::DataFiles, dec.get_ref().position());

	report(Section::Fonts, dec.get_ref().position());
	project.fonts = read_list(&mut dec, Section::Fonts, TAG_RESOURCE)?;

	report(Section::Timelines, dec.get_ref().position());
	project.timelines = read_list(&mut dec, Section::Timelines, TAG_RESOURCE)?;

	report(Section::Objects, dec.get_ref().position());
	project.objects = read_list(&mut dec, Section::Objects, TAG_RESOURCE)?;

	report(Section::Rooms, dec.get_ref().position());
	project.rooms = read_list(&mut dec, Section::Rooms, TAG_RESOURCE)?;

	project.next_instance_id = dec.read_i32()?;
	project.next_tile_id = dec.read_i32()?;
	dec.read_tag(TAG_RESOURCE, "Includes")?;

	report(Section::Includes, dec.get_ref().position());
	let count = dec.read_len("Includes")?;
	for _ in 0..count {
		project.includes.push(Include::decode(&mut dec)?);
	}

	dec.read_tag(TAG_RESOURCE, "Packages")?;

	report(Section::Packages, dec.get_ref().position());
	dec.read_tag(700, "Packages")?;
	let count = dec.read_len("Packages")?;
	for _ in 0..count {
		project.packages.push(dec.read_str("Package name")?);
	}

	dec.read_tag(500, "Game information")?;

	report(Section::GameInformation, dec.get_ref().position());
	project.game_information = GameInformation::decode(&mut dec)?;

	dec.read_tag(500, "Libraries")?;

	report(Section::Libraries, dec.get_ref().position());
	let count = dec.read_len("Libraries")?;
	for _ in 0..count {
		project.libraries.push(dec.read_str("Library code")?);
	}

	report(Section::Tree, dec.get_ref().position());
	project.tree = tree::read_tree(&mut dec)?;

	report(Section::Finished, dec.get_ref().position());
	Ok(project)
}

/// Opens and decodes the archive at `path`
pub fn read_project<P: AsRef<Path>>(
	path: P, config: &LoaderConfig, callback: Option<&mut dyn FnMut(&Progress)>,
) -> InternalResult<Project> {
	let file = File::open(path)?;
	load(BufReader::new(file), config, callback)
}
