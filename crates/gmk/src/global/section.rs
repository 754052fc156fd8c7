use std::fmt;

/// How a section wraps its records in compression scopes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopePolicy {
	/// A scope is opened before every record's presence flag, and closed after the record (or hole)
	PerRecord,
	/// No scope is ever opened, the close that follows each record or singleton is a no-op
	CloseOnly,
}

/// The archive sections, in stored order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Section {
	Header,
	Settings,
	Triggers,
	Constants,
	Sounds,
	Sprites,
	Backgrounds,
	Paths,
	Scripts,
	DataFiles,
	Fonts,
	Timelines,
	Objects,
	Rooms,
	Includes,
	Packages,
	GameInformation,
	Libraries,
	Tree,
	/// Not a real section, reported once everything is done
	Finished,
}

impl Section {
	/// Every section in stored order, [`Section::Finished`] last
	pub const ALL: [Section; 20] = [
		Section::Header,
		Section::Settings,
		Section::Triggers,
		Section::Constants,
		Section::Sounds,
		Section::Sprites,
		Section::Backgrounds,
		Section::Paths,
		Section::Scripts,
		Section::DataFiles,
		Section::Fonts,
		Section::Timelines,
		Section::Objects,
		Section::Rooms,
		Section::Includes,
		Section::Packages,
		Section::GameInformation,
		Section::Libraries,
		Section::Tree,
		Section::Finished,
	];

	/// Position within [`Section::ALL`]
	#[inline(always)]
	pub fn index(self) -> usize {
		self as usize
	}

	/// The compression scope policy of this section's records
	pub fn scope(self) -> ScopePolicy {
		match self {
			Section::Triggers | Section::Fonts => ScopePolicy::PerRecord,
			_ => ScopePolicy::CloseOnly,
		}
	}

	/// Human readable name
	pub fn name(self) -> &'static str {
		match self {
			Section::Header => "Header",
			Section::Settings => "Settings",
			Section::Triggers => "Triggers",
			Section::Constants => "Constants",
			Section::Sounds => "Sounds",
			Section::Sprites => "Sprites",
			Section::Backgrounds => "Backgrounds",
			Section::Paths => "Paths",
			Section::Scripts => "Scripts",
			Section::DataFiles => "Data Files",
			Section::Fonts => "Fonts",
			Section::Timelines => "Timelines",
			Section::Objects => "Objects",
			Section::Rooms => "Rooms",
			Section::Includes => "Includes",
			Section::Packages => "Packages",
			Section::GameInformation => "Game Information",
			Section::Libraries => "Libraries",
			Section::Tree => "Project Tree",
			Section::Finished => "Finished",
		}
	}

	/// Completion at the start of this section, as a whole percentage
	pub fn percentage(self) -> u8 {
		(self.index() * 100 / (Self::ALL.len() - 1)) as u8
	}
}

impl fmt::Display for Section {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Coarse progress notification, handed to the optional callback of [`dump`](crate::builder::dump) and [`load`](crate::archive::load)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
	/// The section about to be processed
	pub section: Section,
	/// Short status line, eg: `"Writing Sounds..."`
	pub message: &'static str,
	/// Whole percentage, derived from the section's position
	pub percentage: u8,
}

impl Progress {
	/// Notification for a section about to be written
	pub fn writing(section: Section) -> Progress {
		let message = match section {
			Section::Header => "Starting project write...",
			Section::Settings => "Writing Settings...",
			Section::Triggers => "Writing Triggers...",
			Section::Constants => "Writing Constants...",
			Section::Sounds => "Writing Sounds...",
			Section::Sprites => "Writing Sprites...",
			Section::Backgrounds => "Writing Backgrounds...",
			Section::Paths => "Writing Paths...",
			Section::Scripts => "Writing Scripts...",
			Section::DataFiles => "Writing Data Files...",
			Section::Fonts => "Writing Fonts...",
			Section::Timelines => "Writing Timelines...",
			Section::Objects => "Writing Objects...",
			Section::Rooms => "Writing Rooms...",
			Section::Includes => "Writing Includes...",
			Section::Packages => "Writing Packages...",
			Section::GameInformation => "Writing Game Information...",
			Section::Libraries => "Writing Libraries...",
			Section::Tree => "Writing Project Tree...",
			Section::Finished => "Finished Writing Project.",
		};

		Progress {
			section,
			message,
			percentage: section.percentage(),
		}
	}

	/// Notification for a section about to be read
	pub fn reading(section: Section) -> Progress {
		let message = match section {
			Section::Header => "Starting project read...",
			Section::Settings => "Reading Settings...",
			Section::Triggers => "Reading Triggers...",
			Section::Constants => "Reading Constants...",
			Section::Sounds => "Reading Sounds...",
			Section::Sprites => "Reading Sprites...",
			Section::Backgrounds => "Reading Backgrounds...",
			Section::Paths => "Reading Paths...",
			Section::Scripts => "Reading Scripts...",
			Section::DataFiles => "Reading Data Files...",
			Section::Fonts => "Reading Fonts...",
			Section::Timelines => "Reading Timelines...",
			Section::Objects => "Reading Objects...",
			Section::Rooms => "Reading Rooms...",
			Section::Includes => "Reading Includes...",
			Section::Packages => "Reading Packages...",
			Section::GameInformation => "Reading Game Information...",
			Section::Libraries => "Reading Libraries...",
			Section::Tree => "Reading Project Tree...",
			Section::Finished => "Finished Reading Project.",
		};

		Progress {
			section,
			message,
			percentage: section.percentage(),
		}
	}
}
