use std::{error, io, path::PathBuf};
use thiserror::Error;

/// Internal `Result` type alias used by `gmk`. Basically equal to: `Result<T, InternalError>`
pub type InternalResult<T = ()> = Result<T, InternalError>;

/// All errors manifestable within `gmk` collected into a neat enum
#[derive(Debug, Error)]
pub enum InternalError {
	/// Generic Error
	#[error("[GmkError::GenericError] {0}")]
	OtherError(Box<dyn error::Error + Send + Sync>),
	/// thin wrapper over [io::Error](std::io::Error), captures all sink and source failures
	#[error("[GmkError::IOError] {0}")]
	IOError(#[from] io::Error),
	/// the target of [`write_project`](crate::builder::write_project) does not exist
	#[error("[GmkError::MissingSourceFile] The archive target does not exist: {}", .0.display())]
	MissingSourceFile(PathBuf),
	/// the source does not start with the project magic, contains the integer found instead
	#[error("[GmkError::InvalidMagic] Invalid magic found in header, expected {}, found {}", crate::MAGIC, .0)]
	InvalidMagic(i32),
	/// a length prefix, count or layout marker is impossible, or runs past the end of the available data
	#[error("[GmkError::MalformedArchive] {0}")]
	MalformedArchive(String),
	/// a record cannot be represented in the legacy layout, eg: a sprite frame with dimensions but no pixel data
	#[error("[GmkError::UnwritableField] {0}")]
	UnwritableField(String),
	/// strings are stored one byte per character, so code points above 255 can't be encoded
	#[error("[GmkError::UnrepresentableCharacter] {character:?} at character {offset} does not fit into a single byte")]
	UnrepresentableCharacter {
		/// The offending character
		character: char,
		/// Its index within the string, in characters
		offset: usize,
	},
}

impl InternalError {
	/// Maps an unexpected end of input into [`InternalError::MalformedArchive`], passes every other IO error through
	pub(crate) fn from_read(err: io::Error, what: &str) -> InternalError {
		match err.kind() {
			io::ErrorKind::UnexpectedEof => {
				InternalError::MalformedArchive(format!("Unexpected end of data while reading {}", what))
			},
			_ => InternalError::IOError(err),
		}
	}
}
