use std::io::Read;
use super::error::*;

/// The fixed archive prologue: magic, version, reserved padding, and the game id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Header {
	pub(crate) magic: i32,
	pub version: i32,
	pub game_id: i32,
}

impl Header {
	/// Versions below this one carry 4 extra reserved bytes after the version field
	pub const LEGACY_VERSION: i32 = 600;
	pub const LEGACY_RESERVED_SIZE: usize = 4;
	pub const RESERVED_SIZE: usize = 16;

	pub(crate) fn new(version: i32, game_id: i32) -> Header {
		Header {
			magic: crate::MAGIC,
			version,
			game_id,
		}
	}

	/// Validates this Header's MAGIC
	pub(crate) fn validate(&self) -> InternalResult {
		if self.magic != crate::MAGIC {
			return Err(InternalError::InvalidMagic(self.magic));
		};

		Ok(())
	}

	fn read_i32<T: Read>(handle: &mut T) -> InternalResult<i32> {
		let mut buffer = [0u8; 4];
		handle
			.read_exact(&mut buffer)
			.map_err(|err| InternalError::from_read(err, "header"))?;

		Ok(i32::from_le_bytes(buffer))
	}

	pub(crate) fn from_handle<T: Read>(mut handle: T) -> InternalResult<Header> {
		let mut header = Header::new(0, 0);

		// Validate magic before anything else is trusted
		header.magic = Self::read_i32(&mut handle)?;
		header.validate()?;

		header.version = Self::read_i32(&mut handle)?;

		let mut reserved = [0u8; Self::RESERVED_SIZE];
		if header.version < Self::LEGACY_VERSION {
			handle
				.read_exact(&mut reserved[..Self::LEGACY_RESERVED_SIZE])
				.map_err(|err| InternalError::from_read(err, "header"))?;
		}

		header.game_id = Self::read_i32(&mut handle)?;
		handle
			.read_exact(&mut reserved)
			.map_err(|err| InternalError::from_read(err, "header"))?;

		Ok(header)
	}

	pub(crate) fn to_bytes(&self) -> Vec<u8> {
		let mut buffer = Vec::with_capacity(4 * 3 + Self::LEGACY_RESERVED_SIZE + Self::RESERVED_SIZE);
		buffer.extend_from_slice(&self.magic.to_le_bytes());
		buffer.extend_from_slice(&self.version.to_le_bytes());

		if self.version < Self::LEGACY_VERSION {
			buffer.extend_from_slice(&[0u8; Self::LEGACY_RESERVED_SIZE]);
		}

		buffer.extend_from_slice(&self.game_id.to_le_bytes());
		buffer.extend_from_slice(&[0u8; Self::RESERVED_SIZE]);
		buffer
	}
}
