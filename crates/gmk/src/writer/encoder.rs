use std::io::Write;

use crate::global::{cipher::SwapTable, compressor::Compressor, error::*, stream::CipherWriter};

/// Primitive encoder. Writes land in the innermost open compression scope, or the sink when none is open
pub(crate) struct Encoder<W: Write> {
	sink: CipherWriter<W>,
	scopes: Vec<Vec<u8>>,
	version: i32,
}

impl<W: Write> Encoder<W> {
	pub(crate) fn new(target: W, table: Option<SwapTable>, version: i32) -> Encoder<W> {
		Encoder {
			sink: CipherWriter::new(target, table),
			scopes: Vec::new(),
			version,
		}
	}

	/// The target version being written
	#[inline(always)]
	pub(crate) fn version(&self) -> i32 {
		self.version
	}

	/// Bytes already handed to the sink, open scopes excluded
	#[inline(always)]
	pub(crate) fn position(&self) -> u64 {
		self.sink.position()
	}

	fn write_raw(&mut self, bytes: &[u8]) -> InternalResult {
		match self.scopes.last_mut() {
			Some(scope) => scope.extend_from_slice(bytes),
			None => self.sink.write_all(bytes)?,
		};

		Ok(())
	}

	#[inline(always)]
	pub(crate) fn write_byte(&mut self, value: u8) -> InternalResult {
		self.write_raw(&[value])
	}

	/// Bools take up a full int32
	#[inline(always)]
	pub(crate) fn write_bool(&mut self, value: bool) -> InternalResult {
		self.write_i32(value as i32)
	}

	#[inline(always)]
	pub(crate) fn write_i16(&mut self, value: i16) -> InternalResult {
		self.write_raw(&value.to_le_bytes())
	}

	#[inline(always)]
	pub(crate) fn write_i32(&mut self, value: i32) -> InternalResult {
		self.write_raw(&value.to_le_bytes())
	}

	#[inline(always)]
	pub(crate) fn write_f64(&mut self, value: f64) -> InternalResult {
		self.write_raw(&value.to_le_bytes())
	}

	/// A length or count, as an int32
	pub(crate) fn write_len(&mut self, len: usize, what: &str) -> InternalResult {
		let len = i32::try_from(len)
			.map_err(|_| InternalError::UnwritableField(format!("{} is too long to be stored: {}", what, len)))?;

		self.write_i32(len)
	}

	/// Single byte per character, prefixed with its length
	pub(crate) fn write_str(&mut self, value: &str) -> InternalResult {
		let mut bytes = Vec::with_capacity(value.len());
		for (offset, character) in value.chars().enumerate() {
			match u8::try_from(character) {
				Ok(byte) => bytes.push(byte),
				Err(_) => return Err(InternalError::UnrepresentableCharacter { character, offset }),
			}
		}

		self.write_len(bytes.len(), "String")?;
		self.write_raw(&bytes)
	}

	/// Raw bytes, no length prefix
	#[inline(always)]
	pub(crate) fn write_bytes(&mut self, bytes: &[u8]) -> InternalResult {
		self.write_raw(bytes)
	}

	/// Length prefixed bytes
	pub(crate) fn write_blob(&mut self, bytes: &[u8]) -> InternalResult {
		self.write_len(bytes.len(), "Blob")?;
		self.write_raw(bytes)
	}

	/// Starts accumulating writes into a new compression scope
	pub(crate) fn begin_scope(&mut self) {
		self.scopes.push(Vec::new());
	}

	/// Deflates the innermost scope, and writes it out as a length prefixed block. A no-op when no scope is open
	pub(crate) fn end_scope(&mut self) -> InternalResult {
		let scope = match self.scopes.pop() {
			Some(scope) => scope,
			None => return Ok(()),
		};

		let mut block = Vec::new();
		Compressor::new(scope.as_slice()).compress(&mut block)?;

		log::trace!("Closed scope: {} bytes deflated into {}", scope.len(), block.len());
		self.write_blob(&block)
	}

	/// Closes any dangling scopes and flushes the sink. Returns the total number of bytes written
	pub(crate) fn finish(mut self) -> InternalResult<u64> {
		while !self.scopes.is_empty() {
			self.end_scope()?;
		}

		self.sink.flush()?;
		Ok(self.sink.position())
	}
}
