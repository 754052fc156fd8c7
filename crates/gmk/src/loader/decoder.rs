use std::io::{Cursor, Read};

use crate::global::{compressor::Compressor, error::*};

/// Primitive decoder over any source, either the (deciphered) archive itself or an inflated block
pub(crate) struct Decoder<R: Read> {
	source: R,
}

impl<R: Read> Decoder<R> {
	pub(crate) fn new(source: R) -> Decoder<R> {
		Decoder { source }
	}

	#[inline(always)]
	pub(crate) fn get_ref(&self) -> &R {
		&self.source
	}

	#[inline(always)]
	pub(crate) fn source_mut(&mut self) -> &mut R {
		&mut self.source
	}

	fn read_array<const N: usize>(&mut self, what: &str) -> InternalResult<[u8; N]> {
		let mut buffer = [0u8; N];
		self.source
			.read_exact(&mut buffer)
			.map_err(|err| InternalError::from_read(err, what))?;

		Ok(buffer)
	}

	#[inline(always)]
	pub(crate) fn read_byte(&mut self) -> InternalResult<u8> {
		Ok(self.read_array::<1>("byte")?[0])
	}

	/// Any non-zero int32 reads as `true`
	#[inline(always)]
	pub(crate) fn read_bool(&mut self) -> InternalResult<bool> {
		Ok(self.read_i32()? != 0)
	}

	#[inline(always)]
	pub(crate) fn read_i16(&mut self) -> InternalResult<i16> {
		Ok(i16::from_le_bytes(self.read_array("short")?))
	}

	#[inline(always)]
	pub(crate) fn read_i32(&mut self) -> InternalResult<i32> {
		Ok(i32::from_le_bytes(self.read_array("int")?))
	}

	#[inline(always)]
	pub(crate) fn read_f64(&mut self) -> InternalResult<f64> {
		Ok(f64::from_le_bytes(self.read_array("double")?))
	}

	/// A length or count, negative values are malformed
	pub(crate) fn read_len(&mut self, what: &str) -> InternalResult<usize> {
		let len = self.read_i32()?;
		usize::try_from(len).map_err(|_| InternalError::MalformedArchive(format!("{} has a negative length: {}", what, len)))
	}

	/// Exactly `len` raw bytes. Reads through a bounded handle, so a bogus length never allocates ahead of the data
	pub(crate) fn read_bytes(&mut self, len: usize, what: &str) -> InternalResult<Vec<u8>> {
		let mut buffer = Vec::new();
		(&mut self.source).take(len as u64).read_to_end(&mut buffer)?;

		if buffer.len() != len {
			return Err(InternalError::MalformedArchive(format!(
				"{} declares {} bytes, but only {} remain",
				what,
				len,
				buffer.len()
			)));
		}

		Ok(buffer)
	}

	/// Length prefixed bytes
	pub(crate) fn read_blob(&mut self, what: &str) -> InternalResult<Vec<u8>> {
		let len = self.read_len(what)?;
		self.read_bytes(len, what)
	}

	/// Length prefixed, single byte per character
	pub(crate) fn read_str(&mut self, what: &str) -> InternalResult<String> {
		let bytes = self.read_blob(what)?;
		Ok(bytes.into_iter().map(char::from).collect())
	}

	/// Skips a layout tag, logging when it differs from the one this crate writes
	pub(crate) fn read_tag(&mut self, expected: i32, what: &str) -> InternalResult<i32> {
		let tag = self.read_i32()?;
		if tag != expected {
			log::debug!("{} carries layout tag {}, expected {}", what, tag, expected);
		}

		Ok(tag)
	}

	/// Reads a structural count that must hold exactly `expected`
	pub(crate) fn expect_marker(&mut self, expected: i32, what: &str) -> InternalResult {
		let found = self.read_i32()?;
		if found != expected {
			return Err(InternalError::MalformedArchive(format!(
				"{} marker should be {}, found {}",
				what, expected, found
			)));
		}

		Ok(())
	}

	/// Reads a length prefixed block and inflates it into a decoder of its own
	pub(crate) fn read_block(&mut self, what: &str) -> InternalResult<Decoder<Cursor<Vec<u8>>>> {
		let compressed = self.read_blob(what)?;

		let mut inflated = Vec::new();
		Compressor::new(compressed.as_slice()).decompress(&mut inflated)?;

		log::trace!("Opened {} block: {} bytes inflated into {}", what, compressed.len(), inflated.len());
		Ok(Decoder::new(Cursor::new(inflated)))
	}
}

impl Decoder<Cursor<Vec<u8>>> {
	/// A block must be consumed entirely
	pub(crate) fn finish_block(self, what: &str) -> InternalResult {
		let consumed = self.source.position();
		let len = self.source.get_ref().len() as u64;

		if consumed != len {
			return Err(InternalError::MalformedArchive(format!(
				"{} block has {} trailing bytes",
				what,
				len - consumed
			)));
		}

		Ok(())
	}
}
