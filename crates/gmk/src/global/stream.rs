use std::io::{self, Read, Write};

use super::cipher::SwapTable;

/// Write adapter tracking the absolute sink position, and passing every byte through an optional [`SwapTable`]
pub(crate) struct CipherWriter<W: Write> {
	inner: W,
	table: Option<SwapTable>,
	position: u64,
	scratch: Vec<u8>,
}

impl<W: Write> CipherWriter<W> {
	pub(crate) fn new(inner: W, table: Option<SwapTable>) -> CipherWriter<W> {
		CipherWriter {
			inner,
			table,
			position: 0,
			scratch: Vec::new(),
		}
	}

	/// Number of bytes handed to the inner sink so far
	#[inline(always)]
	pub(crate) fn position(&self) -> u64 {
		self.position
	}
}

impl<W: Write> Write for CipherWriter<W> {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		match &self.table {
			Some(table) => {
				let start = self.position;
				self.scratch.clear();
				self.scratch
					.extend(buf.iter().enumerate().map(|(i, b)| table.encode(*b, start + i as u64)));

				self.inner.write_all(&self.scratch)?;
			},
			None => self.inner.write_all(buf)?,
		};

		self.position += buf.len() as u64;
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		self.inner.flush()
	}
}

/// Read adapter mirroring [`CipherWriter`]
pub(crate) struct CipherReader<R: Read> {
	inner: R,
	table: Option<SwapTable>,
	position: u64,
}

impl<R: Read> CipherReader<R> {
	pub(crate) fn new(inner: R, table: Option<SwapTable>) -> CipherReader<R> {
		CipherReader {
			inner,
			table,
			position: 0,
		}
	}

	/// Number of bytes pulled from the inner source so far
	#[inline(always)]
	pub(crate) fn position(&self) -> u64 {
		self.position
	}
}

impl<R: Read> Read for CipherReader<R> {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		let read = self.inner.read(buf)?;

		if let Some(table) = &self.table {
			for (i, byte) in buf[..read].iter_mut().enumerate() {
				*byte = table.decode(*byte, self.position + i as u64);
			}
		};

		self.position += read as u64;
		Ok(read)
	}
}
