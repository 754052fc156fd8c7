use std::io::{self, Read, Write};

use flate2::{read::ZlibDecoder, write::ZlibEncoder, Compression};

use super::error::*;

#[derive(Debug)]
/// Exported utility compressor used by `gmk` to produce and consume independently compressed blocks.
/// Blocks are zlib streams, which is what the legacy runtime inflates.
pub struct Compressor<T: Read> {
	data: T,
}

impl<T: Read> Compressor<T> {
	/// Construct a new compressor over a read handle
	pub fn new(data: T) -> Compressor<T> {
		Compressor { data }
	}

	/// Deflates everything in the read handle into `output`, returns the number of bytes consumed
	pub fn compress(&mut self, output: &mut dyn Write) -> InternalResult<u64> {
		let mut compressor = ZlibEncoder::new(output, Compression::default());
		let consumed = io::copy(&mut self.data, &mut compressor)?;
		compressor.finish()?;

		Ok(consumed)
	}

	/// Inflates the read handle into `output`.
	/// Contains the number of bytes decompressed from the source
	pub fn decompress(&mut self, output: &mut Vec<u8>) -> InternalResult<usize> {
		let mut rdr = ZlibDecoder::new(&mut self.data);
		rdr.read_to_end(output)
			.map_err(|err| InternalError::MalformedArchive(format!("Compressed block failed to inflate: {}", err)))
	}
}
