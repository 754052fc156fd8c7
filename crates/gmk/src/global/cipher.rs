use std::fmt;

/// Seed derived byte substitution tables, optionally applied to every byte crossing the sink or source.
///
/// The permutation is generated by swapping neighbouring entries in an identity table, the exact walk is dictated by
/// the legacy runtime. Index `0` is never touched, so `0` always maps onto itself.
#[derive(Clone, PartialEq, Eq)]
pub struct SwapTable {
	forward: [u8; 256],
	reverse: [u8; 256],
}

impl fmt::Debug for SwapTable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[Gmk::SwapTable] forward[1..4]: {:?}", &self.forward[1..4])
	}
}

impl SwapTable {
	/// How many neighbour swaps are used to build the forward table
	pub const SWAPS: usize = 10_000;

	/// Builds a table pair from a seed. Negative seeds disable the cipher, and yield `None`
	pub fn new(seed: i32) -> Option<SwapTable> {
		if seed < 0 {
			return None;
		}

		let seed = seed as usize;
		let a = 6 + (seed % 250);
		let b = seed / 250;

		let mut forward = [0u8; 256];
		for (i, value) in forward.iter_mut().enumerate() {
			*value = i as u8;
		}

		for i in 1..=Self::SWAPS {
			let j = 1 + ((i * a + b) % 254);
			forward.swap(j, j + 1);
		}

		let mut reverse = [0u8; 256];
		for i in 1..256 {
			reverse[forward[i] as usize] = i as u8;
		}

		Some(SwapTable { forward, reverse })
	}

	/// The table used when writing
	#[inline(always)]
	pub fn forward(&self) -> &[u8; 256] {
		&self.forward
	}

	/// The table used when reading, the inverse of [`forward`](SwapTable::forward)
	#[inline(always)]
	pub fn reverse(&self) -> &[u8; 256] {
		&self.reverse
	}

	/// Obfuscates a byte about to be written at the absolute stream `position`
	#[inline(always)]
	pub fn encode(&self, value: u8, position: u64) -> u8 {
		self.forward[value.wrapping_add(position as u8) as usize]
	}

	/// Recovers a byte read from the absolute stream `position`
	#[inline(always)]
	pub fn decode(&self, value: u8, position: u64) -> u8 {
		self.reverse[value as usize].wrapping_sub(position as u8)
	}
}
