/// Settings for [`load`](crate::archive::load)
#[derive(Debug, Clone)]
pub struct LoaderConfig {
	/// Cipher seed, must match the one the archive was written with. Negative values read the bytes as they are
	pub seed: i32,
}

impl LoaderConfig {
	/// Setter for the `seed` field
	pub fn seed(mut self, seed: i32) -> Self {
		self.seed = seed;
		self
	}
}

impl Default for LoaderConfig {
	fn default() -> LoaderConfig {
		LoaderConfig { seed: -1 }
	}
}
