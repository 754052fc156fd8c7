/// Settings for [`dump`](crate::builder::dump)
#[derive(Debug, Clone)]
pub struct WriterConfig {
	/// Version to stamp into the archive. Defaults to the project's own [`version`](crate::model::Project::version)
	pub version: Option<i32>,
	/// Cipher seed, negative values leave the bytes as they are. Defaults to `-1`
	pub seed: i32,
}

// Helper functions
impl WriterConfig {
	///```
	/// use gmk::prelude::WriterConfig;
	///
	/// let config = WriterConfig::default().version(530);
	/// assert_eq!(config.version, Some(530));
	///```
	pub fn version(mut self, version: i32) -> Self {
		self.version = Some(version);
		self
	}

	/// Setter for the `seed` field
	pub fn seed(mut self, seed: i32) -> Self {
		self.seed = seed;
		self
	}
}

impl Default for WriterConfig {
	fn default() -> WriterConfig {
		WriterConfig { version: None, seed: -1 }
	}
}
