#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

/*!
A codec for legacy `.gmk` project archives, in Pure Rust.

An archive holds an entire [`Project`](model::Project): settings, every resource kind in sparse id-indexed lists, and the resource tree.
Everything is laid out in one fixed, position dependent order. Triggers and fonts are stored as independently deflated blocks,
and the whole stream may be obfuscated with a seed derived byte substitution table.

### 🔫 Cargo Features
- `archive`: Enables the decoder, [`load`](archive::load) and [`read_project`](archive::read_project).
- `builder`: Enables the encoder, [`dump`](builder::dump) and [`write_project`](builder::write_project).
- `default`: Enables the `archive` and `builder` features.
- `all`: Enables all the above features.

### 🀄 Show me some code _dang it!_

```
use std::io::Cursor;
use gmk::prelude::*;

let mut project = Project::new();
project.scripts.push(Script { name: "scr_hello".to_string(), code: "show_message('Hello')".to_string() });
project.scripts.insert(3, Script { name: "scr_late".to_string(), code: String::new() });

let mut target = Cursor::new(Vec::new());
let config = WriterConfig::default().seed(42);
let bytes_written = dump(&mut target, &project, &config, None).unwrap();
assert_eq!(bytes_written, target.get_ref().len() as u64);

// roundtrip
target.set_position(0);
let decoded = load(target, &LoaderConfig::default().seed(42), None).unwrap();

assert_eq!(decoded.scripts.last_id(), Some(3));
assert!(decoded.scripts.get(1).is_none());
assert_eq!(decoded, project);
```
*/

/// All tests are included in this module.
mod tests;

pub(crate) mod global;

/// The in-memory project model
pub mod model;

#[cfg(feature = "archive")]
#[cfg_attr(docsrs, doc(cfg(feature = "archive")))]
pub(crate) mod loader;

#[cfg(feature = "builder")]
#[cfg_attr(docsrs, doc(cfg(feature = "builder")))]
pub(crate) mod writer;

/// First int32 of every archive
pub const MAGIC: i32 = 1234321;

/// Consolidated crate imports.
pub mod prelude {
	pub use crate::global::{error::*, section::*};
	pub use crate::model::*;

	#[cfg(feature = "archive")]
	pub use crate::archive::*;

	#[cfg(feature = "builder")]
	pub use crate::builder::*;
}

/// Utilities shared by the encoder and decoder: the [`SwapTable`](crate::utils::SwapTable) cipher and the block [`Compressor`](crate::utils::Compressor)
pub mod utils {
	pub use crate::global::{cipher::SwapTable, compressor::Compressor};
}

/// Archive creation logic, [`dump`](crate::builder::dump), [`write_project`](crate::builder::write_project) and [`WriterConfig`](crate::builder::WriterConfig)
#[cfg(feature = "builder")]
#[cfg_attr(docsrs, doc(cfg(feature = "builder")))]
pub mod builder {
	pub use crate::writer::*;
	pub use crate::global::{error::*, section::*};
}

/// Archive reading logic, [`load`](crate::archive::load), [`read_project`](crate::archive::read_project) and [`LoaderConfig`](crate::archive::LoaderConfig)
#[cfg(feature = "archive")]
#[cfg_attr(docsrs, doc(cfg(feature = "archive")))]
pub mod archive {
	pub use crate::loader::*;
	pub use crate::global::{error::*, section::*};
}
