pub(crate) mod cipher;
pub(crate) mod compressor;
pub(crate) mod error;
pub(crate) mod header;
pub(crate) mod section;
pub(crate) mod stream;
