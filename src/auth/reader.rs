//! Pluggable readers for file-backed client secrets.

// std
use std::{fs, io, path::Path};

/// Reads the full contents of a secret file.
///
/// Implementations return the raw bytes: no trimming and no text decoding.
pub trait SecretReader: Send + Sync {
	/// Reads the file at `path` into a string.
	fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Reads secrets straight from the local filesystem on every call.
///
/// The read blocks; async callers should move resolution onto a blocking worker.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsSecretReader;
impl SecretReader for FsSecretReader {
	fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
		fs::read(path)
	}
}
