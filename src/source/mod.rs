//! Whole-file I/O for nixedit.
//!
//! The target file is read fully into memory, rewritten, and written back in
//! a single pass. No backup copy or atomic rename is performed, matching the
//! interactive single-operator usage these tools are built for.

use crate::error::{NixEditError, Result};
use std::path::Path;

/// Read the target file fully into memory as UTF-8 text.
pub fn read_source(path: &Path) -> Result<String> {
	std::fs::read_to_string(path).map_err(|source| NixEditError::SourceRead {
		path: path.to_path_buf(),
		source,
	})
}

/// Overwrite the target file with the updated text.
pub fn write_source(path: &Path, text: &str) -> Result<()> {
	std::fs::write(path, text).map_err(|source| NixEditError::SourceWrite {
		path: path.to_path_buf(),
		source,
	})
}
