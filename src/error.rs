use std::path::PathBuf;

/// Library-level structured errors for nixedit.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binaries wrap these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum NixEditError {
	#[error("Failed to read file: {path}")]
	SourceRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write file: {path}")]
	SourceWrite {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Invalid assignment pattern for key: {key}")]
	InvalidKeyPattern {
		key: String,
		#[source]
		source: regex::Error,
	},
}

/// Result type alias using NixEditError.
pub type Result<T> = std::result::Result<T, NixEditError>;
