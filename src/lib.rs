//! Nixedit - CLI tools for rewriting assignment values in Nix source files.
//!
//! This library provides the shared machinery for the `update-timezone` and
//! `update-vars` binaries, including:
//! - Anchored pattern construction for `key = "value";` assignment lines
//! - First-match and every-match value substitution
//! - Whole-file read/write with structured errors
//!
//! # Example
//!
//! ```
//! use nixedit_cli::rewrite::KeyRewrite;
//!
//! let rewrite = KeyRewrite::compile("hostName", "styx", true).unwrap();
//! let updated = rewrite.apply("  hostName = \"default\";\n").unwrap();
//! assert_eq!(updated, "  hostName = \"styx\";\n");
//! ```

pub mod error;
pub mod rewrite;
pub mod source;

pub use error::{NixEditError, Result};
