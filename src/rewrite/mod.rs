//! Assignment rewriting for nixedit.
//!
//! This module handles:
//! - Anchored pattern construction for `key = "value";` assignment lines
//! - First-match and every-match value substitution
//! - The fixed key sets each binary rewrites

pub mod assignment;
pub mod keys;

pub use assignment::KeyRewrite;
pub use keys::{TIMEZONE_KEY, VARIABLE_KEYS, variable_rewrites};
