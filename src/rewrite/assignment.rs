use crate::error::{NixEditError, Result};
use regex::{Captures, Regex};

/// A compiled find-and-replace for one assignment key.
#[derive(Debug)]
pub struct KeyRewrite {
	/// Anchored pattern matching the key's assignment lines.
	pub pattern: Regex,

	/// The replacement value, inserted between the preserved quotes.
	pub value: String,

	/// Whether to rewrite every matching line, or only the first.
	pub all_occurrences: bool,
}

impl KeyRewrite {
	/// Compile the anchored pattern for `key`, targeting lines of the form
	/// `key = "value";` with optional leading and trailing whitespace.
	///
	/// The key is regex-escaped, so dotted keys such as `time.timeZone` match
	/// literally. The quoted value may contain anything except a double quote.
	pub fn compile(key: &str, value: &str, all_occurrences: bool) -> Result<Self> {
		let pattern_str = format!(r#"(?m)^(\s*{}\s*=\s*")[^"]*(";\s*)$"#, regex::escape(key));
		let pattern =
			Regex::new(&pattern_str).map_err(|source| NixEditError::InvalidKeyPattern {
				key: key.to_string(),
				source,
			})?;

		Ok(KeyRewrite {
			pattern,
			value: value.to_string(),
			all_occurrences,
		})
	}

	/// Apply this rewrite to `text`.
	///
	/// Returns `None` when no assignment line for the key matched, leaving the
	/// caller to decide whether that is a warning (`update-timezone`) or a
	/// silent skip (`update-vars`). The text before the value quote and the
	/// `";` suffix are re-emitted verbatim, and the value is inserted
	/// literally, so `$` in a replacement never triggers capture expansion.
	pub fn apply(&self, text: &str) -> Option<String> {
		if !self.pattern.is_match(text) {
			return None;
		}

		let rewrite_line = |caps: &Captures| format!("{}{}{}", &caps[1], self.value, &caps[2]);

		let replaced = if self.all_occurrences {
			self.pattern.replace_all(text, rewrite_line)
		} else {
			self.pattern.replace(text, rewrite_line)
		};

		Some(replaced.into_owned())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_apply_replaces_value_preserving_layout() {
		let rewrite = KeyRewrite::compile("time.timeZone", "America/New_York", false).unwrap();
		let updated = rewrite.apply("  time.timeZone = \"UTC\";\n").unwrap();
		assert_eq!(updated, "  time.timeZone = \"America/New_York\";\n");
	}

	#[test]
	fn test_apply_preserves_trailing_whitespace() {
		let rewrite = KeyRewrite::compile("keyboardLayout", "de", false).unwrap();
		let updated = rewrite.apply("keyboardLayout = \"us\";   ").unwrap();
		assert_eq!(updated, "keyboardLayout = \"de\";   ");
	}

	#[test]
	fn test_apply_no_match_returns_none() {
		let rewrite = KeyRewrite::compile("hostName", "styx", true).unwrap();
		assert!(rewrite.apply("services.openssh.enable = true;\n").is_none());
	}

	#[test]
	fn test_apply_first_match_only() {
		let rewrite = KeyRewrite::compile("time.timeZone", "UTC", false).unwrap();
		let text = "time.timeZone = \"a\";\ntime.timeZone = \"b\";\n";
		let updated = rewrite.apply(text).unwrap();
		assert_eq!(updated, "time.timeZone = \"UTC\";\ntime.timeZone = \"b\";\n");
	}

	#[test]
	fn test_apply_every_occurrence() {
		let rewrite = KeyRewrite::compile("hostName", "styx", true).unwrap();
		let text = "hostName = \"a\";\nhostName = \"b\";\n";
		let updated = rewrite.apply(text).unwrap();
		assert_eq!(updated, "hostName = \"styx\";\nhostName = \"styx\";\n");
	}

	#[test]
	fn test_dotted_key_is_escaped() {
		let rewrite = KeyRewrite::compile("time.timeZone", "UTC", false).unwrap();
		// The dot must not act as a wildcard
		assert!(rewrite.apply("timeXtimeZone = \"a\";\n").is_none());
	}

	#[test]
	fn test_value_with_dollar_sign_stays_literal() {
		let rewrite = KeyRewrite::compile("gitUsername", "user$1", false).unwrap();
		let updated = rewrite.apply("gitUsername = \"old\";\n").unwrap();
		assert_eq!(updated, "gitUsername = \"user$1\";\n");
	}

	#[test]
	fn test_apply_empty_value() {
		let rewrite = KeyRewrite::compile("keyboardVariant", "", true).unwrap();
		let updated = rewrite.apply("  keyboardVariant = \"dvorak\";\n").unwrap();
		assert_eq!(updated, "  keyboardVariant = \"\";\n");
	}

	#[test]
	fn test_unquoted_assignment_not_matched() {
		let rewrite = KeyRewrite::compile("hostName", "styx", true).unwrap();
		assert!(rewrite.apply("hostName = default;\n").is_none());
	}

	#[test]
	fn test_mid_line_assignment_not_matched() {
		let rewrite = KeyRewrite::compile("hostName", "styx", true).unwrap();
		// Anchored to whole lines: an assignment embedded in other text is
		// left alone
		assert!(rewrite.apply("networking = { hostName = \"a\"; };\n").is_none());
	}

	#[test]
	fn test_apply_is_idempotent() {
		let rewrite = KeyRewrite::compile("time.timeZone", "Europe/Berlin", false).unwrap();
		let once = rewrite.apply("time.timeZone = \"UTC\";\n").unwrap();
		let twice = rewrite.apply(&once).unwrap();
		assert_eq!(once, twice);
	}

	#[test]
	fn test_surrounding_lines_untouched() {
		let rewrite = KeyRewrite::compile("gitEmail", "a@b.c", true).unwrap();
		let text = "{\n  gitUsername = \"u\";\n  gitEmail = \"x@y.z\";\n}\n";
		let updated = rewrite.apply(text).unwrap();
		assert_eq!(updated, "{\n  gitUsername = \"u\";\n  gitEmail = \"a@b.c\";\n}\n");
	}
}
