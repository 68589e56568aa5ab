use crate::error::Result;
use crate::rewrite::assignment::KeyRewrite;

/// Key rewritten by `update-timezone`.
pub const TIMEZONE_KEY: &str = "time.timeZone";

/// Keys rewritten by `update-vars`, in positional-argument order.
pub const VARIABLE_KEYS: [&str; 7] = [
	"gitUsername",
	"gitEmail",
	"hostName",
	"gpuProfile",
	"keyboardLayout",
	"keyboardVariant",
	"consoleKeyMap",
];

/// Compile one every-occurrence rewrite per variable key, pairing keys and
/// values by position.
pub fn variable_rewrites(values: &[String; 7]) -> Result<Vec<KeyRewrite>> {
	VARIABLE_KEYS
		.iter()
		.zip(values.iter())
		.map(|(key, value)| KeyRewrite::compile(key, value, true))
		.collect()
}
