use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use nixedit_cli::rewrite::variable_rewrites;
use nixedit_cli::source::{read_source, write_source};

#[derive(Parser)]
#[command(name = "update-vars")]
#[command(
	author,
	version,
	about = "Rewrite the per-host variable assignments in a Nix module"
)]
struct Cli {
	/// Path to the Nix module holding the variable assignments
	file: PathBuf,

	/// Value for gitUsername
	#[arg(allow_hyphen_values = true)]
	git_username: String,

	/// Value for gitEmail
	#[arg(allow_hyphen_values = true)]
	git_email: String,

	/// Value for hostName
	#[arg(allow_hyphen_values = true)]
	host_name: String,

	/// Value for gpuProfile
	#[arg(allow_hyphen_values = true)]
	gpu_profile: String,

	/// Value for keyboardLayout
	#[arg(allow_hyphen_values = true)]
	keyboard_layout: String,

	/// Value for keyboardVariant (may be empty)
	#[arg(allow_hyphen_values = true)]
	keyboard_variant: String,

	/// Value for consoleKeyMap
	#[arg(allow_hyphen_values = true)]
	console_key_map: String,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	let mut text = read_source(&cli.file)?;

	let values = [
		cli.git_username,
		cli.git_email,
		cli.host_name,
		cli.gpu_profile,
		cli.keyboard_layout,
		cli.keyboard_variant,
		cli.console_key_map,
	];

	// Each pass rewrites every matching line for its key; keys with no
	// matching line are skipped without a warning.
	for rewrite in variable_rewrites(&values)? {
		if let Some(updated) = rewrite.apply(&text) {
			text = updated;
		}
	}

	write_source(&cli.file, &text)?;

	Ok(ExitCode::SUCCESS)
}
