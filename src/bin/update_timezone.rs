use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use nixedit_cli::rewrite::{KeyRewrite, TIMEZONE_KEY};
use nixedit_cli::source::{read_source, write_source};

#[derive(Parser)]
#[command(name = "update-timezone")]
#[command(
	author,
	version,
	about = "Rewrite the time.timeZone assignment in a Nix module"
)]
struct Cli {
	/// Path to the Nix module that assigns time.timeZone
	file: PathBuf,

	/// Replacement timezone identifier, e.g. America/New_York
	#[arg(allow_hyphen_values = true)]
	timezone: String,
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

	let text = read_source(&cli.file)?;

	let rewrite = KeyRewrite::compile(TIMEZONE_KEY, &cli.timezone, false)?;

	match rewrite.apply(&text) {
		Some(updated) => write_source(&cli.file, &updated)?,
		None => eprintln!(
			"warning: no {} assignment found in {}",
			TIMEZONE_KEY,
			cli.file.display()
		),
	}

	Ok(ExitCode::SUCCESS)
}
