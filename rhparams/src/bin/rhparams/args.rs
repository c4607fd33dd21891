//! Arguments

// Imports
use std::path::PathBuf;

/// Arguments
#[derive(Debug)]
#[derive(clap::Parser)]
pub struct Args {
	/// Log file
	///
	/// Specifies a file to perform verbose logging to.
	/// You can use `RUST_LOG_FILE` to set filtering options
	#[clap(long = "log-file")]
	pub log_file: Option<PathBuf>,

	/// Whether to append to the log file
	#[clap(long = "log-file-append")]
	pub log_file_append: bool,

	/// Sub-command
	#[command(subcommand)]
	pub sub_cmd: SubCmd,
}

/// Sub-command
#[derive(Debug, clap::Subcommand)]
pub enum SubCmd {
	#[clap(name = "derive")]
	Derive(Derive),

	#[clap(name = "sweep")]
	Sweep(Sweep),

	#[clap(name = "list")]
	List,
}

/// Derives the plugin entry of a single scheme
#[derive(Debug, clap::Args)]
pub struct Derive {
	/// Scheme name
	pub scheme: String,

	/// RowHammer threshold
	pub trh: u64,

	/// Output file
	///
	/// Prints to stdout if not specified
	#[clap(long = "output")]
	pub output_file: Option<PathBuf>,
}

/// Derives the plugin entries of every scheme and threshold in a sweep
#[derive(Debug, clap::Args)]
pub struct Sweep {
	/// Config file
	///
	/// Uses the default sweep if not specified
	#[clap(long = "config")]
	pub config_file: Option<PathBuf>,

	/// Output file
	///
	/// Prints to stdout if not specified
	#[clap(long = "output")]
	pub output_file: Option<PathBuf>,
}
