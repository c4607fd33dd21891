//! Logger
//!
//! Logging goes to stderr, filtered by `RUST_LOG`, and optionally to a
//! file, filtered by `RUST_LOG_FILE`.

// Imports
use {
	std::{
		fs,
		io,
		path::Path,
		sync::Arc,
	},
	tracing_subscriber::{
		filter::LevelFilter,
		fmt,
		layer::SubscriberExt,
		util::SubscriberInitExt,
		EnvFilter,
		Layer,
	},
};

/// Default stderr filter, when `RUST_LOG` isn't set
const DEFAULT_STDERR_FILTER: LevelFilter = LevelFilter::INFO;

/// Default file filter, when `RUST_LOG_FILE` isn't set
const DEFAULT_FILE_FILTER: LevelFilter = LevelFilter::DEBUG;

/// Initializes the logger.
///
/// Any messages buffered with [`pre_init`] are emitted right after.
///
/// # Panics
/// Panics if a global subscriber was already set.
pub fn init(log_file: Option<&Path>, log_file_append: bool) {
	let stderr_layer = fmt::layer()
		.with_writer(io::stderr)
		.with_filter(self::env_filter("RUST_LOG", DEFAULT_STDERR_FILTER));

	// Note: If we can't open the log file we still want stderr logging,
	//       so we just report it after initializing.
	let mut file_err = None;
	let file_layer = log_file.and_then(|log_file| {
		let file = fs::OpenOptions::new()
			.create(true)
			.write(true)
			.append(log_file_append)
			.truncate(!log_file_append)
			.open(log_file);

		match file {
			Ok(file) => Some(
				fmt::layer()
					.with_ansi(false)
					.with_writer(Arc::new(file))
					.with_filter(self::env_filter("RUST_LOG_FILE", DEFAULT_FILE_FILTER)),
			),
			Err(err) => {
				file_err = Some((log_file.to_path_buf(), err));
				None
			},
		}
	});

	tracing_subscriber::registry()
		.with(stderr_layer)
		.with(file_layer)
		.init();

	if let Some((log_file, err)) = file_err {
		tracing::warn!(?log_file, ?err, "Unable to open log file");
	}

	for message in pre_init::take() {
		tracing::debug!("{message}");
	}
}

/// Creates an env filter from `var`, or `default` if unset or invalid
fn env_filter(var: &str, default: LevelFilter) -> EnvFilter {
	EnvFilter::builder()
		.with_default_directive(default.into())
		.with_env_var(var)
		.from_env_lossy()
}

/// Logging before the logger is initialized
pub mod pre_init {
	// Imports
	use std::sync::{Mutex, MutexGuard};

	/// Messages buffered until [`init`](super::init)
	static MESSAGES: Mutex<Vec<String>> = Mutex::new(Vec::new());

	/// Buffers a debug message
	pub fn debug(message: impl Into<String>) {
		self::messages().push(message.into());
	}

	/// Takes all buffered messages
	pub(super) fn take() -> Vec<String> {
		std::mem::take(&mut *self::messages())
	}

	/// Locks the messages.
	///
	/// A poisoned lock still holds valid messages, so we recover from it.
	fn messages() -> MutexGuard<'static, Vec<String>> {
		MESSAGES.lock().unwrap_or_else(|err| err.into_inner())
	}

}
