//! RowHammer mitigation parameters (`rhparams`)

// Modules
mod args;

// Imports
use {
	self::args::{Args, SubCmd},
	anyhow::Context,
	clap::Parser,
	rhparams::{MitigationScheme, PluginEntry, SweepConfig},
	rhparams_util::logger,
	std::{fs, io, path::Path},
};

fn main() -> Result<(), anyhow::Error> {
	// Get arguments
	let args = Args::parse();
	logger::pre_init::debug(format!("Args: {args:?}"));

	// Initialize logging
	logger::init(args.log_file.as_deref(), args.log_file_append);

	// Then check the sub-command
	match args.sub_cmd {
		SubCmd::Derive(derive_args) => {
			let params = rhparams::derive_by_name(&derive_args.scheme, derive_args.trh)
				.with_context(|| format!("Unable to derive parameters for {:?}", derive_args.scheme))?;
			tracing::info!(?params, "Derived parameters");

			let plugin = PluginEntry::new(&params);
			if let Some(preset) = plugin.dram_timing_preset() {
				tracing::info!(?preset, "Plugin requires dram timing preset");
			}

			self::write_output(derive_args.output_file.as_deref(), &plugin)?;
		},

		SubCmd::Sweep(sweep_args) => {
			let config = match &sweep_args.config_file {
				Some(config_file) => {
					let config_file = fs::File::open(config_file).context("Unable to open config file")?;
					serde_json::from_reader::<_, SweepConfig>(config_file).context("Unable to parse config file")?
				},
				None => SweepConfig::default(),
			};
			tracing::debug!(?config, "Sweep config");

			let output = rhparams::sweep(&config);
			self::write_output(sweep_args.output_file.as_deref(), &output)?;
		},

		SubCmd::List =>
			for scheme in MitigationScheme::ALL {
				println!("{scheme}");
			},
	}

	Ok(())
}

/// Writes `value` as json to `output_file`, or stdout if `None`
fn write_output<T: serde::Serialize>(output_file: Option<&Path>, value: &T) -> Result<(), anyhow::Error> {
	match output_file {
		Some(output_file) => {
			let output_file = fs::File::create(output_file).context("Unable to create output file")?;
			serde_json::to_writer_pretty(output_file, value).context("Unable to write to output file")?;
		},
		None => {
			let mut stdout = io::stdout().lock();
			serde_json::to_writer_pretty(&mut stdout, value).context("Unable to write to stdout")?;
			io::Write::write_all(&mut stdout, b"\n").context("Unable to write to stdout")?;
		},
	}

	Ok(())
}
