//! Command-line tests

use {
	serde_json::json,
	std::{fs, process::Command},
};

/// Runs `rhparams` with `args`
fn rhparams(args: &[&str]) -> std::process::Output {
	Command::new(env!("CARGO_BIN_EXE_rhparams"))
		.args(args)
		.output()
		.expect("Unable to run rhparams")
}

#[test]
fn test_derive_prints_plugin() {
	let output = rhparams(&["derive", "Graphene", "256"]);
	assert!(output.status.success(), "{output:?}");

	let plugin = serde_json::from_slice::<serde_json::Value>(&output.stdout).expect("Stdout wasn't json");
	assert_eq!(
		plugin,
		json!({
			"ControllerPlugin": {
				"impl": "Graphene",
				"num_table_entries": 15151,
				"activation_threshold": 51,
				"reset_period_ns": 64_000_000,
			}
		})
	);
}

#[test]
fn test_derive_writes_output_file() {
	let output_file = tempfile::NamedTempFile::new().expect("Unable to create output file");
	let output_path = output_file.path().to_str().expect("Output path wasn't utf-8");

	let output = rhparams(&["derive", "MithrilCache", "128", "--output", output_path]);
	assert!(output.status.success(), "{output:?}");
	assert!(output.stdout.is_empty());

	let plugin = serde_json::from_str::<serde_json::Value>(
		&fs::read_to_string(output_file.path()).expect("Unable to read output file"),
	)
	.expect("Output file wasn't json");
	assert_eq!(plugin["ControllerPlugin"]["impl"], "MithrilCache");
	assert_eq!(plugin["ControllerPlugin"]["num_table_entries"], 14000);
}

#[test]
fn test_derive_failures_exit_non_zero() {
	for args in [
		["derive", "NoDefense", "256"],
		["derive", "MithrilDDR4", "1000"],
		["derive", "RRS", "3"],
	] {
		let output = rhparams(&args);
		assert!(!output.status.success(), "{args:?}: {output:?}");
		assert!(output.stdout.is_empty(), "{args:?}: {output:?}");
	}
}

#[test]
fn test_list_prints_schemes() {
	let output = rhparams(&["list"]);
	assert!(output.status.success(), "{output:?}");

	let stdout = String::from_utf8(output.stdout).expect("Stdout wasn't utf-8");
	assert_eq!(stdout.lines().collect::<Vec<_>>(), [
		"PARA",
		"TWiCe-Ideal",
		"Graphene",
		"MithrilCache",
		"MithrilDDR4",
		"OracleRH",
		"Hydra",
		"RRS",
	]);
}

#[test]
fn test_sweep_writes_output_file() {
	let dir = tempfile::tempdir().expect("Unable to create temporary directory");
	let config_path = dir.path().join("sweep.json");
	let output_path = dir.path().join("output.json");
	fs::write(&config_path, r#"{ "schemes": ["Hydra", "MithrilDDR4"], "thresholds": [256, 300] }"#)
		.expect("Unable to write config file");

	let output = rhparams(&[
		"sweep",
		"--config",
		config_path.to_str().expect("Config path wasn't utf-8"),
		"--output",
		output_path.to_str().expect("Output path wasn't utf-8"),
	]);
	assert!(output.status.success(), "{output:?}");

	let sweep = serde_json::from_str::<serde_json::Value>(
		&fs::read_to_string(&output_path).expect("Unable to read output file"),
	)
	.expect("Output file wasn't json");

	let derived = sweep["entries"]
		.as_array()
		.expect("Entries weren't an array")
		.iter()
		.map(|entry| (entry["scheme"].clone(), entry["trh"].clone()))
		.collect::<Vec<_>>();
	assert_eq!(derived, [
		(json!("Hydra"), json!(256)),
		(json!("Hydra"), json!(300)),
		(json!("MithrilDDR4"), json!(256)),
	]);
	assert_eq!(sweep["entries"][0]["plugin"]["ControllerPlugin"]["hydra_tracking_threshold"], 128);

	let skipped = sweep["skipped"].as_array().expect("Skipped wasn't an array");
	assert_eq!(skipped.len(), 1);
	assert_eq!(skipped[0]["scheme"], "MithrilDDR4");
	assert_eq!(skipped[0]["trh"], 300);
}

#[test]
fn test_sweep_missing_config_exits_non_zero() {
	let dir = tempfile::tempdir().expect("Unable to create temporary directory");
	let config_path = dir.path().join("missing.json");

	let output = rhparams(&["sweep", "--config", config_path.to_str().expect("Config path wasn't utf-8")]);
	assert!(!output.status.success(), "{output:?}");
}
