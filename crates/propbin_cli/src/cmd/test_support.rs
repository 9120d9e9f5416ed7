use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use propbin_testkit::{fixture_path as shared_fixture_path, target_dir as workspace_target_dir};

static PROPBIN_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture_path(name: &str) -> PathBuf {
	shared_fixture_path(name)
}

pub(crate) fn run_propbin(args: &[&str]) -> Output {
	Command::new(propbin_bin()).args(args).output().expect("propbin command executes")
}

pub(crate) fn run_propbin_json(args: &[&str]) -> serde_json::Value {
	let output = run_propbin(args);
	assert!(
		output.status.success(),
		"propbin command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn propbin_bin() -> &'static PathBuf {
	PROPBIN_BIN.get_or_init(resolve_propbin_bin)
}

fn resolve_propbin_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_propbin") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let mut bin = workspace_target_dir().join("debug");
	bin.push(if cfg!(windows) { "propbin.exe" } else { "propbin" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "propbin"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build propbin binary at {}", bin.display());

	bin
}
