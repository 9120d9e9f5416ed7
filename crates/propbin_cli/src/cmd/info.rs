use std::path::PathBuf;

use propbin::prop::{DecodeOptions, PropFile, Result};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
}

/// Print header fields and section counts.
pub fn run(args: Args) -> Result<()> {
	let Args { path } = args;

	let decoded = PropFile::open(&path, &DecodeOptions::default())?;
	let file = &decoded.value;

	println!("path: {}", path.display());
	println!("compression: {}", file.compression.as_str());
	println!("magic: {}", file.header.magic_label());
	println!("version: {}", file.header.version);
	println!("dependency_count: {}", file.dependencies.len());
	println!("object_count: {}", file.objects.len());
	println!("property_count: {}", file.objects.iter().map(|item| item.properties.len()).sum::<usize>());
	println!("diagnostic_count: {}", decoded.diagnostics.len());

	Ok(())
}
