use std::path::PathBuf;

use propbin::prop::{DecodeOptions, Diagnostic, PropFile, Result};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub strict: bool,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	#[arg(long)]
	pub json: bool,
}

/// Decode a file and list every recorded anomaly.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		strict,
		max_depth,
		json,
	} = args;

	let mut decode = if strict { DecodeOptions::strict() } else { DecodeOptions::default() };
	if let Some(max_depth) = max_depth {
		decode.max_depth = max_depth;
	}

	let decoded = PropFile::open(&path, &decode)?;
	log::info!("decoded {} objects with {} diagnostics", decoded.value.objects.len(), decoded.diagnostics.len());

	if json {
		let payload = CheckJson {
			path: path.display().to_string(),
			objects: decoded.value.objects.len(),
			unknown_tags: decoded.has_unknown_tags(),
			diagnostics: decoded.diagnostics.iter().map(DiagnosticJson::from).collect(),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("objects: {}", decoded.value.objects.len());
	println!("diagnostics: {}", decoded.diagnostics.len());
	for item in &decoded.diagnostics {
		println!("  {}: {item}", item.kind_label());
	}
	if decoded.has_unknown_tags() {
		println!("warning: tree contains unknown tags whose extent was not measured");
	}

	Ok(())
}

fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: failed to encode json: {err}"),
	}
}

#[derive(serde::Serialize)]
struct CheckJson {
	path: String,
	objects: usize,
	unknown_tags: bool,
	diagnostics: Vec<DiagnosticJson>,
}

#[derive(serde::Serialize)]
struct DiagnosticJson {
	kind: &'static str,
	at: usize,
	#[serde(skip_serializing_if = "Option::is_none")]
	region: Option<&'static str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	declared: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	end: Option<usize>,
	#[serde(skip_serializing_if = "Option::is_none")]
	skip: Option<i64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	tag: Option<u8>,
}

impl From<&Diagnostic> for DiagnosticJson {
	fn from(item: &Diagnostic) -> Self {
		let base = Self {
			kind: item.kind_label(),
			at: 0,
			region: None,
			declared: None,
			end: None,
			skip: None,
			tag: None,
		};

		match *item {
			Diagnostic::SizeMismatch {
				region,
				start,
				declared,
				end,
				skip,
			} => Self {
				at: start,
				region: Some(region.as_str()),
				declared: Some(declared),
				end: Some(end),
				skip: Some(skip),
				..base
			},
			Diagnostic::UnknownTag { tag, at } => Self { at, tag: Some(tag), ..base },
		}
	}
}
