//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Little-endian byte builder for hand-assembled decoder inputs.
///
/// Regions opened with [`FixtureWriter::begin_region`] reserve a `u32` size
/// field that is back-patched when the region is closed. The recorded size
/// counts bytes from immediately after the size field.
#[derive(Debug, Default, Clone)]
pub struct FixtureWriter {
	bytes: Vec<u8>,
	open: Vec<usize>,
}

impl FixtureWriter {
	/// Create an empty writer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Current length in bytes.
	pub fn pos(&self) -> usize {
		self.bytes.len()
	}

	/// Append raw bytes.
	pub fn bytes(&mut self, raw: &[u8]) -> &mut Self {
		self.bytes.extend_from_slice(raw);
		self
	}

	/// Append a `u8`.
	pub fn u8(&mut self, value: u8) -> &mut Self {
		self.bytes(&[value])
	}

	/// Append an `i8`.
	pub fn i8(&mut self, value: i8) -> &mut Self {
		self.bytes(&value.to_le_bytes())
	}

	/// Append a `u16`.
	pub fn u16(&mut self, value: u16) -> &mut Self {
		self.bytes(&value.to_le_bytes())
	}

	/// Append an `i16`.
	pub fn i16(&mut self, value: i16) -> &mut Self {
		self.bytes(&value.to_le_bytes())
	}

	/// Append a `u32`.
	pub fn u32(&mut self, value: u32) -> &mut Self {
		self.bytes(&value.to_le_bytes())
	}

	/// Append an `i32`.
	pub fn i32(&mut self, value: i32) -> &mut Self {
		self.bytes(&value.to_le_bytes())
	}

	/// Append a `u64`.
	pub fn u64(&mut self, value: u64) -> &mut Self {
		self.bytes(&value.to_le_bytes())
	}

	/// Append an `i64`.
	pub fn i64(&mut self, value: i64) -> &mut Self {
		self.bytes(&value.to_le_bytes())
	}

	/// Append an `f32`.
	pub fn f32(&mut self, value: f32) -> &mut Self {
		self.bytes(&value.to_le_bytes())
	}

	/// Append an `i16` length prefix and the UTF-8 bytes of `value`.
	pub fn string(&mut self, value: &str) -> &mut Self {
		let len = i16::try_from(value.len()).expect("fixture string fits in i16");
		self.i16(len).bytes(value.as_bytes())
	}

	/// Reserve a `u32` size field and open a region after it.
	pub fn begin_region(&mut self) -> &mut Self {
		self.open.push(self.bytes.len());
		self.u32(0)
	}

	/// Close the innermost region, recording its true size.
	pub fn end_region(&mut self) -> &mut Self {
		let at = self.open.last().copied().expect("an open region");
		let size = self.bytes.len() - (at + 4);
		self.end_region_with(u32::try_from(size).expect("region size fits in u32"))
	}

	/// Close the innermost region, recording `declared` instead of its true size.
	pub fn end_region_with(&mut self, declared: u32) -> &mut Self {
		let at = self.open.pop().expect("an open region");
		self.bytes[at..at + 4].copy_from_slice(&declared.to_le_bytes());
		self
	}

	/// Copy out the assembled bytes.
	pub fn build(&self) -> Vec<u8> {
		assert!(self.open.is_empty(), "fixture has {} unclosed regions", self.open.len());
		self.bytes.clone()
	}
}
