use crate::prop::{Cursor, Result};

/// Leading file header: an unvalidated four-byte magic and a format version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropHeader {
	/// Raw format identity bytes.
	pub magic: [u8; 4],
	/// Format version.
	pub version: u32,
}

impl PropHeader {
	/// Encoded header size in bytes.
	pub const SIZE: usize = 8;

	/// Read magic and version from the cursor.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		let magic = cursor.read_code4()?;
		let version = cursor.read_u32()?;
		Ok(Self { magic, version })
	}

	/// Printable rendering of the magic; non-graphic bytes become `.`.
	pub fn magic_label(&self) -> String {
		self.magic
			.iter()
			.map(|byte| if byte.is_ascii_graphic() { char::from(*byte) } else { '.' })
			.collect()
	}
}
