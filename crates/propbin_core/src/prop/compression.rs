use std::io::Read;

use crate::prop::{PropError, Result};

const MAX_DECOMPRESSED_BYTES: usize = 512 * 1024 * 1024;
/// zstd frame magic used by compressed archive entries.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Compression mode detected for a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
	/// Raw uncompressed stream.
	#[default]
	None,
	/// zstd-compressed stream.
	Zstd,
}

impl Compression {
	/// Render compression mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Zstd => "zstd",
		}
	}
}

/// Detect and decode compression, returning `(mode, decoded_bytes)`.
///
/// Anything that is not a zstd frame is passed through unchanged.
pub fn decode_bytes(raw: Vec<u8>) -> Result<(Compression, Vec<u8>)> {
	if raw.starts_with(&ZSTD_MAGIC) {
		let out = inflate_bounded(&raw, MAX_DECOMPRESSED_BYTES)?;
		return Ok((Compression::Zstd, out));
	}

	Ok((Compression::None, raw))
}

/// Expand a zstd frame, reading at most one byte past `limit` to detect overflow.
fn inflate_bounded(raw: &[u8], limit: usize) -> Result<Vec<u8>> {
	let mut out = Vec::new();
	zstd::stream::read::Decoder::new(raw)?.take(limit as u64 + 1).read_to_end(&mut out)?;
	if out.len() > limit {
		return Err(PropError::DecompressedTooLarge { limit });
	}
	Ok(out)
}

#[cfg(test)]
mod tests {
	use super::{Compression, decode_bytes, inflate_bounded};
	use crate::prop::PropError;

	#[test]
	fn raw_input_passes_through() {
		let (mode, out) = decode_bytes(b"PROP\x01\x00\x00\x00".to_vec()).expect("raw passes");
		assert_eq!(mode, Compression::None);
		assert_eq!(out, b"PROP\x01\x00\x00\x00");
	}

	#[test]
	fn zstd_frame_is_expanded() {
		let packed = zstd::encode_all(&b"PROP\x02\x00\x00\x00"[..], 3).expect("zstd encodes");
		let (mode, out) = decode_bytes(packed).expect("zstd decodes");
		assert_eq!(mode, Compression::Zstd);
		assert_eq!(mode.as_str(), "zstd");
		assert_eq!(out, b"PROP\x02\x00\x00\x00");
	}

	#[test]
	fn expansion_past_limit_is_rejected() {
		let packed = zstd::encode_all(&[0_u8; 64][..], 3).expect("zstd encodes");
		assert_eq!(inflate_bounded(&packed, 64).expect("exact fit").len(), 64);

		let err = inflate_bounded(&packed, 63).expect_err("one byte over");
		assert!(matches!(err, PropError::DecompressedTooLarge { limit: 63 }));
	}
}
