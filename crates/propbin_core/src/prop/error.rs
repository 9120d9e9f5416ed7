use thiserror::Error;

use crate::prop::RegionKind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, PropError>;

/// Errors produced while loading and decoding property container data.
#[derive(Debug, Error)]
pub enum PropError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Absolute seek target fell outside the buffer.
	#[error("invalid seek to {offset} (buffer length {len})")]
	InvalidSeek {
		/// Requested absolute offset.
		offset: i64,
		/// Buffer length in bytes.
		len: usize,
	},
	/// String payload was not valid UTF-8.
	#[error("invalid utf-8 string at offset {at} ({len} bytes)")]
	InvalidEncoding {
		/// Offset of the first string byte.
		at: usize,
		/// Declared string length.
		len: usize,
	},
	/// Length-prefixed string declared a negative length.
	#[error("negative string length {len} at offset {at}")]
	NegativeStringLength {
		/// Offset of the length prefix.
		at: usize,
		/// Parsed signed length.
		len: i16,
	},
	/// Composite nesting exceeded the configured limit.
	#[error("recursion limit exceeded (max_depth={max_depth})")]
	RecursionLimitExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Stream-provided counts exceeded the configured element budget.
	#[error("element count too large: count={count}, max={max}")]
	ElementCountTooLarge {
		/// Total elements claimed so far, including the rejected count.
		count: usize,
		/// Maximum permitted count.
		max: usize,
	},
	/// Strict mode detected a region whose declared size disagrees with its body.
	#[error("{region} size mismatch at {start}: declared={declared}, consumed={consumed}")]
	SizeMismatch {
		/// Region kind being decoded.
		region: RegionKind,
		/// Offset immediately after the region's size field.
		start: usize,
		/// Declared region size.
		declared: u32,
		/// Bytes actually consumed by the body.
		consumed: usize,
	},
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
}
