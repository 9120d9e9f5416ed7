use std::fmt;

/// Kind of size-delimited region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
	/// Container body.
	Container,
	/// Struct body.
	Struct,
	/// Map body.
	Map,
	/// Top-level object body.
	Object,
}

impl RegionKind {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Container => "container",
			Self::Struct => "struct",
			Self::Map => "map",
			Self::Object => "object",
		}
	}
}

impl fmt::Display for RegionKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Structural anomaly recorded during an otherwise successful decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
	/// A region's body did not end at its declared end; the cursor was moved there.
	SizeMismatch {
		/// Region kind.
		region: RegionKind,
		/// Offset immediately after the region's size field.
		start: usize,
		/// Declared region size.
		declared: u32,
		/// Offset reached after decoding the body.
		end: usize,
		/// `start + declared - end`; negative means the body over-read.
		skip: i64,
	},
	/// A tag outside the registry produced an [`Unknown`](crate::prop::Value::Unknown) placeholder.
	UnknownTag {
		/// Offending tag.
		tag: u8,
		/// Offset where the unmeasured payload begins.
		at: usize,
	},
}

impl Diagnostic {
	/// Stable lowercase label.
	pub fn kind_label(&self) -> &'static str {
		match self {
			Self::SizeMismatch { .. } => "size_mismatch",
			Self::UnknownTag { .. } => "unknown_tag",
		}
	}
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::SizeMismatch {
				region,
				start,
				declared,
				end,
				skip,
			} => write!(f, "{region} at {start}: declared {declared} bytes, body ended at {end} (skip {skip})"),
			Self::UnknownTag { tag, at } => write!(f, "unknown tag {tag} at {at}"),
		}
	}
}

/// Decoded value paired with the anomalies met while producing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
	/// Decoded output.
	pub value: T,
	/// Anomalies in stream order.
	pub diagnostics: Vec<Diagnostic>,
}

impl<T> Decoded<T> {
	/// Return true when no anomaly was recorded.
	pub fn is_clean(&self) -> bool {
		self.diagnostics.is_empty()
	}

	/// Return true when the tree may contain unmeasured placeholders.
	pub fn has_unknown_tags(&self) -> bool {
		self.diagnostics.iter().any(|item| matches!(item, Diagnostic::UnknownTag { .. }))
	}

	/// Iterate size mismatch diagnostics only.
	pub fn size_mismatches(&self) -> impl Iterator<Item = &Diagnostic> {
		self.diagnostics.iter().filter(|item| matches!(item, Diagnostic::SizeMismatch { .. }))
	}
}
