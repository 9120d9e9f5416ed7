/// Known one-byte type tags.
pub mod tag {
	/// Unit value with no payload.
	pub const EMPTY: u8 = 0;
	/// Boolean stored as one signed byte.
	pub const BOOL: u8 = 1;
	/// Signed 8-bit integer.
	pub const I8: u8 = 2;
	/// Unsigned 8-bit integer.
	pub const U8: u8 = 3;
	/// Signed 16-bit integer.
	pub const I16: u8 = 4;
	/// Unsigned 16-bit integer.
	pub const U16: u8 = 5;
	/// Signed 32-bit integer.
	pub const I32: u8 = 6;
	/// Unsigned 32-bit integer.
	pub const U32: u8 = 7;
	/// Signed 64-bit integer.
	pub const I64: u8 = 8;
	/// Unsigned 64-bit integer.
	pub const U64: u8 = 9;
	/// 32-bit float.
	pub const F32: u8 = 10;
	/// Two 32-bit floats.
	pub const VEC2: u8 = 11;
	/// Three 32-bit floats.
	pub const VEC3: u8 = 12;
	/// Four 32-bit floats.
	pub const VEC4: u8 = 13;
	/// Sixteen 32-bit floats (4x4 matrix).
	pub const MTX44: u8 = 14;
	/// RGBA colour, one byte per channel.
	pub const COLOUR: u8 = 15;
	/// `i16`-length-prefixed UTF-8 string.
	pub const STRING: u8 = 16;
	/// 32-bit hash.
	pub const HASH: u8 = 17;
	/// Size-delimited homogeneous container.
	pub const CONTAINER: u8 = 128;
	/// Second on-disk container variant with the same shape.
	pub const CONTAINER_ALT: u8 = 129;
	/// Size-delimited struct.
	pub const STRUCT: u8 = 130;
	/// Embedded struct with the same shape as [`STRUCT`].
	pub const EMBEDDED: u8 = 131;
	/// Reference to a top-level object by id.
	pub const LINK: u8 = 132;
	/// Presence flag plus optional nested value.
	pub const OPTION: u8 = 133;
	/// Size-delimited key/value map.
	pub const MAP: u8 = 134;
	/// Alternate boolean encoding, one signed byte.
	pub const FLAG: u8 = 135;
}

/// Fixed-width scalar kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
	/// `i8`.
	I8,
	/// `u8`.
	U8,
	/// `i16`.
	I16,
	/// `u16`.
	U16,
	/// `i32`.
	I32,
	/// `u32`.
	U32,
	/// `i64`.
	I64,
	/// `u64`.
	U64,
	/// `f32`.
	F32,
}

impl NumericKind {
	/// Encoded width in bytes.
	pub const fn width(self) -> usize {
		match self {
			Self::I8 | Self::U8 => 1,
			Self::I16 | Self::U16 => 2,
			Self::I32 | Self::U32 | Self::F32 => 4,
			Self::I64 | Self::U64 => 8,
		}
	}
}

/// Decode rule selected by a type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
	/// No payload.
	Empty,
	/// One fixed-width scalar.
	Primitive(NumericKind),
	/// `n` consecutive `f32` values (2, 3, 4 or 16).
	FloatVector(usize),
	/// Four unsigned bytes r, g, b, a.
	Colour,
	/// Length-prefixed UTF-8 string.
	String,
	/// 32-bit hash.
	Hash,
	/// Nested container.
	Container,
	/// Nested struct.
	Struct,
	/// Object reference.
	ObjectLink,
	/// Optional value.
	Option,
	/// Key/value map.
	Map,
	/// Tag not present in the registry.
	Unknown,
}

impl Shape {
	/// Resolve a tag to its decode rule.
	pub const fn of(tag: u8) -> Self {
		match tag {
			tag::EMPTY => Self::Empty,
			tag::BOOL | tag::I8 | tag::FLAG => Self::Primitive(NumericKind::I8),
			tag::U8 => Self::Primitive(NumericKind::U8),
			tag::I16 => Self::Primitive(NumericKind::I16),
			tag::U16 => Self::Primitive(NumericKind::U16),
			tag::I32 => Self::Primitive(NumericKind::I32),
			tag::U32 => Self::Primitive(NumericKind::U32),
			tag::I64 => Self::Primitive(NumericKind::I64),
			tag::U64 => Self::Primitive(NumericKind::U64),
			tag::F32 => Self::Primitive(NumericKind::F32),
			tag::VEC2 => Self::FloatVector(2),
			tag::VEC3 => Self::FloatVector(3),
			tag::VEC4 => Self::FloatVector(4),
			tag::MTX44 => Self::FloatVector(16),
			tag::COLOUR => Self::Colour,
			tag::STRING => Self::String,
			tag::HASH => Self::Hash,
			tag::CONTAINER | tag::CONTAINER_ALT => Self::Container,
			tag::STRUCT | tag::EMBEDDED => Self::Struct,
			tag::LINK => Self::ObjectLink,
			tag::OPTION => Self::Option,
			tag::MAP => Self::Map,
			_ => Self::Unknown,
		}
	}

	/// Payload width for shapes that do not depend on stream content.
	pub const fn fixed_width(self) -> Option<usize> {
		match self {
			Self::Empty => Some(0),
			Self::Primitive(kind) => Some(kind.width()),
			Self::FloatVector(count) => Some(count * 4),
			Self::Colour | Self::Hash | Self::ObjectLink => Some(4),
			Self::String | Self::Container | Self::Struct | Self::Option | Self::Map | Self::Unknown => None,
		}
	}

	/// Return true for shapes that recurse into nested values.
	pub const fn is_composite(self) -> bool {
		matches!(self, Self::Container | Self::Struct | Self::Option | Self::Map)
	}
}
