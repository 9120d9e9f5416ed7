/// Runtime value emitted by tagged-value decoding.
///
/// The active variant is chosen solely by the type tag preceding the payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Unit value with no payload.
	Empty,
	/// Signed byte (also used by both boolean encodings).
	I8(i8),
	/// Unsigned byte.
	U8(u8),
	/// Signed 16-bit integer.
	I16(i16),
	/// Unsigned 16-bit integer.
	U16(u16),
	/// Signed 32-bit integer.
	I32(i32),
	/// Unsigned 32-bit integer.
	U32(u32),
	/// Signed 64-bit integer.
	I64(i64),
	/// Unsigned 64-bit integer.
	U64(u64),
	/// 32-bit float.
	F32(f32),
	/// Two-component float vector.
	Vec2([f32; 2]),
	/// Three-component float vector.
	Vec3([f32; 3]),
	/// Four-component float vector.
	Vec4([f32; 4]),
	/// Row-major 4x4 float matrix.
	Mtx44(Box<[f32; 16]>),
	/// RGBA colour.
	Colour(Colour),
	/// UTF-8 string.
	String(Box<str>),
	/// Opaque 32-bit hash.
	Hash(u32),
	/// Homogeneous size-delimited container.
	Container(ContainerValue),
	/// Hash-keyed struct.
	Struct(StructValue),
	/// Non-owning reference to a top-level object.
	Link(ObjectLink),
	/// Optional nested value.
	Option(OptionValue),
	/// Key/value map.
	Map(MapValue),
	/// Placeholder for a tag outside the registry; its extent was not measured.
	Unknown(u8),
}

impl Value {
	/// Stable lowercase label of the active variant.
	pub fn kind_label(&self) -> &'static str {
		match self {
			Self::Empty => "empty",
			Self::I8(_) => "i8",
			Self::U8(_) => "u8",
			Self::I16(_) => "i16",
			Self::U16(_) => "u16",
			Self::I32(_) => "i32",
			Self::U32(_) => "u32",
			Self::I64(_) => "i64",
			Self::U64(_) => "u64",
			Self::F32(_) => "f32",
			Self::Vec2(_) => "vec2",
			Self::Vec3(_) => "vec3",
			Self::Vec4(_) => "vec4",
			Self::Mtx44(_) => "mtx44",
			Self::Colour(_) => "colour",
			Self::String(_) => "string",
			Self::Hash(_) => "hash",
			Self::Container(_) => "container",
			Self::Struct(_) => "struct",
			Self::Link(_) => "link",
			Self::Option(_) => "option",
			Self::Map(_) => "map",
			Self::Unknown(_) => "unknown",
		}
	}

	/// Return true if this value or any value nested inside it is [`Value::Unknown`].
	pub fn contains_unknown(&self) -> bool {
		match self {
			Self::Unknown(_) => true,
			Self::Container(item) => item.elements.iter().any(Self::contains_unknown),
			Self::Struct(item) => item.properties.iter().any(|prop| prop.value.contains_unknown()),
			Self::Map(item) => item.pairs.iter().any(|pair| pair.key.contains_unknown() || pair.value.contains_unknown()),
			Self::Option(item) => item.get().is_some_and(Self::contains_unknown),
			_ => false,
		}
	}
}

/// RGBA colour with one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colour {
	/// Red.
	pub r: u8,
	/// Green.
	pub g: u8,
	/// Blue.
	pub b: u8,
	/// Alpha.
	pub a: u8,
}

/// One `(name_hash, value)` pair in a struct or object.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
	/// Property name hash.
	pub name_hash: u32,
	/// Decoded property payload.
	pub value: Value,
}

/// Decoded homogeneous container.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerValue {
	/// Tag every element was decoded with.
	pub element_tag: u8,
	/// Region size recorded on disk.
	pub declared_size: u32,
	/// Elements in on-disk order.
	pub elements: Vec<Value>,
}

/// Decoded struct with properties in on-disk order.
#[derive(Debug, Clone, PartialEq)]
pub struct StructValue {
	/// Class hash.
	pub class_hash: u32,
	/// Region size recorded on disk.
	pub declared_size: u32,
	/// Properties in on-disk order.
	pub properties: Vec<Property>,
}

impl StructValue {
	/// First property with `name_hash`.
	pub fn get(&self, name_hash: u32) -> Option<&Value> {
		find_property(&self.properties, name_hash)
	}
}

/// One key/value pair of a map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapEntry {
	/// Key decoded with the map's key tag.
	pub key: Value,
	/// Value decoded with the map's value tag.
	pub value: Value,
}

/// Decoded map with pairs in on-disk order.
#[derive(Debug, Clone, PartialEq)]
pub struct MapValue {
	/// Tag every key was decoded with.
	pub key_tag: u8,
	/// Tag every value was decoded with.
	pub value_tag: u8,
	/// Region size recorded on disk.
	pub declared_size: u32,
	/// Pairs in on-disk order.
	pub pairs: Vec<MapEntry>,
}

/// Decoded optional value.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionValue {
	/// Tag the inner value is (or would be) decoded with.
	pub inner_tag: u8,
	/// Inner value when the presence flag was set.
	pub value: Option<Box<Value>>,
}

impl OptionValue {
	/// Return true when the presence flag was set.
	pub fn is_present(&self) -> bool {
		self.value.is_some()
	}

	/// Borrow the inner value if present.
	pub fn get(&self) -> Option<&Value> {
		self.value.as_deref()
	}
}

/// Weak reference to a top-level object by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectLink {
	/// Referenced object id.
	pub object_id: u32,
}

/// Top-level object: a path-hash keyed property list.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
	/// Object path hash.
	pub path_hash: u32,
	/// Region size recorded on disk.
	pub declared_size: u32,
	/// Properties in on-disk order.
	pub properties: Vec<Property>,
}

impl Object {
	/// First property with `name_hash`.
	pub fn get(&self, name_hash: u32) -> Option<&Value> {
		find_property(&self.properties, name_hash)
	}
}

fn find_property(properties: &[Property], name_hash: u32) -> Option<&Value> {
	properties.iter().find(|prop| prop.name_hash == name_hash).map(|prop| &prop.value)
}
