use std::fs;
use std::path::Path;

use crate::prop::compression::decode_bytes;
use crate::prop::decode::MAX_PREALLOC;
use crate::prop::{Compression, DecodeOptions, Decoded, Decoder, Object, PropHeader, RegionKind, Result};

/// Fully decoded property container file.
#[derive(Debug, Clone, PartialEq)]
pub struct PropFile {
	/// Compression the source bytes were stored with.
	pub compression: Compression,
	/// Magic and version.
	pub header: PropHeader,
	/// External resource names, in on-disk order.
	pub dependencies: Vec<Box<str>>,
	/// Per-object class hashes, parallel to `objects`.
	pub object_class_hashes: Vec<u32>,
	/// Top-level objects, in on-disk order.
	pub objects: Vec<Object>,
}

impl PropFile {
	/// Read, decompress if needed, and decode a file from disk.
	pub fn open(path: impl AsRef<Path>, opt: &DecodeOptions) -> Result<Decoded<Self>> {
		let raw = fs::read(path)?;
		let (compression, bytes) = decode_bytes(raw)?;
		let mut decoded = decode_file(&bytes, opt)?;
		decoded.value.compression = compression;
		Ok(decoded)
	}

	/// Decode an in-memory, uncompressed buffer.
	pub fn parse(bytes: &[u8], opt: &DecodeOptions) -> Result<Decoded<Self>> {
		decode_file(bytes, opt)
	}

	/// Iterate objects paired with their class hash.
	pub fn objects_with_class(&self) -> impl Iterator<Item = (u32, &Object)> {
		self.object_class_hashes.iter().copied().zip(self.objects.iter())
	}
}

/// Decode header, dependency list, and object list from `bytes`.
pub fn decode_file(bytes: &[u8], opt: &DecodeOptions) -> Result<Decoded<PropFile>> {
	let mut decoder = Decoder::new(bytes, opt);
	let header = PropHeader::parse(decoder.cursor_mut())?;
	let dependencies = decoder.decode_dependencies()?;
	let (object_class_hashes, objects) = decoder.decode_object_list()?;

	let remaining = decoder.cursor_mut().remaining();
	if remaining > 0 {
		log::debug!("{remaining} trailing bytes after object list");
	}

	Ok(decoder.finish(PropFile {
		compression: Compression::None,
		header,
		dependencies,
		object_class_hashes,
		objects,
	}))
}

impl Decoder<'_, '_> {
	/// Decode a `u32` count followed by that many length-prefixed names.
	pub fn decode_dependencies(&mut self) -> Result<Vec<Box<str>>> {
		let count = self.read_count()?;
		log::trace!("decoding {count} dependencies");

		let mut dependencies = Vec::with_capacity(count.min(MAX_PREALLOC));
		for _ in 0..count {
			dependencies.push(Box::from(self.cursor_mut().read_string()?));
		}
		Ok(dependencies)
	}

	/// Decode the object count, the parallel class-hash array, then every object.
	pub fn decode_object_list(&mut self) -> Result<(Vec<u32>, Vec<Object>)> {
		let count = self.read_count()?;
		log::trace!("decoding {count} objects");

		let mut class_hashes = Vec::with_capacity(count.min(MAX_PREALLOC));
		for _ in 0..count {
			class_hashes.push(self.cursor_mut().read_u32()?);
		}

		let mut objects = Vec::with_capacity(count.min(MAX_PREALLOC));
		for _ in 0..count {
			objects.push(self.decode_object()?);
		}
		Ok((class_hashes, objects))
	}

	/// Decode one top-level object: size, path hash, then a property list.
	pub fn decode_object(&mut self) -> Result<Object> {
		let cursor = self.cursor_mut();
		let declared_size = cursor.read_u32()?;
		let start = cursor.pos();
		let path_hash = cursor.read_u32()?;
		let properties = self.decode_properties()?;

		self.reconcile(RegionKind::Object, start, declared_size)?;
		Ok(Object {
			path_hash,
			declared_size,
			properties,
		})
	}
}
