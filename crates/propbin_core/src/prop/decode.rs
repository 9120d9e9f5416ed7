use crate::prop::{
	Colour, ContainerValue, Cursor, Decoded, Diagnostic, MapEntry, MapValue, NumericKind, ObjectLink, OptionValue, PropError, Property, RegionKind, Result,
	Shape, StructValue, Value,
};

pub(crate) const MAX_PREALLOC: usize = 4096;

/// Runtime limits and behavior switches for tagged-value decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum composite nesting depth (containers, structs, maps, options).
	pub max_depth: u32,
	/// Maximum total of elements, pairs, properties, objects, and dependencies
	/// announced by counts across one decode.
	pub max_elements: usize,
	/// Fail on size-delimited regions whose body does not match the declared size.
	pub strict_regions: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 64,
			max_elements: 1 << 20,
			strict_regions: false,
		}
	}
}

impl DecodeOptions {
	/// Preset that rejects any region size mismatch.
	pub fn strict() -> Self {
		Self {
			strict_regions: true,
			..Self::default()
		}
	}
}

/// Decode one tagged value from the start of `bytes`.
pub fn decode_value(bytes: &[u8], opt: &DecodeOptions) -> Result<Decoded<Value>> {
	let mut decoder = Decoder::new(bytes, opt);
	let value = decoder.decode_value()?;
	Ok(decoder.finish(value))
}

/// Recursive-descent decoder over one buffer.
///
/// Composite decoders call back into [`Decoder::decode_value`] and
/// [`Decoder::decode_payload`] for nested values. Size-delimited regions are
/// reconciled against their declared size after their body is decoded, so
/// sibling decoding always resumes at the declared end.
///
/// Every count read from the stream draws from one element budget shared by
/// the whole decode, so zero-width elements cannot multiply allocations.
#[derive(Debug)]
pub struct Decoder<'a, 'o> {
	cursor: Cursor<'a>,
	opt: &'o DecodeOptions,
	depth: u32,
	elements: usize,
	diagnostics: Vec<Diagnostic>,
}

impl<'a, 'o> Decoder<'a, 'o> {
	/// Create a decoder positioned at offset 0.
	pub fn new(bytes: &'a [u8], opt: &'o DecodeOptions) -> Self {
		Self {
			cursor: Cursor::new(bytes),
			opt,
			depth: 0,
			elements: 0,
			diagnostics: Vec::new(),
		}
	}

	/// Current absolute offset.
	pub fn position(&self) -> usize {
		self.cursor.pos()
	}

	/// Mutable access to the underlying cursor for fixed-layout reads.
	pub fn cursor_mut(&mut self) -> &mut Cursor<'a> {
		&mut self.cursor
	}

	/// Options this decoder was built with.
	pub fn options(&self) -> &'o DecodeOptions {
		self.opt
	}

	/// Anomalies recorded so far.
	pub fn diagnostics(&self) -> &[Diagnostic] {
		&self.diagnostics
	}

	/// Pair `value` with every recorded anomaly.
	pub fn finish<T>(self, value: T) -> Decoded<T> {
		Decoded {
			value,
			diagnostics: self.diagnostics,
		}
	}

	/// Read a tag byte and decode the payload it selects.
	pub fn decode_value(&mut self) -> Result<Value> {
		let tag = self.cursor.read_u8()?;
		self.decode_payload(tag)
	}

	/// Decode a payload whose tag is known from context.
	pub fn decode_payload(&mut self, tag: u8) -> Result<Value> {
		let value = match Shape::of(tag) {
			Shape::Empty => Value::Empty,
			Shape::Primitive(kind) => self.decode_primitive(kind)?,
			Shape::FloatVector(count) => self.decode_float_vector(count)?,
			Shape::Colour => {
				let [r, g, b, a] = self.cursor.read_code4()?;
				Value::Colour(Colour { r, g, b, a })
			}
			Shape::String => Value::String(self.cursor.read_string()?.into()),
			Shape::Hash => Value::Hash(self.cursor.read_u32()?),
			Shape::Container => Value::Container(self.decode_container()?),
			Shape::Struct => Value::Struct(self.decode_struct()?),
			Shape::ObjectLink => Value::Link(self.decode_link()?),
			Shape::Option => Value::Option(self.decode_option()?),
			Shape::Map => Value::Map(self.decode_map()?),
			Shape::Unknown => self.unknown(tag),
		};
		Ok(value)
	}

	/// Decode a container payload: element tag, size, count, then untagged elements.
	pub fn decode_container(&mut self) -> Result<ContainerValue> {
		self.nested(|this| {
			let element_tag = this.cursor.read_u8()?;
			let declared_size = this.cursor.read_u32()?;
			let start = this.cursor.pos();
			let count = this.read_count()?;

			let elements = if Shape::of(element_tag) == Shape::Unknown {
				let placeholder = this.unknown(element_tag);
				vec![placeholder; count]
			} else {
				let mut elements = Vec::with_capacity(count.min(MAX_PREALLOC));
				for _ in 0..count {
					elements.push(this.decode_payload(element_tag)?);
				}
				elements
			};

			this.reconcile(RegionKind::Container, start, declared_size)?;
			Ok(ContainerValue {
				element_tag,
				declared_size,
				elements,
			})
		})
	}

	/// Decode a struct payload: class hash, size, then a property list.
	pub fn decode_struct(&mut self) -> Result<StructValue> {
		self.nested(|this| {
			let class_hash = this.cursor.read_u32()?;
			let declared_size = this.cursor.read_u32()?;
			let start = this.cursor.pos();
			let properties = this.decode_properties()?;

			this.reconcile(RegionKind::Struct, start, declared_size)?;
			Ok(StructValue {
				class_hash,
				declared_size,
				properties,
			})
		})
	}

	/// Decode a map payload: key tag, value tag, size, count, then untagged pairs.
	pub fn decode_map(&mut self) -> Result<MapValue> {
		self.nested(|this| {
			let key_tag = this.cursor.read_u8()?;
			let value_tag = this.cursor.read_u8()?;
			let declared_size = this.cursor.read_u32()?;
			let start = this.cursor.pos();
			let count = this.read_count()?;

			let mut pairs = Vec::with_capacity(count.min(MAX_PREALLOC));
			for _ in 0..count {
				let key = this.decode_payload(key_tag)?;
				let value = this.decode_payload(value_tag)?;
				pairs.push(MapEntry { key, value });
			}

			this.reconcile(RegionKind::Map, start, declared_size)?;
			Ok(MapValue {
				key_tag,
				value_tag,
				declared_size,
				pairs,
			})
		})
	}

	/// Decode an option payload: inner tag, presence flag, then the inner payload if present.
	pub fn decode_option(&mut self) -> Result<OptionValue> {
		self.nested(|this| {
			let inner_tag = this.cursor.read_u8()?;
			let present = this.cursor.read_u8()? != 0;
			let value = if present { Some(Box::new(this.decode_payload(inner_tag)?)) } else { None };
			Ok(OptionValue { inner_tag, value })
		})
	}

	/// Decode an object link payload.
	pub fn decode_link(&mut self) -> Result<ObjectLink> {
		let object_id = self.cursor.read_u32()?;
		Ok(ObjectLink { object_id })
	}

	/// Decode a `u16` count followed by `(name_hash, tagged value)` pairs.
	pub fn decode_properties(&mut self) -> Result<Vec<Property>> {
		let raw = self.cursor.read_u16()?;
		let count = self.claim_elements(usize::from(raw))?;
		let mut properties = Vec::with_capacity(count);
		for _ in 0..count {
			let name_hash = self.cursor.read_u32()?;
			let value = self.decode_value()?;
			properties.push(Property { name_hash, value });
		}
		Ok(properties)
	}

	/// Read a `u32` count and charge it to the element budget.
	pub(crate) fn read_count(&mut self) -> Result<usize> {
		let raw = self.cursor.read_u32()?;
		self.claim_elements(usize::try_from(raw).unwrap_or(usize::MAX))
	}

	/// Move the cursor to `start + declared`, recording or rejecting any skip.
	pub(crate) fn reconcile(&mut self, region: RegionKind, start: usize, declared: u32) -> Result<()> {
		let end = self.cursor.pos();
		let target = start as i64 + i64::from(declared);
		let skip = target - end as i64;
		if skip == 0 {
			return Ok(());
		}

		if self.opt.strict_regions {
			return Err(PropError::SizeMismatch {
				region,
				start,
				declared,
				consumed: end.saturating_sub(start),
			});
		}

		log::warn!("{region} at {start}: declared {declared} bytes, body ended at {end}, skipping {skip}");
		self.diagnostics.push(Diagnostic::SizeMismatch {
			region,
			start,
			declared,
			end,
			skip,
		});
		self.cursor.seek(target)
	}

	fn claim_elements(&mut self, count: usize) -> Result<usize> {
		let total = self.elements.saturating_add(count);
		if total > self.opt.max_elements {
			return Err(PropError::ElementCountTooLarge {
				count: total,
				max: self.opt.max_elements,
			});
		}
		self.elements = total;
		Ok(count)
	}

	fn nested<T>(&mut self, decode: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
		if self.depth >= self.opt.max_depth {
			return Err(PropError::RecursionLimitExceeded { max_depth: self.opt.max_depth });
		}

		self.depth += 1;
		let out = decode(self);
		self.depth -= 1;
		out
	}

	fn unknown(&mut self, tag: u8) -> Value {
		let at = self.cursor.pos();
		log::debug!("unknown type tag {tag} at {at}, payload extent not measured");
		self.diagnostics.push(Diagnostic::UnknownTag { tag, at });
		Value::Unknown(tag)
	}

	fn decode_primitive(&mut self, kind: NumericKind) -> Result<Value> {
		let cursor = &mut self.cursor;
		Ok(match kind {
			NumericKind::I8 => Value::I8(cursor.read_i8()?),
			NumericKind::U8 => Value::U8(cursor.read_u8()?),
			NumericKind::I16 => Value::I16(cursor.read_i16()?),
			NumericKind::U16 => Value::U16(cursor.read_u16()?),
			NumericKind::I32 => Value::I32(cursor.read_i32()?),
			NumericKind::U32 => Value::U32(cursor.read_u32()?),
			NumericKind::I64 => Value::I64(cursor.read_i64()?),
			NumericKind::U64 => Value::U64(cursor.read_u64()?),
			NumericKind::F32 => Value::F32(cursor.read_f32()?),
		})
	}

	fn decode_float_vector(&mut self, count: usize) -> Result<Value> {
		let cursor = &mut self.cursor;
		Ok(match count {
			2 => Value::Vec2(cursor.read_f32_array()?),
			3 => Value::Vec3(cursor.read_f32_array()?),
			4 => Value::Vec4(cursor.read_f32_array()?),
			// registry only yields 16 otherwise
			_ => Value::Mtx44(Box::new(cursor.read_f32_array()?)),
		})
	}
}
