use crate::prop::{PropError, Result};

/// Bounded little-endian cursor over an immutable byte slice.
///
/// Every read either advances by exactly the requested width or fails with
/// [`PropError::UnexpectedEof`] and leaves the position untouched.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current absolute byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return total buffer length.
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	/// Return true when the underlying buffer is empty.
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Move to an absolute offset. `len()` itself is a valid target.
	pub fn seek(&mut self, offset: i64) -> Result<()> {
		let target = usize::try_from(offset)
			.ok()
			.filter(|target| *target <= self.bytes.len())
			.ok_or(PropError::InvalidSeek {
				offset,
				len: self.bytes.len(),
			})?;
		self.pos = target;
		Ok(())
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(PropError::UnexpectedEof {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let raw = self.read_exact(N)?;
		let mut out = [0_u8; N];
		out.copy_from_slice(raw);
		Ok(out)
	}

	/// Read a four-byte code.
	pub fn read_code4(&mut self) -> Result<[u8; 4]> {
		self.read_array()
	}

	/// Read a `u8`.
	pub fn read_u8(&mut self) -> Result<u8> {
		Ok(self.read_array::<1>()?[0])
	}

	/// Read an `i8`.
	pub fn read_i8(&mut self) -> Result<i8> {
		Ok(i8::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `u16`.
	pub fn read_u16(&mut self) -> Result<u16> {
		Ok(u16::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `i16`.
	pub fn read_i16(&mut self) -> Result<i16> {
		Ok(i16::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `u32`.
	pub fn read_u32(&mut self) -> Result<u32> {
		Ok(u32::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `i32`.
	pub fn read_i32(&mut self) -> Result<i32> {
		Ok(i32::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `u64`.
	pub fn read_u64(&mut self) -> Result<u64> {
		Ok(u64::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `i64`.
	pub fn read_i64(&mut self) -> Result<i64> {
		Ok(i64::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian IEEE-754 `f32`.
	pub fn read_f32(&mut self) -> Result<f32> {
		Ok(f32::from_le_bytes(self.read_array()?))
	}

	/// Read `N` consecutive little-endian `f32` values.
	pub fn read_f32_array<const N: usize>(&mut self) -> Result<[f32; N]> {
		let raw = self.read_exact(N * 4)?;
		let mut out = [0.0_f32; N];
		for (item, chunk) in out.iter_mut().zip(raw.chunks_exact(4)) {
			*item = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
		}
		Ok(out)
	}

	/// Read an `i16` length prefix followed by that many UTF-8 bytes.
	pub fn read_string(&mut self) -> Result<&'a str> {
		let at = self.pos;
		let out = self.read_string_body(at);
		if out.is_err() {
			self.pos = at;
		}
		out
	}

	fn read_string_body(&mut self, at: usize) -> Result<&'a str> {
		let len = self.read_i16()?;
		let len = usize::try_from(len).map_err(|_| PropError::NegativeStringLength { at, len })?;
		let start = self.pos;
		let raw = self.read_exact(len)?;
		std::str::from_utf8(raw).map_err(|_| PropError::InvalidEncoding { at: start, len })
	}
}

#[cfg(test)]
mod tests;
