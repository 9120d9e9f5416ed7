use crate::prop::{Cursor, PropError};

#[test]
fn reads_little_endian_primitives_in_sequence() {
	let mut bytes = Vec::new();
	bytes.push(0xFE);
	bytes.extend_from_slice(&0x1234_u16.to_le_bytes());
	bytes.extend_from_slice(&(-2_i32).to_le_bytes());
	bytes.extend_from_slice(&0x1122_3344_5566_7788_u64.to_le_bytes());
	bytes.extend_from_slice(&1.5_f32.to_le_bytes());

	let mut cursor = Cursor::new(&bytes);
	assert_eq!(cursor.read_i8().expect("i8"), -2);
	assert_eq!(cursor.read_u16().expect("u16"), 0x1234);
	assert_eq!(cursor.read_i32().expect("i32"), -2);
	assert_eq!(cursor.read_u64().expect("u64"), 0x1122_3344_5566_7788);
	assert_eq!(cursor.read_f32().expect("f32"), 1.5);
	assert_eq!(cursor.pos(), bytes.len());
	assert_eq!(cursor.remaining(), 0);
}

#[test]
fn short_read_reports_eof_and_keeps_position() {
	let bytes = [1_u8, 2, 3];
	let mut cursor = Cursor::new(&bytes);
	cursor.read_u8().expect("first byte");

	let err = cursor.read_u32().expect_err("only two bytes remain");
	assert!(matches!(err, PropError::UnexpectedEof { at: 1, need: 4, rem: 2 }));
	assert_eq!(cursor.pos(), 1);
}

#[test]
fn float_array_reads_are_all_or_nothing() {
	let mut bytes = Vec::new();
	for value in [1.0_f32, 2.0, 3.0] {
		bytes.extend_from_slice(&value.to_le_bytes());
	}

	let mut cursor = Cursor::new(&bytes);
	assert_eq!(cursor.read_f32_array::<3>().expect("vec3"), [1.0, 2.0, 3.0]);

	let mut cursor = Cursor::new(&bytes);
	let err = cursor.read_f32_array::<4>().expect_err("vec4 needs 16 bytes");
	assert!(matches!(err, PropError::UnexpectedEof { at: 0, need: 16, rem: 12 }));
	assert_eq!(cursor.pos(), 0);
}

#[test]
fn reads_length_prefixed_string() {
	let mut bytes = Vec::new();
	bytes.extend_from_slice(&5_i16.to_le_bytes());
	bytes.extend_from_slice(b"hello");
	bytes.push(0xAA);

	let mut cursor = Cursor::new(&bytes);
	assert_eq!(cursor.read_string().expect("string"), "hello");
	assert_eq!(cursor.pos(), 7);
}

#[test]
fn empty_string_consumes_only_prefix() {
	let bytes = 0_i16.to_le_bytes();
	let mut cursor = Cursor::new(&bytes);
	assert_eq!(cursor.read_string().expect("empty string"), "");
	assert_eq!(cursor.pos(), 2);
}

#[test]
fn invalid_utf8_string_is_rejected() {
	let mut bytes = Vec::new();
	bytes.extend_from_slice(&2_i16.to_le_bytes());
	bytes.extend_from_slice(&[0xC3, 0x28]);

	let mut cursor = Cursor::new(&bytes);
	let err = cursor.read_string().expect_err("invalid utf-8");
	assert!(matches!(err, PropError::InvalidEncoding { at: 2, len: 2 }));
	assert_eq!(cursor.pos(), 0);
}

#[test]
fn negative_string_length_is_rejected() {
	let bytes = (-3_i16).to_le_bytes();
	let mut cursor = Cursor::new(&bytes);
	let err = cursor.read_string().expect_err("negative length");
	assert!(matches!(err, PropError::NegativeStringLength { at: 0, len: -3 }));
}

#[test]
fn truncated_string_propagates_eof() {
	let mut bytes = Vec::new();
	bytes.extend_from_slice(&8_i16.to_le_bytes());
	bytes.extend_from_slice(b"abc");

	let mut cursor = Cursor::new(&bytes);
	let err = cursor.read_string().expect_err("string body truncated");
	assert!(matches!(err, PropError::UnexpectedEof { at: 2, need: 8, rem: 3 }));
}

#[test]
fn seek_accepts_buffer_end_and_rejects_out_of_range() {
	let bytes = [0_u8; 8];
	let mut cursor = Cursor::new(&bytes);

	cursor.seek(8).expect("end of buffer is a valid target");
	assert_eq!(cursor.remaining(), 0);
	cursor.seek(3).expect("backwards seek");
	assert_eq!(cursor.pos(), 3);

	assert!(matches!(cursor.seek(9), Err(PropError::InvalidSeek { offset: 9, len: 8 })));
	assert!(matches!(cursor.seek(-1), Err(PropError::InvalidSeek { offset: -1, len: 8 })));
	assert_eq!(cursor.pos(), 3);
}
