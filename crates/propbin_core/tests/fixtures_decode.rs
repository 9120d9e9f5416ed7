#![allow(missing_docs)]

use propbin::prop::{Compression, DecodeOptions, Diagnostic, ObjectLink, PropError, PropFile, RegionKind, Value, tag};
use propbin_testkit::fixture_path;

#[test]
fn clean_fixture_decodes_strictly() {
	let decoded = PropFile::open(fixture_path("clean.bin"), &DecodeOptions::strict()).expect("fixture decodes");
	assert!(decoded.is_clean(), "unexpected diagnostics: {:?}", decoded.diagnostics);

	let file = decoded.value;
	assert_eq!(file.compression, Compression::None);
	assert_eq!(file.header.magic_label(), "PROP");
	assert_eq!(file.header.version, 3);
	assert_eq!(file.dependencies.len(), 2);
	assert!(file.dependencies[0].ends_with(".skl"));
	assert_eq!(file.object_class_hashes, vec![0xAAAA_0001, 0xAAAA_0002]);

	let first = &file.objects[0];
	assert_eq!(first.path_hash, 0x1234);
	assert_eq!(first.get(0x1), Some(&Value::String("Test".into())));
	assert_eq!(first.get(0x2), Some(&Value::Vec3([1.0, 2.0, 3.0])));

	let Some(Value::Container(list)) = first.get(0x3) else {
		panic!("expected container property");
	};
	assert_eq!(list.element_tag, tag::U32);
	assert_eq!(list.elements, vec![Value::U32(10), Value::U32(20), Value::U32(30)]);

	let Some(Value::Struct(embedded)) = first.get(0x4) else {
		panic!("expected embedded struct property");
	};
	assert_eq!(embedded.class_hash, 0x9999);
	assert_eq!(embedded.get(0x1111), Some(&Value::F32(3.5)));

	let Some(Value::Map(map)) = first.get(0x5) else {
		panic!("expected map property");
	};
	assert_eq!(map.pairs.len(), 2);
	assert_eq!(map.pairs[0].key, Value::Hash(0xCAFE));
	assert_eq!(map.pairs[1].value, Value::String("second".into()));

	let Some(Value::Option(link)) = first.get(0x6) else {
		panic!("expected option property");
	};
	assert_eq!(link.get(), Some(&Value::Link(ObjectLink { object_id: 1 })));

	let second = &file.objects[1];
	assert_eq!(second.get(0x7), Some(&Value::U32(42)));
	assert!(matches!(second.get(0x8), Some(Value::Option(item)) if !item.is_present()));
}

#[test]
fn anomalies_fixture_reports_and_resynchronises() {
	let decoded = PropFile::open(fixture_path("anomalies.bin"), &DecodeOptions::default()).expect("fixture decodes");
	assert!(decoded.has_unknown_tags());
	assert_eq!(decoded.size_mismatches().count(), 3);
	assert!(matches!(decoded.diagnostics[1], Diagnostic::UnknownTag { tag: 99, .. }));
	assert!(matches!(
		decoded.diagnostics[3],
		Diagnostic::SizeMismatch {
			region: RegionKind::Object,
			skip: 2,
			..
		}
	));

	let file = decoded.value;
	assert!(file.objects[0].properties.iter().any(|prop| prop.value.contains_unknown()));
	assert_eq!(file.objects[1].get(0x3), Some(&Value::String("still in sync".into())));
}

#[test]
fn anomalies_fixture_fails_in_strict_mode() {
	let err = PropFile::open(fixture_path("anomalies.bin"), &DecodeOptions::strict()).expect_err("strict decode fails");
	assert!(matches!(err, PropError::SizeMismatch { region: RegionKind::Container, .. }));
}

#[test]
fn zstd_wrapped_fixture_matches_raw() {
	let raw = std::fs::read(fixture_path("clean.bin")).expect("fixture reads");
	let packed = zstd::encode_all(raw.as_slice(), 3).expect("zstd encodes");
	let path = std::env::temp_dir().join(format!("propbin-clean-{}.bin.zst", std::process::id()));
	std::fs::write(&path, packed).expect("temp file writes");

	let opened = PropFile::open(&path, &DecodeOptions::default());
	let _ = std::fs::remove_file(&path);
	let opened = opened.expect("zstd fixture decodes");

	let plain = PropFile::parse(&raw, &DecodeOptions::default()).expect("raw fixture decodes");
	assert_eq!(opened.value.compression, Compression::Zstd);
	assert_eq!(opened.value.objects, plain.value.objects);
}

#[test]
fn missing_file_is_io_error() {
	let err = PropFile::open(fixture_path("does-not-exist.bin"), &DecodeOptions::default()).expect_err("missing file");
	assert!(matches!(err, PropError::Io(_)));
}
