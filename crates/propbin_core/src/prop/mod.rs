mod bytes;
mod compression;
mod decode;
mod diag;
mod error;
mod file;
mod header;
mod registry;
mod value;

/// Bounded little-endian read cursor.
pub use bytes::Cursor;
/// Input compression detection and expansion.
pub use compression::{Compression, ZSTD_MAGIC, decode_bytes};
/// Tagged-value decoder, options, and single-value entry point.
pub use decode::{DecodeOptions, Decoder, decode_value};
/// Structured anomaly records returned alongside decoded values.
pub use diag::{Decoded, Diagnostic, RegionKind};
/// Error and result aliases.
pub use error::{PropError, Result};
/// File-level model and entry point.
pub use file::{PropFile, decode_file};
/// File header representation.
pub use header::PropHeader;
/// Tag table and decode rules.
pub use registry::{NumericKind, Shape, tag};
/// Decoded runtime value types.
pub use value::{Colour, ContainerValue, MapEntry, MapValue, Object, ObjectLink, OptionValue, Property, StructValue, Value};
