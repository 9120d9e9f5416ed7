//! Public library API for decoding hash-addressed property container files.

/// Tagged-value decoding, cursor primitives, and file-level entry points.
pub mod prop;
