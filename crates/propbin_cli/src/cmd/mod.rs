/// Decode diagnostics audit command.
pub mod check;
/// File-level information command.
pub mod info;

#[cfg(test)]
mod test_support;
