use crate::error::{ErrorKind, ValidationError};
use serde_json::Value;
use std::io;

/// Reject documents whose compact JSON encoding exceeds `max_bytes`.
///
/// A document that cannot be encoded at all is treated as oversized.
pub fn validate(doc: &Value, max_bytes: usize) -> Vec<ValidationError> {
    match encoded_size(doc) {
        Some(size) if size <= max_bytes => Vec::new(),
        _ => vec![ValidationError::new(ErrorKind::ExcessivePayloadSize)],
    }
}

/// Byte length of the compact JSON encoding, measured without buffering it.
pub fn encoded_size(doc: &Value) -> Option<usize> {
    let mut counter = ByteCounter(0);
    serde_json::to_writer(&mut counter, doc).ok()?;
    Some(counter.0)
}

/// Sink that only counts what is written to it.
struct ByteCounter(usize);

impl io::Write for ByteCounter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0 += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
