//! Field codecs for the predicate wire format.
//!
//! All multi-byte integers are big-endian. Byte arrays carry a zero-compressed
//! variable-length prefix ([`VInt`]), text carries a `u16` prefix, booleans are
//! a single `0`/`1` byte.

mod boolean;
mod bytes;
mod error;
mod num;
mod string;
mod varint;

use std::io::{Read, Write};

pub use error::CodecError;
pub use varint::VInt;

/// Largest length prefix accepted by default (16 MiB).
pub const DEFAULT_MAX_FIELD_LEN: usize = 16 * 1024 * 1024;

/// Limits applied while decoding untrusted input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Upper bound for any single length-prefixed field, checked before
    /// allocating the payload buffer.
    pub max_field_len: usize,
}

impl DecodeOptions {
    /// Overrides the per-field length cap.
    #[must_use]
    pub fn with_max_field_len(mut self, max_field_len: usize) -> Self {
        self.max_field_len = max_field_len;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_field_len: DEFAULT_MAX_FIELD_LEN,
        }
    }
}

/// Writes a value in its wire representation.
pub trait Encode {
    /// Error raised by the writer or by an unencodable value.
    type Error: From<std::io::Error> + std::error::Error + Send + Sync + 'static;

    /// Appends the encoded value to `writer`.
    fn encode<W>(&self, writer: &mut W) -> Result<(), Self::Error>
    where
        W: Write;

    /// Exact number of bytes [`encode`](Encode::encode) writes.
    fn size(&self) -> usize;
}

/// Reads a value from its wire representation.
pub trait Decode: Sized {
    /// Error raised by the reader or by malformed input.
    type Error: From<std::io::Error> + std::error::Error + Send + Sync + 'static;

    /// Reads one value, consuming exactly its encoded bytes.
    fn decode<R>(reader: &mut R, options: &DecodeOptions) -> Result<Self, Self::Error>
    where
        R: Read;
}

/// Reads a payload whose length was announced by a prefix.
pub(crate) fn read_payload<R: Read>(
    reader: &mut R,
    len: i64,
    options: &DecodeOptions,
) -> Result<Vec<u8>, CodecError> {
    if len < 0 {
        return Err(CodecError::NegativeLength(len));
    }
    let len = len as u64;
    if len > options.max_field_len as u64 {
        return Err(CodecError::LengthTooLarge {
            len,
            max: options.max_field_len,
        });
    }
    let mut buf = vec![0u8; len as usize];
    reader.read_exact(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode() {
        struct TestStruct(u16, bool);

        impl Encode for TestStruct {
            type Error = CodecError;

            fn encode<W: Write>(&self, writer: &mut W) -> Result<(), Self::Error> {
                self.0.encode(writer)?;
                self.1.encode(writer)
            }

            fn size(&self) -> usize {
                self.0.size() + self.1.size()
            }
        }

        impl Decode for TestStruct {
            type Error = CodecError;

            fn decode<R: Read>(reader: &mut R, options: &DecodeOptions) -> Result<Self, Self::Error> {
                Ok(TestStruct(
                    u16::decode(reader, options)?,
                    bool::decode(reader, options)?,
                ))
            }
        }

        let original = TestStruct(42, true);
        let mut buf = Vec::new();
        original.encode(&mut buf).unwrap();
        assert_eq!(buf, [0, 42, 1]);
        assert_eq!(buf.len(), original.size());

        let decoded = TestStruct::decode(&mut buf.as_slice(), &DecodeOptions::default()).unwrap();
        assert_eq!(decoded.0, 42);
        assert!(decoded.1);
    }

    #[test]
    fn payload_limits() {
        let options = DecodeOptions::default().with_max_field_len(4);
        let mut input: &[u8] = b"abcdef";

        assert!(matches!(
            read_payload(&mut input, -1, &options),
            Err(CodecError::NegativeLength(-1))
        ));
        assert!(matches!(
            read_payload(&mut input, 5, &options),
            Err(CodecError::LengthTooLarge { len: 5, max: 4 })
        ));
        assert_eq!(read_payload(&mut input, 4, &options).unwrap(), b"abcd");
        assert!(read_payload(&mut input, 4, &options)
            .unwrap_err()
            .is_truncated());
    }
}
