use std::io::{Read, Write};

use bytes::Bytes;

use super::{ColumnPredicate, CompareOp};
use crate::{
    observability::log_debug,
    serdes::{read_payload, CodecError, Decode, DecodeOptions, Encode},
};

impl Encode for CompareOp {
    type Error = CodecError;

    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), Self::Error> {
        self.name().encode(writer)
    }

    fn size(&self) -> usize {
        self.name().size()
    }
}

impl Decode for CompareOp {
    type Error = CodecError;

    fn decode<R: Read>(reader: &mut R, options: &DecodeOptions) -> Result<Self, Self::Error> {
        String::decode(reader, options)?.parse()
    }
}

/// Layout: threshold (`i32` length + raw bytes, `0` for absent), column
/// (byte array), operator name, missing-column flag. No version byte.
impl Encode for ColumnPredicate {
    type Error = CodecError;

    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), Self::Error> {
        let threshold = self.threshold_or_empty();
        let len = i32::try_from(threshold.len()).map_err(|_| CodecError::LengthTooLarge {
            len: threshold.len() as u64,
            max: i32::MAX as usize,
        })?;
        len.encode(writer)?;
        writer.write_all(threshold)?;
        self.column.encode(writer)?;
        self.op.encode(writer)?;
        self.exclude_row_if_column_missing.encode(writer)
    }

    fn size(&self) -> usize {
        0i32.size()
            + self.threshold_or_empty().len()
            + self.column.size()
            + self.op.size()
            + self.exclude_row_if_column_missing.size()
    }
}

/// Decoded predicates always carry a threshold, empty when the wire said `0`.
impl Decode for ColumnPredicate {
    type Error = CodecError;

    fn decode<R: Read>(reader: &mut R, options: &DecodeOptions) -> Result<Self, Self::Error> {
        let threshold_len = i32::decode(reader, options)?;
        let threshold = read_payload(reader, i64::from(threshold_len), options)?;
        let column = Bytes::decode(reader, options)?;
        let op = CompareOp::decode(reader, options)?;
        let exclude_row_if_column_missing = bool::decode(reader, options)?;

        Ok(ColumnPredicate::new(column, op, threshold)?
            .with_exclude_row_if_column_missing(exclude_row_if_column_missing))
    }
}

impl ColumnPredicate {
    /// Encodes the predicate for shipping to another node.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        let mut buf = Vec::with_capacity(self.size());
        self.encode(&mut buf)?;
        Ok(buf)
    }

    /// Decodes a predicate with default limits. The whole input must be
    /// consumed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        Self::from_bytes_with(bytes, &DecodeOptions::default())
    }

    /// Decodes a predicate with explicit limits. The whole input must be
    /// consumed.
    pub fn from_bytes_with(bytes: &[u8], options: &DecodeOptions) -> Result<Self, CodecError> {
        let mut input = bytes;
        let decoded = Self::decode(&mut input, options).and_then(|predicate| {
            if input.is_empty() {
                Ok(predicate)
            } else {
                Err(CodecError::TrailingBytes(input.len()))
            }
        });
        match &decoded {
            Ok(predicate) => log_debug!(
                component = "codec",
                event = "predicate_decoded",
                op = %predicate.op,
                column_len = predicate.column.len(),
                threshold_len = predicate.threshold_or_empty().len(),
            ),
            Err(err) => log_debug!(
                component = "codec",
                event = "predicate_decode_failed",
                input_len = bytes.len(),
                error = %err,
            ),
        }
        decoded
    }
}
