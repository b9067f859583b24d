use std::io::{Read, Write};

use super::{CodecError, Decode, DecodeOptions, Encode};

/// Zero-compressed, variable-length encoded `i32`.
///
/// Values in `-112..=127` take one byte. Anything else is a marker byte
/// carrying sign and byte count, followed by the big-endian magnitude with
/// leading zero bytes stripped (negative values are stored one's-complemented).
/// This is the length prefix for byte arrays on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VInt(pub i32);

impl VInt {
    fn payload_len(value: i64) -> usize {
        let magnitude = if value < 0 { !value } else { value };
        (64 - magnitude.leading_zeros() as usize).div_ceil(8)
    }

    fn is_single_byte(value: i64) -> bool {
        (-112..=127).contains(&value)
    }
}

impl Encode for VInt {
    type Error = CodecError;

    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), Self::Error> {
        let value = i64::from(self.0);
        if Self::is_single_byte(value) {
            return (value as u8).encode(writer);
        }
        let (marker_base, magnitude) = if value < 0 {
            (-120i64, !value)
        } else {
            (-112i64, value)
        };
        let len = Self::payload_len(value);
        ((marker_base - len as i64) as u8).encode(writer)?;
        for idx in (0..len).rev() {
            ((magnitude >> (idx * 8)) as u8).encode(writer)?;
        }
        Ok(())
    }

    fn size(&self) -> usize {
        let value = i64::from(self.0);
        if Self::is_single_byte(value) {
            1
        } else {
            1 + Self::payload_len(value)
        }
    }
}

impl Decode for VInt {
    type Error = CodecError;

    fn decode<R: Read>(reader: &mut R, options: &DecodeOptions) -> Result<Self, Self::Error> {
        let marker = u8::decode(reader, options)? as i8;
        if marker >= -112 {
            return Ok(VInt(i32::from(marker)));
        }
        let negative = marker < -120;
        let len = if negative {
            -120 - i32::from(marker)
        } else {
            -112 - i32::from(marker)
        };
        let mut magnitude = 0i64;
        for _ in 0..len {
            magnitude = (magnitude << 8) | i64::from(u8::decode(reader, options)?);
        }
        let value = if negative { !magnitude } else { magnitude };
        i32::try_from(value)
            .map(VInt)
            .map_err(|_| CodecError::MalformedVarInt)
    }
}
