use std::{
    io::{Read, Write},
    mem::size_of,
};

use super::{CodecError, Decode, DecodeOptions, Encode};

impl Encode for bool {
    type Error = CodecError;

    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), Self::Error> {
        u8::from(*self).encode(writer)
    }

    fn size(&self) -> usize {
        size_of::<u8>()
    }
}

impl Decode for bool {
    type Error = CodecError;

    fn decode<R: Read>(reader: &mut R, options: &DecodeOptions) -> Result<Self, Self::Error> {
        match u8::decode(reader, options)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(CodecError::InvalidBool(other)),
        }
    }
}
