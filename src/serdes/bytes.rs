use std::io::{Read, Write};

use ::bytes::Bytes;

use super::{read_payload, CodecError, Decode, DecodeOptions, Encode, VInt};

fn vint_len(len: usize) -> Result<VInt, CodecError> {
    i32::try_from(len)
        .map(VInt)
        .map_err(|_| CodecError::LengthTooLarge {
            len: len as u64,
            max: i32::MAX as usize,
        })
}

impl Encode for [u8] {
    type Error = CodecError;

    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), Self::Error> {
        vint_len(self.len())?.encode(writer)?;
        writer.write_all(self)?;
        Ok(())
    }

    fn size(&self) -> usize {
        VInt(self.len() as i32).size() + self.len()
    }
}

impl Encode for Bytes {
    type Error = CodecError;

    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), Self::Error> {
        <[u8]>::encode(self, writer)
    }

    fn size(&self) -> usize {
        <[u8]>::size(self)
    }
}

impl Decode for Bytes {
    type Error = CodecError;

    fn decode<R: Read>(reader: &mut R, options: &DecodeOptions) -> Result<Self, Self::Error> {
        let VInt(len) = VInt::decode(reader, options)?;
        Ok(read_payload(reader, i64::from(len), options)?.into())
    }
}
