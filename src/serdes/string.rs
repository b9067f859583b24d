use std::{
    io::{Read, Write},
    mem::size_of,
};

use super::{read_payload, CodecError, Decode, DecodeOptions, Encode};

impl Encode for str {
    type Error = CodecError;

    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), Self::Error> {
        let len = u16::try_from(self.len()).map_err(|_| CodecError::LengthTooLarge {
            len: self.len() as u64,
            max: u16::MAX as usize,
        })?;
        len.encode(writer)?;
        writer.write_all(self.as_bytes())?;
        Ok(())
    }

    fn size(&self) -> usize {
        size_of::<u16>() + self.len()
    }
}

impl Encode for String {
    type Error = CodecError;

    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), Self::Error> {
        self.as_str().encode(writer)
    }

    fn size(&self) -> usize {
        self.as_str().size()
    }
}

impl Decode for String {
    type Error = CodecError;

    fn decode<R: Read>(reader: &mut R, options: &DecodeOptions) -> Result<Self, Self::Error> {
        let len = u16::decode(reader, options)?;
        let buf = read_payload(reader, i64::from(len), options)?;
        Ok(String::from_utf8(buf)?)
    }
}
