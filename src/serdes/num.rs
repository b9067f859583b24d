use std::{
    io::{Read, Write},
    mem::size_of,
};

use super::{CodecError, Decode, DecodeOptions, Encode};

macro_rules! implement_encode_decode {
    ($struct_name:ident) => {
        impl Encode for $struct_name {
            type Error = CodecError;

            fn encode<W: Write>(&self, writer: &mut W) -> Result<(), Self::Error> {
                writer.write_all(&self.to_be_bytes())?;
                Ok(())
            }

            fn size(&self) -> usize {
                size_of::<Self>()
            }
        }

        impl Decode for $struct_name {
            type Error = CodecError;

            fn decode<R: Read>(reader: &mut R, _: &DecodeOptions) -> Result<Self, Self::Error> {
                let mut buf = [0; size_of::<Self>()];
                reader.read_exact(&mut buf)?;
                Ok(Self::from_be_bytes(buf))
            }
        }
    };
}

implement_encode_decode!(u8);
implement_encode_decode!(u16);
implement_encode_decode!(i32);
