use crate::{
    byte_reader::ByteReader, byte_writer::ByteWrite, error::SerdeErr, serde::Serde,
    ConstByteLength,
};

// Every number is written little-endian, floats as raw IEEE-754 bits.
macro_rules! impl_serde_number {
    ($type:ty) => {
        impl Serde for $type {
            fn ser(&self, writer: &mut dyn ByteWrite) {
                writer.write_bytes(&self.to_le_bytes());
            }

            fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
                let bytes = reader.read_array::<{ std::mem::size_of::<$type>() }>()?;
                Ok(<$type>::from_le_bytes(bytes))
            }

            fn byte_length(&self) -> usize {
                std::mem::size_of::<$type>()
            }
        }

        impl ConstByteLength for $type {
            fn const_byte_length() -> usize {
                std::mem::size_of::<$type>()
            }
        }
    };
}

impl_serde_number!(u8);
impl_serde_number!(u16);
impl_serde_number!(f32);

impl<T: Serde + Copy + Default, const N: usize> Serde for [T; N] {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        for item in self {
            item.ser(writer);
        }
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let mut output = [T::default(); N];
        for item in output.iter_mut() {
            *item = T::de(reader)?;
        }
        Ok(output)
    }
}

impl<T: ConstByteLength, const N: usize> ConstByteLength for [T; N] {
    fn const_byte_length() -> usize {
        T::const_byte_length() * N
    }
}
