/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

use crate::bytes::{BytesReader, BytesWriter};
use crate::error::BerParseError;

use super::schema::{read_framed, write_framed};
use super::{BerCodec, BerType, Encoding, Identifier};

/// SEQUENCE over a tuple of field schemas, read and written in declaration
/// order. Bytes left over after the last field are an error.
#[derive(Debug, Clone, Copy)]
pub struct Sequence<F>(pub F);

macro_rules! impl_sequence {
    ($($field:ident : $idx:tt),+) => {
        impl<$($field: BerCodec),+> BerCodec for Sequence<($($field,)+)> {
            type Value<'a> = ($($field::Value<'a>,)+);

            fn read<'a>(
                &self,
                reader: &mut BytesReader<'a>,
            ) -> Result<Self::Value<'a>, BerParseError> {
                read_framed(self, reader)
            }

            fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
                write_framed(self, writer, value)
            }
        }

        impl<$($field: BerCodec),+> BerType for Sequence<($($field,)+)> {
            fn identifier(&self) -> Identifier {
                Identifier::universal(Encoding::Constructed, 16)
            }

            fn read_content<'a>(
                &self,
                reader: &mut BytesReader<'a>,
            ) -> Result<Self::Value<'a>, BerParseError> {
                Ok(($(self.0.$idx.read(reader)?,)+))
            }

            fn write_content<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
                $(self.0.$idx.write(writer, &value.$idx);)+
            }
        }
    };
}

impl_sequence!(A: 0);
impl_sequence!(A: 0, B: 1);
impl_sequence!(A: 0, B: 1, C: 2);
impl_sequence!(A: 0, B: 1, C: 2, D: 3);
impl_sequence!(A: 0, B: 1, C: 2, D: 3, E: 4);
impl_sequence!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
impl_sequence!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6);
impl_sequence!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7);

/// SEQUENCE OF: zero or more elements of one schema, order preserved.
#[derive(Debug, Clone, Copy)]
pub struct SequenceOf<T>(pub T);

impl<T: BerCodec> BerCodec for SequenceOf<T> {
    type Value<'a> = Vec<T::Value<'a>>;

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        read_framed(self, reader)
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        write_framed(self, writer, value)
    }
}

impl<T: BerCodec> BerType for SequenceOf<T> {
    fn identifier(&self) -> Identifier {
        Identifier::universal(Encoding::Constructed, 16)
    }

    fn read_content<'a>(
        &self,
        reader: &mut BytesReader<'a>,
    ) -> Result<Self::Value<'a>, BerParseError> {
        let mut values = Vec::new();
        while !reader.is_empty() {
            values.push(self.0.read(reader)?);
        }
        Ok(values)
    }

    fn write_content<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        for element in value {
            self.0.write(writer, element);
        }
    }
}

/// SET OF: same wire discipline as SEQUENCE OF under tag number 17. Element
/// order is preserved in both directions; no set ordering is enforced.
#[derive(Debug, Clone, Copy)]
pub struct SetOf<T>(pub T);

impl<T: BerCodec> BerCodec for SetOf<T> {
    type Value<'a> = Vec<T::Value<'a>>;

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        read_framed(self, reader)
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        write_framed(self, writer, value)
    }
}

impl<T: BerCodec> BerType for SetOf<T> {
    fn identifier(&self) -> Identifier {
        Identifier::universal(Encoding::Constructed, 17)
    }

    fn read_content<'a>(
        &self,
        reader: &mut BytesReader<'a>,
    ) -> Result<Self::Value<'a>, BerParseError> {
        let mut values = Vec::new();
        while !reader.is_empty() {
            values.push(self.0.read(reader)?);
        }
        Ok(values)
    }

    fn write_content<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        for element in value {
            self.0.write(writer, element);
        }
    }
}

/// OPTIONAL field. Not a TLV itself: absent values write nothing, and a
/// non-matching identifier on read leaves the reader untouched.
#[derive(Debug, Clone, Copy)]
pub struct Optional<T>(pub T);

impl<T: BerType> BerCodec for Optional<T> {
    type Value<'a> = Option<T::Value<'a>>;

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        if reader.is_empty() {
            return Ok(None);
        }
        match Identifier::peek(reader) {
            Ok(found) if found == self.0.identifier() => self.0.read(reader).map(Some),
            _ => Ok(None),
        }
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        if let Some(value) = value {
            self.0.write(writer, value);
        }
    }
}
