/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

use crate::bytes::{BytesReader, BytesWriter, CountWriter};
use crate::error::BerParseError;

use super::{Encoding, Identifier, Length, TagClass};

/// A schema value that can move one domain value between its wire form and
/// memory, in both directions.
///
/// This is the unit of composition. Most implementors are TLV-shaped and
/// implement [`BerType`] as well; `Optional` and the CHOICE schemas are the
/// exceptions, they frame nothing themselves.
pub trait BerCodec {
    type Value<'a>;

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError>;

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>);
}

/// A TLV-shaped schema value: an expected identifier plus a content codec.
///
/// Framing is shared through [`read_framed`] and [`write_framed`]; the
/// tagging operators build new descriptors and never touch the original.
pub trait BerType: BerCodec {
    fn identifier(&self) -> Identifier;

    fn read_content<'a>(
        &self,
        reader: &mut BytesReader<'a>,
    ) -> Result<Self::Value<'a>, BerParseError>;

    fn write_content<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>);

    fn tagged(self, class: TagClass, number: u32) -> Implicit<Self>
    where
        Self: Sized,
    {
        Implicit {
            identifier: self.identifier().with_tag(class, number),
            inner: self,
        }
    }

    fn context_specific(self, number: u32) -> Implicit<Self>
    where
        Self: Sized,
    {
        self.tagged(TagClass::ContextSpecific, number)
    }

    fn application(self, number: u32) -> Implicit<Self>
    where
        Self: Sized,
    {
        self.tagged(TagClass::Application, number)
    }
}

/// Read one TLV of `schema`: identifier equality, definite length, content
/// parsed from a carved sub-reader that must end up empty.
pub fn read_framed<'a, T: BerType>(
    schema: &T,
    reader: &mut BytesReader<'a>,
) -> Result<T::Value<'a>, BerParseError> {
    let found = Identifier::read(reader)?;
    let expected = schema.identifier();
    if found != expected {
        return Err(BerParseError::IdentifierMismatch { expected, found });
    }

    let length = Length::read_definite(reader)?;
    let mut content = reader
        .sub_reader(length)
        .map_err(|_| BerParseError::LengthInvalid)?;
    let value = schema.read_content(&mut content)?;
    if !content.is_empty() {
        return Err(BerParseError::TrailingBytes);
    }
    Ok(value)
}

/// Write one TLV of `schema`. The content codec runs twice: once against a
/// [`CountWriter`] for the length prefix, once against the real writer.
pub fn write_framed<T: BerType, W: BytesWriter>(
    schema: &T,
    writer: &mut W,
    value: &T::Value<'_>,
) {
    schema.identifier().write(writer);
    let mut counter = CountWriter::default();
    schema.write_content(&mut counter, value);
    Length::write_definite(counter.len(), writer);
    schema.write_content(writer, value);
}

/// Implicitly tagged type: the underlying identifier is replaced, the
/// content codec stays the same.
#[derive(Debug, Clone, Copy)]
pub struct Implicit<T> {
    identifier: Identifier,
    inner: T,
}

impl<T: BerType> BerCodec for Implicit<T> {
    type Value<'a> = T::Value<'a>;

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        read_framed(self, reader)
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        write_framed(self, writer, value)
    }
}

impl<T: BerType> BerType for Implicit<T> {
    fn identifier(&self) -> Identifier {
        self.identifier
    }

    fn read_content<'a>(
        &self,
        reader: &mut BytesReader<'a>,
    ) -> Result<Self::Value<'a>, BerParseError> {
        self.inner.read_content(reader)
    }

    fn write_content<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        self.inner.write_content(writer, value)
    }
}

/// Explicitly tagged type: an outer constructed TLV holding the inner TLV
/// unchanged. Context-specific 0 unless retagged.
#[derive(Debug, Clone, Copy)]
pub struct Explicit<T> {
    inner: T,
}

impl<T: BerCodec> Explicit<T> {
    pub fn new(inner: T) -> Self {
        Explicit { inner }
    }
}

impl<T: BerCodec> BerCodec for Explicit<T> {
    type Value<'a> = T::Value<'a>;

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        read_framed(self, reader)
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        write_framed(self, writer, value)
    }
}

impl<T: BerCodec> BerType for Explicit<T> {
    fn identifier(&self) -> Identifier {
        Identifier::context_specific(Encoding::Constructed, 0)
    }

    fn read_content<'a>(
        &self,
        reader: &mut BytesReader<'a>,
    ) -> Result<Self::Value<'a>, BerParseError> {
        self.inner.read(reader)
    }

    fn write_content<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        self.inner.write(writer, value)
    }
}
