/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

use crate::ber::{
    BerCodec, BerType, Boolean, Encoding, Enumerated, Enumeration, Identifier, Integer,
    OctetString, SequenceOf, SetOf, read_framed, write_framed,
};
use crate::bytes::{BytesReader, BytesWriter};
use crate::error::BerParseError;

use super::{Filter, FilterSchema};

/// Search scope enumeration. Unknown values are carried raw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchScope(i32);

impl SearchScope {
    pub const BASE_OBJECT: SearchScope = SearchScope(0);
    pub const SINGLE_LEVEL: SearchScope = SearchScope(1);
    pub const WHOLE_SUBTREE: SearchScope = SearchScope(2);

    pub const fn new(value: i32) -> Self {
        SearchScope(value)
    }

    #[inline]
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl Enumeration for SearchScope {
    fn from_raw(raw: i32) -> Self {
        SearchScope(raw)
    }

    fn raw(self) -> i32 {
        self.0
    }
}

/// Alias dereferencing policy enumeration. Unknown values are carried raw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DerefAliases(i32);

impl DerefAliases {
    pub const NEVER_DEREF_ALIASES: DerefAliases = DerefAliases(0);
    pub const DEREF_IN_SEARCHING: DerefAliases = DerefAliases(1);
    pub const DEREF_FINDING_BASE_OBJ: DerefAliases = DerefAliases(2);
    pub const DEREF_ALWAYS: DerefAliases = DerefAliases(3);

    pub const fn new(value: i32) -> Self {
        DerefAliases(value)
    }

    #[inline]
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl Enumeration for DerefAliases {
    fn from_raw(raw: i32) -> Self {
        DerefAliases(raw)
    }

    fn raw(self) -> i32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest<'a> {
    pub base_object: &'a [u8],
    pub scope: SearchScope,
    pub deref_aliases: DerefAliases,
    pub size_limit: i32,
    pub time_limit: i32,
    pub types_only: bool,
    pub filter: Filter<'a>,
    pub attributes: Vec<&'a [u8]>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialAttribute<'a> {
    pub attr_type: &'a [u8],
    pub values: Vec<&'a [u8]>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultEntry<'a> {
    pub object_name: &'a [u8],
    pub attributes: Vec<PartialAttribute<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct SearchRequestSchema;

impl BerCodec for SearchRequestSchema {
    type Value<'a> = SearchRequest<'a>;

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        read_framed(self, reader)
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        write_framed(self, writer, value)
    }
}

impl BerType for SearchRequestSchema {
    fn identifier(&self) -> Identifier {
        Identifier::application(Encoding::Constructed, 3)
    }

    fn read_content<'a>(
        &self,
        reader: &mut BytesReader<'a>,
    ) -> Result<Self::Value<'a>, BerParseError> {
        let base_object = OctetString.read(reader)?;
        let scope = Enumerated::<SearchScope>::new().read(reader)?;
        let deref_aliases = Enumerated::<DerefAliases>::new().read(reader)?;
        let size_limit = Integer::<i32>::new().read(reader)?;
        let time_limit = Integer::<i32>::new().read(reader)?;
        let types_only = Boolean.read(reader)?;
        let filter = FilterSchema.read(reader)?;
        let attributes = SequenceOf(OctetString).read(reader)?;
        Ok(SearchRequest {
            base_object,
            scope,
            deref_aliases,
            size_limit,
            time_limit,
            types_only,
            filter,
            attributes,
        })
    }

    fn write_content<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        OctetString.write(writer, &value.base_object);
        Enumerated::<SearchScope>::new().write(writer, &value.scope);
        Enumerated::<DerefAliases>::new().write(writer, &value.deref_aliases);
        Integer::<i32>::new().write(writer, &value.size_limit);
        Integer::<i32>::new().write(writer, &value.time_limit);
        Boolean.write(writer, &value.types_only);
        FilterSchema.write(writer, &value.filter);
        SequenceOf(OctetString).write(writer, &value.attributes);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PartialAttributeSchema;

impl BerCodec for PartialAttributeSchema {
    type Value<'a> = PartialAttribute<'a>;

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        read_framed(self, reader)
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        write_framed(self, writer, value)
    }
}

impl BerType for PartialAttributeSchema {
    fn identifier(&self) -> Identifier {
        Identifier::universal(Encoding::Constructed, 16)
    }

    fn read_content<'a>(
        &self,
        reader: &mut BytesReader<'a>,
    ) -> Result<Self::Value<'a>, BerParseError> {
        let attr_type = OctetString.read(reader)?;
        let values = SetOf(OctetString).read(reader)?;
        Ok(PartialAttribute { attr_type, values })
    }

    fn write_content<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        OctetString.write(writer, &value.attr_type);
        SetOf(OctetString).write(writer, &value.values);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SearchResultEntrySchema;

impl BerCodec for SearchResultEntrySchema {
    type Value<'a> = SearchResultEntry<'a>;

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        read_framed(self, reader)
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        write_framed(self, writer, value)
    }
}

impl BerType for SearchResultEntrySchema {
    fn identifier(&self) -> Identifier {
        Identifier::application(Encoding::Constructed, 4)
    }

    fn read_content<'a>(
        &self,
        reader: &mut BytesReader<'a>,
    ) -> Result<Self::Value<'a>, BerParseError> {
        let object_name = OctetString.read(reader)?;
        let attributes = SequenceOf(PartialAttributeSchema).read(reader)?;
        Ok(SearchResultEntry {
            object_name,
            attributes,
        })
    }

    fn write_content<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        OctetString.write(writer, &value.object_name);
        SequenceOf(PartialAttributeSchema).write(writer, &value.attributes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_request_round_trip() {
        let request = SearchRequest {
            base_object: b"dc=example,dc=com",
            scope: SearchScope::WHOLE_SUBTREE,
            deref_aliases: DerefAliases::NEVER_DEREF_ALIASES,
            size_limit: 1000,
            time_limit: 30,
            types_only: false,
            filter: Filter::Present(b"objectClass"),
            attributes: vec![b"cn".as_slice(), b"mail".as_slice()],
        };
        let mut buf = Vec::new();
        SearchRequestSchema.write(&mut buf, &request);
        assert_eq!(buf[0], 0x63);

        let mut reader = BytesReader::new(&buf);
        assert_eq!(SearchRequestSchema.read(&mut reader).unwrap(), request);
        assert!(reader.is_empty());
    }

    #[test]
    fn unknown_scope_value_survives() {
        let request = SearchRequest {
            base_object: b"",
            scope: SearchScope::new(7),
            deref_aliases: DerefAliases::DEREF_ALWAYS,
            size_limit: 0,
            time_limit: 0,
            types_only: true,
            filter: Filter::Present(b"cn"),
            attributes: Vec::new(),
        };
        let mut buf = Vec::new();
        SearchRequestSchema.write(&mut buf, &request);

        let mut reader = BytesReader::new(&buf);
        let read = SearchRequestSchema.read(&mut reader).unwrap();
        assert_eq!(read.scope.value(), 7);
    }

    #[test]
    fn partial_attribute_values_are_a_set() {
        let attribute = PartialAttribute {
            attr_type: b"objectClass",
            values: vec![b"top".as_slice(), b"domain".as_slice()],
        };
        let mut buf = Vec::new();
        PartialAttributeSchema.write(&mut buf, &attribute);
        assert_eq!(
            buf,
            [
                0x30, 0x1c, // PartialAttribute sequence
                0x04, 0x0b, b'o', b'b', b'j', b'e', b'c', b't', b'C', b'l', b'a', b's', b's',
                0x31, 0x0d, // vals set
                0x04, 0x03, b't', b'o', b'p', //
                0x04, 0x06, b'd', b'o', b'm', b'a', b'i', b'n',
            ]
        );

        let mut reader = BytesReader::new(&buf);
        assert_eq!(PartialAttributeSchema.read(&mut reader).unwrap(), attribute);
    }

    #[test]
    fn entry_round_trip() {
        let entry = SearchResultEntry {
            object_name: b"dc=example,dc=com",
            attributes: vec![
                PartialAttribute {
                    attr_type: b"objectClass",
                    values: vec![b"top".as_slice(), b"domain".as_slice()],
                },
                PartialAttribute {
                    attr_type: b"dc",
                    values: vec![b"example".as_slice()],
                },
            ],
        };
        let mut buf = Vec::new();
        SearchResultEntrySchema.write(&mut buf, &entry);
        assert_eq!(buf[0], 0x64);

        let mut reader = BytesReader::new(&buf);
        assert_eq!(SearchResultEntrySchema.read(&mut reader).unwrap(), entry);
    }
}
