/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

use crate::ber::{
    BerCodec, BerType, Boolean, Encoding, Explicit, Identifier, OctetString, Optional, SequenceOf,
    SetOf, TagClass, read_framed, write_framed,
};
use crate::bytes::{BytesReader, BytesWriter};
use crate::error::BerParseError;

/// Search filter (RFC 4511 section 4.5.1.7).
///
/// `Not` is the one explicitly tagged alternative; every other
/// context-specific tag replaces the inner identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter<'a> {
    And(Vec<Filter<'a>>),
    Or(Vec<Filter<'a>>),
    Not(Box<Filter<'a>>),
    EqualityMatch(AttributeValueAssertion<'a>),
    Substrings(SubstringFilter<'a>),
    GreaterOrEqual(AttributeValueAssertion<'a>),
    LessOrEqual(AttributeValueAssertion<'a>),
    Present(&'a [u8]),
    ApproxMatch(AttributeValueAssertion<'a>),
    ExtensibleMatch(MatchingRuleAssertion<'a>),
}

impl<'a> Filter<'a> {
    pub fn equality(attribute_desc: &'a [u8], assertion_value: &'a [u8]) -> Self {
        Filter::EqualityMatch(AttributeValueAssertion {
            attribute_desc,
            assertion_value,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeValueAssertion<'a> {
    pub attribute_desc: &'a [u8],
    pub assertion_value: &'a [u8],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstringFilter<'a> {
    pub attr_type: &'a [u8],
    pub substrings: Vec<Substring<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Substring<'a> {
    Initial(&'a [u8]),
    Any(&'a [u8]),
    Final(&'a [u8]),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchingRuleAssertion<'a> {
    pub matching_rule: Option<&'a [u8]>,
    pub attr_type: Option<&'a [u8]>,
    pub match_value: &'a [u8],
    pub dn_attributes: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct FilterSchema;

impl BerCodec for FilterSchema {
    type Value<'a> = Filter<'a>;

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        let found = Identifier::peek(reader)?;
        if found.class() != TagClass::ContextSpecific {
            return Err(BerParseError::UnknownVariant(found));
        }
        match found.number() {
            0 => SetOf(FilterSchema)
                .context_specific(0)
                .read(reader)
                .map(Filter::And),
            1 => SetOf(FilterSchema)
                .context_specific(1)
                .read(reader)
                .map(Filter::Or),
            2 => Explicit::new(FilterSchema)
                .context_specific(2)
                .read(reader)
                .map(|inner| Filter::Not(Box::new(inner))),
            3 => AttributeValueAssertionSchema
                .context_specific(3)
                .read(reader)
                .map(Filter::EqualityMatch),
            4 => SubstringFilterSchema
                .context_specific(4)
                .read(reader)
                .map(Filter::Substrings),
            5 => AttributeValueAssertionSchema
                .context_specific(5)
                .read(reader)
                .map(Filter::GreaterOrEqual),
            6 => AttributeValueAssertionSchema
                .context_specific(6)
                .read(reader)
                .map(Filter::LessOrEqual),
            7 => OctetString
                .context_specific(7)
                .read(reader)
                .map(Filter::Present),
            8 => AttributeValueAssertionSchema
                .context_specific(8)
                .read(reader)
                .map(Filter::ApproxMatch),
            9 => MatchingRuleAssertionSchema
                .context_specific(9)
                .read(reader)
                .map(Filter::ExtensibleMatch),
            _ => Err(BerParseError::UnknownVariant(found)),
        }
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        match value {
            Filter::And(filters) => SetOf(FilterSchema).context_specific(0).write(writer, filters),
            Filter::Or(filters) => SetOf(FilterSchema).context_specific(1).write(writer, filters),
            Filter::Not(inner) => Explicit::new(FilterSchema)
                .context_specific(2)
                .write(writer, inner),
            Filter::EqualityMatch(ava) => AttributeValueAssertionSchema
                .context_specific(3)
                .write(writer, ava),
            Filter::Substrings(substrings) => SubstringFilterSchema
                .context_specific(4)
                .write(writer, substrings),
            Filter::GreaterOrEqual(ava) => AttributeValueAssertionSchema
                .context_specific(5)
                .write(writer, ava),
            Filter::LessOrEqual(ava) => AttributeValueAssertionSchema
                .context_specific(6)
                .write(writer, ava),
            Filter::Present(attr) => OctetString.context_specific(7).write(writer, attr),
            Filter::ApproxMatch(ava) => AttributeValueAssertionSchema
                .context_specific(8)
                .write(writer, ava),
            Filter::ExtensibleMatch(assertion) => MatchingRuleAssertionSchema
                .context_specific(9)
                .write(writer, assertion),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AttributeValueAssertionSchema;

impl BerCodec for AttributeValueAssertionSchema {
    type Value<'a> = AttributeValueAssertion<'a>;

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        read_framed(self, reader)
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        write_framed(self, writer, value)
    }
}

impl BerType for AttributeValueAssertionSchema {
    fn identifier(&self) -> Identifier {
        Identifier::universal(Encoding::Constructed, 16)
    }

    fn read_content<'a>(
        &self,
        reader: &mut BytesReader<'a>,
    ) -> Result<Self::Value<'a>, BerParseError> {
        let attribute_desc = OctetString.read(reader)?;
        let assertion_value = OctetString.read(reader)?;
        Ok(AttributeValueAssertion {
            attribute_desc,
            assertion_value,
        })
    }

    fn write_content<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        OctetString.write(writer, &value.attribute_desc);
        OctetString.write(writer, &value.assertion_value);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SubstringFilterSchema;

impl BerCodec for SubstringFilterSchema {
    type Value<'a> = SubstringFilter<'a>;

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        read_framed(self, reader)
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        write_framed(self, writer, value)
    }
}

impl BerType for SubstringFilterSchema {
    fn identifier(&self) -> Identifier {
        Identifier::universal(Encoding::Constructed, 16)
    }

    fn read_content<'a>(
        &self,
        reader: &mut BytesReader<'a>,
    ) -> Result<Self::Value<'a>, BerParseError> {
        let attr_type = OctetString.read(reader)?;
        let substrings = SequenceOf(SubstringSchema).read(reader)?;
        Ok(SubstringFilter {
            attr_type,
            substrings,
        })
    }

    fn write_content<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        OctetString.write(writer, &value.attr_type);
        SequenceOf(SubstringSchema).write(writer, &value.substrings);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SubstringSchema;

impl BerCodec for SubstringSchema {
    type Value<'a> = Substring<'a>;

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        let found = Identifier::peek(reader)?;
        if found.class() != TagClass::ContextSpecific {
            return Err(BerParseError::UnknownVariant(found));
        }
        match found.number() {
            0 => OctetString
                .context_specific(0)
                .read(reader)
                .map(Substring::Initial),
            1 => OctetString
                .context_specific(1)
                .read(reader)
                .map(Substring::Any),
            2 => OctetString
                .context_specific(2)
                .read(reader)
                .map(Substring::Final),
            _ => Err(BerParseError::UnknownVariant(found)),
        }
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        match value {
            Substring::Initial(bytes) => OctetString.context_specific(0).write(writer, bytes),
            Substring::Any(bytes) => OctetString.context_specific(1).write(writer, bytes),
            Substring::Final(bytes) => OctetString.context_specific(2).write(writer, bytes),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MatchingRuleAssertionSchema;

impl BerCodec for MatchingRuleAssertionSchema {
    type Value<'a> = MatchingRuleAssertion<'a>;

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        read_framed(self, reader)
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        write_framed(self, writer, value)
    }
}

impl BerType for MatchingRuleAssertionSchema {
    fn identifier(&self) -> Identifier {
        Identifier::universal(Encoding::Constructed, 16)
    }

    fn read_content<'a>(
        &self,
        reader: &mut BytesReader<'a>,
    ) -> Result<Self::Value<'a>, BerParseError> {
        let matching_rule = Optional(OctetString.context_specific(1)).read(reader)?;
        let attr_type = Optional(OctetString.context_specific(2)).read(reader)?;
        let match_value = OctetString.context_specific(3).read(reader)?;
        // dnAttributes DEFAULT FALSE
        let dn_attributes = Optional(Boolean.context_specific(4))
            .read(reader)?
            .unwrap_or(false);
        Ok(MatchingRuleAssertion {
            matching_rule,
            attr_type,
            match_value,
            dn_attributes,
        })
    }

    fn write_content<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        Optional(OctetString.context_specific(1)).write(writer, &value.matching_rule);
        Optional(OctetString.context_specific(2)).write(writer, &value.attr_type);
        OctetString.context_specific(3).write(writer, &value.match_value);
        if value.dn_attributes {
            Boolean.context_specific(4).write(writer, &true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(filter: &Filter<'_>) -> Vec<u8> {
        let mut buf = Vec::new();
        FilterSchema.write(&mut buf, filter);
        let mut reader = BytesReader::new(&buf);
        assert_eq!(&FilterSchema.read(&mut reader).unwrap(), filter);
        assert!(reader.is_empty());
        buf
    }

    #[test]
    fn equality_match() {
        let buf = round_trip(&Filter::equality(b"uid", b"jdoe"));
        assert_eq!(
            buf,
            [0xa3, 0x0b, 0x04, 0x03, b'u', b'i', b'd', 0x04, 0x04, b'j', b'd', b'o', b'e']
        );
    }

    #[test]
    fn and_of_two() {
        let filter = Filter::And(vec![
            Filter::equality(b"objectClass", b"person"),
            Filter::equality(b"uid", b"jdoe"),
        ]);
        let buf = round_trip(&filter);
        assert_eq!(buf[0], 0xa0);
    }

    #[test]
    fn not_is_explicit() {
        let buf = round_trip(&Filter::Not(Box::new(Filter::Present(b"cn"))));
        // [2] EXPLICIT wraps the complete inner TLV
        assert_eq!(buf, [0xa2, 0x04, 0x87, 0x02, b'c', b'n']);
    }

    #[test]
    fn present_is_primitive() {
        let buf = round_trip(&Filter::Present(b"objectClass"));
        assert_eq!(buf[0], 0x87);
    }

    #[test]
    fn substrings_filter() {
        let filter = Filter::Substrings(SubstringFilter {
            attr_type: b"cn",
            substrings: vec![
                Substring::Initial(b"Jo"),
                Substring::Any(b"hn"),
                Substring::Final(b"oe"),
            ],
        });
        let buf = round_trip(&filter);
        assert_eq!(buf[0], 0xa4);
        // initial [0], any [1] and final [2] in order
        assert_eq!(&buf[8..12], [0x80, 0x02, b'J', b'o']);
        assert_eq!(&buf[12..16], [0x81, 0x02, b'h', b'n']);
        assert_eq!(&buf[16..20], [0x82, 0x02, b'o', b'e']);
    }

    #[test]
    fn extensible_match_defaults() {
        let filter = Filter::ExtensibleMatch(MatchingRuleAssertion {
            matching_rule: None,
            attr_type: Some(b"uid"),
            match_value: b"jdoe",
            dn_attributes: false,
        });
        let buf = round_trip(&filter);
        // absent dnAttributes writes nothing
        assert!(!buf.contains(&0x84));
    }

    #[test]
    fn extensible_match_full() {
        round_trip(&Filter::ExtensibleMatch(MatchingRuleAssertion {
            matching_rule: Some(b"caseIgnoreMatch"),
            attr_type: Some(b"cn"),
            match_value: b"fred",
            dn_attributes: true,
        }));
    }

    #[test]
    fn nested_not() {
        round_trip(&Filter::Not(Box::new(Filter::And(vec![
            Filter::equality(b"ou", b"People"),
            Filter::Not(Box::new(Filter::Present(b"manager"))),
        ]))));
    }

    #[test]
    fn universal_identifier_is_no_alternative() {
        let data = [0x04, 0x03, b'u', b'i', b'd'];
        let mut reader = BytesReader::new(&data);
        let e = FilterSchema.read(&mut reader).unwrap_err();
        assert!(matches!(e, BerParseError::UnknownVariant(_)));
    }

    #[test]
    fn unknown_context_tag() {
        let data = [0xaa, 0x00];
        let mut reader = BytesReader::new(&data);
        let e = FilterSchema.read(&mut reader).unwrap_err();
        assert_eq!(
            e,
            BerParseError::UnknownVariant(Identifier::context_specific(Encoding::Constructed, 10))
        );
    }
}
