/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

use crate::ber::{
    BerCodec, BerType, Boolean, Encoding, Enumerated, Enumeration, Identifier, OctetString,
    Optional, SequenceOf, read_framed, write_framed,
};
use crate::bytes::{BytesReader, BytesWriter};
use crate::error::BerParseError;

use super::{AttributeValueAssertion, AttributeValueAssertionSchema, PartialAttribute, PartialAttributeSchema};

/// Modify operation enumeration: add(0), delete(1), replace(2). Unknown
/// values are carried raw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModifyOperation(i32);

impl ModifyOperation {
    pub const ADD: ModifyOperation = ModifyOperation(0);
    pub const DELETE: ModifyOperation = ModifyOperation(1);
    pub const REPLACE: ModifyOperation = ModifyOperation(2);

    pub const fn new(value: i32) -> Self {
        ModifyOperation(value)
    }

    #[inline]
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl Enumeration for ModifyOperation {
    fn from_raw(raw: i32) -> Self {
        ModifyOperation(raw)
    }

    fn raw(self) -> i32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modification<'a> {
    pub operation: ModifyOperation,
    pub attribute: PartialAttribute<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifyRequest<'a> {
    pub object: &'a [u8],
    pub changes: Vec<Modification<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRequest<'a> {
    pub entry: &'a [u8],
    pub attributes: Vec<PartialAttribute<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifyDnRequest<'a> {
    pub entry: &'a [u8],
    pub new_rdn: &'a [u8],
    pub delete_old_rdn: bool,
    pub new_superior: Option<&'a [u8]>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareRequest<'a> {
    pub entry: &'a [u8],
    pub ava: AttributeValueAssertion<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ModificationSchema;

impl BerCodec for ModificationSchema {
    type Value<'a> = Modification<'a>;

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        read_framed(self, reader)
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        write_framed(self, writer, value)
    }
}

impl BerType for ModificationSchema {
    fn identifier(&self) -> Identifier {
        Identifier::universal(Encoding::Constructed, 16)
    }

    fn read_content<'a>(
        &self,
        reader: &mut BytesReader<'a>,
    ) -> Result<Self::Value<'a>, BerParseError> {
        let operation = Enumerated::<ModifyOperation>::new().read(reader)?;
        let attribute = PartialAttributeSchema.read(reader)?;
        Ok(Modification {
            operation,
            attribute,
        })
    }

    fn write_content<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        Enumerated::<ModifyOperation>::new().write(writer, &value.operation);
        PartialAttributeSchema.write(writer, &value.attribute);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ModifyRequestSchema;

impl BerCodec for ModifyRequestSchema {
    type Value<'a> = ModifyRequest<'a>;

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        read_framed(self, reader)
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        write_framed(self, writer, value)
    }
}

impl BerType for ModifyRequestSchema {
    fn identifier(&self) -> Identifier {
        Identifier::application(Encoding::Constructed, 6)
    }

    fn read_content<'a>(
        &self,
        reader: &mut BytesReader<'a>,
    ) -> Result<Self::Value<'a>, BerParseError> {
        let object = OctetString.read(reader)?;
        let changes = SequenceOf(ModificationSchema).read(reader)?;
        Ok(ModifyRequest { object, changes })
    }

    fn write_content<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        OctetString.write(writer, &value.object);
        SequenceOf(ModificationSchema).write(writer, &value.changes);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AddRequestSchema;

impl BerCodec for AddRequestSchema {
    type Value<'a> = AddRequest<'a>;

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        read_framed(self, reader)
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        write_framed(self, writer, value)
    }
}

impl BerType for AddRequestSchema {
    fn identifier(&self) -> Identifier {
        Identifier::application(Encoding::Constructed, 8)
    }

    fn read_content<'a>(
        &self,
        reader: &mut BytesReader<'a>,
    ) -> Result<Self::Value<'a>, BerParseError> {
        let entry = OctetString.read(reader)?;
        let attributes = SequenceOf(PartialAttributeSchema).read(reader)?;
        Ok(AddRequest { entry, attributes })
    }

    fn write_content<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        OctetString.write(writer, &value.entry);
        SequenceOf(PartialAttributeSchema).write(writer, &value.attributes);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ModifyDnRequestSchema;

impl BerCodec for ModifyDnRequestSchema {
    type Value<'a> = ModifyDnRequest<'a>;

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        read_framed(self, reader)
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        write_framed(self, writer, value)
    }
}

impl BerType for ModifyDnRequestSchema {
    fn identifier(&self) -> Identifier {
        Identifier::application(Encoding::Constructed, 12)
    }

    fn read_content<'a>(
        &self,
        reader: &mut BytesReader<'a>,
    ) -> Result<Self::Value<'a>, BerParseError> {
        let entry = OctetString.read(reader)?;
        let new_rdn = OctetString.read(reader)?;
        let delete_old_rdn = Boolean.read(reader)?;
        let new_superior = Optional(OctetString.context_specific(0)).read(reader)?;
        Ok(ModifyDnRequest {
            entry,
            new_rdn,
            delete_old_rdn,
            new_superior,
        })
    }

    fn write_content<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        OctetString.write(writer, &value.entry);
        OctetString.write(writer, &value.new_rdn);
        Boolean.write(writer, &value.delete_old_rdn);
        Optional(OctetString.context_specific(0)).write(writer, &value.new_superior);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CompareRequestSchema;

impl BerCodec for CompareRequestSchema {
    type Value<'a> = CompareRequest<'a>;

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        read_framed(self, reader)
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        write_framed(self, writer, value)
    }
}

impl BerType for CompareRequestSchema {
    fn identifier(&self) -> Identifier {
        Identifier::application(Encoding::Constructed, 14)
    }

    fn read_content<'a>(
        &self,
        reader: &mut BytesReader<'a>,
    ) -> Result<Self::Value<'a>, BerParseError> {
        let entry = OctetString.read(reader)?;
        let ava = AttributeValueAssertionSchema.read(reader)?;
        Ok(CompareRequest { entry, ava })
    }

    fn write_content<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        OctetString.write(writer, &value.entry);
        AttributeValueAssertionSchema.write(writer, &value.ava);
    }
}
