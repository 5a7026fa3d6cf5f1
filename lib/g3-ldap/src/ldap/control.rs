/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

use crate::ber::{
    BerCodec, BerType, Boolean, Encoding, Identifier, OctetString, Optional, read_framed,
    write_framed,
};
use crate::bytes::{BytesReader, BytesWriter};
use crate::error::BerParseError;

/// Control attached to an LDAPMessage. The control type is the OID in its
/// dotted string form, as carried on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control<'a> {
    pub control_type: &'a [u8],
    pub criticality: bool,
    pub control_value: Option<&'a [u8]>,
}

#[derive(Debug, Clone, Copy)]
pub struct ControlSchema;

impl BerCodec for ControlSchema {
    type Value<'a> = Control<'a>;

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        read_framed(self, reader)
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        write_framed(self, writer, value)
    }
}

impl BerType for ControlSchema {
    fn identifier(&self) -> Identifier {
        Identifier::universal(Encoding::Constructed, 16)
    }

    fn read_content<'a>(
        &self,
        reader: &mut BytesReader<'a>,
    ) -> Result<Self::Value<'a>, BerParseError> {
        let control_type = OctetString.read(reader)?;
        let criticality = Boolean.read(reader)?;
        let control_value = Optional(OctetString).read(reader)?;
        Ok(Control {
            control_type,
            criticality,
            control_value,
        })
    }

    fn write_content<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        OctetString.write(writer, &value.control_type);
        Boolean.write(writer, &value.criticality);
        Optional(OctetString).write(writer, &value.control_value);
    }
}
