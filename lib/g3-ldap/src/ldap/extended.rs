/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

use crate::ber::{
    BerCodec, BerType, Encoding, Identifier, OctetString, Optional, read_framed, write_framed,
};
use crate::bytes::{BytesReader, BytesWriter};
use crate::error::BerParseError;

use super::LdapResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendedRequest<'a> {
    pub request_name: &'a [u8],
    pub request_value: Option<&'a [u8]>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendedResponse<'a> {
    pub result: LdapResult<'a>,
    pub response_name: Option<&'a [u8]>,
    pub response_value: Option<&'a [u8]>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntermediateResponse<'a> {
    pub response_name: Option<&'a [u8]>,
    pub response_value: Option<&'a [u8]>,
}

#[derive(Debug, Clone, Copy)]
pub struct ExtendedRequestSchema;

impl BerCodec for ExtendedRequestSchema {
    type Value<'a> = ExtendedRequest<'a>;

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        read_framed(self, reader)
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        write_framed(self, writer, value)
    }
}

impl BerType for ExtendedRequestSchema {
    fn identifier(&self) -> Identifier {
        Identifier::application(Encoding::Constructed, 23)
    }

    fn read_content<'a>(
        &self,
        reader: &mut BytesReader<'a>,
    ) -> Result<Self::Value<'a>, BerParseError> {
        let request_name = OctetString.context_specific(0).read(reader)?;
        let request_value = Optional(OctetString.context_specific(1)).read(reader)?;
        Ok(ExtendedRequest {
            request_name,
            request_value,
        })
    }

    fn write_content<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        OctetString.context_specific(0).write(writer, &value.request_name);
        Optional(OctetString.context_specific(1)).write(writer, &value.request_value);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ExtendedResponseSchema;

impl BerCodec for ExtendedResponseSchema {
    type Value<'a> = ExtendedResponse<'a>;

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        read_framed(self, reader)
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        write_framed(self, writer, value)
    }
}

impl BerType for ExtendedResponseSchema {
    fn identifier(&self) -> Identifier {
        Identifier::application(Encoding::Constructed, 24)
    }

    fn read_content<'a>(
        &self,
        reader: &mut BytesReader<'a>,
    ) -> Result<Self::Value<'a>, BerParseError> {
        let result = LdapResult::read_components(reader)?;
        let response_name = Optional(OctetString.context_specific(10)).read(reader)?;
        let response_value = Optional(OctetString.context_specific(11)).read(reader)?;
        Ok(ExtendedResponse {
            result,
            response_name,
            response_value,
        })
    }

    fn write_content<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        value.result.write_components(writer);
        Optional(OctetString.context_specific(10)).write(writer, &value.response_name);
        Optional(OctetString.context_specific(11)).write(writer, &value.response_value);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IntermediateResponseSchema;

impl BerCodec for IntermediateResponseSchema {
    type Value<'a> = IntermediateResponse<'a>;

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        read_framed(self, reader)
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        write_framed(self, writer, value)
    }
}

impl BerType for IntermediateResponseSchema {
    fn identifier(&self) -> Identifier {
        Identifier::application(Encoding::Constructed, 25)
    }

    fn read_content<'a>(
        &self,
        reader: &mut BytesReader<'a>,
    ) -> Result<Self::Value<'a>, BerParseError> {
        let response_name = Optional(OctetString.context_specific(0)).read(reader)?;
        let response_value = Optional(OctetString.context_specific(1)).read(reader)?;
        Ok(IntermediateResponse {
            response_name,
            response_value,
        })
    }

    fn write_content<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        Optional(OctetString.context_specific(0)).write(writer, &value.response_name);
        Optional(OctetString.context_specific(1)).write(writer, &value.response_value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_TLS_OID: &[u8] = b"1.3.6.1.4.1.1466.20037";

    #[test]
    fn start_tls_request() {
        let request = ExtendedRequest {
            request_name: START_TLS_OID,
            request_value: None,
        };
        let mut buf = Vec::new();
        ExtendedRequestSchema.write(&mut buf, &request);
        assert_eq!(buf[0], 0x77);
        assert_eq!(buf[2], 0x80); // requestName is [0] primitive

        let mut reader = BytesReader::new(&buf);
        assert_eq!(ExtendedRequestSchema.read(&mut reader).unwrap(), request);
    }

    #[test]
    fn extended_response_round_trip() {
        let response = ExtendedResponse {
            result: LdapResult::success(),
            response_name: Some(START_TLS_OID),
            response_value: None,
        };
        let mut buf = Vec::new();
        ExtendedResponseSchema.write(&mut buf, &response);
        assert_eq!(buf[0], 0x78);
        // responseName is [10] primitive
        assert!(buf.contains(&0x8a));

        let mut reader = BytesReader::new(&buf);
        assert_eq!(ExtendedResponseSchema.read(&mut reader).unwrap(), response);
    }

    #[test]
    fn intermediate_response_empty() {
        let response = IntermediateResponse {
            response_name: None,
            response_value: None,
        };
        let mut buf = Vec::new();
        IntermediateResponseSchema.write(&mut buf, &response);
        assert_eq!(buf, [0x79, 0x00]);

        let mut reader = BytesReader::new(&buf);
        assert_eq!(
            IntermediateResponseSchema.read(&mut reader).unwrap(),
            response
        );
    }
}
