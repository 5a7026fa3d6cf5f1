/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

use crate::ber::{
    BerCodec, BerType, Encoding, Identifier, Integer, OctetString, Optional, TagClass,
    read_framed, write_framed,
};
use crate::bytes::{BytesReader, BytesWriter};
use crate::error::BerParseError;

use super::LdapResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindRequest<'a> {
    pub version: i32,
    pub name: &'a [u8],
    pub authentication: Authentication<'a>,
}

impl<'a> BindRequest<'a> {
    pub fn simple(name: &'a [u8], password: &'a [u8]) -> Self {
        BindRequest {
            version: 3,
            name,
            authentication: Authentication::Simple(password),
        }
    }
}

/// AuthenticationChoice: simple [0] or sasl [3]. The sasl tag keeps the
/// constructed encoding of the credentials sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authentication<'a> {
    Simple(&'a [u8]),
    Sasl(SaslCredentials<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaslCredentials<'a> {
    pub mechanism: &'a [u8],
    pub credentials: Option<&'a [u8]>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindResponse<'a> {
    pub result: LdapResult<'a>,
    pub server_sasl_creds: Option<&'a [u8]>,
}

#[derive(Debug, Clone, Copy)]
pub struct BindRequestSchema;

impl BerCodec for BindRequestSchema {
    type Value<'a> = BindRequest<'a>;

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        read_framed(self, reader)
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        write_framed(self, writer, value)
    }
}

impl BerType for BindRequestSchema {
    fn identifier(&self) -> Identifier {
        Identifier::application(Encoding::Constructed, 0)
    }

    fn read_content<'a>(
        &self,
        reader: &mut BytesReader<'a>,
    ) -> Result<Self::Value<'a>, BerParseError> {
        let version = Integer::<i32>::new().read(reader)?;
        let name = OctetString.read(reader)?;
        let authentication = AuthenticationSchema.read(reader)?;
        Ok(BindRequest {
            version,
            name,
            authentication,
        })
    }

    fn write_content<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        Integer::<i32>::new().write(writer, &value.version);
        OctetString.write(writer, &value.name);
        AuthenticationSchema.write(writer, &value.authentication);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AuthenticationSchema;

impl BerCodec for AuthenticationSchema {
    type Value<'a> = Authentication<'a>;

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        let found = Identifier::peek(reader)?;
        if found.class() != TagClass::ContextSpecific {
            return Err(BerParseError::UnknownVariant(found));
        }
        match found.number() {
            0 => OctetString
                .context_specific(0)
                .read(reader)
                .map(Authentication::Simple),
            3 => SaslCredentialsSchema
                .context_specific(3)
                .read(reader)
                .map(Authentication::Sasl),
            _ => Err(BerParseError::UnknownVariant(found)),
        }
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        match value {
            Authentication::Simple(password) => {
                OctetString.context_specific(0).write(writer, password)
            }
            Authentication::Sasl(credentials) => SaslCredentialsSchema
                .context_specific(3)
                .write(writer, credentials),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SaslCredentialsSchema;

impl BerCodec for SaslCredentialsSchema {
    type Value<'a> = SaslCredentials<'a>;

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        read_framed(self, reader)
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        write_framed(self, writer, value)
    }
}

impl BerType for SaslCredentialsSchema {
    fn identifier(&self) -> Identifier {
        Identifier::universal(Encoding::Constructed, 16)
    }

    fn read_content<'a>(
        &self,
        reader: &mut BytesReader<'a>,
    ) -> Result<Self::Value<'a>, BerParseError> {
        let mechanism = OctetString.read(reader)?;
        let credentials = Optional(OctetString).read(reader)?;
        Ok(SaslCredentials {
            mechanism,
            credentials,
        })
    }

    fn write_content<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        OctetString.write(writer, &value.mechanism);
        Optional(OctetString).write(writer, &value.credentials);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BindResponseSchema;

impl BerCodec for BindResponseSchema {
    type Value<'a> = BindResponse<'a>;

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        read_framed(self, reader)
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        write_framed(self, writer, value)
    }
}

impl BerType for BindResponseSchema {
    fn identifier(&self) -> Identifier {
        Identifier::application(Encoding::Constructed, 1)
    }

    fn read_content<'a>(
        &self,
        reader: &mut BytesReader<'a>,
    ) -> Result<Self::Value<'a>, BerParseError> {
        let result = LdapResult::read_components(reader)?;
        let server_sasl_creds = Optional(OctetString.context_specific(7)).read(reader)?;
        Ok(BindResponse {
            result,
            server_sasl_creds,
        })
    }

    fn write_content<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        value.result.write_components(writer);
        Optional(OctetString.context_specific(7)).write(writer, &value.server_sasl_creds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_bind_request() {
        let request = BindRequest::simple(b"cn=admin,dc=example,dc=com", b"secret");
        let mut buf = Vec::new();
        BindRequestSchema.write(&mut buf, &request);
        assert_eq!(buf[0], 0x60);

        let mut reader = BytesReader::new(&buf);
        assert_eq!(BindRequestSchema.read(&mut reader).unwrap(), request);
        assert!(reader.is_empty());
    }

    #[test]
    fn sasl_bind_request() {
        let request = BindRequest {
            version: 3,
            name: b"",
            authentication: Authentication::Sasl(SaslCredentials {
                mechanism: b"EXTERNAL",
                credentials: None,
            }),
        };
        let mut buf = Vec::new();
        BindRequestSchema.write(&mut buf, &request);

        let mut reader = BytesReader::new(&buf);
        assert_eq!(BindRequestSchema.read(&mut reader).unwrap(), request);
    }

    #[test]
    fn sasl_credentials_with_payload() {
        let credentials = SaslCredentials {
            mechanism: b"CRAM-MD5",
            credentials: Some(b"u3 wCx+fzGN02SkT7QDczQ=="),
        };
        let mut buf = Vec::new();
        SaslCredentialsSchema.write(&mut buf, &credentials);

        let mut reader = BytesReader::new(&buf);
        assert_eq!(
            SaslCredentialsSchema.read(&mut reader).unwrap(),
            credentials
        );
    }

    #[test]
    fn authentication_unknown_tag() {
        // [1] is not an AuthenticationChoice alternative
        let data = [0x81, 0x00];
        let mut reader = BytesReader::new(&data);
        let e = AuthenticationSchema.read(&mut reader).unwrap_err();
        assert_eq!(
            e,
            BerParseError::UnknownVariant(Identifier::context_specific(Encoding::Primitive, 1))
        );
    }

    #[test]
    fn bind_response_with_sasl_creds() {
        let response = BindResponse {
            result: LdapResult::success(),
            server_sasl_creds: Some(b"QdULhmQwTIOVpLvPPzmXSQ=="),
        };
        let mut buf = Vec::new();
        BindResponseSchema.write(&mut buf, &response);
        // serverSaslCreds is context-specific primitive 7
        assert!(buf.contains(&0x87));

        let mut reader = BytesReader::new(&buf);
        assert_eq!(BindResponseSchema.read(&mut reader).unwrap(), response);
    }
}
