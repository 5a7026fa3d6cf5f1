/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

use std::fmt;

use crate::ber::{
    BerCodec, BerType, Encoding, Enumerated, Enumeration, Identifier, OctetString, Optional,
    SequenceOf, read_framed, write_framed,
};
use crate::bytes::{BytesReader, BytesWriter};
use crate::error::BerParseError;

/// LDAP result code (RFC 4511 section 4.1.9).
///
/// Kept as the raw integer so codes outside the registry survive a
/// decode/encode round trip untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResultCode(i32);

macro_rules! result_codes {
    ($($name:ident = $value:literal => $text:literal,)+) => {
        impl ResultCode {
            $(pub const $name: ResultCode = ResultCode($value);)+
        }

        impl fmt::Display for ResultCode {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.0 {
                    $($value => f.write_str($text),)+
                    n => write!(f, "resultCode({n})"),
                }
            }
        }
    };
}

result_codes! {
    SUCCESS = 0 => "success",
    OPERATIONS_ERROR = 1 => "operationsError",
    PROTOCOL_ERROR = 2 => "protocolError",
    TIME_LIMIT_EXCEEDED = 3 => "timeLimitExceeded",
    SIZE_LIMIT_EXCEEDED = 4 => "sizeLimitExceeded",
    COMPARE_FALSE = 5 => "compareFalse",
    COMPARE_TRUE = 6 => "compareTrue",
    AUTH_METHOD_NOT_SUPPORTED = 7 => "authMethodNotSupported",
    STRONGER_AUTH_REQUIRED = 8 => "strongerAuthRequired",
    REFERRAL = 10 => "referral",
    ADMIN_LIMIT_EXCEEDED = 11 => "adminLimitExceeded",
    UNAVAILABLE_CRITICAL_EXTENSION = 12 => "unavailableCriticalExtension",
    CONFIDENTIALITY_REQUIRED = 13 => "confidentialityRequired",
    SASL_BIND_IN_PROGRESS = 14 => "saslBindInProgress",
    NO_SUCH_ATTRIBUTE = 16 => "noSuchAttribute",
    UNDEFINED_ATTRIBUTE_TYPE = 17 => "undefinedAttributeType",
    INAPPROPRIATE_MATCHING = 18 => "inappropriateMatching",
    CONSTRAINT_VIOLATION = 19 => "constraintViolation",
    ATTRIBUTE_OR_VALUE_EXISTS = 20 => "attributeOrValueExists",
    INVALID_ATTRIBUTE_SYNTAX = 21 => "invalidAttributeSyntax",
    NO_SUCH_OBJECT = 32 => "noSuchObject",
    ALIAS_PROBLEM = 33 => "aliasProblem",
    INVALID_DN_SYNTAX = 34 => "invalidDNSyntax",
    ALIAS_DEREFERENCING_PROBLEM = 36 => "aliasDereferencingProblem",
    INAPPROPRIATE_AUTHENTICATION = 48 => "inappropriateAuthentication",
    INVALID_CREDENTIALS = 49 => "invalidCredentials",
    INSUFFICIENT_ACCESS_RIGHTS = 50 => "insufficientAccessRights",
    BUSY = 51 => "busy",
    UNAVAILABLE = 52 => "unavailable",
    UNWILLING_TO_PERFORM = 53 => "unwillingToPerform",
    LOOP_DETECT = 54 => "loopDetect",
    NAMING_VIOLATION = 64 => "namingViolation",
    OBJECT_CLASS_VIOLATION = 65 => "objectClassViolation",
    NOT_ALLOWED_ON_NON_LEAF = 66 => "notAllowedOnNonLeaf",
    NOT_ALLOWED_ON_RDN = 67 => "notAllowedOnRDN",
    ENTRY_ALREADY_EXISTS = 68 => "entryAlreadyExists",
    OBJECT_CLASS_MODS_PROHIBITED = 69 => "objectClassModsProhibited",
    AFFECTS_MULTIPLE_DSAS = 71 => "affectsMultipleDSAs",
    OTHER = 80 => "other",
    CANCELED = 118 => "canceled",
    NO_SUCH_OPERATION = 119 => "noSuchOperation",
    TOO_LATE = 120 => "tooLate",
    CANNOT_CANCEL = 121 => "cannotCancel",
}

impl ResultCode {
    pub const fn new(code: i32) -> Self {
        ResultCode(code)
    }

    #[inline]
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl Enumeration for ResultCode {
    fn from_raw(raw: i32) -> Self {
        ResultCode(raw)
    }

    fn raw(self) -> i32 {
        self.0
    }
}

/// The LDAPResult components shared by every response operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LdapResult<'a> {
    pub result_code: ResultCode,
    pub matched_dn: &'a [u8],
    pub diagnostic_message: &'a [u8],
    pub referral: Option<Vec<&'a [u8]>>,
}

impl<'a> LdapResult<'a> {
    pub fn success() -> Self {
        LdapResult {
            result_code: ResultCode::SUCCESS,
            matched_dn: b"",
            diagnostic_message: b"",
            referral: None,
        }
    }

    /// Read the result components. They are COMPONENTS OF the enclosing
    /// operation, so there is no extra SEQUENCE framing here.
    pub(crate) fn read_components(
        reader: &mut BytesReader<'a>,
    ) -> Result<LdapResult<'a>, BerParseError> {
        let result_code = Enumerated::<ResultCode>::new().read(reader)?;
        let matched_dn = OctetString.read(reader)?;
        let diagnostic_message = OctetString.read(reader)?;
        let referral = Optional(SequenceOf(OctetString).context_specific(3)).read(reader)?;
        Ok(LdapResult {
            result_code,
            matched_dn,
            diagnostic_message,
            referral,
        })
    }

    pub(crate) fn write_components<W: BytesWriter>(&self, writer: &mut W) {
        Enumerated::<ResultCode>::new().write(writer, &self.result_code);
        OctetString.write(writer, &self.matched_dn);
        OctetString.write(writer, &self.diagnostic_message);
        Optional(SequenceOf(OctetString).context_specific(3)).write(writer, &self.referral);
    }
}

macro_rules! ldap_result_op {
    ($name:ident, $tag:literal) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl BerCodec for $name {
            type Value<'a> = LdapResult<'a>;

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

        impl BerType for $name {
            fn identifier(&self) -> Identifier {
                Identifier::application(Encoding::Constructed, $tag)
            }

            fn read_content<'a>(
                &self,
                reader: &mut BytesReader<'a>,
            ) -> Result<Self::Value<'a>, BerParseError> {
                LdapResult::read_components(reader)
            }

            fn write_content<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
                value.write_components(writer)
            }
        }
    };
}

ldap_result_op!(SearchResultDoneSchema, 5);
ldap_result_op!(ModifyResponseSchema, 7);
ldap_result_op!(AddResponseSchema, 9);
ldap_result_op!(DelResponseSchema, 11);
ldap_result_op!(ModifyDnResponseSchema, 13);
ldap_result_op!(CompareResponseSchema, 15);
