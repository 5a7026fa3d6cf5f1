/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

use crate::ber::{
    BerCodec, BerType, Encoding, Identifier, Integer, Null, OctetString, Optional, SequenceOf,
    TagClass, read_framed, write_framed,
};
use crate::bytes::{BytesReader, BytesWriter};
use crate::error::BerParseError;

use super::{
    AddRequest, AddRequestSchema, AddResponseSchema, BindRequest, BindRequestSchema, BindResponse,
    BindResponseSchema, CompareRequest, CompareRequestSchema, CompareResponseSchema, Control,
    ControlSchema, DelResponseSchema, ExtendedRequest, ExtendedRequestSchema, ExtendedResponse,
    ExtendedResponseSchema, IntermediateResponse, IntermediateResponseSchema, LdapResult,
    ModifyDnRequest, ModifyDnRequestSchema, ModifyDnResponseSchema, ModifyRequest,
    ModifyRequestSchema, ModifyResponseSchema, SearchRequest, SearchRequestSchema,
    SearchResultDoneSchema, SearchResultEntry, SearchResultEntrySchema,
};

/// One LDAPMessage envelope: message ID, operation, optional controls.
///
/// Message IDs are assigned by the caller; this codec only checks that a
/// decoded ID is non-negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LdapMessage<'a> {
    pub message_id: i32,
    pub protocol_op: ProtocolOp<'a>,
    pub controls: Option<Vec<Control<'a>>>,
}

/// The protocolOp CHOICE with the application tag numbers of RFC 4511.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolOp<'a> {
    BindRequest(BindRequest<'a>),
    BindResponse(BindResponse<'a>),
    UnbindRequest,
    SearchRequest(SearchRequest<'a>),
    SearchResultEntry(SearchResultEntry<'a>),
    SearchResultDone(LdapResult<'a>),
    SearchResultReference(Vec<&'a [u8]>),
    ModifyRequest(ModifyRequest<'a>),
    ModifyResponse(LdapResult<'a>),
    AddRequest(AddRequest<'a>),
    AddResponse(LdapResult<'a>),
    DelRequest(&'a [u8]),
    DelResponse(LdapResult<'a>),
    ModifyDnRequest(ModifyDnRequest<'a>),
    ModifyDnResponse(LdapResult<'a>),
    CompareRequest(CompareRequest<'a>),
    CompareResponse(LdapResult<'a>),
    AbandonRequest(i32),
    ExtendedRequest(ExtendedRequest<'a>),
    ExtendedResponse(ExtendedResponse<'a>),
    IntermediateResponse(IntermediateResponse<'a>),
}

impl<'a> LdapMessage<'a> {
    pub fn new(message_id: i32, protocol_op: ProtocolOp<'a>) -> Self {
        LdapMessage {
            message_id,
            protocol_op,
            controls: None,
        }
    }

    pub fn read(reader: &mut BytesReader<'a>) -> Result<Self, BerParseError> {
        LdapMessageSchema.read(reader)
    }

    /// Parse one message from the head of `data`. Returns the message and
    /// the number of bytes it occupied; anything after that is left to the
    /// caller.
    pub fn parse(data: &'a [u8]) -> Result<(Self, usize), BerParseError> {
        let mut reader = BytesReader::new(data);
        let message = LdapMessage::read(&mut reader)?;
        Ok((message, data.len() - reader.remaining()))
    }

    pub fn write<W: BytesWriter>(&self, writer: &mut W) {
        LdapMessageSchema.write(writer, self)
    }

    pub fn to_vec(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.write(&mut buf);
        buf
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LdapMessageSchema;

impl BerCodec for LdapMessageSchema {
    type Value<'a> = LdapMessage<'a>;

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        read_framed(self, reader)
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        write_framed(self, writer, value)
    }
}

impl BerType for LdapMessageSchema {
    fn identifier(&self) -> Identifier {
        Identifier::universal(Encoding::Constructed, 16)
    }

    fn read_content<'a>(
        &self,
        reader: &mut BytesReader<'a>,
    ) -> Result<Self::Value<'a>, BerParseError> {
        let message_id = Integer::<i32>::new().read(reader)?;
        if message_id < 0 {
            return Err(BerParseError::ContentInvalid);
        }
        let protocol_op = ProtocolOpSchema.read(reader)?;
        let controls = Optional(SequenceOf(ControlSchema).context_specific(0)).read(reader)?;
        Ok(LdapMessage {
            message_id,
            protocol_op,
            controls,
        })
    }

    fn write_content<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        Integer::<i32>::new().write(writer, &value.message_id);
        ProtocolOpSchema.write(writer, &value.protocol_op);
        Optional(SequenceOf(ControlSchema).context_specific(0)).write(writer, &value.controls);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ProtocolOpSchema;

impl BerCodec for ProtocolOpSchema {
    type Value<'a> = ProtocolOp<'a>;

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        let found = Identifier::peek(reader)?;
        if found.class() != TagClass::Application {
            return Err(BerParseError::UnknownVariant(found));
        }
        match found.number() {
            0 => BindRequestSchema.read(reader).map(ProtocolOp::BindRequest),
            1 => BindResponseSchema.read(reader).map(ProtocolOp::BindResponse),
            2 => {
                Null.application(2).read(reader)?;
                Ok(ProtocolOp::UnbindRequest)
            }
            3 => SearchRequestSchema
                .read(reader)
                .map(ProtocolOp::SearchRequest),
            4 => SearchResultEntrySchema
                .read(reader)
                .map(ProtocolOp::SearchResultEntry),
            5 => SearchResultDoneSchema
                .read(reader)
                .map(ProtocolOp::SearchResultDone),
            6 => ModifyRequestSchema
                .read(reader)
                .map(ProtocolOp::ModifyRequest),
            7 => ModifyResponseSchema
                .read(reader)
                .map(ProtocolOp::ModifyResponse),
            8 => AddRequestSchema.read(reader).map(ProtocolOp::AddRequest),
            9 => AddResponseSchema.read(reader).map(ProtocolOp::AddResponse),
            10 => OctetString
                .application(10)
                .read(reader)
                .map(ProtocolOp::DelRequest),
            11 => DelResponseSchema.read(reader).map(ProtocolOp::DelResponse),
            12 => ModifyDnRequestSchema
                .read(reader)
                .map(ProtocolOp::ModifyDnRequest),
            13 => ModifyDnResponseSchema
                .read(reader)
                .map(ProtocolOp::ModifyDnResponse),
            14 => CompareRequestSchema
                .read(reader)
                .map(ProtocolOp::CompareRequest),
            15 => CompareResponseSchema
                .read(reader)
                .map(ProtocolOp::CompareResponse),
            16 => Integer::<i32>::new()
                .application(16)
                .read(reader)
                .map(ProtocolOp::AbandonRequest),
            19 => SequenceOf(OctetString)
                .application(19)
                .read(reader)
                .map(ProtocolOp::SearchResultReference),
            23 => ExtendedRequestSchema
                .read(reader)
                .map(ProtocolOp::ExtendedRequest),
            24 => ExtendedResponseSchema
                .read(reader)
                .map(ProtocolOp::ExtendedResponse),
            25 => IntermediateResponseSchema
                .read(reader)
                .map(ProtocolOp::IntermediateResponse),
            _ => Err(BerParseError::UnknownVariant(found)),
        }
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        match value {
            ProtocolOp::BindRequest(op) => BindRequestSchema.write(writer, op),
            ProtocolOp::BindResponse(op) => BindResponseSchema.write(writer, op),
            ProtocolOp::UnbindRequest => Null.application(2).write(writer, &()),
            ProtocolOp::SearchRequest(op) => SearchRequestSchema.write(writer, op),
            ProtocolOp::SearchResultEntry(op) => SearchResultEntrySchema.write(writer, op),
            ProtocolOp::SearchResultDone(op) => SearchResultDoneSchema.write(writer, op),
            ProtocolOp::SearchResultReference(uris) => {
                SequenceOf(OctetString).application(19).write(writer, uris)
            }
            ProtocolOp::ModifyRequest(op) => ModifyRequestSchema.write(writer, op),
            ProtocolOp::ModifyResponse(op) => ModifyResponseSchema.write(writer, op),
            ProtocolOp::AddRequest(op) => AddRequestSchema.write(writer, op),
            ProtocolOp::AddResponse(op) => AddResponseSchema.write(writer, op),
            ProtocolOp::DelRequest(dn) => OctetString.application(10).write(writer, dn),
            ProtocolOp::DelResponse(op) => DelResponseSchema.write(writer, op),
            ProtocolOp::ModifyDnRequest(op) => ModifyDnRequestSchema.write(writer, op),
            ProtocolOp::ModifyDnResponse(op) => ModifyDnResponseSchema.write(writer, op),
            ProtocolOp::CompareRequest(op) => CompareRequestSchema.write(writer, op),
            ProtocolOp::CompareResponse(op) => CompareResponseSchema.write(writer, op),
            ProtocolOp::AbandonRequest(message_id) => {
                Integer::<i32>::new().application(16).write(writer, message_id)
            }
            ProtocolOp::ExtendedRequest(op) => ExtendedRequestSchema.write(writer, op),
            ProtocolOp::ExtendedResponse(op) => ExtendedResponseSchema.write(writer, op),
            ProtocolOp::IntermediateResponse(op) => IntermediateResponseSchema.write(writer, op),
        }
    }
}
