/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

mod message;
pub use message::{LdapMessage, LdapMessageSchema, ProtocolOp, ProtocolOpSchema};

mod bind;
pub use bind::{
    Authentication, AuthenticationSchema, BindRequest, BindRequestSchema, BindResponse,
    BindResponseSchema, SaslCredentials, SaslCredentialsSchema,
};

mod search;
pub use search::{
    DerefAliases, PartialAttribute, PartialAttributeSchema, SearchRequest, SearchRequestSchema,
    SearchResultEntry, SearchResultEntrySchema, SearchScope,
};

mod filter;
pub use filter::{
    AttributeValueAssertion, AttributeValueAssertionSchema, Filter, FilterSchema,
    MatchingRuleAssertion, MatchingRuleAssertionSchema, Substring, SubstringFilter,
    SubstringFilterSchema, SubstringSchema,
};

mod modify;
pub use modify::{
    AddRequest, AddRequestSchema, CompareRequest, CompareRequestSchema, Modification,
    ModificationSchema, ModifyDnRequest, ModifyDnRequestSchema, ModifyOperation, ModifyRequest,
    ModifyRequestSchema,
};

mod extended;
pub use extended::{
    ExtendedRequest, ExtendedRequestSchema, ExtendedResponse, ExtendedResponseSchema,
    IntermediateResponse, IntermediateResponseSchema,
};

mod result;
pub use result::{
    AddResponseSchema, CompareResponseSchema, DelResponseSchema, LdapResult,
    ModifyDnResponseSchema, ModifyResponseSchema, ResultCode, SearchResultDoneSchema,
};

mod control;
pub use control::{Control, ControlSchema};
