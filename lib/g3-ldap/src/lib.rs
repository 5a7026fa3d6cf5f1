/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

//! LDAPv3 message codec over ASN.1 Basic Encoding Rules.

pub mod ber;
pub mod bytes;
pub mod ldap;

mod error;
pub use error::BerParseError;
