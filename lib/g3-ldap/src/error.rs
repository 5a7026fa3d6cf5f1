/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

use thiserror::Error;

use crate::ber::Identifier;

/// Decode fault. All variants propagate unchanged to the caller; no partial
/// value is ever returned alongside one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BerParseError {
    #[error("unexpected end of data")]
    UnexpectedEnd,
    #[error("expected identifier {expected}, found {found}")]
    IdentifierMismatch {
        expected: Identifier,
        found: Identifier,
    },
    #[error("invalid length")]
    LengthInvalid,
    #[error("invalid content")]
    ContentInvalid,
    #[error("trailing bytes after value")]
    TrailingBytes,
    #[error("no choice alternative matches identifier {0}")]
    UnknownVariant(Identifier),
    #[error("tag number overflow")]
    TagNumberOverflow,
}
