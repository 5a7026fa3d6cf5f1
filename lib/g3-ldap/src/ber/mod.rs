/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

mod identifier;
pub use identifier::{Encoding, Identifier, TagClass};

mod length;
pub use length::Length;

mod schema;
pub use schema::{BerCodec, BerType, Explicit, Implicit, read_framed, write_framed};

mod primitive;
pub use primitive::{BerInt, Boolean, Enumerated, Enumeration, Integer, Null, OctetString};

mod structure;
pub use structure::{Optional, Sequence, SequenceOf, SetOf};
