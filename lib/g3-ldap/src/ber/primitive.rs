/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

use std::marker::PhantomData;

use crate::bytes::{BytesReader, BytesWriter};
use crate::error::BerParseError;

use super::schema::{read_framed, write_framed};
use super::{BerCodec, BerType, Encoding, Identifier};

mod private {
    pub trait Sealed {}
}

/// Fixed-width integer type usable as INTEGER or ENUMERATED content.
///
/// The wire form is the minimal two's-complement encoding; an unsigned
/// target admits exactly one sign-preserving leading zero octet, so the
/// content budget is one byte wider than the type.
pub trait BerInt: Copy + private::Sealed {
    fn from_content(content: &[u8]) -> Option<Self>;
    fn write_content<W: BytesWriter>(self, writer: &mut W);
}

macro_rules! signed_ber_int {
    ($t:ty) => {
        impl private::Sealed for $t {}

        impl BerInt for $t {
            fn from_content(content: &[u8]) -> Option<Self> {
                if content.is_empty() || content.len() > size_of::<$t>() {
                    return None;
                }
                let mut value = i64::from(content[0] as i8);
                for &byte in &content[1..] {
                    value = (value << 8) | i64::from(byte);
                }
                Some(value as $t)
            }

            fn write_content<W: BytesWriter>(self, writer: &mut W) {
                let bytes = self.to_be_bytes();
                let mut skip = 0;
                while skip + 1 < bytes.len() {
                    let next_high = bytes[skip + 1] & 0x80 != 0;
                    if (bytes[skip] == 0x00 && !next_high) || (bytes[skip] == 0xff && next_high) {
                        skip += 1;
                    } else {
                        break;
                    }
                }
                writer.put_slice(&bytes[skip..]);
            }
        }
    };
}

macro_rules! unsigned_ber_int {
    ($t:ty) => {
        impl private::Sealed for $t {}

        impl BerInt for $t {
            fn from_content(content: &[u8]) -> Option<Self> {
                let (first, rest) = content.split_first()?;
                let bytes = if *first == 0x00 {
                    rest
                } else if *first & 0x80 != 0 {
                    // a set sign bit makes the wire value negative
                    return None;
                } else {
                    content
                };
                if bytes.len() > size_of::<$t>() {
                    return None;
                }
                let mut value = 0u64;
                for &byte in bytes {
                    value = (value << 8) | u64::from(byte);
                }
                Some(value as $t)
            }

            fn write_content<W: BytesWriter>(self, writer: &mut W) {
                let bytes = self.to_be_bytes();
                let mut skip = 0;
                while skip + 1 < bytes.len() && bytes[skip] == 0x00 {
                    skip += 1;
                }
                if bytes[skip] & 0x80 != 0 {
                    writer.put_byte(0x00);
                }
                writer.put_slice(&bytes[skip..]);
            }
        }
    };
}

signed_ber_int!(i8);
signed_ber_int!(i16);
signed_ber_int!(i32);
signed_ber_int!(i64);
unsigned_ber_int!(u8);
unsigned_ber_int!(u16);
unsigned_ber_int!(u32);
unsigned_ber_int!(u64);

/// BOOLEAN. Encodes TRUE as 0xFF; any nonzero content octet decodes true.
#[derive(Debug, Clone, Copy)]
pub struct Boolean;

impl BerCodec for Boolean {
    type Value<'a> = bool;

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        read_framed(self, reader)
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        write_framed(self, writer, value)
    }
}

impl BerType for Boolean {
    fn identifier(&self) -> Identifier {
        Identifier::universal(Encoding::Primitive, 1)
    }

    fn read_content<'a>(
        &self,
        reader: &mut BytesReader<'a>,
    ) -> Result<Self::Value<'a>, BerParseError> {
        if reader.remaining() != 1 {
            return Err(BerParseError::ContentInvalid);
        }
        Ok(reader.read_byte()? != 0x00)
    }

    fn write_content<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        writer.put_byte(if *value { 0xff } else { 0x00 });
    }
}

/// INTEGER over a fixed-width target type.
#[derive(Debug, Clone, Copy, Default)]
pub struct Integer<T>(PhantomData<T>);

impl<T> Integer<T> {
    pub const fn new() -> Self {
        Integer(PhantomData)
    }
}

impl<T: BerInt> BerCodec for Integer<T> {
    type Value<'a> = T;

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        read_framed(self, reader)
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        write_framed(self, writer, value)
    }
}

impl<T: BerInt> BerType for Integer<T> {
    fn identifier(&self) -> Identifier {
        Identifier::universal(Encoding::Primitive, 2)
    }

    fn read_content<'a>(
        &self,
        reader: &mut BytesReader<'a>,
    ) -> Result<Self::Value<'a>, BerParseError> {
        let content = reader.read_slice(reader.remaining())?;
        T::from_content(content).ok_or(BerParseError::ContentInvalid)
    }

    fn write_content<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        value.write_content(writer)
    }
}

/// OCTET STRING. The value is a borrowed view into the input buffer;
/// constructed string encodings are not accepted.
#[derive(Debug, Clone, Copy)]
pub struct OctetString;

impl BerCodec for OctetString {
    type Value<'a> = &'a [u8];

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        read_framed(self, reader)
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        write_framed(self, writer, value)
    }
}

impl BerType for OctetString {
    fn identifier(&self) -> Identifier {
        Identifier::universal(Encoding::Primitive, 4)
    }

    fn read_content<'a>(
        &self,
        reader: &mut BytesReader<'a>,
    ) -> Result<Self::Value<'a>, BerParseError> {
        reader.read_slice(reader.remaining())
    }

    fn write_content<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        writer.put_slice(value);
    }
}

/// NULL. Content must be empty.
#[derive(Debug, Clone, Copy)]
pub struct Null;

impl BerCodec for Null {
    type Value<'a> = ();

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        read_framed(self, reader)
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        write_framed(self, writer, value)
    }
}

impl BerType for Null {
    fn identifier(&self) -> Identifier {
        Identifier::universal(Encoding::Primitive, 5)
    }

    fn read_content<'a>(
        &self,
        reader: &mut BytesReader<'a>,
    ) -> Result<Self::Value<'a>, BerParseError> {
        if !reader.is_empty() {
            return Err(BerParseError::ContentInvalid);
        }
        Ok(())
    }

    fn write_content<W: BytesWriter>(&self, _writer: &mut W, _value: &Self::Value<'_>) {}
}

/// Mapping between an enumeration type and its raw integer wire value.
///
/// `from_raw` is total: unknown enumerators must be carried through as the
/// raw integer, not rejected.
pub trait Enumeration: Copy {
    fn from_raw(raw: i32) -> Self;
    fn raw(self) -> i32;
}

impl Enumeration for i32 {
    fn from_raw(raw: i32) -> Self {
        raw
    }

    fn raw(self) -> i32 {
        self
    }
}

/// ENUMERATED. Integer wire form under tag number 10.
#[derive(Debug, Clone, Copy, Default)]
pub struct Enumerated<E>(PhantomData<E>);

impl<E> Enumerated<E> {
    pub const fn new() -> Self {
        Enumerated(PhantomData)
    }
}

impl<E: Enumeration> BerCodec for Enumerated<E> {
    type Value<'a> = E;

    fn read<'a>(&self, reader: &mut BytesReader<'a>) -> Result<Self::Value<'a>, BerParseError> {
        read_framed(self, reader)
    }

    fn write<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        write_framed(self, writer, value)
    }
}

impl<E: Enumeration> BerType for Enumerated<E> {
    fn identifier(&self) -> Identifier {
        Identifier::universal(Encoding::Primitive, 10)
    }

    fn read_content<'a>(
        &self,
        reader: &mut BytesReader<'a>,
    ) -> Result<Self::Value<'a>, BerParseError> {
        let content = reader.read_slice(reader.remaining())?;
        let raw = i32::from_content(content).ok_or(BerParseError::ContentInvalid)?;
        Ok(E::from_raw(raw))
    }

    fn write_content<W: BytesWriter>(&self, writer: &mut W, value: &Self::Value<'_>) {
        value.raw().write_content(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode<T: BerCodec>(schema: &T, value: T::Value<'_>) -> Vec<u8> {
        let mut buf = Vec::new();
        schema.write(&mut buf, &value);
        buf
    }

    fn decode<'a, T: BerCodec>(schema: &T, data: &'a [u8]) -> Result<T::Value<'a>, BerParseError> {
        let mut reader = BytesReader::new(data);
        let value = schema.read(&mut reader)?;
        assert!(reader.is_empty());
        Ok(value)
    }

    #[test]
    fn boolean_encode() {
        assert_eq!(encode(&Boolean, true), [0x01, 0x01, 0xff]);
        assert_eq!(encode(&Boolean, false), [0x01, 0x01, 0x00]);
    }

    #[test]
    fn boolean_decode_accepts_any_nonzero() {
        for byte in [0x01u8, 0x7f, 0xff] {
            assert!(decode(&Boolean, &[0x01, 0x01, byte]).unwrap());
        }
        assert!(!decode(&Boolean, &[0x01, 0x01, 0x00]).unwrap());
    }

    #[test]
    fn boolean_wrong_content_length() {
        assert_eq!(
            decode(&Boolean, &[0x01, 0x00]).unwrap_err(),
            BerParseError::ContentInvalid
        );
        assert_eq!(
            decode(&Boolean, &[0x01, 0x02, 0x00, 0x00]).unwrap_err(),
            BerParseError::ContentInvalid
        );
    }

    #[test]
    fn integer_boundary_widths() {
        let cases: [(i32, usize); 17] = [
            (i32::MIN, 4),
            (-(1 << 23) - 1, 4),
            (-(1 << 23), 3),
            (-(1 << 15) - 1, 3),
            (-(1 << 15), 2),
            (-129, 2),
            (-128, 1),
            (-1, 1),
            (0, 1),
            (1, 1),
            (127, 1),
            (128, 2),
            ((1 << 15) - 1, 2),
            (1 << 15, 3),
            ((1 << 23) - 1, 3),
            (1 << 23, 4),
            (i32::MAX, 4),
        ];
        for (value, content_len) in cases {
            let buf = encode(&Integer::<i32>::new(), value);
            assert_eq!(buf.len(), 2 + content_len, "value {value}");
            assert_eq!(buf[1] as usize, content_len, "value {value}");
            assert_eq!(decode(&Integer::<i32>::new(), &buf).unwrap(), value);
        }
    }

    #[test]
    fn integer_known_encodings() {
        assert_eq!(encode(&Integer::<i32>::new(), 0), [0x02, 0x01, 0x00]);
        assert_eq!(encode(&Integer::<i32>::new(), 127), [0x02, 0x01, 0x7f]);
        assert_eq!(encode(&Integer::<i32>::new(), 128), [0x02, 0x02, 0x00, 0x80]);
        assert_eq!(encode(&Integer::<i32>::new(), 256), [0x02, 0x02, 0x01, 0x00]);
        assert_eq!(encode(&Integer::<i32>::new(), -128), [0x02, 0x01, 0x80]);
        assert_eq!(encode(&Integer::<i32>::new(), -129), [0x02, 0x02, 0xff, 0x7f]);
    }

    #[test]
    fn integer_content_wider_than_target() {
        // five content bytes cannot fit an i32
        let e = decode(&Integer::<i32>::new(), &[0x02, 0x05, 0x01, 0x02, 0x03, 0x04, 0x05]);
        assert_eq!(e.unwrap_err(), BerParseError::ContentInvalid);

        let e = decode(&Integer::<i32>::new(), &[0x02, 0x00]);
        assert_eq!(e.unwrap_err(), BerParseError::ContentInvalid);
    }

    #[test]
    fn unsigned_leading_zero_budget() {
        let buf = encode(&Integer::<u32>::new(), 0x8000_0000u32);
        assert_eq!(buf, [0x02, 0x05, 0x00, 0x80, 0x00, 0x00, 0x00]);
        assert_eq!(decode(&Integer::<u32>::new(), &buf).unwrap(), 0x8000_0000);

        // a negative wire value has no unsigned reading
        let e = decode(&Integer::<u32>::new(), &[0x02, 0x04, 0x80, 0x00, 0x00, 0x00]);
        assert_eq!(e.unwrap_err(), BerParseError::ContentInvalid);
    }

    #[test]
    fn null_content_must_be_empty() {
        assert_eq!(encode(&Null, ()), [0x05, 0x00]);
        decode(&Null, &[0x05, 0x00]).unwrap();
        assert_eq!(
            decode(&Null, &[0x05, 0x01, 0x00]).unwrap_err(),
            BerParseError::ContentInvalid
        );
    }

    #[test]
    fn octet_string_borrows_input() {
        let data = [0x04, 0x05, b'h', b'e', b'l', b'l', b'o'];
        let value = decode(&OctetString, &data).unwrap();
        assert_eq!(value, b"hello");
        assert!(std::ptr::eq(value.as_ptr(), data[2..].as_ptr()));
    }

    #[test]
    fn enumerated_wire_form() {
        let buf = encode(&Enumerated::<i32>::new(), 2);
        assert_eq!(buf, [0x0a, 0x01, 0x02]);
        assert_eq!(decode(&Enumerated::<i32>::new(), &buf).unwrap(), 2);
    }
}
