/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

use crate::bytes::{BytesReader, BytesWriter};
use crate::error::BerParseError;

const LONG_FORM_BIT: u8 = 0x80;

/// BER length octets.
///
/// The indefinite form is recognized on read so consumers can reject it
/// explicitly; it is never written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    Definite(usize),
    Indefinite,
}

impl Length {
    pub fn read(reader: &mut BytesReader<'_>) -> Result<Self, BerParseError> {
        let first = reader.read_byte()?;
        if first & LONG_FORM_BIT == 0 {
            return Ok(Length::Definite(usize::from(first)));
        }

        let count = usize::from(first & !LONG_FORM_BIT);
        if count == 0 {
            return Ok(Length::Indefinite);
        }
        if count > size_of::<usize>() {
            return Err(BerParseError::LengthInvalid);
        }

        let mut value = 0usize;
        for _ in 0..count {
            value = (value << 8) | usize::from(reader.read_byte()?);
        }
        Ok(Length::Definite(value))
    }

    /// Read a length, rejecting the indefinite form.
    pub fn read_definite(reader: &mut BytesReader<'_>) -> Result<usize, BerParseError> {
        match Length::read(reader)? {
            Length::Definite(value) => Ok(value),
            Length::Indefinite => Err(BerParseError::LengthInvalid),
        }
    }

    /// Write a definite length, short form when it fits, otherwise long
    /// form with the minimal byte count.
    pub fn write_definite<W: BytesWriter>(value: usize, writer: &mut W) {
        if value <= 0x7f {
            writer.put_byte(value as u8);
            return;
        }

        let count = size_of::<usize>() - value.leading_zeros() as usize / 8;
        writer.put_byte(LONG_FORM_BIT | count as u8);
        for i in (0..count).rev() {
            writer.put_byte((value >> (8 * i)) as u8);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_all(data: &[u8]) -> Result<Length, BerParseError> {
        let mut reader = BytesReader::new(data);
        let length = Length::read(&mut reader)?;
        assert!(reader.is_empty());
        Ok(length)
    }

    fn write(value: usize) -> Vec<u8> {
        let mut buf = Vec::new();
        Length::write_definite(value, &mut buf);
        buf
    }

    #[test]
    fn short_form() {
        assert_eq!(read_all(&[0x00]).unwrap(), Length::Definite(0));
        assert_eq!(read_all(&[0x7f]).unwrap(), Length::Definite(127));
        assert_eq!(write(0), [0x00]);
        assert_eq!(write(127), [0x7f]);
    }

    #[test]
    fn long_form() {
        assert_eq!(read_all(&[0x81, 0xff]).unwrap(), Length::Definite(255));
        assert_eq!(
            read_all(&[0x82, 0x01, 0x00]).unwrap(),
            Length::Definite(256)
        );
        assert_eq!(write(128), [0x81, 0x80]);
        assert_eq!(write(255), [0x81, 0xff]);
        assert_eq!(write(256), [0x82, 0x01, 0x00]);
    }

    #[test]
    fn long_form_round_trip() {
        for value in [128, 255, 256, 0xffff, 0x10000, 0xff_ffff] {
            assert_eq!(read_all(&write(value)).unwrap(), Length::Definite(value));
        }
    }

    #[test]
    fn indefinite_is_recognized_and_rejected() {
        assert_eq!(read_all(&[0x80]).unwrap(), Length::Indefinite);

        let mut reader = BytesReader::new(&[0x80]);
        assert_eq!(
            Length::read_definite(&mut reader).unwrap_err(),
            BerParseError::LengthInvalid
        );
    }

    #[test]
    fn oversized_length_of_length() {
        let mut data = vec![LONG_FORM_BIT | (size_of::<usize>() as u8 + 1)];
        data.resize(data.len() + size_of::<usize>() + 1, 0x01);
        assert_eq!(read_all(&data).unwrap_err(), BerParseError::LengthInvalid);
    }

    #[test]
    fn truncated_long_form() {
        assert_eq!(read_all(&[0x82, 0x01]).unwrap_err(), BerParseError::UnexpectedEnd);
    }
}
