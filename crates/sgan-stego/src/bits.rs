//! Conversion between messages and flat bit streams.
//!
//! Every character of a message is written as one byte, most significant bit
//! first. Only characters with code points `0..=255` are accepted, anything
//! above is rejected instead of being truncated.
//!
//! Decoding groups the bits into bytes again. A trailing group shorter than
//! eight bits is padded with zeros, so decoding is the inverse of encoding for
//! any stream whose length is a multiple of eight.

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};

use crate::error::{Result, StegoError};

/// Encodes a text message, one byte per character.
///
/// Fails with [`StegoError::Encoding`] on the first character whose code point
/// is above 255.
pub fn encode(message: &str) -> Result<Vec<bool>> {
    let bytes = message
        .chars()
        .enumerate()
        .map(|(position, character)| {
            u8::try_from(u32::from(character))
                .map_err(|_| StegoError::Encoding { character, position })
        })
        .collect::<Result<Vec<u8>>>()?;

    encode_bytes(&bytes)
}

/// Encodes raw bytes into bits, most significant bit first.
pub fn encode_bytes(bytes: &[u8]) -> Result<Vec<bool>> {
    let mut reader = BitReader::endian(bytes, BigEndian);
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for _ in 0..bytes.len() * 8 {
        bits.push(reader.read_bit()?);
    }

    Ok(bits)
}

/// Decodes bits into a text message, mapping every byte to the character
/// with the same code point.
pub fn decode(bits: &[bool]) -> Result<String> {
    Ok(decode_bytes(bits)?.into_iter().map(char::from).collect())
}

/// Decodes bits into bytes, zero padding the last group.
pub fn decode_bytes(bits: &[bool]) -> Result<Vec<u8>> {
    let mut writer = BitWriter::endian(Vec::with_capacity(bits.len().div_ceil(8)), BigEndian);
    for &bit in bits {
        writer.write_bit(bit)?;
    }
    writer.byte_align()?;

    Ok(writer.into_writer())
}

/// Renders bits as `0`/`1` characters in space separated groups of eight.
pub fn format_bits(bits: &[bool]) -> String {
    bits.chunks(8)
        .map(|group| {
            group
                .iter()
                .map(|&bit| if bit { '1' } else { '0' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Vec<bool> {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c == '1')
            .collect()
    }

    #[test]
    fn should_encode_hi_msb_first() {
        let bits = encode("Hi").unwrap();

        assert_eq!(bits.len(), 16);
        assert_eq!(bits, parse("01001000 01101001"));
    }

    #[test]
    fn should_decode_hi() {
        assert_eq!(decode(&parse("01001000 01101001")).unwrap(), "Hi");
    }

    #[test]
    fn should_handle_empty_input() {
        assert!(encode("").unwrap().is_empty());
        assert_eq!(decode(&[]).unwrap(), "");
        assert!(decode_bytes(&[]).unwrap().is_empty());
    }

    #[test]
    fn should_round_trip_every_single_byte_code_point() {
        let message: String = (0u8..=255).map(char::from).collect();
        let bits = encode(&message).unwrap();

        assert_eq!(bits.len(), 256 * 8);
        assert_eq!(decode(&bits).unwrap(), message);
    }

    #[test]
    fn should_reject_characters_above_255() {
        let err = encode("ab€c").unwrap_err();

        match err {
            StegoError::Encoding {
                character,
                position,
            } => {
                assert_eq!(character, '€');
                assert_eq!(position, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn should_accept_latin1_characters() {
        let bits = encode("é").unwrap();
        assert_eq!(bits, parse("11101001"));
    }

    #[test]
    fn should_pad_trailing_partial_group_with_zeros() {
        // "010" padded to "01000000"
        assert_eq!(decode_bytes(&parse("010")).unwrap(), vec![0b0100_0000]);
        // 9 bits: one full byte and one padded byte
        assert_eq!(
            decode_bytes(&parse("11111111 1")).unwrap(),
            vec![0xff, 0b1000_0000]
        );
    }

    #[test]
    fn should_format_bits_in_groups_of_eight() {
        let bits = encode("Hi").unwrap();
        assert_eq!(format_bits(&bits), "01001000 01101001");
        assert_eq!(format_bits(&parse("101")), "101");
        assert_eq!(format_bits(&[]), "");
    }
}
