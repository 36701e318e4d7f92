use std::io::Cursor;

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};

use crate::error::{HuffError, Result};

/// MSB-first bit packer. The final partial byte is zero-padded on `finish`.
pub struct BitPacker {
    writer: BitWriter<Vec<u8>, BigEndian>,
    bit_count: u64,
}

impl BitPacker {
    pub fn new() -> Self {
        Self {
            writer: BitWriter::endian(Vec::new(), BigEndian),
            bit_count: 0,
        }
    }

    pub fn push_bit(&mut self, bit: bool) -> Result<()> {
        self.writer.write_bit(bit)?;
        self.bit_count += 1;
        Ok(())
    }

    /// Appends a codeword given as `0`/`1` elements.
    pub fn push_code(&mut self, code: &[u8]) -> Result<()> {
        for &bit in code {
            self.push_bit(bit != 0)?;
        }
        Ok(())
    }

    pub fn bit_count(&self) -> u64 {
        self.bit_count
    }

    /// Returns the packed bytes and the number of meaningful bits in them.
    pub fn finish(mut self) -> Result<(Vec<u8>, u64)> {
        self.writer.byte_align()?;
        Ok((self.writer.into_writer(), self.bit_count))
    }
}

impl Default for BitPacker {
    fn default() -> Self {
        Self::new()
    }
}

/// Bytes needed to hold `bit_count` bits.
pub fn packed_len(bit_count: u64) -> u64 {
    bit_count / 8 + u64::from(bit_count % 8 != 0)
}

pub fn pack_bits<I: IntoIterator<Item = bool>>(bits: I) -> Result<(Vec<u8>, u64)> {
    let mut packer = BitPacker::new();
    for bit in bits {
        packer.push_bit(bit)?;
    }
    packer.finish()
}

/// Reads exactly `bit_count` bits, MSB-first, ignoring the padding after them.
pub fn unpack_bits(bytes: &[u8], bit_count: u64) -> Result<Vec<bool>> {
    let capacity = bytes.len() as u64 * 8;
    if bit_count > capacity {
        return Err(HuffError::malformed(format!(
            "bit count {bit_count} exceeds the {capacity} bits available"
        )));
    }

    let mut reader = BitReader::endian(Cursor::new(bytes), BigEndian);
    let mut bits = Vec::with_capacity(bit_count as usize);
    for _ in 0..bit_count {
        bits.push(reader.read_bit()?);
    }
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(s: &str) -> Vec<bool> {
        s.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn test_pack_partial_byte() {
        assert_eq!(pack_bits(bits("1110")).unwrap(), (vec![0b1110_0000], 4));
    }

    #[test]
    fn test_pack_across_bytes() {
        let (packed, count) = pack_bits(bits("101100111")).unwrap();
        assert_eq!(packed, vec![0b1011_0011, 0b1000_0000]);
        assert_eq!(count, 9);
    }

    #[test]
    fn test_packed_len() {
        assert_eq!(packed_len(0), 0);
        assert_eq!(packed_len(1), 1);
        assert_eq!(packed_len(8), 1);
        assert_eq!(packed_len(9), 2);
        assert_eq!(packed_len(u64::MAX), u64::MAX / 8 + 1);
    }

    #[test]
    fn test_pack_empty() {
        assert_eq!(pack_bits(Vec::new()).unwrap(), (Vec::new(), 0));
    }

    #[test]
    fn test_push_code() {
        let mut packer = BitPacker::new();
        packer.push_code(&[1, 1, 0]).unwrap();
        packer.push_code(&[0, 1]).unwrap();
        assert_eq!(packer.bit_count(), 5);
        assert_eq!(packer.finish().unwrap(), (vec![0b1100_1000], 5));
    }

    #[test]
    fn test_unpack_drops_padding() {
        assert_eq!(unpack_bits(&[0b1110_0101], 4).unwrap(), bits("1110"));
        assert_eq!(
            unpack_bits(&[0xFF, 0x80], 9).unwrap(),
            bits("111111111")
        );
        assert!(unpack_bits(&[], 0).unwrap().is_empty());
    }

    #[test]
    fn test_unpack_too_many_bits() {
        assert!(matches!(
            unpack_bits(&[0xAA], 9),
            Err(HuffError::MalformedArtifact(_))
        ));
    }
}
