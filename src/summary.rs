use std::fmt;

use crate::bit_stream::packed_len;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionSummary {
    pub original_bytes: usize,
    pub encoded_bits: u64,
}

impl CompressionSummary {
    pub fn original_bits(&self) -> u64 {
        self.original_bytes as u64 * 8
    }

    pub fn encoded_bytes(&self) -> u64 {
        packed_len(self.encoded_bits)
    }

    /// Space saved, as a percentage of the original size.
    pub fn ratio_percent(&self) -> f64 {
        match self.original_bits() {
            0 => 0.0,
            original => (1.0 - self.encoded_bits as f64 / original as f64) * 100.0,
        }
    }
}

impl fmt::Display for CompressionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Original Size: {} bits ({} bytes)",
            self.original_bits(),
            self.original_bytes
        )?;
        writeln!(
            f,
            "Compressed Size: {} bits ({} bytes)",
            self.encoded_bits,
            self.encoded_bytes()
        )?;
        write!(f, "Compression Ratio: {:.2}%", self.ratio_percent())
    }
}
