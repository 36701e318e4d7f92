use binary_rw::{BinaryReader, BinaryWriter, Endian, MemoryStream, WriteStream};

use crate::bit_stream::packed_len;
use crate::error::{HuffError, Result};
use crate::huffman::{FrequencyTable, Symbol};

const COUNT_SIZE: u64 = 4;
const ENTRY_SIZE: u64 = 2 + 8;
const BIT_COUNT_SIZE: u64 = 8;

/// What compression persists: the frequency table, the number of meaningful
/// bits, and the MSB-first packed bits. The tree is rebuilt from the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub frequencies: FrequencyTable,
    pub bit_count: u64,
    pub packed: Vec<u8>,
}

impl Artifact {
    pub fn validate(&self) -> Result<()> {
        if self.frequencies.is_empty() {
            return Err(HuffError::malformed("frequency table is empty"));
        }

        let available = self.packed.len() as u64;
        if self.bit_count > available * 8 {
            return Err(HuffError::malformed(format!(
                "bit count {} exceeds the {} packed bytes",
                self.bit_count, available
            )));
        }

        let expected = packed_len(self.bit_count);
        if available != expected {
            return Err(HuffError::malformed(format!(
                "{} packed bytes present, {} bits need {}",
                available, self.bit_count, expected
            )));
        }

        Ok(())
    }

    pub fn write<W: WriteStream>(&self, writer: &mut W) -> Result<()> {
        let mut writer = BinaryWriter::new(writer, Endian::Big);

        writer.write_u32(self.frequencies.len() as u32)?;
        for (symbol, count) in self.frequencies.iter() {
            writer.write_u16(symbol)?;
            writer.write_u64(count)?;
        }
        writer.write_u64(self.bit_count)?;
        writer.write_bytes(&self.packed)?;

        Ok(())
    }

    pub fn to_vec(&self) -> Result<Vec<u8>> {
        let mut stream = MemoryStream::new();
        self.write(&mut stream)?;
        Ok(stream.into())
    }
}

fn truncated(what: &str) -> impl FnOnce(binary_rw::BinaryError) -> HuffError + '_ {
    move |e| HuffError::malformed(format!("truncated {what}: {e}"))
}

impl TryFrom<&[u8]> for Artifact {
    type Error = HuffError;

    fn try_from(data: &[u8]) -> Result<Self> {
        let mut stream = MemoryStream::from(data.to_vec());
        let mut reader = BinaryReader::new(&mut stream, Endian::Big);

        let entries = reader.read_u32().map_err(truncated("symbol count"))?;
        let mut pairs = Vec::new();
        for _ in 0..entries {
            let symbol: Symbol = reader.read_u16().map_err(truncated("frequency table"))?;
            let count = reader.read_u64().map_err(truncated("frequency table"))?;
            pairs.push((symbol, count));
        }
        let frequencies = FrequencyTable::try_from_entries(pairs)?;

        let bit_count = reader.read_u64().map_err(truncated("bit count"))?;

        let header = COUNT_SIZE + entries as u64 * ENTRY_SIZE + BIT_COUNT_SIZE;
        let remaining = data.len() as u64 - header;
        let expected = packed_len(bit_count);
        if remaining < expected {
            return Err(HuffError::malformed(format!(
                "packed data truncated: {bit_count} bits need {expected} bytes, {remaining} present"
            )));
        }
        if remaining > expected {
            return Err(HuffError::malformed(format!(
                "{} trailing bytes after packed data",
                remaining - expected
            )));
        }

        let packed = reader
            .read_bytes(expected as usize)
            .map_err(truncated("packed data"))?;

        let artifact = Self {
            frequencies,
            bit_count,
            packed,
        };
        artifact.validate()?;
        Ok(artifact)
    }
}
