//! Static Huffman compression of text files.
//!
//! Text is decoded into 16-bit code units, counted, and coded with a Huffman
//! tree whose construction is fully deterministic. Only the frequency table
//! is stored; decompression rebuilds the same tree from it.

mod artifact;
mod bit_stream;
mod codec;
mod error;
pub mod huffman;
mod summary;
mod text;

use std::path::Path;

use log::info;

pub use artifact::Artifact;
pub use bit_stream::{pack_bits, unpack_bits, BitPacker};
pub use codec::{decode, encode};
pub use error::{HuffError, Result};
pub use summary::CompressionSummary;
pub use text::Encoding;

use huffman::{CodeTable, HuffmanTree};

pub struct Compressed {
    pub artifact: Vec<u8>,
    pub summary: CompressionSummary,
}

pub struct ArtifactReport {
    pub distinct_symbols: usize,
    pub total_symbols: u64,
    pub bit_count: u64,
    pub packed_bytes: usize,
    pub codes: CodeTable,
}

pub fn compress(input: &[u8], encoding: Encoding) -> Result<Compressed> {
    let symbols = encoding.decode(input)?;
    let artifact = encode(&symbols)?;

    Ok(Compressed {
        summary: CompressionSummary {
            original_bytes: input.len(),
            encoded_bits: artifact.bit_count,
        },
        artifact: artifact.to_vec()?,
    })
}

pub fn decompress(artifact: &[u8], encoding: Encoding) -> Result<Vec<u8>> {
    let artifact = Artifact::try_from(artifact)?;
    let symbols = decode(&artifact)?;
    encoding.encode(&symbols)
}

pub fn inspect(artifact: &[u8]) -> Result<ArtifactReport> {
    let artifact = Artifact::try_from(artifact)?;
    let tree = HuffmanTree::from_frequencies(&artifact.frequencies)
        .ok_or_else(|| HuffError::malformed("frequency table is empty"))?;

    Ok(ArtifactReport {
        distinct_symbols: artifact.frequencies.len(),
        total_symbols: artifact.frequencies.total(),
        bit_count: artifact.bit_count,
        packed_bytes: artifact.packed.len(),
        codes: tree.code_table(),
    })
}

/// The output file is only created once compression has succeeded.
pub fn compress_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    encoding: Encoding,
) -> Result<CompressionSummary> {
    let bytes = std::fs::read(input.as_ref())?;
    let Compressed { artifact, summary } = compress(&bytes, encoding)?;
    std::fs::write(output.as_ref(), artifact)?;
    info!(
        "compressed {} -> {}",
        input.as_ref().display(),
        output.as_ref().display()
    );
    Ok(summary)
}

pub fn decompress_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    encoding: Encoding,
) -> Result<()> {
    let bytes = std::fs::read(input.as_ref())?;
    let text = decompress(&bytes, encoding)?;
    std::fs::write(output.as_ref(), text)?;
    info!(
        "decompressed {} -> {}",
        input.as_ref().display(),
        output.as_ref().display()
    );
    Ok(())
}
