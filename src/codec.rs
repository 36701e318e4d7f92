use log::debug;

use crate::artifact::Artifact;
use crate::bit_stream::{unpack_bits, BitPacker};
use crate::error::{HuffError, Result};
use crate::huffman::{FrequencyTable, HuffmanTree, Node, Symbol};

pub fn encode(symbols: &[Symbol]) -> Result<Artifact> {
    let frequencies = FrequencyTable::from_symbols(symbols);
    let tree = HuffmanTree::from_frequencies(&frequencies).ok_or(HuffError::EmptyInput)?;
    let codes = tree.code_table();
    debug!(
        "{} symbols, {} distinct, {} bits expected",
        symbols.len(),
        codes.len(),
        codes.encoded_bits(&frequencies)
    );

    let mut packer = BitPacker::new();
    for &symbol in symbols {
        let code = codes.get(symbol).ok_or_else(|| {
            HuffError::inconsistent(format!("symbol {symbol:#06X} has no codeword"))
        })?;
        packer.push_code(code)?;
    }
    let (packed, bit_count) = packer.finish()?;
    debug!("packed {bit_count} bits into {} bytes", packed.len());

    Ok(Artifact {
        frequencies,
        bit_count,
        packed,
    })
}

pub fn decode(artifact: &Artifact) -> Result<Vec<Symbol>> {
    artifact.validate()?;

    let tree = HuffmanTree::from_frequencies(&artifact.frequencies)
        .ok_or_else(|| HuffError::malformed("frequency table is empty"))?;
    let bits = unpack_bits(&artifact.packed, artifact.bit_count)?;

    let expected = tree.weight();
    let mut symbols = Vec::with_capacity(expected.min(artifact.bit_count) as usize);
    let root = tree.root();
    let mut cursor = root;
    let mut depth = 0usize;

    for (index, &bit) in bits.iter().enumerate() {
        match cursor.child(bit) {
            None => {
                return Err(HuffError::inconsistent(format!(
                    "bit {index} leads to a missing branch"
                )))
            }
            Some(Node::Leaf { symbol, .. }) => {
                symbols.push(*symbol);
                cursor = root;
                depth = 0;
            }
            Some(Node::Internal(branch)) => {
                cursor = branch;
                depth += 1;
            }
        }
    }

    if depth != 0 {
        return Err(HuffError::inconsistent(format!(
            "bitstream ends {depth} bits into a codeword"
        )));
    }
    if symbols.len() as u64 != expected {
        return Err(HuffError::inconsistent(format!(
            "decoded {} symbols, frequency table accounts for {expected}",
            symbols.len()
        )));
    }

    debug!("decoded {} symbols from {} bits", symbols.len(), bits.len());
    Ok(symbols)
}
