mod codes;
mod frequency;
mod tree;

pub use codes::{codeword_string, print_code_table, CodeTable, Codeword};
pub use frequency::FrequencyTable;
pub use tree::{Branch, HuffmanTree, Node};

/// One 16-bit text code unit.
pub type Symbol = u16;
