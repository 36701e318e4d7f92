use std::collections::BTreeMap;

use super::{FrequencyTable, HuffmanTree, Node, Symbol};

/// Bits of a codeword, one `0` or `1` per element, root first.
pub type Codeword = Vec<u8>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<Symbol, Codeword>,
}

impl CodeTable {
    pub fn get(&self, symbol: Symbol) -> Option<&[u8]> {
        self.codes.get(&symbol).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &[u8])> + '_ {
        self.codes
            .iter()
            .map(|(&symbol, code)| (symbol, code.as_slice()))
    }

    /// Total encoded length: each codeword's length times its symbol's count.
    pub fn encoded_bits(&self, frequencies: &FrequencyTable) -> u64 {
        frequencies
            .iter()
            .filter_map(|(symbol, count)| self.get(symbol).map(|code| code.len() as u64 * count))
            .sum()
    }
}

impl HuffmanTree {
    pub fn code_table(&self) -> CodeTable {
        let root = self.root();
        let mut table = CodeTable::default();
        let mut prefix = vec![0];
        collect_codes(&root.left, &mut prefix, &mut table);
        if let Some(right) = &root.right {
            prefix[0] = 1;
            collect_codes(right, &mut prefix, &mut table);
        }
        table
    }
}

impl Node {
    /// Codes for the subtree rooted here. A lone leaf gets the codeword `0`.
    pub fn code_table(&self) -> CodeTable {
        let mut table = CodeTable::default();
        collect_codes(self, &mut Vec::new(), &mut table);
        table
    }
}

fn collect_codes(node: &Node, prefix: &mut Codeword, table: &mut CodeTable) {
    match node {
        Node::Leaf { symbol, .. } => {
            let code = match prefix.is_empty() {
                true => vec![0],
                false => prefix.clone(),
            };
            table.codes.insert(*symbol, code);
        }
        Node::Internal(branch) => {
            prefix.push(0);
            collect_codes(&branch.left, prefix, table);
            prefix.pop();

            if let Some(right) = &branch.right {
                prefix.push(1);
                collect_codes(right, prefix, table);
                prefix.pop();
            }
        }
    }
}

pub fn codeword_string(code: &[u8]) -> String {
    code.iter().map(|bit| bit.to_string()).collect()
}

pub fn print_code_table(table: &CodeTable) {
    for (symbol, code) in table.iter() {
        let display = match char::from_u32(symbol as u32) {
            Some(c) if !c.is_control() => c.escape_debug().to_string(),
            _ => String::from("?"),
        };
        println!("\t{symbol:04X}\t{display}\t{}", codeword_string(code));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_for(text: &str) -> (FrequencyTable, CodeTable) {
        let symbols = text.encode_utf16().collect::<Vec<_>>();
        let frequencies = FrequencyTable::from_symbols(&symbols);
        let tree = HuffmanTree::from_frequencies(&frequencies).unwrap();
        (frequencies, tree.code_table())
    }

    fn code_of(table: &CodeTable, c: char) -> String {
        codeword_string(table.get(c as Symbol).unwrap())
    }

    #[test]
    fn test_two_symbols() {
        let (_, table) = table_for("aaab");
        assert_eq!(code_of(&table, 'b'), "0");
        assert_eq!(code_of(&table, 'a'), "1");
    }

    #[test]
    fn test_single_symbol() {
        let (frequencies, table) = table_for("zzzzz");
        assert_eq!(table.len(), 1);
        assert_eq!(code_of(&table, 'z'), "0");
        assert_eq!(table.encoded_bits(&frequencies), 5);
    }

    #[test]
    fn test_leaf_fallback() {
        let leaf = Node::Leaf {
            symbol: 0x41,
            weight: 3,
        };
        assert_eq!(leaf.code_table().get(0x41), Some(&[0u8][..]));
    }

    #[test]
    fn test_known_table() {
        // c+d -> n0(2); n0 ties b and r at 2 and goes first: n0+b -> n1(4);
        // r+n1 -> n2(6); a+n2 -> root(11)
        let (frequencies, table) = table_for("abracadabra");
        assert_eq!(code_of(&table, 'a'), "0");
        assert_eq!(code_of(&table, 'r'), "10");
        assert_eq!(code_of(&table, 'c'), "1100");
        assert_eq!(code_of(&table, 'd'), "1101");
        assert_eq!(code_of(&table, 'b'), "111");
        assert_eq!(table.encoded_bits(&frequencies), 5 + 2 * 2 + 4 + 4 + 2 * 3);
    }

    #[test]
    fn test_prefix_free() {
        let (_, table) = table_for("the quick brown fox jumps over the lazy dog, twice!!");
        let codes = table.iter().map(|(_, code)| code).collect::<Vec<_>>();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a), "{a:?} is a prefix of {b:?}");
                }
            }
        }
    }
}
