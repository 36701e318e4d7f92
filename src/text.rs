use std::fmt;
use std::str::FromStr;

use crate::error::{HuffError, Result};
use crate::huffman::Symbol;

/// Byte-level text encoding used to turn a file into symbols and back.
/// Compression and decompression must agree on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    Utf16Le,
    Utf16Be,
    Latin1,
}

impl Encoding {
    pub const NAMES: [&'static str; 4] = ["utf8", "utf16le", "utf16be", "latin1"];

    pub fn decode(self, bytes: &[u8]) -> Result<Vec<Symbol>> {
        use Encoding::*;

        match self {
            Utf8 => {
                let text = std::str::from_utf8(bytes)
                    .map_err(|e| HuffError::invalid_text(format!("input is not UTF-8: {e}")))?;
                Ok(text.encode_utf16().collect())
            }
            Utf16Le => utf16_units(bytes, u16::from_le_bytes),
            Utf16Be => utf16_units(bytes, u16::from_be_bytes),
            Latin1 => Ok(bytes.iter().map(|&b| b as Symbol).collect()),
        }
    }

    pub fn encode(self, symbols: &[Symbol]) -> Result<Vec<u8>> {
        use Encoding::*;

        match self {
            Utf8 => String::from_utf16(symbols)
                .map(String::into_bytes)
                .map_err(|_| HuffError::invalid_text("decoded symbols are not valid UTF-16")),
            Utf16Le => Ok(symbols.iter().flat_map(|s| s.to_le_bytes()).collect()),
            Utf16Be => Ok(symbols.iter().flat_map(|s| s.to_be_bytes()).collect()),
            Latin1 => symbols
                .iter()
                .map(|&s| {
                    u8::try_from(s).map_err(|_| {
                        HuffError::invalid_text(format!("symbol {s:#06X} is outside Latin-1"))
                    })
                })
                .collect(),
        }
    }
}

fn utf16_units(bytes: &[u8], from_bytes: fn([u8; 2]) -> u16) -> Result<Vec<Symbol>> {
    if bytes.len() % 2 != 0 {
        return Err(HuffError::invalid_text(format!(
            "UTF-16 input has odd length {}",
            bytes.len()
        )));
    }

    Ok(bytes
        .chunks_exact(2)
        .map(|pair| from_bytes([pair[0], pair[1]]))
        .collect())
}

impl FromStr for Encoding {
    type Err = HuffError;

    fn from_str(s: &str) -> Result<Self> {
        use Encoding::*;

        match s.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Utf8),
            "utf16le" | "utf-16le" => Ok(Utf16Le),
            "utf16be" | "utf-16be" => Ok(Utf16Be),
            "latin1" | "iso-8859-1" => Ok(Latin1),
            _ => Err(HuffError::UnknownEncoding(s.to_string())),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Encoding::*;

        let name = match self {
            Utf8 => "utf8",
            Utf16Le => "utf16le",
            Utf16Be => "utf16be",
            Latin1 => "latin1",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Encoding::Utf8, "héllo wörld €".as_bytes().to_vec())]
    #[case(Encoding::Utf8, "emoji 🦀 crab".as_bytes().to_vec())]
    #[case(Encoding::Utf16Le, vec![0x68, 0x00, 0x3D, 0xD8, 0x80, 0xDE])]
    #[case(Encoding::Utf16Be, vec![0x00, 0x68, 0xD8, 0x3D, 0xDE, 0x80])]
    #[case(Encoding::Latin1, (0u8..=255).collect())]
    fn test_decode_encode(#[case] encoding: Encoding, #[case] bytes: Vec<u8>) {
        let symbols = encoding.decode(&bytes).unwrap();
        assert_eq!(encoding.encode(&symbols).unwrap(), bytes);
    }

    #[test]
    fn test_utf8_uses_code_units() {
        let symbols = Encoding::Utf8.decode("a🦀".as_bytes()).unwrap();
        assert_eq!(symbols, vec![0x61, 0xD83E, 0xDD80]);
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(
            Encoding::Utf8.decode(&[0xC3, 0x28]),
            Err(HuffError::InvalidText(_))
        ));
        assert!(matches!(
            Encoding::Utf16Le.decode(&[0x61, 0x00, 0x62]),
            Err(HuffError::InvalidText(_))
        ));
    }

    #[test]
    fn test_invalid_output() {
        assert!(matches!(
            Encoding::Latin1.encode(&[0x61, 0x100]),
            Err(HuffError::InvalidText(_))
        ));
        assert!(matches!(
            Encoding::Utf8.encode(&[0xD800]),
            Err(HuffError::InvalidText(_))
        ));
    }

    #[test]
    fn test_names() {
        for name in Encoding::NAMES {
            assert_eq!(name.parse::<Encoding>().unwrap().to_string(), name);
        }
        assert_eq!("UTF-8".parse::<Encoding>().unwrap(), Encoding::Utf8);
        assert!(matches!(
            "ebcdic".parse::<Encoding>(),
            Err(HuffError::UnknownEncoding(name)) if name == "ebcdic"
        ));
    }
}
