//! Source encodings the platform can declare.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Declared source file encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Charset {
    /// UTF-8, with an optional byte order mark.
    #[default]
    Utf8,
    /// ISO-8859-1.
    Latin1,
}

impl Charset {
    /// Canonical name of this charset.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Latin1 => "ISO-8859-1",
        }
    }

    /// Decodes raw file bytes into text.
    ///
    /// Invalid UTF-8 sequences become U+FFFD.
    #[must_use]
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            Self::Utf8 => {
                let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                String::from_utf8_lossy(bytes).into_owned()
            }
            Self::Latin1 => bytes.iter().map(|&b| char::from(b)).collect(),
        }
    }
}

impl std::fmt::Display for Charset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Charset {
    type Err = CharsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "UTF-8" | "UTF8" => Ok(Self::Utf8),
            "ISO-8859-1" | "ISO8859-1" | "LATIN1" | "LATIN-1" => Ok(Self::Latin1),
            _ => Err(CharsetError::Unknown(s.to_string())),
        }
    }
}

impl TryFrom<String> for Charset {
    type Error = CharsetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Charset> for String {
    fn from(value: Charset) -> Self {
        value.name().to_string()
    }
}

/// Errors naming a charset.
#[derive(Debug, thiserror::Error)]
pub enum CharsetError {
    /// The charset name is not supported.
    #[error("unsupported charset: {0}")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_strips_bom() {
        let text = Charset::Utf8.decode(b"\xEF\xBB\xBFclass A {}");
        assert_eq!(text, "class A {}");
    }

    #[test]
    fn utf8_replaces_invalid_bytes() {
        let text = Charset::Utf8.decode(b"ok\xFF!");
        assert_eq!(text, "ok\u{FFFD}!");
    }

    #[test]
    fn latin1_maps_every_byte() {
        let text = Charset::Latin1.decode(b"caf\xE9");
        assert_eq!(text, "café");
    }

    #[test]
    fn parses_common_names() {
        assert_eq!("utf-8".parse::<Charset>().unwrap(), Charset::Utf8);
        assert_eq!("ISO-8859-1".parse::<Charset>().unwrap(), Charset::Latin1);
        assert!("EBCDIC".parse::<Charset>().is_err());
    }
}
