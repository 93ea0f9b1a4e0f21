//! # Transport Formatting
//!
//! Reversible byte <-> text encodings used to hand binary payloads to callers.
//!
//! Every encoding appends a 4-byte checksum (the last four bytes of the
//! payload's SHA-256) before rendering, and verifies it on decode.
//!
//! | Encoding | Text form |
//! |----------|-----------|
//! | `cb58`   | base58(payload ‖ checksum) |
//! | `hex`    | `0x` ‖ hex(payload ‖ checksum) |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::errors::FormattingError;

/// Number of checksum bytes appended to every payload.
pub const CHECKSUM_LEN: usize = 4;

/// Largest payload `cb58` will encode (base58 is quadratic in input size).
pub const MAX_CB58_ENCODE_SIZE: usize = 16 * 1024;

/// Text encoding chosen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Base58 with checksum.
    #[default]
    Cb58,
    /// `0x`-prefixed hex with checksum.
    Hex,
}

impl Encoding {
    /// Wire name of the encoding.
    pub const fn as_str(self) -> &'static str {
        match self {
            Encoding::Cb58 => "cb58",
            Encoding::Hex => "hex",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = FormattingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cb58" => Ok(Encoding::Cb58),
            "hex" => Ok(Encoding::Hex),
            _ => Err(FormattingError::UnknownEncoding(s.to_string())),
        }
    }
}

/// Last `CHECKSUM_LEN` bytes of SHA-256(`payload`).
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = Sha256::digest(payload);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[digest.len() - CHECKSUM_LEN..]);
    out
}

/// Render `payload` as checksummed text.
pub fn encode(encoding: Encoding, payload: &[u8]) -> Result<String, FormattingError> {
    if encoding == Encoding::Cb58 && payload.len() > MAX_CB58_ENCODE_SIZE {
        return Err(FormattingError::TooLarge {
            encoding: encoding.as_str(),
            size: payload.len(),
            max: MAX_CB58_ENCODE_SIZE,
        });
    }

    let mut checked = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    checked.extend_from_slice(payload);
    checked.extend_from_slice(&checksum(payload));

    Ok(match encoding {
        Encoding::Cb58 => bs58::encode(checked).into_string(),
        Encoding::Hex => format!("0x{}", hex::encode(checked)),
    })
}

/// Parse checksummed text back into the payload bytes.
///
/// The empty string decodes to an empty payload.
pub fn decode(encoding: Encoding, text: &str) -> Result<Vec<u8>, FormattingError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let mut checked = match encoding {
        Encoding::Cb58 => {
            bs58::decode(text)
                .into_vec()
                .map_err(|e| FormattingError::InvalidText {
                    encoding: encoding.as_str(),
                    reason: e.to_string(),
                })?
        }
        Encoding::Hex => {
            let digits = text
                .strip_prefix("0x")
                .ok_or(FormattingError::MissingHexPrefix)?;
            hex::decode(digits).map_err(|e| FormattingError::InvalidText {
                encoding: encoding.as_str(),
                reason: e.to_string(),
            })?
        }
    };

    if checked.len() < CHECKSUM_LEN {
        return Err(FormattingError::MissingChecksum(checked.len()));
    }

    let split = checked.len() - CHECKSUM_LEN;
    let expected = checksum(&checked[..split]);
    if checked[split..] != expected {
        return Err(FormattingError::BadChecksum);
    }

    checked.truncate(split);
    Ok(checked)
}
