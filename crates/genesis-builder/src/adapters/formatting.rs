//! Checksummed payload transport over `shared_types::formatting`.

use shared_types::{formatting, Encoding, FormattingError};

use crate::ports::PayloadEncoder;

#[derive(Debug, Clone, Copy, Default)]
pub struct ChecksummedFormatter;

impl PayloadEncoder for ChecksummedFormatter {
    fn encode(&self, encoding: Encoding, payload: &[u8]) -> Result<String, FormattingError> {
        formatting::encode(encoding, payload)
    }

    fn decode(&self, encoding: Encoding, text: &str) -> Result<Vec<u8>, FormattingError> {
        formatting::decode(encoding, text)
    }
}
