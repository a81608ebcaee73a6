//! `0x` prefixed hex decoding used by the string adapters.
//!
//! Accepts the same inputs as go-ethereum's `hexutil.Decode`: the prefix is mandatory, the
//! digit count must be even and a bare `0x` decodes to an empty byte vector.
use alloy_primitives::hex::{self, FromHexError};

/// Reasons a hex string is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HexError {
    /// Input is the empty string.
    #[error("empty hex string")]
    Empty,
    /// Input does not start with `0x` or `0X`.
    #[error("hex string without 0x prefix")]
    MissingPrefix,
    /// Digits after the prefix are not valid hex.
    #[error(transparent)]
    Decode(#[from] FromHexError),
}

/// Decodes a `0x` prefixed hex string.
pub fn decode_prefixed(input: &str) -> Result<Vec<u8>, HexError> {
    if input.is_empty() {
        return Err(HexError::Empty);
    }
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .ok_or(HexError::MissingPrefix)?;

    // `hex::decode` strips a prefix on its own, a second one must not slip through.
    if let Some(c @ ('x' | 'X')) = digits.strip_prefix('0').and_then(|rest| rest.chars().next()) {
        return Err(FromHexError::InvalidHexCharacter { c, index: 1 }.into());
    }

    Ok(hex::decode(digits)?)
}

/// Encodes bytes as a lowercase `0x` prefixed hex string.
pub fn encode_prefixed(bytes: impl AsRef<[u8]>) -> String {
    hex::encode_prefixed(bytes)
}
