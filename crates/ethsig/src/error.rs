//! Error type returned by every fallible operation of the crate.
use crate::encoding::HexError;

/// Result alias with [`EthSigError`] as the default error.
pub type Result<T, E = EthSigError> = core::result::Result<T, E>;

/// Signing and recovery errors.
///
/// Every variant is terminal: it describes malformed input or a cryptographic impossibility.
/// Variants never carry key material.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EthSigError {
    /// A hex input could not be decoded.
    #[error("malformed hex input: {0}")]
    MalformedHex(#[from] HexError),
    /// Signature is not exactly 65 bytes long.
    #[error("signature must be 65 bytes long, got {len}")]
    MalformedSignature {
        /// Length of the rejected signature.
        len: usize,
    },
    /// Recovery id is not `27` or `28`.
    #[error("invalid Ethereum signature (V is {0}, not 27 or 28)")]
    InvalidRecoveryId(u8),
    /// Private key is not a valid secp256k1 scalar.
    #[error("invalid private key")]
    InvalidPrivateKey,
    /// The signing primitive could not produce a signature.
    #[error("failed to sign digest")]
    SigningError,
    /// No public key could be recovered from the signature.
    #[error("failed to recover public key from signature")]
    RecoveryFailed,
    /// Recovered public key is not a valid curve point.
    #[error("invalid public key")]
    InvalidPublicKey,
    /// Decoded digest is not 32 bytes long.
    #[error("message digest must be 32 bytes long, got {len}")]
    InvalidDigestLength {
        /// Length of the rejected digest.
        len: usize,
    },
}
