//! Sizes and fixed values of the Ethereum signing scheme.

/// Prefix every personal message is framed with before hashing.
pub const PERSONAL_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n";

/// Message digest length in bytes.
pub const DIGEST_LENGTH: usize = 32;

/// secp256k1 private key length in bytes.
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// Length of the `r || s` part of a signature.
pub const RS_LENGTH: usize = 64;

/// Full signature length in bytes (`r || s || v`).
pub const SIGNATURE_LENGTH: usize = 65;

/// secp256k1 public key length in bytes (uncompressed, `0x04` tagged).
pub const PUBKEY_UNCOMPRESSED_LENGTH: usize = 65;

/// Offset between the wire recovery id (`27`/`28`) and the curve native one (`0`/`1`).
pub const WIRE_V_OFFSET: u8 = 27;
