//! Capability traits over the cryptographic primitives.
//!
//! The framing, recovery id translation and address derivation in this crate only talk to
//! these traits, so a backend can be swapped without touching them. Implementations live in
//! [`crate::secp256k1`].
use crate::{
    constants::{PRIVATE_KEY_LENGTH, PUBKEY_UNCOMPRESSED_LENGTH, RS_LENGTH},
    Result,
};
use alloy_primitives::{Address, Keccak256, B256, B512};
use core::fmt::Debug;

/// Keccak-256 hashing.
pub trait Hasher: Send + Sync + Debug {
    /// Hashes the concatenation of `parts`.
    fn keccak256(&self, parts: &[&[u8]]) -> B256 {
        let mut hasher = Keccak256::new();
        for part in parts {
            hasher.update(part);
        }
        hasher.finalize()
    }
}

/// secp256k1 ECDSA signing over a prehashed message.
pub trait Signer: Send + Sync + Debug {
    /// Signs `digest` and returns `r || s` with the curve native recovery id (`0` or `1`).
    ///
    /// Fails with [`InvalidPrivateKey`](crate::EthSigError::InvalidPrivateKey) if the key is
    /// not a valid scalar and [`SigningError`](crate::EthSigError::SigningError) if no
    /// signature could be produced.
    fn sign_prehash(
        &self,
        digest: &B256,
        private_key: &[u8; PRIVATE_KEY_LENGTH],
    ) -> Result<([u8; RS_LENGTH], u8)>;

    /// Returns the uncompressed, `0x04` tagged public key of `private_key`.
    fn public_key(
        &self,
        private_key: &[u8; PRIVATE_KEY_LENGTH],
    ) -> Result<[u8; PUBKEY_UNCOMPRESSED_LENGTH]>;
}

/// secp256k1 public key recovery.
pub trait Recoverer: Send + Sync + Debug {
    /// Recovers the raw uncompressed public key that produced `rs` over `digest`.
    ///
    /// `recid` is the curve native recovery id (`0` or `1`).
    fn recover_prehash(
        &self,
        digest: &B256,
        rs: &[u8; RS_LENGTH],
        recid: u8,
    ) -> Result<[u8; PUBKEY_UNCOMPRESSED_LENGTH]>;

    /// Decodes a raw SEC1 public key into its `X || Y` coordinates.
    ///
    /// Fails with [`InvalidPublicKey`](crate::EthSigError::InvalidPublicKey) if the bytes are
    /// not an uncompressed encoding of a point on the curve.
    fn decode_public_key(&self, raw: &[u8]) -> Result<B512>;
}

/// Everything needed to hash, sign and recover.
pub trait Crypto: Hasher + Signer + Recoverer {}

impl<T: Hasher + Signer + Recoverer + ?Sized> Crypto for T {}

/// Derives the address of a public key given as its `X || Y` coordinates.
///
/// The address is the last 20 bytes of `keccak256(X || Y)`.
pub fn public_key_to_address<H: Hasher + ?Sized>(hasher: &H, public_key: &B512) -> Address {
    Address::from_word(hasher.keccak256(&[public_key.as_slice()]))
}
