//! Signing a digest and deriving the signer address of a private key.
use crate::{
    constants::PRIVATE_KEY_LENGTH,
    crypto::public_key_to_address,
    encoding::{decode_prefixed, encode_prefixed},
    Crypto, DefaultCrypto, EthSigError, Result, Signature, Signer,
};
use alloy_primitives::{Address, B256};
use tracing::trace;

/// Signs `digest` with `private_key`.
///
/// `digest` is expected to come from [`hash_message`](crate::hash_message), this is not checked.
/// The returned signature carries the curve native recovery id (`0`/`1`); see
/// [`Signature::to_wire_bytes`] for the form [`recover`](crate::recover) takes.
pub fn sign(digest: &B256, private_key: &[u8; PRIVATE_KEY_LENGTH]) -> Result<Signature> {
    sign_with(&DefaultCrypto, digest, private_key)
}

/// [`sign`] with the given [`Signer`].
pub fn sign_with<S: Signer + ?Sized>(
    signer: &S,
    digest: &B256,
    private_key: &[u8; PRIVATE_KEY_LENGTH],
) -> Result<Signature> {
    let (rs, recid) = signer.sign_prehash(digest, private_key)?;
    let signature = Signature::new(rs, recid);
    trace!(target: "ethsig", %digest, recid, "signed digest");
    Ok(signature)
}

/// Returns the address controlled by `private_key`.
pub fn address_of(private_key: &[u8; PRIVATE_KEY_LENGTH]) -> Result<Address> {
    address_of_with(&DefaultCrypto, private_key)
}

/// [`address_of`] with the given [`Crypto`] backend.
pub fn address_of_with<C: Crypto + ?Sized>(
    crypto: &C,
    private_key: &[u8; PRIVATE_KEY_LENGTH],
) -> Result<Address> {
    let raw = crypto.public_key(private_key)?;
    let public_key = crypto.decode_public_key(&raw)?;
    Ok(public_key_to_address(crypto, &public_key))
}

/// [`sign`] taking a `0x` prefixed hex digest and private key, returning the `0x` prefixed hex
/// signature.
///
/// The digest should already be framed with [`hash_message`](crate::hash_message).
pub fn sign_hex(digest: &str, private_key: &str) -> Result<String> {
    let digest = decode_prefixed(digest)?;
    let private_key = decode_prefixed(private_key)?;

    let digest = B256::try_from(digest.as_slice()).map_err(|_| EthSigError::InvalidDigestLength {
        len: digest.len(),
    })?;
    let private_key = <[u8; PRIVATE_KEY_LENGTH]>::try_from(private_key.as_slice())
        .map_err(|_| EthSigError::InvalidPrivateKey)?;

    let signature = sign(&digest, &private_key)?;
    Ok(encode_prefixed(signature))
}
