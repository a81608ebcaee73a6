//! Signer recovery (`ecrecover`).
//!
//! Input format:
//! [32 bytes for digest] and [32 bytes r][32 bytes s][1 byte v], `v` being `27` or `28`.
//!
//! Output format:
//! [20 bytes recovered address]
use crate::{
    constants::WIRE_V_OFFSET,
    crypto::public_key_to_address,
    encoding::decode_prefixed,
    Crypto, DefaultCrypto, EthSigError, Result, Signature,
};
use alloy_primitives::{Address, B256};
use tracing::trace;

/// Recovers the address that produced `signature` over `digest`.
///
/// `signature` must be 65 bytes with `v` in the wire form (`27` or `28`). It is copied before
/// the recovery id is translated, the caller's buffer is never written to.
pub fn recover(digest: &B256, signature: &[u8]) -> Result<Address> {
    recover_with(&DefaultCrypto, digest, signature)
}

/// [`recover`] with the given [`Crypto`] backend.
pub fn recover_with<C: Crypto + ?Sized>(
    crypto: &C,
    digest: &B256,
    signature: &[u8],
) -> Result<Address> {
    let signature = Signature::from_slice(signature)?;

    // Transform yellow paper V from 27/28 to 0/1.
    let recid = match signature.v() {
        v @ (27 | 28) => v - WIRE_V_OFFSET,
        v => return Err(EthSigError::InvalidRecoveryId(v)),
    };

    let raw = crypto.recover_prehash(digest, &signature.rs(), recid)?;
    let public_key = crypto.decode_public_key(&raw)?;
    let address = public_key_to_address(crypto, &public_key);

    trace!(target: "ethsig", %digest, %address, "recovered signer");
    Ok(address)
}

/// [`recover`] taking a `0x` prefixed hex digest and signature.
pub fn recover_hex(digest: &str, signature: &str) -> Result<Address> {
    let digest = decode_prefixed(digest)?;
    let signature = decode_prefixed(signature)?;

    let digest = B256::try_from(digest.as_slice()).map_err(|_| EthSigError::InvalidDigestLength {
        len: digest.len(),
    })?;
    recover(&digest, &signature)
}

/// [`recover_hex`] returning the EIP-55 checksummed address string.
pub fn recover_hex_checksummed(digest: &str, signature: &str) -> Result<String> {
    recover_hex(digest, signature).map(|address| address.to_checksum(None))
}
