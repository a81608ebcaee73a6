//! k256 backend. More about it in [`crate::secp256k1`].
use crate::{
    constants::{PRIVATE_KEY_LENGTH, PUBKEY_UNCOMPRESSED_LENGTH, RS_LENGTH},
    EthSigError, Hasher, Recoverer, Result, Signer,
};
use alloy_primitives::{B256, B512};
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};

/// Pure rust backend built on the `k256` crate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct K256Crypto;

impl Hasher for K256Crypto {}

impl Signer for K256Crypto {
    fn sign_prehash(
        &self,
        digest: &B256,
        private_key: &[u8; PRIVATE_KEY_LENGTH],
    ) -> Result<([u8; RS_LENGTH], u8)> {
        let signing_key = signing_key(private_key)?;

        // RFC 6979 nonce, `s` is normalized and the recovery id adjusted accordingly.
        let (sig, recid) = signing_key
            .sign_prehash_recoverable(digest.as_slice())
            .map_err(|_| EthSigError::SigningError)?;

        let mut rs = [0u8; RS_LENGTH];
        rs.copy_from_slice(&sig.to_bytes());
        Ok((rs, recid.to_byte()))
    }

    fn public_key(
        &self,
        private_key: &[u8; PRIVATE_KEY_LENGTH],
    ) -> Result<[u8; PUBKEY_UNCOMPRESSED_LENGTH]> {
        let signing_key = signing_key(private_key)?;
        Ok(uncompressed(signing_key.verifying_key()))
    }
}

impl Recoverer for K256Crypto {
    fn recover_prehash(
        &self,
        digest: &B256,
        rs: &[u8; RS_LENGTH],
        mut recid: u8,
    ) -> Result<[u8; PUBKEY_UNCOMPRESSED_LENGTH]> {
        // parse signature
        let mut sig = Signature::from_slice(rs).map_err(|_| EthSigError::RecoveryFailed)?;

        // normalize signature and flip recovery id if needed.
        if let Some(sig_normalized) = sig.normalize_s() {
            sig = sig_normalized;
            recid ^= 1;
        }
        let recid = RecoveryId::from_byte(recid).ok_or(EthSigError::RecoveryFailed)?;

        // recover key
        let recovered_key = VerifyingKey::recover_from_prehash(digest.as_slice(), &sig, recid)
            .map_err(|_| EthSigError::RecoveryFailed)?;
        Ok(uncompressed(&recovered_key))
    }

    fn decode_public_key(&self, raw: &[u8]) -> Result<B512> {
        if raw.len() != PUBKEY_UNCOMPRESSED_LENGTH {
            return Err(EthSigError::InvalidPublicKey);
        }
        let key = VerifyingKey::from_sec1_bytes(raw).map_err(|_| EthSigError::InvalidPublicKey)?;
        Ok(B512::from_slice(&uncompressed(&key)[1..]))
    }
}

fn signing_key(private_key: &[u8; PRIVATE_KEY_LENGTH]) -> Result<SigningKey> {
    SigningKey::from_slice(private_key).map_err(|_| EthSigError::InvalidPrivateKey)
}

fn uncompressed(key: &VerifyingKey) -> [u8; PUBKEY_UNCOMPRESSED_LENGTH] {
    let mut raw = [0u8; PUBKEY_UNCOMPRESSED_LENGTH];
    raw.copy_from_slice(key.to_encoded_point(/* compress = */ false).as_bytes());
    raw
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{b256, hex};

    const KEY: [u8; 32] = hex!("4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318");
    const DIGEST: B256 = b256!("1da44b586eb0729ff70a73c326926f6ed5a25f5b056e7f47fbc6e58d86871655");

    // secp256k1 group order.
    const ORDER: [u8; 32] =
        hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");

    #[test]
    fn sign_and_recover() {
        let (rs, recid) = K256Crypto.sign_prehash(&DIGEST, &KEY).unwrap();
        let recovered = K256Crypto.recover_prehash(&DIGEST, &rs, recid).unwrap();
        assert_eq!(recovered, K256Crypto.public_key(&KEY).unwrap());
    }

    #[test]
    fn recovers_high_s_signature() {
        let (rs, recid) = K256Crypto.sign_prehash(&DIGEST, &KEY).unwrap();

        // s' = n - s describes the same point with the opposite recovery id.
        let sig = Signature::from_slice(&rs).unwrap();
        let high = Signature::from_scalars(sig.r(), -*sig.s()).unwrap();
        let mut high_rs = [0u8; RS_LENGTH];
        high_rs.copy_from_slice(&high.to_bytes());
        assert_ne!(high_rs, rs);

        let recovered = K256Crypto
            .recover_prehash(&DIGEST, &high_rs, recid ^ 1)
            .unwrap();
        assert_eq!(recovered, K256Crypto.public_key(&KEY).unwrap());
    }

    #[test]
    fn rejects_out_of_range_keys() {
        for key in [[0u8; 32], ORDER, [0xff; 32]] {
            assert_eq!(
                K256Crypto.sign_prehash(&DIGEST, &key),
                Err(EthSigError::InvalidPrivateKey)
            );
            assert_eq!(K256Crypto.public_key(&key), Err(EthSigError::InvalidPrivateKey));
        }
    }

    #[test]
    fn rejects_zero_and_overflowing_scalars() {
        for rs in [[0u8; RS_LENGTH], [0xff; RS_LENGTH]] {
            assert_eq!(
                K256Crypto.recover_prehash(&DIGEST, &rs, 0),
                Err(EthSigError::RecoveryFailed)
            );
        }
    }

    #[test]
    fn decode_public_key_requires_uncompressed_point() {
        let raw = K256Crypto.public_key(&KEY).unwrap();
        assert_eq!(
            K256Crypto.decode_public_key(&raw).unwrap().as_slice(),
            &raw[1..]
        );

        let compressed = SigningKey::from_slice(&KEY)
            .unwrap()
            .verifying_key()
            .to_encoded_point(true);
        assert_eq!(
            K256Crypto.decode_public_key(compressed.as_bytes()),
            Err(EthSigError::InvalidPublicKey)
        );

        let mut off_curve = raw;
        off_curve[64] ^= 1;
        assert_eq!(
            K256Crypto.decode_public_key(&off_curve),
            Err(EthSigError::InvalidPublicKey)
        );
        assert_eq!(
            K256Crypto.decode_public_key(&[0u8; PUBKEY_UNCOMPRESSED_LENGTH]),
            Err(EthSigError::InvalidPublicKey)
        );
    }
}
