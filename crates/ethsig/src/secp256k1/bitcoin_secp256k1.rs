//! bitcoin_secp256k1 backend. More about it in [`crate::secp256k1`].
use crate::{
    constants::{PRIVATE_KEY_LENGTH, PUBKEY_UNCOMPRESSED_LENGTH, RS_LENGTH},
    EthSigError, Hasher, Recoverer, Result, Signer,
};
use alloy_primitives::{B256, B512};
use secp256k1::{
    ecdsa::{RecoverableSignature, RecoveryId},
    Message, PublicKey, SecretKey, SECP256K1,
};

/// Backend built on the `secp256k1` crate, enabled by the `secp256k1` feature.
///
/// Uses the library's global context, which is never mutated after creation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BitcoinSecp256k1Crypto;

impl Hasher for BitcoinSecp256k1Crypto {}

impl Signer for BitcoinSecp256k1Crypto {
    fn sign_prehash(
        &self,
        digest: &B256,
        private_key: &[u8; PRIVATE_KEY_LENGTH],
    ) -> Result<([u8; RS_LENGTH], u8)> {
        let secret = secret_key(private_key)?;
        let msg = Message::from_digest(digest.0);

        let sig = SECP256K1.sign_ecdsa_recoverable(msg, &secret);
        let (recid, rs) = sig.serialize_compact();
        let recid = u8::try_from(i32::from(recid)).map_err(|_| EthSigError::SigningError)?;
        Ok((rs, recid))
    }

    fn public_key(
        &self,
        private_key: &[u8; PRIVATE_KEY_LENGTH],
    ) -> Result<[u8; PUBKEY_UNCOMPRESSED_LENGTH]> {
        let secret = secret_key(private_key)?;
        Ok(PublicKey::from_secret_key_global(&secret).serialize_uncompressed())
    }
}

impl Recoverer for BitcoinSecp256k1Crypto {
    fn recover_prehash(
        &self,
        digest: &B256,
        rs: &[u8; RS_LENGTH],
        recid: u8,
    ) -> Result<[u8; PUBKEY_UNCOMPRESSED_LENGTH]> {
        let recid =
            RecoveryId::try_from(i32::from(recid)).map_err(|_| EthSigError::RecoveryFailed)?;
        let sig = RecoverableSignature::from_compact(rs, recid)
            .map_err(|_| EthSigError::RecoveryFailed)?;

        let msg = Message::from_digest(digest.0);
        let public = SECP256K1
            .recover_ecdsa(msg, &sig)
            .map_err(|_| EthSigError::RecoveryFailed)?;
        Ok(public.serialize_uncompressed())
    }

    fn decode_public_key(&self, raw: &[u8]) -> Result<B512> {
        if raw.len() != PUBKEY_UNCOMPRESSED_LENGTH {
            return Err(EthSigError::InvalidPublicKey);
        }
        let key = PublicKey::from_slice(raw).map_err(|_| EthSigError::InvalidPublicKey)?;
        Ok(B512::from_slice(&key.serialize_uncompressed()[1..]))
    }
}

fn secret_key(private_key: &[u8; PRIVATE_KEY_LENGTH]) -> Result<SecretKey> {
    SecretKey::from_byte_array(*private_key).map_err(|_| EthSigError::InvalidPrivateKey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secp256k1::k256::K256Crypto;
    use alloy_primitives::{b256, hex};

    const KEY: [u8; 32] = hex!("4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318");
    const DIGEST: B256 = b256!("1da44b586eb0729ff70a73c326926f6ed5a25f5b056e7f47fbc6e58d86871655");

    #[test]
    fn agrees_with_k256() {
        let keys = [KEY, [0x01; 32], [0x7f; 32], {
            let mut one = [0u8; 32];
            one[31] = 1;
            one
        }];
        for key in keys {
            let bitcoin = BitcoinSecp256k1Crypto.sign_prehash(&DIGEST, &key).unwrap();
            let k256 = K256Crypto.sign_prehash(&DIGEST, &key).unwrap();
            assert_eq!(bitcoin, k256);
            assert_eq!(
                BitcoinSecp256k1Crypto.public_key(&key).unwrap(),
                K256Crypto.public_key(&key).unwrap()
            );

            let (rs, recid) = bitcoin;
            assert_eq!(
                BitcoinSecp256k1Crypto.recover_prehash(&DIGEST, &rs, recid),
                K256Crypto.recover_prehash(&DIGEST, &rs, recid)
            );
        }
    }

    #[test]
    fn rejects_invalid_inputs() {
        assert_eq!(
            BitcoinSecp256k1Crypto.sign_prehash(&DIGEST, &[0u8; 32]),
            Err(EthSigError::InvalidPrivateKey)
        );
        assert_eq!(
            BitcoinSecp256k1Crypto.recover_prehash(&DIGEST, &[0xff; RS_LENGTH], 0),
            Err(EthSigError::RecoveryFailed)
        );
        assert_eq!(
            BitcoinSecp256k1Crypto.recover_prehash(&DIGEST, &[0u8; RS_LENGTH], 1),
            Err(EthSigError::RecoveryFailed)
        );
        assert_eq!(
            BitcoinSecp256k1Crypto.decode_public_key(&[0u8; PUBKEY_UNCOMPRESSED_LENGTH]),
            Err(EthSigError::InvalidPublicKey)
        );
    }
}
