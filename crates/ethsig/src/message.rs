//! Personal message hashing (EIP-191 version `0x45`).
use crate::{constants::PERSONAL_MESSAGE_PREFIX, DefaultCrypto, Hasher};
use alloy_primitives::B256;

/// Hashes `message` for signing and recovery.
///
/// The digest is `keccak256("\x19Ethereum Signed Message:\n" || len(message) || message)`, the
/// length being written in decimal ASCII without padding.
pub fn hash_message(message: impl AsRef<[u8]>) -> B256 {
    hash_message_with(&DefaultCrypto, message)
}

/// [`hash_message`] over the given [`Hasher`].
pub fn hash_message_with<H: Hasher + ?Sized>(hasher: &H, message: impl AsRef<[u8]>) -> B256 {
    let message = message.as_ref();
    let len = message.len().to_string();
    hasher.keccak256(&[PERSONAL_MESSAGE_PREFIX, len.as_bytes(), message])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secp256k1::k256::K256Crypto;
    use alloy_primitives::{b256, eip191_hash_message, keccak256};
    use rstest::rstest;

    #[rstest]
    #[case::hello_world(
        "Hello World",
        b256!("a1de988600a42c4b4ab089b619297c17d53cffae5d5120d82d8a92d0bb3b78f2")
    )]
    #[case::some_data(
        "Some data",
        b256!("1da44b586eb0729ff70a73c326926f6ed5a25f5b056e7f47fbc6e58d86871655")
    )]
    fn known_digests(#[case] message: &str, #[case] expected: B256) {
        assert_eq!(hash_message(message), expected);
        assert_eq!(hash_message_with(&K256Crypto, message), expected);
    }

    #[rstest]
    #[case::empty(b"".to_vec(), "0")]
    #[case::single(b"a".to_vec(), "1")]
    #[case::two_digits(b"Hello World".to_vec(), "11")]
    #[case::three_digits(vec![0u8; 100], "100")]
    #[case::binary(vec![0x19, 0x00, 0xff, 0x0a], "4")]
    fn frames_with_decimal_length(#[case] message: Vec<u8>, #[case] len: &str) {
        let mut framed = b"\x19Ethereum Signed Message:\n".to_vec();
        framed.extend_from_slice(len.as_bytes());
        framed.extend_from_slice(&message);

        assert_eq!(hash_message(&message), keccak256(&framed));
        assert_eq!(hash_message(&message), eip191_hash_message(&message));
    }

    #[test]
    fn distinct_from_raw_keccak() {
        assert_ne!(hash_message("Hello World"), keccak256("Hello World"));
    }
}
