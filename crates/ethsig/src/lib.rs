//! # ethsig
//!
//! Ethereum personal message signing and signer recovery.
//!
//! * [`hash_message`] frames a payload with the `"\x19Ethereum Signed Message:\n"` prefix and
//!   hashes it with Keccak-256.
//! * [`sign`] produces a 65 byte `r || s || v` signature over a digest, `v` being the curve
//!   native recovery id (`0` or `1`).
//! * [`recover`] returns the [`Address`] that signed a digest, given a signature whose `v` is
//!   in the wire form (`27` or `28`).
//!
//! The secp256k1 backend is picked at compile time, see [`secp256k1`].
//!
//! ```
//! use ethsig::{address_of, hash_message, recover, sign};
//!
//! let key = [0x42; 32];
//! let digest = hash_message("Some data");
//! let signature = sign(&digest, &key)?;
//!
//! let signer = recover(&digest, &signature.to_wire_bytes())?;
//! assert_eq!(signer, address_of(&key)?);
//! # Ok::<(), ethsig::EthSigError>(())
//! ```
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod constants;
pub mod crypto;
pub mod encoding;
pub mod error;
pub mod message;
pub mod recover;
pub mod secp256k1;
pub mod sign;
pub mod signature;

pub use crypto::{public_key_to_address, Crypto, Hasher, Recoverer, Signer};
pub use error::{EthSigError, Result};
pub use message::{hash_message, hash_message_with};
pub use recover::{recover, recover_hex, recover_hex_checksummed, recover_with};
pub use crate::secp256k1::DefaultCrypto;
pub use sign::{address_of, address_of_with, sign, sign_hex, sign_with};
pub use signature::Signature;

pub use alloy_primitives::{hex, Address, B256, B512};
