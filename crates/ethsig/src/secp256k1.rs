//! secp256k1 backends.
//!
//! Depending on enabled features, [`DefaultCrypto`] resolves to a different implementation:
//! * [`k256`](https://crates.io/crates/k256) - uses maintained pure rust lib `k256`, it is perfect use for no_std environments.
//! * [`secp256k1`](https://crates.io/crates/secp256k1) - uses `bitcoin_secp256k1` lib, it is a C implementation of secp256k1 used in bitcoin core.
//!   It is faster than k256 and enabled by default.
//!
//! Where the `secp256k1` feature is disabled, `k256` is used.
//!
//! Both sign with RFC 6979 deterministic nonces and emit low `s` values, so signatures are
//! reproducible byte for byte across backends.

pub mod k256;

#[cfg(feature = "secp256k1")]
#[cfg_attr(docsrs, doc(cfg(feature = "secp256k1")))]
pub mod bitcoin_secp256k1;

cfg_if::cfg_if! {
    if #[cfg(feature = "secp256k1")] {
        pub use bitcoin_secp256k1::BitcoinSecp256k1Crypto as DefaultCrypto;
    } else {
        pub use self::k256::K256Crypto as DefaultCrypto;
    }
}
