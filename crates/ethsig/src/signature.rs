//! 65 byte `r || s || v` signature.
use crate::{
    constants::{RS_LENGTH, SIGNATURE_LENGTH, WIRE_V_OFFSET},
    encoding::encode_prefixed,
    EthSigError, Result,
};
use alloy_primitives::B256;
use core::fmt;

/// Recoverable ECDSA signature laid out as `r || s || v`.
///
/// `v` is stored as given: [`sign`](crate::sign) produces the curve native recovery id
/// (`0`/`1`), wire signatures carry `27`/`28`. Use [`Signature::to_wire_bytes`] to get the form
/// [`recover`](crate::recover) accepts.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature([u8; SIGNATURE_LENGTH]);

impl Signature {
    /// Creates a signature from `r || s` and a recovery id.
    pub fn new(rs: [u8; RS_LENGTH], v: u8) -> Self {
        let mut bytes = [0u8; SIGNATURE_LENGTH];
        bytes[..RS_LENGTH].copy_from_slice(&rs);
        bytes[RS_LENGTH] = v;
        Self(bytes)
    }

    /// Copies a signature out of `bytes`, which must be exactly 65 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes = <[u8; SIGNATURE_LENGTH]>::try_from(bytes)
            .map_err(|_| EthSigError::MalformedSignature { len: bytes.len() })?;
        Ok(Self(bytes))
    }

    /// Returns the `r` component.
    pub fn r(&self) -> B256 {
        B256::from_slice(&self.0[..32])
    }

    /// Returns the `s` component.
    pub fn s(&self) -> B256 {
        B256::from_slice(&self.0[32..RS_LENGTH])
    }

    /// Returns `r || s`.
    pub fn rs(&self) -> [u8; RS_LENGTH] {
        let mut rs = [0u8; RS_LENGTH];
        rs.copy_from_slice(&self.0[..RS_LENGTH]);
        rs
    }

    /// Returns the recovery id byte.
    pub const fn v(&self) -> u8 {
        self.0[RS_LENGTH]
    }

    /// Returns the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; SIGNATURE_LENGTH] {
        &self.0
    }

    /// Returns the bytes with a native recovery id (`0`/`1`) shifted to `27`/`28`.
    ///
    /// Any other `v` is left untouched.
    pub fn to_wire_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut bytes = self.0;
        if bytes[RS_LENGTH] < 2 {
            bytes[RS_LENGTH] += WIRE_V_OFFSET;
        }
        bytes
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; SIGNATURE_LENGTH]> for Signature {
    fn from(bytes: [u8; SIGNATURE_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl From<Signature> for [u8; SIGNATURE_LENGTH] {
    fn from(signature: Signature) -> Self {
        signature.0
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = EthSigError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signature")
            .field("r", &self.r())
            .field("s", &self.s())
            .field("v", &self.v())
            .finish()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_prefixed(self.0))
    }
}
