//! Hashes-related data structures and functions.

use blake3::{Hash, OUT_LEN};
use core::fmt;
use derive_more::{AsMut, AsRef, Deref, DerefMut, Display, From, Into};
use parity_scale_codec::{Decode, Encode};

/// BLAKE3 hash output transparent wrapper
#[derive(
    Default,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    From,
    Into,
    AsRef,
    AsMut,
    Deref,
    DerefMut,
    Encode,
    Decode,
)]
pub struct Blake3Hash([u8; Blake3Hash::SIZE]);

impl fmt::Display for Blake3Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Blake3Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl AsRef<[u8]> for Blake3Hash {
    #[inline(always)]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Hash> for Blake3Hash {
    #[inline]
    fn from(value: Hash) -> Self {
        Self(value.into())
    }
}

impl Blake3Hash {
    /// Size in bytes
    pub const SIZE: usize = OUT_LEN;

    /// Create new instance
    #[inline(always)]
    pub const fn new(hash: [u8; OUT_LEN]) -> Self {
        Self(hash)
    }

    /// Hash of `data`
    #[inline]
    pub fn hash(data: &[u8]) -> Self {
        Self::from(blake3::hash(data))
    }
}

/// Block hash, BLAKE3 hash of the tagged header encoding
#[derive(
    Debug,
    Display,
    Default,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    From,
    Into,
    AsRef,
    AsMut,
    Deref,
    DerefMut,
    Encode,
    Decode,
)]
pub struct BlockHash(Blake3Hash);

impl AsRef<[u8]> for BlockHash {
    #[inline(always)]
    fn as_ref(&self) -> &[u8] {
        &self.0.0
    }
}

impl BlockHash {
    /// Create new instance
    #[inline(always)]
    pub const fn new(hash: Blake3Hash) -> Self {
        Self(hash)
    }
}
