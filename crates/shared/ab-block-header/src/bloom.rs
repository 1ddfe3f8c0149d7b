//! Logs bloom filter

use core::fmt;
use derive_more::{Deref, DerefMut, From, Into};
use parity_scale_codec::{Decode, Encode};

/// 2048-bit bloom filter over logs emitted by transactions of the block.
///
/// Stored and encoded as is, its contents are opaque here.
#[derive(Copy, Clone, Eq, PartialEq, Hash, From, Into, Deref, DerefMut, Encode, Decode)]
pub struct Bloom([u8; Bloom::SIZE]);

impl Default for Bloom {
    #[inline(always)]
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Debug for Bloom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Bloom(empty)");
        }
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl AsRef<[u8]> for Bloom {
    #[inline(always)]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Bloom {
    /// Size in bytes
    pub const SIZE: usize = 256;
    /// Bloom filter with no bits set
    pub const EMPTY: Self = Self([0; Self::SIZE]);

    /// Create new instance
    #[inline(always)]
    pub const fn new(bloom: [u8; Self::SIZE]) -> Self {
        Self(bloom)
    }

    /// Whether no bits are set
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&byte| byte == 0)
    }
}
