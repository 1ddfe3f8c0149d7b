//! Account address

use core::fmt;
use derive_more::{Deref, From, Into};
use parity_scale_codec::{Decode, Encode};

/// Address of the account that collects block rewards
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
    Deref,
    Encode,
    Decode,
)]
pub struct Address([u8; Address::SIZE]);

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Address {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl AsRef<[u8]> for Address {
    #[inline(always)]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Address {
    /// Size in bytes
    pub const SIZE: usize = 20;

    /// Create new instance
    #[inline(always)]
    pub const fn new(address: [u8; Self::SIZE]) -> Self {
        Self(address)
    }
}
