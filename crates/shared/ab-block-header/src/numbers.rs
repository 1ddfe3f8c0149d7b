//! Numeric primitives of the header

use derive_more::{Display, From, Into};
use parity_scale_codec::{Compact, CompactAs, Decode, Encode};

/// Block number
#[derive(
    Debug,
    Display,
    Default,
    Copy,
    Clone,
    Ord,
    PartialOrd,
    Eq,
    PartialEq,
    Hash,
    From,
    Into,
    Encode,
    Decode,
)]
pub struct BlockNumber(u64);

impl CompactAs for BlockNumber {
    type As = u64;

    #[inline(always)]
    fn encode_as(&self) -> &Self::As {
        &self.0
    }

    #[inline(always)]
    fn decode_from(number: Self::As) -> Result<Self, parity_scale_codec::Error> {
        Ok(Self(number))
    }
}

impl From<Compact<BlockNumber>> for BlockNumber {
    #[inline(always)]
    fn from(number: Compact<BlockNumber>) -> Self {
        number.0
    }
}

impl BlockNumber {
    /// Genesis block number
    pub const ZERO: BlockNumber = BlockNumber(0);

    /// Create new instance
    #[inline(always)]
    pub const fn new(n: u64) -> Self {
        Self(n)
    }

    /// Get internal representation
    #[inline(always)]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

/// Shard identifier
#[derive(
    Debug,
    Display,
    Default,
    Copy,
    Clone,
    Ord,
    PartialOrd,
    Eq,
    PartialEq,
    Hash,
    From,
    Into,
    Encode,
    Decode,
)]
pub struct ShardId(u32);

impl ShardId {
    /// Create new instance
    #[inline(always)]
    pub const fn new(shard_id: u32) -> Self {
        Self(shard_id)
    }
}

/// Epoch number
#[derive(
    Debug,
    Display,
    Default,
    Copy,
    Clone,
    Ord,
    PartialOrd,
    Eq,
    PartialEq,
    Hash,
    From,
    Into,
    Encode,
    Decode,
)]
pub struct EpochNumber(u64);

impl EpochNumber {
    /// Create new instance
    #[inline(always)]
    pub const fn new(n: u64) -> Self {
        Self(n)
    }
}
