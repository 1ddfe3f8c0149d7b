//! Builder for modified copies of a header

use crate::address::Address;
use crate::bloom::Bloom;
use crate::fields::FieldValue;
use crate::hashes::{Blake3Hash, BlockHash};
use crate::header::{Header, HeaderError};
use crate::numbers::{BlockNumber, EpochNumber, ShardId};

/// Collects field overrides on top of a base header.
///
/// Overrides are applied in order by [`HeaderBuilder::build()`], later overrides of the same
/// field win. The base header is never modified.
#[derive(Debug, Clone)]
#[must_use]
pub struct HeaderBuilder {
    base: Header,
    overrides: Vec<FieldValue>,
}

impl HeaderBuilder {
    pub(super) fn new(base: &Header) -> Self {
        Self {
            base: base.clone(),
            overrides: Vec::new(),
        }
    }

    /// Override arbitrary field
    #[inline]
    pub fn field(mut self, value: FieldValue) -> Self {
        self.overrides.push(value);
        self
    }

    /// Override block number
    #[inline]
    pub fn number(self, number: BlockNumber) -> Self {
        self.field(FieldValue::Number(number))
    }

    /// Override parent block hash
    #[inline]
    pub fn parent_hash(self, parent_hash: BlockHash) -> Self {
        self.field(FieldValue::ParentHash(parent_hash))
    }

    /// Override reward address
    #[inline]
    pub fn coinbase(self, coinbase: Address) -> Self {
        self.field(FieldValue::Coinbase(coinbase))
    }

    /// Override state root
    #[inline]
    pub fn state_root(self, state_root: Blake3Hash) -> Self {
        self.field(FieldValue::StateRoot(state_root))
    }

    /// Override transactions root
    #[inline]
    pub fn transactions_root(self, transactions_root: Blake3Hash) -> Self {
        self.field(FieldValue::TransactionsRoot(transactions_root))
    }

    /// Override receipts root
    #[inline]
    pub fn receipts_root(self, receipts_root: Blake3Hash) -> Self {
        self.field(FieldValue::ReceiptsRoot(receipts_root))
    }

    /// Override logs bloom
    #[inline]
    pub fn logs_bloom(self, logs_bloom: Bloom) -> Self {
        self.field(FieldValue::LogsBloom(logs_bloom))
    }

    /// Override gas limit
    #[inline]
    pub fn gas_limit(self, gas_limit: u64) -> Self {
        self.field(FieldValue::GasLimit(gas_limit))
    }

    /// Override gas used
    #[inline]
    pub fn gas_used(self, gas_used: u64) -> Self {
        self.field(FieldValue::GasUsed(gas_used))
    }

    /// Override timestamp
    #[inline]
    pub fn timestamp(self, timestamp: u64) -> Self {
        self.field(FieldValue::Timestamp(timestamp))
    }

    /// Override extra data
    #[inline]
    pub fn extra_data(self, extra_data: Vec<u8>) -> Self {
        self.field(FieldValue::ExtraData(extra_data))
    }

    /// Override shard ID
    #[inline]
    pub fn shard_id(self, shard_id: ShardId) -> Self {
        self.field(FieldValue::ShardId(shard_id))
    }

    /// Override epoch
    #[inline]
    pub fn epoch(self, epoch: EpochNumber) -> Self {
        self.field(FieldValue::Epoch(epoch))
    }

    /// Override shard state
    #[inline]
    pub fn shard_state(self, shard_state: Vec<u8>) -> Self {
        self.field(FieldValue::ShardState(shard_state))
    }

    /// Override view ID
    #[inline]
    pub fn view_id(self, view_id: u64) -> Self {
        self.field(FieldValue::ViewId(view_id))
    }

    /// Override outgoing receipts root
    #[inline]
    pub fn outgoing_receipts_root(self, root: Blake3Hash) -> Self {
        self.field(FieldValue::OutgoingReceiptsRoot(root))
    }

    /// Override incoming receipts root
    #[inline]
    pub fn incoming_receipts_root(self, root: Blake3Hash) -> Self {
        self.field(FieldValue::IncomingReceiptsRoot(root))
    }

    /// Override VRF output
    #[inline]
    pub fn vrf(self, vrf: Vec<u8>) -> Self {
        self.field(FieldValue::Vrf(vrf))
    }

    /// Override VDF output
    #[inline]
    pub fn vdf(self, vdf: Vec<u8>) -> Self {
        self.field(FieldValue::Vdf(vdf))
    }

    /// Override cross links
    #[inline]
    pub fn cross_links(self, cross_links: Vec<u8>) -> Self {
        self.field(FieldValue::CrossLinks(cross_links))
    }

    /// Override slashes
    #[inline]
    pub fn slashes(self, slashes: Vec<u8>) -> Self {
        self.field(FieldValue::Slashes(slashes))
    }

    /// Apply overrides to a copy of the base header.
    ///
    /// Fails with [`HeaderError::UnsupportedField`] on the first override the revision has no
    /// field for.
    pub fn build(self) -> Result<Header, HeaderError> {
        let Self {
            mut base,
            overrides,
        } = self;

        for value in overrides {
            base.set_field(value)?;
        }

        Ok(base)
    }
}
