//! Uniform access to header fields regardless of revision

use crate::address::Address;
use crate::bloom::Bloom;
use crate::hashes::{Blake3Hash, BlockHash};
use crate::numbers::{BlockNumber, EpochNumber, ShardId};
use ab_tagged_codec::TaggedPayload;
use core::fmt;
use parity_scale_codec::{Decode, Encode};

/// Name of a header field, as used in diagnostics
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum HeaderField {
    /// Block number
    Number,
    /// Parent block hash
    ParentHash,
    /// Reward address
    Coinbase,
    /// State root
    StateRoot,
    /// Transactions root
    TransactionsRoot,
    /// Receipts root
    ReceiptsRoot,
    /// Logs bloom
    LogsBloom,
    /// Gas limit
    GasLimit,
    /// Gas used
    GasUsed,
    /// Timestamp
    Timestamp,
    /// Extra data
    ExtraData,
    /// Shard ID
    ShardId,
    /// Epoch
    Epoch,
    /// Shard state
    ShardState,
    /// View ID
    ViewId,
    /// Outgoing receipts root
    OutgoingReceiptsRoot,
    /// Incoming receipts root
    IncomingReceiptsRoot,
    /// VRF output
    Vrf,
    /// VDF output
    Vdf,
    /// Cross links
    CrossLinks,
    /// Slashes
    Slashes,
}

/// New value of a single header field
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum FieldValue {
    /// Block number
    Number(BlockNumber),
    /// Parent block hash
    ParentHash(BlockHash),
    /// Reward address
    Coinbase(Address),
    /// State root
    StateRoot(Blake3Hash),
    /// Transactions root
    TransactionsRoot(Blake3Hash),
    /// Receipts root
    ReceiptsRoot(Blake3Hash),
    /// Logs bloom
    LogsBloom(Bloom),
    /// Gas limit
    GasLimit(u64),
    /// Gas used
    GasUsed(u64),
    /// Timestamp
    Timestamp(u64),
    /// Extra data
    ExtraData(Vec<u8>),
    /// Shard ID
    ShardId(ShardId),
    /// Epoch
    Epoch(EpochNumber),
    /// Shard state
    ShardState(Vec<u8>),
    /// View ID
    ViewId(u64),
    /// Outgoing receipts root
    OutgoingReceiptsRoot(Blake3Hash),
    /// Incoming receipts root
    IncomingReceiptsRoot(Blake3Hash),
    /// VRF output
    Vrf(Vec<u8>),
    /// VDF output
    Vdf(Vec<u8>),
    /// Cross links
    CrossLinks(Vec<u8>),
    /// Slashes
    Slashes(Vec<u8>),
}

impl FieldValue {
    /// Field this value belongs to
    pub fn field(&self) -> HeaderField {
        match self {
            Self::Number(_) => HeaderField::Number,
            Self::ParentHash(_) => HeaderField::ParentHash,
            Self::Coinbase(_) => HeaderField::Coinbase,
            Self::StateRoot(_) => HeaderField::StateRoot,
            Self::TransactionsRoot(_) => HeaderField::TransactionsRoot,
            Self::ReceiptsRoot(_) => HeaderField::ReceiptsRoot,
            Self::LogsBloom(_) => HeaderField::LogsBloom,
            Self::GasLimit(_) => HeaderField::GasLimit,
            Self::GasUsed(_) => HeaderField::GasUsed,
            Self::Timestamp(_) => HeaderField::Timestamp,
            Self::ExtraData(_) => HeaderField::ExtraData,
            Self::ShardId(_) => HeaderField::ShardId,
            Self::Epoch(_) => HeaderField::Epoch,
            Self::ShardState(_) => HeaderField::ShardState,
            Self::ViewId(_) => HeaderField::ViewId,
            Self::OutgoingReceiptsRoot(_) => HeaderField::OutgoingReceiptsRoot,
            Self::IncomingReceiptsRoot(_) => HeaderField::IncomingReceiptsRoot,
            Self::Vrf(_) => HeaderField::Vrf,
            Self::Vdf(_) => HeaderField::Vdf,
            Self::CrossLinks(_) => HeaderField::CrossLinks,
            Self::Slashes(_) => HeaderField::Slashes,
        }
    }
}

/// Fields present in every revision, in wire order
#[derive(Debug, Default, Clone, Eq, PartialEq, Encode, Decode)]
pub struct BaseFields {
    /// Block number.
    ///
    /// Compact-encoded, so the first byte of any payload starting with it is never
    /// [`ab_tagged_codec::TAG_MARKER`].
    #[codec(compact)]
    pub number: BlockNumber,
    /// Parent block hash
    pub parent_hash: BlockHash,
    /// Reward address
    pub coinbase: Address,
    /// State root
    pub state_root: Blake3Hash,
    /// Transactions root
    pub transactions_root: Blake3Hash,
    /// Receipts root
    pub receipts_root: Blake3Hash,
    /// Logs bloom
    pub logs_bloom: Bloom,
    /// Gas limit
    pub gas_limit: u64,
    /// Gas used
    pub gas_used: u64,
    /// Timestamp in seconds
    pub timestamp: u64,
    /// Arbitrary extra data
    pub extra_data: Vec<u8>,
    /// Shard this block belongs to
    pub shard_id: ShardId,
    /// Epoch this block belongs to
    pub epoch: EpochNumber,
    /// Encoded shard state of the next epoch, only non-empty in the last block of an epoch
    pub shard_state: Vec<u8>,
}

impl BaseFields {
    /// Set one of the common fields, returns `value` back if it is not one of them
    pub fn set_field(&mut self, value: FieldValue) -> Result<(), FieldValue> {
        match value {
            FieldValue::Number(number) => self.number = number,
            FieldValue::ParentHash(parent_hash) => self.parent_hash = parent_hash,
            FieldValue::Coinbase(coinbase) => self.coinbase = coinbase,
            FieldValue::StateRoot(state_root) => self.state_root = state_root,
            FieldValue::TransactionsRoot(transactions_root) => {
                self.transactions_root = transactions_root
            }
            FieldValue::ReceiptsRoot(receipts_root) => self.receipts_root = receipts_root,
            FieldValue::LogsBloom(logs_bloom) => self.logs_bloom = logs_bloom,
            FieldValue::GasLimit(gas_limit) => self.gas_limit = gas_limit,
            FieldValue::GasUsed(gas_used) => self.gas_used = gas_used,
            FieldValue::Timestamp(timestamp) => self.timestamp = timestamp,
            FieldValue::ExtraData(extra_data) => self.extra_data = extra_data,
            FieldValue::ShardId(shard_id) => self.shard_id = shard_id,
            FieldValue::Epoch(epoch) => self.epoch = epoch,
            FieldValue::ShardState(shard_state) => self.shard_state = shard_state,
            value => {
                return Err(value);
            }
        }

        Ok(())
    }
}

/// Capability shared by all header revisions.
///
/// Fields introduced by later revisions have default accessors that return zero or empty values,
/// so revisions only override accessors for fields they actually store.
pub trait HeaderFields: TaggedPayload + fmt::Debug {
    /// Fields present in every revision
    fn base(&self) -> &BaseFields;

    /// Clone into a new boxed trait object
    fn clone_boxed(&self) -> Box<dyn HeaderFields>;

    /// Set a single field.
    ///
    /// Returns `value` back if this revision has no such field.
    fn set_field(&mut self, value: FieldValue) -> Result<(), FieldValue>;

    /// Block number
    #[inline]
    fn number(&self) -> BlockNumber {
        self.base().number
    }

    /// Parent block hash
    #[inline]
    fn parent_hash(&self) -> BlockHash {
        self.base().parent_hash
    }

    /// Reward address
    #[inline]
    fn coinbase(&self) -> Address {
        self.base().coinbase
    }

    /// State root
    #[inline]
    fn state_root(&self) -> Blake3Hash {
        self.base().state_root
    }

    /// Transactions root
    #[inline]
    fn transactions_root(&self) -> Blake3Hash {
        self.base().transactions_root
    }

    /// Receipts root
    #[inline]
    fn receipts_root(&self) -> Blake3Hash {
        self.base().receipts_root
    }

    /// Logs bloom
    #[inline]
    fn logs_bloom(&self) -> &Bloom {
        &self.base().logs_bloom
    }

    /// Gas limit
    #[inline]
    fn gas_limit(&self) -> u64 {
        self.base().gas_limit
    }

    /// Gas used
    #[inline]
    fn gas_used(&self) -> u64 {
        self.base().gas_used
    }

    /// Timestamp in seconds
    #[inline]
    fn timestamp(&self) -> u64 {
        self.base().timestamp
    }

    /// Arbitrary extra data
    #[inline]
    fn extra_data(&self) -> &[u8] {
        &self.base().extra_data
    }

    /// Shard this block belongs to
    #[inline]
    fn shard_id(&self) -> ShardId {
        self.base().shard_id
    }

    /// Epoch this block belongs to
    #[inline]
    fn epoch(&self) -> EpochNumber {
        self.base().epoch
    }

    /// Encoded shard state of the next epoch
    #[inline]
    fn shard_state(&self) -> &[u8] {
        &self.base().shard_state
    }

    /// View ID, zero before revision v1
    #[inline]
    fn view_id(&self) -> u64 {
        0
    }

    /// Outgoing cross-shard receipts root, zero before revision v1
    #[inline]
    fn outgoing_receipts_root(&self) -> Blake3Hash {
        Blake3Hash::default()
    }

    /// Incoming cross-shard receipts root, zero before revision v1
    #[inline]
    fn incoming_receipts_root(&self) -> Blake3Hash {
        Blake3Hash::default()
    }

    /// VRF output, empty before revision v2
    #[inline]
    fn vrf(&self) -> &[u8] {
        &[]
    }

    /// VDF output, empty before revision v2
    #[inline]
    fn vdf(&self) -> &[u8] {
        &[]
    }

    /// Encoded cross links, empty before revision v3
    #[inline]
    fn cross_links(&self) -> &[u8] {
        &[]
    }

    /// Encoded slashing records, empty before revision v3
    #[inline]
    fn slashes(&self) -> &[u8] {
        &[]
    }
}
