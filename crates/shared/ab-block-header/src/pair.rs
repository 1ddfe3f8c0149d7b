//! Beacon chain header together with the shard chain header

use crate::header::{Header, HeaderError, MaybeHeader};
use parity_scale_codec::Input;
use serde::Serialize;

/// Errors for [`HeaderPair`] operations
#[derive(Debug, thiserror::Error)]
pub enum HeaderPairError {
    /// Beacon chain header failed
    #[error("Beacon chain header: {error}")]
    BeaconHeader {
        /// Low-level error
        error: HeaderError,
    },
    /// Shard chain header failed
    #[error("Shard chain header: {error}")]
    ShardHeader {
        /// Low-level error
        error: HeaderError,
    },
}

impl HeaderPairError {
    /// Error of the failed header
    #[inline]
    pub fn header_error(&self) -> &HeaderError {
        match self {
            Self::BeaconHeader { error } | Self::ShardHeader { error } => error,
        }
    }
}

/// Beacon chain header and shard chain header, either of which may be absent
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderPair {
    /// Beacon chain header
    #[serde(rename = "beacon-chain-header")]
    pub beacon_header: Option<Header>,
    /// Shard chain header
    #[serde(rename = "shard-chain-header")]
    pub shard_header: Option<Header>,
}

impl HeaderPair {
    /// Tagged encoding of beacon chain header followed by shard chain header.
    ///
    /// Fails with [`HeaderError::NilReceiver`] of the absent header if either one is absent.
    pub fn encode(&self) -> Result<Vec<u8>, HeaderPairError> {
        let mut bytes = Vec::new();
        self.beacon_header
            .encode_tagged_to(&mut bytes)
            .map_err(|error| HeaderPairError::BeaconHeader { error })?;
        self.shard_header
            .encode_tagged_to(&mut bytes)
            .map_err(|error| HeaderPairError::ShardHeader { error })?;
        Ok(bytes)
    }

    /// Decode both headers
    pub fn decode<I>(input: &mut I) -> Result<Self, HeaderPairError>
    where
        I: Input,
    {
        let beacon_header =
            Header::decode(input).map_err(|error| HeaderPairError::BeaconHeader { error })?;
        let shard_header =
            Header::decode(input).map_err(|error| HeaderPairError::ShardHeader { error })?;

        Ok(Self {
            beacon_header: Some(beacon_header),
            shard_header: Some(shard_header),
        })
    }
}
