use crate::Error;
use crate::cli::CliCommand;
use ab_block_header::{
    BlockNumber, EpochNumber, Header, HeaderError, ShardId, Tag, header_registry,
};
use clap::Parser;
use tracing::info;

/// Name of the untagged revision on the command line
pub(super) const LEGACY_REVISION: &str = "legacy";

/// Placeholder shard state attached to the last block of an epoch
const SAMPLE_SHARD_STATE: &[u8] = b"sample shard state";

/// Error for [`Sample`]
#[derive(Debug, thiserror::Error)]
pub(crate) enum SampleError {
    /// No revision is registered under the tag
    #[error("Unknown revision {revision}")]
    UnknownRevision {
        /// Requested revision
        revision: String,
    },
    /// Failed to build or encode the header
    #[error("Failed to build the header: {error}")]
    Header {
        /// Low-level error
        #[from]
        error: HeaderError,
    },
}

/// Print hex encoding of a sample header
#[derive(Debug, Parser)]
pub(crate) struct Sample {
    /// Revision tag, `legacy` for the revision that predates tags
    #[arg(long)]
    revision: String,
    /// Block number
    #[arg(long)]
    number: u64,
    /// Shard ID
    #[arg(long, default_value_t = 0)]
    shard_id: u32,
    /// Epoch
    #[arg(long, default_value_t = 0)]
    epoch: u64,
    /// Make it the last block of an epoch
    #[arg(long)]
    last_block_in_epoch: bool,
}

impl CliCommand for Sample {
    fn run(self) -> Result<(), Error> {
        Ok(self.run()?)
    }
}

impl Sample {
    fn run(self) -> Result<(), SampleError> {
        let Self {
            revision,
            number,
            shard_id,
            epoch,
            last_block_in_epoch,
        } = self;

        let Some(tag) = find_revision(&revision) else {
            return Err(SampleError::UnknownRevision { revision });
        };

        let mut builder = Header::empty(tag)?
            .with()
            .number(BlockNumber::new(number))
            .shard_id(ShardId::new(shard_id))
            .epoch(EpochNumber::new(epoch));
        if last_block_in_epoch {
            builder = builder.shard_state(SAMPLE_SHARD_STATE.to_vec());
        }
        let header = builder.build()?;

        info!(%tag, hash = %header.hash(), "Built sample header");

        println!("0x{}", hex::encode(header.encode()?));

        Ok(())
    }
}

/// Registered tag for a revision name, [`LEGACY_REVISION`] maps to [`Tag::LEGACY`]
pub(super) fn find_revision(revision: &str) -> Option<Tag> {
    header_registry().tags().find(|tag| {
        if tag.is_legacy() {
            revision == LEGACY_REVISION
        } else {
            tag.as_str() == revision
        }
    })
}
