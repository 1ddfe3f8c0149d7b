use crate::Error;
use crate::cli::CliCommand;
use ab_block_header::{Header, HeaderError, header_registry};
use clap::{Parser, ValueEnum};
use tracing::debug;

/// Error for [`Decode`]
#[derive(Debug, thiserror::Error)]
pub(crate) enum DecodeError {
    /// Input is not valid hex
    #[error("Input is not valid hex: {error}")]
    InvalidHex {
        /// Low-level error
        error: hex::FromHexError,
    },
    /// Failed to decode the header
    #[error("Failed to decode the header: {error}")]
    Header {
        /// Low-level error
        #[from]
        error: HeaderError,
    },
}

/// Output format of a decoded header
#[derive(Debug, Copy, Clone, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    /// JSON object
    #[default]
    Json,
    /// Revision and identifying fields, one per line
    Describe,
}

/// Decode a hex-encoded header
#[derive(Debug, Parser)]
pub(crate) struct Decode {
    /// Tagged header encoding as hex, optionally `0x`-prefixed
    encoding: String,
    /// Output format
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
}

impl CliCommand for Decode {
    fn run(self) -> Result<(), Error> {
        Ok(self.run()?)
    }
}

impl Decode {
    fn run(self) -> Result<(), DecodeError> {
        let Self { encoding, format } = self;

        let bytes = parse_encoding(&encoding)?;
        let header = Header::decode_from_slice(&bytes)?;

        let _span = header.span().entered();
        debug!(tag = %header.tag(), size = bytes.len(), "Decoded header");

        match format {
            OutputFormat::Json => {
                println!("{header}");
            }
            OutputFormat::Describe => {
                let tag = header.tag();
                println!("tag: {tag}");
                if let Some(type_name) = header_registry().type_name_of(tag) {
                    println!("revision: {type_name}");
                }
                println!("hash: 0x{}", header.hash());
                println!("shard: {}", header.shard_id());
                println!("epoch: {}", header.epoch());
                println!("number: {}", header.number());
                println!(
                    "last block in epoch: {}",
                    header.is_last_block_in_epoch()
                );
            }
        }

        Ok(())
    }
}

/// Hex with optional `0x` prefix and surrounding whitespace
pub(super) fn parse_encoding(encoding: &str) -> Result<Vec<u8>, DecodeError> {
    let encoding = encoding.trim();
    hex::decode(encoding.strip_prefix("0x").unwrap_or(encoding))
        .map_err(|error| DecodeError::InvalidHex { error })
}
