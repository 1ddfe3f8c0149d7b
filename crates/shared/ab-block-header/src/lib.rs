//! Block header whose layout evolved across several revisions.
//!
//! Every revision is a separate type implementing [`HeaderFields`], registered in the
//! process-wide [`header_registry()`]. [`Header`] wraps any of them and is encoded with a tag
//! identifying the revision, so it can be decoded without knowing the revision upfront:
//! ```
//! use ab_block_header::{BlockNumber, Header, HeaderV1};
//!
//! let header = Header::default()
//!     .with()
//!     .number(BlockNumber::new(5))
//!     .build()
//!     .unwrap();
//! let decoded = Header::decode_from_slice(&header.encode().unwrap()).unwrap();
//!
//! assert_eq!(decoded, header);
//! assert_eq!(decoded.number(), BlockNumber::new(5));
//! assert!(decoded.revision::<HeaderV1>().is_none());
//! ```

mod address;
mod bloom;
mod fields;
mod hashes;
mod header;
mod numbers;
mod pair;
mod registry;
mod revisions;

pub use ab_tagged_codec::Tag;
pub use address::Address;
pub use bloom::Bloom;
pub use fields::{BaseFields, FieldValue, HeaderField, HeaderFields};
pub use hashes::{Blake3Hash, BlockHash};
pub use header::{Header, HeaderBuilder, HeaderError, MaybeHeader};
pub use numbers::{BlockNumber, EpochNumber, ShardId};
pub use pair::{HeaderPair, HeaderPairError};
pub use registry::header_registry;
pub use revisions::{HeaderV0, HeaderV1, HeaderV2, HeaderV3};
