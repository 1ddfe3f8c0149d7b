//! Tagged SCALE encoding for values whose layout evolved across several revisions.
//!
//! Each revision is a separate concrete type registered under a short [`Tag`]. Encoding writes
//! the tag in front of the revision's SCALE payload, decoding reads the tag first and picks the
//! matching revision, so callers only ever deal with a single trait object type.
//!
//! Revisions are registered once with [`RegistryBuilder`] and frozen into a read-only
//! [`Registry`], which is then shared freely between threads:
//! ```
//! use ab_tagged_codec::{Registry, Tag, TaggedPayload};
//! use parity_scale_codec::{Decode, Encode};
//!
//! trait Record: TaggedPayload {}
//!
//! #[derive(Default, Encode, Decode)]
//! struct RecordV0(u32);
//! impl Record for RecordV0 {}
//!
//! #[derive(Default, Encode, Decode)]
//! struct RecordV1(u32, u64);
//! impl Record for RecordV1 {}
//!
//! let registry = Registry::<dyn Record>::builder()
//!     .register(Tag::LEGACY, || Box::new(RecordV0::default()) as Box<dyn Record>)
//!     .unwrap()
//!     .register(Tag::new("v1"), || Box::new(RecordV1::default()) as Box<dyn Record>)
//!     .unwrap()
//!     .build();
//!
//! let encoding = registry.encode(&RecordV1(1, 2)).unwrap();
//! let decoded = registry.decode_all(&encoding).unwrap();
//! assert_eq!(registry.tag_of(&*decoded), Some(Tag::new("v1")));
//! ```

mod input;
mod registry;
mod tag;

pub use registry::{
    RegistrationError, Registry, RegistryBuilder, TAG_MARKER, TaggedCodecError, TaggedPayload,
};
pub use tag::Tag;
