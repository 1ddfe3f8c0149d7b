//! Header wrapper hiding the concrete revision

mod builder;
mod json;

pub use builder::HeaderBuilder;

use crate::fields::{FieldValue, HeaderField, HeaderFields};
use crate::hashes::{Blake3Hash, BlockHash};
use crate::registry::header_registry;
use crate::revisions::HeaderV3;
use ab_tagged_codec::{Tag, TaggedCodecError, TaggedPayload};
use core::any::Any;
use core::fmt;
use core::ops::Deref;
use parity_scale_codec::{Input, Output};
use tracing::{Span, info_span};

/// Errors for [`Header`] operations
#[derive(Debug, thiserror::Error)]
pub enum HeaderError {
    /// Header is absent
    #[error("Header is absent")]
    NilReceiver,
    /// Revision has no such field
    #[error("Field {field} is not supported by revision {revision}")]
    UnsupportedField {
        /// Field that was set
        field: HeaderField,
        /// Concrete type of the revision
        revision: &'static str,
    },
    /// Tagged encoding or decoding failed
    #[error("Tagged codec error: {0}")]
    Codec(#[from] TaggedCodecError),
}

/// Block header of any registered revision.
///
/// Field accessors of [`HeaderFields`] are available directly through [`Deref`].
pub struct Header {
    fields: Box<dyn HeaderFields>,
}

impl fmt::Debug for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Header")
            .field("tag", &self.tag())
            .field("fields", &self.fields)
            .finish()
    }
}

impl Clone for Header {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone_boxed(),
        }
    }
}

impl PartialEq for Header {
    fn eq(&self, other: &Self) -> bool {
        if TaggedPayload::revision_type_id(self.fields())
            != TaggedPayload::revision_type_id(other.fields())
        {
            return false;
        }

        let mut payload = Vec::new();
        TaggedPayload::encode_payload(self.fields(), &mut payload);
        let mut other_payload = Vec::new();
        TaggedPayload::encode_payload(other.fields(), &mut other_payload);

        payload == other_payload
    }
}

impl Eq for Header {}

impl Default for Header {
    /// Empty header of the latest revision
    #[inline]
    fn default() -> Self {
        Self {
            fields: Box::new(HeaderV3::default()),
        }
    }
}

impl Deref for Header {
    type Target = dyn HeaderFields;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &*self.fields
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_error| fmt::Error)?;
        f.write_str(&json)
    }
}

impl Header {
    /// Wrap a revision, which must be registered in the header registry
    pub fn new<R>(fields: R) -> Result<Self, HeaderError>
    where
        R: HeaderFields,
    {
        Self::from_boxed(Box::new(fields))
    }

    /// Wrap an already boxed revision, which must be registered in the header registry
    pub fn from_boxed(fields: Box<dyn HeaderFields>) -> Result<Self, HeaderError> {
        if header_registry().tag_of(&*fields).is_none() {
            return Err(TaggedCodecError::UnregisteredType {
                type_name: TaggedPayload::revision_type_name(&*fields),
            }
            .into());
        }

        Ok(Self { fields })
    }

    /// Empty header of the revision registered under `tag`
    pub fn empty(tag: Tag) -> Result<Self, HeaderError> {
        let fields = header_registry().new_value(tag)?;
        Ok(Self { fields })
    }

    /// Access to the revision through the capability
    #[inline(always)]
    pub fn fields(&self) -> &dyn HeaderFields {
        &*self.fields
    }

    /// Concrete revision, `None` if the header is of a different revision
    pub fn revision<R>(&self) -> Option<&R>
    where
        R: HeaderFields,
    {
        let fields: &dyn Any = &*self.fields;
        fields.downcast_ref()
    }

    /// Tag of the revision
    pub fn tag(&self) -> Tag {
        header_registry()
            .tag_of(&*self.fields)
            .expect("Only registered revisions can be wrapped; qed")
    }

    /// Tagged encoding
    pub fn encode(&self) -> Result<Vec<u8>, HeaderError> {
        Ok(header_registry().encode(&*self.fields)?)
    }

    /// Tagged encoding into `dest`
    pub fn encode_to<O>(&self, dest: &mut O) -> Result<(), HeaderError>
    where
        O: Output,
    {
        Ok(header_registry().encode_to(&*self.fields, dest)?)
    }

    /// Decode tagged encoding
    pub fn decode<I>(input: &mut I) -> Result<Self, HeaderError>
    where
        I: Input,
    {
        let fields = header_registry().decode(input)?;
        Ok(Self { fields })
    }

    /// Decode tagged encoding that must occupy the whole `bytes`
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self, HeaderError> {
        let fields = header_registry().decode_all(bytes)?;
        Ok(Self { fields })
    }

    /// Replace contents with the decoded header, leaves `self` untouched on error
    pub fn decode_in_place<I>(&mut self, input: &mut I) -> Result<(), HeaderError>
    where
        I: Input,
    {
        *self = Self::decode(input)?;
        Ok(())
    }

    /// Block hash, BLAKE3 hash of the tagged encoding
    pub fn hash(&self) -> BlockHash {
        let mut hasher = HashingOutput(blake3::Hasher::new());
        header_registry()
            .encode_to(&*self.fields, &mut hasher)
            .expect("Only registered revisions with unambiguous encoding can be wrapped; qed");

        BlockHash::new(Blake3Hash::from(hasher.0.finalize()))
    }

    /// Whether this is the last block of an epoch, which carries the shard state for the next one
    #[inline]
    pub fn is_last_block_in_epoch(&self) -> bool {
        !self.fields.shard_state().is_empty()
    }

    /// Builder for a new header based on this one
    #[inline]
    pub fn with(&self) -> HeaderBuilder {
        HeaderBuilder::new(self)
    }

    /// Span with identifying fields of the block for attaching to logs
    pub fn span(&self) -> Span {
        info_span!(
            "block",
            block_hash = %self.hash(),
            block_shard = %self.fields.shard_id(),
            block_epoch = %self.fields.epoch(),
            block_number = %self.fields.number(),
        )
    }

    fn set_field(&mut self, value: FieldValue) -> Result<(), HeaderError> {
        let revision = TaggedPayload::revision_type_name(self.fields());
        self.fields
            .set_field(value)
            .map_err(|value| HeaderError::UnsupportedField {
                field: value.field(),
                revision,
            })
    }
}

/// Encoding and decoding of headers that may be absent
pub trait MaybeHeader {
    /// Tagged encoding, fails with [`HeaderError::NilReceiver`] if the header is absent
    fn encode_tagged(&self) -> Result<Vec<u8>, HeaderError>;

    /// Tagged encoding into `dest`, fails with [`HeaderError::NilReceiver`] if the header is
    /// absent
    fn encode_tagged_to<O>(&self, dest: &mut O) -> Result<(), HeaderError>
    where
        O: Output;

    /// Replace contents with the decoded header, fails with [`HeaderError::NilReceiver`] if the
    /// header is absent
    fn decode_tagged_in_place<I>(&mut self, input: &mut I) -> Result<(), HeaderError>
    where
        I: Input;
}

impl MaybeHeader for Option<Header> {
    #[inline]
    fn encode_tagged(&self) -> Result<Vec<u8>, HeaderError> {
        self.as_ref().ok_or(HeaderError::NilReceiver)?.encode()
    }

    #[inline]
    fn encode_tagged_to<O>(&self, dest: &mut O) -> Result<(), HeaderError>
    where
        O: Output,
    {
        self.as_ref()
            .ok_or(HeaderError::NilReceiver)?
            .encode_to(dest)
    }

    #[inline]
    fn decode_tagged_in_place<I>(&mut self, input: &mut I) -> Result<(), HeaderError>
    where
        I: Input,
    {
        self.as_mut()
            .ok_or(HeaderError::NilReceiver)?
            .decode_in_place(input)
    }
}

struct HashingOutput(blake3::Hasher);

impl Output for HashingOutput {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.0.update(bytes);
    }
}
