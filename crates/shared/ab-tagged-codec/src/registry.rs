//! Registry of tagged revisions and the tagged encoding itself

use crate::input::{DynInput, PrefixedInput};
use crate::tag::Tag;
use core::any::{Any, TypeId, type_name};
use core::fmt;
use parity_scale_codec::{Compact, Decode, Encode, Input, Output};
use std::collections::HashMap;
use tracing::{debug, trace};

/// First byte of every explicitly tagged encoding.
///
/// Legacy payloads must never start with this byte, which is checked on encoding.
pub const TAG_MARKER: u8 = 0xff;

/// A value that can be stored in a [`Registry`] as one of the revisions.
///
/// Implemented automatically for every SCALE-encodable type, trait objects that should be
/// registered need this trait as a supertrait.
pub trait TaggedPayload: Any + Send + Sync {
    /// Append revision payload (without any tag) to `dest`
    fn encode_payload(&self, dest: &mut dyn Output);

    /// Replace contents of `self` with the payload decoded from `input`
    fn decode_payload(&mut self, input: &mut dyn Input) -> Result<(), parity_scale_codec::Error>;

    /// Identity of the concrete type behind `self`, used for type to tag lookup
    #[inline(always)]
    fn revision_type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Name of the concrete type behind `self`, for diagnostics
    #[inline(always)]
    fn revision_type_name(&self) -> &'static str {
        type_name::<Self>()
    }
}

impl<T> TaggedPayload for T
where
    T: Encode + Decode + Any + Send + Sync,
{
    #[inline]
    fn encode_payload(&self, dest: &mut dyn Output) {
        self.encode_to(dest);
    }

    #[inline]
    fn decode_payload(&mut self, input: &mut dyn Input) -> Result<(), parity_scale_codec::Error> {
        *self = T::decode(&mut DynInput(input))?;
        Ok(())
    }
}

/// Errors for [`RegistryBuilder::register()`]
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    /// Tag is already registered for another type
    #[error("Tag {tag} is already registered for {existing}")]
    DuplicateTag {
        /// Tag that was registered twice
        tag: Tag,
        /// Type registered under this tag first
        existing: &'static str,
    },
    /// Type is already registered under another tag
    #[error("Type {type_name} is already registered under tag {existing}")]
    DuplicateType {
        /// Type that was registered twice
        type_name: &'static str,
        /// Tag this type was registered under first
        existing: Tag,
    },
    /// Tag can't be written to the wire
    #[error("Tag {tag:?} is longer than {} bytes", Tag::MAX_LEN)]
    InvalidTag {
        /// Invalid tag
        tag: Tag,
    },
}

/// Errors for tagged encoding and decoding
#[derive(Debug, thiserror::Error)]
pub enum TaggedCodecError {
    /// Value's concrete type was never registered
    #[error("Type {type_name} is not registered")]
    UnregisteredType {
        /// Concrete type of the value
        type_name: &'static str,
    },
    /// Tag read from the input has no registered revision
    #[error("Unknown tag {tag:?}")]
    UnknownTag {
        /// Tag as read from the input, empty for legacy payloads
        tag: String,
    },
    /// Tag marker is truncated or malformed
    #[error("Failed to decode tag marker: {error}")]
    TagMarker {
        /// Low-level error
        error: parity_scale_codec::Error,
    },
    /// Revision payload is truncated or malformed
    #[error("Failed to decode payload of revision {tag} ({type_name}): {error}")]
    PayloadDecode {
        /// Tag of the revision being decoded
        tag: Tag,
        /// Concrete type of the revision being decoded
        type_name: &'static str,
        /// Low-level error
        error: parity_scale_codec::Error,
    },
    /// Factory produced a value of a different type than the one it was registered with
    #[error("Factory for tag {tag} produced {found} instead of {expected}")]
    CapabilityMismatch {
        /// Tag of the revision being decoded
        tag: Tag,
        /// Type registered under the tag
        expected: &'static str,
        /// Type actually produced by the factory
        found: &'static str,
    },
    /// Legacy payload starts with [`TAG_MARKER`] and would be decoded as a tagged one
    #[error("Legacy payload of {type_name} starts with the tag marker byte")]
    AmbiguousLegacyPayload {
        /// Concrete type of the value
        type_name: &'static str,
    },
    /// Input contains bytes after the decoded value
    #[error("{extra} unexpected bytes after the decoded value")]
    TrailingBytes {
        /// Number of bytes left
        extra: usize,
    },
}

type Factory<C> = Box<dyn Fn() -> Box<C> + Send + Sync>;

struct Entry<C: ?Sized> {
    tag: Tag,
    type_id: TypeId,
    type_name: &'static str,
    factory: Factory<C>,
}

impl<C: ?Sized> fmt::Debug for Entry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("tag", &self.tag)
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Collects revisions before the registry is frozen with [`RegistryBuilder::build()`]
#[derive(Debug)]
pub struct RegistryBuilder<C: ?Sized> {
    entries: Vec<Entry<C>>,
}

impl<C> Default for RegistryBuilder<C>
where
    C: TaggedPayload + ?Sized,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<C> RegistryBuilder<C>
where
    C: TaggedPayload + ?Sized,
{
    /// Create an empty builder
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a revision under `tag`.
    ///
    /// `factory` must return a fresh zero value of the revision, it is called once right away to
    /// find out the concrete type for reverse lookup and then once per decoded value.
    pub fn register<F>(mut self, tag: Tag, factory: F) -> Result<Self, RegistrationError>
    where
        F: Fn() -> Box<C> + Send + Sync + 'static,
    {
        if !tag.is_valid() {
            return Err(RegistrationError::InvalidTag { tag });
        }

        let example = factory();
        let type_id = C::revision_type_id(&example);
        let type_name = C::revision_type_name(&example);

        if let Some(entry) = self.entries.iter().find(|entry| entry.tag == tag) {
            return Err(RegistrationError::DuplicateTag {
                tag,
                existing: entry.type_name,
            });
        }
        if let Some(entry) = self.entries.iter().find(|entry| entry.type_id == type_id) {
            return Err(RegistrationError::DuplicateType {
                type_name,
                existing: entry.tag,
            });
        }

        self.entries.push(Entry {
            tag,
            type_id,
            type_name,
            factory: Box::new(factory),
        });

        Ok(self)
    }

    /// Freeze registered revisions into a read-only registry
    pub fn build(self) -> Registry<C> {
        let Self { entries } = self;

        let by_tag = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (entry.tag.as_str(), index))
            .collect();
        let by_type = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (entry.type_id, index))
            .collect();

        for entry in &entries {
            debug!(tag = %entry.tag, type_name = entry.type_name, "Registered revision");
        }

        Registry {
            entries,
            by_tag,
            by_type,
        }
    }
}

/// Read-only table of revisions performing tagged encoding and decoding.
///
/// Encoding of a value is `[tag marker][revision payload]`, where tag marker is
/// [`TAG_MARKER`] followed by the SCALE-encoded tag string. Values of the
/// [legacy](Tag::LEGACY) revision are encoded as bare payload.
#[derive(Debug)]
pub struct Registry<C: ?Sized> {
    entries: Vec<Entry<C>>,
    by_tag: HashMap<&'static str, usize>,
    by_type: HashMap<TypeId, usize>,
}

impl<C> Registry<C>
where
    C: TaggedPayload + ?Sized,
{
    /// Create a builder
    #[inline]
    pub fn builder() -> RegistryBuilder<C> {
        RegistryBuilder::new()
    }

    /// Number of registered revisions
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no revisions are registered
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered tags in registration order
    pub fn tags(&self) -> impl ExactSizeIterator<Item = Tag> + '_ {
        self.entries.iter().map(|entry| entry.tag)
    }

    /// Name of the type registered under `tag`
    pub fn type_name_of(&self, tag: Tag) -> Option<&'static str> {
        self.by_tag
            .get(tag.as_str())
            .map(|&index| self.entries[index].type_name)
    }

    /// Tag of the revision `value` belongs to, `None` if its type is not registered
    pub fn tag_of(&self, value: &C) -> Option<Tag> {
        self.by_type
            .get(&C::revision_type_id(value))
            .map(|&index| self.entries[index].tag)
    }

    /// Fresh zero value of the revision registered under `tag`
    pub fn new_value(&self, tag: Tag) -> Result<Box<C>, TaggedCodecError> {
        Self::instantiate(self.entry(tag.as_str())?)
    }

    /// Encode `value` with its tag
    pub fn encode(&self, value: &C) -> Result<Vec<u8>, TaggedCodecError> {
        let mut bytes = Vec::new();
        self.encode_to(value, &mut bytes)?;
        Ok(bytes)
    }

    /// Encode `value` with its tag into `dest`.
    ///
    /// Nothing is written to `dest` on error.
    pub fn encode_to<O>(&self, value: &C, dest: &mut O) -> Result<(), TaggedCodecError>
    where
        O: Output,
    {
        let Some(tag) = self.tag_of(value) else {
            return Err(TaggedCodecError::UnregisteredType {
                type_name: C::revision_type_name(value),
            });
        };

        if tag.is_legacy() {
            let mut payload = Vec::new();
            C::encode_payload(value, &mut payload);
            if payload.first() == Some(&TAG_MARKER) {
                return Err(TaggedCodecError::AmbiguousLegacyPayload {
                    type_name: C::revision_type_name(value),
                });
            }
            dest.write(&payload);
        } else {
            dest.push_byte(TAG_MARKER);
            tag.as_str().encode_to(dest);
            C::encode_payload(value, dest);
        }

        Ok(())
    }

    /// Decode a value, choosing the revision by the tag marker.
    ///
    /// The legacy revision is used if and only if the input doesn't start with a tag marker.
    pub fn decode<I>(&self, input: &mut I) -> Result<Box<C>, TaggedCodecError>
    where
        I: Input,
    {
        let first = input
            .read_byte()
            .map_err(|error| TaggedCodecError::TagMarker { error })?;

        if first == TAG_MARKER {
            let tag = Self::read_tag(input)?;
            self.decode_payload(&tag, input)
        } else {
            self.decode_payload(
                Tag::LEGACY.as_str(),
                &mut PrefixedInput::new(Some(first), input),
            )
        }
    }

    /// Decode a value from `bytes`, which must not contain anything else
    pub fn decode_all(&self, mut bytes: &[u8]) -> Result<Box<C>, TaggedCodecError> {
        let value = self.decode(&mut bytes)?;
        if !bytes.is_empty() {
            return Err(TaggedCodecError::TrailingBytes { extra: bytes.len() });
        }

        Ok(value)
    }

    fn read_tag<I>(input: &mut I) -> Result<String, TaggedCodecError>
    where
        I: Input,
    {
        let tag_len = Compact::<u32>::decode(input)
            .map_err(|error| TaggedCodecError::TagMarker { error })?
            .0 as usize;
        if tag_len == 0 || tag_len > Tag::MAX_LEN {
            return Err(TaggedCodecError::TagMarker {
                error: "Invalid tag length".into(),
            });
        }

        input
            .on_before_alloc_mem(tag_len)
            .map_err(|error| TaggedCodecError::TagMarker { error })?;
        let mut tag = vec![0; tag_len];
        input
            .read(&mut tag)
            .map_err(|error| TaggedCodecError::TagMarker { error })?;

        String::from_utf8(tag).map_err(|_error| TaggedCodecError::TagMarker {
            error: "Tag is not valid UTF-8".into(),
        })
    }

    fn decode_payload<I>(&self, tag: &str, input: &mut I) -> Result<Box<C>, TaggedCodecError>
    where
        I: Input,
    {
        let entry = self.entry(tag)?;
        let mut value = Self::instantiate(entry)?;

        C::decode_payload(&mut value, input).map_err(|error| TaggedCodecError::PayloadDecode {
            tag: entry.tag,
            type_name: entry.type_name,
            error,
        })?;

        Ok(value)
    }

    fn entry(&self, tag: &str) -> Result<&Entry<C>, TaggedCodecError> {
        match self.by_tag.get(tag) {
            Some(&index) => Ok(&self.entries[index]),
            None => {
                trace!(%tag, "Unknown tag");
                Err(TaggedCodecError::UnknownTag {
                    tag: tag.to_string(),
                })
            }
        }
    }

    fn instantiate(entry: &Entry<C>) -> Result<Box<C>, TaggedCodecError> {
        let value = (entry.factory)();
        if C::revision_type_id(&value) != entry.type_id {
            return Err(TaggedCodecError::CapabilityMismatch {
                tag: entry.tag,
                expected: entry.type_name,
                found: C::revision_type_name(&value),
            });
        }

        Ok(value)
    }
}
