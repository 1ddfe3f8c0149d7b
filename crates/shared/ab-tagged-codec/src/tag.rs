//! Revision tags

use core::fmt;

/// Tag identifying one layout revision on the wire.
///
/// Tags are assigned once and never reused for a different layout. The empty tag is reserved for
/// the [legacy](Self::LEGACY) revision, which is written without any tag marker at all.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Tag(&'static str);

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_legacy() {
            f.write_str("<legacy>")
        } else {
            f.write_str(self.0)
        }
    }
}

impl Tag {
    /// Implicit tag of data that predates tagging, never written to the wire
    pub const LEGACY: Self = Self("");
    /// Max length of an explicit tag in bytes
    pub const MAX_LEN: usize = 32;

    /// Create a new tag.
    ///
    /// Validity of the tag is checked during registration.
    #[inline(always)]
    pub const fn new(tag: &'static str) -> Self {
        Self(tag)
    }

    /// Tag as a string, empty for [`Self::LEGACY`]
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Whether this is the legacy tag
    #[inline(always)]
    pub const fn is_legacy(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the tag can be registered: legacy or 1..=[`Self::MAX_LEN`] bytes long
    #[inline(always)]
    pub const fn is_valid(&self) -> bool {
        self.0.len() <= Self::MAX_LEN
    }
}
