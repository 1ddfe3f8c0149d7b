use crate::fields::{BaseFields, FieldValue, HeaderFields};
use ab_tagged_codec::Tag;
use parity_scale_codec::{Decode, Encode};

/// Header layout that predates revision tags, written without a tag marker
#[derive(Debug, Default, Clone, Eq, PartialEq, Encode, Decode)]
pub struct HeaderV0 {
    /// Common fields
    pub base: BaseFields,
}

impl HeaderFields for HeaderV0 {
    #[inline(always)]
    fn base(&self) -> &BaseFields {
        &self.base
    }

    #[inline]
    fn clone_boxed(&self) -> Box<dyn HeaderFields> {
        Box::new(self.clone())
    }

    #[inline]
    fn set_field(&mut self, value: FieldValue) -> Result<(), FieldValue> {
        self.base.set_field(value)
    }
}

impl HeaderV0 {
    /// Tag this revision is registered under
    pub const TAG: Tag = Tag::LEGACY;
}
