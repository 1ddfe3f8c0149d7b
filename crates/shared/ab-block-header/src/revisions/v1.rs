use crate::fields::{BaseFields, FieldValue, HeaderFields};
use crate::hashes::Blake3Hash;
use ab_tagged_codec::Tag;
use parity_scale_codec::{Decode, Encode};

/// First tagged revision, adds view ID and cross-shard receipts roots
#[derive(Debug, Default, Clone, Eq, PartialEq, Encode, Decode)]
pub struct HeaderV1 {
    /// Common fields
    pub base: BaseFields,
    /// View ID
    pub view_id: u64,
    /// Root of receipts sent to other shards
    pub outgoing_receipts_root: Blake3Hash,
    /// Root of receipts received from other shards
    pub incoming_receipts_root: Blake3Hash,
}

impl HeaderFields for HeaderV1 {
    #[inline(always)]
    fn base(&self) -> &BaseFields {
        &self.base
    }

    #[inline]
    fn clone_boxed(&self) -> Box<dyn HeaderFields> {
        Box::new(self.clone())
    }

    fn set_field(&mut self, value: FieldValue) -> Result<(), FieldValue> {
        match value {
            FieldValue::ViewId(view_id) => self.view_id = view_id,
            FieldValue::OutgoingReceiptsRoot(root) => self.outgoing_receipts_root = root,
            FieldValue::IncomingReceiptsRoot(root) => self.incoming_receipts_root = root,
            value => {
                return self.base.set_field(value);
            }
        }

        Ok(())
    }

    #[inline]
    fn view_id(&self) -> u64 {
        self.view_id
    }

    #[inline]
    fn outgoing_receipts_root(&self) -> Blake3Hash {
        self.outgoing_receipts_root
    }

    #[inline]
    fn incoming_receipts_root(&self) -> Blake3Hash {
        self.incoming_receipts_root
    }
}

impl HeaderV1 {
    /// Tag this revision is registered under
    pub const TAG: Tag = Tag::new("v1");
}
