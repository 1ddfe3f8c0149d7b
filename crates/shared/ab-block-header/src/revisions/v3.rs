use crate::fields::{BaseFields, FieldValue, HeaderFields};
use crate::hashes::Blake3Hash;
use ab_tagged_codec::Tag;
use parity_scale_codec::{Decode, Encode};

/// Latest revision, adds cross links and slashing records
#[derive(Debug, Default, Clone, Eq, PartialEq, Encode, Decode)]
pub struct HeaderV3 {
    /// Common fields
    pub base: BaseFields,
    /// View ID
    pub view_id: u64,
    /// Root of receipts sent to other shards
    pub outgoing_receipts_root: Blake3Hash,
    /// Root of receipts received from other shards
    pub incoming_receipts_root: Blake3Hash,
    /// VRF output
    pub vrf: Vec<u8>,
    /// VDF output
    pub vdf: Vec<u8>,
    /// Encoded cross links
    pub cross_links: Vec<u8>,
    /// Encoded slashing records
    pub slashes: Vec<u8>,
}

impl HeaderFields for HeaderV3 {
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
            FieldValue::Vrf(vrf) => self.vrf = vrf,
            FieldValue::Vdf(vdf) => self.vdf = vdf,
            FieldValue::CrossLinks(cross_links) => self.cross_links = cross_links,
            FieldValue::Slashes(slashes) => self.slashes = slashes,
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

    #[inline]
    fn vrf(&self) -> &[u8] {
        &self.vrf
    }

    #[inline]
    fn vdf(&self) -> &[u8] {
        &self.vdf
    }

    #[inline]
    fn cross_links(&self) -> &[u8] {
        &self.cross_links
    }

    #[inline]
    fn slashes(&self) -> &[u8] {
        &self.slashes
    }
}

impl HeaderV3 {
    /// Tag this revision is registered under
    pub const TAG: Tag = Tag::new("v3");
}
