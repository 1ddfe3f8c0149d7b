//! Concrete header layouts, one per revision.
//!
//! Field order of every revision is fixed forever once its tag is assigned, new fields always
//! require a new revision with a new tag.

mod v0;
mod v1;
mod v2;
mod v3;

pub use v0::HeaderV0;
pub use v1::HeaderV1;
pub use v2::HeaderV2;
pub use v3::HeaderV3;
