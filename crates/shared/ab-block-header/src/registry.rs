//! Process-wide registry of header revisions

use crate::fields::HeaderFields;
use crate::revisions::{HeaderV0, HeaderV1, HeaderV2, HeaderV3};
use ab_tagged_codec::{RegistrationError, Registry};
use std::sync::LazyLock;

static HEADER_REGISTRY: LazyLock<Registry<dyn HeaderFields>> = LazyLock::new(|| {
    build_header_registry()
        .expect("Every revision is registered once under a distinct valid tag; qed")
});

/// Registry with all known header revisions.
///
/// Built on first access and read-only afterwards.
#[inline]
pub fn header_registry() -> &'static Registry<dyn HeaderFields> {
    &HEADER_REGISTRY
}

fn build_header_registry() -> Result<Registry<dyn HeaderFields>, RegistrationError> {
    Ok(Registry::builder()
        .register(HeaderV0::TAG, new_revision::<HeaderV0>)?
        .register(HeaderV1::TAG, new_revision::<HeaderV1>)?
        .register(HeaderV2::TAG, new_revision::<HeaderV2>)?
        .register(HeaderV3::TAG, new_revision::<HeaderV3>)?
        .build())
}

fn new_revision<R>() -> Box<dyn HeaderFields>
where
    R: HeaderFields + Default,
{
    Box::new(R::default())
}
