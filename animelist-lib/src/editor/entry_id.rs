use derive_more::Display;
use uuid::Uuid;

/// Opaque identifier of an [`Entry`](super::Entry).
///
/// A fresh random (v4) UUID is generated for every entry, so identifiers are never reused for
/// the lifetime of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub struct EntryId(Uuid);

impl EntryId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}
