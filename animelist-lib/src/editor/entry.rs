use getset::{CopyGetters, Getters};

use crate::editor::entry_id::EntryId;

/// A single item of the list.
///
/// Entries are only created by a successful [`ListEditor::submit`](super::ListEditor::submit)
/// and are immutable afterwards. Reordering moves them around but never touches their fields.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct Entry {
    #[getset(get_copy = "pub")]
    id: EntryId,
    /// Trimmed, never empty
    #[getset(get = "pub")]
    name: String,
    /// Trimmed, may be empty
    #[getset(get = "pub")]
    comment: String,
}

impl Entry {
    pub(crate) fn new(name: &str, comment: &str) -> Self {
        Self {
            id: EntryId::new(),
            name: name.to_owned(),
            comment: comment.to_owned(),
        }
    }
}
