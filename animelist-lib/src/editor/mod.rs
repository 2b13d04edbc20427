//! The list editor and the types it manages.

use std::collections::HashMap;

use tracing::debug;

use crate::{Error, Result, presentation::ListView};

mod entry;
mod entry_id;
mod form;

pub use entry::Entry;
pub use entry_id::EntryId;
pub use form::FormState;

/// Single owner of all application state.
///
/// Holds the ordered list of [`Entry`]s, whose order is the ranking shown to the user, next to
/// the transient [`FormState`] used to create new ones.
#[derive(Debug, Default, Clone)]
pub struct ListEditor {
    entries: Vec<Entry>,
    form: FormState,
}

impl ListEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Snapshot of what should be rendered for the current list.
    pub fn view(&self) -> ListView<'_> {
        ListView::new(&self.entries)
    }

    // Form input

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.set_name(name.into());
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.form.set_comment(comment.into());
    }

    // Operations

    /// Validate the form and append a new [`Entry`] built from it.
    ///
    /// Both inputs are trimmed. An empty name records [`Error::NameRequired`] on the form and
    /// leaves everything else untouched. On success the form is cleared.
    pub fn submit(&mut self) -> Result<Entry> {
        let name = self.form.name().trim();
        let comment = self.form.comment().trim();

        if name.is_empty() {
            self.form.set_error(Error::NameRequired);
            return Err(Error::NameRequired);
        }

        let entry = Entry::new(name, comment);
        self.entries.push(entry.clone());
        self.form.clear();

        debug!("Added entry {}: {}", entry.id(), entry.name());

        Ok(entry)
    }

    /// Replace the order of the list with `order`.
    ///
    /// `order` must contain every current id exactly once. Anything else is rejected with
    /// [`Error::NotAPermutation`] and the list is left as it was.
    pub fn reorder(&mut self, order: &[EntryId]) -> Result<()> {
        if order.len() != self.entries.len() {
            return Err(Error::NotAPermutation);
        }

        let reordered = {
            let mut remaining: HashMap<EntryId, &Entry> =
                self.entries.iter().map(|e| (e.id(), e)).collect();

            // Each id can only be taken once, so duplicates and unknown ids both fail here
            order
                .iter()
                .map(|id| remaining.remove(id).cloned().ok_or(Error::NotAPermutation))
                .collect::<Result<Vec<Entry>>>()?
        };

        self.entries = reordered;

        debug!("Reordered {} entries", self.entries.len());

        Ok(())
    }

    /// Compute the order that results from moving the entry `id` to position `to`.
    ///
    /// Positions past the end are clamped to the last slot. Returns `None` if `id` is not in the
    /// list. Nothing is changed; feed the result into [`ListEditor::reorder`].
    pub fn moved(&self, id: EntryId, to: usize) -> Option<Vec<EntryId>> {
        let mut ids: Vec<EntryId> = self.entries.iter().map(Entry::id).collect();
        let from = ids.iter().position(|i| *i == id)?;

        let id = ids.remove(from);
        let to = to.min(ids.len());
        ids.insert(to, id);

        Some(ids)
    }

    /// Remove the entry with the given id, keeping the order of the rest.
    ///
    /// Deleting an id that isn't in the list does nothing.
    pub fn delete(&mut self, id: EntryId) -> Option<Entry> {
        let Some(index) = self.entries.iter().position(|e| e.id() == id) else {
            debug!("Ignored deletion of unknown entry {id}");
            return None;
        };

        let entry = self.entries.remove(index);

        debug!("Removed entry {}: {}", entry.id(), entry.name());

        Some(entry)
    }
}
