//! What the list looks like to the user.
//!
//! [`ListView`] is derived from the current entries and captures every rule the GUI has to
//! follow when drawing them, so those rules can be checked without a renderer.

use crate::editor::{Entry, EntryId};

pub const EMPTY_MESSAGE: &str = "Your anime list is empty. Add some favorites!";
pub const REORDER_HINT: &str = "Drag and drop to reorder your list!";
pub const NO_COMMENT: &str = "No comment";

/// Number of entries needed before reordering is worth hinting at.
const HINT_THRESHOLD: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView<'a> {
    Empty { message: &'static str },
    Populated {
        hint: Option<&'static str>,
        rows: Vec<Row<'a>>,
    },
}

/// One rendered entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    pub id: EntryId,
    /// 1-based position in the list
    pub rank: usize,
    pub name: &'a str,
    /// The entry's comment, or [`NO_COMMENT`] if it has none
    pub comment: &'a str,
    pub delete_label: String,
}

impl<'a> ListView<'a> {
    pub fn new(entries: &'a [Entry]) -> Self {
        if entries.is_empty() {
            return Self::Empty {
                message: EMPTY_MESSAGE,
            };
        }

        let hint = (entries.len() >= HINT_THRESHOLD).then_some(REORDER_HINT);
        let rows = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| Row::new(index, entry))
            .collect();

        Self::Populated { hint, rows }
    }

    pub fn reorder_hint(&self) -> Option<&'static str> {
        match self {
            Self::Empty { .. } => None,
            Self::Populated { hint, .. } => *hint,
        }
    }

    /// Whether entries can be dragged at all
    pub fn is_draggable(&self) -> bool {
        matches!(self, Self::Populated { .. })
    }

    pub fn rows(&self) -> &[Row<'a>] {
        match self {
            Self::Empty { .. } => &[],
            Self::Populated { rows, .. } => rows,
        }
    }
}

impl<'a> Row<'a> {
    fn new(index: usize, entry: &'a Entry) -> Self {
        let comment = if entry.comment().is_empty() {
            NO_COMMENT
        } else {
            entry.comment().as_str()
        };

        Self {
            id: entry.id(),
            rank: index + 1,
            name: entry.name(),
            comment,
            delete_label: format!("Delete {}", entry.name()),
        }
    }
}
