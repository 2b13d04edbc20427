use getset::{CopyGetters, Getters};

use crate::Error;

/// Text currently typed into the form, plus the last validation failure.
///
/// None of this survives a successful submission.
#[derive(Debug, Default, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct FormState {
    #[getset(get = "pub")]
    name: String,
    #[getset(get = "pub")]
    comment: String,
    #[getset(get_copy = "pub")]
    error: Option<Error>,
}

impl FormState {
    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_comment(&mut self, comment: String) {
        self.comment = comment;
    }

    pub(crate) fn set_error(&mut self, error: Error) {
        self.error = Some(error);
    }

    /// Reset the form state
    pub(crate) fn clear(&mut self) {
        self.name.clear();
        self.comment.clear();
        self.error = None;
    }
}
