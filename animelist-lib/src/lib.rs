//! Core state for animelist.
//!
//! The [`ListEditor`] owns the ordered list of entries together with the transient form state
//! used to create them. Everything here is synchronous and in-memory; rendering is left to the
//! GUI, which reads the [`presentation::ListView`] contract.

use thiserror::Error;

pub mod editor;
pub mod fs;
pub mod presentation;

pub use editor::{Entry, EntryId, FormState, ListEditor};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Anime name is required")]
    NameRequired,
    #[error("The new order must contain every existing entry exactly once")]
    NotAPermutation,
}
