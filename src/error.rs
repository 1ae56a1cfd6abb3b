//! Errors returned by [`Tree`][crate::Tree] operations.
//!
//! Absence (a missing key, an empty tree) is never an error and is reported
//! with `Option::None` instead.

/// Misuse of a [`Tree`][crate::Tree].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The tree already holds a key. Assigning a new root key would break the ordering of the
    /// existing children, so [`Tree::set_initial_key`][crate::Tree::set_initial_key] refuses.
    #[error("tree already holds a key")]
    Occupied,
}
