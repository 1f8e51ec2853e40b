//! Domain DTOs for the remote task API.
//!
//! # Design
//! The shape mirrors the remote service's records verbatim, including its
//! field names. The records are read-only: fetched once into memory, held
//! for the lifetime of the screen, discarded on navigation away. No local
//! mutation or persistence path exists.

use serde::{Deserialize, Serialize};

/// A single task record returned by the remote API.
///
/// Identifier uniqueness is assumed from the source and not enforced
/// locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Opaque identifier, unique per fetch.
    pub id: String,
    /// Completion flag; `true` renders as a checked item.
    pub status: bool,
    /// The task's descriptive text. The upstream service labels this field
    /// `email`; the name is kept as observed so records parse unmodified.
    pub email: String,
    /// Edit-mode flag carried by the wire format. No consumer reads it.
    pub edit: bool,
}
