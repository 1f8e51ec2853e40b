//! Core state and parsing for a two-screen task-list application.
//!
//! # Overview
//! Models the observable behavior of the app without any presentation
//! coupling: a one-shot fetch of the remote task list with a
//! loading/loaded/failed state surface, and a local draft whose submit
//! outcome the presentation layer maps to an alert and a navigation
//! action.
//!
//! # Design
//! - Host-does-IO pattern: the core builds `HttpRequest` values and parses
//!   `HttpResponse` values without touching the network. The caller
//!   executes the actual round-trip, making the core fully deterministic
//!   and testable.
//! - `TaskApiClient` is stateless — it holds only `base_url`.
//! - `TaskListLoader` wraps the client in the tagged state union the UI
//!   reads from; fetch failures degrade to an empty list and are recorded
//!   on the diagnostic channel rather than propagated.
//! - `TaskDraft` never persists or transmits anything; "success" is a
//!   reported outcome value, not a side effect.
//! - Types use owned `String` / `Vec` fields; DTOs are defined
//!   independently from the mock-api crate, and integration tests catch
//!   schema drift.

pub mod client;
pub mod draft;
pub mod error;
pub mod http;
pub mod loader;
pub mod types;

pub use client::{TaskApiClient, DEFAULT_BASE_URL};
pub use draft::{SubmitOutcome, TaskDraft};
pub use error::FetchError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use loader::{LoadState, TaskListLoader};
pub use types::Task;
