//! Domain model for the task-tracking core.
//!
//! # Responsibility
//! - Define the canonical task record shared by every storage backend.
//! - Own identifier generation so ids stay time-sortable across backends.
//!
//! # Invariants
//! - Every task is identified by a stable `TodoId` assigned exactly once.
//! - Ids generated later in wall-clock time sort greater than earlier ones.

pub mod id;
pub mod todo;
