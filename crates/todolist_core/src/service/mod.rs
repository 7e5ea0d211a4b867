//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate storage calls into the RPC-facing operation set.
//! - Keep transport layers decoupled from storage details.

pub mod todo_service;
