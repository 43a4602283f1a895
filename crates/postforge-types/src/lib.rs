//! Shared domain types for Postforge.
//!
//! This crate contains the core domain types used across the Postforge
//! workspace: the content brief, the LLM request/response shapes, and the
//! associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod brief;
pub mod error;
pub mod llm;
