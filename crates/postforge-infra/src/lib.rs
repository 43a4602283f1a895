//! Infrastructure implementations for Postforge.
//!
//! Concrete backends for the traits defined in postforge-core: the Groq
//! LLM provider (OpenAI-compatible chat completions), environment-based
//! configuration, and the file-backed prompt template store.

pub mod config;
pub mod llm;
pub mod template_store;
