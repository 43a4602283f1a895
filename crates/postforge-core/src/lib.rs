//! Business logic for Postforge.
//!
//! Pure logic lives here: the download formatter, the prompt template
//! engine, the provider trait, and the generator service. Infrastructure
//! (HTTP clients, filesystem, env config) lives in postforge-infra.

pub mod format;
pub mod generator;
pub mod llm;
pub mod template;
