//! Application state wiring config, provider, and generator together.
//!
//! Built once at startup from the environment and shared by both CLI
//! commands and REST API handlers. Everything inside is immutable after
//! construction; the template store initializes itself lazily on first
//! use.

use std::sync::Arc;

use postforge_core::generator::{GenerateOptions, GeneratorService};
use postforge_infra::config::AppConfig;
use postforge_infra::llm::GroqProvider;
use postforge_infra::template_store::FileTemplateSource;

/// Concrete generator type pinned to the infra implementations.
pub type ConcreteGeneratorService = GeneratorService<GroqProvider, FileTemplateSource>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<ConcreteGeneratorService>,
}

impl AppState {
    /// Initialize the application state from environment configuration.
    pub fn init() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;

        let provider = GroqProvider::new(&config);
        let templates = FileTemplateSource::new(config.prompt_path.clone());
        let options = GenerateOptions {
            model: config.model.clone(),
            ..Default::default()
        };

        Ok(Self {
            generator: Arc::new(GeneratorService::new(provider, templates, options)),
        })
    }
}
