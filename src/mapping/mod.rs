//! Column mapping requests
//!
//! The model call sits behind [`MappingProvider`] so the pipeline can run
//! against Azure OpenAI or a fixed mapping. Servers hold a
//! [`ModelConnector`] and build a provider per request from the caller's
//! credentials.

pub mod azure;
pub mod prompt;

use async_trait::async_trait;

use crate::error::RemapResult;
use crate::types::{ColumnMapping, ModelConnection};

pub use azure::{AzureConnector, AzureOpenAiClient};
pub use prompt::{build_messages, parse_mapping, ChatMessage};

/// Given source and standard headers, produce a source → standard mapping
#[async_trait]
pub trait MappingProvider: Send + Sync {
    async fn create_mapping(&self, source: &[String], target: &[String]) -> RemapResult<ColumnMapping>;
}

/// Creates a mapping provider for one set of caller credentials
pub trait ModelConnector: Send + Sync {
    fn connect(&self, connection: ModelConnection) -> Box<dyn MappingProvider>;
}

/// Provider that always returns the same mapping
#[derive(Debug, Clone, Default)]
pub struct StaticMapping {
    mapping: ColumnMapping,
}

impl StaticMapping {
    pub fn new(mapping: ColumnMapping) -> Self {
        Self { mapping }
    }

    /// Load a mapping from JSON text, e.g. a saved model reply
    pub fn from_json(text: &str) -> RemapResult<Self> {
        Ok(Self::new(parse_mapping(text)?))
    }
}

#[async_trait]
impl MappingProvider for StaticMapping {
    async fn create_mapping(&self, _source: &[String], _target: &[String]) -> RemapResult<ColumnMapping> {
        Ok(self.mapping.clone())
    }
}
