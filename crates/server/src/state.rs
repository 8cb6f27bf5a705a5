use crate::config::ServerConfig;
use crate::error::ServerResult;
use featnorm::PipelineConfig;
use std::sync::Arc;

/// Shared application state
///
/// Read-only after start-up; handlers never mutate it.
#[derive(Debug, Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Pipeline configuration applied to every upload
    pub pipeline: Arc<PipelineConfig>,
}

impl ServerState {
    /// Create new server state, loading the pipeline file named by
    /// `config.pipeline_config` when one is set.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let pipeline = match &config.pipeline_config {
            Some(path) => {
                tracing::info!(path = %path, "loading pipeline config");
                PipelineConfig::from_file(path)?
            }
            None => PipelineConfig::default(),
        };
        Ok(Self::with_pipeline(config, pipeline))
    }

    /// Create server state with an already-built pipeline configuration.
    pub fn with_pipeline(config: ServerConfig, pipeline: PipelineConfig) -> Self {
        Self {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
        }
    }
}
