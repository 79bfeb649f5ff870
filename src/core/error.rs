use thiserror::Error;

/// Reasons the analysis graph could not be built.
///
/// All of these leave the visualizer permanently idle; none are retried.
#[derive(Debug, Error)]
pub enum VisualizerError {
    #[error("audio analysis unsupported: {0}")]
    Unsupported(String),
    #[error("signal source unavailable: {0}")]
    SourceUnavailable(String),
    #[error("could not connect analysis graph: {0}")]
    Graph(String),
}
