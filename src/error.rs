//! Host error type.

/// Failures that stop the host before or while serving.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
