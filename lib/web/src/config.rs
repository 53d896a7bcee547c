use std::time::Duration;
use vgraph_engine::VirtualGraph;

pub const MAX_BODY_SIZE: usize = 1024 * 1024; // 1MB
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(60);

/// Holds the configuration for a vgraph web server.
pub struct ServerConfig {
    /// The virtual graph that is served.
    pub graph: VirtualGraph,
    /// The IP address or DNS name that the socket binds to.
    pub bind: String,
    /// Whether CORS is enabled.
    pub cors: bool,
    /// The maximum size of a request body in bytes.
    pub max_body_size: usize,
    /// How long a request may take before it is abandoned.
    pub timeout: Duration,
}

impl ServerConfig {
    /// A configuration with the default limits and CORS disabled.
    pub fn new(graph: VirtualGraph, bind: impl Into<String>) -> Self {
        Self {
            graph,
            bind: bind.into(),
            cors: false,
            max_body_size: MAX_BODY_SIZE,
            timeout: HTTP_TIMEOUT,
        }
    }
}
