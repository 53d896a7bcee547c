use crate::error::ServerError;
use anyhow::anyhow;
use vgraph_engine::{CancellationFlag, VirtualGraph};

#[derive(Clone)]
pub struct AppState {
    pub graph: VirtualGraph,
}

/// Runs `task` on the blocking thread pool.
///
/// Host callbacks may block, so every request touching the graph goes through here. If the
/// returned future is dropped before the task finishes, the task's cancellation flag is raised.
pub async fn run_cancellable<T: Send + 'static>(
    task: impl FnOnce(&CancellationFlag) -> Result<T, ServerError> + Send + 'static,
) -> Result<T, ServerError> {
    let cancel = CancellationFlag::new();
    let guard = cancel.cancel_on_drop();
    let result = tokio::task::spawn_blocking(move || task(&cancel)).await;
    guard.disarm();
    result.map_err(|e| ServerError::Internal(anyhow!(e)))?
}
