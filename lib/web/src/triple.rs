use crate::error::ServerError;
use crate::state::{run_cancellable, AppState};
use crate::wire::{decode_pattern, encode_triple, JsonTriple};
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

/// Answers a JSON triple pattern with the JSON array of matching triples.
pub async fn handle_triple_post(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<JsonTriple>>, ServerError> {
    let pattern: JsonTriple =
        serde_json::from_slice(&body).map_err(|e| ServerError::BadRequest(e.to_string()))?;

    let graph = state.graph;
    let triples = run_cancellable(move |cancel| {
        let Some(pattern) =
            decode_pattern(&graph, &pattern).map_err(|e| ServerError::BadRequest(e.to_string()))?
        else {
            return Ok(Vec::new());
        };
        Ok(graph
            .resolve_with_cancellation(&pattern, cancel)?
            .iter()
            .map(|triple| encode_triple(graph.schema(), triple))
            .collect())
    })
    .await?;
    Ok(Json(triples))
}
