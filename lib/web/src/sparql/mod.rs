//! The SPARQL 1.1 Protocol query operation.

mod content_negotiation;
mod results;

use crate::error::ServerError;
use crate::sparql::results::serialize_query_results;
use crate::state::{run_cancellable, AppState};
use axum::extract::{FromRequest, Query, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::Response;
use axum::Form;
use mediatype::MediaType;
use oxrdfio::RdfFormat;
use serde::Deserialize;
use sparesults::QueryResultsFormat;
use tracing::debug;
use vgraph_engine::evaluate_sparql;

#[derive(Debug, Deserialize)]
pub struct SparqlQueryParams {
    query: Option<String>,
}

/// `GET /sparql?query=...`
pub async fn handle_sparql_get(
    State(state): State<AppState>,
    Query(params): Query<SparqlQueryParams>,
    rdf_format: Result<RdfFormat, ServerError>,
    results_format: Result<QueryResultsFormat, ServerError>,
) -> Result<Response, ServerError> {
    let query = params
        .query
        .ok_or_else(|| ServerError::BadRequest("The 'query' parameter is missing.".to_owned()))?;
    evaluate(state, query, rdf_format, results_format).await
}

/// `POST /sparql` with either a form or a bare query as body.
pub async fn handle_sparql_post(
    State(state): State<AppState>,
    rdf_format: Result<RdfFormat, ServerError>,
    results_format: Result<QueryResultsFormat, ServerError>,
    SparqlQueryBody(query): SparqlQueryBody,
) -> Result<Response, ServerError> {
    evaluate(state, query, rdf_format, results_format).await
}

async fn evaluate(
    state: AppState,
    query: String,
    rdf_format: Result<RdfFormat, ServerError>,
    results_format: Result<QueryResultsFormat, ServerError>,
) -> Result<Response, ServerError> {
    debug!(query = %query, "evaluating SPARQL query");
    let graph = state.graph;
    run_cancellable(move |cancel| {
        let results = evaluate_sparql(&graph, &query, cancel)?;
        serialize_query_results(results, rdf_format, results_format)
    })
    .await
}

/// The query of a `POST` request, sent either as `application/sparql-query` or inside an
/// `application/x-www-form-urlencoded` form.
pub struct SparqlQueryBody(String);

impl FromRequest<AppState> for SparqlQueryBody {
    type Rejection = ServerError;

    async fn from_request(request: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let content_type = request
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        let media_type = MediaType::parse(&content_type).map_err(|_| {
            ServerError::UnsupportedMediaType(format!("Invalid content type '{content_type}'."))
        })?;

        match (media_type.ty.as_str(), media_type.subty.as_str()) {
            ("application", "sparql-query") => String::from_request(request, state)
                .await
                .map(Self)
                .map_err(|e| ServerError::BadRequest(e.body_text())),
            ("application", "x-www-form-urlencoded") => {
                let Form(params) = Form::<SparqlQueryParams>::from_request(request, state)
                    .await
                    .map_err(|e| ServerError::BadRequest(e.body_text()))?;
                params.query.map(Self).ok_or_else(|| {
                    ServerError::BadRequest("The 'query' field is missing.".to_owned())
                })
            }
            _ => Err(ServerError::UnsupportedMediaType(format!(
                "Expected application/sparql-query or application/x-www-form-urlencoded, got '{content_type}'."
            ))),
        }
    }
}
