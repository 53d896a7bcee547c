use crate::error::ServerError;
use anyhow::Context;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::Response;
use oxrdfio::{RdfFormat, RdfSerializer};
use sparesults::{QueryResultsFormat, QueryResultsSerializer};
use vgraph_engine::{QueryResults, QuerySolutionIter, SparqlError};

/// Serializes query results in the negotiated format.
///
/// Consuming the results evaluates the query, so this must run on the blocking pool.
pub fn serialize_query_results(
    results: QueryResults,
    rdf_format: Result<RdfFormat, ServerError>,
    results_format: Result<QueryResultsFormat, ServerError>,
) -> Result<Response, ServerError> {
    let (media_type, body) = match results {
        QueryResults::Solutions(solutions) => {
            let format = results_format?;
            (format.media_type(), serialize_solutions(solutions, format)?)
        }
        QueryResults::Boolean(value) => {
            let format = results_format?;
            let body = QueryResultsSerializer::from_format(format)
                .serialize_boolean_to_writer(Vec::new(), value)
                .context("Could not serialize boolean")?;
            (format.media_type(), body)
        }
        QueryResults::Graph(triples) => {
            let format = rdf_format?;
            let mut serializer = RdfSerializer::from_format(format).for_writer(Vec::new());
            for triple in triples {
                let triple = triple.map_err(SparqlError::from)?;
                serializer
                    .serialize_triple(triple.as_ref())
                    .context("Could not serialize triple")?;
            }
            let body = serializer
                .finish()
                .context("Could not finalize serializer")?;
            (format.media_type(), body)
        }
    };

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, media_type)
        .body(Body::from(body))
        .context("Could not build response")?)
}

fn serialize_solutions(
    solutions: QuerySolutionIter,
    format: QueryResultsFormat,
) -> Result<Vec<u8>, ServerError> {
    let mut serializer = QueryResultsSerializer::from_format(format)
        .serialize_solutions_to_writer(Vec::new(), solutions.variables().to_vec())
        .context("Could not serialize solutions")?;
    for solution in solutions {
        let solution = solution.map_err(SparqlError::from)?;
        serializer
            .serialize(&solution)
            .context("Could not serialize solution")?;
    }
    Ok(serializer
        .finish()
        .context("Could not finalize serializer")?)
}
