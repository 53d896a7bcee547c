use crate::error::ServerError;
use crate::AppState;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use headers::HeaderMapExt;
use headers_accept::Accept;
use mediatype::names::{APPLICATION, CSV, JSON, N_TRIPLES, TEXT, TURTLE, XML};
use mediatype::{MediaType, Name};
use oxrdfio::RdfFormat;
use sparesults::QueryResultsFormat;

/// Handles the content-negotiation for queries that return RDF data.
impl FromRequestParts<AppState> for RdfFormat {
    type Rejection = ServerError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        static MEDIA_TYPES: [MediaType<'_>; 3] = [
            MediaType::new(APPLICATION, N_TRIPLES),
            MediaType::new(TEXT, TURTLE),
            MediaType::new(APPLICATION, Name::new_unchecked("rdf+xml")),
        ];
        static DEFAULT_MEDIA_TYPE: MediaType<'_> = MediaType::new(APPLICATION, N_TRIPLES);

        let accept = parts.headers.typed_get::<Accept>();
        let media_type = content_negotiation(
            accept,
            &MEDIA_TYPES,
            &DEFAULT_MEDIA_TYPE,
            "application/n-triples or text/turtle",
        )?;

        RdfFormat::from_media_type(media_type.to_string().as_str()).ok_or(
            ServerError::BadRequest(format!(
                "Could not convert negotiated media type '{media_type}' to internal representation."
            )),
        )
    }
}

/// Handles the content-negotiation for queries that return solutions or a boolean.
impl FromRequestParts<AppState> for QueryResultsFormat {
    type Rejection = ServerError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        static MEDIA_TYPES: [MediaType<'_>; 6] = [
            MediaType::new(APPLICATION, Name::new_unchecked("sparql-results+json")),
            MediaType::new(APPLICATION, JSON),
            MediaType::new(APPLICATION, Name::new_unchecked("sparql-results+xml")),
            MediaType::new(APPLICATION, XML),
            MediaType::new(TEXT, CSV),
            MediaType::new(TEXT, Name::new_unchecked("tab-separated-values")),
        ];
        static DEFAULT_MEDIA_TYPE: MediaType<'_> =
            MediaType::new(APPLICATION, Name::new_unchecked("sparql-results+json"));

        let accept = parts.headers.typed_get::<Accept>();
        let media_type = content_negotiation(
            accept,
            &MEDIA_TYPES,
            &DEFAULT_MEDIA_TYPE,
            "application/sparql-results+json or text/tab-separated-values",
        )?;

        QueryResultsFormat::from_media_type(media_type.to_string().as_str()).ok_or(
            ServerError::BadRequest(format!(
                "Could not convert negotiated media type '{media_type}' to internal representation."
            )),
        )
    }
}

fn content_negotiation<'media>(
    accept: Option<Accept>,
    available: &'media [MediaType<'media>],
    default: &'media MediaType<'media>,
    example: &str,
) -> Result<MediaType<'media>, ServerError> {
    let Some(accept) = accept else {
        return Ok(default.clone());
    };

    match accept.negotiate(available) {
        None => Err(ServerError::ContentNegotiation(format!(
            "The accept header does not provide any accepted format like {example}."
        ))),
        Some(result) => Ok(result.clone()),
    }
}
