#![cfg(test)]

use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};
use vgraph_engine::testing::{fixture_graph, iri};
use vgraph_web::{create_router, AppState};

const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
const RDFS_CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";
const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

fn server() -> TestServer {
    TestServer::new(create_router(AppState {
        graph: fixture_graph(),
    }))
    .unwrap()
}

fn uri(uri: &str) -> Value {
    json!({"type": "URI", "uri": uri})
}

#[tokio::test]
async fn test_classes() {
    let response = server()
        .post("/triple")
        .json(&json!({
            "subject": {"type": "UNBOUND"},
            "predicate": uri(RDF_TYPE),
            "object": uri(RDFS_CLASS)
        }))
        .expect_success()
        .await;
    let mut subjects: Vec<Value> = response
        .json::<Vec<Value>>()
        .into_iter()
        .map(|triple| triple["subject"].clone())
        .collect();
    subjects.sort_by_key(ToString::to_string);
    assert_eq!(subjects, vec![uri(iri::A), uri(iri::B)]);
}

#[tokio::test]
async fn test_attribute_value() {
    let response = server()
        .post("/triple")
        .json(&json!({
            "subject": uri(iri::I1),
            "predicate": uri(iri::HAS_NAME),
            "object": {"type": "UNBOUND"}
        }))
        .expect_success()
        .await;
    response.assert_json(&json!([{
        "subject": uri(iri::I1),
        "predicate": uri(iri::HAS_NAME),
        "object": {"type": "LITERAL", "data_type": XSD_STRING, "data": "x"}
    }]));
}

#[tokio::test]
async fn test_unresolvable_pattern_is_empty() {
    server()
        .post("/triple")
        .json(&json!({
            "subject": uri("http://example.com/nothing"),
            "predicate": {"type": "UNBOUND"},
            "object": {"type": "UNBOUND"}
        }))
        .expect_success()
        .await
        .assert_json(&json!([]));
}

#[tokio::test]
async fn test_malformed_pattern() {
    let server = server();
    server
        .post("/triple")
        .json(&json!({"subject": {"type": "UNBOUND"}, "predicate": {"type": "UNBOUND"}}))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server
        .post("/triple")
        .json(&json!({
            "subject": {"type": "UNBOUND"},
            "predicate": {"type": "UNBOUND"},
            "object": {"type": "LITERAL", "data_type": XSD_STRING, "data": 42}
        }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server
        .post("/triple")
        .text("not json")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_triple_endpoint_only_accepts_post() {
    server()
        .get("/triple")
        .await
        .assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_sparql_get() {
    let response = server()
        .get("/sparql")
        .add_query_param("query", format!("SELECT ?s WHERE {{ ?s a <{}> }}", iri::B))
        .expect_success()
        .await;
    assert_eq!(
        response.header(CONTENT_TYPE),
        "application/sparql-results+json"
    );
    let bindings = &response.json::<Value>()["results"]["bindings"];
    assert_eq!(
        bindings,
        &json!([{"s": {"type": "uri", "value": iri::I1}}])
    );
}

#[tokio::test]
async fn test_sparql_post_query() {
    let response = server()
        .post("/sparql")
        .bytes(format!("ASK {{ <{}> <{}> \"x\" }}", iri::I1, iri::HAS_NAME).into())
        .content_type("application/sparql-query")
        .expect_success()
        .await;
    assert_eq!(response.json::<Value>()["boolean"], json!(true));
}

#[tokio::test]
async fn test_sparql_post_form() {
    let response = server()
        .post("/sparql")
        .form(&[("query", format!("SELECT ?c WHERE {{ <{}> a ?c }}", iri::I1))])
        .add_header(ACCEPT, HeaderValue::from_static("text/csv"))
        .expect_success()
        .await;
    let text = response.text();
    assert!(text.starts_with("c\r\n"));
    assert!(text.contains(iri::A));
    assert!(text.contains(iri::B));
    assert!(text.contains("http://www.w3.org/2000/01/rdf-schema#Resource"));
}

#[tokio::test]
async fn test_sparql_construct() {
    let response = server()
        .get("/sparql")
        .add_query_param(
            "query",
            format!("CONSTRUCT {{ ?s ?p ?o }} WHERE {{ ?s ?p ?o . FILTER(?s = <{}>) }}", iri::B),
        )
        .expect_success()
        .await;
    assert_eq!(response.header(CONTENT_TYPE), "application/n-triples");
    assert!(response.text().contains(&format!(
        "<{}> <http://www.w3.org/2000/01/rdf-schema#subClassOf> <{}> .",
        iri::B,
        iri::A
    )));
}

#[tokio::test]
async fn test_sparql_errors() {
    let server = server();
    server
        .get("/sparql")
        .add_query_param("query", "SELECT WHERE")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server
        .get("/sparql")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server
        .get("/sparql")
        .add_query_param("query", "SELECT * WHERE { ?s ?p ?o }")
        .add_header(ACCEPT, HeaderValue::from_static("image/png"))
        .await
        .assert_status(StatusCode::NOT_ACCEPTABLE);
    server
        .post("/sparql")
        .text("SELECT * WHERE { ?s ?p ?o }")
        .await
        .assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_ping() {
    server().get("/ping").expect_success().await.assert_text("OK");
}
