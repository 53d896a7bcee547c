//! The JSON form of triple patterns.
//!
//! ```json
//! {
//!   "subject": { "type": "UNBOUND" },
//!   "predicate": { "type": "URI", "uri": "http://www.w3.org/1999/02/22-rdf-syntax-ns#type" },
//!   "object": { "type": "LITERAL", "data_type": "http://www.w3.org/2001/XMLSchema#integer", "data": 42 }
//! }
//! ```
//!
//! Literal data is a native JSON value: a string for `xsd:string`, a boolean for
//! `xsd:boolean` and a number for `xsd:double` and `xsd:integer`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use vgraph_engine::VirtualGraph;
use vgraph_model::{BoundNode, Datatype, Literal, Node, Triple, TriplePattern};
use vgraph_schema::Schema;

/// A node of a JSON triple pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum JsonNode {
    Unbound,
    Uri { uri: String },
    Literal { data_type: String, data: Value },
}

/// A triple pattern, or a bound triple when none of its nodes is [`JsonNode::Unbound`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonTriple {
    pub subject: JsonNode,
    pub predicate: JsonNode,
    pub object: JsonNode,
}

/// A JSON literal whose data does not fit its datatype.
#[derive(Debug, thiserror::Error)]
#[error("{data} is not a valid value of <{data_type}>")]
pub struct MalformedLiteral {
    data_type: String,
    data: Value,
}

/// Decodes a JSON pattern.
///
/// Returns [`None`] if a URI does not resolve or a literal has an unsupported datatype: the
/// pattern then matches nothing.
pub fn decode_pattern(
    graph: &VirtualGraph,
    pattern: &JsonTriple,
) -> Result<Option<TriplePattern>, MalformedLiteral> {
    let (Some(subject), Some(predicate), Some(object)) = (
        decode_node(graph, &pattern.subject)?,
        decode_node(graph, &pattern.predicate)?,
        decode_node(graph, &pattern.object)?,
    ) else {
        return Ok(None);
    };
    Ok(Some(TriplePattern::new(subject, predicate, object)))
}

fn decode_node(graph: &VirtualGraph, node: &JsonNode) -> Result<Option<Node>, MalformedLiteral> {
    match node {
        JsonNode::Unbound => Ok(Some(Node::Unbound)),
        JsonNode::Uri { uri } => Ok(graph.lookup(uri).map(Node::Bound)),
        JsonNode::Literal { data_type, data } => {
            let Some(datatype) = Datatype::from_iri(data_type) else {
                return Ok(None);
            };
            let literal = decode_literal(datatype, data).ok_or_else(|| MalformedLiteral {
                data_type: data_type.clone(),
                data: data.clone(),
            })?;
            Ok(Some(literal.into()))
        }
    }
}

fn decode_literal(datatype: Datatype, data: &Value) -> Option<Literal> {
    match (datatype, data) {
        (Datatype::String, Value::String(value)) => Some(Literal::String(value.clone())),
        (Datatype::Boolean, Value::Bool(value)) => Some(Literal::Boolean(*value)),
        (Datatype::Double, Value::Number(value)) => value.as_f64().map(Literal::Double),
        (Datatype::Integer, Value::Number(value)) => value.as_i64().map(Literal::Integer),
        _ => None,
    }
}

pub fn encode_pattern(schema: &Schema, pattern: &TriplePattern) -> JsonTriple {
    JsonTriple {
        subject: encode_node(schema, &pattern.subject),
        predicate: encode_node(schema, &pattern.predicate),
        object: encode_node(schema, &pattern.object),
    }
}

pub fn encode_triple(schema: &Schema, triple: &Triple) -> JsonTriple {
    JsonTriple {
        subject: encode_bound_node(schema, &triple.subject),
        predicate: encode_bound_node(schema, &triple.predicate),
        object: encode_bound_node(schema, &triple.object),
    }
}

pub fn encode_node(schema: &Schema, node: &Node) -> JsonNode {
    match node {
        Node::Unbound => JsonNode::Unbound,
        Node::Bound(node) => encode_bound_node(schema, node),
    }
}

pub fn encode_bound_node(schema: &Schema, node: &BoundNode) -> JsonNode {
    if let BoundNode::Literal(literal) = node {
        return encode_literal(literal);
    }
    JsonNode::Uri {
        uri: schema
            .node_iri(node)
            .map_or_else(String::new, |iri| iri.as_str().to_owned()),
    }
}

/// Non-finite doubles have no JSON form and are encoded as `null`.
fn encode_literal(literal: &Literal) -> JsonNode {
    let data = match literal {
        Literal::String(value) => Value::from(value.as_str()),
        Literal::Boolean(value) => Value::from(*value),
        Literal::Double(value) => Value::from(*value),
        Literal::Integer(value) => Value::from(*value),
    };
    JsonNode::Literal {
        data_type: literal.datatype().iri().as_str().to_owned(),
        data,
    }
}
