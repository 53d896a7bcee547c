//! The node model of vgraph.
//!
//! Every RDF term the engine manipulates is a [`Node`]. Bound nodes ([`BoundNode`]) refer either
//! to the fixed RDF(S) [vocabulary](Vocabulary), to schema entities (by [`ClassId`],
//! [`AttributeId`] or [`Datatype`]), to live host objects ([`Instance`]) or to typed
//! [literals](Literal).

mod datatype;
mod error;
mod host;
mod ids;
mod instance;
mod literal;
mod node;
mod triple;
pub mod vocab;

pub use datatype::Datatype;
pub use error::{AdapterError, LiteralError};
pub use host::{HostObject, HostType, HostValue};
pub use ids::{AttributeId, ClassId};
pub use instance::Instance;
pub use literal::Literal;
pub use node::{BoundNode, Node};
pub use triple::{PatternShape, Triple, TriplePattern};
pub use vocab::Vocabulary;

// Re-export some oxrdf types.
pub use oxrdf::{
    BlankNode, IriParseError, Literal as RdfLiteral, LiteralRef as RdfLiteralRef, NamedNode,
    NamedNodeRef, Subject, Term, TermRef, Triple as RdfTriple, TripleRef as RdfTripleRef,
};
