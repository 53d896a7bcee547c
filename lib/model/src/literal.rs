use crate::{Datatype, LiteralError};
use oxrdf::{Literal as RdfLiteral, LiteralRef as RdfLiteralRef};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Absolute tolerance used when comparing `xsd:double` literals.
///
/// Deduplication of literal objects relies on it: the same host value read through two
/// accessors may differ in its last bits.
pub const DOUBLE_EPSILON: f64 = 1e-7;

/// A typed literal of one of the supported primitive [datatypes](Datatype).
///
/// Equality is structural, except for [`Literal::Double`], where two values are equal if their
/// absolute difference is below [`DOUBLE_EPSILON`]. Double literals hash by datatype only so
/// that [`Hash`] stays consistent with that equality.
#[derive(Clone, Debug)]
pub enum Literal {
    String(String),
    Boolean(bool),
    Double(f64),
    Integer(i64),
}

impl Literal {
    pub fn datatype(&self) -> Datatype {
        match self {
            Literal::String(_) => Datatype::String,
            Literal::Boolean(_) => Datatype::Boolean,
            Literal::Double(_) => Datatype::Double,
            Literal::Integer(_) => Datatype::Integer,
        }
    }

    /// Converts this literal into an oxrdf literal carrying the canonical lexical form.
    pub fn to_rdf(&self) -> RdfLiteral {
        match self {
            Literal::String(value) => RdfLiteral::from(value.as_str()),
            Literal::Boolean(value) => RdfLiteral::from(*value),
            Literal::Double(value) => RdfLiteral::from(*value),
            Literal::Integer(value) => RdfLiteral::from(*value),
        }
    }

    /// Converts an oxrdf literal, matching its datatype against the datatype table.
    pub fn from_rdf(literal: RdfLiteralRef<'_>) -> Result<Self, LiteralError> {
        if literal.language().is_some() {
            return Err(LiteralError::LanguageTag);
        }
        let datatype = Datatype::from_iri(literal.datatype().as_str()).ok_or_else(|| {
            LiteralError::UnsupportedDatatype(literal.datatype().as_str().to_owned())
        })?;
        datatype.parse(literal.value())
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Literal::String(lhs), Literal::String(rhs)) => lhs == rhs,
            (Literal::Boolean(lhs), Literal::Boolean(rhs)) => lhs == rhs,
            (Literal::Double(lhs), Literal::Double(rhs)) => (lhs - rhs).abs() < DOUBLE_EPSILON,
            (Literal::Integer(lhs), Literal::Integer(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

// Not an equivalence relation for doubles, but the engine only ever compares values produced
// by the host, which is what the tolerance is meant for.
impl Eq for Literal {}

impl Hash for Literal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.datatype().hash(state);
        match self {
            Literal::String(value) => value.hash(state),
            Literal::Boolean(value) => value.hash(state),
            Literal::Integer(value) => value.hash(state),
            Literal::Double(_) => {}
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_rdf(), f)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_owned())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Boolean(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Double(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Integer(value)
    }
}
