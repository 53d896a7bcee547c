use crate::vocab::xsd;
use crate::{HostValue, Literal, LiteralError};
use oxrdf::NamedNodeRef;
use oxsdatatypes::{Boolean, Double, Integer};
use std::fmt;
use std::str::FromStr;

/// One of the four primitive datatypes an attribute can target.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub enum Datatype {
    /// `xsd:string`
    String,
    /// `xsd:boolean`
    Boolean,
    /// `xsd:double`
    Double,
    /// `xsd:integer`
    Integer,
}

impl Datatype {
    /// The datatype table in lookup order.
    pub const ALL: [Datatype; 4] = [
        Datatype::String,
        Datatype::Boolean,
        Datatype::Double,
        Datatype::Integer,
    ];

    /// Returns the XSD IRI of this datatype.
    pub fn iri(self) -> NamedNodeRef<'static> {
        match self {
            Datatype::String => xsd::STRING,
            Datatype::Boolean => xsd::BOOLEAN,
            Datatype::Double => xsd::DOUBLE,
            Datatype::Integer => xsd::INTEGER,
        }
    }

    /// Returns the datatype with the given XSD IRI, if it is supported.
    pub fn from_iri(iri: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|datatype| datatype.iri().as_str() == iri)
    }

    /// Returns the position of this datatype in [`Datatype::ALL`].
    pub fn index(self) -> usize {
        match self {
            Datatype::String => 0,
            Datatype::Boolean => 1,
            Datatype::Double => 2,
            Datatype::Integer => 3,
        }
    }

    /// Returns whether `value` is a host value of this datatype.
    ///
    /// This is the datatype counterpart of a class' host type test: no numeric widening takes
    /// place, an integer host value is not a double.
    pub fn accepts(self, value: &HostValue) -> bool {
        matches!(
            (self, value),
            (Datatype::String, HostValue::String(_))
                | (Datatype::Boolean, HostValue::Boolean(_))
                | (Datatype::Double, HostValue::Double(_))
                | (Datatype::Integer, HostValue::Integer(_))
        )
    }

    /// Projects a host value into a literal of this datatype.
    ///
    /// Returns [`None`] if the value is of another kind.
    pub fn project(self, value: &HostValue) -> Option<Literal> {
        match (self, value) {
            (Datatype::String, HostValue::String(value)) => Some(Literal::String(value.clone())),
            (Datatype::Boolean, HostValue::Boolean(value)) => Some(Literal::Boolean(*value)),
            (Datatype::Double, HostValue::Double(value)) => Some(Literal::Double(*value)),
            (Datatype::Integer, HostValue::Integer(value)) => Some(Literal::Integer(*value)),
            _ => None,
        }
    }

    /// Parses a lexical form of this datatype.
    pub fn parse(self, lexical: &str) -> Result<Literal, LiteralError> {
        let invalid = || LiteralError::InvalidLexicalForm {
            datatype: self,
            lexical: lexical.to_owned(),
        };
        Ok(match self {
            Datatype::String => Literal::String(lexical.to_owned()),
            Datatype::Boolean => {
                Literal::Boolean(Boolean::from_str(lexical).map_err(|_| invalid())?.into())
            }
            Datatype::Double => {
                Literal::Double(Double::from_str(lexical).map_err(|_| invalid())?.into())
            }
            Datatype::Integer => {
                Literal::Integer(Integer::from_str(lexical).map_err(|_| invalid())?.into())
            }
        })
    }
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.iri(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_iri() {
        assert_eq!(
            Datatype::from_iri("http://www.w3.org/2001/XMLSchema#double"),
            Some(Datatype::Double)
        );
        assert_eq!(
            Datatype::from_iri("http://www.w3.org/2001/XMLSchema#decimal"),
            None
        );
    }

    #[test]
    fn test_project_rejects_other_kinds() {
        assert_eq!(
            Datatype::Integer.project(&HostValue::Integer(3)),
            Some(Literal::Integer(3))
        );
        assert_eq!(Datatype::Double.project(&HostValue::Integer(3)), None);
        assert_eq!(Datatype::String.project(&HostValue::Null), None);
    }

    #[test]
    fn test_parse_lexical_forms() {
        assert_eq!(
            Datatype::Boolean.parse("1").unwrap(),
            Literal::Boolean(true)
        );
        assert_eq!(
            Datatype::Integer.parse("-42").unwrap(),
            Literal::Integer(-42)
        );
        assert_eq!(
            Datatype::Double.parse("1.5E0").unwrap(),
            Literal::Double(1.5)
        );
        assert!(Datatype::Integer.parse("4.2").is_err());
    }
}
