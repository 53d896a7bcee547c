use crate::Datatype;
use std::error::Error;

/// An error returned when a value cannot be turned into a [`Literal`](crate::Literal) of a
/// [`Datatype`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LiteralError {
    /// The lexical form is not valid for the datatype.
    #[error("'{lexical}' is not a valid lexical form of <{}>", datatype.iri().as_str())]
    InvalidLexicalForm { datatype: Datatype, lexical: String },
    /// The literal carries a datatype that is not one of the supported primitives.
    #[error("unsupported datatype <{0}>")]
    UnsupportedDatatype(String),
    /// The literal carries a language tag.
    #[error("language-tagged literals are not supported")]
    LanguageTag,
}

/// An error raised by a host callback, either a host adapter method or an attribute accessor.
///
/// The engine never surfaces these errors to query callers; they only end up in the logs.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct AdapterError {
    message: String,
    #[source]
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

impl AdapterError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wraps an error of the host application.
    pub fn from_source(source: impl Into<Box<dyn Error + Send + Sync + 'static>>) -> Self {
        let source = source.into();
        Self {
            message: source.to_string(),
            source: Some(source),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
