use vgraph_model::IriParseError;

/// An inconsistency in the class and attribute declarations handed to the schema builder.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SchemaError {
    #[error("invalid IRI '{iri}': {source}")]
    InvalidIri {
        iri: String,
        #[source]
        source: IriParseError,
    },
    #[error("<{0}> is declared more than once")]
    DuplicateIri(String),
    #[error("class <{class}> declares the unknown superclass <{superclass}>")]
    UnknownSuperclass { class: String, superclass: String },
    #[error("attribute <{attribute}> has the unknown source class <{class}>")]
    UnknownSource { attribute: String, class: String },
    #[error("attribute <{attribute}> has the unknown target class <{class}>")]
    UnknownTarget { attribute: String, class: String },
    /// The class is (transitively) its own superclass.
    #[error("class <{0}> is part of a cyclic class hierarchy")]
    CyclicHierarchy(String),
}
