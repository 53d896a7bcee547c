use std::fmt;
use std::sync::Arc;
use vgraph_model::{AdapterError, Datatype, HostObject, HostType, HostValue};

/// Reads the values of an attribute from a host instance.
pub type Accessor = dyn Fn(&HostObject) -> Result<Vec<HostValue>, AdapterError> + Send + Sync;

/// The declaration of a schema class, as supplied by the host.
///
/// Superclasses are referenced by IRI and resolved when the schema is registered.
#[derive(Clone)]
pub struct ClassDecl {
    pub(crate) iri: String,
    pub(crate) host_type: HostType,
    pub(crate) superclasses: Vec<String>,
    pub(crate) instance_iri_prefix: String,
}

impl ClassDecl {
    pub fn new(iri: impl Into<String>, host_type: HostType) -> Self {
        let iri = iri.into();
        let instance_iri_prefix = format!("{iri}/");
        Self {
            iri,
            host_type,
            superclasses: Vec::new(),
            instance_iri_prefix,
        }
    }

    /// Adds a direct superclass.
    #[must_use]
    pub fn with_superclass(mut self, iri: impl Into<String>) -> Self {
        self.superclasses.push(iri.into());
        self
    }

    /// Sets the prefix host adapters use when minting instance IRIs of this class.
    ///
    /// Defaults to the class IRI followed by `/`.
    #[must_use]
    pub fn with_instance_iri_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.instance_iri_prefix = prefix.into();
        self
    }
}

impl fmt::Debug for ClassDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassDecl")
            .field("iri", &self.iri)
            .field("host_type", &self.host_type)
            .field("superclasses", &self.superclasses)
            .finish_non_exhaustive()
    }
}

/// The declared range of an attribute.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum TargetDecl {
    /// A class, referenced by IRI.
    Class(String),
    Datatype(Datatype),
}

impl From<Datatype> for TargetDecl {
    fn from(value: Datatype) -> Self {
        TargetDecl::Datatype(value)
    }
}

impl From<&str> for TargetDecl {
    fn from(value: &str) -> Self {
        TargetDecl::Class(value.to_owned())
    }
}

impl From<String> for TargetDecl {
    fn from(value: String) -> Self {
        TargetDecl::Class(value)
    }
}

/// The declaration of an attribute, as supplied by the host.
#[derive(Clone)]
pub struct AttributeDecl {
    pub(crate) iri: String,
    pub(crate) source: String,
    pub(crate) target: TargetDecl,
    pub(crate) accessor: Arc<Accessor>,
}

impl AttributeDecl {
    pub fn new(
        iri: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<TargetDecl>,
        accessor: impl Fn(&HostObject) -> Result<Vec<HostValue>, AdapterError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        Self {
            iri: iri.into(),
            source: source.into(),
            target: target.into(),
            accessor: Arc::new(accessor),
        }
    }
}

impl fmt::Debug for AttributeDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeDecl")
            .field("iri", &self.iri)
            .field("source", &self.source)
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}
