use crate::decl::Accessor;
use crate::phase::{Built, Phase, Raw};
use crate::{AttributeDecl, ClassDecl, SchemaError, TargetDecl, TypeRef};
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;
use vgraph_model::{
    AdapterError, AttributeId, BoundNode, ClassId, Datatype, HostObject, HostType, HostValue,
    NamedNode, NamedNodeRef, Vocabulary,
};

/// The schema of a host application: its classes, attributes and their closures.
///
/// A schema is assembled in phases (see [`phase`](crate::phase)). Only a [`Schema<Built>`] can
/// be queried by the engine; it is immutable and can be shared between threads.
///
/// Entity ids handed out by a schema are only valid for that schema. Accessors panic when they
/// are given an id of another schema.
pub struct Schema<P: Phase = Built> {
    pub(crate) classes: Vec<Class>,
    pub(crate) attributes: Vec<Attribute>,
    class_index: FxHashMap<String, ClassId>,
    attribute_index: FxHashMap<String, AttributeId>,
    pub(crate) phase: P,
}

pub(crate) struct Class {
    pub(crate) iri: NamedNode,
    pub(crate) host_type: HostType,
    pub(crate) direct_superclasses: Vec<ClassId>,
    pub(crate) instance_iri_prefix: String,
}

pub(crate) struct Attribute {
    pub(crate) iri: NamedNode,
    pub(crate) source: ClassId,
    pub(crate) target: TypeRef,
    pub(crate) accessor: Arc<Accessor>,
}

impl Schema<Built> {
    /// Registers the declarations and runs every construction phase.
    pub fn build(
        classes: impl IntoIterator<Item = ClassDecl>,
        attributes: impl IntoIterator<Item = AttributeDecl>,
    ) -> Result<Self, SchemaError> {
        Ok(Schema::register(classes, attributes)?
            .link_subclasses()
            .compute_closures()?
            .bind_attributes())
    }

    /// Returns the schema entity or vocabulary term with the given IRI.
    ///
    /// The vocabulary is searched first, then the datatypes, the classes and the attributes.
    /// Instances are not part of the schema and are never returned.
    pub fn lookup_entity(&self, iri: &str) -> Option<BoundNode> {
        if let Some(term) = Vocabulary::from_iri(iri) {
            return Some(term.into());
        }
        if let Some(datatype) = Datatype::from_iri(iri) {
            return Some(datatype.into());
        }
        if let Some(class) = self.class_by_iri(iri) {
            return Some(class.into());
        }
        self.attribute_by_iri(iri).map(BoundNode::from)
    }
}

impl Schema<Raw> {
    /// Registers the declarations, resolving every IRI reference to an id.
    pub fn register(
        classes: impl IntoIterator<Item = ClassDecl>,
        attributes: impl IntoIterator<Item = AttributeDecl>,
    ) -> Result<Self, SchemaError> {
        let classes = classes.into_iter().collect::<Vec<_>>();
        let attributes = attributes.into_iter().collect::<Vec<_>>();

        let mut class_index = FxHashMap::default();
        for (index, decl) in classes.iter().enumerate() {
            if class_index
                .insert(decl.iri.clone(), ClassId::new(index))
                .is_some()
            {
                return Err(SchemaError::DuplicateIri(decl.iri.clone()));
            }
        }

        let mut attribute_index = FxHashMap::default();
        for (index, decl) in attributes.iter().enumerate() {
            if class_index.contains_key(&decl.iri)
                || attribute_index
                    .insert(decl.iri.clone(), AttributeId::new(index))
                    .is_some()
            {
                return Err(SchemaError::DuplicateIri(decl.iri.clone()));
            }
        }

        let classes = classes
            .into_iter()
            .map(|decl| {
                let direct_superclasses = decl
                    .superclasses
                    .iter()
                    .map(|superclass| {
                        class_index.get(superclass).copied().ok_or_else(|| {
                            SchemaError::UnknownSuperclass {
                                class: decl.iri.clone(),
                                superclass: superclass.clone(),
                            }
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Class {
                    iri: parse_iri(&decl.iri)?,
                    host_type: decl.host_type,
                    direct_superclasses,
                    instance_iri_prefix: decl.instance_iri_prefix,
                })
            })
            .collect::<Result<Vec<_>, SchemaError>>()?;

        let attributes = attributes
            .into_iter()
            .map(|decl| {
                let source = class_index.get(&decl.source).copied().ok_or_else(|| {
                    SchemaError::UnknownSource {
                        attribute: decl.iri.clone(),
                        class: decl.source.clone(),
                    }
                })?;
                let target = match &decl.target {
                    TargetDecl::Datatype(datatype) => TypeRef::Datatype(*datatype),
                    TargetDecl::Class(class) => TypeRef::Class(
                        class_index.get(class).copied().ok_or_else(|| {
                            SchemaError::UnknownTarget {
                                attribute: decl.iri.clone(),
                                class: class.clone(),
                            }
                        })?,
                    ),
                };
                Ok(Attribute {
                    iri: parse_iri(&decl.iri)?,
                    source,
                    target,
                    accessor: decl.accessor,
                })
            })
            .collect::<Result<Vec<_>, SchemaError>>()?;

        Ok(Self {
            classes,
            attributes,
            class_index,
            attribute_index,
            phase: Raw,
        })
    }
}

impl<P: Phase> Schema<P> {
    pub(crate) fn map_phase<Q: Phase>(self, f: impl FnOnce(P) -> Q) -> Schema<Q> {
        Schema {
            classes: self.classes,
            attributes: self.attributes,
            class_index: self.class_index,
            attribute_index: self.attribute_index,
            phase: f(self.phase),
        }
    }

    /// Returns the ids of all classes in declaration order.
    pub fn classes(&self) -> impl ExactSizeIterator<Item = ClassId> + '_ {
        (0..self.classes.len()).map(ClassId::new)
    }

    /// Returns the ids of all attributes in declaration order.
    pub fn attributes(&self) -> impl ExactSizeIterator<Item = AttributeId> + '_ {
        (0..self.attributes.len()).map(AttributeId::new)
    }

    pub fn class_by_iri(&self, iri: &str) -> Option<ClassId> {
        self.class_index.get(iri).copied()
    }

    pub fn attribute_by_iri(&self, iri: &str) -> Option<AttributeId> {
        self.attribute_index.get(iri).copied()
    }

    pub fn class_iri(&self, class: ClassId) -> NamedNodeRef<'_> {
        self.class(class).iri.as_ref()
    }

    pub fn host_type(&self, class: ClassId) -> &HostType {
        &self.class(class).host_type
    }

    pub fn instance_iri_prefix(&self, class: ClassId) -> &str {
        &self.class(class).instance_iri_prefix
    }

    pub fn direct_superclasses(&self, class: ClassId) -> &[ClassId] {
        &self.class(class).direct_superclasses
    }

    /// Returns the classes without any direct superclass.
    pub fn top_classes(&self) -> impl Iterator<Item = ClassId> + '_ {
        self.classes()
            .filter(|class| self.direct_superclasses(*class).is_empty())
    }

    pub fn attribute_iri(&self, attribute: AttributeId) -> NamedNodeRef<'_> {
        self.attribute(attribute).iri.as_ref()
    }

    pub fn attribute_source(&self, attribute: AttributeId) -> ClassId {
        self.attribute(attribute).source
    }

    pub fn attribute_target(&self, attribute: AttributeId) -> TypeRef {
        self.attribute(attribute).target
    }

    /// Calls the accessor of `attribute` on a host instance.
    ///
    /// The accessor is host code; it may fail or panic. Callers that must not fail should go
    /// through the engine's host bridge instead.
    pub fn read_attribute(
        &self,
        attribute: AttributeId,
        instance: &HostObject,
    ) -> Result<Vec<HostValue>, AdapterError> {
        (self.attribute(attribute).accessor)(instance)
    }

    /// Returns whether a host value is a member of the given type.
    ///
    /// Class membership is decided by the class' host type; datatypes require a value of the
    /// matching primitive kind.
    pub fn type_accepts(&self, ty: TypeRef, value: &HostValue) -> bool {
        match (ty, value) {
            (TypeRef::Class(class), HostValue::Object(object)) => {
                self.host_type(class).is_instance(object)
            }
            (TypeRef::Class(_), _) => false,
            (TypeRef::Datatype(datatype), value) => datatype.accepts(value),
        }
    }

    /// Returns the IRI of a bound node, or [`None`] for literals.
    pub fn node_iri<'a>(&'a self, node: &'a BoundNode) -> Option<NamedNodeRef<'a>> {
        match node {
            BoundNode::Vocabulary(term) => Some(term.iri()),
            BoundNode::Class(class) => Some(self.class_iri(*class)),
            BoundNode::Datatype(datatype) => Some(datatype.iri()),
            BoundNode::Attribute(attribute) => Some(self.attribute_iri(*attribute)),
            BoundNode::Instance(instance) => Some(instance.iri()),
            BoundNode::Literal(_) => None,
        }
    }

    fn class(&self, class: ClassId) -> &Class {
        &self.classes[class.index()]
    }

    fn attribute(&self, attribute: AttributeId) -> &Attribute {
        &self.attributes[attribute.index()]
    }
}

impl<P: Phase + fmt::Debug> fmt::Debug for Schema<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field(
                "classes",
                &self.classes.iter().map(|c| c.iri.as_str()).collect::<Vec<_>>(),
            )
            .field(
                "attributes",
                &self
                    .attributes
                    .iter()
                    .map(|a| a.iri.as_str())
                    .collect::<Vec<_>>(),
            )
            .field("phase", &self.phase)
            .finish()
    }
}

fn parse_iri(iri: &str) -> Result<NamedNode, SchemaError> {
    NamedNode::new(iri).map_err(|source| SchemaError::InvalidIri {
        iri: iri.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: &str = "http://example.com/A";
    const B: &str = "http://example.com/B";

    struct Foo;

    fn class(iri: &str) -> ClassDecl {
        ClassDecl::new(iri, HostType::of::<Foo>())
    }

    fn attribute(iri: &str, source: &str, target: impl Into<TargetDecl>) -> AttributeDecl {
        AttributeDecl::new(iri, source, target, |_| Ok(Vec::new()))
    }

    #[test]
    fn test_register_resolves_references() {
        let schema = Schema::register(
            [class(A), class(B).with_superclass(A)],
            [attribute("http://example.com/p", B, A)],
        )
        .unwrap();

        let a = schema.class_by_iri(A).unwrap();
        let b = schema.class_by_iri(B).unwrap();
        let p = schema.attribute_by_iri("http://example.com/p").unwrap();
        assert_eq!(schema.direct_superclasses(b), &[a]);
        assert_eq!(schema.attribute_source(p), b);
        assert_eq!(schema.attribute_target(p), TypeRef::Class(a));
        assert_eq!(schema.instance_iri_prefix(a), "http://example.com/A/");
    }

    #[test]
    fn test_register_rejects_duplicate_iri() {
        let result = Schema::register([class(A), class(A)], []);
        assert!(matches!(result, Err(SchemaError::DuplicateIri(iri)) if iri == A));

        let result = Schema::register([class(A)], [attribute(A, A, Datatype::String)]);
        assert!(matches!(result, Err(SchemaError::DuplicateIri(_))));
    }

    #[test]
    fn test_register_rejects_unknown_references() {
        let result = Schema::register([class(B).with_superclass(A)], []);
        assert!(matches!(result, Err(SchemaError::UnknownSuperclass { .. })));

        let result = Schema::register([class(A)], [attribute("http://example.com/p", B, A)]);
        assert!(matches!(result, Err(SchemaError::UnknownSource { .. })));

        let result = Schema::register([class(A)], [attribute("http://example.com/p", A, B)]);
        assert!(matches!(result, Err(SchemaError::UnknownTarget { .. })));
    }

    #[test]
    fn test_register_rejects_invalid_iri() {
        let result = Schema::register([class("not an iri")], []);
        assert!(matches!(result, Err(SchemaError::InvalidIri { .. })));
    }

    #[test]
    fn test_lookup_entity_order() {
        let schema = Schema::build(
            [class(A)],
            [attribute("http://example.com/p", A, Datatype::Integer)],
        )
        .unwrap();

        assert_eq!(
            schema.lookup_entity("http://www.w3.org/2000/01/rdf-schema#Class"),
            Some(BoundNode::Vocabulary(Vocabulary::RdfsClass))
        );
        assert_eq!(
            schema.lookup_entity("http://www.w3.org/2001/XMLSchema#integer"),
            Some(BoundNode::Datatype(Datatype::Integer))
        );
        assert_eq!(
            schema.lookup_entity(A),
            Some(BoundNode::Class(ClassId::new(0)))
        );
        assert_eq!(
            schema.lookup_entity("http://example.com/p"),
            Some(BoundNode::Attribute(AttributeId::new(0)))
        );
        assert_eq!(schema.lookup_entity("http://example.com/nothing"), None);
    }

    #[test]
    fn test_type_accepts() {
        let schema = Schema::build([class(A)], []).unwrap();
        let a = TypeRef::Class(ClassId::new(0));

        assert!(schema.type_accepts(a, &HostValue::Object(HostObject::new(Foo))));
        assert!(!schema.type_accepts(a, &HostValue::Object(HostObject::new(1_u8))));
        assert!(!schema.type_accepts(a, &HostValue::from("x")));
        assert!(schema.type_accepts(Datatype::String.into(), &HostValue::from("x")));
        assert!(!schema.type_accepts(Datatype::Double.into(), &HostValue::Integer(1)));
    }
}
