//! An in-memory host for tests.
//!
//! The fixture schema has a class `A` with a subclass `B` and an attribute `hasName: A →
//! xsd:string` that returns `"x"` for every instance. The fixture host holds one instance of
//! `B`, `i1`.

use crate::{HostAdapter, VirtualGraph};
use vgraph_model::{AdapterError, ClassId, Datatype, HostObject, HostType, HostValue};
use vgraph_schema::{AttributeDecl, ClassDecl, Schema};

pub mod iri {
    pub const A: &str = "http://example.com/A";
    pub const B: &str = "http://example.com/B";
    pub const HAS_NAME: &str = "http://example.com/hasName";
    pub const I1: &str = "http://example.com/B/i1";
}

/// A host object of the fixture schema.
#[derive(Debug, Clone)]
pub struct Item {
    pub name: String,
    pub is_b: bool,
}

impl Item {
    pub fn a(name: impl Into<String>) -> HostObject {
        HostObject::new(Self {
            name: name.into(),
            is_b: false,
        })
    }

    pub fn b(name: impl Into<String>) -> HostObject {
        HostObject::new(Self {
            name: name.into(),
            is_b: true,
        })
    }
}

pub fn fixture_classes() -> Vec<ClassDecl> {
    vec![
        ClassDecl::new(iri::A, HostType::of::<Item>()),
        ClassDecl::new(
            iri::B,
            HostType::new("B", |object: &HostObject| {
                object.downcast_ref::<Item>().is_some_and(|item| item.is_b)
            }),
        )
        .with_superclass(iri::A),
    ]
}

pub fn fixture_attributes() -> Vec<AttributeDecl> {
    vec![AttributeDecl::new(
        iri::HAS_NAME,
        iri::A,
        Datatype::String,
        |_| Ok(vec![HostValue::from("x")]),
    )]
}

#[allow(clippy::panic)]
pub fn fixture_schema() -> Schema {
    match Schema::build(fixture_classes(), fixture_attributes()) {
        Ok(schema) => schema,
        Err(error) => panic!("invalid fixture schema: {error}"),
    }
}

/// The fixture schema bound to a [`MemoryHost`] holding `i1`.
pub fn fixture_graph() -> VirtualGraph {
    VirtualGraph::new(fixture_schema(), MemoryHost::new([Item::b("i1")]))
}

/// How a [`MemoryHost`] misbehaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Every callback returns an error.
    Error,
    /// Every callback panics.
    Panic,
}

/// A host keeping its objects in a list.
///
/// Objects must be [`Item`]s: their IRI is the instance IRI prefix of their class followed by
/// their name.
#[derive(Debug, Default)]
pub struct MemoryHost {
    objects: Vec<HostObject>,
    indirect_instances_included: bool,
    fault: Option<Fault>,
}

impl MemoryHost {
    pub fn new(objects: impl IntoIterator<Item = HostObject>) -> Self {
        Self {
            objects: objects.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Makes [`HostAdapter::enumerate_instances`] return the objects of subclasses too.
    #[must_use]
    pub fn with_indirect_instances_included(mut self) -> Self {
        self.indirect_instances_included = true;
        self
    }

    #[must_use]
    pub fn with_fault(mut self, fault: Fault) -> Self {
        self.fault = Some(fault);
        self
    }

    #[allow(clippy::panic)]
    fn check(&self) -> Result<(), AdapterError> {
        match self.fault {
            None => Ok(()),
            Some(Fault::Error) => Err(AdapterError::new("the host is unavailable")),
            Some(Fault::Panic) => panic!("the host crashed"),
        }
    }
}

impl HostAdapter for MemoryHost {
    fn enumerate_instances(
        &self,
        schema: &Schema,
        class: ClassId,
    ) -> Result<Vec<HostObject>, AdapterError> {
        self.check()?;
        Ok(self
            .objects
            .iter()
            .filter(|object| {
                if self.indirect_instances_included {
                    schema.host_type(class).is_instance(object)
                } else {
                    schema.classify(object) == Some(class)
                }
            })
            .cloned()
            .collect())
    }

    fn indirect_instances_included(&self, _schema: &Schema, _class: ClassId) -> bool {
        self.indirect_instances_included
    }

    fn mint_instance_iri(
        &self,
        schema: &Schema,
        class: ClassId,
        object: &HostObject,
    ) -> Result<String, AdapterError> {
        self.check()?;
        let item = object
            .downcast_ref::<Item>()
            .ok_or_else(|| AdapterError::new("not an item"))?;
        Ok(format!("{}{}", schema.instance_iri_prefix(class), item.name))
    }

    fn find_instance_by_iri(
        &self,
        schema: &Schema,
        iri: &str,
    ) -> Result<Option<HostObject>, AdapterError> {
        self.check()?;
        for object in &self.objects {
            let Some(class) = schema.classify(object) else {
                continue;
            };
            if self.mint_instance_iri(schema, class, object)? == iri {
                return Ok(Some(object.clone()));
            }
        }
        Ok(None)
    }
}
