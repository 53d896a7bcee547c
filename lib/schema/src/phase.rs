//! Type-level markers for the construction phases of a [`Schema`](crate::Schema).
//!
//! A schema moves through four phases and each phase unlocks further accessors:
//!
//! 1. [`Raw`]: declarations are registered and their IRIs resolved to ids.
//! 2. [`Linked`]: the direct subclasses of every class are known.
//! 3. [`Closed`]: the transitive super- and subclass closures are known.
//! 4. [`Built`]: attributes are bound to the closures of their source and target types.
//!
//! Calling an accessor of a later phase on an earlier one does not compile.

use crate::TypeRef;
use vgraph_model::{AttributeId, ClassId, Datatype};

mod sealed {
    pub trait Sealed {}
}

/// A construction phase of a schema.
pub trait Phase: sealed::Sealed {}

/// A phase in which the direct subclasses of every class are known.
pub trait HasSubclasses: Phase {
    #[doc(hidden)]
    fn direct_subclasses(&self) -> &[Vec<ClassId>];
}

/// A phase in which the super- and subclass closures of every class are known.
pub trait HasClosures: HasSubclasses {
    #[doc(hidden)]
    fn closures(&self) -> &[ClassClosure];
}

/// Declarations are registered.
#[derive(Debug)]
pub struct Raw;

/// Direct subclasses are discovered.
#[derive(Debug)]
pub struct Linked {
    pub(crate) direct_subclasses: Vec<Vec<ClassId>>,
}

/// Class closures are computed.
#[derive(Debug)]
pub struct Closed {
    pub(crate) linked: Linked,
    pub(crate) closures: Vec<ClassClosure>,
}

/// Attributes are bound; the schema is frozen.
#[derive(Debug)]
pub struct Built {
    pub(crate) closed: Closed,
    pub(crate) bindings: Bindings,
}

impl sealed::Sealed for Raw {}
impl sealed::Sealed for Linked {}
impl sealed::Sealed for Closed {}
impl sealed::Sealed for Built {}

impl Phase for Raw {}
impl Phase for Linked {}
impl Phase for Closed {}
impl Phase for Built {}

impl HasSubclasses for Linked {
    fn direct_subclasses(&self) -> &[Vec<ClassId>] {
        &self.direct_subclasses
    }
}

impl HasSubclasses for Closed {
    fn direct_subclasses(&self) -> &[Vec<ClassId>] {
        &self.linked.direct_subclasses
    }
}

impl HasSubclasses for Built {
    fn direct_subclasses(&self) -> &[Vec<ClassId>] {
        self.closed.direct_subclasses()
    }
}

impl HasClosures for Closed {
    fn closures(&self) -> &[ClassClosure] {
        &self.closures
    }
}

impl HasClosures for Built {
    fn closures(&self) -> &[ClassClosure] {
        &self.closed.closures
    }
}

/// The transitive closures of one class. Both lists start with the class itself.
#[derive(Debug)]
pub struct ClassClosure {
    pub(crate) superclasses_and_self: Vec<ClassId>,
    pub(crate) subclasses_and_self: Vec<ClassId>,
}

/// The closures of one attribute.
#[derive(Debug)]
pub(crate) struct AttributeClosure {
    /// The source class followed by its indirect subclasses.
    pub(crate) source_classes: Vec<ClassId>,
    /// The target type followed by its indirect subclasses, if it is a class.
    pub(crate) target_types: Vec<TypeRef>,
}

#[derive(Debug)]
pub(crate) struct Bindings {
    pub(crate) attributes: Vec<AttributeClosure>,
    pub(crate) class_source_attributes: Vec<Vec<AttributeId>>,
    pub(crate) class_target_attributes: Vec<Vec<AttributeId>>,
    pub(crate) datatype_target_attributes: [Vec<AttributeId>; Datatype::ALL.len()],
}
