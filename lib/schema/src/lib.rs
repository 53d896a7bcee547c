//! The schema model of vgraph.
//!
//! A host application describes its object model as a list of [class](ClassDecl) and
//! [attribute](AttributeDecl) declarations. [`Schema::build`] turns them into an immutable
//! [`Schema`] holding the inheritance closures and attribute indexes the triple templates are
//! evaluated against.

mod binding;
mod decl;
mod display;
mod error;
mod hierarchy;
pub mod phase;
mod schema;
mod types;

pub use decl::{Accessor, AttributeDecl, ClassDecl, TargetDecl};
pub use error::SchemaError;
pub use schema::Schema;
pub use types::TypeRef;
