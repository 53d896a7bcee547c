use std::fmt;

macro_rules! entity_id {
    ($name:ident, $prefix:literal) => {
        /// Identifies an entity within one schema. Ids are dense and follow declaration order.
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
        pub struct $name(usize);

        impl $name {
            /// Creates an id from its position in the schema's declaration list.
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Returns the position of the entity in the schema's declaration list.
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

entity_id!(ClassId, "class");
entity_id!(AttributeId, "attribute");
