use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// An opaque handle to an object of the host application.
///
/// The engine never looks inside a host object; it only hands it back to the host adapter, to
/// attribute accessors and to [`HostType`] tests. Cloning is cheap.
#[derive(Clone)]
pub struct HostObject(Arc<dyn Any + Send + Sync>);

impl HostObject {
    /// Wraps `value` into a new handle.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Wraps an already shared value.
    pub fn from_arc(value: Arc<dyn Any + Send + Sync>) -> Self {
        Self(value)
    }

    /// Returns a reference to the wrapped value if it is of type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Returns whether the wrapped value is of type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.0.is::<T>()
    }

    /// Returns whether both handles point to the same host object.
    pub fn ptr_eq(&self, other: &HostObject) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for HostObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HostObject(..)")
    }
}

/// A value produced by the host, either from an attribute accessor or from instance enumeration.
#[derive(Clone, Debug)]
pub enum HostValue {
    /// The host returned "nothing" for this entry. Such entries are dropped.
    Null,
    /// A host object, which may become an [`Instance`](crate::Instance).
    Object(HostObject),
    String(String),
    Boolean(bool),
    Double(f64),
    Integer(i64),
}

impl From<HostObject> for HostValue {
    fn from(value: HostObject) -> Self {
        HostValue::Object(value)
    }
}

impl From<String> for HostValue {
    fn from(value: String) -> Self {
        HostValue::String(value)
    }
}

impl From<&str> for HostValue {
    fn from(value: &str) -> Self {
        HostValue::String(value.to_owned())
    }
}

impl From<bool> for HostValue {
    fn from(value: bool) -> Self {
        HostValue::Boolean(value)
    }
}

impl From<f64> for HostValue {
    fn from(value: f64) -> Self {
        HostValue::Double(value)
    }
}

impl From<i64> for HostValue {
    fn from(value: i64) -> Self {
        HostValue::Integer(value)
    }
}

impl<T: Into<HostValue>> From<Option<T>> for HostValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(HostValue::Null, Into::into)
    }
}

type TypeTest = dyn Fn(&HostObject) -> bool + Send + Sync;

/// The host-side type a schema class is associated with.
///
/// A host type decides whether a host object "is an instance of" the class, including any
/// host-side subtyping. It is used to classify host objects and to filter attribute values.
#[derive(Clone)]
pub struct HostType {
    name: Arc<str>,
    test: Arc<TypeTest>,
}

impl HostType {
    /// Creates a host type from an arbitrary membership test.
    pub fn new(
        name: impl Into<Arc<str>>,
        test: impl Fn(&HostObject) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            test: Arc::new(test),
        }
    }

    /// Creates a host type whose members are exactly the host objects of the Rust type `T`.
    pub fn of<T: Any>() -> Self {
        Self::new(std::any::type_name::<T>(), HostObject::is::<T>)
    }

    /// Returns a human-readable name of the host type.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether `object` is a member of this host type.
    pub fn is_instance(&self, object: &HostObject) -> bool {
        (self.test)(object)
    }
}

impl fmt::Debug for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HostType").field(&self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Book;
    struct Author;

    #[test]
    fn test_host_type_of() {
        let book = HostObject::new(Book);
        let author = HostObject::new(Author);
        let book_type = HostType::of::<Book>();

        assert!(book_type.is_instance(&book));
        assert!(!book_type.is_instance(&author));
    }

    #[test]
    fn test_option_into_host_value() {
        assert!(matches!(HostValue::from(None::<i64>), HostValue::Null));
        assert!(matches!(HostValue::from(Some(3_i64)), HostValue::Integer(3)));
    }
}
