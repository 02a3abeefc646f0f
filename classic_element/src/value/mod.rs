//! Dynamic values stored in props, state, statics and declarations.

use std::{fmt, sync::Arc};

use serde_json::Value as Json;

use crate::{ClassicError, ClassicResult, ComponentInstance, ComponentType, Element, Props};

/// Signature of a callable member bound to a component instance.
pub type MethodFn =
    dyn Fn(&mut ComponentInstance, &[Value]) -> ClassicResult<Value> + Send + Sync;

/// Shared handle to a member function.
///
/// Cloning a method shares the underlying closure, and equality is identity:
/// two methods are equal only when they are the same closure.
#[derive(Clone)]
pub struct Method(Arc<MethodFn>);

impl Method {
    /// Wrap a closure as a method.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut ComponentInstance, &[Value]) -> ClassicResult<Value> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invoke the method with `this` bound to `instance`.
    ///
    /// # Errors
    ///
    /// Returns whatever error the wrapped closure produces.
    pub fn call(&self, instance: &mut ComponentInstance, args: &[Value]) -> ClassicResult<Value> {
        (self.0)(instance, args)
    }

    /// Returns `true` when both handles point at the same closure.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Method({:p})", Arc::as_ptr(&self.0))
    }
}

impl PartialEq for Method {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

/// A prop value.
///
/// `Undefined` marks a key that is present without a value, which is how an
/// element carries `children` when none were supplied.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// Present key without a value.
    #[default]
    Undefined,
    /// Plain data, including `null`.
    Data(Json),
    /// Nested mapping shared by reference.
    Map(Arc<Props>),
    /// Ordered sequence of values.
    List(Vec<Value>),
    /// Element descriptor, typically a child.
    Element(Arc<Element>),
    /// Component type reference.
    Type(ComponentType),
    /// Callable member.
    Method(Method),
}

impl Value {
    /// Returns `true` for [`Value::Undefined`].
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Short name of the variant, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Data(_) => "data",
            Self::Map(_) => "map",
            Self::List(_) => "list",
            Self::Element(_) => "element",
            Self::Type(_) => "component type",
            Self::Method(_) => "method",
        }
    }

    /// Borrow the plain data, if any.
    #[must_use]
    pub const fn as_data(&self) -> Option<&Json> {
        match self {
            Self::Data(data) => Some(data),
            _ => None,
        }
    }

    /// Borrow string data, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_data().and_then(Json::as_str)
    }

    /// Read integer data, if any.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_data().and_then(Json::as_i64)
    }

    /// Borrow the shared mapping handle, if any.
    #[must_use]
    pub const fn as_map(&self) -> Option<&Arc<Props>> {
        match self {
            Self::Map(props) => Some(props),
            _ => None,
        }
    }

    /// Borrow the sequence, if any.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Borrow the element, if any.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element.as_ref()),
            _ => None,
        }
    }

    /// Borrow the component type, if any.
    #[must_use]
    pub const fn as_type(&self) -> Option<&ComponentType> {
        match self {
            Self::Type(ty) => Some(ty),
            _ => None,
        }
    }

    /// Borrow the method, if any.
    #[must_use]
    pub const fn as_method(&self) -> Option<&Method> {
        match self {
            Self::Method(method) => Some(method),
            _ => None,
        }
    }

    /// Convert to JSON, returning `None` for [`Value::Undefined`].
    pub(crate) fn to_json_at(&self, path: &str) -> ClassicResult<Option<Json>> {
        match self {
            Self::Undefined => Ok(None),
            Self::Data(data) => Ok(Some(data.clone())),
            Self::Map(props) => props.to_json_at(path).map(Some),
            Self::List(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    item.to_json_at(&format!("{path}[{index}]"))
                        .map(|json| json.unwrap_or(Json::Null))
                })
                .collect::<ClassicResult<Vec<_>>>()
                .map(|array| Some(Json::Array(array))),
            Self::Element(element) => element.to_json_at(path).map(Some),
            Self::Type(_) | Self::Method(_) => Err(Arc::new(ClassicError::NotData {
                path: path.to_owned(),
                kind: self.kind(),
            })),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) => true,
            (Self::Data(a), Self::Data(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Element(a), Self::Element(b)) => a == b,
            (Self::Type(a), Self::Type(b)) => a == b,
            (Self::Method(a), Self::Method(b)) => a == b,
            _ => false,
        }
    }
}

macro_rules! data_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Data(Json::from(value))
                }
            }
        )*
    };
}

data_from!(bool, i32, i64, u32, u64, f64, &str, String);

impl From<Json> for Value {
    fn from(value: Json) -> Self {
        Self::Data(value)
    }
}

impl From<Props> for Value {
    fn from(value: Props) -> Self {
        Self::Map(Arc::new(value))
    }
}

impl From<Arc<Props>> for Value {
    fn from(value: Arc<Props>) -> Self {
        Self::Map(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::List(value)
    }
}

impl From<Element> for Value {
    fn from(value: Element) -> Self {
        Self::Element(Arc::new(value))
    }
}

impl From<ComponentType> for Value {
    fn from(value: ComponentType) -> Self {
        Self::Type(value)
    }
}

impl From<Method> for Value {
    fn from(value: Method) -> Self {
        Self::Method(value)
    }
}
