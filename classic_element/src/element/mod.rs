//! Element descriptors and the builder and cloner that produce them.
//!
//! An [`Element`] pairs an [`ElementType`] with a props mapping that always
//! carries a `children` entry. Children are passed as an explicit sequence:
//!
//! - no children: the explicit props' `children` is kept (or left undefined);
//! - one child: stored as-is;
//! - several children: stored as an ordered [`Value::List`].
//!
//! ```
//! use classic_element::{Props, Value, clone_element, create_element};
//!
//! let original = create_element("div", None, vec![Value::from("orig")]);
//! let kept = clone_element(&original, None, vec![]);
//! assert_eq!(kept.children(), &Value::from("orig"));
//!
//! let replaced = clone_element(&original, Some(&Props::new().with("id", 7)), vec![
//!     Value::from("a"),
//!     Value::from("b"),
//! ]);
//! assert_eq!(replaced.children().as_list().map(<[Value]>::len), Some(2));
//! assert_eq!(replaced.props().get("id"), Some(&Value::from(7)));
//! ```

use std::sync::Arc;

use serde_json::{Value as Json, json};

use crate::{ClassicError, ClassicResult, ComponentType, Props, Value, merge};

/// Key under which element children are stored.
pub const CHILDREN: &str = "children";

static UNDEFINED: Value = Value::Undefined;

/// What an element describes: a primitive tag or a composed component.
#[derive(Clone, Debug, PartialEq)]
pub enum ElementType {
    /// Primitive identifier such as `"div"`.
    Tag(String),
    /// Composed component type.
    Component(ComponentType),
}

impl ElementType {
    /// Default props contributed by the type. Tags have none.
    #[must_use]
    pub fn default_props(&self) -> Option<&Props> {
        match self {
            Self::Tag(_) => None,
            Self::Component(component) => Some(component.default_props()),
        }
    }

    /// Borrow the tag name, if any.
    #[must_use]
    pub fn as_tag(&self) -> Option<&str> {
        match self {
            Self::Tag(tag) => Some(tag.as_str()),
            Self::Component(_) => None,
        }
    }

    /// Borrow the component type, if any.
    #[must_use]
    pub const fn as_component(&self) -> Option<&ComponentType> {
        match self {
            Self::Tag(_) => None,
            Self::Component(component) => Some(component),
        }
    }
}

impl From<&str> for ElementType {
    fn from(tag: &str) -> Self {
        Self::Tag(tag.to_owned())
    }
}

impl From<String> for ElementType {
    fn from(tag: String) -> Self {
        Self::Tag(tag)
    }
}

impl From<ComponentType> for ElementType {
    fn from(component: ComponentType) -> Self {
        Self::Component(component)
    }
}

impl From<&ComponentType> for ElementType {
    fn from(component: &ComponentType) -> Self {
        Self::Component(component.clone())
    }
}

/// Immutable description of "an instance of this type with these props".
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    element_type: ElementType,
    props: Props,
}

impl Element {
    /// The element's type.
    #[must_use]
    pub const fn element_type(&self) -> &ElementType {
        &self.element_type
    }

    /// The merged props, always including `children`.
    #[must_use]
    pub const fn props(&self) -> &Props {
        &self.props
    }

    /// The normalised children value.
    #[must_use]
    pub fn children(&self) -> &Value {
        self.props.get(CHILDREN).unwrap_or(&UNDEFINED)
    }

    /// Render as `{"type": tag, "props": {...}}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClassicError::NotData`] for component-typed elements and for
    /// props holding methods or component types.
    pub fn to_json(&self) -> ClassicResult<Json> {
        self.to_json_at("")
    }

    pub(crate) fn to_json_at(&self, path: &str) -> ClassicResult<Json> {
        let scoped = |field: &str| {
            if path.is_empty() {
                field.to_owned()
            } else {
                format!("{path}.{field}")
            }
        };
        let ElementType::Tag(tag) = &self.element_type else {
            return Err(Arc::new(ClassicError::NotData {
                path: scoped("type"),
                kind: "component type",
            }));
        };
        let props = self.props.to_json_at(&scoped("props"))?;
        Ok(json!({ "type": tag, "props": props }))
    }
}

/// Build an element from a type, optional props and child values.
///
/// The result props are `merge(type defaults, props, {children})`, so
/// supplied children always replace a `children` entry in `props`.
///
/// With no child arguments the children come from `props` alone. Default
/// `children` are deliberately not consulted: a `children` entry in the
/// type's default props is replaced by [`Value::Undefined`] unless `props`
/// carries its own, so an element's children reflect only what its caller
/// passed.
///
/// ```
/// use classic_element::{Props, Value, create_element};
///
/// let element = create_element("div", Some(&Props::new().with("a", 1)), vec![]);
/// assert_eq!(
///     element.props(),
///     &Props::new().with("a", 1).with("children", Value::Undefined),
/// );
/// ```
#[must_use]
pub fn create_element(
    element_type: impl Into<ElementType>,
    props: Option<&Props>,
    children: Vec<Value>,
) -> Element {
    let element_type = element_type.into();
    let children = normalise_children(props, children);
    let child_layer = Props::new().with(CHILDREN, children);
    let merged = merge([element_type.default_props(), props, Some(&child_layer)]);
    Element {
        element_type,
        props: merged,
    }
}

/// Build a new element from `element`, overlaying `props` and, when any are
/// supplied, replacing the children.
///
/// The source element is left untouched.
#[must_use]
pub fn clone_element(element: &Element, props: Option<&Props>, children: Vec<Value>) -> Element {
    let overlaid = merge([Some(&element.props), props]);
    tracing::trace!(
        overrides = props.map_or(0, Props::len),
        children = children.len(),
        "cloning element"
    );
    create_element(element.element_type.clone(), Some(&overlaid), children)
}

fn normalise_children(props: Option<&Props>, mut children: Vec<Value>) -> Value {
    match children.len() {
        0 => props
            .and_then(|explicit| explicit.get(CHILDREN))
            .cloned()
            .unwrap_or_default(),
        1 => children.pop().unwrap_or_default(),
        _ => Value::List(children),
    }
}
