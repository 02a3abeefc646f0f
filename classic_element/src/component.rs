//! Minimal component base without composition or state.

use crate::Props;

/// Lower-level component primitive: stores props and context as given.
///
/// Unlike instances of a composed [`crate::ComponentType`], a `Component`
/// never initialises state.
///
/// ```
/// use classic_element::{Component, Props};
///
/// let props = Props::new().with("a", 1);
/// let context = Props::new().with("b", 2);
/// let component = Component::new(props.clone(), context.clone());
/// assert_eq!(component.props(), &props);
/// assert_eq!(component.context(), &context);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Component {
    props: Props,
    context: Props,
}

/// Same primitive as [`Component`], kept under the name callers use for
/// components whose output depends only on props and state.
pub type PureComponent = Component;

impl Component {
    /// Store `props` and `context` unchanged.
    #[must_use]
    pub const fn new(props: Props, context: Props) -> Self {
        Self { props, context }
    }

    /// Props supplied at construction.
    #[must_use]
    pub const fn props(&self) -> &Props {
        &self.props
    }

    /// Context supplied at construction.
    #[must_use]
    pub const fn context(&self) -> &Props {
        &self.context
    }
}
