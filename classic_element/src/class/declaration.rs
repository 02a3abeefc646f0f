//! Declarative description of a component type.

use std::fmt;

use crate::{ClassicResult, ComponentInstance, Method, Props, Value};

use super::{
    Prototype,
    prototype::{GET_DEFAULT_PROPS, GET_INITIAL_STATE},
};

/// Members, mixins and statics describing a component type.
///
/// Mixins are declarations too, but only the top-level declaration's mixin
/// list is consulted during composition. Lifecycle hooks are plain members
/// named `getDefaultProps` and `getInitialState`; [`Declaration::default_props`]
/// and [`Declaration::initial_state`] are typed shorthands that store them.
///
/// ```
/// use classic_element::{Declaration, Props, Value, create_class};
///
/// let greeting = Declaration::new()
///     .default_props(|_| Props::new().with("name", "world"))
///     .method("render", |this, _| {
///         let name = this.props().get("name").and_then(Value::as_str).unwrap_or("?");
///         Ok(Value::from(format!("Hello, {name}!")))
///     });
///
/// let greeter = create_class(&greeting);
/// let mut instance = greeter.construct(greeter.default_props().clone(), Props::new());
/// assert_eq!(instance.call("render", &[]).ok(), Some(Value::from("Hello, world!")));
/// ```
#[derive(Clone, Default)]
pub struct Declaration {
    pub(super) members: Props,
    pub(super) mixins: Vec<Self>,
    pub(super) statics: Option<Props>,
}

impl Declaration {
    /// Create an empty declaration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a callable member.
    #[must_use]
    pub fn method<F>(self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut ComponentInstance, &[Value]) -> ClassicResult<Value> + Send + Sync + 'static,
    {
        self.member(name, Method::new(f))
    }

    /// Define a member holding any value.
    #[must_use]
    pub fn member(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.members.insert(name, value);
        self
    }

    /// Append a mixin. Later mixins win over earlier ones.
    #[must_use]
    pub fn mixin(mut self, mixin: Self) -> Self {
        self.mixins.push(mixin);
        self
    }

    /// Append several mixins in order.
    #[must_use]
    pub fn mixins(mut self, mixins: impl IntoIterator<Item = Self>) -> Self {
        self.mixins.extend(mixins);
        self
    }

    /// Set the statics copied onto the composed type.
    #[must_use]
    pub fn statics(mut self, statics: Props) -> Self {
        self.statics = Some(statics);
        self
    }

    /// Define `getDefaultProps` from a hook reading the composed prototype.
    #[must_use]
    pub fn default_props<F>(self, hook: F) -> Self
    where
        F: Fn(&Prototype) -> Props + Send + Sync + 'static,
    {
        self.method(GET_DEFAULT_PROPS, move |this, _| {
            Ok(Value::from(hook(this.component_type().prototype())))
        })
    }

    /// Define `getInitialState` from a hook reading the new instance.
    #[must_use]
    pub fn initial_state<F>(self, hook: F) -> Self
    where
        F: Fn(&ComponentInstance) -> Props + Send + Sync + 'static,
    {
        self.method(GET_INITIAL_STATE, move |this, _| Ok(Value::from(hook(this))))
    }

    /// Members declared directly on this declaration.
    #[must_use]
    pub const fn members(&self) -> &Props {
        &self.members
    }

    /// Mixins in application order.
    #[must_use]
    pub fn mixin_list(&self) -> &[Self] {
        &self.mixins
    }
}

impl fmt::Debug for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Declaration")
            .field("members", &self.members)
            .field("mixins", &self.mixins.len())
            .field("statics", &self.statics)
            .finish()
    }
}
