//! Instances of composed component types.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::{ClassicError, ClassicResult, Props, Value, merge};

use super::{
    ComponentType,
    prototype::{GET_INITIAL_STATE, SET_STATE},
};

/// A constructed component: props, context and state.
///
/// Props and context are kept exactly as supplied. State is replaced with a
/// freshly merged mapping on every [`ComponentInstance::set_state`].
#[derive(Clone, Debug)]
pub struct ComponentInstance {
    component_type: ComponentType,
    props: Props,
    context: Props,
    state: Arc<Props>,
}

impl ComponentInstance {
    pub(super) fn new(component_type: ComponentType, props: Props, context: Props) -> Self {
        let mut instance = Self::bare(component_type, props, context);
        if let Some(state) = instance.run_hook(GET_INITIAL_STATE) {
            instance.state = Arc::new(state);
        }
        instance
    }

    /// An instance with empty state whose initial-state hook has not run.
    pub(super) fn bare(component_type: ComponentType, props: Props, context: Props) -> Self {
        Self {
            component_type,
            props,
            context,
            state: Arc::new(Props::new()),
        }
    }

    /// Run the lifecycle method `name` and read its result as a mapping.
    ///
    /// Yields `None` when no such method exists. A hook that fails or returns
    /// anything other than a mapping is logged and also yields `None`.
    pub(super) fn run_hook(&mut self, name: &str) -> Option<Props> {
        if !self.component_type.prototype().has_method(name) {
            return None;
        }
        match self.call(name, &[]) {
            Ok(Value::Map(props)) => Some(Arc::unwrap_or_clone(props)),
            Ok(Value::Data(json)) if json.is_object() => Some(Props::from_json(json)),
            Ok(other) => {
                tracing::warn!(
                    hook = name,
                    kind = other.kind(),
                    "lifecycle hook returned a non-map value"
                );
                None
            }
            Err(err) => {
                tracing::warn!(hook = name, error = %err, "lifecycle hook failed");
                None
            }
        }
    }

    /// The type this instance was constructed from.
    #[must_use]
    pub const fn component_type(&self) -> &ComponentType {
        &self.component_type
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

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &Props {
        &self.state
    }

    /// Shared handle to the current state mapping.
    #[must_use]
    pub const fn state_handle(&self) -> &Arc<Props> {
        &self.state
    }

    /// Replace state with `merge(state, partial)`.
    pub fn set_state(&mut self, partial: &Props) {
        let next = merge([Some(self.state.as_ref()), Some(partial)]);
        tracing::trace!(
            previous = self.state.len(),
            next = next.len(),
            "replacing component state"
        );
        self.state = Arc::new(next);
    }

    /// Deserialise the current state into `T`.
    ///
    /// # Errors
    ///
    /// Fails when state holds non-data values or does not match `T`.
    pub fn state_as<T: DeserializeOwned>(&self) -> ClassicResult<T> {
        self.state.deserialize_into()
    }

    /// Look up a member on the prototype.
    #[must_use]
    pub fn member(&self, name: &str) -> Option<&Value> {
        self.component_type.prototype().member(name)
    }

    /// Invoke the member `name` with `this` bound to the instance.
    ///
    /// `setState` takes a single mapping argument and returns
    /// [`Value::Undefined`]. Lifecycle hooks are ordinary members, so
    /// `getInitialState` can be called again to recompute the initial state
    /// without applying it.
    ///
    /// # Errors
    ///
    /// Returns [`ClassicError::MissingMember`] when the prototype lacks
    /// `name`, [`ClassicError::NotCallable`] when the member holds data, and
    /// any error raised by the method itself.
    pub fn call(&mut self, name: &str, args: &[Value]) -> ClassicResult<Value> {
        if name == SET_STATE {
            return self.call_set_state(args);
        }
        let method = match self.member(name) {
            Some(Value::Method(method)) => method.clone(),
            Some(_) => {
                return Err(Arc::new(ClassicError::NotCallable {
                    name: name.to_owned(),
                }));
            }
            None => {
                return Err(Arc::new(ClassicError::MissingMember {
                    name: name.to_owned(),
                }));
            }
        };
        method.call(self, args)
    }

    fn call_set_state(&mut self, args: &[Value]) -> ClassicResult<Value> {
        let partial = match args.first() {
            Some(Value::Map(partial)) => Arc::clone(partial),
            Some(Value::Undefined) | None => Arc::new(Props::new()),
            Some(other) => {
                return Err(Arc::new(ClassicError::InvalidArgument {
                    name: SET_STATE.to_owned(),
                    message: format!("expected a map, found {}", other.kind()),
                }));
            }
        };
        self.set_state(&partial);
        Ok(Value::Undefined)
    }
}
