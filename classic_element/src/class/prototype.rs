//! Merged member table shared by every instance of a composed type.

use std::iter;

use crate::{Props, Value, merge};

use super::declaration::Declaration;

/// Name under which the built-in state mutator is exposed.
pub const SET_STATE: &str = "setState";

/// Member evaluated once at composition to produce the type's default props.
pub const GET_DEFAULT_PROPS: &str = "getDefaultProps";

/// Member evaluated on every new instance to produce its initial state.
pub const GET_INITIAL_STATE: &str = "getInitialState";

/// The composed prototype: mixin and declaration members folded in order.
#[derive(Clone, Debug)]
pub struct Prototype {
    members: Props,
    statics: Option<Props>,
}

impl Prototype {
    /// Fold the declaration's mixins and then the declaration itself.
    ///
    /// Members, lifecycle hooks included, merge key by key with later layers
    /// winning. Statics are taken whole from the last layer that defines
    /// them, so statics from different mixins are never unioned.
    pub(super) fn compose(declaration: &Declaration) -> Self {
        let layers = || declaration.mixins.iter().chain(iter::once(declaration));
        Self {
            members: merge(layers().map(|layer| Some(&layer.members))),
            statics: layers().rev().find_map(|layer| layer.statics.clone()),
        }
    }

    /// Borrow a stored member. The built-in `setState` is not stored.
    #[must_use]
    pub fn member(&self, name: &str) -> Option<&Value> {
        self.members.get(name)
    }

    /// Returns `true` when `name` resolves to a stored or built-in member.
    #[must_use]
    pub fn has_member(&self, name: &str) -> bool {
        name == SET_STATE || self.members.contains_key(name)
    }

    /// All stored members.
    #[must_use]
    pub const fn members(&self) -> &Props {
        &self.members
    }

    /// The statics mapping that won composition, if any.
    #[must_use]
    pub const fn statics(&self) -> Option<&Props> {
        self.statics.as_ref()
    }

    pub(super) fn has_method(&self, name: &str) -> bool {
        matches!(self.members.get(name), Some(Value::Method(_)))
    }
}
