//! Class composition: declarations and mixins folded into component types.
//!
//! [`create_class`] merges every mixin and then the declaration into a single
//! [`Prototype`], evaluates the default props once, and lifts the winning
//! statics onto the resulting [`ComponentType`]. Instances are created with
//! [`ComponentType::construct`].
//!
//! ```
//! use classic_element::{Declaration, Props, Value, create_class};
//!
//! let logging = Declaration::new().method("log", |_, _| Ok(Value::from("logged")));
//! let button = create_class(
//!     &Declaration::new()
//!         .mixin(logging)
//!         .statics(Props::new().with("kind", "button"))
//!         .initial_state(|_| Props::new().with("pressed", false)),
//! );
//!
//! assert_eq!(button.static_member("kind"), Some(&Value::from("button")));
//! let instance = button.construct(Props::new(), Props::new());
//! assert!(instance.member("log").is_some());
//! assert_eq!(instance.state().get("pressed"), Some(&Value::from(false)));
//! ```

mod declaration;
mod instance;
mod prototype;

use std::{fmt, sync::Arc};

pub use declaration::Declaration;
pub use instance::ComponentInstance;
pub use prototype::{GET_DEFAULT_PROPS, GET_INITIAL_STATE, Prototype, SET_STATE};

use crate::{Props, Value};

struct ClassDef {
    prototype: Prototype,
    default_props: Arc<Props>,
    statics: Props,
}

/// A composed, constructible component type.
///
/// Cloning is cheap and shares the same type; equality is identity.
#[derive(Clone)]
pub struct ComponentType(Arc<ClassDef>);

impl ComponentType {
    /// Construct an instance from `props` and `context`.
    ///
    /// Both are stored before the initial-state hook runs, so the hook can
    /// read them.
    #[must_use]
    pub fn construct(&self, props: Props, context: Props) -> ComponentInstance {
        ComponentInstance::new(self.clone(), props, context)
    }

    /// The merged prototype.
    #[must_use]
    pub fn prototype(&self) -> &Prototype {
        &self.0.prototype
    }

    /// Default props computed at composition time.
    #[must_use]
    pub fn default_props(&self) -> &Props {
        &self.0.default_props
    }

    /// Statics lifted onto the type.
    #[must_use]
    pub fn statics(&self) -> &Props {
        &self.0.statics
    }

    /// Look up a single static member.
    #[must_use]
    pub fn static_member(&self, name: &str) -> Option<&Value> {
        self.0.statics.get(name)
    }

    /// Returns `true` when both handles refer to the same composed type.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for ComponentType {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentType")
            .field("members", &self.0.prototype.members().keys().collect::<Vec<_>>())
            .field("default_props", &self.0.default_props)
            .field("statics", &self.0.statics)
            .finish()
    }
}

/// Compose `declaration` and its mixins into a component type.
///
/// Members from later mixins override earlier ones and the declaration
/// overrides every mixin. A winning `getDefaultProps` method is invoked
/// exactly once here. Its `this` is a bare instance of the composed type
/// with empty props, context and state, so it can reach the prototype and
/// statics but nothing instance-specific.
#[must_use]
pub fn create_class(declaration: &Declaration) -> ComponentType {
    let prototype = Prototype::compose(declaration);
    let statics = prototype.statics().cloned().unwrap_or_default();
    let default_props = Arc::new(evaluate_default_props(&prototype, &statics));
    tracing::debug!(
        mixins = declaration.mixin_list().len(),
        members = prototype.members().len(),
        default_props = default_props.len(),
        statics = statics.len(),
        "composed component type"
    );
    ComponentType(Arc::new(ClassDef {
        prototype,
        default_props,
        statics,
    }))
}

fn evaluate_default_props(prototype: &Prototype, statics: &Props) -> Props {
    if !prototype.has_method(GET_DEFAULT_PROPS) {
        return Props::new();
    }
    let draft = ComponentType(Arc::new(ClassDef {
        prototype: prototype.clone(),
        default_props: Arc::new(Props::new()),
        statics: statics.clone(),
    }));
    ComponentInstance::bare(draft, Props::new(), Props::new())
        .run_hook(GET_DEFAULT_PROPS)
        .unwrap_or_default()
}
