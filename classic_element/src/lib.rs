//! Mixin-composed component types and element descriptors.
//!
//! This crate models components as data. [`create_class`] folds a
//! [`Declaration`] and its mixins into a constructible [`ComponentType`];
//! [`create_element`] and [`clone_element`] build [`Element`] descriptors
//! whose props merge type defaults, explicit props and children. Nothing
//! here renders or schedules anything.
//!
//! ```
//! use classic_element::{Declaration, Props, Value, clone_element, create_class, create_element};
//!
//! let label = create_class(
//!     &Declaration::new().default_props(|_| Props::new().with("colour", "grey")),
//! );
//! let element = create_element(&label, Some(&Props::new().with("text", "Save")), vec![]);
//! assert_eq!(element.props().get("colour"), Some(&Value::from("grey")));
//!
//! let highlighted = clone_element(&element, Some(&Props::new().with("colour", "gold")), vec![]);
//! assert_eq!(highlighted.props().get("colour"), Some(&Value::from("gold")));
//! assert_eq!(element.props().get("colour"), Some(&Value::from("grey")));
//! ```

use std::sync::Arc;

pub mod children;
mod class;
mod component;
mod element;
mod error;
mod props;
mod result_ext;
mod value;

pub use class::{
    ComponentInstance, ComponentType, Declaration, GET_DEFAULT_PROPS, GET_INITIAL_STATE,
    Prototype, SET_STATE, create_class,
};
pub use component::{Component, PureComponent};
pub use element::{CHILDREN, Element, ElementType, clone_element, create_element};
pub use error::ClassicError;
pub use props::{Props, merge};
pub use result_ext::ClassicResultExt;
pub use value::{Method, MethodFn, Value};

/// Result type used throughout the crate.
pub type ClassicResult<T> = Result<T, Arc<ClassicError>>;
