//! Traversal helpers for an element's `children` value.
//!
//! A children value is undefined, a single child, or a list of children that
//! may itself contain lists. These helpers see the flattened sequence with
//! undefined entries removed.

use std::sync::Arc;

use crate::{ClassicError, ClassicResult, Value};

/// Flatten `children` into an owned sequence, dropping undefined entries.
///
/// ```
/// use classic_element::{Value, children};
///
/// let nested = Value::List(vec![
///     Value::from("a"),
///     Value::List(vec![Value::from("b"), Value::Undefined]),
/// ]);
/// assert_eq!(children::to_vec(&nested), vec![Value::from("a"), Value::from("b")]);
/// ```
#[must_use]
pub fn to_vec(children: &Value) -> Vec<Value> {
    let mut flat = Vec::new();
    for_each(children, |child| flat.push(child.clone()));
    flat
}

/// Number of children after flattening.
#[must_use]
pub fn count(children: &Value) -> usize {
    let mut total = 0;
    for_each(children, |_| total += 1);
    total
}

/// Visit each flattened child in order.
pub fn for_each<F: FnMut(&Value)>(children: &Value, mut f: F) {
    visit(children, &mut f);
}

/// Map each flattened child in order.
pub fn map<T, F: FnMut(&Value) -> T>(children: &Value, mut f: F) -> Vec<T> {
    let mut mapped = Vec::new();
    for_each(children, |child| mapped.push(f(child)));
    mapped
}

/// Borrow the only child.
///
/// # Errors
///
/// Returns [`ClassicError::OnlyChild`] unless `children` is a single
/// non-list, defined value.
pub fn only(children: &Value) -> ClassicResult<&Value> {
    match children {
        Value::Undefined => Err(Arc::new(ClassicError::OnlyChild { count: 0 })),
        Value::List(_) => Err(Arc::new(ClassicError::OnlyChild {
            count: count(children),
        })),
        single => Ok(single),
    }
}

fn visit<F: FnMut(&Value)>(children: &Value, f: &mut F) {
    match children {
        Value::Undefined => {}
        Value::List(items) => {
            for item in items {
                visit(item, f);
            }
        }
        child => f(child),
    }
}
