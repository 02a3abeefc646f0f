//! Property bags and the shallow merge that combines them.
//!
//! Every other part of the crate builds its mappings through [`merge`]:
//! composed prototypes, component state, and element props. The merge is
//! deliberately shallow, so nested [`Value::Map`] handles are shared between
//! the inputs and the result rather than copied or merged recursively.

use std::collections::{BTreeMap, btree_map};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value as Json};

use crate::{ClassicResult, ClassicResultExt, Value};

/// Ordered string-keyed mapping of [`Value`]s.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Props(BTreeMap<String, Value>);

impl Props {
    /// Create an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert.
    ///
    /// ```
    /// use classic_element::Props;
    ///
    /// let props = Props::new().with("a", 1).with("b", "two");
    /// assert_eq!(props.len(), 2);
    /// ```
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert `value` under `key`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Remove `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Borrow the value under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` when `key` is present, even if its value is
    /// [`Value::Undefined`].
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the mapping has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Iterate over keys in order.
    pub fn keys(&self) -> btree_map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Build props from a JSON value.
    ///
    /// Objects contribute their top-level entries as [`Value::Data`]; any
    /// other JSON value yields an empty mapping.
    ///
    /// ```
    /// use classic_element::Props;
    /// use serde_json::json;
    ///
    /// let props = Props::from_json(json!({"port": 80}));
    /// assert_eq!(props.get("port").and_then(|v| v.as_i64()), Some(80));
    /// assert!(Props::from_json(json!("not a map")).is_empty());
    /// ```
    #[must_use]
    pub fn from_json(value: Json) -> Self {
        match value {
            Json::Object(map) => map.into_iter().map(|(k, v)| (k, Value::Data(v))).collect(),
            _ => Self::new(),
        }
    }

    /// Build props by serialising `value`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClassicError::Conversion`] when serialisation fails.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> ClassicResult<Self> {
        serde_json::to_value(value).into_classic().map(Self::from_json)
    }

    /// Render the mapping as a JSON object.
    ///
    /// Undefined entries are omitted, undefined list items become `null`,
    /// and elements render as `{"type": ..., "props": ...}`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClassicError::NotData`] naming the first method or
    /// component type encountered.
    pub fn to_json(&self) -> ClassicResult<Json> {
        self.to_json_at("")
    }

    /// Deserialise the mapping into `T`.
    ///
    /// # Errors
    ///
    /// Fails when the mapping holds non-data values or does not match `T`.
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> ClassicResult<T> {
        serde_json::from_value(self.to_json()?).into_classic()
    }

    pub(crate) fn to_json_at(&self, path: &str) -> ClassicResult<Json> {
        let mut object = Map::new();
        for (key, value) in &self.0 {
            let child = if path.is_empty() {
                key.clone()
            } else {
                format!("{path}.{key}")
            };
            if let Some(json) = value.to_json_at(&child)? {
                object.insert(key.clone(), json);
            }
        }
        Ok(Json::Object(object))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Props {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Props {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Props {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Shallow left-to-right merge of optional mappings into a fresh mapping.
///
/// Absent sources contribute nothing. When a key appears in several sources
/// the rightmost value wins, including [`Value::Undefined`]. Inputs are never
/// modified.
///
/// ```
/// use classic_element::{Props, merge};
///
/// let a = Props::new().with("a", 1).with("b", 1);
/// let b = Props::new().with("b", 2);
/// let merged = merge([Some(&a), None, Some(&b)]);
/// assert_eq!(merged, Props::new().with("a", 1).with("b", 2));
/// assert!(merge([]).is_empty());
/// ```
#[must_use]
pub fn merge<'a, I>(sources: I) -> Props
where
    I: IntoIterator<Item = Option<&'a Props>>,
{
    let mut merged = Props::new();
    for source in sources.into_iter().flatten() {
        merged.extend(source.iter().map(|(key, value)| (key.clone(), value.clone())));
    }
    merged
}
