//! Step definitions for the behavioural scenarios.

mod class_steps;
mod element_steps;

use classic_element::{Props, Value};

/// Parse `a=1,b=2` into props holding integer or string values.
pub fn parse_props(spec: &str) -> Props {
    spec.split(',')
        .filter_map(|pair| pair.split_once('='))
        .map(|(key, raw)| {
            let value = raw
                .trim()
                .parse::<i64>()
                .map_or_else(|_| Value::from(raw.trim()), Value::from);
            (key.trim().to_owned(), value)
        })
        .collect()
}
