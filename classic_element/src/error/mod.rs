//! Error types produced while calling members and converting props.

mod types;

pub use types::ClassicError;
