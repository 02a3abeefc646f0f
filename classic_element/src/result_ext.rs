//! Lifting foreign errors into [`ClassicResult`].
//!
//! Every fallible call in this crate shares one error handle,
//! `Arc<ClassicError>`. Code that calls `serde_json` or another library
//! whose error converts into [`ClassicError`] can finish with
//! [`ClassicResultExt::into_classic`] and then use `?` as usual.
//!
//! ```
//! use classic_element::{ClassicResult, ClassicResultExt, Props};
//!
//! fn theme_props(raw: &str) -> ClassicResult<Props> {
//!     let json = serde_json::from_str(raw).into_classic()?;
//!     Ok(Props::from_json(json))
//! }
//!
//! assert_eq!(theme_props(r#"{"dark": true}"#).ok(), Some(Props::new().with("dark", true)));
//! assert!(theme_props("{").is_err());
//! ```

use std::sync::Arc;

use crate::{ClassicError, ClassicResult};

/// Adds [`into_classic`](Self::into_classic) to results whose error type
/// converts into [`ClassicError`].
pub trait ClassicResultExt<T, E> {
    /// Keep the success value and wrap a failure in a shared
    /// [`ClassicError`].
    ///
    /// # Errors
    ///
    /// Returns the converted error when `self` is `Err`.
    fn into_classic(self) -> ClassicResult<T>;
}

impl<T, E> ClassicResultExt<T, E> for Result<T, E>
where
    E: Into<ClassicError>,
{
    fn into_classic(self) -> ClassicResult<T> {
        self.map_err(|err| Arc::new(err.into()))
    }
}
