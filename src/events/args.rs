//! # Emission payload (`Args`).
//!
//! [`Args`] carries the values that [`EventBus::emit`](crate::EventBus::emit)
//! forwards to every invoked listener: an ordered sequence of arbitrarily
//! typed values. The bus never inspects or transforms the payload; it hands
//! the same `Args` reference to each listener in the dispatch.
//!
//! Values are stored as `Arc<dyn Any + Send + Sync>`, so cloning an `Args`
//! (or sharing it across nested emissions) is cheap.
//!
//! ## Example
//! ```rust
//! use ripple::Args;
//!
//! let args = Args::new().with(42u32).with(String::from("renamed"));
//!
//! assert_eq!(args.len(), 2);
//! assert_eq!(args.get::<u32>(0), Some(&42));
//! assert_eq!(args.get::<String>(1).map(String::as_str), Some("renamed"));
//!
//! // Wrong index or wrong type: None, never a panic.
//! assert_eq!(args.get::<u32>(1), None);
//! assert_eq!(args.get::<u32>(5), None);
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Shared handle to a single payload value.
pub type ArgValue = Arc<dyn Any + Send + Sync>;

/// Ordered, heterogeneous payload of one emission.
///
/// Built with [`Args::with`] (builder style) or [`Args::push`], read back with
/// the typed accessor [`Args::get`].
#[derive(Clone, Default)]
pub struct Args {
    values: Vec<ArgValue>,
}

impl Args {
    /// Creates an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value (builder style).
    #[must_use]
    pub fn with(mut self, value: impl Any + Send + Sync) -> Self {
        self.values.push(Arc::new(value));
        self
    }

    /// Appends an already shared value without re-wrapping it.
    #[must_use]
    pub fn with_shared(mut self, value: ArgValue) -> Self {
        self.values.push(value);
        self
    }

    /// Appends a value in place.
    pub fn push(&mut self, value: impl Any + Send + Sync) {
        self.values.push(Arc::new(value));
    }

    /// Returns the value at `index` downcast to `T`.
    ///
    /// `None` if the index is out of range or the value is not a `T`.
    pub fn get<T: Any>(&self, index: usize) -> Option<&T> {
        self.values.get(index).and_then(|v| v.downcast_ref::<T>())
    }

    /// Number of values in the payload.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Args").field("len", &self.values.len()).finish()
    }
}
