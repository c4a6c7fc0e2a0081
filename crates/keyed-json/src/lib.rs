//! Opt-in keyed field mapping over serde_json.
//!
//! Fields participate in encode/decode by being wrapped in a keyed
//! capability — [`Keyed`], [`OptionalKeyed`], or [`KeyedTransform`] — and
//! listed once in a [`keyed_object!`] registration. The mapping engine
//! visits only registered fields, resolves each wire key (explicit override
//! or the field's declared name), and drives a [`serde_json::Map`]
//! container. The generated serde impls delegate to the engine, so
//! registered types plug directly into `serde_json` entry points and nest
//! recursively.

pub mod engine;

mod error;
mod field;
mod object;
mod transform;

pub use error::{FieldError, KeyedError, TransformError};
pub use field::{Keyed, KeyedField, KeyedTransform, OptionalKeyed};
pub use object::{FieldBinding, FieldBindingMut, KeyedObject};
pub use transform::Transform;

/// The keyed-value container both engine directions operate on.
pub type Object = serde_json::Map<String, serde_json::Value>;
