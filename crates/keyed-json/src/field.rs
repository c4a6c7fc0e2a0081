//! Field capabilities and the type-erased interface the engine drives.

use std::borrow::Cow;
use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::FieldError;
use crate::transform::Transform;

/// Type-erased view of one keyed field.
///
/// The engine operates only through this interface, never on concrete
/// capability types.
pub trait KeyedField {
    /// The explicit wire-key override, when one was supplied at construction.
    fn explicit_key(&self) -> Option<&str>;

    /// Whether a missing key is tolerated on decode and an absent value is
    /// omitted on encode.
    fn is_optional(&self) -> bool;

    /// Decodes the raw container value into the field's storage.
    fn decode_value(&mut self, raw: &Value) -> Result<(), FieldError>;

    /// Reads the field's current value as a raw container value.
    ///
    /// `Ok(None)` means the key is omitted from the output entirely.
    fn encode_value(&self) -> Result<Option<Value>, FieldError>;
}

/// Required keyed field.
///
/// The key is fixed at construction: [`Keyed::with_key`] sets an explicit
/// wire key, [`Keyed::new`] (and `Default`) leaves it to the declared field
/// name. `T` may be any serde-compatible type, including other registered
/// keyed objects, which is what makes nesting work.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyed<T> {
    key: Option<Cow<'static, str>>,
    value: T,
}

impl<T> Keyed<T> {
    /// Keyed under the field's own declared name.
    pub fn new(value: T) -> Self {
        Self { key: None, value }
    }

    /// Keyed under an explicit wire key.
    pub fn with_key(key: impl Into<Cow<'static, str>>, value: T) -> Self {
        Self {
            key: Some(key.into()),
            value,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn set(&mut self, value: T) {
        self.value = value;
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Default> Default for Keyed<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Deref for Keyed<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for Keyed<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T> KeyedField for Keyed<T>
where
    T: Serialize + DeserializeOwned,
{
    fn explicit_key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    fn is_optional(&self) -> bool {
        false
    }

    fn decode_value(&mut self, raw: &Value) -> Result<(), FieldError> {
        self.value = serde_json::from_value(raw.clone())?;
        Ok(())
    }

    fn encode_value(&self) -> Result<Option<Value>, FieldError> {
        Ok(Some(serde_json::to_value(&self.value)?))
    }
}

/// Optional keyed field.
///
/// Decode tolerates a missing key (the value stays as it was); encode omits
/// the key entirely when the value is `None` — no null token is written.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionalKeyed<T> {
    key: Option<Cow<'static, str>>,
    value: Option<T>,
}

impl<T> OptionalKeyed<T> {
    pub fn new(value: Option<T>) -> Self {
        Self { key: None, value }
    }

    pub fn with_key(key: impl Into<Cow<'static, str>>, value: Option<T>) -> Self {
        Self {
            key: Some(key.into()),
            value,
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn set(&mut self, value: Option<T>) {
        self.value = value;
    }

    pub fn into_inner(self) -> Option<T> {
        self.value
    }
}

impl<T> Default for OptionalKeyed<T> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<T> Deref for OptionalKeyed<T> {
    type Target = Option<T>;

    fn deref(&self) -> &Option<T> {
        &self.value
    }
}

impl<T> DerefMut for OptionalKeyed<T> {
    fn deref_mut(&mut self) -> &mut Option<T> {
        &mut self.value
    }
}

impl<T> KeyedField for OptionalKeyed<T>
where
    T: Serialize + DeserializeOwned,
{
    fn explicit_key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    fn is_optional(&self) -> bool {
        true
    }

    fn decode_value(&mut self, raw: &Value) -> Result<(), FieldError> {
        // A present key decodes like a required field; wire null reads as
        // absent rather than a mismatch.
        self.value = serde_json::from_value(raw.clone())?;
        Ok(())
    }

    fn encode_value(&self) -> Result<Option<Value>, FieldError> {
        match &self.value {
            None => Ok(None),
            Some(value) => Ok(Some(serde_json::to_value(value)?)),
        }
    }
}

/// Required keyed field whose wire reads and writes pass through a
/// [`Transform`].
///
/// `T` is the field representation held in memory, `W` the wire
/// representation stored in the container.
#[derive(Debug)]
pub struct KeyedTransform<T, W> {
    key: Option<Cow<'static, str>>,
    transform: Transform<W, T>,
    value: T,
}

impl<T, W> KeyedTransform<T, W> {
    pub fn new(transform: Transform<W, T>, value: T) -> Self {
        Self {
            key: None,
            transform,
            value,
        }
    }

    pub fn with_key(key: impl Into<Cow<'static, str>>, transform: Transform<W, T>, value: T) -> Self {
        Self {
            key: Some(key.into()),
            transform,
            value,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn set(&mut self, value: T) {
        self.value = value;
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, W> Deref for KeyedTransform<T, W> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T, W> DerefMut for KeyedTransform<T, W> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T, W> KeyedField for KeyedTransform<T, W>
where
    W: Serialize + DeserializeOwned,
{
    fn explicit_key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    fn is_optional(&self) -> bool {
        false
    }

    fn decode_value(&mut self, raw: &Value) -> Result<(), FieldError> {
        let wire: W = serde_json::from_value(raw.clone())?;
        self.value = self.transform.decode(wire)?;
        Ok(())
    }

    fn encode_value(&self) -> Result<Option<Value>, FieldError> {
        let wire = self.transform.encode(&self.value)?;
        Ok(Some(serde_json::to_value(wire)?))
    }
}
