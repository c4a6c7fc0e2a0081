//! Bidirectional value transforms.

use std::fmt;

use crate::error::TransformError;

type DecodeFn<W, F> = Box<dyn Fn(W) -> Result<F, TransformError> + Send + Sync>;
type EncodeFn<W, F> = Box<dyn Fn(&F) -> Result<W, TransformError> + Send + Sync>;

/// A stateless pair of conversions between the wire representation `W` and
/// the field representation `F`.
///
/// The decode direction runs when reading from the container, the encode
/// direction when writing to it. Either direction may fail with a
/// [`TransformError`]; in practice the encode direction is the one that
/// narrows (e.g. numeric text to integer) and rejects.
pub struct Transform<W, F> {
    decode: DecodeFn<W, F>,
    encode: EncodeFn<W, F>,
}

impl<W, F> Transform<W, F> {
    pub fn new(
        decode: impl Fn(W) -> Result<F, TransformError> + Send + Sync + 'static,
        encode: impl Fn(&F) -> Result<W, TransformError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            decode: Box::new(decode),
            encode: Box::new(encode),
        }
    }

    /// Builds a transform from two conversions that cannot fail.
    pub fn infallible(
        decode: impl Fn(W) -> F + Send + Sync + 'static,
        encode: impl Fn(&F) -> W + Send + Sync + 'static,
    ) -> Self {
        Self::new(move |wire| Ok(decode(wire)), move |field| Ok(encode(field)))
    }

    /// Wire → field direction.
    pub fn decode(&self, wire: W) -> Result<F, TransformError> {
        (self.decode)(wire)
    }

    /// Field → wire direction.
    pub fn encode(&self, field: &F) -> Result<W, TransformError> {
        (self.encode)(field)
    }
}

impl<W, F> fmt::Debug for Transform<W, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform").finish_non_exhaustive()
    }
}
