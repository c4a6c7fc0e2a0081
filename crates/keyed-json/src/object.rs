//! Opt-in registration of keyed fields.

use crate::field::KeyedField;

/// One registered field: its declared name plus the erased capability.
pub struct FieldBinding<'a> {
    pub name: &'static str,
    pub field: &'a dyn KeyedField,
}

/// Mutable counterpart of [`FieldBinding`], used on decode.
pub struct FieldBindingMut<'a> {
    pub name: &'static str,
    pub field: &'a mut dyn KeyedField,
}

/// A type that has declared its ordered list of keyed fields.
///
/// Only listed fields are ever visited by the engine; everything else on
/// the type is left alone, whatever its visibility or type. Implemented by
/// [`keyed_object!`], or by hand when a type wants to assemble its binding
/// list itself.
pub trait KeyedObject {
    fn keyed_fields(&self) -> Vec<FieldBinding<'_>>;

    fn keyed_fields_mut(&mut self) -> Vec<FieldBindingMut<'_>>;
}

/// Registers a type's keyed fields and wires it into serde.
///
/// Expands to the [`KeyedObject`] binding list (each entry carrying the
/// field's declared name, which becomes the wire key unless the capability
/// holds an explicit one) plus `Serialize` and `Deserialize` impls that
/// delegate to the mapping engine. Decoding default-constructs the instance
/// first, so the type must implement `Default`; whatever keys the default
/// capabilities carry are the keys decode resolves.
///
/// ```
/// use keyed_json::{keyed_object, Keyed};
///
/// #[derive(Default)]
/// struct User {
///     id: Keyed<String>,
/// }
///
/// keyed_object!(User { id });
///
/// let user: User = serde_json::from_str(r#"{"id":"1"}"#).unwrap();
/// assert_eq!(user.id.as_str(), "1");
/// ```
#[macro_export]
macro_rules! keyed_object {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::KeyedObject for $ty {
            fn keyed_fields(&self) -> ::std::vec::Vec<$crate::FieldBinding<'_>> {
                ::std::vec![
                    $($crate::FieldBinding {
                        name: ::std::stringify!($field),
                        field: &self.$field,
                    },)*
                ]
            }

            fn keyed_fields_mut(&mut self) -> ::std::vec::Vec<$crate::FieldBindingMut<'_>> {
                ::std::vec![
                    $($crate::FieldBindingMut {
                        name: ::std::stringify!($field),
                        field: &mut self.$field,
                    },)*
                ]
            }
        }

        impl ::serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                let object = $crate::engine::encode_object(self)
                    .map_err(<S::Error as ::serde::ser::Error>::custom)?;
                ::serde::Serialize::serialize(&object, serializer)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let object: $crate::Object = ::serde::Deserialize::deserialize(deserializer)?;
                let mut target = <Self as ::std::default::Default>::default();
                $crate::engine::decode_object(&mut target, &object)
                    .map_err(<D::Error as ::serde::de::Error>::custom)?;
                ::std::result::Result::Ok(target)
            }
        }
    };
}
