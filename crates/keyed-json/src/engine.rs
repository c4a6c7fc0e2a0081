//! Default decode/encode routines over the keyed-value container.
//!
//! Both directions walk a type's registered bindings in declared order,
//! resolve each wire key, and drive the container through the type-erased
//! [`KeyedField`](crate::KeyedField) interface. The engine holds no state;
//! each call owns its instance and container for the call's duration.

use crate::error::KeyedError;
use crate::object::KeyedObject;
use crate::Object;

/// Resolves one field's wire key: the explicit override when present,
/// otherwise the declared name, both unmodified.
pub fn resolve_key<'a>(declared_name: &'a str, explicit: Option<&'a str>) -> &'a str {
    explicit.unwrap_or(declared_name)
}

/// Populates `target`'s registered fields from the container.
///
/// A required field whose key is absent fails with
/// [`KeyedError::MissingKey`]; an optional field's absent key leaves the
/// field at its current value. Any failure aborts the call; fields
/// processed before it may already hold their decoded values.
pub fn decode_object<T: KeyedObject>(target: &mut T, object: &Object) -> Result<(), KeyedError> {
    for binding in target.keyed_fields_mut() {
        let key = resolve_key(binding.name, binding.field.explicit_key()).to_owned();
        match object.get(key.as_str()) {
            Some(raw) => binding
                .field
                .decode_value(raw)
                .map_err(|err| KeyedError::from_field(&key, err))?,
            None if binding.field.is_optional() => {}
            None => return Err(KeyedError::MissingKey { key }),
        }
    }
    Ok(())
}

/// Encodes `source`'s registered fields into a fresh container.
///
/// Optional fields with an absent value are omitted entirely. A transform
/// rejection aborts the call with the first failure; keys already written
/// stay in the container, only the overall result reports the error.
pub fn encode_object<T: KeyedObject>(source: &T) -> Result<Object, KeyedError> {
    let mut object = Object::new();
    for binding in source.keyed_fields() {
        let key = resolve_key(binding.name, binding.field.explicit_key());
        match binding.field.encode_value() {
            Ok(Some(value)) => {
                object.insert(key.to_owned(), value);
            }
            Ok(None) => {}
            Err(err) => return Err(KeyedError::from_field(key, err)),
        }
    }
    Ok(object)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::TransformError;
    use crate::{keyed_object, Keyed, KeyedTransform, OptionalKeyed, Transform};

    #[test]
    fn resolve_key_prefers_explicit_override() {
        assert_eq!(resolve_key("a_id", Some("id")), "id");
        assert_eq!(resolve_key("id", None), "id");
    }

    #[derive(Default)]
    struct Pair {
        first: Keyed<String>,
        second: Keyed<i64>,
    }

    keyed_object!(Pair { first, second });

    #[test]
    fn decode_assigns_each_registered_field() {
        let object = json!({"first": "a", "second": 2});
        let mut pair = Pair::default();
        decode_object(&mut pair, object.as_object().unwrap()).unwrap();
        assert_eq!(pair.first.as_str(), "a");
        assert_eq!(*pair.second.get(), 2);
    }

    #[test]
    fn decode_missing_required_key_fails() {
        let object = json!({"first": "a"});
        let mut pair = Pair::default();
        let err = decode_object(&mut pair, object.as_object().unwrap()).unwrap_err();
        assert!(matches!(err, KeyedError::MissingKey { ref key } if key == "second"));
    }

    #[test]
    fn decode_type_mismatch_fails_and_keeps_earlier_assignments() {
        let object = json!({"first": "a", "second": "two"});
        let mut pair = Pair::default();
        let err = decode_object(&mut pair, object.as_object().unwrap()).unwrap_err();
        assert!(matches!(err, KeyedError::TypeMismatch { ref key, .. } if key == "second"));
        // No rollback: the field processed before the failure keeps its value.
        assert_eq!(pair.first.as_str(), "a");
    }

    #[test]
    fn encode_writes_registration_order() {
        let pair = Pair {
            first: Keyed::new("a".to_string()),
            second: Keyed::new(2),
        };
        let object = encode_object(&pair).unwrap();
        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        assert_eq!(keys, ["first", "second"]);
    }

    struct Sparse {
        present: OptionalKeyed<String>,
        absent: OptionalKeyed<String>,
    }

    keyed_object!(Sparse { present, absent });

    impl Default for Sparse {
        fn default() -> Self {
            Self {
                present: OptionalKeyed::new(Some("x".to_string())),
                absent: OptionalKeyed::default(),
            }
        }
    }

    #[test]
    fn encode_omits_absent_optional_fields() {
        let object = encode_object(&Sparse::default()).unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object.get("present"), Some(&json!("x")));
        assert!(!object.contains_key("absent"));
    }

    #[test]
    fn decode_leaves_optional_field_on_absent_key() {
        let mut sparse = Sparse::default();
        decode_object(&mut sparse, json!({}).as_object().unwrap()).unwrap();
        assert_eq!(sparse.present.get(), Some(&"x".to_string()));
        assert_eq!(sparse.absent.get(), None);
    }

    struct Rejecting {
        id: KeyedTransform<String, i64>,
    }

    keyed_object!(Rejecting { id });

    impl Default for Rejecting {
        fn default() -> Self {
            let transform = Transform::new(
                |wire: i64| Ok(wire.to_string()),
                |field: &String| {
                    field
                        .parse::<i64>()
                        .map_err(|_| TransformError::new(field, "not an integer"))
                },
            );
            Self {
                id: KeyedTransform::new(transform, String::new()),
            }
        }
    }

    #[test]
    fn encode_surfaces_transform_rejection_with_key() {
        let mut rejecting = Rejecting::default();
        rejecting.id.set("nan".to_string());
        let err = encode_object(&rejecting).unwrap_err();
        assert!(matches!(err, KeyedError::Transform { ref key, .. } if key == "id"));
    }

    #[test]
    fn decode_runs_wire_to_field_direction() {
        let mut rejecting = Rejecting::default();
        decode_object(&mut rejecting, json!({"id": 1}).as_object().unwrap()).unwrap();
        assert_eq!(rejecting.id.as_str(), "1");
    }
}
