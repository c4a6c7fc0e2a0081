//! Round-trip law for required keyed fields: decode(encode(x)) reproduces
//! every registered value.

use keyed_json::{keyed_object, Keyed, OptionalKeyed};
use proptest::prelude::*;

#[derive(Debug)]
struct Record {
    a_id: Keyed<String>,
    count: Keyed<i64>,
    label: OptionalKeyed<String>,
}

keyed_object!(Record { a_id, count, label });

impl Default for Record {
    fn default() -> Self {
        Self {
            a_id: Keyed::with_key("id", String::new()),
            count: Keyed::default(),
            label: OptionalKeyed::default(),
        }
    }
}

proptest! {
    #[test]
    fn required_fields_roundtrip(id in ".*", count in any::<i64>()) {
        let mut record = Record::default();
        record.a_id.set(id.clone());
        record.count.set(count);

        let wire = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&wire).unwrap();

        prop_assert_eq!(back.a_id.as_str(), id.as_str());
        prop_assert_eq!(*back.count.get(), count);
        prop_assert_eq!(back.label.get(), None);
    }

    #[test]
    fn optional_field_roundtrips_presence(label in proptest::option::of(".*")) {
        let mut record = Record::default();
        record.label.set(label.clone());

        let wire = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&wire).unwrap();

        prop_assert_eq!(back.label.into_inner(), label);
    }
}
