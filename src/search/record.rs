//! Field access for candidate records.

use serde_json::{Map, Value};

/// A record whose named string fields can be searched.
///
/// Only string-valued fields take part in matching. Returning `None` for
/// a missing or non-string field skips it without error.
pub trait Searchable {
    fn field(&self, key: &str) -> Option<&str>;
}

impl Searchable for Value {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }
}

impl Searchable for Map<String, Value> {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn field(&self, key: &str) -> Option<&str> {
        (**self).field(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_string_field() {
        let motor = json!({"model": "Verado 300", "hp": 300, "tags": ["v8"]});
        assert_eq!(motor.field("model"), Some("Verado 300"));
    }

    #[test]
    fn test_value_non_string_fields_skipped() {
        let motor = json!({"model": "Verado 300", "hp": 300, "tags": ["v8"], "sku": null});
        assert_eq!(motor.field("hp"), None);
        assert_eq!(motor.field("tags"), None);
        assert_eq!(motor.field("sku"), None);
        assert_eq!(motor.field("missing"), None);
    }

    #[test]
    fn test_non_object_value_has_no_fields() {
        assert_eq!(json!("Verado").field("model"), None);
        assert_eq!(json!([1, 2]).field("model"), None);
    }

    #[test]
    fn test_map_field() {
        let mut map = Map::new();
        map.insert("family".to_string(), json!("Pro XS"));
        assert_eq!(map.field("family"), Some("Pro XS"));
    }
}
