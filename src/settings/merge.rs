//! Deep overlay of JSON settings.

use serde_json::Value;

/// Overlay `source` onto `target` in place.
///
/// Objects merge key by key and arrays merge index by index, recursing into
/// nested values. Any other source value (including `null`) replaces the
/// target value. Target keys absent from `source` are left untouched.
pub fn deep_merge(target: &mut Value, source: &Value) {
    match (target, source) {
        (Value::Object(target), Value::Object(source)) => {
            for (key, value) in source {
                match target.get_mut(key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        target.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (Value::Array(target), Value::Array(source)) => {
            for (i, value) in source.iter().enumerate() {
                match target.get_mut(i) {
                    Some(existing) => deep_merge(existing, value),
                    None => target.push(value.clone()),
                }
            }
        }
        (target, source) => *target = source.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sequential_merges_accumulate() {
        let mut settings = json!({});
        deep_merge(&mut settings, &json!({"a": {"b": 1}}));
        deep_merge(&mut settings, &json!({"a": {"c": 2}}));
        assert_eq!(settings, json!({"a": {"b": 1, "c": 2}}));
    }

    #[test]
    fn test_overwrites_same_path_and_keeps_others() {
        let mut settings = json!({
            "auth": {"allPermissions": {"Pages": "true"}},
            "localization": {"currentLanguage": {"name": "en"}, "defaultSourceName": "App"}
        });
        deep_merge(
            &mut settings,
            &json!({"localization": {"currentLanguage": {"name": "tr"}}}),
        );
        assert_eq!(settings["localization"]["currentLanguage"]["name"], "tr");
        assert_eq!(settings["localization"]["defaultSourceName"], "App");
        assert_eq!(settings["auth"]["allPermissions"]["Pages"], "true");
    }

    #[test]
    fn test_arrays_merge_by_index() {
        let mut settings = json!({"langs": [{"name": "en", "flag": "gb"}, {"name": "tr"}]});
        deep_merge(&mut settings, &json!({"langs": [{"name": "de"}]}));
        assert_eq!(
            settings,
            json!({"langs": [{"name": "de", "flag": "gb"}, {"name": "tr"}]})
        );

        deep_merge(&mut settings, &json!({"langs": [{}, {}, {"name": "fr"}]}));
        assert_eq!(settings["langs"].as_array().unwrap().len(), 3);
        assert_eq!(settings["langs"][2]["name"], "fr");
    }

    #[test]
    fn test_null_and_type_changes_replace() {
        let mut settings = json!({"a": {"b": 1}, "c": [1, 2], "d": 5});
        deep_merge(&mut settings, &json!({"a": null, "c": {"x": 1}, "d": "five"}));
        assert_eq!(settings, json!({"a": null, "c": {"x": 1}, "d": "five"}));
    }
}
