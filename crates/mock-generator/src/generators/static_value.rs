//! Static value generator and YAML to MockValue conversion.

use mock_core::{MockObject, MockValue};
use serde_yaml::Value as YamlValue;

/// Convert a YAML value to a MockValue.
pub fn yaml_to_mock_value(yaml: &YamlValue) -> MockValue {
    match yaml {
        YamlValue::Null => MockValue::Null,
        YamlValue::Bool(b) => MockValue::Bool(*b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                MockValue::Int(i)
            } else if let Some(f) = n.as_f64() {
                MockValue::Float(f)
            } else {
                MockValue::String(n.to_string())
            }
        }
        YamlValue::String(s) => MockValue::String(s.clone()),
        YamlValue::Sequence(arr) => MockValue::Array(arr.iter().map(yaml_to_mock_value).collect()),
        YamlValue::Mapping(map) => {
            let mut object = MockObject::new();
            for (k, v) in map {
                let key = match k {
                    YamlValue::String(s) => s.clone(),
                    YamlValue::Number(n) => n.to_string(),
                    YamlValue::Bool(b) => b.to_string(),
                    _ => continue,
                };
                object.insert(key, yaml_to_mock_value(v));
            }
            MockValue::Object(object)
        }
        YamlValue::Tagged(tagged) => yaml_to_mock_value(&tagged.value),
    }
}
