// SPDX-License-Identifier: MIT

//! Parameter declarations and argument encoding

use crate::toolkit::error::ApiError;
use serde_json::{json, Map, Value};

/// Semantic type of a parameter
#[derive(Debug, Clone, PartialEq)]
pub enum ParamType {
    String,
    Integer,
    /// Sent as `1` / `0`
    Boolean,
    Enum(&'static [&'static str]),
}

/// Where a parameter ends up in the request URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Substituted for `{name}` in the path template
    Path,
    Query,
}

/// Declaration of a single endpoint parameter
#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub name: &'static str,
    pub param_type: ParamType,
    pub description: &'static str,
    pub required: bool,
    pub default: Option<Value>,
    pub placement: Placement,
}

impl ParamSpec {
    pub fn query(name: &'static str, param_type: ParamType, description: &'static str) -> Self {
        Self {
            name,
            param_type,
            description,
            required: false,
            default: None,
            placement: Placement::Query,
        }
    }

    /// Path parameters are always required
    pub fn path(name: &'static str, param_type: ParamType, description: &'static str) -> Self {
        Self {
            required: true,
            placement: Placement::Path,
            ..Self::query(name, param_type, description)
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    /// JSON-schema fragment for this parameter
    pub fn schema(&self) -> Value {
        let mut prop = Map::new();
        let type_name = match self.param_type {
            ParamType::String | ParamType::Enum(_) => "string",
            ParamType::Integer => "integer",
            ParamType::Boolean => "boolean",
        };
        prop.insert("type".into(), json!(type_name));
        prop.insert("description".into(), json!(self.description));
        if let ParamType::Enum(values) = self.param_type {
            prop.insert("enum".into(), json!(values));
        }
        if let Some(default) = &self.default {
            prop.insert("default".into(), default.clone());
        }
        Value::Object(prop)
    }

    /// Resolve the wire value for this parameter from the caller's arguments.
    ///
    /// Returns `Ok(None)` when the parameter is optional, has no default and
    /// was not supplied. `null` counts as not supplied.
    pub fn resolve(&self, args: &Map<String, Value>) -> Result<Option<String>, ApiError> {
        let supplied = args.get(self.name).filter(|v| !v.is_null());
        match supplied.or(self.default.as_ref()) {
            Some(value) => {
                let encoded = self.encode(value)?;
                // URL normalization drops these, which would hit another resource
                if self.placement == Placement::Path && matches!(encoded.as_str(), "" | "." | "..")
                {
                    return Err(ApiError::invalid(
                        self.name,
                        format!("'{}' is not a valid path segment", encoded),
                    ));
                }
                Ok(Some(encoded))
            }
            None if self.required => Err(ApiError::MissingParameter(self.name.to_string())),
            None => Ok(None),
        }
    }

    /// Encode a JSON value as the string the upstream API expects
    pub fn encode(&self, value: &Value) -> Result<String, ApiError> {
        match &self.param_type {
            ParamType::String => match value {
                Value::String(s) => Ok(s.clone()),
                Value::Number(n) => Ok(n.to_string()),
                Value::Bool(b) => Ok(b.to_string()),
                other => Err(ApiError::invalid(
                    self.name,
                    format!("expected a string, got {}", other),
                )),
            },
            ParamType::Integer => encode_integer(value)
                .ok_or_else(|| {
                    ApiError::invalid(self.name, format!("expected an integer, got {}", value))
                }),
            ParamType::Boolean => encode_boolean(value)
                .map(|b| if b { "1" } else { "0" }.to_string())
                .ok_or_else(|| {
                    ApiError::invalid(self.name, format!("expected a boolean, got {}", value))
                }),
            ParamType::Enum(values) => match value.as_str() {
                Some(s) if values.contains(&s) => Ok(s.to_string()),
                _ => Err(ApiError::invalid(
                    self.name,
                    format!("expected one of: {}, got {}", values.join(", "), value),
                )),
            },
        }
    }
}

fn encode_integer(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else {
                n.as_u64().map(|u| u.to_string())
            }
        }
        Value::String(s) => s.trim().parse::<i64>().ok().map(|i| i.to_string()),
        _ => None,
    }
}

fn encode_boolean(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_u64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(s) => match s.as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORMATS: &[&str] = &["json", "xml"];

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_path_param_is_required() {
        let spec = ParamSpec::path("hex", ParamType::String, "Hex value");
        assert!(spec.required);
        assert_eq!(spec.placement, Placement::Path);
    }

    #[test]
    fn test_resolve_uses_default_when_absent() {
        let spec = ParamSpec::query("numResults", ParamType::Integer, "Max results")
            .with_default(json!(20));
        assert_eq!(spec.resolve(&Map::new()).unwrap(), Some("20".to_string()));
        assert_eq!(
            spec.resolve(&args(json!({"numResults": 5}))).unwrap(),
            Some("5".to_string())
        );
    }

    #[test]
    fn test_resolve_null_falls_back_to_default() {
        let spec =
            ParamSpec::query("format", ParamType::Enum(FORMATS), "Format").with_default(json!("json"));
        assert_eq!(
            spec.resolve(&args(json!({"format": null}))).unwrap(),
            Some("json".to_string())
        );
    }

    #[test]
    fn test_resolve_optional_without_default_is_omitted() {
        let spec = ParamSpec::query("keywords", ParamType::String, "Keywords");
        assert_eq!(spec.resolve(&Map::new()).unwrap(), None);
    }

    #[test]
    fn test_resolve_missing_required() {
        let spec = ParamSpec::query("lover", ParamType::String, "User").required();
        let err = spec.resolve(&Map::new()).unwrap_err();
        assert!(matches!(err, ApiError::MissingParameter(ref n) if n == "lover"));
    }

    #[test]
    fn test_encode_boolean_as_digit() {
        let spec = ParamSpec::query("comments", ParamType::Boolean, "Comments");
        assert_eq!(spec.encode(&json!(true)).unwrap(), "1");
        assert_eq!(spec.encode(&json!(false)).unwrap(), "0");
        assert_eq!(spec.encode(&json!(1)).unwrap(), "1");
        assert_eq!(spec.encode(&json!("false")).unwrap(), "0");
        assert!(spec.encode(&json!("maybe")).is_err());
    }

    #[test]
    fn test_encode_integer_accepts_numeric_strings() {
        let spec = ParamSpec::query("paletteId", ParamType::Integer, "Id");
        assert_eq!(spec.encode(&json!(92095)).unwrap(), "92095");
        assert_eq!(spec.encode(&json!("42")).unwrap(), "42");
        assert!(spec.encode(&json!(1.5)).is_err());
        assert!(spec.encode(&json!("abc")).is_err());
    }

    #[test]
    fn test_encode_string_stringifies_scalars() {
        let spec = ParamSpec::query("hex", ParamType::String, "Hex");
        assert_eq!(spec.encode(&json!("5a5b9f")).unwrap(), "5a5b9f");
        assert_eq!(spec.encode(&json!(123456)).unwrap(), "123456");
        assert!(spec.encode(&json!(["a"])).is_err());
    }

    #[test]
    fn test_encode_enum_rejects_unknown_value() {
        let spec = ParamSpec::query("format", ParamType::Enum(FORMATS), "Format");
        assert_eq!(spec.encode(&json!("xml")).unwrap(), "xml");
        let err = spec.encode(&json!("yaml")).unwrap_err();
        assert!(err.to_string().contains("expected one of: json, xml"));
    }

    #[test]
    fn test_schema_fragment() {
        let spec =
            ParamSpec::query("format", ParamType::Enum(FORMATS), "Response format").with_default(json!("json"));
        assert_eq!(
            spec.schema(),
            json!({
                "type": "string",
                "description": "Response format",
                "enum": ["json", "xml"],
                "default": "json"
            })
        );

        let spec = ParamSpec::path("paletteId", ParamType::Integer, "Palette id");
        assert_eq!(
            spec.schema(),
            json!({"type": "integer", "description": "Palette id"})
        );
    }
}
