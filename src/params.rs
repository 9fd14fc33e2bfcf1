//! Typed extraction of tool arguments from a JSON-RPC `arguments` object.
//!
//! These enforce only schema-level shape; business validation belongs to the
//! upstream service.

use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone)]
pub struct ParamError {
    pub message: String,
}

impl ParamError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParamError {}

pub fn require_str(args: &Value, key: &str) -> Result<String, ParamError> {
    match args.get(key) {
        Some(value) => value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ParamError::new(format!("{key} must be a string"))),
        None => Err(ParamError::new(format!("{key} is required"))),
    }
}

pub fn optional_str(args: &Value, key: &str) -> Result<Option<String>, ParamError> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_str()
            .map(|value| Some(value.to_string()))
            .ok_or_else(|| ParamError::new(format!("{key} must be a string"))),
    }
}

pub fn optional_bool(args: &Value, key: &str) -> Result<Option<bool>, ParamError> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_bool()
            .map(Some)
            .ok_or_else(|| ParamError::new(format!("{key} must be a boolean"))),
    }
}

pub fn optional_i64(args: &Value, key: &str) -> Result<Option<i64>, ParamError> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_i64()
            .map(Some)
            .ok_or_else(|| ParamError::new(format!("{key} must be an integer"))),
    }
}

pub fn require_i64(args: &Value, key: &str) -> Result<i64, ParamError> {
    optional_i64(args, key)?.ok_or_else(|| ParamError::new(format!("{key} is required")))
}

pub fn optional_f64(args: &Value, key: &str) -> Result<Option<f64>, ParamError> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or_else(|| ParamError::new(format!("{key} must be a number"))),
    }
}

pub fn require_str_array(args: &Value, key: &str) -> Result<Vec<String>, ParamError> {
    match optional_str_array(args, key)? {
        Some(values) => Ok(values),
        None => Err(ParamError::new(format!("{key} is required"))),
    }
}

pub fn optional_str_array(args: &Value, key: &str) -> Result<Option<Vec<String>>, ParamError> {
    let value = match args.get(key) {
        None | Some(Value::Null) => return Ok(None),
        Some(value) => value,
    };
    let items = value
        .as_array()
        .ok_or_else(|| ParamError::new(format!("{key} must be an array of strings")))?;
    let mut values = Vec::with_capacity(items.len());
    for item in items {
        let item = item
            .as_str()
            .ok_or_else(|| ParamError::new(format!("{key} must be an array of strings")))?;
        values.push(item.to_string());
    }
    Ok(Some(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn require_str_present() {
        let args = json!({"url": "https://files.example/a.pdf"});
        assert_eq!(
            require_str(&args, "url").expect("value"),
            "https://files.example/a.pdf"
        );
    }

    #[test]
    fn require_str_missing_or_wrong_type() {
        let args = json!({"url": 7});
        assert!(require_str(&args, "url").is_err());
        assert!(require_str(&json!({}), "url").is_err());
    }

    #[test]
    fn optional_str_treats_null_as_absent() {
        let args = json!({"pages": null});
        assert_eq!(optional_str(&args, "pages").expect("ok"), None);
    }

    #[test]
    fn optional_bool_rejects_strings() {
        let args = json!({"async_mode": "yes"});
        assert!(optional_bool(&args, "async_mode").is_err());
    }

    #[test]
    fn optional_f64_accepts_integers() {
        let args = json!({"opacity": 1});
        assert_eq!(optional_f64(&args, "opacity").expect("ok"), Some(1.0));
    }

    #[test]
    fn str_array_rejects_mixed_items() {
        let args = json!({"urls": ["a", 2]});
        assert!(require_str_array(&args, "urls").is_err());
    }

    #[test]
    fn str_array_round_trip() {
        let args = json!({"urls": ["a", "b"]});
        assert_eq!(
            require_str_array(&args, "urls").expect("values"),
            vec!["a".to_string(), "b".to_string()]
        );
    }
}
