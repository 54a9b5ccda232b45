use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::{Error, Result};

/// Dotted key path into a JSON document, e.g. `data.questions`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    pub fn parse(path: &str) -> Result<Self> {
        if path.trim().is_empty() {
            return Err(Error::Config("field path must not be empty".to_string()));
        }
        let segments: Vec<String> = path.split('.').map(str::to_string).collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(Error::Config(format!("field path has an empty segment: {}", path)));
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Walks the object keys of `document` and returns an owned copy of the
    /// value found at the end of the path.
    ///
    /// A missing key, or a non-object met before the last segment, fails with
    /// [`Error::MissingField`] naming the prefix that could not be resolved.
    pub fn extract(&self, document: &Value) -> Result<Value> {
        let mut current = document;
        for (depth, segment) in self.segments.iter().enumerate() {
            current = current
                .as_object()
                .and_then(|object| object.get(segment))
                .ok_or_else(|| Error::MissingField {
                    path: self.segments[..=depth].join("."),
                })?;
        }
        Ok(current.clone())
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl FromStr for FieldPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn questions() -> FieldPath {
        FieldPath::parse("data.questions").unwrap()
    }

    #[test]
    fn test_parse() {
        assert_eq!(questions().segments(), ["data", "questions"]);
        assert!(FieldPath::parse("").is_err());
        assert!(FieldPath::parse("data..questions").is_err());
        assert!(FieldPath::parse(".data").is_err());
    }

    #[test]
    fn test_extract_nested_value() {
        let document = json!({"data": {"questions": [{"q": "test"}]}, "status": "ok"});
        assert_eq!(questions().extract(&document).unwrap(), json!([{"q": "test"}]));
    }

    #[test]
    fn test_extract_null_is_a_value() {
        let document = json!({"data": {"questions": null}});
        assert_eq!(questions().extract(&document).unwrap(), Value::Null);
    }

    #[test]
    fn test_missing_leaf() {
        let err = questions().extract(&json!({"data": {}})).unwrap_err();
        match err {
            Error::MissingField { path } => assert_eq!(path, "data.questions"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_root() {
        let err = questions().extract(&json!({"error": "rate limited"})).unwrap_err();
        match err {
            Error::MissingField { path } => assert_eq!(path, "data"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_object_midway() {
        let err = questions().extract(&json!({"data": ["questions"]})).unwrap_err();
        assert!(matches!(err, Error::MissingField { .. }));
    }
}
