//! Reading raw JSON payloads into candidate records.
//!
//! `Shape` walks a `serde_json::Value` and pulls typed fields out of it,
//! recording every shape problem it meets (missing field, wrong JSON type,
//! non-integral number) with its path. Readers return `None` on a problem
//! so the caller can keep reading and report everything in one pass.
//!
//! ```
//! use card_forge::core::{IssuePath, Shape};
//! use serde_json::json;
//!
//! let value = json!({ "name": "Aggro", "size": "big" });
//! let mut shape = Shape::new();
//! let root = IssuePath::root();
//! let obj = shape.object(&value, &root).unwrap();
//!
//! assert_eq!(shape.string(obj, &root, "name").as_deref(), Some("Aggro"));
//! assert_eq!(shape.integer(obj, &root, "size"), None);
//! assert!(shape.finish().is_err());
//! ```

use serde_json::{Map, Value};

use super::error::MalformedInput;
use super::issue::{IssueList, IssuePath};

/// JSON object being read.
pub type Object = Map<String, Value>;

/// Collector of shape problems.
#[derive(Debug, Default)]
pub struct Shape {
    problems: IssueList,
}

/// JSON type name of a value, as reported in problem messages.
fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Integral value of a JSON number, accepting integral floats like `3.0`.
///
/// Whole numbers outside `i64` saturate, so range rules report them.
fn as_integer(value: &Value) -> Option<i64> {
    if let Some(i) = value.as_i64() {
        return Some(i);
    }
    if value.as_u64().is_some() {
        return Some(i64::MAX);
    }
    let f = value.as_f64()?;
    // `as` saturates at the i64 bounds
    (f.is_finite() && f.fract() == 0.0).then_some(f as i64)
}

impl Shape {
    /// Create an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn expected(&mut self, path: IssuePath, expected: &str, found: &Value) {
        self.problems.add(
            path,
            format!("Expected {}, received {}", expected, kind(found)),
        );
    }

    fn required<'v>(&mut self, obj: &'v Object, base: &IssuePath, key: &str) -> Option<&'v Value> {
        let value = obj.get(key);
        if value.is_none() {
            self.problems.add(base.field(key), "Required");
        }
        value
    }

    /// Read `value` as an object.
    pub fn object<'v>(&mut self, value: &'v Value, path: &IssuePath) -> Option<&'v Object> {
        match value {
            Value::Object(obj) => Some(obj),
            other => {
                self.expected(path.clone(), "object", other);
                None
            }
        }
    }

    /// Required nested object field.
    pub fn nested<'v>(&mut self, obj: &'v Object, base: &IssuePath, key: &str) -> Option<&'v Object> {
        let value = self.required(obj, base, key)?;
        self.object(value, &base.field(key))
    }

    /// Read `value` as a string.
    pub fn string_value(&mut self, value: &Value, path: &IssuePath) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            other => {
                self.expected(path.clone(), "string", other);
                None
            }
        }
    }

    /// Read `value` as an integer.
    pub fn integer_value(&mut self, value: &Value, path: &IssuePath) -> Option<i64> {
        match value {
            Value::Number(_) => {
                let int = as_integer(value);
                if int.is_none() {
                    self.expected(path.clone(), "integer", value);
                }
                int
            }
            other => {
                self.expected(path.clone(), "number", other);
                None
            }
        }
    }

    /// Required string field.
    pub fn string(&mut self, obj: &Object, base: &IssuePath, key: &str) -> Option<String> {
        let value = self.required(obj, base, key)?;
        self.string_value(value, &base.field(key))
    }

    /// Optional string field. Absent or `null` is `None`; present with a
    /// wrong type is a problem (and also `None`).
    pub fn optional_string(&mut self, obj: &Object, base: &IssuePath, key: &str) -> Option<String> {
        match obj.get(key) {
            None | Some(Value::Null) => None,
            Some(value) => self.string_value(value, &base.field(key)),
        }
    }

    /// Required integer field.
    pub fn integer(&mut self, obj: &Object, base: &IssuePath, key: &str) -> Option<i64> {
        let value = self.required(obj, base, key)?;
        self.integer_value(value, &base.field(key))
    }

    /// Optional integer field. Absent or `null` is `None`.
    pub fn optional_integer(&mut self, obj: &Object, base: &IssuePath, key: &str) -> Option<i64> {
        match obj.get(key) {
            None | Some(Value::Null) => None,
            Some(value) => self.integer_value(value, &base.field(key)),
        }
    }

    /// Required array field.
    pub fn array<'v>(&mut self, obj: &'v Object, base: &IssuePath, key: &str) -> Option<&'v [Value]> {
        let value = self.required(obj, base, key)?;
        match value {
            Value::Array(items) => Some(items.as_slice()),
            other => {
                self.expected(base.field(key), "array", other);
                None
            }
        }
    }

    /// Required array of strings. Every bad element is reported.
    pub fn string_array(&mut self, obj: &Object, base: &IssuePath, key: &str) -> Option<Vec<String>> {
        let items = self.array(obj, base, key)?;
        let path = base.field(key);
        let mut out = Vec::with_capacity(items.len());
        let mut ok = true;
        for (i, item) in items.iter().enumerate() {
            match self.string_value(item, &path.index(i)) {
                Some(s) => out.push(s),
                None => ok = false,
            }
        }
        ok.then_some(out)
    }

    /// Whether any problem has been recorded.
    #[must_use]
    pub fn has_problems(&self) -> bool {
        !self.problems.is_empty()
    }

    /// All problems so far, as an error. Used when reading cannot continue.
    #[must_use]
    pub fn into_malformed(self) -> MalformedInput {
        MalformedInput::new(self.problems)
    }

    /// Finish reading: `Err` when any problem was recorded.
    ///
    /// After `Ok`, every required read returned `Some`.
    pub fn finish(self) -> Result<(), MalformedInput> {
        if self.problems.is_empty() {
            Ok(())
        } else {
            Err(MalformedInput::new(self.problems))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_not_an_object() {
        let mut shape = Shape::new();
        assert!(shape.object(&json!([1, 2]), &IssuePath::root()).is_none());

        let err = shape.finish().unwrap_err();
        let problem = err.iter().next().unwrap();
        assert!(problem.path.is_root());
        assert_eq!(problem.message, "Expected object, received array");
    }

    #[test]
    fn test_missing_and_wrong_types_all_reported() {
        let value = json!({ "cost": "three", "stats": { "attack": 1.5 } });
        let mut shape = Shape::new();
        let root = IssuePath::root();
        let obj = shape.object(&value, &root).unwrap();

        assert_eq!(shape.string(obj, &root, "name"), None);
        assert_eq!(shape.integer(obj, &root, "cost"), None);
        let stats = shape.nested(obj, &root, "stats").unwrap();
        assert_eq!(shape.integer(stats, &root.field("stats"), "attack"), None);

        let err = shape.finish().unwrap_err();
        let keys: Vec<_> = err.iter().map(|p| (p.path.display_key(), p.message.clone())).collect();
        assert_eq!(
            keys,
            vec![
                ("name".to_string(), "Required".to_string()),
                ("cost".to_string(), "Expected number, received string".to_string()),
                ("stats.attack".to_string(), "Expected integer, received float".to_string()),
            ]
        );
    }

    #[test]
    fn test_integral_float_accepted() {
        let value = json!({ "cost": 3.0 });
        let mut shape = Shape::new();
        let root = IssuePath::root();
        let obj = shape.object(&value, &root).unwrap();

        assert_eq!(shape.integer(obj, &root, "cost"), Some(3));
        assert!(shape.finish().is_ok());
    }

    #[test]
    fn test_huge_whole_numbers_saturate() {
        let value = json!({ "big": u64::MAX, "sci": 1e20, "low": -1e20 });
        let mut shape = Shape::new();
        let root = IssuePath::root();
        let obj = shape.object(&value, &root).unwrap();

        assert_eq!(shape.integer(obj, &root, "big"), Some(i64::MAX));
        assert_eq!(shape.integer(obj, &root, "sci"), Some(i64::MAX));
        assert_eq!(shape.integer(obj, &root, "low"), Some(i64::MIN));
        assert!(shape.finish().is_ok());
    }

    #[test]
    fn test_optional_fields() {
        let value = json!({ "armor": null, "text": 5 });
        let mut shape = Shape::new();
        let root = IssuePath::root();
        let obj = shape.object(&value, &root).unwrap();

        assert_eq!(shape.optional_integer(obj, &root, "armor"), None);
        assert_eq!(shape.optional_string(obj, &root, "missing"), None);
        assert!(!shape.has_problems());

        assert_eq!(shape.optional_string(obj, &root, "text"), None);
        assert!(shape.has_problems());
    }

    #[test]
    fn test_string_array_reports_each_element() {
        let value = json!({ "keywords": ["Ward", 3, "Taunt", false] });
        let mut shape = Shape::new();
        let root = IssuePath::root();
        let obj = shape.object(&value, &root).unwrap();

        assert_eq!(shape.string_array(obj, &root, "keywords"), None);
        let err = shape.finish().unwrap_err();
        let keys: Vec<_> = err.iter().map(|p| p.path.display_key()).collect();
        assert_eq!(keys, vec!["keywords.1", "keywords.3"]);
    }
}
