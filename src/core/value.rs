use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell value.
///
/// Values inserted programmatically keep their type until they are rendered;
/// values parsed from a file are always [`Value::Text`]. The default value is
/// empty text, which is also what a header missing from a row reads as.
///
/// # Examples
///
/// ```
/// use icsv::core::value::Value;
///
/// assert_eq!(Value::from(42).to_string(), "42");
/// assert_eq!(Value::from(2.0).to_string(), "2.0");
/// assert_eq!(Value::from(true).to_string(), "true");
/// assert_eq!(Value::from("hello"), "hello");
/// assert_eq!(Value::default().to_string(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// The value every absent header reads as.
pub(crate) static EMPTY: Value = Value::Text(String::new());

impl Value {
    /// Returns `true` for empty text.
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Text(text) if text.is_empty())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(int) => Some(*int),
            _ => None,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Text(String::new())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(value) => write!(f, "{value}"),
            Value::Int(value) => write!(f, "{value}"),
            // Keeps the fractional part of integral floats: 1.0 renders "1.0"
            Value::Float(value) => write!(f, "{value:?}"),
            Value::Text(value) => f.write_str(value),
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::default(),
            serde_json::Value::Bool(value) => Value::Bool(value),
            serde_json::Value::Number(number) => match number.as_i64() {
                Some(int) => Value::Int(int),
                None => Value::Float(number.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(text) => Value::Text(text),
            // Nested structures have no scalar form, keep their JSON text
            other => Value::Text(other.to_string()),
        }
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Value::Int(int) if int == other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Value::Bool(value) if value == other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Value::Text(text) if text == other)
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Value::Text(text) if text == other)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Value;

    #[test]
    fn values_should_render_as_text() {
        assert_eq!(Value::from(-7).to_string(), "-7");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from(1.0).to_string(), "1.0");
        assert_eq!(Value::from(-3.0f32).to_string(), "-3.0");
        assert_eq!(Value::from(false).to_string(), "false");
        assert_eq!(Value::from("a b").to_string(), "a b");
    }

    #[test]
    fn default_value_is_empty_text() {
        assert!(Value::default().is_empty());
        assert_eq!(Value::default(), "");
        assert!(!Value::from(0).is_empty());
    }

    #[test]
    fn json_scalars_should_convert() {
        assert_eq!(Value::from(json!(3)), 3);
        assert_eq!(Value::from(json!(true)), true);
        assert_eq!(Value::from(json!("x")), "x");
        assert_eq!(Value::from(json!(null)), "");
        assert_eq!(Value::from(json!(2.5)), Value::Float(2.5));
        assert_eq!(Value::from(json!([1, 2])), "[1,2]");
    }

    #[test]
    fn untagged_serialization_keeps_plain_scalars() {
        let values = vec![Value::from(1), Value::from("one"), Value::from(true)];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[1,"one",true]"#);

        let back: Vec<Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, values);
    }
}
