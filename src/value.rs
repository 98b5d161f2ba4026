//! Tagged value type shared by all registry entries

use std::fmt;

/// A strongly-typed registry value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Scalar(f64),
    UnsignedInteger(u64),
    Bool(bool),
}

impl Value {
    /// The type tag of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Str(_) => ValueKind::Str,
            Value::Scalar(_) => ValueKind::Scalar,
            Value::UnsignedInteger(_) => ValueKind::UnsignedInteger,
            Value::Bool(_) => ValueKind::Bool,
        }
    }

    /// Canonical text form, as returned by the polymorphic `get`
    pub fn to_text(&self) -> String {
        match self {
            Value::Str(v) => v.clone(),
            Value::Scalar(v) => v.to_string(),
            Value::UnsignedInteger(v) => v.to_string(),
            Value::Bool(v) => v.to_string(),
        }
    }

    /// Get as string, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(v) => Some(v),
            _ => None,
        }
    }

    /// Get as scalar, if this is a scalar value
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Value::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as unsigned integer, if this is an unsigned-integer value
    pub fn as_unsigned_integer(&self) -> Option<u64> {
        match self {
            Value::UnsignedInteger(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as bool, if this is a boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

/// Type tag for registry entries.
///
/// The canonical text tags (`str`, `float`, `int`, `bool`) are part of the
/// external contract and also give the fixed probing order used by the
/// override-file overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Str,
    Scalar,
    UnsignedInteger,
    Bool,
}

impl ValueKind {
    /// The canonical text tag for this kind
    pub fn as_tag(self) -> &'static str {
        match self {
            ValueKind::Str => "str",
            ValueKind::Scalar => "float",
            ValueKind::UnsignedInteger => "int",
            ValueKind::Bool => "bool",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Lenient scalar parse used by `set` and the file overlay.
///
/// Malformed text yields the legacy sentinel `-1.0` rather than an error.
pub(crate) fn parse_scalar_lenient(text: &str) -> f64 {
    text.trim().parse().unwrap_or(-1.0)
}

/// Lenient unsigned-integer parse used by `set` and the file overlay.
///
/// Malformed text yields the legacy sentinel `0` rather than an error.
pub(crate) fn parse_unsigned_integer_lenient(text: &str) -> u64 {
    text.trim().parse().unwrap_or(0)
}

/// Lenient boolean parse used by `set` and the file overlay.
///
/// Accepts the literals `true`/`false` first, then the numeric forms
/// `1`/`0`; anything else yields `false`.
pub(crate) fn parse_bool_lenient(text: &str) -> bool {
    match text.trim() {
        "true" | "1" => true,
        _ => false,
    }
}
