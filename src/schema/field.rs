//! Field definitions: the typed leaf of a schema.
//!
//! A [`Field`] names the environment variable it reads from, fixes its
//! [`Kind`] at construction, and optionally carries a requiredness flag and
//! a default. Builders consume and return `self`, so mutation is scoped
//! strictly to schema-construction time; once a field sits inside a
//! container its definition never changes.

use std::fmt;

use super::container::{Container, Schema};

/// The declared type of a field's value, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Raw string, used as-is.
    String,
    /// Base-10 signed integer.
    Integer,
    /// Boolean literal (`true`/`false`, case-insensitive, plus `1`/`0`).
    Boolean,
    /// A nested container resolved recursively.
    Nested,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::String => write!(f, "string"),
            Kind::Integer => write!(f, "integer"),
            Kind::Boolean => write!(f, "boolean"),
            Kind::Nested => write!(f, "container"),
        }
    }
}

/// A resolved (or default) field value.
///
/// The tag doubles as the runtime type check: accessors compare the field's
/// declared [`Kind`] before touching the payload, so a mismatch is a single
/// explicit error instead of a cast.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Bool(bool),
    Container(Container),
}

impl Value {
    /// String rendering, used for default substitution and the env export.
    ///
    /// Containers have no scalar rendering and yield `""`.
    pub(crate) fn render(&self) -> String {
        match self {
            Value::Str(s) => s.clone(),
            Value::Int(i) => i.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Container(_) => String::new(),
        }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

// Integer literals land here without a suffix at call sites.
impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

/// One named, typed configuration entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Environment variable to read. Must be non-empty by resolution time.
    pub(crate) source_key: String,
    pub(crate) kind: Kind,
    pub(crate) required: bool,
    pub(crate) default: Option<Value>,
    /// `None` until resolution populates it; stays `None` for optional
    /// fields whose variable is unset. Nested fields hold their child
    /// container here from construction onward.
    pub(crate) value: Option<Value>,
}

impl Field {
    fn new(source_key: impl Into<String>, kind: Kind) -> Self {
        Self {
            source_key: source_key.into(),
            kind,
            required: false,
            default: None,
            value: None,
        }
    }

    /// A string field read from `source_key`.
    pub fn string(source_key: impl Into<String>) -> Self {
        Self::new(source_key, Kind::String)
    }

    /// An integer field read from `source_key`.
    pub fn integer(source_key: impl Into<String>) -> Self {
        Self::new(source_key, Kind::Integer)
    }

    /// A boolean field read from `source_key`.
    pub fn boolean(source_key: impl Into<String>) -> Self {
        Self::new(source_key, Kind::Boolean)
    }

    /// A nested container field.
    ///
    /// `source_key` is not looked up for the field itself (the child's
    /// fields each name their own variables) but must still be non-empty.
    /// The child container is built here and resolved recursively with its
    /// parent.
    pub fn nested(source_key: impl Into<String>, schema: Schema) -> Self {
        let mut field = Self::new(source_key, Kind::Nested);
        field.value = Some(Value::Container(Container::new(schema)));
        field
    }

    /// Mark this field as mandatory. Idempotent, chainable.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set a default, substituted when the variable is unset or empty.
    ///
    /// The default's string rendering goes through the same coercion as an
    /// environment value, so `default_value(8080)` and
    /// `default_value("8080")` behave identically on an integer field.
    pub fn default_value(mut self, v: impl Into<Value>) -> Self {
        self.default = Some(v.into());
        self
    }

    /// The environment variable this field reads.
    pub fn source_key(&self) -> &str {
        &self.source_key
    }

    /// The declared kind, fixed at construction.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Whether resolution fails if this field stays empty.
    pub fn is_required(&self) -> bool {
        self.required
    }
}
