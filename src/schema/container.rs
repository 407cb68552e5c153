//! Container resolution and typed access.
//!
//! Resolution is a single deterministic pass: every field is looked up,
//! defaulted, coerced, and validated exactly once, with no cross-field
//! dependency, so iteration order never affects the outcome. Any failure
//! aborts the pass immediately and the container must be discarded.

use indexmap::IndexMap;

use super::field::{Field, Kind, Value};
use super::SchemaError;
use crate::env::Env;

/// Ordered mapping from local field name to its definition.
///
/// Backed by an insertion-ordered map so that exports walk fields in a
/// stable, deterministic order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    fields: IndexMap<String, Field>,
}

impl Schema {
    /// An empty schema, extended fluently via [`Schema::field`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field under a local name. Re-registering a name replaces
    /// the earlier definition.
    pub fn field(mut self, name: impl Into<String>, field: Field) -> Self {
        self.fields.insert(name.into(), field);
        self
    }
}

impl<K: Into<String>, const N: usize> From<[(K, Field); N]> for Schema {
    fn from(entries: [(K, Field); N]) -> Self {
        Self {
            fields: entries.into_iter().map(|(k, f)| (k.into(), f)).collect(),
        }
    }
}

/// A schema bound to resolved values.
///
/// Constructed unresolved via [`Container::new`], or constructed and
/// resolved in one call via [`Container::resolved`]. The set of field names
/// is fixed at construction. Accessing a field before resolution yields the
/// kind's zero value rather than an error; callers are responsible for
/// resolving first.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    pub(crate) fields: IndexMap<String, Field>,
}

impl Container {
    /// Wrap a schema without resolving it.
    pub fn new(schema: Schema) -> Self {
        Self {
            fields: schema.fields,
        }
    }

    /// Construct and resolve in one call.
    ///
    /// On error the partially-resolved container is discarded; there is no
    /// partial-commit state to observe.
    pub fn resolved(schema: Schema, env: &Env) -> Result<Self, SchemaError> {
        let mut container = Self::new(schema);
        container.initialize(env)?;
        Ok(container)
    }

    /// Resolve every field against `env`, recursing into nested containers.
    ///
    /// The first failure aborts the whole pass and leaves the container in
    /// an indeterminate mix of resolved and unresolved fields; treat it as
    /// invalid afterwards.
    pub fn initialize(&mut self, env: &Env) -> Result<(), SchemaError> {
        for (name, field) in self.fields.iter_mut() {
            resolve_field(name, field, env)?;
        }
        tracing::debug!(fields = self.fields.len(), "container resolved");
        Ok(())
    }

    /// Read a string field. Dotted keys traverse nested containers.
    pub fn get_string(&self, key: &str) -> Result<String, SchemaError> {
        Ok(match self.fetch(key, Kind::String)? {
            Some(Value::Str(s)) => s.clone(),
            _ => String::new(),
        })
    }

    /// Read an integer field. Dotted keys traverse nested containers.
    pub fn get_int(&self, key: &str) -> Result<i64, SchemaError> {
        Ok(match self.fetch(key, Kind::Integer)? {
            Some(Value::Int(i)) => *i,
            _ => 0,
        })
    }

    /// Read a boolean field. Dotted keys traverse nested containers.
    pub fn get_bool(&self, key: &str) -> Result<bool, SchemaError> {
        Ok(match self.fetch(key, Kind::Boolean)? {
            Some(Value::Bool(b)) => *b,
            _ => false,
        })
    }

    /// Borrow a nested container. Dotted keys traverse intermediate levels.
    pub fn get_container(&self, key: &str) -> Result<&Container, SchemaError> {
        match self.fetch(key, Kind::Nested)? {
            Some(Value::Container(c)) => Ok(c),
            _ => unreachable!("nested field constructed without child container"),
        }
    }

    /// Look up a field by dotted path, checking the final segment's kind.
    fn fetch(&self, key: &str, requested: Kind) -> Result<Option<&Value>, SchemaError> {
        let field = self.lookup(key)?;
        if field.kind != requested {
            return Err(SchemaError::TypeMismatch {
                key: key.to_string(),
                declared: field.kind,
                requested,
            });
        }
        Ok(field.value.as_ref())
    }

    /// Walk `path` segment by segment, descending through nested containers
    /// for every segment but the last.
    fn lookup(&self, path: &str) -> Result<&Field, SchemaError> {
        let mut current = self;
        let mut segments = path.split('.').peekable();
        loop {
            let segment = segments.next().unwrap_or_default();
            let field =
                current
                    .fields
                    .get(segment)
                    .ok_or_else(|| SchemaError::UnregisteredKey {
                        key: segment.to_string(),
                    })?;
            if segments.peek().is_none() {
                return Ok(field);
            }
            match field.value.as_ref() {
                Some(Value::Container(child)) if field.kind == Kind::Nested => current = child,
                _ => {
                    return Err(SchemaError::TypeMismatch {
                        key: segment.to_string(),
                        declared: field.kind,
                        requested: Kind::Nested,
                    });
                }
            }
        }
    }
}

/// Resolve one field in place: precondition, lookup, default substitution,
/// coercion, post-validation.
fn resolve_field(name: &str, field: &mut Field, env: &Env) -> Result<(), SchemaError> {
    if field.source_key.is_empty() {
        return Err(SchemaError::KeyRequired {
            name: name.to_string(),
        });
    }

    match field.kind {
        Kind::Nested => match field.value.as_mut() {
            Some(Value::Container(child)) => child.initialize(env)?,
            _ => unreachable!("nested field constructed without child container"),
        },
        kind => {
            let mut raw = env.get(&field.source_key);
            if raw.is_empty() {
                if let Some(default) = &field.default {
                    raw = default.render();
                    tracing::trace!(key = %field.source_key, "substituted default value");
                }
            }
            // An empty post-default value leaves the field unresolved; only
            // non-empty values go through coercion, so a parse failure is
            // always a real misconfiguration and aborts the pass.
            field.value = if raw.is_empty() {
                None
            } else {
                Some(coerce(&field.source_key, kind, raw)?)
            };
        }
    }

    // The single requiredness enforcement point, for every kind.
    if field.required && field.value.is_none() {
        return Err(SchemaError::RequiredKeyMissing {
            key: field.source_key.clone(),
        });
    }
    Ok(())
}

fn coerce(key: &str, kind: Kind, raw: String) -> Result<Value, SchemaError> {
    match kind {
        Kind::String => Ok(Value::Str(raw)),
        Kind::Integer => match raw.parse::<i64>() {
            Ok(i) => Ok(Value::Int(i)),
            Err(_) => Err(SchemaError::InvalidInteger {
                key: key.to_string(),
                value: raw,
            }),
        },
        Kind::Boolean => match parse_bool(&raw) {
            Some(b) => Ok(Value::Bool(b)),
            None => Err(SchemaError::InvalidBoolean {
                key: key.to_string(),
                value: raw,
            }),
        },
        Kind::Nested => unreachable!("nested fields never reach scalar coercion"),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Some(true),
        "0" | "f" | "false" => Some(false),
        _ => None,
    }
}
