//! Export projections over a resolved container.
//!
//! Both projections flatten nested containers into the parent namespace
//! under their own local names, so the JSON document and the `KEY=value`
//! text agree on shape. Output order follows schema insertion order, making
//! repeated exports byte-identical.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::schema::{Container, Value};

impl Serialize for Container {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        self.serialize_flattened(&mut map)?;
        map.end()
    }
}

impl Container {
    /// Pretty-printed JSON object mapping local field names to resolved
    /// values. Unresolved fields render as `null`.
    pub fn json_export(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Newline-terminated `KEY=value` lines, one per field. Unresolved
    /// fields render as an empty value.
    pub fn env_export(&self) -> String {
        let mut out = String::new();
        self.write_env_lines(&mut out);
        out
    }

    fn serialize_flattened<M>(&self, map: &mut M) -> Result<(), M::Error>
    where
        M: SerializeMap,
    {
        for (name, field) in &self.fields {
            match field.value.as_ref() {
                Some(Value::Container(child)) => child.serialize_flattened(map)?,
                Some(Value::Str(s)) => map.serialize_entry(name, s)?,
                Some(Value::Int(i)) => map.serialize_entry(name, i)?,
                Some(Value::Bool(b)) => map.serialize_entry(name, b)?,
                None => map.serialize_entry(name, &None::<String>)?,
            }
        }
        Ok(())
    }

    fn write_env_lines(&self, out: &mut String) {
        for (name, field) in &self.fields {
            match field.value.as_ref() {
                Some(Value::Container(child)) => child.write_env_lines(out),
                value => {
                    out.push_str(name);
                    out.push('=');
                    if let Some(v) = value {
                        out.push_str(&v.render());
                    }
                    out.push('\n');
                }
            }
        }
    }
}
