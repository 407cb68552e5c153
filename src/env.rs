//! Environment lookup source for schema resolution.
//!
//! Resolution never touches [`std::env`] directly; it reads through an
//! [`Env`] handle instead. Production code uses [`Env::process()`], while
//! tests and embedders supply [`Env::fixed()`] backed by explicit pairs,
//! eliminating the need for `unsafe` calls to [`std::env::set_var`].

use std::collections::HashMap;

/// Environment variable reader.
///
/// Absent variables read as the empty string: the resolution contract
/// treats "unset" and "set to empty" identically, so the lookup API
/// collapses the two at the source.
#[derive(Clone, Debug, Default)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    /// An `Env` that reads from the real process environment.
    pub fn process() -> Self {
        Self { overrides: None }
    }

    /// An `Env` backed by explicit key-value pairs.
    ///
    /// Variables not in `vars` read as unset. This is the injection point
    /// for tests and for embedders that resolve against something other
    /// than the process environment.
    pub fn fixed(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Look up a variable by name, returning `""` when it is absent.
    pub fn get(&self, name: &str) -> String {
        match &self.overrides {
            Some(map) => map.get(name).cloned().unwrap_or_default(),
            None => std::env::var(name).unwrap_or_default(),
        }
    }
}
