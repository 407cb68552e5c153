//! Schema definition and resolution.
//!
//! A [`Schema`] maps local field names to typed [`Field`] definitions; a
//! [`Container`] resolves that schema against an [`Env`](crate::env::Env)
//! in a single pass and serves typed reads afterwards.

pub mod container;
pub mod field;

pub use container::{Container, Schema};
pub use field::{Field, Kind, Value};

use thiserror::Error;

/// Errors during schema resolution or typed access.
///
/// Every variant carries enough context (key name, expected/actual kind) to
/// pinpoint the schema misconfiguration or the missing environment variable
/// without extra logging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A field was defined with an empty environment variable name.
    #[error("field {name} has no source key")]
    KeyRequired { name: String },

    /// A required field resolved to nothing: its variable is unset and no
    /// default was given.
    #[error("required key {key} missing")]
    RequiredKeyMissing { key: String },

    /// An accessor was called with a local name the container does not know.
    #[error("{key} is not a registered key")]
    UnregisteredKey { key: String },

    /// An accessor's kind does not match the field's declared kind.
    #[error("{key} is registered as a {declared}, but you are trying to fetch it as a {requested}")]
    TypeMismatch {
        key: String,
        declared: Kind,
        requested: Kind,
    },

    /// A non-empty value failed base-10 integer parsing.
    #[error("invalid integer for {key}: {value:?}")]
    InvalidInteger { key: String, value: String },

    /// A non-empty value failed boolean parsing.
    #[error("invalid boolean for {key}: {value:?}")]
    InvalidBoolean { key: String, value: String },
}
