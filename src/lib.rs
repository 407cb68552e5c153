//! envschema — declarative, typed environment variable configuration.
//!
//! Callers describe their configuration as a [`Schema`] of typed fields,
//! resolve it once against an [`Env`] lookup source, then read values
//! through typed accessors or export the result as JSON or `KEY=value`
//! text.
//!
//! ```
//! use envschema::{Container, Env, Field, Schema};
//!
//! let env = Env::fixed([("DB_HOST", "localhost"), ("DB_PORT", "5432")]);
//! let config = Container::resolved(
//!     Schema::new()
//!         .field("host", Field::string("DB_HOST").required())
//!         .field("port", Field::integer("DB_PORT").default_value(5432)),
//!     &env,
//! )?;
//!
//! assert_eq!(config.get_string("host")?, "localhost");
//! assert_eq!(config.get_int("port")?, 5432);
//! # Ok::<(), envschema::SchemaError>(())
//! ```

pub mod env;
pub mod export;
pub mod schema;

pub use env::Env;
pub use schema::{Container, Field, Kind, Schema, SchemaError, Value};
