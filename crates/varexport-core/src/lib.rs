//! # varexport-core
//!
//! Render in-memory values as PHP `var_export` literals, with an optional
//! depth bound past which nested containers and records are truncated.
//!
//! ## Quick start
//!
//! ```rust
//! use varexport_core::{Container, MaxDepth, VarExport};
//!
//! let value = Container::new().with("a", Container::new().with("b", vec![1, 2]));
//!
//! assert_eq!(
//!     VarExport::new(value.clone()).export(MaxDepth::Limited(2)),
//!     "array (\n  'a' => \n  array (\n    'b' => \n    array (...),\n  ),\n)"
//! );
//! assert_eq!(
//!     VarExport::new(value).to_string(),
//!     "array (\n  'a' => \n  array (\n    'b' => \n    array (\n      0 => 1,\n      1 => 2,\n    ),\n  ),\n)"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`value`]: `Value`, `Key` and the ordered `Container`
//! - [`reflect`]: the `Reflect` introspection trait and the owned `Record`
//! - [`depth`]: the `MaxDepth` bound
//! - [`exporter`]: `VarExport` and the rendering algorithm
//! - [`json`]: JSON documents → `Value`
//! - [`error`]: errors raised at the API boundary

pub mod depth;
pub mod error;
pub mod exporter;
pub mod json;
pub mod reflect;
pub mod value;

pub use depth::MaxDepth;
pub use error::ExportError;
pub use exporter::{escape_string, export, VarExport};
pub use json::{from_json, from_json_str, JsonObjects};
pub use reflect::{Field, Record, RecordClass, Reflect};
pub use value::{Container, Key, Value};
