//! Record introspection.
//!
//! Rust has no runtime reflection, so record types describe themselves by
//! implementing [`Reflect`]. A record reports its class and two field lists:
//! the fields any caller could read, and the restricted fields only the type
//! itself (or a privileged reader) can see. The exporter renders the first
//! list followed by the second, exactly as reported. Nothing is sorted,
//! merged or deduplicated.

use std::fmt;

use crate::value::Value;

/// How a record introduces itself in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordClass {
    /// A declared type, rendered as `Name::__set_state(array(...))`.
    Named(String),
    /// The host's generic object with no declared type, rendered as
    /// `(object) array(...)`.
    Anonymous,
}

impl RecordClass {
    pub fn named(name: impl Into<String>) -> Self {
        RecordClass::Named(name.into())
    }
}

/// A single `name => value` field reported by a record.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub value: Value,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Introspection capability for record values.
///
/// Implementations must report fields in a stable order so that exporting
/// the same value twice yields identical text.
pub trait Reflect: Send + Sync {
    fn class(&self) -> RecordClass;

    /// Freely visible fields, in the type's natural order.
    fn visible_fields(&self) -> Vec<Field>;

    /// Non-public fields declared anywhere in the type's ancestry, in
    /// declaration order.
    fn restricted_fields(&self) -> Vec<Field> {
        Vec::new()
    }

    /// Both passes concatenated: visible first, then restricted.
    fn fields(&self) -> Vec<Field> {
        let mut fields = self.visible_fields();
        fields.extend(self.restricted_fields());
        fields
    }
}

impl fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.class() {
            RecordClass::Named(name) => write!(f, "Record({name})"),
            RecordClass::Anonymous => f.write_str("Record(object)"),
        }
    }
}

/// An owned record built field by field.
///
/// # Example
/// ```
/// use varexport_core::{Record, VarExport};
///
/// let point = Record::named("Geo\\Point").field("x", 1).restricted("srid", 4326);
/// assert_eq!(
///     VarExport::new(point).to_string(),
///     "Geo\\Point::__set_state(array(\n   'x' => 1,\n   'srid' => 4326,\n))"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Record {
    class: RecordClass,
    visible: Vec<Field>,
    restricted: Vec<Field>,
}

impl Record {
    pub fn named(name: impl Into<String>) -> Self {
        Self::with_class(RecordClass::named(name))
    }

    pub fn anonymous() -> Self {
        Self::with_class(RecordClass::Anonymous)
    }

    pub fn with_class(class: RecordClass) -> Self {
        Self {
            class,
            visible: Vec::new(),
            restricted: Vec::new(),
        }
    }

    /// Add a freely visible field.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.visible.push(Field::new(name, value));
        self
    }

    /// Add a restricted field.
    pub fn restricted(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.restricted.push(Field::new(name, value));
        self
    }

    pub fn push_field(&mut self, field: Field) {
        self.visible.push(field);
    }
}

impl Reflect for Record {
    fn class(&self) -> RecordClass {
        self.class.clone()
    }

    fn visible_fields(&self) -> Vec<Field> {
        self.visible.clone()
    }

    fn restricted_fields(&self) -> Vec<Field> {
        self.restricted.clone()
    }
}
