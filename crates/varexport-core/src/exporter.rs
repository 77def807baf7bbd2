//! Exporter: renders a [`Value`] as a PHP `var_export`-style literal.
//!
//! The output mirrors the host literal syntax so it can be pasted back into
//! source code:
//!
//! - **Scalars**: `NULL`, `true`/`false`, integers, floats (`1.0`, `1.0E+25`)
//! - **Strings**: single-quoted, with `\` and `'` backslash-escaped
//! - **Containers**: `array (` + one `key => value,` line per entry + `)`
//! - **Records**: `Name::__set_state(array(` ... `))`, or `(object) array(` ... `)`
//!   for anonymous records
//! - **Depth bound**: past the bound, containers and records print their
//!   header followed by `...` and the closing token
//!
//! Nested containers and records start on their own line, indented two spaces
//! per level. Record entries get one extra space so they line up after the
//! record header.
//!
//! # Example
//! ```
//! use varexport_core::{Container, MaxDepth, VarExport};
//!
//! let value = Container::new()
//!     .with("key", "value")
//!     .with("another", Container::new().with("nested", false));
//! assert_eq!(
//!     VarExport::new(value).export(MaxDepth::Unbounded),
//!     "array (\n  'key' => 'value',\n  'another' => \n  array (\n    'nested' => false,\n  ),\n)"
//! );
//! ```

use std::fmt;

use crate::depth::MaxDepth;
use crate::reflect::{RecordClass, Reflect};
use crate::value::{Container, Key, Value};

/// A value bound for export.
#[derive(Debug, Clone)]
pub struct VarExport {
    value: Value,
}

impl VarExport {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Render the bound value, expanding at most `max_depth` levels.
    pub fn export(&self, max_depth: MaxDepth) -> String {
        export(&self.value, max_depth)
    }
}

/// Renders with no depth bound.
impl fmt::Display for VarExport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.export(MaxDepth::Unbounded))
    }
}

/// Render `value` as a literal, expanding at most `max_depth` levels.
///
/// With [`MaxDepth::Unbounded`] a cyclic record graph recurses until the stack
/// overflows. Pass a finite bound when cycles are possible.
pub fn export(value: &Value, max_depth: MaxDepth) -> String {
    tracing::debug!(%max_depth, "exporting value");
    let mut out = String::new();
    export_value(value, max_depth.initial_budget(), 0, &mut out);
    out
}

/// Render any value at the given indentation level.
///
/// `budget` is the remaining expansion budget (`None` = unbounded). Every call
/// consumes one unit, saturating at zero; a container or record whose budget
/// is then exhausted prints its truncated form.
fn export_value(value: &Value, budget: Option<usize>, indent: usize, out: &mut String) {
    let budget = budget.map(|b| b.saturating_sub(1));
    match value {
        Value::Null | Value::Opaque => out.push_str("NULL"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Int(i) => out.push_str(&format_int(*i)),
        Value::Float(f) => out.push_str(&format_float(*f)),
        Value::String(s) => export_string(s, out),
        Value::Container(c) => export_container(c, budget, indent, out),
        Value::Record(r) => export_record(r.as_ref(), budget, indent, out),
    }
}

fn export_container(c: &Container, budget: Option<usize>, indent: usize, out: &mut String) {
    start_nested(indent, out);
    out.push_str("array (");
    if !expands(budget) {
        out.push_str("...)");
        return;
    }
    out.push('\n');
    let entry_indent = make_indent(indent + 1);
    for (key, value) in c.iter() {
        out.push_str(&entry_indent);
        export_key(key, out);
        export_entry_value(value, budget, indent, out);
    }
    out.push_str(&make_indent(indent));
    out.push(')');
}

fn export_record(record: &dyn Reflect, budget: Option<usize>, indent: usize, out: &mut String) {
    let class = record.class();
    let close = match &class {
        RecordClass::Named(name) => {
            start_nested(indent, out);
            out.push_str(name);
            out.push_str("::__set_state(array(");
            "))"
        }
        RecordClass::Anonymous => {
            start_nested(indent, out);
            out.push_str("(object) array(");
            ")"
        }
    };
    if !expands(budget) {
        out.push_str("...");
        out.push_str(close);
        return;
    }
    out.push('\n');

    let fields = record.fields();
    tracing::trace!(?class, fields = fields.len(), "reflected record");
    let mut entry_indent = make_indent(indent + 1);
    entry_indent.push(' ');
    for field in &fields {
        out.push_str(&entry_indent);
        export_string(&field.name, out);
        export_entry_value(&field.value, budget, indent, out);
    }
    out.push_str(&make_indent(indent));
    out.push_str(close);
}

/// Emit ` => value,\n` for one entry whose key is already written.
fn export_entry_value(value: &Value, budget: Option<usize>, indent: usize, out: &mut String) {
    out.push_str(" => ");
    export_value(value, budget, indent + 1, out);
    out.push_str(",\n");
}

/// Nested containers and records open on a fresh line at their own indent.
fn start_nested(indent: usize, out: &mut String) {
    if indent > 0 {
        out.push('\n');
        out.push_str(&make_indent(indent));
    }
}

/// Generate a 2-space-per-level indentation string.
fn make_indent(depth: usize) -> String {
    "  ".repeat(depth)
}

fn expands(budget: Option<usize>) -> bool {
    budget.map_or(true, |b| b > 0)
}

fn export_key(key: &Key, out: &mut String) {
    match key {
        Key::Int(i) => out.push_str(&format_int(*i)),
        Key::Str(s) => export_string(s, out),
    }
}

fn export_string(s: &str, out: &mut String) {
    out.push('\'');
    escape_into(s, out);
    out.push('\'');
}

/// Escape a string for a single-quoted literal: every backslash is doubled
/// and every single quote gets a backslash. Nothing else is touched.
pub fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_into(s, &mut out);
    out
}

// Backslashes are doubled in the same pass as quotes are escaped, so the
// backslash added before a quote is never doubled itself.
fn escape_into(s: &str, out: &mut String) {
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            _ => out.push(ch),
        }
    }
}

/// `i64::MIN` has no direct literal form (the host parses `-9223372036854775808`
/// as negation of an overflowing float), so it is written as an expression.
fn format_int(i: i64) -> String {
    if i == i64::MIN {
        format!("{}-1", i64::MIN + 1)
    } else {
        i.to_string()
    }
}

/// Format a float so it reads back as a float:
/// - shortest round-trip digits, always with a fraction or an exponent (`1.0`)
/// - exponent form written as `1.5E-7` / `1.0E+25`
/// - non-finite values as `NAN`, `INF`, `-INF`
fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "NAN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "INF" } else { "-INF" }.to_string();
    }
    // Debug formatting already guarantees a fractional part and switches to
    // exponent form for very large or small magnitudes.
    let s = format!("{f:?}");
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let mut out = String::with_capacity(s.len() + 3);
            out.push_str(mantissa);
            if !mantissa.contains('.') {
                out.push_str(".0");
            }
            out.push('E');
            if !exp.starts_with('-') {
                out.push('+');
            }
            out.push_str(exp);
            out
        }
        None => s,
    }
}
