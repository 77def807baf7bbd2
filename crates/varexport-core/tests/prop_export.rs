//! Property-based tests for the exporter.
//!
//! - string literals read back to the original string
//! - integer and float literals read back to the original number
//! - exporting is deterministic
//! - a depth bound at or above the nesting depth changes nothing
//!
//! Reading back uses a small test-local reader for the host's single-quoted
//! literal rules: `\\` is a backslash, `\'` is a quote, any other backslash is
//! kept as-is.
use proptest::prelude::*;
use varexport_core::{Container, MaxDepth, Record, Value, VarExport};

// ============================================================================
// Helpers
// ============================================================================

fn read_single_quoted(literal: &str) -> String {
    let inner = literal
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .expect("literal must be single-quoted");
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.peek() {
                Some('\\') | Some('\'') => {
                    out.push(chars.next().unwrap());
                    continue;
                }
                _ => {}
            }
        }
        out.push(ch);
    }
    out
}

fn read_int(literal: &str) -> i64 {
    if literal == "-9223372036854775807-1" {
        return i64::MIN;
    }
    literal.parse().expect("integer literal")
}

/// Number of container/record levels, counting the root.
fn nesting(value: &Value) -> usize {
    match value {
        Value::Container(c) => 1 + c.iter().map(|(_, v)| nesting(v)).max().unwrap_or(0),
        Value::Record(r) => 1 + r.fields().iter().map(|f| nesting(&f.value)).max().unwrap_or(0),
        _ => 0,
    }
}

// ============================================================================
// Strategies
// ============================================================================

/// Strings dense in backslashes and quotes.
fn arb_tricky_string() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[\\\\'a ]{0,20}").unwrap(),
        prop::string::string_regex("[\\\\'\"\n\ta-z]{0,30}").unwrap(),
        any::<String>(),
        Just("\\'".to_string()),
        Just("\\\\'".to_string()),
        Just("'\\".to_string()),
    ]
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(Value::Opaque),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e6f64..1.0e6).prop_map(Value::Float),
        "[a-z'\\\\]{0,8}".prop_map(Value::String),
    ]
}

fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof!["[a-z]{1,6}", (0u16..50).prop_map(|n| n.to_string())]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec((arb_key(), inner.clone()), 0..6).prop_map(|entries| {
                let mut c = Container::new();
                c.extend(entries);
                Value::Container(c)
            }),
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::from),
            (
                prop::collection::vec(("[a-z]{1,4}", inner.clone()), 0..4),
                prop::collection::vec(("[a-z]{1,4}", inner), 0..3),
            )
                .prop_map(|(visible, restricted)| {
                    let mut r = Record::named("App\\Model");
                    for (k, v) in visible {
                        r = r.field(k, v);
                    }
                    for (k, v) in restricted {
                        r = r.restricted(k, v);
                    }
                    Value::record(r)
                }),
        ]
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn string_literal_reads_back(s in arb_tricky_string()) {
        let literal = VarExport::new(s.clone()).to_string();
        prop_assert_eq!(read_single_quoted(&literal), s);
    }

    #[test]
    fn int_literal_reads_back(n in any::<i64>()) {
        let literal = VarExport::new(n).to_string();
        prop_assert_eq!(read_int(&literal), n);
    }

    #[test]
    fn finite_float_literal_reads_back(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        let literal = VarExport::new(f).to_string();
        prop_assert!(literal.contains('.') || literal.contains('E'), "no float marker in {}", literal);
        let back: f64 = literal.parse().unwrap();
        prop_assert_eq!(back, f);
    }

    #[test]
    fn bool_literal_reads_back(b in any::<bool>()) {
        let literal = VarExport::new(b).to_string();
        prop_assert_eq!(literal.parse::<bool>().unwrap(), b);
    }

    #[test]
    fn export_is_deterministic(v in arb_value(), depth in prop::option::of(0usize..6)) {
        let depth = depth.map_or(MaxDepth::Unbounded, MaxDepth::Limited);
        let exporter = VarExport::new(v);
        prop_assert_eq!(exporter.export(depth), exporter.export(depth));
    }

    #[test]
    fn sufficient_depth_matches_unbounded(v in arb_value(), extra in 0usize..3) {
        let depth = MaxDepth::Limited(nesting(&v) + extra);
        let exporter = VarExport::new(v);
        prop_assert_eq!(exporter.export(depth), exporter.to_string());
    }

    #[test]
    fn insufficient_depth_truncates(v in arb_value()) {
        let levels = nesting(&v);
        prop_assume!(levels > 0);
        let out = VarExport::new(v).export(MaxDepth::Limited(levels - 1));
        prop_assert!(out.contains("(...)"), "expected truncation in {}", out);
    }
}
