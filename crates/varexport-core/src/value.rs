//! The value model the exporter renders.
//!
//! `Value` is a closed set of kinds: scalars, ordered containers and records.
//! Containers behave like the host's ordered hash arrays: keys are integers
//! or strings, iteration follows insertion order, and appending picks the next
//! free integer key.

use std::collections::HashMap;
use std::sync::Arc;

use crate::reflect::{Record, Reflect};

/// A renderable value.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Stand-in for runtime handles that have no literal form (streams,
    /// callables). Rendered as the null literal.
    Opaque,
    Container(Container),
    /// A live record. Fields are pulled through [`Reflect`] at render time, so
    /// shared handles may form cycles; only a finite depth bound stops those.
    Record(Arc<dyn Reflect>),
}

impl Value {
    /// Wrap any [`Reflect`] implementor as a record value.
    pub fn record<R: Reflect + 'static>(record: R) -> Self {
        Value::Record(Arc::new(record))
    }

    /// True for every kind that renders on a single line without nesting.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Value::Container(_) | Value::Record(_))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! value_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Int(i64::from(n))
                }
            }
        )*
    };
}

value_from_int!(i8, i16, i32, i64, u8, u16, u32);

// Unsigned values beyond i64::MAX degrade to floats, as host integers do on
// overflow.
impl From<u64> for Value {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(i) => Value::Int(i),
            Err(_) => Value::Float(n as f64),
        }
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::from(n as u64)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f64::from(f))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Int(i) => Value::Int(i),
            Key::Str(s) => Value::String(s),
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Container(items.into_iter().collect())
    }
}

impl From<Container> for Value {
    fn from(c: Container) -> Self {
        Value::Container(c)
    }
}

impl From<Record> for Value {
    fn from(r: Record) -> Self {
        Value::record(r)
    }
}

/// A container key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    /// Build a key from a string, turning canonical decimal integers into
    /// integer keys: `"42"` and `"-7"` become `Int`, `"07"`, `"-0"`, `"+1"` stay
    /// strings.
    pub fn normalize(s: String) -> Self {
        match s.parse::<i64>() {
            Ok(i) if i.to_string() == s => Key::Int(i),
            _ => Key::Str(s),
        }
    }
}

macro_rules! key_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Key {
                fn from(n: $t) -> Self {
                    Key::Int(i64::from(n))
                }
            }
        )*
    };
}

key_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::normalize(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::normalize(s)
    }
}

/// An ordered key/value container.
///
/// Entry order is insertion order. Re-inserting an existing key overwrites its
/// value without moving it.
#[derive(Debug, Clone, Default)]
pub struct Container {
    entries: Vec<(Key, Value)>,
    positions: HashMap<Key, usize>,
    next_index: i64,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value under the next free integer key.
    ///
    /// The next key is one past the largest non-negative integer key seen so
    /// far. At `i64::MAX` it stops advancing and further pushes overwrite the
    /// last slot.
    pub fn push(&mut self, value: impl Into<Value>) {
        let key = Key::Int(self.next_index);
        self.insert(key, value);
    }

    /// Set `key` to `value`, keeping the key's original position if present.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        if let Key::Int(i) = key {
            if i >= self.next_index {
                self.next_index = i.saturating_add(1);
            }
        }
        match self.positions.get(&key) {
            Some(&pos) => self.entries[pos].1 = value,
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.positions.get(key).map(|&pos| &self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl<V: Into<Value>> FromIterator<V> for Container {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut c = Container::new();
        for v in iter {
            c.push(v);
        }
        c
    }
}

impl<K: Into<Key>, V: Into<Value>> Extend<(K, V)> for Container {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}
