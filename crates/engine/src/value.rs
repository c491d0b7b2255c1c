//! Dynamic value model shared by the Equals and Compare engines.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::dispatch::SelfDescribing;
use crate::identity::{self, Node, ObjectId, Shared};

/// One position of a sequence. `None` is a hole: an index with no stored
/// element, distinct from a stored [`Value::Undefined`].
pub type Slot = Option<Value>;

/// Ordered, index-addressable, possibly sparse sequence.
pub type Sequence = Shared<RwLock<Vec<Slot>>>;

/// Unordered name to value mapping.
pub type Record = Shared<RwLock<BTreeMap<String, Value>>>;

/// Any datum handed to Equals or Compare.
///
/// Scalars are compared by content. Every other variant lives behind a
/// [`Shared`] handle and carries an identity, which is what makes cyclic
/// graphs expressible: push a clone of an array into itself and the array
/// contains itself.
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Date(DateTime<Utc>),
    /// A wrapper object around a primitive.
    Boxed(Shared<Value>),
    Array(Sequence),
    Object(Record),
    /// A value supplying its own equality and/or ordering.
    Custom(Shared<dyn SelfDescribing>),
    /// Comparable only by identity.
    Opaque(Shared<dyn Any + Send + Sync>),
}

/// Structural category a value falls into at a recursion step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Nullish,
    Boolean,
    Number,
    String,
    Date,
    BoxedScalar,
    Sequence,
    KeyedCollection,
    SelfDescribing,
    Opaque,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Nullish => "nullish",
            Category::Boolean => "boolean",
            Category::Number => "number",
            Category::String => "string",
            Category::Date => "date",
            Category::BoxedScalar => "boxed scalar",
            Category::Sequence => "sequence",
            Category::KeyedCollection => "keyed collection",
            Category::SelfDescribing => "self-describing value",
            Category::Opaque => "opaque object",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Build a sequence from raw slots, holes included.
    pub fn array<I: IntoIterator<Item = Slot>>(slots: I) -> Self {
        Value::Array(Shared::new(RwLock::new(slots.into_iter().collect())))
    }

    /// Build a dense sequence.
    pub fn array_of<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::array(values.into_iter().map(|value| Some(value.into())))
    }

    /// An empty sequence.
    pub fn new_array() -> Self {
        Self::array(std::iter::empty())
    }

    /// A sequence of `len` holes.
    pub fn holes(len: usize) -> Self {
        Self::array(std::iter::repeat_with(|| None).take(len))
    }

    /// Build a keyed collection.
    pub fn object<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let entries = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value))
            .collect();
        Value::Object(Shared::new(RwLock::new(entries)))
    }

    /// An empty keyed collection.
    pub fn new_object() -> Self {
        Value::Object(Shared::new(RwLock::new(BTreeMap::new())))
    }

    /// Wrap a primitive in a boxed scalar.
    pub fn boxed(primitive: Value) -> Self {
        Value::Boxed(Shared::new(primitive))
    }

    /// Wrap a self-describing value.
    pub fn custom<C: SelfDescribing + 'static>(value: C) -> Self {
        let node: Arc<Node<dyn SelfDescribing>> = identity::node(value);
        Value::Custom(Shared::from_node(node))
    }

    /// Wrap an arbitrary object that is only comparable by identity.
    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self {
        let node: Arc<Node<dyn Any + Send + Sync>> = identity::node(value);
        Value::Opaque(Shared::from_node(node))
    }

    /// Wrap an instant.
    pub fn date(instant: DateTime<Utc>) -> Self {
        Value::Date(instant)
    }

    /// Structural category used to pick a comparison rule.
    pub fn category(&self) -> Category {
        match self {
            Value::Undefined | Value::Null => Category::Nullish,
            Value::Bool(_) => Category::Boolean,
            Value::Number(_) => Category::Number,
            Value::String(_) => Category::String,
            Value::Date(_) => Category::Date,
            Value::Boxed(_) => Category::BoxedScalar,
            Value::Array(_) => Category::Sequence,
            Value::Object(_) => Category::KeyedCollection,
            Value::Custom(_) => Category::SelfDescribing,
            Value::Opaque(_) => Category::Opaque,
        }
    }

    /// `Undefined` or `Null`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// A NaN number.
    pub fn is_nan(&self) -> bool {
        matches!(self, Value::Number(n) if n.is_nan())
    }

    /// Identity token for heap variants; scalars have none.
    pub fn identity(&self) -> Option<ObjectId> {
        match self {
            Value::Boxed(inner) => Some(inner.id()),
            Value::Array(seq) => Some(seq.id()),
            Value::Object(record) => Some(record.id()),
            Value::Custom(custom) => Some(custom.id()),
            Value::Opaque(opaque) => Some(opaque.id()),
            _ => None,
        }
    }

    /// Identity test: scalars by primitive equality, heap values by handle.
    ///
    /// `0` and `-0` are the same; NaN is never the same as anything.
    pub fn same(a: &Value, b: &Value) -> bool {
        match (a, b) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(x), Value::Bool(y)) => x == y,
            (Value::Number(x), Value::Number(y)) => x == y,
            (Value::String(x), Value::String(y)) => x == y,
            (Value::Date(x), Value::Date(y)) => x == y,
            (Value::Boxed(x), Value::Boxed(y)) => Shared::ptr_eq(x, y),
            (Value::Array(x), Value::Array(y)) => Shared::ptr_eq(x, y),
            (Value::Object(x), Value::Object(y)) => Shared::ptr_eq(x, y),
            (Value::Custom(x), Value::Custom(y)) => Shared::ptr_eq(x, y),
            (Value::Opaque(x), Value::Opaque(y)) => Shared::ptr_eq(x, y),
            _ => false,
        }
    }

    /// The sequence handle, if `self` is a sequence.
    pub fn as_array(&self) -> Option<&Sequence> {
        match self {
            Value::Array(seq) => Some(seq),
            _ => None,
        }
    }

    /// The keyed collection handle, if `self` is one.
    pub fn as_object(&self) -> Option<&Record> {
        match self {
            Value::Object(record) => Some(record),
            _ => None,
        }
    }

    /// The number, if `self` is an unboxed number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The text, if `self` is an unboxed string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Length of a sequence, holes included.
    pub fn array_len(&self) -> Option<usize> {
        self.as_array().map(|seq| seq.read().len())
    }

    /// Append to a sequence. Returns `false` if `self` is not a sequence.
    pub fn push(&self, value: Value) -> bool {
        self.push_slot(Some(value))
    }

    /// Append a hole to a sequence.
    pub fn push_hole(&self) -> bool {
        self.push_slot(None)
    }

    fn push_slot(&self, slot: Slot) -> bool {
        match self.as_array() {
            Some(seq) => {
                seq.write().push(slot);
                true
            }
            None => false,
        }
    }

    /// Store `value` at `index`, padding with holes when `index` is past the end.
    pub fn set_index(&self, index: usize, value: Value) -> bool {
        let Some(seq) = self.as_array() else {
            return false;
        };
        let mut slots = seq.write();
        if index >= slots.len() {
            slots.resize_with(index + 1, || None);
        }
        slots[index] = Some(value);
        true
    }

    /// Element at `index`; holes and out-of-range indices yield `None`.
    pub fn get_index(&self, index: usize) -> Option<Value> {
        self.as_array()
            .and_then(|seq| seq.read().get(index).cloned().flatten())
    }

    /// Store `value` under `key` in a keyed collection.
    pub fn insert(&self, key: impl Into<String>, value: Value) -> bool {
        match self.as_object() {
            Some(record) => {
                record.write().insert(key.into(), value);
                true
            }
            None => false,
        }
    }

    /// Value stored under `key` in a keyed collection.
    pub fn get_key(&self, key: &str) -> Option<Value> {
        self.as_object()
            .and_then(|record| record.read().get(key).cloned())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
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

impl From<DateTime<Utc>> for Value {
    fn from(instant: DateTime<Utc>) -> Self {
        Value::Date(instant)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_debug(self, f, &mut Vec::new())
    }
}

fn write_debug(value: &Value, f: &mut fmt::Formatter<'_>, path: &mut Vec<ObjectId>) -> fmt::Result {
    match value {
        Value::Undefined => f.write_str("undefined"),
        Value::Null => f.write_str("null"),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Number(n) => write!(f, "{n}"),
        Value::String(s) => write!(f, "{s:?}"),
        Value::Date(instant) => write!(f, "Date({})", instant.to_rfc3339()),
        Value::Boxed(inner) => {
            f.write_str("Boxed(")?;
            write_debug(inner, f, path)?;
            f.write_str(")")
        }
        Value::Array(seq) => {
            let id = seq.id();
            if path.contains(&id) {
                return write!(f, "[Circular {id}]");
            }
            path.push(id);
            f.write_str("[")?;
            for (index, slot) in seq.read_recursive().iter().enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                match slot {
                    Some(element) => write_debug(element, f, path)?,
                    None => f.write_str("<hole>")?,
                }
            }
            path.pop();
            f.write_str("]")
        }
        Value::Object(record) => {
            let id = record.id();
            if path.contains(&id) {
                return write!(f, "{{Circular {id}}}");
            }
            path.push(id);
            f.write_str("{")?;
            for (index, (key, element)) in record.read_recursive().iter().enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{key:?}: ")?;
                write_debug(element, f, path)?;
            }
            path.pop();
            f.write_str("}")
        }
        Value::Custom(custom) => write!(f, "{:?}", &**custom),
        Value::Opaque(opaque) => write!(f, "Opaque({})", opaque.id()),
    }
}
