//! Identity tokens and shared handles for heap values.

use std::fmt;
use std::ops::Deref;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity token of a heap value.
///
/// Tokens are drawn from a process-wide counter the first time a node's
/// identity is requested, so two distinct nodes never share a token and the
/// numbering is reproducible for a given program order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(u64);

impl ObjectId {
    fn next() -> Self {
        Self(NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw token value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub(crate) struct Node<T: ?Sized> {
    id: OnceLock<ObjectId>,
    value: T,
}

pub(crate) fn node<T>(value: T) -> Arc<Node<T>> {
    Arc::new(Node {
        id: OnceLock::new(),
        value,
    })
}

/// A reference-counted handle to a heap value.
///
/// Cloning the handle never clones the content: every clone observes the same
/// node and reports the same [`ObjectId`].
pub struct Shared<T: ?Sized> {
    node: Arc<Node<T>>,
}

impl<T> Shared<T> {
    /// Allocate a new node holding `value`.
    pub fn new(value: T) -> Self {
        Self { node: node(value) }
    }
}

impl<T: ?Sized> Shared<T> {
    pub(crate) fn from_node(node: Arc<Node<T>>) -> Self {
        Self { node }
    }

    /// Identity token of this node, assigned on first request.
    pub fn id(&self) -> ObjectId {
        *self.node.id.get_or_init(ObjectId::next)
    }

    /// Whether two handles point at the same node.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.node, &other.node)
    }
}

impl<T: ?Sized> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
        }
    }
}

impl<T: ?Sized> Deref for Shared<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.node.value
    }
}

impl<T: ?Sized> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shared({})", self.id())
    }
}
