//! Self-describing values and the scopes their methods recurse through.

use std::fmt;

use log::trace;

use crate::config::CyclePolicy;
use crate::error::CompareResult;
use crate::identity::ObjectId;
use crate::memo::IdentityMemo;
use crate::value::Value;

/// Nested equality operation handed to custom methods and used for elements.
pub type EqualsFn = dyn for<'s> Fn(&Value, &Value, &mut EqualsScope<'s>) -> bool + Send + Sync;

/// Nested ordering operation handed to custom methods and used for elements.
pub type CompareFn =
    dyn for<'s> Fn(&Value, &Value, &mut CompareScope<'s>) -> CompareResult<f64> + Send + Sync;

/// A value that takes over equality, ordering or unboxing for itself.
///
/// Every method defaults to `None`, meaning "capability absent": the engine
/// then falls back to its structural rules. The receiver is always the
/// operand that owns the method and `other` is its peer, so when only the
/// right operand describes itself the engine calls it with the roles
/// swapped (and negates the ordering).
///
/// Nested comparisons must go through the scope so that custom and default
/// resolution stay consistent and cycles are still caught.
///
/// # Thread Safety
///
/// Values may be shared across threads, so implementations must be
/// `Send + Sync`.
pub trait SelfDescribing: fmt::Debug + Send + Sync {
    /// Decide equivalence with `other`.
    fn equals(&self, _other: &Value, _scope: &mut EqualsScope<'_>) -> Option<bool> {
        None
    }

    /// Order `self` relative to `other`: negative when `self` sorts first.
    fn compare(&self, _other: &Value, _scope: &mut CompareScope<'_>) -> Option<CompareResult<f64>> {
        None
    }

    /// The primitive this value stands for, if it is a scalar wrapper.
    fn unwrap(&self) -> Option<Value> {
        None
    }
}

/// Right-hand identities in progress against each left-hand identity.
/// `None` stands for a right operand without identity.
pub type PairMemo = IdentityMemo<Vec<Option<ObjectId>>>;

/// State of one top-level Equals call.
pub struct EqualsScope<'a> {
    nested: &'a EqualsFn,
    memo: PairMemo,
    policy: CyclePolicy,
    cycle: Option<ObjectId>,
}

impl<'a> EqualsScope<'a> {
    /// A fresh scope with an empty memo.
    pub fn new(nested: &'a EqualsFn, policy: CyclePolicy) -> Self {
        Self {
            nested,
            memo: IdentityMemo::new(),
            policy,
            cycle: None,
        }
    }

    /// Compare two nested values with the call's nested operation.
    pub fn equals(&mut self, a: &Value, b: &Value) -> bool {
        let nested = self.nested;
        nested(a, b, self)
    }

    /// Pairs currently being compared.
    pub fn memo(&mut self) -> &mut PairMemo {
        &mut self.memo
    }

    pub fn policy(&self) -> CyclePolicy {
        self.policy
    }

    /// The first cycle flagged under [`CyclePolicy::Reject`].
    pub fn flagged_cycle(&self) -> Option<ObjectId> {
        self.cycle
    }

    pub(crate) fn in_progress(&self, left: ObjectId, right: Option<ObjectId>) -> bool {
        self.memo
            .get(left)
            .is_some_and(|rights| rights.contains(&right))
    }

    pub(crate) fn enter(&mut self, left: ObjectId, right: Option<ObjectId>) {
        match self.memo.get_mut(left) {
            Some(rights) => rights.push(right),
            None => self.memo.set(left, vec![right]),
        }
    }

    pub(crate) fn leave(&mut self, left: ObjectId) {
        let drained = match self.memo.get_mut(left) {
            Some(rights) => {
                rights.pop();
                rights.is_empty()
            }
            None => false,
        };
        if drained {
            self.memo.delete(left);
        }
    }

    /// Answer for a pair reached again while still in progress.
    pub(crate) fn revisit(&mut self, id: ObjectId) -> bool {
        match self.policy {
            CyclePolicy::AssumeEqual => {
                trace!("equals: cycle at {id}, assuming equal");
                true
            }
            CyclePolicy::Reject => {
                trace!("equals: cycle at {id}, rejecting");
                self.cycle.get_or_insert(id);
                false
            }
        }
    }
}

impl fmt::Debug for EqualsScope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EqualsScope")
            .field("memo", &self.memo)
            .field("policy", &self.policy)
            .field("cycle", &self.cycle)
            .finish()
    }
}

/// State of one top-level Compare call.
pub struct CompareScope<'a> {
    nested: &'a CompareFn,
    memo: IdentityMemo,
}

impl<'a> CompareScope<'a> {
    /// A fresh scope with an empty memo.
    pub fn new(nested: &'a CompareFn) -> Self {
        Self {
            nested,
            memo: IdentityMemo::new(),
        }
    }

    /// Order two nested values with the call's nested operation.
    pub fn compare(&mut self, a: &Value, b: &Value) -> CompareResult<f64> {
        let nested = self.nested;
        nested(a, b, self)
    }

    /// Identities currently being ordered.
    pub fn memo(&mut self) -> &mut IdentityMemo {
        &mut self.memo
    }
}

impl fmt::Debug for CompareScope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompareScope")
            .field("memo", &self.memo)
            .finish()
    }
}

/// Let whichever operand describes its own equality decide.
pub(crate) fn dispatch_equals(a: &Value, b: &Value, scope: &mut EqualsScope<'_>) -> Option<bool> {
    if let Value::Custom(left) = a {
        if let Some(verdict) = left.equals(b, scope) {
            trace!("equals: left operand {} decided {verdict}", left.id());
            return Some(verdict);
        }
    }
    if let Value::Custom(right) = b {
        if let Some(verdict) = right.equals(a, scope) {
            trace!("equals: right operand {} decided {verdict}", right.id());
            return Some(verdict);
        }
    }
    None
}

/// Let whichever operand describes its own ordering decide. A right-hand
/// answer is negated so that `compare(a, b) == -compare(b, a)`.
pub(crate) fn dispatch_compare(
    a: &Value,
    b: &Value,
    scope: &mut CompareScope<'_>,
) -> Option<CompareResult<f64>> {
    if let Value::Custom(left) = a {
        if let Some(result) = left.compare(b, scope) {
            trace!("compare: left operand {} decided", left.id());
            return Some(result);
        }
    }
    if let Value::Custom(right) = b {
        if let Some(result) = right.compare(a, scope) {
            trace!("compare: right operand {} decided, negating", right.id());
            return Some(result.map(|order| -order));
        }
    }
    None
}
