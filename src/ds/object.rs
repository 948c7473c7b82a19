use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

use crate::ds::value::Value;

/// Backing store for one delegation object: the members this level owns,
/// plus the parent object unresolved lookups fall through to.
pub struct ObjectData {
    members: HashMap<String, Value>,
    proto: Option<ObjectRef>,
}

impl ObjectData {
    fn new(proto: Option<ObjectRef>) -> Self {
        ObjectData {
            members: HashMap::new(),
            proto,
        }
    }
}

/// Shared handle to a delegation object. Cloning the handle shares the
/// object; equality is reference identity.
pub struct ObjectRef {
    inner: Rc<RefCell<ObjectData>>,
}

impl ObjectRef {
    /// Create an empty object with no delegation parent.
    pub fn new() -> Self {
        ObjectRef {
            inner: Rc::new(RefCell::new(ObjectData::new(None))),
        }
    }

    /// Create an empty object whose member lookups fall back to `proto`
    /// when a name is absent locally.
    pub fn delegating_to(proto: Option<&ObjectRef>) -> Self {
        ObjectRef {
            inner: Rc::new(RefCell::new(ObjectData::new(proto.cloned()))),
        }
    }

    /// Look a member up through the delegation chain. Absent members
    /// resolve to `Value::Undefined`.
    pub fn get(&self, name: &str) -> Value {
        let data = self.inner.borrow();
        if let Some(v) = data.members.get(name) {
            return v.clone();
        }
        match &data.proto {
            None => Value::Undefined,
            Some(p) => p.get(name),
        }
    }

    /// The member this level itself owns, ignoring the delegation chain.
    pub fn get_own(&self, name: &str) -> Option<Value> {
        self.inner.borrow().members.get(name).cloned()
    }

    pub fn has(&self, name: &str) -> bool {
        let data = self.inner.borrow();
        if data.members.contains_key(name) {
            return true;
        }
        match &data.proto {
            None => false,
            Some(p) => p.has(name),
        }
    }

    pub fn has_own(&self, name: &str) -> bool {
        self.inner.borrow().members.contains_key(name)
    }

    /// Define or overwrite an own member.
    pub fn set(&self, name: impl Into<String>, value: Value) {
        self.inner.borrow_mut().members.insert(name.into(), value);
    }

    /// Own member names, sorted for stable iteration.
    pub fn own_member_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.inner.borrow().members.keys().cloned().collect();
        names.sort();
        names
    }

    /// All member names visible through the delegation chain, deduplicated
    /// and sorted.
    pub fn member_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        self.collect_names(&mut names);
        names.sort();
        names.dedup();
        names
    }

    fn collect_names(&self, out: &mut Vec<String>) {
        let data = self.inner.borrow();
        out.extend(data.members.keys().cloned());
        if let Some(p) = &data.proto {
            p.collect_names(out);
        }
    }

    pub fn proto(&self) -> Option<ObjectRef> {
        self.inner.borrow().proto.clone()
    }

    /// Reference identity.
    pub fn same(&self, other: &ObjectRef) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Clone for ObjectRef {
    fn clone(&self) -> Self {
        ObjectRef {
            inner: self.inner.clone(),
        }
    }
}
impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}
impl Display for ObjectRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "object")
    }
}
impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectRef(...)")
    }
}
