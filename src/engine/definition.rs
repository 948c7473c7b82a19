//! Behavior definitions and member copying.

use std::collections::HashMap;

use crate::ds::error::ClassError;
use crate::ds::object::ObjectRef;
use crate::ds::value::{Callable, NativeFn, Value};
use crate::engine::chain::CallContext;

lazy_static! {
    /// Reserved member name holding a definition's constructor. Never
    /// copied onto shared-behavior objects.
    pub static ref CONSTRUCTOR_PROP: String = "constructor".to_string();
}

pub fn is_reserved_member(name: &str) -> bool {
    name == CONSTRUCTOR_PROP.as_str()
}

/// Behavior definition: the caller-supplied mapping of member names to
/// values that a class is defined or extended with. The reserved
/// `constructor` entry, if present and callable, becomes the class's own
/// constructor; everything else is copied onto the class's shared-behavior
/// object.
pub struct ClassDef {
    members: HashMap<String, Value>,
}

impl ClassDef {
    pub fn new() -> Self {
        ClassDef {
            members: HashMap::new(),
        }
    }

    /// Add a data member.
    pub fn member(mut self, name: impl Into<String>, value: Value) -> Self {
        self.members.insert(name.into(), value);
        self
    }

    /// Add a native method.
    pub fn method(self, name: impl Into<String>, f: NativeFn) -> Self {
        self.member(name, Value::Function(Callable::native(f)))
    }

    /// Add a capturing-closure method.
    pub fn method_with<F>(self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut CallContext, Vec<Value>) -> Result<Value, ClassError> + 'static,
    {
        self.member(name, Value::Function(Callable::closure(f)))
    }

    /// Set the constructor.
    pub fn constructor(self, f: NativeFn) -> Self {
        self.member(
            CONSTRUCTOR_PROP.as_str(),
            Value::Function(Callable::native(f)),
        )
    }

    /// Set a capturing-closure constructor.
    pub fn constructor_with<F>(self, f: F) -> Self
    where
        F: Fn(&mut CallContext, Vec<Value>) -> Result<Value, ClassError> + 'static,
    {
        self.member(
            CONSTRUCTOR_PROP.as_str(),
            Value::Function(Callable::closure(f)),
        )
    }

    /// Own member names of this definition, sorted.
    pub fn member_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.members.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.members.get(name)
    }

    /// The callable constructor this definition carries, if any. A
    /// non-callable value in the constructor slot is treated as absent.
    pub(crate) fn constructor_fn(&self) -> Option<Callable> {
        match self.members.get(CONSTRUCTOR_PROP.as_str()) {
            Some(Value::Function(f)) => Some(f.clone()),
            _ => None,
        }
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.members.iter()
    }
}

impl Default for ClassDef {
    fn default() -> Self {
        Self::new()
    }
}

impl From<()> for ClassDef {
    /// The empty definition; a missing extension input extends without
    /// adding anything.
    fn from(_: ()) -> Self {
        ClassDef::new()
    }
}

impl From<Callable> for ClassDef {
    /// A bare constructor extends a class without contributing members.
    fn from(ctor: Callable) -> Self {
        ClassDef::new().member(CONSTRUCTOR_PROP.as_str(), Value::Function(ctor))
    }
}

/// Copy every own member of `source` onto `destination`, overwriting
/// unconditionally. The reserved constructor slot is excluded; it is
/// handled by constructor composition, and no wrapping happens here.
pub(crate) fn copy_members(destination: &ObjectRef, source: &ClassDef) {
    for (name, value) in source.entries() {
        if is_reserved_member(name) {
            continue;
        }
        destination.set(name.clone(), value.clone());
    }
}
