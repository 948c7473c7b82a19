//! Base-call chains and method call contexts.
//!
//! A member name redefined at more than one ancestry level gets a chain: a
//! linked sequence of the levels' own implementations, least-derived first,
//! where invoking entry *k* exposes entry *k-1* as the call's base. The
//! predecessor link is threaded through the call context rather than stored
//! on the instance, so nested and recursive base calls need no save/restore.

use std::collections::HashMap;
use std::rc::Rc;

use crate::ds::error::ClassError;
use crate::ds::object::ObjectRef;
use crate::ds::value::{Callable, Value};
use crate::engine::class::Class;

/// One level of a base-call chain: a callable implementation plus the link
/// to the next less-derived implementation of the same member name.
pub(crate) struct ChainLink {
    body: Callable,
    prev: Option<Rc<ChainLink>>,
}

/// Context a member implementation runs in: the instance the call is bound
/// to, plus the base-call predecessor for the current dynamic extent.
pub struct CallContext {
    this: ObjectRef,
    base: Option<Rc<ChainLink>>,
}

impl CallContext {
    pub(crate) fn new(this: ObjectRef, base: Option<Rc<ChainLink>>) -> Self {
        CallContext { this, base }
    }

    /// The instance the current call is bound to.
    pub fn this(&self) -> &ObjectRef {
        &self.this
    }

    /// Read a member of the bound instance through the delegation chain.
    pub fn get(&self, name: &str) -> Value {
        self.this.get(name)
    }

    /// Define or overwrite an own member of the bound instance.
    pub fn set(&self, name: impl Into<String>, value: Value) {
        self.this.set(name, value)
    }

    /// Whether a less-derived implementation is available to `base`.
    pub fn has_base(&self) -> bool {
        self.base.is_some()
    }

    /// Invoke the next less-derived implementation of the member this call
    /// is running for, with the same `this`. Without a predecessor this is
    /// a no-op resolving to `Value::Undefined`.
    pub fn base(&self, args: Vec<Value>) -> Result<Value, ClassError> {
        match &self.base {
            None => Ok(Value::Undefined),
            Some(link) => {
                let mut ctx = CallContext::new(self.this.clone(), link.prev.clone());
                link.body.call(&mut ctx, args)
            }
        }
    }
}

/// Build the base-call chain for `name`, walking the ancestry from `class`
/// toward the root and collecting every level's own callable definition.
/// Returns `None` when fewer than two levels own one - such members stay
/// plain delegated lookups and keep their original identity.
pub(crate) fn build_chain(name: &str, class: &Class) -> Option<Callable> {
    let mut bodies: Vec<Callable> = Vec::new();
    let mut level = Some(class.clone());
    while let Some(c) = level {
        if let Some(Value::Function(f)) = c.behavior().get_own(name) {
            bodies.push(f);
        }
        level = c.parent().cloned();
    }
    if bodies.len() <= 1 {
        return None;
    }
    // Collected most-derived first; fold least-derived first so each link's
    // predecessor is the next less-derived implementation.
    bodies.reverse();
    let mut link: Option<Rc<ChainLink>> = None;
    for body in bodies {
        link = Some(Rc::new(ChainLink { body, prev: link }));
    }
    let head = match link {
        Some(l) => l,
        None => return None,
    };
    Some(Callable::closure(move |ctx: &mut CallContext, args| {
        let mut inner = CallContext::new(ctx.this().clone(), head.prev.clone());
        head.body.call(&mut inner, args)
    }))
}

/// Install base-call chains on `instance` for every member name owned at
/// more than one level of `class`'s ancestry. Runs once per instantiation,
/// after the outermost constructor call completes.
pub(crate) fn install_chains(instance: &ObjectRef, class: &Class) {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut level = Some(class.clone());
    while let Some(c) = level {
        for name in c.behavior().own_member_names() {
            if let Some(Value::Function(_)) = c.behavior().get_own(&name) {
                *counts.entry(name).or_insert(0) += 1;
            }
        }
        level = c.parent().cloned();
    }
    for (name, count) in counts {
        if count <= 1 {
            continue;
        }
        // Members the constructor assigned on the instance itself stay
        // untouched, as does any name whose delegated resolution is a data
        // member shadowing the callable definitions below it.
        if instance.has_own(&name) {
            continue;
        }
        if !instance.get(&name).is_callable() {
            continue;
        }
        if let Some(wrapped) = build_chain(&name, class) {
            instance.set(name, Value::Function(wrapped));
        }
    }
}
