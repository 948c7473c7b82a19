//! Member operations over delegation objects.

use crate::ds::error::ClassError;
use crate::ds::object::ObjectRef;
use crate::ds::value::Value;
use crate::engine::chain::CallContext;

/// Read a member of `o` through the delegation chain. Absent members
/// resolve to `Value::Undefined`.
pub fn get_member(o: &ObjectRef, name: &str) -> Value {
    o.get(name)
}

/// Invoke a named member of `o` as a method, with the call bound to `o` and
/// no base-call predecessor.
pub fn call_member(o: &ObjectRef, name: &str, args: Vec<Value>) -> Result<Value, ClassError> {
    if !o.has(name) {
        return Err(ClassError::ReferenceError(format!(
            "'{}' is not defined",
            name
        )));
    }
    match o.get(name) {
        Value::Function(f) => {
            let mut ctx = CallContext::new(o.clone(), None);
            f.call(&mut ctx, args)
        }
        _ => Err(ClassError::TypeError(format!(
            "'{}' is not a function",
            name
        ))),
    }
}
