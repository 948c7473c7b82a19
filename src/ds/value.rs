use std::fmt;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

use crate::ds::error::ClassError;
use crate::ds::object::ObjectRef;
use crate::engine::chain::CallContext;

/// Function signature for member implementations.
/// Implementations receive the call context (the instance the call is bound
/// to, plus the base-call predecessor if the member is part of a chain) and
/// the call arguments.
pub type NativeFn = fn(ctx: &mut CallContext, args: Vec<Value>) -> Result<Value, ClassError>;

/// Shared closure form for implementations that capture state.
pub type ClosureFn = Rc<dyn Fn(&mut CallContext, Vec<Value>) -> Result<Value, ClassError>>;

/// Member implementation body.
pub enum MethodBody {
    /// Direct function pointer - zero overhead for compiled-in members.
    Native(NativeFn),
    /// Capturing closure - small vtable indirection cost.
    Closure(ClosureFn),
}

/// A callable member value with shared identity.
///
/// Two `Callable`s compare equal when they share one implementation
/// allocation. Chain installation relies on this: a member owned at exactly
/// one ancestry level resolves to a value identical to the originally
/// supplied callable, never to a synthesized wrapper.
pub struct Callable {
    body: Rc<MethodBody>,
}

impl Callable {
    pub fn native(f: NativeFn) -> Self {
        Callable {
            body: Rc::new(MethodBody::Native(f)),
        }
    }

    pub fn closure<F>(f: F) -> Self
    where
        F: Fn(&mut CallContext, Vec<Value>) -> Result<Value, ClassError> + 'static,
    {
        let f: ClosureFn = Rc::new(f);
        Callable {
            body: Rc::new(MethodBody::Closure(f)),
        }
    }

    /// Execute this implementation.
    pub fn call(&self, ctx: &mut CallContext, args: Vec<Value>) -> Result<Value, ClassError> {
        match &*self.body {
            MethodBody::Native(f) => f(ctx, args),
            MethodBody::Closure(f) => f(ctx, args),
        }
    }
}
impl Clone for Callable {
    fn clone(&self) -> Self {
        Callable {
            body: self.body.clone(),
        }
    }
}
impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.body, &other.body)
    }
}
impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &*self.body {
            MethodBody::Native(_) => write!(f, "Callable::Native(..)"),
            MethodBody::Closure(_) => write!(f, "Callable::Closure(..)"),
        }
    }
}

pub enum Value {
    Undefined,
    Null,
    Boolean(bool),
    String(String),
    Number(NumberType),
    Object(ObjectRef),
    Function(Callable),
}

impl Value {
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    pub fn as_callable(&self) -> Option<&Callable> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        match self {
            Value::Undefined => Value::Undefined,
            Value::Null => Value::Null,
            Value::Boolean(d) => Value::Boolean(*d),
            Value::String(d) => Value::String(d.to_string()),
            Value::Number(d) => Value::Number(d.clone()),
            Value::Object(o) => Value::Object(o.clone()),
            Value::Function(c) => Value::Function(c.clone()),
        }
    }
}
impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Value::Undefined => "undefined".to_string(),
                Value::Null => "null".to_string(),
                Value::Boolean(b) => format!("bool({})", b),
                Value::String(s) => format!("\"{}\"", s),
                Value::Number(n) => n.to_string(),
                Value::Object(o) => o.to_string(),
                Value::Function(_) => "function".to_string(),
            }
        )
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Value::Undefined"),
            Value::Null => write!(f, "Value::Null"),
            Value::Boolean(b) => write!(f, "Value::Boolean({})", b),
            Value::String(s) => write!(f, "Value::String({:?})", s),
            Value::Number(n) => write!(f, "Value::Number({:?})", n),
            Value::Object(_) => write!(f, "Value::Object(...)"),
            Value::Function(c) => write!(f, "Value::Function({:?})", c),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.same(b),
            (Value::Function(a), Value::Function(b)) => a == b,
            _ => false,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum NumberType {
    Integer(i64),
    Float(f64),
}
impl Display for NumberType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            NumberType::Integer(i) => write!(f, "{}", i),
            NumberType::Float(nf) => write!(f, "{}", nf),
        }
    }
}
impl Clone for NumberType {
    fn clone(&self) -> Self {
        match self {
            NumberType::Integer(i) => NumberType::Integer(*i),
            NumberType::Float(nf) => NumberType::Float(*nf),
        }
    }
}
