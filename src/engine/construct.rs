//! Constructor composition and the instance factory.

use std::rc::Rc;

use crate::ds::error::ClassError;
use crate::ds::object::ObjectRef;
use crate::ds::value::{Callable, Value};
use crate::engine::chain::{install_chains, CallContext};
use crate::engine::class::Class;

/// Per-instantiation construction state threaded through the composed
/// constructor calls. The depth counter tracks how far down the composed
/// chain the current call is; only the outermost call sees it return to
/// zero. The counter lives here, not in any global, so constructors that
/// themselves create instances of other classes are safe.
pub(crate) struct ConstructorCall {
    instance: ObjectRef,
    class: Class,
    depth: u32,
}

impl ConstructorCall {
    fn new(instance: ObjectRef, class: Class) -> Self {
        ConstructorCall {
            instance,
            class,
            depth: 0,
        }
    }
}

type ComposedFn = Rc<dyn Fn(&mut ConstructorCall, &[Value]) -> Result<Value, ClassError>>;

/// A class's composed constructor: the parent chain's constructors followed
/// by the class's own, as one callable.
pub(crate) struct ComposedConstructor {
    imp: ComposedFn,
}

impl ComposedConstructor {
    pub(crate) fn invoke(
        &self,
        call: &mut ConstructorCall,
        args: &[Value],
    ) -> Result<Value, ClassError> {
        (self.imp)(call, args)
    }
}
impl Clone for ComposedConstructor {
    fn clone(&self) -> Self {
        ComposedConstructor {
            imp: self.imp.clone(),
        }
    }
}

/// Compose `child` (one level's own constructor, if any) over `base` (the
/// parent class's composed constructor, if any). Invoking the result runs
/// the base chain first, then the child, both with `this` bound to the
/// instance under construction and all with the same arguments. When the
/// depth counter returns to zero the invocation was the outermost one, and
/// only then are base-call chains installed on the instance.
///
/// Errors from base or child propagate immediately; the depth never returns
/// to zero on that path, so no chains are installed for a failed
/// construction.
pub(crate) fn compose(
    child: Option<Callable>,
    base: Option<ComposedConstructor>,
) -> ComposedConstructor {
    let imp: ComposedFn = Rc::new(move |call: &mut ConstructorCall, args: &[Value]| {
        call.depth += 1;
        if let Some(base) = &base {
            base.invoke(call, args)?;
        }
        let mut result = Value::Undefined;
        if let Some(child) = &child {
            let mut ctx = CallContext::new(call.instance.clone(), None);
            result = child.call(&mut ctx, args.to_vec())?;
        }
        call.depth -= 1;
        if call.depth == 0 {
            install_chains(&call.instance, &call.class);
        }
        Ok(result)
    });
    ComposedConstructor { imp }
}

/// Allocate an instance of `class`, run its composed constructor, and
/// return either the constructor's explicit object return value or the
/// allocated instance. Constructor errors propagate unmodified to the
/// caller; the partially initialized instance is discarded without cleanup.
pub(crate) fn instantiate(class: &Class, args: Vec<Value>) -> Result<ObjectRef, ClassError> {
    let instance = ObjectRef::delegating_to(Some(class.behavior()));
    let mut call = ConstructorCall::new(instance.clone(), class.clone());
    let returned = class.constructor().invoke(&mut call, &args)?;
    Ok(match returned {
        Value::Object(explicit) => explicit,
        _ => instance,
    })
}
