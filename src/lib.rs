//! # protoclass - Classical Inheritance over Prototype Delegation
//!
//! A small runtime library that layers a classical-inheritance extension
//! model on top of a purely delegation-based object model, featuring:
//! - Class definition from plain behavior definitions
//! - Unlimited `extend` chains with base-call access to overridden methods
//! - Composed constructors running every ancestor root-first
//! - Lazy, per-instance base-call chain installation
//!
//! ## Quick Start
//!
//! ### Defining and Extending Classes
//!
//! ```
//! use protoclass::ds::operations::call_member;
//! use protoclass::ds::value::Value;
//! use protoclass::engine::{Class, ClassDef};
//!
//! let animal = Class::define(ClassDef::new().method("speak", |_ctx, _args| {
//!     Ok(Value::String("A".to_string()))
//! }));
//!
//! // The derived implementation reaches the overridden one through the
//! // call context's base handle.
//! let dog = animal.extend(ClassDef::new().method("speak", |ctx, _args| {
//!     match ctx.base(vec![])? {
//!         Value::String(s) => Ok(Value::String(s + "B")),
//!         other => Ok(other),
//!     }
//! }));
//!
//! let d = dog.create(vec![]).unwrap();
//! assert_eq!(
//!     call_member(&d, "speak", vec![]).unwrap(),
//!     Value::String("AB".to_string())
//! );
//! ```
//!
//! ### Constructor Composition
//!
//! Every ancestor constructor runs exactly once per instantiation, from the
//! root ancestor down to the most-derived class, all against the same
//! instance:
//!
//! ```
//! use protoclass::ds::value::{NumberType, Value};
//! use protoclass::engine::{Class, ClassDef};
//!
//! let base = Class::define(ClassDef::new().constructor(|ctx, _args| {
//!     ctx.set("x", Value::Number(NumberType::Integer(1)));
//!     Ok(Value::Undefined)
//! }));
//!
//! let derived = base.extend(ClassDef::new().constructor(|ctx, _args| {
//!     // The base constructor has already run; its assignment is visible.
//!     assert_eq!(ctx.get("x"), Value::Number(NumberType::Integer(1)));
//!     ctx.set("x", Value::Number(NumberType::Integer(2)));
//!     Ok(Value::Undefined)
//! }));
//!
//! let obj = derived.create(vec![]).unwrap();
//! assert_eq!(obj.get("x"), Value::Number(NumberType::Integer(2)));
//! ```
//!
//! ## Delegation Architecture
//!
//! Classical class systems copy members down into every subclass. This
//! library uses a different approach:
//!
//! 1. **Shared-Behavior Objects**: each class owns one delegation object
//!    holding the members its definition supplied. Instances hold only their
//!    own state and delegate member lookups to the class's shared-behavior
//!    object, which in turn delegates to its parent's, mirroring the
//!    ancestry. Extending a class never copies or mutates ancestor behavior.
//!
//! 2. **Lazy Base-Call Chains**: a method name redefined at more than one
//!    ancestry level is folded into a linked chain of implementations,
//!    least-derived first, so each level can invoke its predecessor through
//!    the call context's [`engine::CallContext::base`] handle. Chains are
//!    built per instance, once, after the outermost constructor call
//!    completes; a name owned at exactly one level is left as a plain
//!    delegated lookup with its original identity.
//!
//! 3. **Threaded Base Handles**: the predecessor link is carried by the call
//!    context rather than stored on the instance, so nested and recursive
//!    base calls need no save/restore discipline.
//!
//! ## Architecture
//!
//! - **[`ds`]** - Data structures (values, delegation objects, errors)
//!   - **[`ds::operations`]** - Member access and invocation helpers
//! - **[`engine`]** - The extension/composition engine
//!   - **[`engine::definition`]** - Behavior definitions and member copying
//!   - **[`engine::class`]** - Class descriptors and extension
//!   - **[`engine::chain`]** - Base-call chains and call contexts

#[macro_use]
extern crate lazy_static;

pub mod ds;
pub mod engine;
