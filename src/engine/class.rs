//! Class descriptors and the extension engine.

use std::fmt;
use std::rc::Rc;

use uuid::Uuid;

use crate::ds::error::ClassError;
use crate::ds::object::ObjectRef;
use crate::ds::value::Value;
use crate::engine::construct::{compose, instantiate, ComposedConstructor};
use crate::engine::definition::{copy_members, is_reserved_member, ClassDef};

struct ClassData {
    constructor: ComposedConstructor,
    behavior: ObjectRef,
    parent: Option<Class>,
    tag: String,
}

/// Shared handle to a class descriptor: a composed constructor, a
/// shared-behavior object all instances delegate to, and the ancestry
/// back-reference. Cloning the handle shares the descriptor; equality is
/// descriptor identity.
pub struct Class {
    inner: Rc<ClassData>,
}

impl Class {
    /// Define a root class from a behavior definition. An empty definition
    /// (`()`) yields a usable default class.
    pub fn define<D: Into<ClassDef>>(definition: D) -> Class {
        Class::build(definition.into(), None)
    }

    /// Derive a new class from this one. The new class's shared-behavior
    /// delegates to this class's shared-behavior, its constructor runs this
    /// class's constructor chain before its own, and its parent pointer is
    /// set to this class. Extension never mutates the class being extended.
    pub fn extend<D: Into<ClassDef>>(&self, definition: D) -> Class {
        Class::build(definition.into(), Some(self.clone()))
    }

    fn build(definition: ClassDef, parent: Option<Class>) -> Class {
        let behavior = match &parent {
            None => ObjectRef::delegating_to(None),
            Some(p) => ObjectRef::delegating_to(Some(p.behavior())),
        };
        copy_members(&behavior, &definition);
        let constructor = compose(
            definition.constructor_fn(),
            parent.as_ref().map(|p| p.inner.constructor.clone()),
        );
        Class {
            inner: Rc::new(ClassData {
                constructor,
                behavior,
                parent,
                tag: Uuid::new_v4().to_hyphenated().to_string(),
            }),
        }
    }

    /// Create an instance. Runs every ancestor constructor root-first,
    /// exactly once, then installs base-call chains for members redefined
    /// across the ancestry. Returns the constructor's explicit object
    /// return value if it produced one, otherwise the new instance.
    pub fn create(&self, args: Vec<Value>) -> Result<ObjectRef, ClassError> {
        instantiate(self, args)
    }

    /// The immediate parent class, if any.
    pub fn parent(&self) -> Option<&Class> {
        self.inner.parent.as_ref()
    }

    /// This class's shared-behavior object.
    pub fn behavior(&self) -> &ObjectRef {
        &self.inner.behavior
    }

    pub(crate) fn constructor(&self) -> &ComposedConstructor {
        &self.inner.constructor
    }

    /// Unique diagnostic tag of this descriptor.
    pub fn tag(&self) -> &str {
        &self.inner.tag
    }

    /// Define an additional member on this class's shared-behavior after
    /// the class was produced. Visible through every descendant class and
    /// every existing instance, since they delegate rather than copy. The
    /// reserved constructor name is ignored.
    pub fn define_member(&self, name: impl Into<String>, value: Value) {
        let name = name.into();
        if is_reserved_member(&name) {
            return;
        }
        self.inner.behavior.set(name, value);
    }

    /// Own member names of this class's shared-behavior.
    pub fn own_member_names(&self) -> Vec<String> {
        self.inner.behavior.own_member_names()
    }

    /// Member names visible through the whole ancestry.
    pub fn member_names(&self) -> Vec<String> {
        self.inner.behavior.member_names()
    }

    /// Whether `object` was created from this class or one of its
    /// descendants, by shared-behavior identity along the object's
    /// delegation chain.
    pub fn is_instance(&self, object: &ObjectRef) -> bool {
        let mut level = object.proto();
        while let Some(o) = level {
            if o.same(self.behavior()) {
                return true;
            }
            level = o.proto();
        }
        false
    }

    /// Descriptor identity.
    pub fn same(&self, other: &Class) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Clone for Class {
    fn clone(&self) -> Self {
        Class {
            inner: self.inner.clone(),
        }
    }
}
impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}
impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Class({})", self.inner.tag)
    }
}
