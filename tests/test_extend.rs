//! Tests for class definition and the extension engine.
//!
//! These tests cover root definition, extension chains, member
//! enumeration, post-extension member definition, and instance-of checks.

extern crate protoclass;

use protoclass::ds::operations::{call_member, get_member};
use protoclass::ds::value::{Callable, NumberType, Value};
use protoclass::ds::{ClassError, ObjectRef};
use protoclass::engine::{Class, ClassDef};

fn int(n: i64) -> Value {
    Value::Number(NumberType::Integer(n))
}

// ============================================================================
// Behavior definition tests
// ============================================================================

mod definition_tests {
    use super::*;

    #[test]
    fn test_member_names_are_sorted() {
        let def = ClassDef::new()
            .member("zeta", int(1))
            .member("alpha", int(2))
            .method("mid", |_ctx, _args| Ok(Value::Undefined));
        assert_eq!(def.member_names(), vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_empty_definition_from_unit() {
        let def: ClassDef = ().into();
        assert!(def.member_names().is_empty());
    }

    #[test]
    fn test_definition_from_bare_constructor() {
        let ctor = Callable::closure(|ctx, _args| {
            ctx.set("built", Value::Boolean(true));
            Ok(Value::Undefined)
        });
        let def: ClassDef = ctor.into();
        assert_eq!(def.member_names(), vec!["constructor"]);
    }

    #[test]
    fn test_later_member_wins() {
        let def = ClassDef::new().member("n", int(1)).member("n", int(2));
        assert_eq!(def.get("n"), Some(&int(2)));
    }
}

// ============================================================================
// Root definition tests
// ============================================================================

mod root_class_tests {
    use super::*;

    #[test]
    fn test_define_copies_members_onto_behavior() {
        let class = Class::define(
            ClassDef::new()
                .member("kind", Value::String("root".to_string()))
                .method("id", |ctx, _args| Ok(ctx.get("kind"))),
        );
        assert_eq!(class.own_member_names(), vec!["id", "kind"]);
        assert!(class.parent().is_none());
    }

    #[test]
    fn test_define_excludes_constructor_from_behavior() {
        let class = Class::define(ClassDef::new().constructor(|_ctx, _args| Ok(Value::Undefined)));
        assert!(class.own_member_names().is_empty());
    }

    #[test]
    fn test_empty_definition_yields_usable_class() {
        let class = Class::define(());
        let instance = class.create(vec![]).unwrap();
        assert!(class.is_instance(&instance));
        assert_eq!(get_member(&instance, "anything"), Value::Undefined);
    }
}

// ============================================================================
// Extension tests
// ============================================================================

mod extension_tests {
    use super::*;

    #[test]
    fn test_extend_links_parent() {
        let root = Class::define(());
        let mid = root.extend(());
        let leaf = mid.extend(());
        assert!(leaf.parent().unwrap().same(&mid));
        assert!(mid.parent().unwrap().same(&root));
        assert!(root.parent().is_none());
    }

    #[test]
    fn test_extend_never_mutates_the_extended_class() {
        let root = Class::define(ClassDef::new().member("a", int(1)));
        let names_before = root.own_member_names();
        let _derived = root.extend(ClassDef::new().member("b", int(2)));
        assert_eq!(root.own_member_names(), names_before);
        assert!(!root.behavior().has("b"));
    }

    #[test]
    fn test_derived_inherits_through_delegation() {
        let root = Class::define(ClassDef::new().member("a", int(1)));
        let leaf = root.extend(ClassDef::new().member("b", int(2))).extend(());
        let instance = leaf.create(vec![]).unwrap();
        assert_eq!(get_member(&instance, "a"), int(1));
        assert_eq!(get_member(&instance, "b"), int(2));
    }

    #[test]
    fn test_override_shadows_inherited_member() {
        let root = Class::define(ClassDef::new().member("n", int(1)));
        let leaf = root.extend(ClassDef::new().member("n", int(2)));
        let instance = leaf.create(vec![]).unwrap();
        assert_eq!(get_member(&instance, "n"), int(2));
    }

    #[test]
    fn test_constructor_bearing_extension() {
        let root = Class::define(ClassDef::new().member("kind", Value::String("r".to_string())));
        let derived = root.extend(Callable::closure(|ctx, _args| {
            ctx.set("built", Value::Boolean(true));
            Ok(Value::Undefined)
        }));
        let instance = derived.create(vec![]).unwrap();
        assert_eq!(get_member(&instance, "built"), Value::Boolean(true));
        assert_eq!(get_member(&instance, "kind"), Value::String("r".to_string()));
        assert!(derived.own_member_names().is_empty());
    }

    #[test]
    fn test_class_identity() {
        let root = Class::define(());
        let copy = root.clone();
        let derived = root.extend(());
        assert!(root.same(&copy));
        assert!(!root.same(&derived));
        assert_ne!(root.tag(), derived.tag());
    }
}

// ============================================================================
// Enumeration tests
// ============================================================================

mod enumeration_tests {
    use super::*;

    #[test]
    fn test_member_names_walk_the_whole_ancestry() {
        let root = Class::define(ClassDef::new().member("a", int(1)).member("b", int(2)));
        let leaf = root.extend(ClassDef::new().member("b", int(3)).member("c", int(4)));
        assert_eq!(leaf.own_member_names(), vec!["b", "c"]);
        assert_eq!(leaf.member_names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_instance_sees_own_and_inherited_names() {
        let root = Class::define(ClassDef::new().member("a", int(1)));
        let instance = root
            .extend(Callable::closure(|ctx, _args| {
                ctx.set("mine", int(9));
                Ok(Value::Undefined)
            }))
            .create(vec![])
            .unwrap();
        assert_eq!(instance.own_member_names(), vec!["mine"]);
        assert_eq!(instance.member_names(), vec!["a", "mine"]);
    }
}

// ============================================================================
// Post-extension member definition tests
// ============================================================================

mod define_member_tests {
    use super::*;

    #[test]
    fn test_defined_member_reaches_existing_descendants_and_instances() {
        let root = Class::define(());
        let leaf = root.extend(());
        let instance = leaf.create(vec![]).unwrap();
        root.define_member("late", int(5));
        assert_eq!(get_member(&instance, "late"), int(5));
        assert!(leaf.member_names().contains(&"late".to_string()));
    }

    #[test]
    fn test_defining_the_reserved_constructor_is_ignored() {
        let class = Class::define(());
        class.define_member("constructor", int(1));
        assert!(!class.behavior().has("constructor"));
    }

    #[test]
    fn test_defined_method_is_callable_on_instances() {
        let class = Class::define(());
        let instance = class.create(vec![]).unwrap();
        class.define_member(
            "answer",
            Value::Function(Callable::closure(|_ctx, _args| Ok(int(42)))),
        );
        assert_eq!(call_member(&instance, "answer", vec![]).unwrap(), int(42));
    }
}

// ============================================================================
// Instance-of tests
// ============================================================================

mod is_instance_tests {
    use super::*;

    #[test]
    fn test_instance_of_class_and_every_ancestor() {
        let root = Class::define(());
        let mid = root.extend(());
        let leaf = mid.extend(());
        let instance = leaf.create(vec![]).unwrap();
        assert!(leaf.is_instance(&instance));
        assert!(mid.is_instance(&instance));
        assert!(root.is_instance(&instance));
    }

    #[test]
    fn test_not_instance_of_unrelated_class_or_descendant() {
        let root = Class::define(());
        let left = root.extend(());
        let right = root.extend(());
        let instance = left.create(vec![]).unwrap();
        assert!(!right.is_instance(&instance));
        assert!(root.is_instance(&instance));
    }

    #[test]
    fn test_plain_object_is_no_instance() {
        let class = Class::define(());
        assert!(!class.is_instance(&ObjectRef::new()));
    }
}

// ============================================================================
// Member operation tests
// ============================================================================

mod member_op_tests {
    use super::*;

    #[test]
    fn test_get_member_resolves_absent_to_undefined() {
        let instance = Class::define(()).create(vec![]).unwrap();
        assert_eq!(get_member(&instance, "missing"), Value::Undefined);
    }

    #[test]
    fn test_call_member_on_absent_name_is_a_reference_error() {
        let instance = Class::define(()).create(vec![]).unwrap();
        let err = call_member(&instance, "missing", vec![]).unwrap_err();
        assert_eq!(
            err,
            ClassError::ReferenceError("'missing' is not defined".to_string())
        );
    }

    #[test]
    fn test_call_member_on_data_member_is_a_type_error() {
        let instance = Class::define(ClassDef::new().member("n", int(1)))
            .create(vec![])
            .unwrap();
        let err = call_member(&instance, "n", vec![]).unwrap_err();
        assert_eq!(err, ClassError::TypeError("'n' is not a function".to_string()));
    }
}
