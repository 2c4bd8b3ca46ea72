use clafamatt::api::Families;
use clafamatt::error::FamilyError;
use clafamatt::fixtures::FamilyFixture;
use clafamatt::host::ObjectModel;
use clafamatt::model::{Namespace, ScopeId, Value};

fn responds(f: &FamilyFixture, scope: ScopeId, procedure: &str) -> bool {
    f.families
        .responds_to(scope, &Namespace::default(), procedure)
        .unwrap()
}

fn read(f: &FamilyFixture, scope: ScopeId, attr: &str) -> Value {
    f.families.read(scope, attr).unwrap()
}

fn write(f: &mut FamilyFixture, scope: ScopeId, attr: &str, value: &str) {
    f.families.write(scope, attr, value).unwrap();
}

/// Store a value on the host directly, bypassing any writer.
fn store(f: &mut FamilyFixture, scope: ScopeId, attr: &str, value: &str) {
    f.families
        .model_mut()
        .set_value(scope, &Namespace::default(), attr, Value::from(value))
        .unwrap();
}

fn stored(f: &FamilyFixture, scope: ScopeId, attr: &str) -> Option<Value> {
    f.families
        .model()
        .value(scope, &Namespace::default(), attr)
        .unwrap()
        .cloned()
}

fn assert_no_procedure(err: FamilyError, expected: &str) {
    match err {
        FamilyError::NoSuchProcedure { procedure, .. } => assert_eq!(procedure, expected),
        other => panic!("expected NoSuchProcedure, got {other:?}"),
    }
}

mod trait_with_attributes {
    use super::*;

    #[test]
    fn has_readers_for_readable_attributes() {
        let f = FamilyFixture::new();
        assert!(responds(&f, f.shared, "mro"));
        assert!(responds(&f, f.shared, "mrw"));
    }

    #[test]
    fn has_no_reader_for_write_only_attributes() {
        let f = FamilyFixture::new();
        assert!(!responds(&f, f.shared, "mwo"));
        assert_no_procedure(f.families.read(f.shared, "mwo").unwrap_err(), "mwo");
    }

    #[test]
    fn has_writers_for_writable_attributes() {
        let f = FamilyFixture::new();
        assert!(responds(&f, f.shared, "mwo="));
        assert!(responds(&f, f.shared, "mrw="));
    }

    #[test]
    fn has_no_writer_for_read_only_attributes() {
        let mut f = FamilyFixture::new();
        assert!(!responds(&f, f.shared, "mro="));
        let shared = f.shared;
        assert_no_procedure(f.families.write(shared, "mro", "x").unwrap_err(), "mro=");
    }

    #[test]
    fn readable_attributes_default_to_null() {
        let f = FamilyFixture::new();
        assert_eq!(read(&f, f.shared, "mrw"), Value::Null);
        assert_eq!(read(&f, f.shared, "mro"), Value::Null);
    }

    #[test]
    fn writes_land_on_the_trait() {
        let mut f = FamilyFixture::new();
        let shared = f.shared;
        write(&mut f, shared, "mrw", "klaatu");
        assert_eq!(read(&f, shared, "mrw"), Value::from("klaatu"));
        write(&mut f, shared, "mwo", "nikto");
        assert_eq!(stored(&f, shared, "mwo"), Some(Value::from("nikto")));
    }

    #[test]
    fn reads_values_stored_by_the_host() {
        let mut f = FamilyFixture::new();
        let shared = f.shared;
        store(&mut f, shared, "mro", "klaatu");
        assert_eq!(read(&f, shared, "mro"), Value::from("klaatu"));
        store(&mut f, shared, "mrw", "nikto");
        assert_eq!(read(&f, shared, "mrw"), Value::from("nikto"));
    }
}

mod class_with_attributes {
    use super::*;

    #[test]
    fn writes_included_attributes() {
        let mut f = FamilyFixture::new();
        let parent = f.parent;
        write(&mut f, parent, "mrw", "klaatu");
        assert_eq!(read(&f, parent, "mrw"), Value::from("klaatu"));
        write(&mut f, parent, "mwo", "nikto");
        assert_eq!(stored(&f, parent, "mwo"), Some(Value::from("nikto")));
    }

    #[test]
    fn does_not_touch_the_included_trait() {
        let mut f = FamilyFixture::new();
        let (shared, parent) = (f.shared, f.parent);
        write(&mut f, shared, "mrw", "barada");
        write(&mut f, parent, "mrw", "klaatu");
        assert_eq!(read(&f, shared, "mrw"), Value::from("barada"));
        assert_eq!(read(&f, parent, "mrw"), Value::from("klaatu"));
    }

    #[test]
    fn reads_included_attributes() {
        let mut f = FamilyFixture::new();
        let parent = f.parent;
        store(&mut f, parent, "mro", "klaatu");
        assert_eq!(read(&f, parent, "mro"), Value::from("klaatu"));
        store(&mut f, parent, "mrw", "nikto");
        assert_eq!(read(&f, parent, "mrw"), Value::from("nikto"));
    }

    #[test]
    fn reads_its_own_attributes() {
        let mut f = FamilyFixture::new();
        let parent = f.parent;
        store(&mut f, parent, "ro1", "oompah");
        store(&mut f, parent, "ro2", "loompah");
        store(&mut f, parent, "rw1", "doopidy");
        store(&mut f, parent, "rw2", "doo");
        assert_eq!(read(&f, parent, "ro1"), Value::from("oompah"));
        assert_eq!(read(&f, parent, "ro2"), Value::from("loompah"));
        assert_eq!(read(&f, parent, "rw1"), Value::from("doopidy"));
        assert_eq!(read(&f, parent, "rw2"), Value::from("doo"));
    }

    #[test]
    fn writes_its_own_attributes() {
        let mut f = FamilyFixture::new();
        let parent = f.parent;
        write(&mut f, parent, "wo1", "oompah");
        write(&mut f, parent, "wo2", "loompah");
        write(&mut f, parent, "rw1", "doopidy");
        write(&mut f, parent, "rw2", "doo");
        assert_eq!(stored(&f, parent, "wo1"), Some(Value::from("oompah")));
        assert_eq!(stored(&f, parent, "wo2"), Some(Value::from("loompah")));
        assert_eq!(stored(&f, parent, "rw1"), Some(Value::from("doopidy")));
        assert_eq!(stored(&f, parent, "rw2"), Some(Value::from("doo")));
    }
}

mod child_class {
    use super::*;

    #[test]
    fn reads_and_writes_trait_attributes() {
        let mut f = FamilyFixture::new();
        let child = f.child;
        write(&mut f, child, "mrw", "klaatu");
        assert_eq!(read(&f, child, "mrw"), Value::from("klaatu"));
        assert_eq!(read(&f, f.shared, "mrw"), Value::Null);
    }

    #[test]
    fn reads_and_writes_parent_attributes() {
        let mut f = FamilyFixture::new();
        let child = f.child;
        write(&mut f, child, "rw1", "barada");
        assert_eq!(read(&f, child, "rw1"), Value::from("barada"));
        assert_eq!(read(&f, f.parent, "rw1"), Value::Null);
    }

    #[test]
    fn reads_and_writes_its_own_attributes() {
        let mut f = FamilyFixture::new();
        let child = f.child;
        write(&mut f, child, "crw", "nikto");
        assert_eq!(read(&f, child, "crw"), Value::from("nikto"));
    }

    #[test]
    fn child_attributes_are_not_on_parent_or_trait() {
        let mut f = FamilyFixture::new();
        let (shared, parent) = (f.shared, f.parent);
        assert_no_procedure(f.families.write(shared, "crw", "foo").unwrap_err(), "crw=");
        assert_no_procedure(f.families.write(parent, "crw", "foo").unwrap_err(), "crw=");
    }

    #[test]
    fn inherits_trait_values() {
        let mut f = FamilyFixture::new();
        let shared = f.shared;
        write(&mut f, shared, "mrw", "foo");
        assert_eq!(read(&f, f.parent, "mrw"), Value::from("foo"));
        assert_eq!(read(&f, f.child, "mrw"), Value::from("foo"));
    }

    #[test]
    fn inherits_parent_values() {
        let mut f = FamilyFixture::new();
        let parent = f.parent;
        write(&mut f, parent, "rw1", "bar");
        assert_eq!(read(&f, f.child, "rw1"), Value::from("bar"));
    }
}

mod singleton_scope {
    use super::*;

    #[test]
    fn reads_and_writes_trait_attributes() {
        let mut f = FamilyFixture::new();
        let singleton = f.singleton;
        write(&mut f, singleton, "mrw", "klaatu");
        assert_eq!(read(&f, singleton, "mrw"), Value::from("klaatu"));
        assert_eq!(read(&f, f.shared, "mrw"), Value::Null);
    }

    #[test]
    fn reads_and_writes_parent_attributes() {
        let mut f = FamilyFixture::new();
        let singleton = f.singleton;
        write(&mut f, singleton, "rw1", "barada");
        assert_eq!(read(&f, singleton, "rw1"), Value::from("barada"));
        assert_eq!(read(&f, f.parent, "rw1"), Value::Null);
    }

    #[test]
    fn reads_and_writes_child_attributes() {
        let mut f = FamilyFixture::new();
        let singleton = f.singleton;
        write(&mut f, singleton, "crw", "nikto");
        assert_eq!(read(&f, singleton, "crw"), Value::from("nikto"));
    }

    #[test]
    fn reads_and_writes_its_own_attributes() {
        let mut f = FamilyFixture::new();
        let singleton = f.singleton;
        write(&mut f, singleton, "srw", "xyzzy");
        assert_eq!(read(&f, singleton, "srw"), Value::from("xyzzy"));
    }

    #[test]
    fn singleton_attributes_stay_on_the_singleton() {
        let mut f = FamilyFixture::new();
        for scope in [f.shared, f.parent, f.child] {
            assert_no_procedure(f.families.write(scope, "srw", "foo").unwrap_err(), "srw=");
        }
    }

    #[test]
    fn inherits_trait_values() {
        let mut f = FamilyFixture::new();
        let shared = f.shared;
        write(&mut f, shared, "mrw", "foo");
        assert_eq!(read(&f, f.parent, "mrw"), Value::from("foo"));
        assert_eq!(read(&f, f.singleton, "mrw"), Value::from("foo"));
    }

    #[test]
    fn inherits_parent_values() {
        let mut f = FamilyFixture::new();
        let parent = f.parent;
        write(&mut f, parent, "rw1", "bar");
        assert_eq!(read(&f, f.singleton, "rw1"), Value::from("bar"));
    }

    #[test]
    fn inherits_child_values() {
        let mut f = FamilyFixture::new();
        let child = f.child;
        write(&mut f, child, "crw", "bar");
        assert_eq!(read(&f, f.singleton, "crw"), Value::from("bar"));
    }

    #[test]
    fn finds_all_values_for_an_attribute() {
        let f = FamilyFixture::new();
        let values = f
            .families
            .values_for(f.singleton, "family_name", &Namespace::default())
            .unwrap();
        assert_eq!(
            values,
            vec![
                Value::from("singleton"),
                Value::from("child"),
                Value::from("parent"),
                Value::from("shared"),
            ]
        );
    }

    #[test]
    fn finds_all_scope_value_mappings() {
        let f = FamilyFixture::new();
        let properties = f
            .families
            .properties_for(f.singleton, "family_name", &Namespace::default())
            .unwrap();
        assert_eq!(properties.len(), 4);
        assert_eq!(properties[&f.parent], Value::from("parent"));
        assert_eq!(properties[&f.child], Value::from("child"));
        assert_eq!(properties[&f.shared], Value::from("shared"));
        assert_eq!(properties[&f.singleton], Value::from("singleton"));
    }

    #[test]
    fn finds_all_ancestors_with_an_attribute() {
        let f = FamilyFixture::new();
        let ancestors = f
            .families
            .ancestors_with(f.singleton, "family_name", &Namespace::default())
            .unwrap();
        assert_eq!(ancestors, vec![f.singleton, f.child, f.parent, f.shared]);
    }
}

mod fallback {
    use super::*;

    #[test]
    fn nearest_write_wins() {
        let mut f = FamilyFixture::new();
        let (shared, parent) = (f.shared, f.parent);
        write(&mut f, shared, "mrw", "far");
        write(&mut f, parent, "mrw", "near");
        assert_eq!(read(&f, f.singleton, "mrw"), Value::from("near"));
    }

    #[test]
    fn explicit_null_is_a_value() {
        let mut f = FamilyFixture::new();
        let (parent, child) = (f.parent, f.child);
        write(&mut f, parent, "rw1", "parent");
        f.families.write(child, "rw1", Value::Null).unwrap();
        assert_eq!(read(&f, child, "rw1"), Value::Null);
        assert_eq!(read(&f, f.singleton, "rw1"), Value::Null);
    }

    #[test]
    fn writes_never_reach_ancestors() {
        let mut f = FamilyFixture::new();
        let singleton = f.singleton;
        write(&mut f, singleton, "mrw", "local");
        for scope in [f.shared, f.parent, f.child] {
            assert_eq!(stored(&f, scope, "mrw"), None);
        }
    }
}

mod late_composition {
    use super::*;

    #[test]
    fn trait_declared_after_include_reaches_its_includers() {
        let mut families = Families::new();
        let ns = Namespace::default();
        let shared = families.define_trait("Shared");
        let parent = families.define_class("Parent", None).unwrap();
        families.include(parent, shared).unwrap();

        families.declare_accessor(shared, &ns, &["foo"]).unwrap();
        families.write(shared, "foo", "klaatu").unwrap();
        let child = families.define_class("Child", Some(parent)).unwrap();
        families.declare_accessor(child, &ns, &["bar"]).unwrap();

        assert!(families.responds_to(parent, &ns, "foo=").unwrap());
        assert_eq!(families.read(parent, "foo").unwrap(), Value::from("klaatu"));
        assert_eq!(families.read(child, "foo").unwrap(), Value::from("klaatu"));

        families.write(parent, "foo", "barada").unwrap();
        assert_eq!(families.read(child, "foo").unwrap(), Value::from("barada"));
        assert_eq!(families.read(shared, "foo").unwrap(), Value::from("klaatu"));
    }

    #[test]
    fn nested_trait_declared_after_include() {
        let mut families = Families::new();
        let ns = Namespace::default();
        let inner = families.define_trait("Inner");
        let outer = families.define_trait("Outer");
        families.include(outer, inner).unwrap();
        let host = families.define_class("Host", None).unwrap();
        families.include(host, outer).unwrap();

        families.declare_accessor(inner, &ns, &["depth"]).unwrap();
        families.write(inner, "depth", "inner").unwrap();

        assert_eq!(families.read(outer, "depth").unwrap(), Value::from("inner"));
        assert_eq!(families.read(host, "depth").unwrap(), Value::from("inner"));
    }

    #[test]
    fn fallback_follows_includes_made_after_decoration() {
        let mut families = Families::new();
        let ns = Namespace::default();
        let parent = families.define_class("Parent", None).unwrap();
        families.declare_accessor(parent, &ns, &["foo"]).unwrap();
        families.write(parent, "foo", "p").unwrap();
        let child = families.define_class("Child", Some(parent)).unwrap();
        families.declare_accessor(child, &ns, &["bar"]).unwrap();
        assert_eq!(families.read(child, "foo").unwrap(), Value::from("p"));

        let late = families.define_trait("T");
        families.declare_accessor(late, &ns, &["foo"]).unwrap();
        families.write(late, "foo", "t").unwrap();
        families.include(child, late).unwrap();

        assert_eq!(families.read(child, "foo").unwrap(), Value::from("t"));
        assert_eq!(families.read(parent, "foo").unwrap(), Value::from("p"));
    }
}
