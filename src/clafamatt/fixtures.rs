//! Test fixtures: the Shared / Parent / Child / singleton family used across tests.

use crate::api::Families;
use crate::host::graph::ScopeGraph;
use crate::model::{Namespace, ScopeId};

pub struct FamilyFixture {
    pub families: Families<ScopeGraph>,
    pub shared: ScopeId,
    pub parent: ScopeId,
    pub child: ScopeId,
    pub singleton: ScopeId,
}

impl Default for FamilyFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl FamilyFixture {
    pub fn new() -> Self {
        Self::with_families(Families::new())
    }

    /// Build the four-level family on top of an existing (possibly configured) facade.
    ///
    /// Every level declares its own read-only, write-only and read/write
    /// attributes and writes its own `family_name`.
    pub fn with_families(mut families: Families<ScopeGraph>) -> Self {
        let ns = families.default_namespace().clone();

        let shared = families.define_trait("Shared");
        families
            .declare_accessor(shared, &ns, &["family_name"])
            .unwrap();
        declare(&mut families, &ns, shared, &["mro"], &["mwo"], &["mrw"]);
        families.write(shared, "family_name", "shared").unwrap();

        let parent = families.define_class("Parent", None).unwrap();
        families.include(parent, shared).unwrap();
        declare(
            &mut families,
            &ns,
            parent,
            &["ro1", "ro2"],
            &["wo1", "wo2"],
            &["rw1", "rw2"],
        );
        families.write(parent, "family_name", "parent").unwrap();

        let child = families.define_class("Child", Some(parent)).unwrap();
        declare(&mut families, &ns, child, &["cro"], &["cwo"], &["crw"]);
        families.write(child, "family_name", "child").unwrap();

        let singleton = families.singleton_of(child, "Singleton").unwrap();
        declare(&mut families, &ns, singleton, &["sro"], &["swo"], &["srw"]);
        families.write(singleton, "family_name", "singleton").unwrap();

        Self {
            families,
            shared,
            parent,
            child,
            singleton,
        }
    }
}

fn declare(
    families: &mut Families<ScopeGraph>,
    ns: &Namespace,
    scope: ScopeId,
    ro: &[&str],
    wo: &[&str],
    rw: &[&str],
) {
    families.declare_reader(scope, ns, ro).unwrap();
    families.declare_writer(scope, ns, wo).unwrap();
    families.declare_accessor(scope, ns, rw).unwrap();
}
