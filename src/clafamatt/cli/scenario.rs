//! The demo families the CLI builds.

use clafamatt::api::Families;
use clafamatt::error::Result;
use clafamatt::host::graph::ScopeGraph;
use clafamatt::model::{ScopeId, Value};

/// One line of the synopsis walkthrough.
pub enum Step {
    Read { scope: ScopeId, attribute: &'static str },
    Write {
        scope: ScopeId,
        attribute: &'static str,
        value: &'static str,
    },
}

/// A trait `Shared` declaring `foo`, a class `Parent` including it, and
/// `Child < Parent` declaring `bar`.
pub struct Synopsis {
    pub families: Families<ScopeGraph>,
    pub steps: Vec<Step>,
}

impl Synopsis {
    pub fn build(mut families: Families<ScopeGraph>) -> Result<Self> {
        let ns = families.default_namespace().clone();

        let shared = families.define_trait("Shared");
        families.declare_accessor(shared, &ns, &["foo"])?;
        let parent = families.define_class("Parent", None)?;
        families.include(parent, shared)?;
        let child = families.define_class("Child", Some(parent))?;
        families.declare_accessor(child, &ns, &["bar"])?;

        let read = |scope: ScopeId, attribute: &'static str| Step::Read { scope, attribute };
        let write = |scope: ScopeId, attribute: &'static str, value: &'static str| Step::Write {
            scope,
            attribute,
            value,
        };

        let steps = vec![
            read(shared, "foo"),
            read(parent, "foo"),
            read(child, "foo"),
            write(shared, "foo", "klaatu"),
            read(shared, "foo"),
            read(parent, "foo"),
            read(child, "foo"),
            write(parent, "foo", "nikto"),
            read(shared, "foo"),
            read(parent, "foo"),
            read(child, "foo"),
            write(child, "foo", "barada"),
            read(parent, "foo"),
            read(child, "foo"),
            write(child, "bar", "klaatu"),
            read(child, "bar"),
            read(parent, "bar"),
        ];

        Ok(Self { families, steps })
    }

    /// Runs one step; writes yield `None`.
    pub fn run(&mut self, step: &Step) -> Result<Option<Value>> {
        match *step {
            Step::Read { scope, attribute } => self.families.read(scope, attribute).map(Some),
            Step::Write {
                scope,
                attribute,
                value,
            } => self.families.write(scope, attribute, value).map(|_| None),
        }
    }

    pub fn expression(&self, step: &Step) -> Result<String> {
        Ok(match *step {
            Step::Read { scope, attribute } => {
                format!("{}.{}", self.families.scope_name(scope)?, attribute)
            }
            Step::Write {
                scope,
                attribute,
                value,
            } => format!(
                "{}.{} = {}",
                self.families.scope_name(scope)?,
                attribute,
                Value::from(value)
            ),
        })
    }
}

/// `Shared` (trait) <- `Parent` <- `Child` <- singleton of `Child`; every
/// level declares `attribute` and stores its own name in it.
pub struct Family {
    pub families: Families<ScopeGraph>,
    pub singleton: ScopeId,
}

impl Family {
    pub fn build(mut families: Families<ScopeGraph>, attribute: &str) -> Result<Self> {
        let ns = families.default_namespace().clone();

        let shared = families.define_trait("Shared");
        families.declare_accessor(shared, &ns, &[attribute])?;
        families.write(shared, attribute, "shared")?;

        let parent = families.define_class("Parent", None)?;
        families.include(parent, shared)?;
        families.declare_accessor(parent, &ns, &[attribute])?;
        families.write(parent, attribute, "parent")?;

        let child = families.define_class("Child", Some(parent))?;
        families.declare_accessor(child, &ns, &[attribute])?;
        families.write(child, attribute, "child")?;

        let singleton = families.singleton_of(child, "Singleton")?;
        families.declare_accessor(singleton, &ns, &[attribute])?;
        families.write(singleton, attribute, "singleton")?;

        Ok(Self {
            families,
            singleton,
        })
    }
}
