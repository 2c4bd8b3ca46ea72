//! Ancestry linearization strategies.
//!
//! Both strategies take the scope, its direct bases in precedence order, and the
//! already-computed linearizations of those bases.

use crate::model::ScopeId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Linearization {
    /// Depth-first over bases, keeping the first occurrence of each scope.
    #[default]
    DepthFirst,

    /// C3 merge; rejects hierarchies without a consistent order.
    C3,
}

impl fmt::Display for Linearization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Linearization::DepthFirst => f.write_str("depth-first"),
            Linearization::C3 => f.write_str("c3"),
        }
    }
}

impl Linearization {
    /// Returns `None` when C3 finds no consistent order.
    pub(crate) fn apply(
        self,
        scope: ScopeId,
        bases: &[ScopeId],
        linearized: &HashMap<ScopeId, Vec<ScopeId>>,
    ) -> Option<Vec<ScopeId>> {
        match self {
            Linearization::DepthFirst => Some(depth_first(scope, bases, linearized)),
            Linearization::C3 => c3(scope, bases, linearized),
        }
    }
}

fn depth_first(
    scope: ScopeId,
    bases: &[ScopeId],
    linearized: &HashMap<ScopeId, Vec<ScopeId>>,
) -> Vec<ScopeId> {
    let mut order = vec![scope];
    for base in bases {
        let base_order = linearized.get(base).map(Vec::as_slice).unwrap_or(&[]);
        for ancestor in base_order {
            if !order.contains(ancestor) {
                order.push(*ancestor);
            }
        }
    }
    order
}

fn c3(
    scope: ScopeId,
    bases: &[ScopeId],
    linearized: &HashMap<ScopeId, Vec<ScopeId>>,
) -> Option<Vec<ScopeId>> {
    let mut sequences: Vec<Vec<ScopeId>> = bases
        .iter()
        .map(|base| linearized.get(base).cloned().unwrap_or_default())
        .collect();
    sequences.push(bases.to_vec());

    let mut order = vec![scope];
    loop {
        sequences.retain(|seq| !seq.is_empty());
        if sequences.is_empty() {
            return Some(order);
        }

        let candidate = sequences.iter().map(|seq| seq[0]).find(|head| {
            sequences
                .iter()
                .all(|seq| !seq[1..].contains(head))
        })?;

        order.push(candidate);
        for seq in sequences.iter_mut() {
            if seq[0] == candidate {
                seq.remove(0);
            }
        }
    }
}
