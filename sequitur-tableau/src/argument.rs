/*! Defines arguments and their validity check. */
use crate::tableau::TruthTree;
use itertools::Itertools;
use sequitur_pl::syntax::Prop;
use std::fmt;

/// Is an argument: a sequence of premises and a conclusion.
#[derive(Clone)]
pub struct Argument {
    premises: Vec<Prop>,
    conclusion: Prop,
}

impl Argument {
    /// Creates a new argument.
    pub fn new(premises: Vec<Prop>, conclusion: Prop) -> Self {
        Self {
            premises,
            conclusion,
        }
    }

    /// Returns the premises of the receiver.
    #[inline(always)]
    pub fn premises(&self) -> &[Prop] {
        &self.premises
    }

    /// Returns the conclusion of the receiver.
    #[inline(always)]
    pub fn conclusion(&self) -> &Prop {
        &self.conclusion
    }

    /// Returns true if the conclusion necessarily follows from the premises:
    /// the premises together with the negated conclusion admit no consistent
    /// truth-tree branch.
    pub fn is_valid(&self) -> bool {
        let mut assumptions = self.premises.clone();
        assumptions.push(Prop::not(self.conclusion.clone()));
        !TruthTree::new(assumptions).is_consistent()
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let premises = self
            .premises
            .iter()
            .map(|premise| premise.to_string())
            .join("\n");
        if premises.is_empty() {
            write!(f, "∴ {}", self.conclusion)
        } else {
            write!(f, "{}\n∴ {}", premises, self.conclusion)
        }
    }
}
