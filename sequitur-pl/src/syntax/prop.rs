/*! Defines the syntax of propositional formulae. */
use std::fmt;

/// Is an abstract syntax tree (AST) for propositional formulae.
///
/// Structurally identical formulae compare equal and hash equal no matter how
/// they were constructed:
///
/// ```rust
/// use sequitur_pl::{prop, syntax::Prop};
///
/// let parsed: Prop = "P ∧ Q".parse().unwrap();
/// assert_eq!(prop!((P) & (Q)), parsed);
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Prop {
    /// Is an atomic formula, named by a single uppercase letter.
    Atom(char),

    /// Is the negation of a formula.
    Not { formula: Box<Prop> },

    /// Is a conjunction of two formulae.
    And { left: Box<Prop>, right: Box<Prop> },

    /// Is a disjunction of two formulae.
    Or { left: Box<Prop>, right: Box<Prop> },

    /// Is an implication between two formulae.
    Implies {
        premise: Box<Prop>,
        consequence: Box<Prop>,
    },

    /// Is a bi-implication between two formulae.
    Iff { left: Box<Prop>, right: Box<Prop> },
}

impl Prop {
    /// Returns an atomic formula named by `name`, normalized to uppercase.
    pub fn atom(name: char) -> Self {
        Self::Atom(name.to_ascii_uppercase())
    }

    /// Returns the negation of `formula`. A doubly negated formula collapses
    /// to the formula itself; the raw [`Prop::Not`] variant can still
    /// represent an unflattened double negation.
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn not(formula: Self) -> Self {
        match formula {
            Self::Not { formula } => *formula,
            _ => Self::Not {
                formula: Box::new(formula),
            },
        }
    }

    /// Returns a conjunction of the receiver and `formula`.
    #[inline(always)]
    pub fn and(self, formula: Self) -> Self {
        Self::And {
            left: Box::new(self),
            right: Box::new(formula),
        }
    }

    /// Returns a disjunction of the receiver and `formula`.
    #[inline(always)]
    pub fn or(self, formula: Self) -> Self {
        Self::Or {
            left: Box::new(self),
            right: Box::new(formula),
        }
    }

    /// Returns an implication between the receiver and `formula`.
    #[inline(always)]
    pub fn implies(self, formula: Self) -> Self {
        Self::Implies {
            premise: Box::new(self),
            consequence: Box::new(formula),
        }
    }

    /// Returns a bi-implication between the receiver and `formula`.
    #[inline(always)]
    pub fn iff(self, formula: Self) -> Self {
        Self::Iff {
            left: Box::new(self),
            right: Box::new(formula),
        }
    }
}

impl From<char> for Prop {
    fn from(name: char) -> Self {
        Self::atom(name)
    }
}

// used for pretty printing a formula
impl fmt::Display for Prop {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        fn render(prop: &Prop) -> String {
            match prop {
                Prop::Atom(name) => name.to_string(),
                Prop::Not { formula } => format!("¬{}", render(formula)),
                Prop::And { left, right } => format!("({} ∧ {})", render(left), render(right)),
                Prop::Or { left, right } => format!("({} ∨ {})", render(left), render(right)),
                Prop::Implies {
                    premise,
                    consequence,
                } => format!("({} → {})", render(premise), render(consequence)),
                Prop::Iff { left, right } => format!("({} ⇔ {})", render(left), render(right)),
            }
        }

        // one redundant outermost pair is dropped from the top-level render
        fn without_outside_parens(rendered: &str) -> &str {
            if rendered.starts_with('(') && rendered.ends_with(')') {
                &rendered[1..rendered.len() - 1]
            } else {
                rendered
            }
        }

        let rendered = render(self);
        write!(f, "{}", without_outside_parens(&rendered))
    }
}

// contains no non-ascii characters
impl fmt::Debug for Prop {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Self::Atom(name) => write!(f, "{}", name),
            Self::Not { formula } => write!(f, "~{:?}", formula),
            Self::And { left, right } => write!(f, "({:?} & {:?})", left, right),
            Self::Or { left, right } => write!(f, "({:?} | {:?})", left, right),
            Self::Implies {
                premise,
                consequence,
            } => write!(f, "({:?} -> {:?})", premise, consequence),
            Self::Iff { left, right } => write!(f, "({:?} <=> {:?})", left, right),
        }
    }
}
