/*! Provides a truth-tree (semantic tableau) decision procedure for
propositional logic. It decides satisfiability of formula sets by systematic
case-splitting and validity of arguments by refuting the negated conclusion.

## Background
A truth tree decomposes a set of formulae by repeatedly applying two kinds of
expansion rules. *Trunk* rules are non-branching: they produce formulae that
must all hold at once (a conjunction yields both conjuncts). *Branch* rules
split a node into two alternatives, at least one of which must hold (a
disjunction yields one child per disjunct). A branch that derives both a
formula and its negation is closed; a set of formulae is satisfiable exactly
when at least one root-to-leaf branch stays open.

An argument is valid exactly when its premises together with the negation of
its conclusion form an unsatisfiable set, so that there is no way for all
premises to hold while the conclusion fails:

```rust
use sequitur_pl::syntax::Prop;
use sequitur_tableau::Argument;

let premises: Vec<Prop> = vec!["P → Q".parse().unwrap(), "P".parse().unwrap()];
let conclusion: Prop = "Q".parse().unwrap();

assert!(Argument::new(premises, conclusion).is_valid());
```

## Termination
Every expansion rule either strictly shrinks the formulae it produces or, in
the case of a double negation, needs exactly one extra step; both expansion
phases therefore reach a fixed point after a number of steps bounded by the
total size of the input formulae, and the recursion is finite.
*/
pub mod argument;
pub mod tableau;
pub mod trace;

pub use argument::Argument;
pub use tableau::{is_satisfiable, TruthTree};
