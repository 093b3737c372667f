/*! Defines an abstract syntax tree (AST) for propositional formulae. */

mod macros;
mod prop;

pub use prop::Prop;
