/*! Provides a backtracking parser-combinator engine and tools for parsing and
syntactic manipulation of propositional formulae. */

pub mod combinator;
pub mod parser;
pub mod syntax;
