/*! Implements a parser for propositional formulae.

The module provides a parser for propositional formulae by implementing
[`FromStr`] for [`Prop`]. The parser is often used implicitly through the
[`parse`] method.

**Example**:
```rust
use sequitur_pl::syntax::Prop;

let formula: Prop = "P → (Q ∧ R)".parse().unwrap();

assert_eq!("P → (Q ∧ R)", formula.to_string());
```

All binary connectives share a single precedence level and associate to the
left; negation binds tighter, and parentheses group. Both the mathematical
notation (`¬`, `∧`, `∨`, `→`, `⇔`) and the compact notation (`~`, `&&`,
`||`, `=>`, `<=>`) are accepted:

```rust
use sequitur_pl::syntax::Prop;

let compact: Prop = "~P && Q || R".parse().unwrap();

assert_eq!("(¬P ∧ Q) ∨ R", compact.to_string());
```

[`FromStr`]: std::str::FromStr
[`parse`]: ::std::str#parse
*/
use crate::combinator::{bracket, chain_left1, character, lazy, letter, literal, Parser, Stream};
use crate::syntax::Prop;
use std::str::FromStr;
use thiserror::Error;

const NEGATION: &str = "¬";
const CONJUNCTION: &str = "∧";
const DISJUNCTION: &str = "∨";
const IMPLICATION: &str = "→";
const EQUIVALENCE: &str = "⇔";

const NEGATION_COMPACT: &str = "~";
const CONJUNCTION_COMPACT: &str = "&&";
const DISJUNCTION_COMPACT: &str = "||";
const IMPLICATION_COMPACT: &str = "=>";
const EQUIVALENCE_COMPACT: &str = "<=>";

/// Is the type of errors returned by the parser.
#[derive(Error, PartialEq, Eq, Debug)]
pub enum Error {
    #[error("`{input}` is not a well-formed formula")]
    Syntax { input: String },
    #[error("unexpected trailing text `{remaining}` in `{input}`")]
    TrailingInput { input: String, remaining: String },
}

type Combine = fn(Prop, Prop) -> Prop;

fn connective<'a>(token: &'a str, compact: &'a str, combine: Combine) -> Parser<'a, Combine> {
    literal(token).or(literal(compact)).map(move |_| combine)
}

// `<=>` is tried before `=>`.
fn operation<'a>() -> Parser<'a, Combine> {
    connective(CONJUNCTION, CONJUNCTION_COMPACT, Prop::and)
        .or(connective(DISJUNCTION, DISJUNCTION_COMPACT, Prop::or))
        .or(connective(EQUIVALENCE, EQUIVALENCE_COMPACT, Prop::iff))
        .or(connective(IMPLICATION, IMPLICATION_COMPACT, Prop::implies))
}

fn negation<'a>() -> Parser<'a, Prop> {
    literal(NEGATION)
        .or(literal(NEGATION_COMPACT))
        .and(lazy(term))
        .map(|(_, inner)| Prop::not(inner))
}

fn atom<'a>() -> Parser<'a, Prop> {
    letter().map(Prop::atom)
}

fn group<'a>() -> Parser<'a, Prop> {
    bracket(character('('), lazy(formula), character(')'))
}

fn term<'a>() -> Parser<'a, Prop> {
    negation().or(atom()).or(group())
}

fn formula<'a>() -> Parser<'a, Prop> {
    chain_left1(term(), operation())
}

impl FromStr for Prop {
    type Err = Error;

    /// Parses a propositional formula. Whitespace is stripped from the whole
    /// input up front, and the parse must consume the entire remainder.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let condensed: String = s.chars().filter(|ch| !ch.is_whitespace()).collect();
        let result = match formula().parse(Stream::new(&condensed)) {
            Some((prop, rest)) if rest.is_empty() => Ok(prop),
            Some((_, rest)) => Err(Error::TrailingInput {
                input: s.into(),
                remaining: rest.as_str().into(),
            }),
            None => Err(Error::Syntax { input: s.into() }),
        };
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prop;

    fn parse(input: &str) -> Prop {
        input.parse().unwrap()
    }

    #[test]
    fn parse_atom() {
        assert_eq!(prop!(P), parse("P"));
    }

    #[test]
    fn parse_normalizes_atom_case() {
        assert_eq!(prop!(P), parse("p"));
        assert_eq!(parse("p ∧ q"), parse("P ∧ Q"));
    }

    #[test]
    fn parse_conjunction() {
        assert_eq!(prop!((P) & (Q)), parse("P ∧ Q"));
    }

    #[test]
    fn parse_binary_connectives() {
        assert_eq!(prop!((P) | (Q)), parse("P ∨ Q"));
        assert_eq!(prop!((P) -> (Q)), parse("P → Q"));
        assert_eq!(prop!((P) <=> (Q)), parse("P ⇔ Q"));
    }

    #[test]
    fn parse_chains_left() {
        assert_eq!(prop!(((P) & (Q)) | (R)), parse("P ∧ Q ∨ R"));
        assert_eq!(prop!(((P) -> (Q)) -> (R)), parse("P → Q → R"));
    }

    #[test]
    fn parse_parens_override_chaining() {
        assert_eq!(prop!((P) & ((Q) | (R))), parse("P ∧ (Q ∨ R)"));
    }

    #[test]
    fn parse_negation() {
        assert_eq!(prop!(~(P)), parse("¬P"));
        assert_eq!(prop!((~(P)) & (Q)), parse("¬P ∧ Q"));
        assert_eq!(prop!(~((P) & (Q))), parse("¬(P ∧ Q)"));
    }

    #[test]
    fn parse_collapses_double_negation() {
        assert_eq!(prop!(P), parse("¬¬P"));
        assert_eq!(prop!(~(P)), parse("¬¬¬P"));
    }

    #[test]
    fn parse_compact_notation() {
        assert_eq!(prop!((P) & (Q)), parse("P && Q"));
        assert_eq!(prop!((P) | (Q)), parse("P || Q"));
        assert_eq!(prop!((P) -> (Q)), parse("P => Q"));
        assert_eq!(prop!((P) <=> (Q)), parse("P <=> Q"));
        assert_eq!(prop!(~(P)), parse("~P"));
    }

    #[test]
    fn parse_prefers_equivalence_over_implication() {
        // `<=>` must never lose to a prefix match of `=>`
        assert_eq!(prop!((P) <=> (Q)), parse("P <=> Q"));
        assert_eq!(prop!((P) -> (Q)), parse("P => Q"));
    }

    #[test]
    fn parse_ignores_whitespace() {
        assert_eq!(parse("P∧Q"), parse("  P   ∧ Q "));
        assert_eq!(parse("¬(P→Q)"), parse("¬ ( P → Q )"));
    }

    #[test]
    fn parse_fails_on_malformed_input() {
        assert_eq!(
            Err(Error::Syntax {
                input: "".to_string()
            }),
            "".parse::<Prop>()
        );
        assert!("∧ P".parse::<Prop>().is_err());
        assert!("(P".parse::<Prop>().is_err());
        assert!("12".parse::<Prop>().is_err());
    }

    #[test]
    fn parse_fails_on_trailing_input() {
        assert_eq!(
            Err(Error::TrailingInput {
                input: "P Q".to_string(),
                remaining: "Q".to_string(),
            }),
            "P Q".parse::<Prop>()
        );
        assert!("P ∧".parse::<Prop>().is_err());
        assert!("P)".parse::<Prop>().is_err());
    }

    #[test]
    fn parse_round_trips_rendering() {
        let formulae = vec![
            prop!(P),
            prop!(~(P)),
            prop!((P) & (Q)),
            prop!(((P) | (Q)) -> (~(R))),
            prop!({(P) <=> (Q)} & {~((R) | (S))}),
        ];
        for formula in formulae {
            assert_eq!(formula, parse(&formula.to_string()));
        }
    }
}
