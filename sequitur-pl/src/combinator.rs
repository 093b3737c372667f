/*! Implements a backtracking parser-combinator engine.

A [`Parser`] is a first-class value wrapping a pure function from a
remaining-input [`Stream`] to either no match or a pair of a parsed value and
the remaining stream. Parsers are composed, never mutated; no parser holds
stream state of its own, so the same parser value may be applied to any
number of inputs.

Alternation through [`Parser::or`] is ordered choice: the first alternative
that succeeds wins, even if a later alternative would consume more input.
*/
use std::rc::Rc;

/// Is a view over the remaining suffix of an input under parsing. Advancing
/// a stream slices the underlying text; no text is ever copied.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Stream<'a> {
    text: &'a str,
}

impl<'a> Stream<'a> {
    /// Creates a stream over the whole of `text`.
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Returns the remaining text.
    #[inline(always)]
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Returns true if no input remains.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the remaining length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Splits the stream into its first character and the stream past it.
    pub fn uncons(self) -> Option<(char, Stream<'a>)> {
        let mut chars = self.text.chars();
        chars.next().map(|head| (head, Stream { text: chars.as_str() }))
    }
}

impl<'a> From<&'a str> for Stream<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

/// Is a composable parser producing values of type `T`.
pub struct Parser<'a, T> {
    run: Rc<dyn Fn(Stream<'a>) -> Option<(T, Stream<'a>)> + 'a>,
}

impl<'a, T> Clone for Parser<'a, T> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
        }
    }
}

impl<'a, T: 'a> Parser<'a, T> {
    /// Wraps a parse function in a new parser.
    pub fn new(run: impl Fn(Stream<'a>) -> Option<(T, Stream<'a>)> + 'a) -> Self {
        Self { run: Rc::new(run) }
    }

    /// Returns a parser that always succeeds with `value`, consuming nothing.
    pub fn pure(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(move |input| Some((value.clone(), input)))
    }

    /// Returns a parser that always fails.
    pub fn fail() -> Self {
        Self::new(|_| None)
    }

    /// Applies the receiver to `input`.
    pub fn parse(&self, input: Stream<'a>) -> Option<(T, Stream<'a>)> {
        (self.run)(input)
    }

    /// Transforms the parsed value on success; failure propagates unchanged.
    pub fn map<U: 'a>(self, transform: impl Fn(T) -> U + 'a) -> Parser<'a, U> {
        Parser::new(move |input| {
            self.parse(input)
                .map(|(value, rest)| (transform(value), rest))
        })
    }

    /// Feeds the parsed value into a parser-producing function and runs the
    /// produced parser on the remaining stream. Composition through
    /// `flat_map` is context sensitive: the second parser may depend on the
    /// first parser's result.
    pub fn flat_map<U: 'a>(self, transform: impl Fn(T) -> Parser<'a, U> + 'a) -> Parser<'a, U> {
        Parser::new(move |input| {
            self.parse(input)
                .and_then(|(value, rest)| transform(value).parse(rest))
        })
    }

    /// Ordered choice: tries the receiver first and falls back to `other` on
    /// the original, unconsumed stream.
    pub fn or(self, other: Parser<'a, T>) -> Self {
        Self::new(move |input| self.parse(input).or_else(|| other.parse(input)))
    }

    /// Sequences the receiver with `other`, pairing their results.
    pub fn and<U: 'a>(self, other: Parser<'a, U>) -> Parser<'a, (T, U)> {
        Parser::new(move |input| {
            self.parse(input).and_then(|(first, rest)| {
                other
                    .parse(rest)
                    .map(|(second, rest)| ((first, second), rest))
            })
        })
    }

    /// Applies the receiver zero or more times, greedily, collecting the
    /// results. Never fails. A repetition that consumes no input stops the
    /// loop; otherwise a parser that succeeds on empty input would repeat
    /// forever.
    pub fn many(self) -> Parser<'a, Vec<T>> {
        Parser::new(move |input| {
            let mut items = Vec::new();
            let mut rest = input;
            while let Some((item, next)) = self.parse(rest) {
                if next.len() == rest.len() {
                    break;
                }
                items.push(item);
                rest = next;
            }
            Some((items, rest))
        })
    }

    /// Like [`Parser::many`] but requires at least one success.
    pub fn many1(self) -> Parser<'a, Vec<T>> {
        let repeated = self.clone().many();
        self.and(repeated).map(|(first, mut rest)| {
            rest.insert(0, first);
            rest
        })
    }
}

/// Defers construction of a parser until parse time, allowing recursive
/// grammars to be written as ordinary functions.
pub fn lazy<'a, T: 'a>(build: impl Fn() -> Parser<'a, T> + 'a) -> Parser<'a, T> {
    Parser::new(move |input| build().parse(input))
}

/// Consumes any single character.
pub fn item<'a>() -> Parser<'a, char> {
    Parser::new(|input: Stream<'a>| input.uncons())
}

/// Consumes a single character satisfying `predicate`.
pub fn satisfy<'a>(predicate: impl Fn(char) -> bool + 'a) -> Parser<'a, char> {
    item().flat_map(move |ch| {
        if predicate(ch) {
            Parser::pure(ch)
        } else {
            Parser::fail()
        }
    })
}

/// Consumes the character `expected`.
pub fn character<'a>(expected: char) -> Parser<'a, char> {
    satisfy(move |ch| ch == expected)
}

/// Consumes a decimal digit.
pub fn digit<'a>() -> Parser<'a, char> {
    satisfy(|ch| ch.is_ascii_digit())
}

/// Consumes a lowercase letter.
pub fn lowercase<'a>() -> Parser<'a, char> {
    satisfy(|ch| ch.is_ascii_lowercase())
}

/// Consumes an uppercase letter.
pub fn uppercase<'a>() -> Parser<'a, char> {
    satisfy(|ch| ch.is_ascii_uppercase())
}

/// Consumes a letter of either case.
pub fn letter<'a>() -> Parser<'a, char> {
    lowercase().or(uppercase())
}

/// Consumes the string `expected`, character by character.
pub fn literal<'a>(expected: &'a str) -> Parser<'a, String> {
    match Stream::new(expected).uncons() {
        None => Parser::pure(String::new()),
        Some((head, tail)) => character(head)
            .and(lazy(move || literal(tail.as_str())))
            .map(|(head, tail)| format!("{}{}", head, tail)),
    }
}

/// Runs `open`, `inner` and `close` in sequence, keeping only `inner`'s
/// result.
pub fn bracket<'a, A: 'a, B: 'a, C: 'a>(
    open: Parser<'a, A>,
    inner: Parser<'a, B>,
    close: Parser<'a, C>,
) -> Parser<'a, B> {
    open.and(inner).and(close).map(|((_, value), _)| value)
}

/// Parses a left-associated sequence `term (op term)*`, folding the results
/// from the left with the combining function each operator parses to.
pub fn chain_left1<'a, T, F>(parser: Parser<'a, T>, operation: Parser<'a, F>) -> Parser<'a, T>
where
    T: 'a,
    F: Fn(T, T) -> T + 'a,
{
    let rest = operation.and(parser.clone()).many();
    parser.and(rest).map(|(first, tail)| {
        tail.into_iter()
            .fold(first, |accum, (combine, operand)| combine(accum, operand))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed<'a, T: 'a>(parser: &Parser<'a, T>, input: &'a str) -> Option<(T, &'a str)> {
        parser
            .parse(Stream::new(input))
            .map(|(value, rest)| (value, rest.as_str()))
    }

    #[test]
    fn test_item() {
        let parser = item();
        assert_eq!(Some(('H', "ello")), parsed(&parser, "Hello"));
        assert_eq!(None, parsed(&parser, ""));
    }

    #[test]
    fn test_satisfy() {
        let parser = satisfy(|ch| ch == 'H');
        assert_eq!(Some(('H', "ello")), parsed(&parser, "Hello"));
        assert_eq!(None, parsed(&parser, "hello"));
        assert_eq!(None, parsed(&parser, ""));
    }

    #[test]
    fn test_character() {
        let parser = character('H');
        assert_eq!(Some(('H', "ello")), parsed(&parser, "Hello"));
        assert_eq!(None, parsed(&parser, "world"));
        assert_eq!(None, parsed(&parser, ""));
    }

    #[test]
    fn test_digit() {
        let parser = digit();
        assert_eq!(Some(('1', "234")), parsed(&parser, "1234"));
        assert_eq!(None, parsed(&parser, "abc"));
        assert_eq!(None, parsed(&parser, ""));
    }

    #[test]
    fn test_letter_cases() {
        assert_eq!(Some(('h', "ello")), parsed(&lowercase(), "hello"));
        assert_eq!(None, parsed(&lowercase(), "Hello"));
        assert_eq!(Some(('H', "ello")), parsed(&uppercase(), "Hello"));
        assert_eq!(None, parsed(&uppercase(), "hello"));
        assert_eq!(Some(('H', "ello")), parsed(&letter(), "Hello"));
        assert_eq!(Some(('h', "ello")), parsed(&letter(), "hello"));
        assert_eq!(None, parsed(&letter(), "123"));
    }

    #[test]
    fn test_pure_and_fail() {
        assert_eq!(Some((42, "rest")), parsed(&Parser::pure(42), "rest"));
        assert_eq!(None, parsed(&Parser::<i32>::fail(), "rest"));
    }

    #[test]
    fn test_map() {
        let parser = digit().map(|ch| ch.to_digit(10).unwrap());
        assert_eq!(Some((7, "8")), parsed(&parser, "78"));
        assert_eq!(None, parsed(&parser, "x"));
    }

    #[test]
    fn test_flat_map_rejects() {
        let parser = item().flat_map(|ch| {
            if ch == 'a' {
                Parser::pure(ch)
            } else {
                Parser::fail()
            }
        });
        assert_eq!(Some(('a', "bc")), parsed(&parser, "abc"));
        assert_eq!(None, parsed(&parser, "xbc"));
    }

    #[test]
    fn test_ordered_choice_first_wins() {
        let parser = literal("He").or(literal("Hello"));
        assert_eq!(
            Some(("He".to_string(), "llo")),
            parsed(&parser, "Hello")
        );
    }

    #[test]
    fn test_choice_backtracks_to_original_stream() {
        let parser = literal("Hex").or(literal("Hello"));
        assert_eq!(Some(("Hello".to_string(), "!")), parsed(&parser, "Hello!"));
    }

    #[test]
    fn test_and_sequences() {
        let parser = character('a').and(character('b'));
        assert_eq!(Some((('a', 'b'), "c")), parsed(&parser, "abc"));
        assert_eq!(None, parsed(&parser, "ac"));
    }

    #[test]
    fn test_literal() {
        let parser = literal("Hello");
        assert_eq!(
            Some(("Hello".to_string(), ", world!")),
            parsed(&parser, "Hello, world!")
        );
        assert_eq!(None, parsed(&parser, "world!"));
        assert_eq!(None, parsed(&parser, ""));
    }

    #[test]
    fn test_many() {
        let parser = letter().many();
        assert_eq!(
            Some((vec!['H', 'e', 'l', 'l', 'o'], ", world!")),
            parsed(&parser, "Hello, world!")
        );
        assert_eq!(Some((vec![], "1234")), parsed(&parser, "1234"));
        assert_eq!(Some((vec![], "")), parsed(&parser, ""));
    }

    #[test]
    fn test_many_stops_on_zero_width_success() {
        let parser = Parser::pure('x').many();
        assert_eq!(Some((vec![], "abc")), parsed(&parser, "abc"));
    }

    #[test]
    fn test_many1() {
        let parser = letter().many1();
        assert_eq!(
            Some((vec!['h', 'e', 'l', 'l', 'o'], " world")),
            parsed(&parser, "hello world")
        );
        assert_eq!(None, parsed(&parser, "1234"));
    }

    #[test]
    fn test_bracket() {
        let parser = bracket(character('['), letter().many1(), character(']'));
        assert_eq!(Some((vec!['a', 'b'], "")), parsed(&parser, "[ab]"));
        assert_eq!(None, parsed(&parser, "[ab"));
        assert_eq!(None, parsed(&parser, "ab]"));
    }

    fn natural_number<'a>() -> Parser<'a, u32> {
        fn place(accum: u32, digit: u32) -> u32 {
            10 * accum + digit
        }
        let digit_value = digit().flat_map(|ch| match ch.to_digit(10) {
            Some(value) => Parser::pure(value),
            None => Parser::fail(),
        });
        chain_left1(digit_value, Parser::pure(place as fn(u32, u32) -> u32))
    }

    #[test]
    fn test_chain_folds_left() {
        let parser = natural_number();
        assert_eq!(Some((1234, " 1234")), parsed(&parser, "1234 1234"));
        assert_eq!(None, parsed(&parser, "hello"));
    }

    #[test]
    fn test_lazy_defers_construction() {
        // balanced: a balanced string of parentheses around a letter
        fn balanced<'a>() -> Parser<'a, char> {
            bracket(character('('), lazy(balanced), character(')')).or(letter())
        }
        assert_eq!(Some(('x', "")), parsed(&balanced(), "(((x)))"));
        assert_eq!(None, parsed(&balanced(), "((x)"));
    }
}
