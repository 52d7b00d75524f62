//! Selector compilation and matching.

use std::fmt::{self, Write};
use std::str::FromStr;

use tracing::debug;

use crate::{Matcher, Selectable, SelectorError};

/// A compiled selector list.
///
/// Matches a path when any of its alternatives matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    alternatives: Vec<Complex>,
}

/// Compound selectors joined by combinators, written left to right.
///
/// `combinators[i]` joins `compounds[i]` and `compounds[i + 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Complex {
    compounds: Vec<Compound>,
    combinators: Vec<Combinator>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
    Descendant,
    Child,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Compound {
    tag: Option<TagTest>,
    classes: Vec<String>,
    attributes: Vec<AttributeTest>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TagTest {
    Any,
    Name(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttributeTest {
    name: String,
    value: Option<String>,
}

/// Compiles `query` into a [`Selector`].
pub fn compile(query: &str) -> Result<Selector, SelectorError> {
    Selector::parse(query)
}

impl Selector {
    /// Parses a selector list.
    pub fn parse(source: &str) -> Result<Self, SelectorError> {
        let selector = Parser::new(source).parse_list()?;
        debug!(
            "compiled selector {:?} into {} alternative(s)",
            source,
            selector.alternatives.len()
        );
        Ok(selector)
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<N: Selectable> Matcher<N> for Selector {
    fn matches(&self, path: &[N]) -> bool {
        self.alternatives.iter().any(|complex| complex.matches(path))
    }
}

impl Complex {
    fn matches<N: Selectable>(&self, path: &[N]) -> bool {
        match (self.compounds.len().checked_sub(1), path.len().checked_sub(1)) {
            (Some(last_compound), Some(last_node)) => self.matches_at(path, last_compound, last_node),
            _ => false,
        }
    }

    /// Matches `compounds[..=compound]` with `compounds[compound]` on `path[node]`.
    fn matches_at<N: Selectable>(&self, path: &[N], compound: usize, node: usize) -> bool {
        if !self.compounds[compound].matches(&path[node]) {
            return false;
        }
        if compound == 0 {
            return true;
        }
        match self.combinators[compound - 1] {
            Combinator::Child => node > 0 && self.matches_at(path, compound - 1, node - 1),
            Combinator::Descendant => {
                (0..node).rev().any(|ancestor| self.matches_at(path, compound - 1, ancestor))
            }
        }
    }
}

impl Compound {
    fn matches<N: Selectable>(&self, node: &N) -> bool {
        let tag_ok = match &self.tag {
            None | Some(TagTest::Any) => true,
            Some(TagTest::Name(name)) => node.tag().is_some_and(|tag| tag == name.as_str()),
        };
        tag_ok
            && self.classes.iter().all(|class| node.has_class(class))
            && self.attributes.iter().all(|test| {
                let actual = node.attribute(&test.name);
                match (&test.value, actual) {
                    (None, actual) => actual.is_some(),
                    (Some(expected), Some(actual)) => actual == expected.as_str(),
                    (Some(_), None) => false,
                }
            })
    }
}

struct Parser<'s> {
    source: &'s str,
    pos: usize,
}

impl<'s> Parser<'s> {
    fn new(source: &'s str) -> Self {
        Self { source, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Skips whitespace; returns true if any was skipped.
    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
        self.pos != start
    }

    fn expect(&mut self, expected: char) -> Result<(), SelectorError> {
        match self.peek() {
            Some(ch) if ch == expected => {
                self.bump();
                Ok(())
            }
            found => Err(SelectorError::at(found, self.pos)),
        }
    }

    fn parse_list(&mut self) -> Result<Selector, SelectorError> {
        self.skip_whitespace();
        if self.peek().is_none() {
            return Err(SelectorError::Empty);
        }

        let mut alternatives = vec![self.parse_complex()?];
        while let Some(ch) = self.peek() {
            if ch != ',' {
                return Err(SelectorError::unexpected(ch, self.pos));
            }
            self.bump();
            self.skip_whitespace();
            alternatives.push(self.parse_complex()?);
        }
        Ok(Selector { alternatives })
    }

    fn parse_complex(&mut self) -> Result<Complex, SelectorError> {
        let mut compounds = vec![self.parse_compound()?];
        let mut combinators = Vec::new();

        loop {
            let spaced = self.skip_whitespace();
            match self.peek() {
                None | Some(',') => break,
                Some('>') => {
                    let offset = self.pos;
                    self.bump();
                    self.skip_whitespace();
                    if matches!(self.peek(), None | Some(',')) {
                        return Err(SelectorError::DanglingCombinator { offset });
                    }
                    combinators.push(Combinator::Child);
                }
                Some(_) if spaced => combinators.push(Combinator::Descendant),
                Some(ch) => return Err(SelectorError::unexpected(ch, self.pos)),
            }
            compounds.push(self.parse_compound()?);
        }

        Ok(Complex {
            compounds,
            combinators,
        })
    }

    fn parse_compound(&mut self) -> Result<Compound, SelectorError> {
        let tag = match self.peek() {
            Some('*') => {
                self.bump();
                Some(TagTest::Any)
            }
            Some(ch) if is_ident_char(ch) => Some(TagTest::Name(self.parse_ident()?)),
            _ => None,
        };

        let mut classes = Vec::new();
        let mut attributes = Vec::new();
        loop {
            match self.peek() {
                Some('[') => attributes.push(self.parse_attribute()?),
                Some('.') => {
                    self.bump();
                    classes.push(self.parse_ident()?);
                }
                Some('#') => {
                    self.bump();
                    attributes.push(AttributeTest {
                        name: "id".to_string(),
                        value: Some(self.parse_ident()?),
                    });
                }
                _ => break,
            }
        }

        if tag.is_none() && classes.is_empty() && attributes.is_empty() {
            return Err(SelectorError::at(self.peek(), self.pos));
        }
        Ok(Compound {
            tag,
            classes,
            attributes,
        })
    }

    fn parse_attribute(&mut self) -> Result<AttributeTest, SelectorError> {
        self.expect('[')?;
        self.skip_whitespace();
        let name = self.parse_ident()?;
        self.skip_whitespace();

        let value = if self.peek() == Some('=') {
            self.bump();
            self.skip_whitespace();
            let value = self.parse_value()?;
            self.skip_whitespace();
            Some(value)
        } else {
            None
        };

        self.expect(']')?;
        Ok(AttributeTest { name, value })
    }

    fn parse_value(&mut self) -> Result<String, SelectorError> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.bump();
                let mut value = String::new();
                loop {
                    match self.bump() {
                        Some(ch) if ch == quote => return Ok(value),
                        // A backslash takes the next character literally.
                        Some('\\') => match self.bump() {
                            Some(ch) => value.push(ch),
                            None => return Err(SelectorError::UnexpectedEnd),
                        },
                        Some(ch) => value.push(ch),
                        None => return Err(SelectorError::UnexpectedEnd),
                    }
                }
            }
            _ => self.parse_ident(),
        }
    }

    fn parse_ident(&mut self) -> Result<String, SelectorError> {
        let start = self.pos;
        while self.peek().is_some_and(is_ident_char) {
            self.bump();
        }
        if self.pos == start {
            return Err(SelectorError::at(self.peek(), self.pos));
        }
        Ok(self.source[start..self.pos].to_string())
    }
}

fn is_ident_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '-' || ch == '_'
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, complex) in self.alternatives.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            for (position, compound) in complex.compounds.iter().enumerate() {
                if position > 0 {
                    match complex.combinators[position - 1] {
                        Combinator::Descendant => f.write_str(" ")?,
                        Combinator::Child => f.write_str(" > ")?,
                    }
                }
                match &compound.tag {
                    Some(TagTest::Any) => f.write_str("*")?,
                    Some(TagTest::Name(name)) => f.write_str(name)?,
                    None => {}
                }
                for class in &compound.classes {
                    write!(f, ".{class}")?;
                }
                for test in &compound.attributes {
                    match &test.value {
                        Some(value) => {
                            write!(f, "[{}=", test.name)?;
                            write_quoted(f, value)?;
                            f.write_char(']')?;
                        }
                        None => write!(f, "[{}]", test.name)?,
                    }
                }
            }
        }
        Ok(())
    }
}

/// Writes `value` in double quotes, escaping `"` and `\`.
fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_char('"')?;
    for ch in value.chars() {
        if matches!(ch, '"' | '\\') {
            f.write_char('\\')?;
        }
        f.write_char(ch)?;
    }
    f.write_char('"')
}
