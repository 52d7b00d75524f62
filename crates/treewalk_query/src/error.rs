//! Selector error types.

use thiserror::Error;

/// Errors that can occur while compiling a selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// The selector contains nothing but whitespace.
    #[error("Empty selector")]
    Empty,

    /// A character that cannot appear at this position.
    #[error("Unexpected character {ch:?} at offset {offset}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Byte offset of the character.
        offset: usize,
    },

    /// The selector ended in the middle of a construct.
    #[error("Unexpected end of selector")]
    UnexpectedEnd,

    /// A `>` combinator without a selector on its right.
    #[error("Combinator at offset {offset} is not followed by a selector")]
    DanglingCombinator {
        /// Byte offset of the combinator.
        offset: usize,
    },
}

impl SelectorError {
    /// Creates an unexpected character error.
    pub fn unexpected(ch: char, offset: usize) -> Self {
        Self::UnexpectedChar { ch, offset }
    }

    /// Creates the error for an unexpected character, or for running out of input.
    pub fn at(found: Option<char>, offset: usize) -> Self {
        match found {
            Some(ch) => Self::unexpected(ch, offset),
            None => Self::UnexpectedEnd,
        }
    }
}
