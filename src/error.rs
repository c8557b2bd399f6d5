//! Error kinds surfaced by the boundary facade and the recognisers.
//!
//! Following every Rust example in the retrieval pack, errors are a plain
//! enum with hand-written `Display`/`std::error::Error` impls rather than a
//! macro-generated one.

use std::fmt;

use crate::recognizer::GrammarClass;

/// Errors raised at the facade boundary or by a recogniser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A character in a naive grammar or word falls outside the recognised
    /// terminal/non-terminal classes.
    InvalidSymbol {
        /// The offending character.
        ch: char,
        /// Why it was rejected.
        reason: InvalidSymbolReason,
    },
    /// `predict` (or another operation requiring a fitted recogniser) was
    /// called before `fit`.
    ParserNotFit {
        /// Name of the operation that required fitting.
        operation: &'static str,
    },
    /// A recogniser refused a grammar outside the class it accepts.
    /// Reserved: neither Earley nor CYK currently reject any CFG.
    GrammarClassMismatch {
        /// The class the recogniser requires.
        required: GrammarClass,
        /// The class the grammar was tagged with.
        actual: GrammarClass,
    },
    /// The symbol registry was asked to translate an identity it does not
    /// own.
    InvalidArgument {
        /// What was rejected.
        description: String,
    },
}

/// Why a character was rejected as an invalid symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidSymbolReason {
    /// Expected a terminal character (lowercase letter, digit, or one of
    /// `()+-*/`) but got something else.
    NotATerminal,
    /// Expected a non-terminal character (an uppercase letter) but got
    /// something else.
    NotANonTerminal,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSymbol { ch, reason } => {
                let what = match reason {
                    InvalidSymbolReason::NotATerminal => "not a valid terminal",
                    InvalidSymbolReason::NotANonTerminal => "not a valid non-terminal",
                };
                write!(f, "symbol '{ch}' is {what}")
            }
            Error::ParserNotFit { operation } => {
                write!(f, "{operation} called before fit")
            }
            Error::GrammarClassMismatch { required, actual } => {
                write!(
                    f,
                    "grammar class mismatch: recogniser requires {required}, grammar is tagged {actual}"
                )
            }
            Error::InvalidArgument { description } => {
                write!(f, "invalid argument: {description}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Convenience alias used throughout the crate's boundary-facing code.
pub type Result<T> = std::result::Result<T, Error>;
