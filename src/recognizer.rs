//! The common contract implemented by every recogniser.

use std::fmt;

use crate::grammar::Grammar;
use crate::symbol::Symbol;

/// The broadest grammar class a recogniser accepts.
///
/// Ordered `CF >= LR(k) >= LR(1) >= LR(0)`: a recogniser advertising a
/// larger class accepts everything a smaller one does. The ordering is
/// informational only — it never restricts what [`Recognizer::fit`] will
/// accept; the taxonomy exists so future LR recognisers can use
/// [`crate::error::Error::GrammarClassMismatch`] without redesigning this
/// type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GrammarClass {
    /// LR(0): deterministic, no lookahead.
    Lr0,
    /// LR(1): deterministic, one token of lookahead.
    Lr1,
    /// LR(k): deterministic, bounded lookahead.
    LrK,
    /// Any context-free grammar.
    ContextFree,
}

impl fmt::Display for GrammarClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GrammarClass::Lr0 => "LR(0)",
            GrammarClass::Lr1 => "LR(1)",
            GrammarClass::LrK => "LR(k)",
            GrammarClass::ContextFree => "Context-free",
        };
        f.write_str(name)
    }
}

/// A membership tester for a fixed grammar.
///
/// Implementors own whatever internal representation they need after
/// [`fit`](Recognizer::fit) (an augmented grammar for Earley, a normalised
/// one for CYK); the caller's original [`Grammar`] is left untouched.
/// `fit` and `predict` are not safe to call concurrently on the same
/// instance — see §5 of the specification this crate implements.
pub trait Recognizer {
    /// Fits this recogniser to `grammar`, taking a logical copy.
    fn fit(&mut self, grammar: &Grammar);

    /// Returns whether `word` (a sequence of terminal symbols) is in the
    /// language of the grammar most recently passed to `fit`.
    ///
    /// # Panics
    ///
    /// Implementations panic with a descriptive message if called before
    /// `fit` — see [`crate::error::Error::ParserNotFit`] for the boundary
    /// facade's non-panicking equivalent.
    fn predict(&self, word: &[Symbol]) -> bool;

    /// The broadest grammar class this recogniser accepts. Both recognisers
    /// in this crate return [`GrammarClass::ContextFree`].
    fn grammar_class(&self) -> GrammarClass;
}
