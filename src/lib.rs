//! Recognises whether a string belongs to the language of a context-free
//! grammar.
//!
//! Two independent recognisers are provided behind the same [`Recognizer`]
//! trait:
//!
//! - [`cyk::CykRecognizer`] normalises the grammar to Chomsky Normal Form
//!   (see [`normalize`]) and fills a triangular membership table in
//!   `O(n^3)`.
//! - [`earley::EarleyRecognizer`] builds an Earley chart directly against the
//!   grammar as given, with no normalisation step.
//!
//! [`facade::Facade`] wraps either recogniser with a character-based
//! boundary ([`facade::NaiveGrammar`]) for callers that don't want to work
//! with the opaque [`symbol::Symbol`] type directly.

pub mod cyk;
pub mod earley;
pub mod error;
pub mod facade;
pub mod grammar;
pub mod normalize;
pub mod recognizer;
pub mod registry;
pub mod rule;
pub mod symbol;

pub use crate::cyk::CykRecognizer;
pub use crate::earley::EarleyRecognizer;
pub use crate::error::{Error, Result};
pub use crate::facade::{Facade, NaiveGrammar, NaiveRule};
pub use crate::grammar::Grammar;
pub use crate::recognizer::{GrammarClass, Recognizer};
pub use crate::rule::Rule;
pub use crate::symbol::{Symbol, SymbolSource};
