//! The naive (character-based) boundary wrapped around an opaque-[`Symbol`]
//! [`Recognizer`].
//!
//! Everything outside this module works in terms of [`Symbol`], which has
//! no printable spelling of its own. `Facade` is where a grammar described
//! with ordinary characters — the shape the CLI reads from stdin and the
//! JSON fixtures describe — gets interned once and handed to a recogniser.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::grammar::Grammar;
use crate::recognizer::Recognizer;
use crate::registry::{is_non_terminal_char, SymbolRegistry};
use crate::rule::Rule;
use crate::symbol::SymbolSource;

/// A single production in character form: `left -> right`. An empty `right`
/// is an ε-production.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NaiveRule {
    pub left: char,
    pub right: String,
}

impl NaiveRule {
    pub fn new(left: char, right: impl Into<String>) -> Self {
        NaiveRule {
            left,
            right: right.into(),
        }
    }
}

/// A grammar described entirely in characters, the shape a CLI caller or a
/// JSON fixture works with.
#[derive(Debug, Clone)]
pub struct NaiveGrammar {
    pub non_terminals: HashSet<char>,
    pub terminals: HashSet<char>,
    pub start: char,
    pub rules: Vec<NaiveRule>,
}

/// Wraps a [`Recognizer`] with the character <-> [`Symbol`] translation it
/// needs to be useful at the crate boundary.
///
/// `Facade` owns the one [`SymbolRegistry`] used to intern both the fitted
/// grammar's alphabet and every later query word, so a character always maps
/// to the same [`crate::symbol::Symbol`] for the lifetime of the facade.
pub struct Facade<R> {
    recognizer: R,
    registry: SymbolRegistry,
    source: SymbolSource,
    fitted: bool,
}

impl<R: Recognizer> Facade<R> {
    /// Wraps `recognizer`, not yet fit to any grammar.
    pub fn new(recognizer: R) -> Self {
        Facade {
            recognizer,
            registry: SymbolRegistry::new(),
            source: SymbolSource::new(),
            fitted: false,
        }
    }

    /// Interns `naive`'s alphabet and rules, then fits the wrapped
    /// recogniser to the resulting [`Grammar`].
    pub fn fit(&mut self, naive: &NaiveGrammar) -> Result<()> {
        let mut registry = SymbolRegistry::new();
        let mut source = SymbolSource::new();

        let mut non_terminals = HashSet::new();
        for &ch in &naive.non_terminals {
            non_terminals.insert(registry.intern_non_terminal(ch, &mut source)?);
        }
        let mut terminals = HashSet::new();
        for &ch in &naive.terminals {
            terminals.insert(registry.intern_terminal(ch, &mut source)?);
        }
        let start = registry.intern_non_terminal(naive.start, &mut source)?;
        non_terminals.insert(start);

        let mut rules = HashSet::new();
        for naive_rule in &naive.rules {
            let left = registry.intern_non_terminal(naive_rule.left, &mut source)?;
            non_terminals.insert(left);
            let right: Vec<_> = naive_rule
                .right
                .chars()
                .map(|ch| {
                    if is_non_terminal_char(ch) {
                        registry.intern_non_terminal(ch, &mut source)
                    } else {
                        registry.intern_terminal(ch, &mut source)
                    }
                })
                .collect::<Result<_>>()?;
            rules.insert(Rule::new(left, right));
        }

        let grammar = Grammar::new(source.clone(), non_terminals, terminals, start, rules);
        self.recognizer.fit(&grammar);
        self.registry = registry;
        self.source = source;
        self.fitted = true;
        Ok(())
    }

    /// Translates `word` into symbols and asks the wrapped recogniser
    /// whether it belongs to the language.
    ///
    /// A terminal character never seen during `fit` is minted on demand
    /// rather than rejected: it still produces a meaningful answer, since
    /// the fitted grammar has no rule that could ever match a symbol it
    /// never mentioned, so the recogniser simply reports `false` for it. A
    /// character outside the terminal alphabet altogether is a usage error.
    ///
    /// Fails with [`Error::ParserNotFit`] rather than delegating into the
    /// wrapped recogniser's panic if called before `fit`.
    pub fn predict(&mut self, word: &str) -> Result<bool> {
        if !self.fitted {
            return Err(Error::ParserNotFit { operation: "predict" });
        }
        let mut symbols = Vec::with_capacity(word.len());
        for ch in word.chars() {
            let sym = self.registry.intern_terminal(ch, &mut self.source)?;
            symbols.push(sym);
        }
        Ok(self.recognizer.predict(&symbols))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cyk::CykRecognizer;
    use crate::earley::EarleyRecognizer;

    fn dyck_naive_grammar() -> NaiveGrammar {
        NaiveGrammar {
            non_terminals: ['S'].into_iter().collect(),
            terminals: ['(', ')'].into_iter().collect(),
            start: 'S',
            rules: vec![NaiveRule::new('S', "(S)S"), NaiveRule::new('S', "")],
        }
    }

    #[test]
    fn cyk_facade_accepts_and_rejects() {
        let mut facade = Facade::new(CykRecognizer::new());
        facade.fit(&dyck_naive_grammar()).unwrap();
        assert!(facade.predict("()(())").unwrap());
        assert!(facade.predict("").unwrap());
        assert!(!facade.predict(")(").unwrap());
    }

    #[test]
    fn earley_facade_accepts_and_rejects() {
        let mut facade = Facade::new(EarleyRecognizer::new());
        facade.fit(&dyck_naive_grammar()).unwrap();
        assert!(facade.predict("()(())").unwrap());
        assert!(facade.predict("").unwrap());
        assert!(!facade.predict(")(").unwrap());
    }

    #[test]
    fn predict_mints_an_unseen_terminal_on_demand_and_rejects_it() {
        let mut facade = Facade::new(CykRecognizer::new());
        facade.fit(&dyck_naive_grammar()).unwrap();
        // 'x' is a valid terminal character but never occurred while fitting;
        // it should be accepted as input and simply fail to match, not error.
        assert!(!facade.predict("x").unwrap());
    }

    #[test]
    fn predict_rejects_a_character_outside_the_terminal_alphabet() {
        let mut facade = Facade::new(CykRecognizer::new());
        facade.fit(&dyck_naive_grammar()).unwrap();
        assert!(facade.predict("#").is_err());
    }

    #[test]
    fn fit_rejects_an_invalid_symbol() {
        let mut naive = dyck_naive_grammar();
        naive.terminals.insert('#');
        let mut facade = Facade::new(CykRecognizer::new());
        assert!(facade.fit(&naive).is_err());
    }

    #[test]
    fn predict_before_fit_errors_instead_of_panicking() {
        let mut facade = Facade::new(CykRecognizer::new());
        assert_eq!(
            facade.predict("()"),
            Err(Error::ParserNotFit { operation: "predict" })
        );
    }
}
