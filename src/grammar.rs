//! The context-free grammar value type.

use std::collections::HashSet;

use crate::rule::Rule;
use crate::symbol::{Symbol, SymbolSource};

/// A context-free grammar: non-terminals, terminals, a start symbol, and a
/// set of rules.
///
/// The invariants below hold after construction and after every
/// normalisation pass (see [`crate::normalize`]):
///
/// - every `rule.left()` is in `non_terminals`;
/// - every non-terminal occurring in any `rule.right()` is in
///   `non_terminals`;
/// - every terminal occurring in any `rule.right()` is in `terminals`;
/// - `start` is reachable (vacuously true before the unreachable-symbol
///   pass runs, since `start` reaches itself trivially).
#[derive(Clone, Debug)]
pub struct Grammar {
    sym_source: SymbolSource,
    non_terminals: HashSet<Symbol>,
    terminals: HashSet<Symbol>,
    start: Symbol,
    rules: HashSet<Rule>,
}

impl Grammar {
    /// Builds a grammar from its four components, without re-validating the
    /// invariants (callers such as [`crate::facade`] are expected to have
    /// upheld them while interning).
    pub fn new(
        sym_source: SymbolSource,
        non_terminals: HashSet<Symbol>,
        terminals: HashSet<Symbol>,
        start: Symbol,
        rules: HashSet<Rule>,
    ) -> Self {
        Grammar {
            sym_source,
            non_terminals,
            terminals,
            start,
            rules,
        }
    }

    /// The symbol source used to mint fresh symbols during normalisation.
    pub fn sym_source(&self) -> &SymbolSource {
        &self.sym_source
    }

    /// Mutable access to the symbol source, for passes that mint fresh
    /// non-terminals.
    pub fn sym_source_mut(&mut self) -> &mut SymbolSource {
        &mut self.sym_source
    }

    /// The grammar's non-terminal alphabet.
    pub fn non_terminals(&self) -> &HashSet<Symbol> {
        &self.non_terminals
    }

    /// The grammar's terminal alphabet.
    pub fn terminals(&self) -> &HashSet<Symbol> {
        &self.terminals
    }

    /// The start symbol.
    pub fn start(&self) -> Symbol {
        self.start
    }

    /// The rule set.
    pub fn rules(&self) -> &HashSet<Rule> {
        &self.rules
    }

    /// Adds a non-terminal to the grammar's alphabet (idempotent).
    pub fn add_non_terminal(&mut self, sym: Symbol) {
        debug_assert!(sym.is_non_terminal());
        self.non_terminals.insert(sym);
    }

    /// Adds a terminal to the grammar's alphabet (idempotent).
    pub fn add_terminal(&mut self, sym: Symbol) {
        debug_assert!(sym.is_terminal());
        self.terminals.insert(sym);
    }

    /// Adds a rule (idempotent: equal rules collapse, matching the set
    /// semantics of §3).
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.insert(rule);
    }

    /// Replaces the rule set wholesale — every normalisation pass ends by
    /// calling this once, threading a fresh set through the pipeline rather
    /// than mutating rules in place (Design Note: "thread a fresh grammar
    /// value through the pipeline").
    pub fn set_rules(&mut self, rules: HashSet<Rule>) {
        self.rules = rules;
    }

    /// Replaces the non-terminal alphabet wholesale.
    pub fn set_non_terminals(&mut self, non_terminals: HashSet<Symbol>) {
        self.non_terminals = non_terminals;
    }

    /// Replaces the start symbol.
    pub fn set_start(&mut self, start: Symbol) {
        self.start = start;
    }

    /// True iff `sym` has a rule `sym -> ()` in the current rule set.
    pub fn derives_epsilon_directly(&self, sym: Symbol) -> bool {
        self.rules
            .iter()
            .any(|rule| rule.left() == sym && rule.is_epsilon())
    }
}
