//! The Earley recogniser: chart construction with interleaved PREDICT, SCAN,
//! and COMPLETE, closed to a fixed point at every position so that
//! ε-producing non-terminals are handled without a separate pre-pass.
//!
//! Unlike [`crate::cyk`], this recogniser does not require (or benefit from)
//! Chomsky Normal Form: it runs directly against the grammar passed to
//! [`fit`](crate::recognizer::Recognizer::fit), augmented with a fresh start
//! rule `S' -> S` so that completed parses are unambiguous to detect even
//! when the original start symbol recurses.

mod item;

use std::collections::{HashMap, HashSet};

use crate::grammar::Grammar;
use crate::recognizer::{GrammarClass, Recognizer};
use crate::rule::Rule;
use crate::symbol::Symbol;

pub use item::Item;

/// Recognises membership by building an Earley chart over the input.
///
/// Complexity: `O(n^3)` worst case, `O(n^2)` for unambiguous grammars,
/// `O(n)` for bounded-state (LR-like) grammars, where `n` is the query
/// length.
pub struct EarleyRecognizer {
    grammar: Option<Grammar>,
}

impl Default for EarleyRecognizer {
    fn default() -> Self {
        EarleyRecognizer::new()
    }
}

impl EarleyRecognizer {
    /// Creates a recogniser that has not yet been fit.
    pub fn new() -> Self {
        EarleyRecognizer { grammar: None }
    }
}

impl Recognizer for EarleyRecognizer {
    fn fit(&mut self, grammar: &Grammar) {
        let mut grammar = grammar.clone();
        let augmented_start = grammar.sym_source_mut().next_non_terminal();
        let old_start = grammar.start();
        grammar.add_non_terminal(augmented_start);
        grammar.add_rule(Rule::new(augmented_start, vec![old_start]));
        grammar.set_start(augmented_start);
        self.grammar = Some(grammar);
    }

    fn predict(&self, word: &[Symbol]) -> bool {
        let grammar = self
            .grammar
            .as_ref()
            .expect("EarleyRecognizer::predict called before fit");

        let mut by_left: HashMap<Symbol, Vec<Rule>> = HashMap::new();
        for rule in grammar.rules() {
            by_left.entry(rule.left()).or_default().push(rule.clone());
        }

        let n = word.len();
        let mut chart: Vec<Vec<Item>> = vec![Vec::new(); n + 1];
        let mut seen: Vec<HashSet<Item>> = vec![HashSet::new(); n + 1];

        for rule in by_left.get(&grammar.start()).into_iter().flatten() {
            let seed = Item::new(rule.clone(), 0, 0, 0);
            if seen[0].insert(seed.clone()) {
                chart[0].push(seed);
            }
        }

        for i in 0..=n {
            close_column(i, &mut chart, &mut seen, &by_left);
            if i < n {
                scan_column(i, word[i], &mut chart, &mut seen);
            }
        }

        chart[n]
            .iter()
            .any(|item| item.is_complete() && item.origin() == 0 && item.rule().left() == grammar.start())
    }

    fn grammar_class(&self) -> GrammarClass {
        GrammarClass::ContextFree
    }
}

/// Runs PREDICT and COMPLETE to a fixed point within column `i`.
///
/// Both directions of COMPLETE are applied: when an item completes, it is
/// matched against parents already waiting in its origin column, and when a
/// new parent is predicted, it is matched against completions already
/// present in the current column. Without the second direction, a
/// non-terminal that derives ε and completes before the parent expecting it
/// is predicted would never trigger COMPLETE — the two can be added to the
/// worklist in either order.
fn close_column(
    i: usize,
    chart: &mut [Vec<Item>],
    seen: &mut [HashSet<Item>],
    by_left: &HashMap<Symbol, Vec<Rule>>,
) {
    let mut idx = 0;
    while idx < chart[i].len() {
        let item = chart[i][idx].clone();
        idx += 1;

        match item.next_symbol() {
            None => {
                let origin = item.origin();
                let parents: Vec<Item> = chart[origin].clone();
                for parent in parents {
                    if let Some(completed) = parent.complete(&item) {
                        if seen[i].insert(completed.clone()) {
                            chart[i].push(completed);
                        }
                    }
                }
            }
            Some(sym) if sym.is_non_terminal() => {
                if let Some(rules) = by_left.get(&sym) {
                    for rule in rules {
                        if let Some(predicted) = item.predict(rule) {
                            if seen[i].insert(predicted.clone()) {
                                chart[i].push(predicted);
                            }
                        }
                    }
                }

                let already_complete: Vec<Item> = chart[i]
                    .iter()
                    .filter(|it| it.is_complete() && it.origin() == i && it.rule().left() == sym)
                    .cloned()
                    .collect();
                for child in already_complete {
                    if let Some(completed) = item.complete(&child) {
                        if seen[i].insert(completed.clone()) {
                            chart[i].push(completed);
                        }
                    }
                }
            }
            Some(_) => {}
        }
    }
}

/// SCAN: advances every item in column `i` expecting `terminal` into
/// column `i + 1`.
fn scan_column(i: usize, terminal: Symbol, chart: &mut [Vec<Item>], seen: &mut [HashSet<Item>]) {
    let to_scan: Vec<Item> = chart[i]
        .iter()
        .filter(|it| it.next_symbol() == Some(terminal))
        .cloned()
        .collect();
    for item in to_scan {
        if let Some(scanned) = item.scan(terminal) {
            if seen[i + 1].insert(scanned.clone()) {
                chart[i + 1].push(scanned);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::SymbolSource;

    fn dyck_grammar() -> Grammar {
        // S -> ( S ) S | epsilon
        let mut src = SymbolSource::new();
        let s = src.next_non_terminal();
        let lparen = src.next_terminal();
        let rparen = src.next_terminal();
        let mut rules = HashSet::new();
        rules.insert(Rule::new(s, vec![lparen, s, rparen, s]));
        rules.insert(Rule::new(s, vec![]));
        Grammar::new(
            src,
            [s].into_iter().collect(),
            [lparen, rparen].into_iter().collect(),
            s,
            rules,
        )
    }

    fn word(grammar: &Grammar, text: &str) -> Vec<Symbol> {
        let mut terms: Vec<Symbol> = grammar.terminals().iter().copied().collect();
        terms.sort();
        text.chars()
            .map(|c| if c == '(' { terms[0] } else { terms[1] })
            .collect()
    }

    #[test]
    fn accepts_and_rejects_dyck_words() {
        let g = dyck_grammar();
        let mut earley = EarleyRecognizer::new();
        earley.fit(&g);

        assert!(earley.predict(&word(&g, "()(())")));
        assert!(earley.predict(&[]));
        assert!(!earley.predict(&word(&g, ")")));
        assert!(!earley.predict(&word(&g, "()(")));
    }

    #[test]
    fn nullable_chain_completes_regardless_of_worklist_order() {
        // S -> A B, A -> epsilon, B -> epsilon: the empty word must be accepted,
        // which requires completing A and B and then propagating through S
        // even though A and B are predicted from the same item.
        let mut src = SymbolSource::new();
        let s = src.next_non_terminal();
        let a = src.next_non_terminal();
        let b = src.next_non_terminal();
        let mut rules = HashSet::new();
        rules.insert(Rule::new(s, vec![a, b]));
        rules.insert(Rule::new(a, vec![]));
        rules.insert(Rule::new(b, vec![]));
        let g = Grammar::new(src, [s, a, b].into_iter().collect(), HashSet::new(), s, rules);

        let mut earley = EarleyRecognizer::new();
        earley.fit(&g);
        assert!(earley.predict(&[]));
    }

    #[test]
    fn left_recursive_grammar_terminates() {
        // S -> S a | a : left recursion must not loop the closure forever.
        let mut src = SymbolSource::new();
        let s = src.next_non_terminal();
        let t = src.next_terminal();
        let mut rules = HashSet::new();
        rules.insert(Rule::new(s, vec![s, t]));
        rules.insert(Rule::new(s, vec![t]));
        let g = Grammar::new(src, [s].into_iter().collect(), [t].into_iter().collect(), s, rules);

        let mut earley = EarleyRecognizer::new();
        earley.fit(&g);
        assert!(earley.predict(&[t, t, t]));
        assert!(!earley.predict(&[]));
    }

    #[test]
    #[should_panic(expected = "called before fit")]
    fn predict_before_fit_panics() {
        let earley = EarleyRecognizer::new();
        earley.predict(&[]);
    }
}
