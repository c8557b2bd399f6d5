//! The CYK recogniser: normalises its grammar to CNF, then fills a
//! triangular membership table.

use std::collections::HashMap;

use bit_vec::BitVec;

use crate::grammar::Grammar;
use crate::normalize::normalize;
use crate::recognizer::{GrammarClass, Recognizer};
use crate::rule::Rule;
use crate::symbol::Symbol;

/// Recognises membership by filling `P[A][i][j] = true` iff `A =>* w[i..=j]`,
/// after rewriting the fitted grammar into Chomsky Normal Form.
///
/// Complexity: `O(|rules| * n^3)` time, `O(|non_terminals| * n^2)` space,
/// where `n` is the query length.
pub struct CykRecognizer {
    grammar: Option<Grammar>,
}

impl Default for CykRecognizer {
    fn default() -> Self {
        CykRecognizer::new()
    }
}

impl CykRecognizer {
    /// Creates a recogniser that has not yet been fit.
    pub fn new() -> Self {
        CykRecognizer { grammar: None }
    }
}

impl Recognizer for CykRecognizer {
    fn fit(&mut self, grammar: &Grammar) {
        self.grammar = Some(normalize(grammar.clone()));
    }

    fn predict(&self, word: &[Symbol]) -> bool {
        let grammar = self
            .grammar
            .as_ref()
            .expect("CykRecognizer::predict called before fit");

        if word.is_empty() {
            return grammar.rules().contains(&Rule::new(grammar.start(), vec![]));
        }

        let n = word.len();
        let non_terminals: Vec<Symbol> = grammar.non_terminals().iter().copied().collect();
        let index: HashMap<Symbol, usize> = non_terminals
            .iter()
            .enumerate()
            .map(|(i, &sym)| (sym, i))
            .collect();

        // `table[a]` is an `n x n` bit matrix flattened row-major: bit
        // `i * n + j` is `P[A][i][j]`.
        let mut table: Vec<BitVec> = vec![BitVec::from_elem(n * n, false); non_terminals.len()];

        let mut producers_of: HashMap<Symbol, Vec<Symbol>> = HashMap::new();
        let mut binary_rules: Vec<(usize, usize, usize)> = Vec::new();
        for rule in grammar.rules() {
            if rule.is_terminal_rule() {
                producers_of
                    .entry(rule.right()[0])
                    .or_default()
                    .push(rule.left());
            } else if rule.is_binary_rule() {
                binary_rules.push((
                    index[&rule.left()],
                    index[&rule.right()[0]],
                    index[&rule.right()[1]],
                ));
            }
        }

        // Base case: spans of length one.
        for (i, &term) in word.iter().enumerate() {
            if let Some(lefts) = producers_of.get(&term) {
                for &left in lefts {
                    table[index[&left]].set(i * n + i, true);
                }
            }
        }

        // Induction: spans of increasing length, trying every split point
        // and every binary rule.
        for len in 2..=n {
            for i in 0..=(n - len) {
                let j = i + len - 1;
                for mid in i..j {
                    for &(a, b, c) in &binary_rules {
                        if table[b][i * n + mid] && table[c][(mid + 1) * n + j] {
                            table[a].set(i * n + j, true);
                        }
                    }
                }
            }
        }

        index
            .get(&grammar.start())
            .map(|&start_idx| table[start_idx][n - 1])
            .unwrap_or(false)
    }

    fn grammar_class(&self) -> GrammarClass {
        GrammarClass::ContextFree
    }
}
