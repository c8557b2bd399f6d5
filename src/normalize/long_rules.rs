//! Pass 3: decompose right-hand sides longer than two symbols.

use std::collections::HashSet;

use crate::grammar::Grammar;
use crate::rule::Rule;

/// For every rule `A -> X1 X2 ... Xn` with `n >= 3`, introduces fresh
/// non-terminals `Y1, ..., Y(n-2)` and rewrites it as the chain
/// `A -> X1 Y1`, `Y1 -> X2 Y2`, ..., `Y(n-2) -> X(n-1) Xn`. By the time this
/// pass runs (after mixed-rule fixing) every such rhs is all non-terminals.
pub fn run(mut grammar: Grammar) -> Grammar {
    let mut rules = HashSet::new();

    for rule in grammar.rules().clone() {
        if rule.right().len() <= 2 {
            rules.insert(rule.clone());
            continue;
        }

        let right = rule.right();
        let mut tail = *right.last().unwrap();
        // Walk the rhs right-to-left, pairing each remaining symbol with the
        // accumulated tail non-terminal, exactly the way the source chains
        // its helper non-terminals.
        for &sym in right[1..right.len() - 1].iter().rev() {
            let y = grammar.sym_source_mut().next_non_terminal();
            grammar.add_non_terminal(y);
            rules.insert(Rule::new(y, vec![sym, tail]));
            tail = y;
        }
        rules.insert(Rule::new(rule.left(), vec![right[0], tail]));
    }

    grammar.set_rules(rules);
    grammar
}
