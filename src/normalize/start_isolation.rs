//! Pass 1: ensure the start symbol never appears on a right-hand side.

use std::collections::HashSet;

use crate::grammar::Grammar;
use crate::rule::Rule;

/// If `start` occurs in any rule's right-hand side, mints a fresh
/// non-terminal `S'`, rewrites every occurrence of `start` (left and right)
/// to `S'`, and adds `start -> S'`. Otherwise returns `grammar` unchanged.
pub fn run(mut grammar: Grammar) -> Grammar {
    let start = grammar.start();
    let start_on_rhs = grammar
        .rules()
        .iter()
        .any(|rule| rule.right().contains(&start));

    if !start_on_rhs {
        return grammar;
    }

    let replacement = grammar.sym_source_mut().next_non_terminal();

    let rewritten: HashSet<Rule> = grammar
        .rules()
        .iter()
        .map(|rule| {
            let left = if rule.left() == start {
                replacement
            } else {
                rule.left()
            };
            let right: Vec<_> = rule
                .right()
                .iter()
                .map(|&sym| if sym == start { replacement } else { sym })
                .collect();
            Rule::new(left, right)
        })
        .collect();

    let mut rules = rewritten;
    rules.insert(Rule::new(start, vec![replacement]));

    grammar.add_non_terminal(replacement);
    grammar.set_rules(rules);
    grammar
}
