//! Pass 7: drop non-terminals (and their rules) unreachable from the start.

use std::collections::{HashMap, HashSet};

use crate::grammar::Grammar;
use crate::rule::Rule;
use crate::symbol::Symbol;

/// DFS over right-hand sides starting at `grammar.start()`. The start is
/// reachable from itself trivially, satisfying the invariant of §3.
pub fn run(mut grammar: Grammar) -> Grammar {
    let mut by_left: HashMap<Symbol, Vec<&Rule>> = HashMap::new();
    for rule in grammar.rules() {
        by_left.entry(rule.left()).or_default().push(rule);
    }

    let mut reachable = HashSet::new();
    let mut stack = vec![grammar.start()];
    reachable.insert(grammar.start());
    while let Some(sym) = stack.pop() {
        if let Some(rules) = by_left.get(&sym) {
            for rule in rules {
                for &next in rule.right() {
                    if next.is_non_terminal() && reachable.insert(next) {
                        stack.push(next);
                    }
                }
            }
        }
    }

    let non_terminals: HashSet<_> = grammar
        .non_terminals()
        .iter()
        .copied()
        .filter(|sym| reachable.contains(sym))
        .collect();
    let rules: HashSet<Rule> = grammar
        .rules()
        .iter()
        .filter(|rule| reachable.contains(&rule.left()))
        .cloned()
        .collect();

    grammar.set_non_terminals(non_terminals);
    grammar.set_rules(rules);
    grammar
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::SymbolSource;

    #[test]
    fn drops_a_non_terminal_never_mentioned_from_the_start() {
        let mut src = SymbolSource::new();
        let s = src.next_non_terminal();
        let unused = src.next_non_terminal();
        let t = src.next_terminal();
        let mut rules = HashSet::new();
        rules.insert(Rule::new(s, vec![t]));
        rules.insert(Rule::new(unused, vec![t]));
        let g = Grammar::new(
            src,
            [s, unused].into_iter().collect(),
            [t].into_iter().collect(),
            s,
            rules,
        );

        let out = run(g);
        assert!(!out.non_terminals().contains(&unused));
        assert_eq!(out.rules().len(), 1);
    }
}
