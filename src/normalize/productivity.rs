//! Pass 6: drop non-productive non-terminals and the rules that mention them.

use std::collections::HashSet;

use super::closure::worklist_closure;
use crate::grammar::Grammar;
use crate::rule::Rule;

/// A non-terminal is productive if it derives some string of terminals:
/// the greatest fixed point computed here is really the least fixed point
/// of "derives a terminal string", seeded by terminal-only right-hand
/// sides, since terminals always count towards the base case.
///
/// The start symbol is kept in `non_terminals` even if it turns out
/// non-productive — §9's open question is resolved by preserving the
/// shape of an empty-language grammar rather than collapsing it.
pub fn run(mut grammar: Grammar) -> Grammar {
    let productive = worklist_closure(grammar.rules(), |sym, set| sym.is_terminal() || set.contains(&sym));

    let mut non_terminals: HashSet<_> = grammar
        .non_terminals()
        .iter()
        .copied()
        .filter(|sym| productive.contains(sym))
        .collect();
    non_terminals.insert(grammar.start());

    let rules: HashSet<Rule> = grammar
        .rules()
        .iter()
        .filter(|rule| {
            productive.contains(&rule.left())
                && rule
                    .right()
                    .iter()
                    .all(|sym| sym.is_terminal() || productive.contains(sym))
        })
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
    fn drops_a_non_terminal_that_can_never_bottom_out_in_terminals() {
        // S -> A, A -> A (no base case: A is non-productive)
        let mut src = SymbolSource::new();
        let s = src.next_non_terminal();
        let a = src.next_non_terminal();
        let mut rules = HashSet::new();
        rules.insert(Rule::new(s, vec![a]));
        rules.insert(Rule::new(a, vec![a]));
        let g = Grammar::new(src, [s, a].into_iter().collect(), HashSet::new(), s, rules);

        let out = run(g);
        assert!(!out.non_terminals().contains(&a));
        assert!(out.non_terminals().contains(&s), "start is always kept");
        assert!(out.rules().is_empty());
    }

    #[test]
    fn keeps_productive_chains() {
        let mut src = SymbolSource::new();
        let s = src.next_non_terminal();
        let t = src.next_terminal();
        let mut rules = HashSet::new();
        rules.insert(Rule::new(s, vec![t]));
        let g = Grammar::new(
            src,
            [s].into_iter().collect(),
            [t].into_iter().collect(),
            s,
            rules.clone(),
        );
        let out = run(g);
        assert_eq!(out.rules(), &rules);
    }
}
