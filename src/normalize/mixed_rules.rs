//! Pass 2: no terminal may appear in a right-hand side of length >= 2.

use std::collections::{HashMap, HashSet};

use crate::grammar::Grammar;
use crate::rule::Rule;
use crate::symbol::Symbol;

/// For every terminal occurring anywhere except in a unit rule `A -> t`,
/// mints a clone non-terminal `T_t -> t` and substitutes it. Afterwards
/// every rhs of length >= 2 consists only of non-terminals.
pub fn run(mut grammar: Grammar) -> Grammar {
    let needs_clone: HashSet<Symbol> = grammar
        .rules()
        .iter()
        .filter(|rule| rule.right().len() >= 2)
        .flat_map(|rule| rule.right().iter().copied())
        .filter(|sym| sym.is_terminal())
        .collect();

    let mut clones: HashMap<Symbol, Symbol> = HashMap::new();
    let mut added_rules = HashSet::new();
    for &term in &needs_clone {
        let clone = grammar.sym_source_mut().next_non_terminal();
        grammar.add_non_terminal(clone);
        added_rules.insert(Rule::new(clone, vec![term]));
        clones.insert(term, clone);
    }

    let mut rules: HashSet<Rule> = grammar
        .rules()
        .iter()
        .map(|rule| {
            if rule.right().len() < 2 {
                return rule.clone();
            }
            let right: Vec<_> = rule
                .right()
                .iter()
                .map(|sym| clones.get(sym).copied().unwrap_or(*sym))
                .collect();
            Rule::new(rule.left(), right)
        })
        .collect();
    rules.extend(added_rules);

    grammar.set_rules(rules);
    grammar
}
