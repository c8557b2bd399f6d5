//! Pass 4: eliminate ε-productions except (optionally) one at the start.

use std::collections::HashSet;

use super::closure::worklist_closure;
use crate::grammar::Grammar;
use crate::rule::Rule;
use crate::symbol::Symbol;

/// Computes `N_epsilon`, the non-terminals that derive ε: the base case is
/// `A -> ()`, and `A` also derives ε if some `A -> alpha` exists with every
/// symbol of `alpha` already in `N_epsilon` (terminals are never members, so
/// any rhs containing one is permanently excluded).
fn epsilon_deriving(rules: &HashSet<Rule>) -> HashSet<Symbol> {
    worklist_closure(rules, |sym, set| set.contains(&sym))
}

/// For every rule `A -> alpha`, adds every rule obtained by deleting a
/// non-empty subset of the ε-deriving occurrences of `alpha` (skipping the
/// empty result unless `A` is the start and ε is in the language, in which
/// case exactly one `S -> ()` survives). All other ε-rules are dropped.
pub fn run(mut grammar: Grammar) -> Grammar {
    let eps = epsilon_deriving(grammar.rules());
    let start_derives_epsilon = eps.contains(&grammar.start());

    let mut rules: HashSet<Rule> = HashSet::new();
    for rule in grammar.rules() {
        if rule.is_epsilon() {
            continue;
        }
        rules.insert(rule.clone());

        let eps_positions: Vec<usize> = rule
            .right()
            .iter()
            .enumerate()
            .filter(|&(_, sym)| eps.contains(sym))
            .map(|(i, _)| i)
            .collect();
        if eps_positions.is_empty() {
            continue;
        }

        // Every non-empty subset of the eps-deriving positions, as a bitmask
        // over `eps_positions`.
        let subset_count = 1u32 << eps_positions.len();
        for mask in 1..subset_count {
            let dropped: HashSet<usize> = eps_positions
                .iter()
                .enumerate()
                .filter(|&(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, &pos)| pos)
                .collect();
            let right: Vec<Symbol> = rule
                .right()
                .iter()
                .enumerate()
                .filter(|(i, _)| !dropped.contains(i))
                .map(|(_, &sym)| sym)
                .collect();
            if right.is_empty() {
                continue; // handled below, only for the start symbol
            }
            rules.insert(Rule::new(rule.left(), right));
        }
    }

    if start_derives_epsilon {
        rules.insert(Rule::new(grammar.start(), vec![]));
    }

    grammar.set_rules(rules);
    grammar
}
