//! Pass 5: eliminate chain (unit) rules `A -> B`.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::grammar::Grammar;
use crate::rule::Rule;
use crate::symbol::Symbol;

/// Non-terminals reachable from `start` via chain edges, including `start`
/// itself (the relation `A =>* B` is reflexive-transitive).
fn reachable_via_chains(start: Symbol, edges: &HashMap<Symbol, Vec<Symbol>>) -> HashSet<Symbol> {
    let mut seen = HashSet::new();
    seen.insert(start);
    let mut queue = VecDeque::from([start]);
    while let Some(a) = queue.pop_front() {
        if let Some(next) = edges.get(&a) {
            for &b in next {
                if seen.insert(b) {
                    queue.push_back(b);
                }
            }
        }
    }
    seen
}

/// Builds the relation `A => B` from unit rules `A -> B`, then for every
/// `A =>* B` and non-unit rule `B -> gamma`, adds `A -> gamma`. All chain
/// rules are then dropped.
pub fn run(mut grammar: Grammar) -> Grammar {
    let mut edges: HashMap<Symbol, Vec<Symbol>> = HashMap::new();
    for rule in grammar.rules() {
        if rule.is_chain_rule() {
            edges.entry(rule.left()).or_default().push(rule.right()[0]);
        }
    }

    let mut by_left: HashMap<Symbol, Vec<&Rule>> = HashMap::new();
    for rule in grammar.rules() {
        if !rule.is_chain_rule() {
            by_left.entry(rule.left()).or_default().push(rule);
        }
    }

    let mut rules: HashSet<Rule> = grammar
        .rules()
        .iter()
        .filter(|rule| !rule.is_chain_rule())
        .cloned()
        .collect();

    for &a in grammar.non_terminals() {
        for b in reachable_via_chains(a, &edges) {
            if let Some(non_unit_rules) = by_left.get(&b) {
                for rule in non_unit_rules {
                    rules.insert(Rule::new(a, rule.right().to_vec()));
                }
            }
        }
    }

    grammar.set_rules(rules);
    grammar
}
