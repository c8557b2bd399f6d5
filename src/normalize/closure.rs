//! A worklist fixed-point shared by the epsilon-derivation, productivity,
//! and reachability analyses.
//!
//! Grounded on the teacher's `RhsClosure` (reverse-dependency queue over a
//! property bit-vector): here the property is "symbol is in `satisfied`"
//! and `elem_ok` decides whether one right-hand-side element counts as
//! already satisfied, which varies per analysis (a terminal always counts
//! for productivity, never for epsilon-derivation). Symbol identities are
//! not packed into one contiguous index space in this crate (terminals and
//! non-terminals are numbered independently), so a `HashSet` stands in for
//! the teacher's `BitVec`.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::rule::Rule;
use crate::symbol::Symbol;

/// Computes the least fixed point of: `left` is in the result if some rule
/// `left -> right` exists whose every element of `right` satisfies
/// `elem_ok` with respect to the result so far.
pub fn worklist_closure(
    rules: &HashSet<Rule>,
    elem_ok: impl Fn(Symbol, &HashSet<Symbol>) -> bool,
) -> HashSet<Symbol> {
    let mut dependents: HashMap<Symbol, Vec<&Rule>> = HashMap::new();
    for rule in rules {
        for &sym in rule.right() {
            dependents.entry(sym).or_default().push(rule);
        }
    }

    let mut satisfied: HashSet<Symbol> = HashSet::new();
    let mut queue: VecDeque<Symbol> = VecDeque::new();

    let mut seed = |rule: &Rule, satisfied: &mut HashSet<Symbol>, queue: &mut VecDeque<Symbol>| {
        if !satisfied.contains(&rule.left()) && rule.right().iter().all(|&s| elem_ok(s, satisfied)) {
            satisfied.insert(rule.left());
            queue.push_back(rule.left());
        }
    };

    for rule in rules {
        seed(rule, &mut satisfied, &mut queue);
    }

    while let Some(sym) = queue.pop_front() {
        if let Some(rules) = dependents.get(&sym) {
            for &rule in rules {
                seed(rule, &mut satisfied, &mut queue);
            }
        }
    }

    satisfied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::SymbolSource;

    #[test]
    fn finds_symbols_that_transitively_derive_a_base_case() {
        // A -> B, B -> C, C -> (epsilon): all three should "derive epsilon".
        let mut src = SymbolSource::new();
        let a = src.next_non_terminal();
        let b = src.next_non_terminal();
        let c = src.next_non_terminal();
        let mut rules = HashSet::new();
        rules.insert(Rule::new(a, vec![b]));
        rules.insert(Rule::new(b, vec![c]));
        rules.insert(Rule::new(c, vec![]));

        let result = worklist_closure(&rules, |sym, set| set.contains(&sym));
        assert!(result.contains(&a));
        assert!(result.contains(&b));
        assert!(result.contains(&c));
    }

    #[test]
    fn terminals_can_count_as_ok_unconditionally() {
        let mut src = SymbolSource::new();
        let a = src.next_non_terminal();
        let t = src.next_terminal();
        let mut rules = HashSet::new();
        rules.insert(Rule::new(a, vec![t]));

        let result = worklist_closure(&rules, |sym, set| sym.is_terminal() || set.contains(&sym));
        assert!(result.contains(&a));
    }
}
