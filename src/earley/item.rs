//! Earley items ("situations"): a rule, a dot position, and the input span
//! claimed so far.

use crate::rule::Rule;
use crate::symbol::Symbol;

/// `(rule, dot, origin, current)`: the claim that `rule`'s right-hand side
/// up to `dot` has matched input `[origin, current)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    rule: Rule,
    dot: usize,
    origin: usize,
    current: usize,
}

impl Item {
    /// Creates the item `(rule, dot, origin, current)`.
    pub fn new(rule: Rule, dot: usize, origin: usize, current: usize) -> Self {
        debug_assert!(dot <= rule.right().len());
        Item {
            rule,
            dot,
            origin,
            current,
        }
    }

    /// The underlying rule.
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// The dot position.
    pub fn dot(&self) -> usize {
        self.dot
    }

    /// The chart cell this item originated in.
    pub fn origin(&self) -> usize {
        self.origin
    }

    /// The chart cell this item currently lives in.
    pub fn current(&self) -> usize {
        self.current
    }

    /// True once the dot has passed the last symbol of the rule.
    pub fn is_complete(&self) -> bool {
        self.dot == self.rule.right().len()
    }

    /// The symbol immediately after the dot, or `None` if the item is
    /// complete. Chart cells are grouped by this value so SCAN and COMPLETE
    /// can index into the right bucket in `O(1)`.
    pub fn next_symbol(&self) -> Option<Symbol> {
        self.rule.right().get(self.dot).copied()
    }

    /// `SCAN`: if this item's next symbol is the terminal `a` and `a` is
    /// next in the input, returns the item advanced past it.
    pub fn scan(&self, terminal: Symbol) -> Option<Item> {
        match self.next_symbol() {
            Some(sym) if sym.is_terminal() && sym == terminal => Some(Item::new(
                self.rule.clone(),
                self.dot + 1,
                self.origin,
                self.current + 1,
            )),
            _ => None,
        }
    }

    /// `PREDICT`: if this item's next symbol is the non-terminal that
    /// `rule` derives from, returns the freshly-seeded item
    /// `(rule, 0, current, current)`.
    pub fn predict(&self, rule: &Rule) -> Option<Item> {
        match self.next_symbol() {
            Some(sym) if sym.is_non_terminal() && sym == rule.left() => {
                Some(Item::new(rule.clone(), 0, self.current, self.current))
            }
            _ => None,
        }
    }

    /// `COMPLETE`: if `self` (the parent) expects the non-terminal that
    /// `child` (complete) derives, and `child`'s span starts where `self`
    /// currently stands, returns `self` advanced past that non-terminal,
    /// spanning up to `child`'s end.
    pub fn complete(&self, child: &Item) -> Option<Item> {
        if !child.is_complete() {
            return None;
        }
        match self.next_symbol() {
            Some(sym) if sym.is_non_terminal() && sym == child.rule.left() && self.current == child.origin => {
                Some(Item::new(
                    self.rule.clone(),
                    self.dot + 1,
                    self.origin,
                    child.current,
                ))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::SymbolSource;

    #[test]
    fn scan_advances_the_dot_and_the_current_position() {
        let mut src = SymbolSource::new();
        let a = src.next_non_terminal();
        let t = src.next_terminal();
        let rule = Rule::new(a, vec![t]);
        let item = Item::new(rule, 0, 0, 0);
        let scanned = item.scan(t).unwrap();
        assert_eq!(scanned.dot(), 1);
        assert_eq!(scanned.current(), 1);
        assert!(scanned.is_complete());
    }

    #[test]
    fn predict_seeds_a_fresh_item_at_the_current_position() {
        let mut src = SymbolSource::new();
        let a = src.next_non_terminal();
        let b = src.next_non_terminal();
        let parent_rule = Rule::new(a, vec![b]);
        let child_rule = Rule::new(b, vec![]);
        let parent = Item::new(parent_rule, 0, 0, 2);
        let predicted = parent.predict(&child_rule).unwrap();
        assert_eq!(predicted.origin(), 2);
        assert_eq!(predicted.current(), 2);
        assert!(predicted.is_complete()); // B -> epsilon is instantly complete
    }

    #[test]
    fn complete_requires_the_child_span_to_start_where_the_parent_stands() {
        let mut src = SymbolSource::new();
        let a = src.next_non_terminal();
        let b = src.next_non_terminal();
        let parent = Item::new(Rule::new(a, vec![b]), 0, 0, 1);
        let matching_child = Item::new(Rule::new(b, vec![]), 0, 1, 1);
        assert!(parent.complete(&matching_child).is_some());

        let mismatched_child = Item::new(Rule::new(b, vec![]), 0, 0, 0);
        assert!(parent.complete(&mismatched_child).is_none());
    }
}
