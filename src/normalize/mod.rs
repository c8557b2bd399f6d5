//! The Chomsky Normal Form pipeline: seven rewriting passes run in a fixed
//! order. Each pass takes a [`Grammar`] by value and returns a new one —
//! the grammar is threaded through the pipeline rather than mutated through
//! shared references (Design Note: "thread a fresh grammar value through
//! the pipeline"), which keeps every pass a pure function and sidesteps
//! aliasing while non-terminals are being minted.
//!
//! Order matters and is fixed: start-isolation before ε-elimination (so
//! ε-closure never has to special-case the start symbol being read off an
//! rhs); mixed-rule fixing before long-rule decomposition (so decomposition
//! only ever sees all-non-terminal right-hand sides); long-rule
//! decomposition before ε/chain elimination (so those passes don't need to
//! re-derive decomposition's new non-terminals' shapes); ε-elimination
//! before chain elimination (ε-elimination synthesises rules that may
//! themselves be chain rules); chain elimination before the
//! productivity/reachability passes (removing chains can strand
//! non-terminals that those passes must then drop).

mod chain_rules;
mod closure;
mod epsilon;
mod long_rules;
mod mixed_rules;
mod productivity;
mod reachability;
mod start_isolation;

use crate::grammar::Grammar;

/// An explicit sink for normaliser progress notifications (Design Note:
/// "pass an explicit logging sink as a constructor parameter").
///
/// Independent of whichever sink is installed, every pass also emits an
/// ambient `log::trace!` record; disabling a [`NullSink`] costs nothing
/// beyond the (already free, when `log`'s max level excludes trace) ambient
/// call.
pub trait NormalizeSink {
    /// Called after each pass with the pass's name and the grammar it
    /// produced.
    fn note(&mut self, pass_name: &str, grammar: &Grammar);
}

/// The default, zero-cost sink: observes nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NormalizeSink for NullSink {
    #[inline]
    fn note(&mut self, _pass_name: &str, _grammar: &Grammar) {}
}

/// Rewrites `grammar` into an equivalent grammar in Chomsky Normal Form,
/// notifying `sink` after each of the seven passes.
///
/// Every pass is total on a well-formed grammar; there is no failure mode
/// here that isn't a bug in this crate.
pub fn normalize_with_sink(grammar: Grammar, sink: &mut dyn NormalizeSink) -> Grammar {
    let passes: [(&str, fn(Grammar) -> Grammar); 7] = [
        ("StartIsolation", start_isolation::run),
        ("MixedRulesFix", mixed_rules::run),
        ("LongRuleDecomposition", long_rules::run),
        ("EpsilonElimination", epsilon::run),
        ("ChainRuleElimination", chain_rules::run),
        ("NonProductiveElimination", productivity::run),
        ("UnreachableElimination", reachability::run),
    ];

    let mut grammar = grammar;
    for (name, pass) in passes {
        grammar = pass(grammar);
        log::trace!(
            "{name}: {} rules, {} non-terminals",
            grammar.rules().len(),
            grammar.non_terminals().len()
        );
        sink.note(name, &grammar);
    }
    grammar
}

/// Convenience wrapper around [`normalize_with_sink`] using [`NullSink`].
pub fn normalize(grammar: Grammar) -> Grammar {
    normalize_with_sink(grammar, &mut NullSink)
}
