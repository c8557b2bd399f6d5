//! Grammar symbols. A symbol's identity is nominal: it is the integer handed
//! out when the symbol was minted, never its printable spelling. Two symbols
//! compare equal iff they were minted from the same call to
//! [`SymbolSource::next_terminal`] or [`SymbolSource::next_non_terminal`].

use std::fmt;

/// A numeric id, unique within one [`SymbolSource`].
type Id = u32;

/// A grammar symbol: either a terminal or a non-terminal.
///
/// `Symbol` is `Copy` and hashes/compares by its `(kind, id)` pair, so it can
/// be used directly as a key in `HashSet`/`HashMap` without wrapping.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    kind: Kind,
    id: Id,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
enum Kind {
    Terminal,
    NonTerminal,
}

impl Symbol {
    /// True if this symbol is a terminal.
    #[inline]
    pub fn is_terminal(self) -> bool {
        self.kind == Kind::Terminal
    }

    /// True if this symbol is a non-terminal.
    #[inline]
    pub fn is_non_terminal(self) -> bool {
        self.kind == Kind::NonTerminal
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Kind::Terminal => write!(f, "T{}", self.id),
            Kind::NonTerminal => write!(f, "N{}", self.id),
        }
    }
}

/// A monotonically increasing source of fresh, distinct symbols.
///
/// Every [`Grammar`](crate::grammar::Grammar) and every stage of the CNF
/// pipeline owns one of these, so newly-minted symbols (the extra
/// non-terminals introduced by start-isolation, long-rule decomposition,
/// and so on) never collide with symbols already in use.
#[derive(Clone, Debug, Default)]
pub struct SymbolSource {
    next_terminal: Id,
    next_non_terminal: Id,
}

impl SymbolSource {
    /// Creates a source with an empty symbol space.
    pub fn new() -> Self {
        SymbolSource::default()
    }

    /// Mints a fresh terminal, distinct from every symbol minted so far.
    pub fn next_terminal(&mut self) -> Symbol {
        let id = self.next_terminal;
        self.next_terminal += 1;
        Symbol {
            kind: Kind::Terminal,
            id,
        }
    }

    /// Mints a fresh non-terminal, distinct from every symbol minted so far.
    pub fn next_non_terminal(&mut self) -> Symbol {
        let id = self.next_non_terminal;
        self.next_non_terminal += 1;
        Symbol {
            kind: Kind::NonTerminal,
            id,
        }
    }
}
