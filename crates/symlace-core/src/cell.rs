//! A single board cell.

use std::collections::BTreeSet;

use crate::{
    Symbol,
    symbol::{BLOCKED_GLYPH, EMPTY_GLYPH},
};

/// One board position, either a normal cell or a permanently blocked one.
///
/// A normal cell holds at most one symbol plus the set of symbols it may no
/// longer accept. The forbidden set is monotonic: symbols are only ever
/// added, never removed. A blocked cell never accepts any symbol.
///
/// # Examples
///
/// ```
/// use symlace_core::{Cell, Symbol};
///
/// let q = Symbol::new('Q').unwrap();
/// let mut cell = Cell::empty();
/// assert!(cell.is_empty());
/// assert!(cell.is_symbol_allowed(q));
///
/// cell.set_symbol(q);
/// assert_eq!(cell.display_symbol(), 'Q');
///
/// cell.forbid(q);
/// assert!(!cell.is_symbol_allowed(q));
///
/// let blocked = Cell::blocked();
/// assert!(!blocked.is_symbol_allowed(q));
/// assert_eq!(blocked.display_symbol(), '@');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// A writable cell.
    Normal {
        /// The placed symbol, if any.
        symbol: Option<Symbol>,
        /// Symbols this cell may no longer accept.
        forbidden: BTreeSet<Symbol>,
    },
    /// A cell that never accepts a symbol.
    Blocked,
}

impl Cell {
    /// Creates an empty normal cell.
    #[must_use]
    pub fn empty() -> Self {
        Self::Normal {
            symbol: None,
            forbidden: BTreeSet::new(),
        }
    }

    /// Creates a normal cell already holding a symbol.
    #[must_use]
    pub fn with_symbol(symbol: Symbol) -> Self {
        Self::Normal {
            symbol: Some(symbol),
            forbidden: BTreeSet::new(),
        }
    }

    /// Creates a permanently blocked cell.
    #[must_use]
    pub fn blocked() -> Self {
        Self::Blocked
    }

    /// Returns whether this cell is blocked.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked)
    }

    /// Returns whether this cell is normal and holds no symbol.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(
            self,
            Self::Normal {
                symbol: None,
                ..
            }
        )
    }

    /// Returns the placed symbol, if any.
    #[must_use]
    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            Self::Normal { symbol, .. } => *symbol,
            Self::Blocked => None,
        }
    }

    /// Returns the glyph shown for this cell: `@` for blocked, `-` for
    /// empty, otherwise the placed symbol.
    #[must_use]
    pub fn display_symbol(&self) -> char {
        match self {
            Self::Normal { symbol, .. } => symbol.map_or(EMPTY_GLYPH, Symbol::as_char),
            Self::Blocked => BLOCKED_GLYPH,
        }
    }

    /// Iterates over the symbols forbidden for this cell, in sorted order.
    ///
    /// Blocked cells yield nothing; they reject everything regardless.
    pub fn forbidden(&self) -> impl Iterator<Item = Symbol> + '_ {
        match self {
            Self::Normal { forbidden, .. } => Some(forbidden),
            Self::Blocked => None,
        }
        .into_iter()
        .flatten()
        .copied()
    }

    /// Returns whether `symbol` may currently be placed in this cell.
    ///
    /// Blocked cells always return `false`.
    #[must_use]
    pub fn is_symbol_allowed(&self, symbol: Symbol) -> bool {
        match self {
            Self::Normal { forbidden, .. } => !forbidden.contains(&symbol),
            Self::Blocked => false,
        }
    }

    /// Overwrites the placed symbol.
    ///
    /// Callers must have already checked [`is_symbol_allowed`]; blocked
    /// cells ignore the write.
    ///
    /// [`is_symbol_allowed`]: Self::is_symbol_allowed
    pub fn set_symbol(&mut self, new_symbol: Symbol) {
        if let Self::Normal { symbol, .. } = self {
            *symbol = Some(new_symbol);
        }
    }

    /// Adds `symbol` to the forbidden set. Idempotent; no effect on blocked
    /// cells.
    pub fn forbid(&mut self, symbol: Symbol) {
        if let Self::Normal { forbidden, .. } = self {
            forbidden.insert(symbol);
        }
    }
}
