//! 3x3 match patterns.

use std::fmt::{self, Display};

use crate::{Symbol, symbol::WILDCARD_GLYPH};

/// Number of cells in a pattern template.
pub const TEMPLATE_LEN: usize = 9;

/// An immutable rule pairing a symbol with a 3x3 template.
///
/// The template is expressed in the canonical clockwise-from-top-left
/// neighborhood order (see
/// [`NEIGHBORHOOD_OFFSETS`](crate::grid::NEIGHBORHOOD_OFFSETS)) and each slot
/// is either the pattern's own symbol or the `*` wildcard.
///
/// # Examples
///
/// ```
/// use symlace_core::{Pattern, Symbol};
///
/// let q = Symbol::new('Q').unwrap();
/// let x = Symbol::new('X').unwrap();
/// let pattern = Pattern::new(q, "QQ**Q**QQ").unwrap();
///
/// // Wildcard slots accept anything, including empty and blocked glyphs
/// let neighborhood = ['Q', 'Q', '-', '@', 'Q', 'X', '-', 'Q', 'Q'];
/// assert!(pattern.matches(&neighborhood, q));
///
/// // A pattern only ever fires for its own symbol
/// assert!(!pattern.matches(&neighborhood, x));
///
/// // Templates may only contain the symbol and wildcards
/// assert!(Pattern::new(q, "QXQ*Q*QQQ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    symbol: Symbol,
    template: [TemplateSlot; TEMPLATE_LEN],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TemplateSlot {
    Symbol,
    Wildcard,
}

impl Pattern {
    /// Creates a pattern from a symbol and a 9-character template string.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::WrongLength`] if the template is not exactly
    /// 9 characters, or [`PatternError::InvalidGlyph`] if it contains
    /// anything other than the symbol and `*` wildcards.
    pub fn new(symbol: Symbol, template: &str) -> Result<Self, PatternError> {
        let mut slots = [TemplateSlot::Wildcard; TEMPLATE_LEN];
        let mut len = 0;
        for (i, ch) in template.chars().enumerate() {
            let slot = if ch == symbol.as_char() {
                TemplateSlot::Symbol
            } else if ch == WILDCARD_GLYPH {
                TemplateSlot::Wildcard
            } else {
                return Err(PatternError::InvalidGlyph { ch, symbol });
            };
            if let Some(target) = slots.get_mut(i) {
                *target = slot;
            }
            len = i + 1;
        }
        if len != TEMPLATE_LEN {
            return Err(PatternError::WrongLength { len });
        }
        Ok(Self { symbol, template: slots })
    }

    /// Returns the symbol this pattern fires for.
    #[must_use]
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Returns the template as a 9-character string.
    #[must_use]
    pub fn template(&self) -> String {
        self.template
            .iter()
            .map(|slot| match slot {
                TemplateSlot::Symbol => self.symbol.as_char(),
                TemplateSlot::Wildcard => WILDCARD_GLYPH,
            })
            .collect()
    }

    /// Tests a neighborhood against this pattern.
    ///
    /// Returns `false` unless `placed` is the pattern's symbol. Every
    /// non-wildcard template slot must hold the symbol in the neighborhood;
    /// wildcard slots impose no constraint. Pure predicate, no side effects.
    #[must_use]
    pub fn matches(&self, neighborhood: &[char; TEMPLATE_LEN], placed: Symbol) -> bool {
        if placed != self.symbol {
            return false;
        }
        self.template
            .iter()
            .zip(neighborhood)
            .all(|(slot, &ch)| match slot {
                TemplateSlot::Symbol => ch == self.symbol.as_char(),
                TemplateSlot::Wildcard => true,
            })
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.symbol, self.template())
    }
}

/// Errors from constructing a [`Pattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PatternError {
    /// The template was not exactly 9 characters long.
    #[display("pattern template must be 9 characters, got {len}")]
    WrongLength {
        /// The actual template length.
        len: usize,
    },
    /// The template contained a character other than the symbol or `*`.
    #[display("invalid template character {ch:?} for symbol {symbol}")]
    InvalidGlyph {
        /// The offending character.
        ch: char,
        /// The pattern's symbol.
        symbol: Symbol,
    },
}
