//! Pattern flag parsing.
//!
//! A [`PatternSpec`](crate::schema::RawPatternSpec)'s `flags` field is a
//! closed enumeration of tokens (`i`, `m`, `s`, `x`, `U`) rather than raw
//! engine-specific strings, so the rule schema stays portable across regex
//! engines.
//!
//! A small, `Copy`, hashable bit set is cheaper to carry around than a
//! `Vec<char>` and makes "is flag X set" a single bitwise test.

use crate::error::{ClauseKind, RuleBoxError, Result};

bitflags::bitflags! {
    /// Recognized regex flag tokens, one bit per token in `{i,m,s,x,U}`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PatternFlags: u8 {
        /// Case-insensitive matching.
        const CASE_INSENSITIVE = 1 << 0;
        /// Multi-line mode: `^`/`$` match at line boundaries.
        const MULTI_LINE       = 1 << 1;
        /// Dot matches newline.
        const DOT_MATCHES_NL   = 1 << 2;
        /// Extended mode: whitespace and `#`-comments in the pattern are ignored.
        const EXTENDED         = 1 << 3;
        /// Swap the greediness of `?`, `*`, `+`.
        const SWAP_GREED       = 1 << 4;
    }
}

/// Parse a flag token list into a [`PatternFlags`] set, rejecting any token
/// outside `{i,m,s,x,U}` with [`RuleBoxError::UnknownFlag`].
pub fn parse_flags(
    tokens: &[String],
    rule_index: usize,
    clause: ClauseKind,
    pattern_index: usize,
) -> Result<PatternFlags> {
    let mut flags = PatternFlags::empty();
    for token in tokens {
        let mut chars = token.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(RuleBoxError::UnknownFlag {
                token: token.chars().next().unwrap_or('\0'),
                rule_index,
                clause,
                pattern_index,
            });
        };
        let bit = match c {
            'i' => PatternFlags::CASE_INSENSITIVE,
            'm' => PatternFlags::MULTI_LINE,
            's' => PatternFlags::DOT_MATCHES_NL,
            'x' => PatternFlags::EXTENDED,
            'U' => PatternFlags::SWAP_GREED,
            other => {
                return Err(RuleBoxError::UnknownFlag {
                    token: other,
                    rule_index,
                    clause,
                    pattern_index,
                });
            }
        };
        flags |= bit;
    }
    Ok(flags)
}
