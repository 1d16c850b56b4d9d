//! Gematria summation and digit-root reduction.
//!
//! Tokens are transliterated names — sephiroth or Hebrew letters. An
//! unknown token scores 0 but stays in the breakdown flagged as unknown,
//! so callers can see what was skipped rather than silently losing it.

use serde::{Deserialize, Serialize};

use crate::letter::HebrewLetter;
use crate::sephirah::Sephirah;

/// One token's contribution to a gematria sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenValue {
    pub token: String,
    pub value: u32,
    /// False when the token was not found in the value tables.
    pub known: bool,
}

/// A gematria sum with its per-token breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GematriaSum {
    pub total: u32,
    pub digit_root: u32,
    pub breakdown: Vec<TokenValue>,
}

/// Value of a single token: letter names first, then sephiroth names.
pub fn token_value(token: &str) -> Option<u32> {
    HebrewLetter::from_name(token)
        .map(HebrewLetter::gematria_value)
        .or_else(|| Sephirah::from_name(token).map(Sephirah::gematria_value))
}

/// Sum a token set with digit-root reduction.
pub fn gematria_sum<T: AsRef<str>>(tokens: &[T]) -> GematriaSum {
    let mut total = 0u32;
    let mut breakdown = Vec::with_capacity(tokens.len());
    for token in tokens {
        let token = token.as_ref();
        match token_value(token) {
            Some(value) => {
                total += value;
                breakdown.push(TokenValue {
                    token: token.to_string(),
                    value,
                    known: true,
                });
            }
            None => breakdown.push(TokenValue {
                token: token.to_string(),
                value: 0,
                known: false,
            }),
        }
    }
    GematriaSum {
        total,
        digit_root: digit_root(total),
        breakdown,
    }
}

/// Digit root: repeated decimal digit-summing until one digit remains.
///
/// For n > 0 this is the classic "casting out nines": 1 + (n-1) mod 9,
/// so multiples of nine stay 9, never 0. The zero-valued sum (no known
/// tokens) is defined explicitly as 0.
pub const fn digit_root(n: u32) -> u32 {
    if n == 0 { 0 } else { 1 + (n - 1) % 9 }
}
