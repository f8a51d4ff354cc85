// 💵 Money-Words Parser - Spelled-out English amounts → exact decimals
// Closed vocabulary, deterministic evaluation, never guesses on unknown tokens

use rust_decimal::Decimal;
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    /// Nothing left after filler removal
    #[error("empty amount words")]
    EmptyPhrase,

    /// Token outside the closed vocabulary. Fatal: skipping or guessing an
    /// unknown word could silently change a legal amount.
    #[error("illegal token '{0}' in amount words")]
    UnknownToken(String),
}

// ============================================================================
// VOCABULARY
// ============================================================================

/// Units 0-19
fn unit_value(token: &str) -> Option<u64> {
    let v = match token {
        "zero" => 0,
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        "thirteen" => 13,
        "fourteen" => 14,
        "fifteen" => 15,
        "sixteen" => 16,
        "seventeen" => 17,
        "eighteen" => 18,
        "nineteen" => 19,
        _ => return None,
    };
    Some(v)
}

/// Tens 20-90
fn tens_value(token: &str) -> Option<u64> {
    let v = match token {
        "twenty" => 20,
        "thirty" => 30,
        "forty" => 40,
        "fifty" => 50,
        "sixty" => 60,
        "seventy" => 70,
        "eighty" => 80,
        "ninety" => 90,
        _ => return None,
    };
    Some(v)
}

/// Scale words: hundred multiplies the current group, the rest flush it
fn scale_value(token: &str) -> Option<u64> {
    let v = match token {
        "hundred" => 100,
        "thousand" => 1_000,
        "million" => 1_000_000,
        "billion" => 1_000_000_000,
        _ => return None,
    };
    Some(v)
}

/// Filler words carry no value and are discarded before evaluation
fn is_filler(token: &str) -> bool {
    matches!(token, "and" | "dollar" | "dollars")
}

// ============================================================================
// TOKENIZER
// ============================================================================

/// Lowercase, treat hyphens as spaces ("twenty-five"), drop fillers
fn tokenize(words: &str) -> Vec<String> {
    words
        .to_lowercase()
        .replace('-', " ")
        .split_whitespace()
        .filter(|t| !is_filler(t))
        .map(|t| t.to_string())
        .collect()
}

// ============================================================================
// PARSER
// ============================================================================

/// Parse an English number-word phrase into an exact decimal value.
///
/// Evaluation keeps two accumulators: `current` holds the value of the group
/// being built, `total` the already-flushed groups. Unit and tens tokens add
/// to `current`; `hundred` multiplies `current` by 100 (an empty group counts
/// as 1, so a bare "hundred" is 100); `thousand` and above flush the group
/// into `total`. The final value is `total + current`.
///
/// Repeated scale words without an intervening unit ("thousand thousand")
/// are defined-but-unusual: each one flushes, contributing zero.
pub fn parse_amount_words(words: &str) -> Result<Decimal, MoneyParseError> {
    let tokens = tokenize(words);

    if tokens.is_empty() {
        return Err(MoneyParseError::EmptyPhrase);
    }

    let mut total = Decimal::ZERO;
    let mut current = Decimal::ZERO;

    for token in tokens {
        if let Some(v) = unit_value(&token) {
            current += Decimal::from(v);
        } else if let Some(v) = tens_value(&token) {
            current += Decimal::from(v);
        } else if let Some(scale) = scale_value(&token) {
            if scale == 100 {
                let base = if current.is_zero() {
                    Decimal::ONE
                } else {
                    current
                };
                current = base * Decimal::ONE_HUNDRED;
            } else {
                total += current * Decimal::from(scale);
                current = Decimal::ZERO;
            }
        } else {
            return Err(MoneyParseError::UnknownToken(token));
        }
    }

    Ok(total + current)
}

// ============================================================================
// TESTS
// ============================================================================
