// ⚖️ Validation Engine - Cross-field deed invariants + closing tax
// All-or-nothing: the first failed check rejects the whole record

use crate::models::EnrichedDeed;
use crate::money::{parse_amount_words, MoneyParseError};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

/// Why the numeric and spelled-out amounts could not be reconciled
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MismatchReason {
    /// The words were not parseable at all
    #[error("cannot parse amount words reliably: {0}")]
    Unparsable(#[from] MoneyParseError),

    /// Both sides parsed but disagree after quantization
    #[error("numeric amount {numeric} and spelled amount {words} do not match")]
    Disagreement { numeric: Decimal, words: Decimal },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("date_recorded {recorded} cannot precede date_signed {signed}")]
    DateOrder {
        signed: chrono::NaiveDate,
        recorded: chrono::NaiveDate,
    },

    #[error("amount mismatch: {0}")]
    AmountMismatch(#[from] MismatchReason),
}

// ============================================================================
// VALIDATION RESULT
// ============================================================================

/// Output of a successful validation. No partial results exist: a record is
/// either fully valid with a derived closing tax, or rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub closing_tax: Decimal,
}

// ============================================================================
// QUANTIZATION
// ============================================================================

/// Round an exact decimal to currency-minor-unit precision (2 fractional
/// digits), midpoint away from zero.
pub fn monetize(x: Decimal) -> Decimal {
    x.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Validate an enriched deed and derive its closing tax.
///
/// Ordered checks, short-circuiting on the first failure:
/// 1. `date_recorded >= date_signed`
/// 2. `amount_words` parses and agrees with `amount_numeric` at 2 decimals
/// 3. `closing_tax = monetize(tax_rate * amount_numeric)`
pub fn validate(enriched: &EnrichedDeed) -> Result<ValidationResult, ValidationError> {
    let deed = &enriched.deed;

    // 1. A deed cannot be recorded before it was signed
    if deed.date_recorded < deed.date_signed {
        return Err(ValidationError::DateOrder {
            signed: deed.date_signed,
            recorded: deed.date_recorded,
        });
    }

    // 2. The spelled-out amount must confirm the digit amount
    let words_val = parse_amount_words(&deed.amount_words)
        .map(monetize)
        .map_err(MismatchReason::from)?;
    let numeric_val = monetize(deed.amount_numeric);

    if words_val != numeric_val {
        return Err(ValidationError::AmountMismatch(
            MismatchReason::Disagreement {
                numeric: numeric_val,
                words: words_val,
            },
        ));
    }

    // 3. Derive the closing tax at the resolved county's rate
    let closing_tax = monetize(enriched.tax_rate() * numeric_val);

    Ok(ValidationResult { closing_tax })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CountyTaxInfo, DeedRecord};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn test_deed(amount_numeric: &str, amount_words: &str) -> DeedRecord {
        DeedRecord {
            doc_id: "DEED-TRUST-0042".to_string(),
            county_raw: "Santa Clara".to_string(),
            state: "CA".to_string(),
            date_signed: date(2024, 1, 10),
            date_recorded: date(2024, 1, 15),
            grantor: "T.E.S.L.A. Holdings LLC".to_string(),
            grantee: "John & Sarah Connor".to_string(),
            amount_numeric: dec(amount_numeric),
            amount_words: amount_words.to_string(),
            apn: "992-001-XA".to_string(),
            status: "PRELIMINARY".to_string(),
        }
    }

    fn enrich(deed: DeedRecord, rate: &str) -> EnrichedDeed {
        EnrichedDeed::new(
            deed,
            CountyTaxInfo {
                name: "Santa Clara".to_string(),
                tax_rate: dec(rate),
            },
        )
    }

    #[test]
    fn test_accepts_consistent_deed_and_computes_closing_tax() {
        let deed = test_deed(
            "1250000.00",
            "One Million Two Hundred Fifty Thousand Dollars",
        );
        let result = validate(&enrich(deed, "0.0075")).unwrap();
        assert_eq!(result.closing_tax, dec("9375.00"));
    }

    #[test]
    fn test_rejects_recorded_before_signed() {
        let mut deed = test_deed(
            "1250000.00",
            "One Million Two Hundred Fifty Thousand Dollars",
        );
        deed.date_recorded = deed.date_signed.pred_opt().unwrap();
        let err = validate(&enrich(deed, "0.0075")).unwrap_err();
        assert!(matches!(err, ValidationError::DateOrder { .. }));
    }

    #[test]
    fn test_same_day_signing_and_recording_is_valid() {
        let mut deed = test_deed(
            "1250000.00",
            "One Million Two Hundred Fifty Thousand Dollars",
        );
        deed.date_recorded = deed.date_signed;
        assert!(validate(&enrich(deed, "0.0075")).is_ok());
    }

    #[test]
    fn test_rejects_amount_disagreement() {
        // Words say 1.2M, digits say 1.25M
        let deed = test_deed("1250000.00", "One Million Two Hundred Thousand Dollars");
        let err = validate(&enrich(deed, "0.0075")).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::AmountMismatch(MismatchReason::Disagreement { .. })
        ));
    }

    #[test]
    fn test_rejects_unparsable_words_as_mismatch() {
        let deed = test_deed("1250000.00", "one point two five million");
        let err = validate(&enrich(deed, "0.0075")).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::AmountMismatch(MismatchReason::Unparsable(
                MoneyParseError::UnknownToken(_)
            ))
        ));
    }

    #[test]
    fn test_rejects_empty_words_as_mismatch() {
        let deed = test_deed("1250000.00", "");
        let err = validate(&enrich(deed, "0.0075")).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::AmountMismatch(MismatchReason::Unparsable(
                MoneyParseError::EmptyPhrase
            ))
        ));
    }

    #[test]
    fn test_numeric_amount_quantized_before_comparison() {
        // 100.004 rounds to 100.00 and agrees with "one hundred"
        let deed = test_deed("100.004", "one hundred dollars");
        assert!(validate(&enrich(deed, "0.0075")).is_ok());

        // 100.005 rounds away from zero to 100.01 and no longer agrees
        let deed = test_deed("100.005", "one hundred dollars");
        assert!(validate(&enrich(deed, "0.0075")).is_err());
    }

    #[test]
    fn test_closing_tax_quantized_to_cents() {
        // 0.0075 * 333 = 2.4975 → 2.50
        let deed = test_deed("333", "three hundred thirty three");
        let result = validate(&enrich(deed, "0.0075")).unwrap();
        assert_eq!(result.closing_tax, dec("2.50"));
    }

    #[test]
    fn test_zero_rate_yields_zero_tax() {
        let deed = test_deed("500000", "five hundred thousand dollars");
        let result = validate(&enrich(deed, "0")).unwrap();
        assert_eq!(result.closing_tax, dec("0.00"));
    }
}
