// 📋 Deed Data Model - Extracted records + county reference entries
// Core fields are immutable once extracted; validation never mutates them

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// DEED RECORD
// ============================================================================

/// DeedRecord - the extracted, unvalidated deed
///
/// Produced once by the extraction boundary, immutable thereafter.
/// String fields are opaque here (non-empty by construction upstream);
/// `amount_words` is the exception and is validated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeedRecord {
    /// Document identifier as printed on the recording
    pub doc_id: String,

    /// County name exactly as it appeared in the source text
    pub county_raw: String,

    /// Two-letter state code
    pub state: String,

    /// Date the deed was signed
    pub date_signed: NaiveDate,

    /// Date the deed was recorded with the county
    pub date_recorded: NaiveDate,

    /// Transferring party
    pub grantor: String,

    /// Receiving party
    pub grantee: String,

    /// Digit amount, exact decimal, must be > 0
    pub amount_numeric: Decimal,

    /// Amount spelled out in English words; may be empty or malformed
    pub amount_words: String,

    /// Assessor's parcel number
    pub apn: String,

    /// Recording status (e.g. PRELIMINARY, FINAL)
    pub status: String,
}

// ============================================================================
// COUNTY TAX INFO
// ============================================================================

/// CountyTaxInfo - one canonical reference entry
///
/// Loaded in bulk at process start, read-only for the lifetime of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CountyTaxInfo {
    /// Canonical display name
    pub name: String,

    /// Closing tax rate, expected in [0, 1)
    pub tax_rate: Decimal,
}

// ============================================================================
// ENRICHED DEED
// ============================================================================

/// EnrichedDeed - a deed paired with its resolved county tax entry
///
/// Invariant: `county_tax_info` must be the unique result of resolving
/// `deed.county_raw` against the reference list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedDeed {
    pub deed: DeedRecord,
    pub county_tax_info: CountyTaxInfo,
}

impl EnrichedDeed {
    pub fn new(deed: DeedRecord, county_tax_info: CountyTaxInfo) -> Self {
        EnrichedDeed {
            deed,
            county_tax_info,
        }
    }

    /// Tax rate of the resolved county
    pub fn tax_rate(&self) -> Decimal {
        self.county_tax_info.tax_rate
    }
}
