// 📄 Extraction Boundary - Structured deed payloads → DeedRecord
// The upstream OCR/LLM service lives outside this crate; it is instructed to
// emit strict JSON (ISO dates, amount_numeric as a decimal string). This
// module decodes and schema-checks that payload; it never repairs it.

use crate::models::DeedRecord;
use rust_decimal::Decimal;
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

/// One schema violation on a decoded record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractorError {
    /// The payload is not strict JSON at all
    #[error("extraction output is not valid JSON: {0}")]
    MalformedOutput(String),

    /// The payload decoded but violates the record schema
    #[error("extracted record failed schema validation ({} violation(s))", .0.len())]
    Schema(Vec<FieldViolation>),
}

// ============================================================================
// EXTRACTOR INTERFACE
// ============================================================================

/// Boundary contract for anything that turns source text into a `DeedRecord`.
/// Implementations must yield a schema-valid record or an error; callers
/// never pass a failed extraction into the validation engine.
pub trait DeedExtractor {
    fn extract(&self, source_text: &str) -> Result<DeedRecord, ExtractorError>;
}

// ============================================================================
// JSON EXTRACTOR
// ============================================================================

/// Decodes the strict-JSON payload format emitted by the upstream extraction
/// service. Unknown fields are rejected, string fields are whitespace-trimmed,
/// and every schema violation is collected before the record is refused.
pub struct JsonDeedExtractor;

impl JsonDeedExtractor {
    pub fn new() -> Self {
        JsonDeedExtractor
    }
}

impl Default for JsonDeedExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DeedExtractor for JsonDeedExtractor {
    fn extract(&self, source_text: &str) -> Result<DeedRecord, ExtractorError> {
        // 1. Strict JSON or nothing
        let value: serde_json::Value = serde_json::from_str(source_text)
            .map_err(|e| ExtractorError::MalformedOutput(e.to_string()))?;

        // 2. Decode into the record shape (unknown fields rejected by serde)
        let mut record: DeedRecord = serde_json::from_value(value).map_err(|e| {
            ExtractorError::Schema(vec![FieldViolation {
                field: "record".to_string(),
                message: e.to_string(),
            }])
        })?;

        trim_fields(&mut record);

        // 3. Field-level checks, all collected before rejecting
        let violations = check_schema(&record);
        if violations.is_empty() {
            Ok(record)
        } else {
            Err(ExtractorError::Schema(violations))
        }
    }
}

fn trim_fields(record: &mut DeedRecord) {
    for field in [
        &mut record.doc_id,
        &mut record.county_raw,
        &mut record.state,
        &mut record.grantor,
        &mut record.grantee,
        &mut record.amount_words,
        &mut record.apn,
        &mut record.status,
    ] {
        *field = field.trim().to_string();
    }
}

fn check_schema(record: &DeedRecord) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    let required = [
        ("doc_id", &record.doc_id),
        ("county_raw", &record.county_raw),
        ("state", &record.state),
        ("grantor", &record.grantor),
        ("grantee", &record.grantee),
        ("apn", &record.apn),
        ("status", &record.status),
    ];

    for (name, value) in required {
        if value.is_empty() {
            violations.push(FieldViolation {
                field: name.to_string(),
                message: "Required field is empty".to_string(),
            });
        }
    }

    // A deed with no consideration is not a deed we can tax
    if record.amount_numeric <= Decimal::ZERO {
        violations.push(FieldViolation {
            field: "amount_numeric".to_string(),
            message: format!("Must be > 0, got {}", record.amount_numeric),
        });
    }

    violations
}

// ============================================================================
// TESTS
// ============================================================================
