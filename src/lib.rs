// Deed Validation System - Core Library
// Exposes the validation engine for use in the CLI and tests

pub mod county;
pub mod extractor;
pub mod models;
pub mod money;
pub mod validator;

// Re-export commonly used types
pub use county::{load_counties, resolve_county, CountyLookupError};
pub use extractor::{DeedExtractor, ExtractorError, FieldViolation, JsonDeedExtractor};
pub use models::{CountyTaxInfo, DeedRecord, EnrichedDeed};
pub use money::{parse_amount_words, MoneyParseError};
pub use validator::{monetize, validate, MismatchReason, ValidationError, ValidationResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
