// 🗺️ County Resolver - Free-form county strings → canonical tax entries
// Exact matching after normalization + abbreviation allow-list; never fuzzy

use crate::models::CountyTaxInfo;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

/// Intentionally aggressive failure on anything short of an exact match.
/// A wrong county means a wrong tax rate, so a clean rejection always
/// beats a guess.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountyLookupError {
    #[error("county field is empty")]
    EmptyField,

    #[error("no county found with exact match or allow-list of abbreviations: '{0}'")]
    NoMatch(String),
}

// ============================================================================
// NORMALIZATION
// ============================================================================

/// Explicit allow-list of well-known abbreviations instead of fuzzy matching,
/// for deterministic and auditable behavior. Keys and values are already in
/// normalized form; lookup is exact, no partial or prefix matching.
const ALLOWED_ABBREVIATIONS: &[(&str, &str)] = &[
    ("s clara", "santa clara"),
    ("s mateo", "san mateo"),
    ("s cruz", "santa cruz"),
];

/// Lowercase, strip punctuation and the literal word "county", collapse
/// whitespace. Applied to both the raw input and every reference name.
fn normalize(s: &str) -> String {
    let cleaned = s
        .to_lowercase()
        .replace('.', " ")
        .replace(',', " ")
        .replace('|', " ")
        .replace('/', " ")
        .replace('\\', " ")
        .replace("county", " ");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn expand_abbreviation(normalized: &str) -> &str {
    ALLOWED_ABBREVIATIONS
        .iter()
        .find(|(abbr, _)| *abbr == normalized)
        .map(|(_, full)| *full)
        .unwrap_or(normalized)
}

// ============================================================================
// RESOLUTION
// ============================================================================

/// Resolve a raw county string against the reference list.
///
/// Linear scan in list order; the first entry whose normalized name equals
/// the normalized (abbreviation-expanded) input wins. With duplicate
/// normalized names in the reference list, first-in-order precedence holds.
pub fn resolve_county<'a>(
    county_raw: &str,
    counties: &'a [CountyTaxInfo],
) -> Result<&'a CountyTaxInfo, CountyLookupError> {
    if county_raw.trim().is_empty() {
        return Err(CountyLookupError::EmptyField);
    }

    let normalized = normalize(county_raw);
    let wanted = expand_abbreviation(&normalized);

    counties
        .iter()
        .find(|c| normalize(&c.name) == wanted)
        .ok_or_else(|| CountyLookupError::NoMatch(county_raw.to_string()))
}

// ============================================================================
// REFERENCE DATA LOADING
// ============================================================================

/// Load the county reference dataset from a JSON file.
///
/// The file is an array of `{"name": ..., "tax_rate": ...}` objects;
/// `tax_rate` may be a decimal-as-string or a number. Entries missing
/// either field are rejected at load time.
pub fn load_counties(path: &Path) -> Result<Vec<CountyTaxInfo>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read county reference file: {}", path.display()))?;

    let counties: Vec<CountyTaxInfo> = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid county reference data in {}", path.display()))?;

    Ok(counties)
}

// ============================================================================
// TESTS
// ============================================================================
