// End-to-end pipeline tests over the shipped fixture payloads:
// extract → resolve county → enrich → validate

use std::path::{Path, PathBuf};

use deed_validation::{
    load_counties, resolve_county, validate, CountyLookupError, CountyTaxInfo, DeedExtractor,
    DeedRecord, EnrichedDeed, JsonDeedExtractor, MismatchReason, ValidationError,
};
use rust_decimal::Decimal;
use std::str::FromStr;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

fn counties() -> Vec<CountyTaxInfo> {
    load_counties(&Path::new(env!("CARGO_MANIFEST_DIR")).join("counties.json"))
        .expect("reference dataset should load")
}

fn extract(name: &str) -> DeedRecord {
    let payload = std::fs::read_to_string(fixture(name)).expect("fixture should exist");
    JsonDeedExtractor::new()
        .extract(&payload)
        .expect("fixture payload should pass extraction")
}

#[test]
fn accepts_consistent_deed_and_reports_closing_tax() {
    let counties = counties();
    let deed = extract("deed_should_accept.json");

    // "S. Clara" goes through the abbreviation allow-list
    let info = resolve_county(&deed.county_raw, &counties).unwrap();
    assert_eq!(info.name, "Santa Clara");

    let enriched = EnrichedDeed::new(deed, info.clone());
    let result = validate(&enriched).unwrap();
    assert_eq!(result.closing_tax, Decimal::from_str("9375.00").unwrap());
}

#[test]
fn rejects_deed_when_words_disagree_with_digits() {
    let counties = counties();
    let deed = extract("deed_bad_money.json");
    let info = resolve_county(&deed.county_raw, &counties).unwrap();

    let err = validate(&EnrichedDeed::new(deed, info.clone())).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::AmountMismatch(MismatchReason::Disagreement { .. })
    ));
}

#[test]
fn rejects_deed_recorded_before_signing() {
    let counties = counties();
    let deed = extract("deed_bad_dates.json");
    let info = resolve_county(&deed.county_raw, &counties).unwrap();

    let err = validate(&EnrichedDeed::new(deed, info.clone())).unwrap_err();
    assert!(matches!(err, ValidationError::DateOrder { .. }));
}

#[test]
fn rejects_deed_from_unknown_county_before_validation() {
    let counties = counties();
    let deed = extract("deed_unknown_county.json");

    let err = resolve_county(&deed.county_raw, &counties).unwrap_err();
    assert!(matches!(err, CountyLookupError::NoMatch(_)));
}
