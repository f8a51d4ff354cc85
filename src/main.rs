use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use deed_validation::{
    load_counties, resolve_county, validate, DeedExtractor, EnrichedDeed, JsonDeedExtractor,
};

fn main() -> Result<ExitCode> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: deed-validate <deed.json> [counties.json]");
        eprintln!("  <deed.json>     structured deed payload from the extraction service");
        eprintln!("  [counties.json] county reference dataset (default: counties.json)");
        return Ok(ExitCode::from(2));
    }

    let deed_path = Path::new(&args[1]);
    let counties_path = args
        .get(2)
        .map(String::as_str)
        .unwrap_or("counties.json");

    // 1. Decode + schema-check the extracted payload
    println!("📄 Reading deed payload...");
    let payload = fs::read_to_string(deed_path)
        .with_context(|| format!("Failed to read deed payload: {}", deed_path.display()))?;
    let deed = match JsonDeedExtractor::new().extract(&payload) {
        Ok(deed) => deed,
        Err(e) => {
            eprintln!("[REJECTED] {e}");
            return Ok(ExitCode::FAILURE);
        }
    };
    println!("✓ Extracted deed {}", deed.doc_id);

    // 2. Resolve the county against the reference dataset
    println!("🗺️  Resolving county '{}'...", deed.county_raw);
    let counties = load_counties(Path::new(counties_path))?;
    let county_tax_info = match resolve_county(&deed.county_raw, &counties) {
        Ok(info) => info.clone(),
        Err(e) => {
            eprintln!("[REJECTED] {e}");
            return Ok(ExitCode::FAILURE);
        }
    };
    println!(
        "✓ Matched {} (tax rate {})",
        county_tax_info.name, county_tax_info.tax_rate
    );

    // 3. Validate and derive the closing tax
    println!("⚖️  Validating...");
    let enriched = EnrichedDeed::new(deed, county_tax_info);
    match validate(&enriched) {
        Ok(result) => {
            println!("[ACCEPTED]");
            println!(
                "{} | {} | {} -> {}",
                enriched.deed.doc_id,
                enriched.county_tax_info.name,
                enriched.deed.grantor,
                enriched.deed.grantee
            );
            println!("closing_tax=${}", result.closing_tax);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("[REJECTED] {e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
