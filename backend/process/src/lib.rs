//! # Division Processing
//!
//! Turns a raw administrative division export into the dataset file the server loads.
//!
//! ## Input
//! Same nested shape as the served dataset, but hand-maintained:
//! - Names may carry underscores, stray whitespace, tabs or line breaks
//! - The same region, province or municipality may appear twice once names are cleaned
//! - Some nodes are the wrong shape (a string where a map is expected, numbers in barangay lists)
//!
//! ## Output
//! - Names sanitized, case kept
//! - Empty names dropped
//! - Duplicate keys merged into the first occurrence, children appended in order
//! - Duplicate barangays within a municipality dropped, first occurrence kept
//! - Malformed nodes skipped with a warning and counted
//! - Source order preserved at every level
use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use atlas::{
    AdministrativeDivisionTree,
    tree::{Provinces, Regions},
    write_tree,
};
use indexmap::map::Entry;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use tracing::info;

pub mod models;
pub mod utils;

use models::{Totals, as_object, clean, merge_region};

pub fn process_divisions(input: &Path, output: &Path) -> Result<Totals> {
    let data = fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let raw: Value = serde_json::from_slice(&data)
        .with_context(|| format!("{} is not valid JSON", input.display()))?;

    let (tree, totals) = normalize(&raw)?;

    println!("Regions: {}", totals.regions);
    println!("Provinces: {}", totals.provinces);
    println!("Municipalities: {}", totals.municipalities);
    println!("Barangays: {}", totals.barangays);
    println!("Skipped: {}\n", totals.skipped);

    write_tree(output, &tree).with_context(|| format!("Failed to write {}", output.display()))?;
    info!("Wrote {}", output.display());

    Ok(totals)
}

pub fn normalize(raw: &Value) -> Result<(AdministrativeDivisionTree, Totals)> {
    let Value::Object(raw_regions) = raw else {
        bail!("Top level of the export must be an object of regions");
    };

    let pb = ProgressBar::new(raw_regions.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )?
        .progress_chars("=> "),
    );

    let mut regions = Regions::new();
    let mut totals = Totals::default();

    for (raw_name, raw_provinces) in raw_regions {
        pb.inc(1);

        let Some(name) = clean(raw_name, "top level", &mut totals) else {
            continue;
        };
        pb.set_message(name.clone());

        let Some(raw_provinces) = as_object(raw_provinces, &name, &mut totals) else {
            continue;
        };

        let provinces = match regions.entry(name.clone()) {
            Entry::Vacant(entry) => {
                totals.regions += 1;
                entry.insert(Provinces::new())
            }
            Entry::Occupied(entry) => entry.into_mut(),
        };

        merge_region(provinces, &name, raw_provinces, &mut totals);
    }

    pb.finish_with_message("Done");
    Ok((AdministrativeDivisionTree::new(regions), totals))
}
