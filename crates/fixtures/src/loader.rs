//! Loading supplemental fixtures from YAML files.
//!
//! Each file holds a YAML sequence of fixture records with the same field
//! names as [`crate::Fixture`]. Files are discovered recursively, so a team
//! can keep ad-hoc regression fixtures next to the built-in catalog without
//! touching this crate.

use std::path::Path;

use crate::fixture::{Fixture, FixtureError};

/// Parse a YAML document containing a sequence of fixtures.
pub fn from_yaml(yaml: &str) -> Result<Vec<Fixture>, FixtureError> {
    let fixtures: Vec<Fixture> = serde_yaml::from_str(yaml)?;
    for fixture in &fixtures {
        fixture.validate()?;
    }
    Ok(fixtures)
}

/// Parse fixtures from a single YAML file.
pub fn from_file(path: &Path) -> Result<Vec<Fixture>, FixtureError> {
    let content = std::fs::read_to_string(path)?;
    from_yaml(&content)
}

/// Load all fixtures from `.yaml`/`.yml` files under `dir`, checking tc_id
/// uniqueness across the whole loaded set.
pub fn load_dir(dir: &Path) -> Result<Vec<Fixture>, FixtureError> {
    let mut fixtures = Vec::new();
    let mut seen = std::collections::BTreeSet::new();

    for entry in walkdir::WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .map(|ext| ext == "yaml" || ext == "yml")
                .unwrap_or(false)
        })
    {
        for fixture in from_file(entry.path())? {
            if !seen.insert(fixture.tc_id.clone()) {
                return Err(FixtureError::DuplicateId(fixture.tc_id));
            }
            fixtures.push(fixture);
        }
    }

    Ok(fixtures)
}
