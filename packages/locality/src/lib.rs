#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Static locality reference table.
//!
//! Locality data (base price per square foot, annual growth rate,
//! center coordinates) is baked into the binary at compile time from
//! the TOML files under `packages/locality/localities/`. Adding a new
//! city is as simple as creating a new TOML file and adding it to the
//! list below. The table is immutable for the lifetime of the process.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Locality datasets embedded at compile time.
const LOCALITY_TOMLS: &[(&str, &str)] = &[(
    "bangalore",
    include_str!("../localities/bangalore.toml"),
)];

/// A single locality with its pricing baseline and coordinates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocalityRecord {
    /// Unique locality name (e.g. "Indiranagar").
    pub name: String,
    /// Baseline price in currency units per square foot.
    pub base_price_per_sqft: f64,
    /// Annual price growth rate, percent per year.
    pub annual_growth_rate: f64,
    /// Locality center latitude in decimal degrees.
    pub latitude: f64,
    /// Locality center longitude in decimal degrees.
    pub longitude: f64,
}

/// Top-level shape of a locality TOML file.
#[derive(Debug, Deserialize)]
struct LocalityFile {
    #[serde(rename = "locality")]
    localities: Vec<LocalityRecord>,
}

/// Errors from loading the locality reference table.
#[derive(Debug, thiserror::Error)]
pub enum LocalityError {
    /// A locality TOML file failed to parse.
    #[error("failed to parse locality dataset '{dataset}': {source}")]
    Parse {
        /// Dataset identifier (TOML file stem).
        dataset: &'static str,
        /// Underlying TOML error.
        #[source]
        source: Box<toml::de::Error>,
    },

    /// Two records share the same name.
    #[error("duplicate locality name '{name}'")]
    Duplicate {
        /// The duplicated name.
        name: String,
    },

    /// A record failed validation.
    #[error("invalid locality record '{name}': {reason}")]
    InvalidRecord {
        /// The offending record's name.
        name: String,
        /// What was wrong with it.
        reason: String,
    },
}

/// The loaded, immutable locality reference table.
///
/// Lookup is by exact name. A missing name is not an error at this
/// layer; callers apply their documented fallback defaults instead.
#[derive(Debug, Clone)]
pub struct LocalityTable {
    records: Vec<LocalityRecord>,
    by_name: BTreeMap<String, usize>,
}

impl LocalityTable {
    /// Loads and validates the embedded locality datasets.
    ///
    /// # Errors
    ///
    /// Returns an error if a dataset fails to parse, contains a
    /// duplicate name, or contains a record with a non-positive base
    /// price, non-positive growth rate, or out-of-range coordinates.
    pub fn load() -> Result<Self, LocalityError> {
        let mut records = Vec::new();

        for (dataset, contents) in LOCALITY_TOMLS {
            let file: LocalityFile =
                toml::from_str(contents).map_err(|source| LocalityError::Parse {
                    dataset,
                    source: Box::new(source),
                })?;
            records.extend(file.localities);
        }

        Self::from_records(records)
    }

    /// Builds a table from explicit records, validating each one.
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate names or invalid records.
    pub fn from_records(records: Vec<LocalityRecord>) -> Result<Self, LocalityError> {
        let mut by_name = BTreeMap::new();

        for (index, record) in records.iter().enumerate() {
            validate_record(record)?;
            if by_name.insert(record.name.clone(), index).is_some() {
                return Err(LocalityError::Duplicate {
                    name: record.name.clone(),
                });
            }
        }

        Ok(Self { records, by_name })
    }

    /// Looks up a locality by exact name.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&LocalityRecord> {
        self.by_name.get(name).map(|&index| &self.records[index])
    }

    /// Iterates over all records in dataset order.
    pub fn iter(&self) -> std::slice::Iter<'_, LocalityRecord> {
        self.records.iter()
    }

    /// Number of localities in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a LocalityTable {
    type Item = &'a LocalityRecord;
    type IntoIter = std::slice::Iter<'a, LocalityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate_record(record: &LocalityRecord) -> Result<(), LocalityError> {
    let fail = |reason: String| {
        Err(LocalityError::InvalidRecord {
            name: record.name.clone(),
            reason,
        })
    };

    if record.name.trim().is_empty() {
        return fail("name is empty".to_string());
    }
    if !record.base_price_per_sqft.is_finite() || record.base_price_per_sqft <= 0.0 {
        return fail(format!(
            "base price per sqft must be positive, got {}",
            record.base_price_per_sqft
        ));
    }
    if !record.annual_growth_rate.is_finite() || record.annual_growth_rate <= 0.0 {
        return fail(format!(
            "annual growth rate must be positive, got {}",
            record.annual_growth_rate
        ));
    }
    if !record.latitude.is_finite() || record.latitude.abs() > 90.0 {
        return fail(format!("latitude {} out of range", record.latitude));
    }
    if !record.longitude.is_finite() || record.longitude.abs() > 180.0 {
        return fail(format!("longitude {} out of range", record.longitude));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_embedded_datasets() {
        let table = LocalityTable::load().unwrap();
        assert_eq!(table.len(), 15);

        let indiranagar = table.resolve("Indiranagar").unwrap();
        assert!((indiranagar.base_price_per_sqft - 15_000.0).abs() < f64::EPSILON);
        assert!((indiranagar.annual_growth_rate - 8.5).abs() < f64::EPSILON);

        let malleshwaram = table.resolve("Malleshwaram").unwrap();
        assert!((malleshwaram.base_price_per_sqft - 17_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_locality_resolves_to_none() {
        let table = LocalityTable::load().unwrap();
        assert!(table.resolve("Nonexistent").is_none());
        // Lookup is exact, not case-insensitive.
        assert!(table.resolve("indiranagar").is_none());
    }

    #[test]
    fn coordinates_are_plausible_for_bangalore() {
        let table = LocalityTable::load().unwrap();
        for record in &table {
            assert!(
                (12.0..14.0).contains(&record.latitude),
                "{} latitude {}",
                record.name,
                record.latitude
            );
            assert!(
                (77.0..78.0).contains(&record.longitude),
                "{} longitude {}",
                record.name,
                record.longitude
            );
        }
    }

    #[test]
    fn rejects_duplicate_names() {
        let record = LocalityRecord {
            name: "Twice".to_string(),
            base_price_per_sqft: 9000.0,
            annual_growth_rate: 7.0,
            latitude: 12.9,
            longitude: 77.6,
        };
        let result = LocalityTable::from_records(vec![record.clone(), record]);
        assert!(matches!(result, Err(LocalityError::Duplicate { name }) if name == "Twice"));
    }

    #[test]
    fn rejects_non_positive_base_price() {
        let result = LocalityTable::from_records(vec![LocalityRecord {
            name: "Freebie".to_string(),
            base_price_per_sqft: 0.0,
            annual_growth_rate: 7.0,
            latitude: 12.9,
            longitude: 77.6,
        }]);
        assert!(matches!(result, Err(LocalityError::InvalidRecord { .. })));
    }
}
