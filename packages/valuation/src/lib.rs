#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Property valuation engine.
//!
//! Transforms a [`PropertySpec`] into a complete [`PropertyEstimate`]:
//! a deterministic price model over the locality reference table,
//! randomized infrastructure scores, future-value projections from the
//! locality growth rate, and map tile imagery references.
//!
//! The engine is pure and synchronous. It holds no mutable state
//! beyond the read-only locality table, so concurrent `estimate` calls
//! are fully independent and an abandoned call can simply be dropped.
//!
//! # Usage
//!
//! ```rust
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use homesight_locality::LocalityTable;
//! use homesight_valuation::{PropertySpec, PropertyType, Valuator};
//!
//! let valuator = Valuator::new(LocalityTable::load()?);
//! let estimate = valuator.estimate(&PropertySpec {
//!     locality: "Indiranagar".to_string(),
//!     area_sqft: 1000.0,
//!     bhk: 2,
//!     bath: 2,
//!     age_years: 0,
//!     property_type: PropertyType::Apartment,
//! })?;
//! assert_eq!(estimate.price_per_sqft, 15_000);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod price;
pub mod scores;
pub mod tiles;

use chrono::Utc;
use homesight_locality::LocalityTable;
pub use homesight_models::{
    FutureValuation, InfraScores, PropertyEstimate, PropertyImages, PropertySpec, PropertyType,
    TileCoord,
};
use rand::Rng;
use uuid::Uuid;

/// Base price per sqft applied when the locality is unknown.
pub const FALLBACK_BASE_PRICE_PER_SQFT: f64 = 10_000.0;

/// Annual growth rate (percent) applied when the locality is unknown.
pub const FALLBACK_GROWTH_RATE: f64 = 8.0;

/// Errors from a single estimation call.
#[derive(Debug, thiserror::Error)]
pub enum EstimateError {
    /// A precondition on the input specification was violated. Fatal
    /// to the call; the caller must correct the input before retrying.
    #[error("invalid property specification: {field} {reason}")]
    InvalidSpecification {
        /// The offending input field, in wire form.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },
}

/// The valuation engine.
///
/// Owns the immutable locality reference table; everything else is
/// computed per call.
#[derive(Debug, Clone)]
pub struct Valuator {
    table: LocalityTable,
}

impl Valuator {
    /// Creates an engine over a loaded locality table.
    #[must_use]
    pub const fn new(table: LocalityTable) -> Self {
        Self { table }
    }

    /// The locality table backing this engine.
    #[must_use]
    pub const fn localities(&self) -> &LocalityTable {
        &self.table
    }

    /// Estimates a property's value, drawing score randomness from the
    /// thread-local RNG.
    ///
    /// Price fields are deterministic for a given spec; infra scores
    /// are randomized per call by design.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::InvalidSpecification`] when a
    /// precondition is violated; no partial result is produced.
    pub fn estimate(&self, spec: &PropertySpec) -> Result<PropertyEstimate, EstimateError> {
        self.estimate_with_rng(spec, &mut rand::thread_rng())
    }

    /// Estimates with an injected RNG, so tests can pin the random
    /// sequence and verify clamping/rounding exactly.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::InvalidSpecification`] when a
    /// precondition is violated; no partial result is produced.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn estimate_with_rng<R: Rng>(
        &self,
        spec: &PropertySpec,
        rng: &mut R,
    ) -> Result<PropertyEstimate, EstimateError> {
        validate(spec)?;

        let record = self.table.resolve(&spec.locality);
        if record.is_none() {
            log::warn!(
                "Unknown locality '{}'; applying fallback base price and growth rate",
                spec.locality
            );
        }
        let (base_price, growth_rate, latitude, longitude) = record.map_or(
            (
                FALLBACK_BASE_PRICE_PER_SQFT,
                FALLBACK_GROWTH_RATE,
                tiles::DEFAULT_LATITUDE,
                tiles::DEFAULT_LONGITUDE,
            ),
            |r| {
                (
                    r.base_price_per_sqft,
                    r.annual_growth_rate,
                    r.latitude,
                    r.longitude,
                )
            },
        );

        let price_per_sqft = (base_price * price::multiplier(spec)).round() as u32;

        // Future projections compound the unrounded total; only the
        // exposed figures are rounded to 2 decimals.
        let total_lakhs = f64::from(price_per_sqft) * spec.area_sqft / 100_000.0;
        let growth_factor = 1.0 + growth_rate / 100.0;
        let future_prices = FutureValuation {
            after_1_year_lakhs: price::round2(total_lakhs * growth_factor),
            after_5_years_lakhs: price::round2(total_lakhs * growth_factor.powi(5)),
            growth_rate,
        };

        let estimate = PropertyEstimate {
            id: format!("prop_{}", Uuid::new_v4()),
            spec: spec.clone(),
            predicted_price_lakhs: price::round2(total_lakhs),
            price_per_sqft,
            infra_scores: scores::generate(base_price, rng),
            future_prices,
            images: tiles::property_images(latitude, longitude),
            timestamp: Utc::now(),
        };

        log::debug!(
            "Estimated {} sqft {} in {}: {} lakhs at {}/sqft",
            spec.area_sqft,
            spec.property_type,
            spec.locality,
            estimate.predicted_price_lakhs,
            estimate.price_per_sqft
        );

        Ok(estimate)
    }
}

fn validate(spec: &PropertySpec) -> Result<(), EstimateError> {
    let invalid = |field: &'static str, reason: String| {
        Err(EstimateError::InvalidSpecification { field, reason })
    };

    if !spec.area_sqft.is_finite() || spec.area_sqft <= 0.0 {
        return invalid("areaSqft", format!("must be positive, got {}", spec.area_sqft));
    }
    if spec.bhk < 1 {
        return invalid("bhk", "must be at least 1".to_string());
    }
    if spec.bath < 1 {
        return invalid("bath", "must be at least 1".to_string());
    }

    Ok(())
}
