#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Shared property valuation data model.
//!
//! This crate defines the canonical request/response types exchanged
//! between the valuation engine and its callers (UI layers, comparison
//! views, saved-property stores). Everything serializes to camelCase
//! JSON so the wire shape matches what the front-end consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// The closed set of property types the engine prices.
///
/// The wire form keeps the historical display strings, including the
/// space in `"Independent House"`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum PropertyType {
    /// Multi-unit residential building. The baseline type; no premium.
    Apartment,
    /// Standalone luxury home. Carries the largest type premium after
    /// penthouses.
    Villa,
    /// Standalone non-villa home.
    #[serde(rename = "Independent House")]
    #[strum(serialize = "Independent House")]
    IndependentHouse,
    /// Top-floor luxury unit.
    Penthouse,
}

impl PropertyType {
    /// All property types, in display order.
    pub const ALL: [Self; 4] = [
        Self::Apartment,
        Self::Villa,
        Self::IndependentHouse,
        Self::Penthouse,
    ];
}

/// Caller-provided description of the property to value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySpec {
    /// Locality name; resolved against the locality reference table.
    /// Unknown names degrade to fallback defaults rather than failing.
    pub locality: String,
    /// Built-up area in square feet. Must be positive.
    pub area_sqft: f64,
    /// Bedroom count. Must be at least 1.
    pub bhk: u32,
    /// Bathroom count. Must be at least 1.
    pub bath: u32,
    /// Age of the property in years (0 for new construction).
    pub age_years: u32,
    /// Property type from the closed enumeration.
    pub property_type: PropertyType,
}

/// Synthetic infrastructure quality scores for a locality.
///
/// Every metric is clamped into its documented closed range and rounded
/// to one decimal (two for `similarity_score`) before being exposed:
/// `power`/`internet`/`road` 6-10, `water` 5-10, `greenery`/`parks`
/// 4-10, `pollution`/`noise` 3-10 (inverse metrics; lower is better),
/// `schools`/`hospitals` 5-10 (whole numbers), `metro_distance_km`
/// 0.5-8, `building_density` 0-100, `similarity_score` 0-1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfraScores {
    /// Power supply reliability.
    pub power: f64,
    /// Internet connectivity quality.
    pub internet: f64,
    /// Water supply reliability.
    pub water: f64,
    /// Green cover around the locality.
    pub greenery: f64,
    /// Road quality and connectivity.
    pub road: f64,
    /// Air pollution level (higher score means cleaner air).
    pub pollution: f64,
    /// Ambient noise level (higher score means quieter).
    pub noise: f64,
    /// Schools nearby, rescaled to 0-10 as a whole number.
    pub schools: f64,
    /// Hospitals nearby, rescaled to 0-10 as a whole number.
    pub hospitals: f64,
    /// Parks nearby, rescaled to 0-10 as a whole number.
    pub parks: f64,
    /// Distance to the nearest metro station in kilometers.
    pub metro_distance_km: f64,
    /// Built-up density of the surrounding area, 0-100.
    pub building_density: f64,
    /// Similarity of this property to recent comparable sales, 0-1.
    pub similarity_score: f64,
}

/// Projected prices from the locality's annual growth rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FutureValuation {
    /// Projected price after one year, in lakhs.
    pub after_1_year_lakhs: f64,
    /// Projected price after five years, in lakhs.
    pub after_5_years_lakhs: f64,
    /// Annual growth rate applied, percent per year.
    pub growth_rate: f64,
}

/// A Web Mercator map tile address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileCoord {
    /// Zoom level.
    pub zoom: u32,
    /// Tile column (x).
    pub x_tile: u32,
    /// Tile row (y).
    pub y_tile: u32,
}

/// Resolved imagery references for an estimate.
///
/// The canonical form is two fully-formed tile URLs; callers that need
/// the raw `(zoom, x, y)` triple can recompute it via the tile locator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyImages {
    /// Satellite imagery tile URL.
    pub satellite_url: String,
    /// Street map tile URL.
    pub street_url: String,
}

/// A complete property valuation result.
///
/// Created once per estimation call and immutable thereafter. Callers
/// hold these as opaque value objects; the id is fresh per call and
/// never reused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyEstimate {
    /// Opaque unique identifier (`prop_<uuid>`).
    pub id: String,
    /// Echo of the input specification.
    #[serde(flatten)]
    pub spec: PropertySpec,
    /// Predicted total price in lakhs, rounded to 2 decimals.
    pub predicted_price_lakhs: f64,
    /// Price per square foot, rounded to the nearest whole unit.
    pub price_per_sqft: u32,
    /// Infrastructure quality scores for the locality.
    pub infra_scores: InfraScores,
    /// Future price projections.
    pub future_prices: FutureValuation,
    /// Satellite and street imagery references.
    pub images: PropertyImages,
    /// Creation instant.
    pub timestamp: DateTime<Utc>,
}
