//! Price multiplier model and rounding helpers.
//!
//! The multiplier is a product of independent adjustment factors
//! (bedroom count, property type, age) applied in a fixed order into a
//! single accumulator, so floating-point rounding is reproducible
//! across calls.

use homesight_models::{PropertySpec, PropertyType};

/// Total depreciation is floored at 30% of the base price.
const AGE_DEPRECIATION_FLOOR: f64 = 0.7;

/// Depreciation per year of property age.
const AGE_DEPRECIATION_PER_YEAR: f64 = 0.015;

/// Computes the cumulative price multiplier for a property.
///
/// Factors commute mathematically; the fixed application order exists
/// only to pin down floating-point rounding.
#[must_use]
pub fn multiplier(spec: &PropertySpec) -> f64 {
    let mut multiplier = 1.0;
    multiplier *= bhk_factor(spec.bhk);
    multiplier *= type_factor(spec.property_type);
    multiplier *= age_factor(spec.age_years);
    multiplier
}

/// Bedroom-count premium: +15% at 3 BHK, a further +10% at 4 BHK.
const fn bhk_factor(bhk: u32) -> f64 {
    if bhk >= 4 {
        1.25
    } else if bhk >= 3 {
        1.15
    } else {
        1.0
    }
}

/// Property-type premium over the apartment baseline.
const fn type_factor(property_type: PropertyType) -> f64 {
    match property_type {
        PropertyType::Apartment => 1.0,
        PropertyType::IndependentHouse => 1.15,
        PropertyType::Villa => 1.25,
        PropertyType::Penthouse => 1.35,
    }
}

/// Age depreciation factor, 1.5% per year floored at 30% total.
fn age_factor(age_years: u32) -> f64 {
    (1.0 - f64::from(age_years) * AGE_DEPRECIATION_PER_YEAR).max(AGE_DEPRECIATION_FLOOR)
}

/// Rounds to one decimal place, half away from zero.
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Rounds to two decimal places, half away from zero.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
