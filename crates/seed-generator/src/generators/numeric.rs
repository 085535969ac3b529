//! Numeric value generators.

use rand::Rng;

/// Lower bound of generated yearly revenue.
pub const REVENUE_MIN: f64 = 100_000.0;
/// Upper bound of generated yearly revenue.
pub const REVENUE_MAX: f64 = 50_000_000.0;

/// Smallest generated head count.
pub const EMPLOYEES_MIN: u32 = 1;
/// Largest generated head count.
pub const EMPLOYEES_MAX: u32 = 5_000;

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<R: Rng>(rng: &mut R, min: u32, max: u32) -> u32 {
    rng.random_range(min..=max)
}

/// Generate a random decimal in the given range.
///
/// The decimal is returned as a string with 2 decimal places.
pub fn generate_decimal_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> String {
    let value = rng.random_range(min..=max);
    format!("{value:.2}")
}

/// Generate a yearly revenue figure.
pub fn generate_revenue<R: Rng>(rng: &mut R) -> String {
    generate_decimal_range(rng, REVENUE_MIN, REVENUE_MAX)
}

/// Generate an employee count.
pub fn generate_employees<R: Rng>(rng: &mut R) -> u32 {
    generate_int_range(rng, EMPLOYEES_MIN, EMPLOYEES_MAX)
}
