//! Numeric value generators.

use bench_core::Value;
use rand::Rng;

/// Generate a random float in the half-open range `[min, max)`.
pub fn generate_float_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> Value {
    Value::Number(rng.random_range(min..max))
}
