//! Individual value generators for each column type.
//!
//! [`generate_value`] is the single dispatch point from a [`ColumnType`] to
//! the generator that produces its values.

pub mod numeric;
pub mod timestamp;
pub mod uuid;
pub mod word;

use bench_core::{ColumnType, Value};
use rand::Rng;

/// Upper bound (exclusive) of generated `number` values.
pub const NUMBER_MAX: f64 = 10_000.0;

/// Generate one value of the given column type.
pub fn generate_value<R: Rng + ?Sized>(column_type: ColumnType, rng: &mut R) -> Value {
    match column_type {
        ColumnType::Identifier => uuid::generate_uuid_v4(rng),
        ColumnType::Text => word::generate_word(rng),
        ColumnType::Number => numeric::generate_float_range(rng, 0.0, NUMBER_MAX),
        ColumnType::DateTime => timestamp::generate_timestamp_until_now(rng),
        ColumnType::Logical => Value::Logical(rng.random_bool(0.5)),
    }
}
