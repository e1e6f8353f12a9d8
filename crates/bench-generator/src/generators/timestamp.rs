//! Timestamp value generators.

use bench_core::Value;
use chrono::{DateTime, Utc};
use rand::Rng;

/// Generate a random second-precision timestamp between the Unix epoch and
/// the current time.
pub fn generate_timestamp_until_now<R: Rng + ?Sized>(rng: &mut R) -> Value {
    generate_timestamp_range(rng, DateTime::<Utc>::UNIX_EPOCH, Utc::now())
}

/// Generate a random second-precision timestamp in `[start, end]`.
pub fn generate_timestamp_range<R: Rng + ?Sized>(
    rng: &mut R,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Value {
    let start_ts = start.timestamp();
    let end_ts = end.timestamp();

    if start_ts >= end_ts {
        return Value::DateTime(start);
    }

    let random_ts = rng.random_range(start_ts..=end_ts);
    let dt = DateTime::from_timestamp(random_ts, 0).unwrap_or(start);
    Value::DateTime(dt)
}
