//! Random schema synthesis.

use bench_core::{ColumnType, Schema};
use rand::Rng;

/// Synthesize a schema of one identifier column followed by `width` columns,
/// each drawn independently and uniformly from [`ColumnType::GENERATED`].
pub fn synthesize<R: Rng + ?Sized>(width: usize, rng: &mut R) -> Schema {
    let columns = (0..width).map(|_| {
        let idx = rng.random_range(0..ColumnType::GENERATED.len());
        ColumnType::GENERATED[idx]
    });
    Schema::with_columns(columns.collect::<Vec<_>>())
}
