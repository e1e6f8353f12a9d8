//! Dataset generator producing rows for a synthesized schema.

use crate::generators::generate_value;
use bench_core::{Dataset, Row, Schema};
use rand::Rng;
use tracing::debug;

/// Generates rows cell by cell, in column order, from an injected RNG.
pub struct DatasetGenerator<R> {
    rng: R,
}

impl<R: Rng> DatasetGenerator<R> {
    /// Create a new dataset generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate the next row for the given schema.
    pub fn next_row(&mut self, schema: &Schema) -> Row {
        let values = schema
            .columns()
            .iter()
            .map(|column_type| generate_value(*column_type, &mut self.rng))
            .collect();
        Row::new(values)
    }

    /// Generate `count` rows lazily.
    pub fn rows<'a>(&'a mut self, schema: &'a Schema, count: usize) -> RowIterator<'a, R> {
        RowIterator {
            generator: self,
            schema,
            remaining: count,
        }
    }

    /// Generate a complete dataset of exactly `depth` rows.
    pub fn generate(&mut self, schema: Schema, depth: usize) -> Dataset {
        debug!("Generating {} rows with {} columns", depth, schema.width());
        let rows: Vec<Row> = self.rows(&schema, depth).collect();
        Dataset::new(schema, rows)
            .unwrap_or_else(|e| unreachable!("generated row does not match its schema: {e}"))
    }
}

/// Iterator that lazily generates rows.
pub struct RowIterator<'a, R> {
    generator: &'a mut DatasetGenerator<R>,
    schema: &'a Schema,
    remaining: usize,
}

impl<R: Rng> Iterator for RowIterator<'_, R> {
    type Item = Row;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_row(self.schema))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: Rng> ExactSizeIterator for RowIterator<'_, R> {}
