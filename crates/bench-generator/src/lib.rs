//! Schema and dataset synthesizer for the bulkload-bench harness.
//!
//! Randomness is always injected: every entry point takes an `Rng`, so the
//! benchmark can draw from an OS-seeded generator while tests pin a seed.
//!
//! # Architecture
//!
//! ```text
//!   width                      depth
//!     │                          │
//!     ▼                          ▼
//! ┌──────────────┐  Schema  ┌──────────────────┐
//! │  synthesize  │ ───────▶ │ DatasetGenerator │
//! └──────────────┘          │  - rng           │
//!                           └────────┬─────────┘
//!                                    │  per cell
//!                                    ▼
//!                          generators::generate_value
//!                                    │
//!                                    ▼
//!                           Dataset { schema, rows }
//! ```
//!
//! # Example
//!
//! ```rust
//! use bench_generator::{synthesize, DatasetGenerator};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let schema = synthesize(3, &mut rng);
//! let dataset = DatasetGenerator::new(rng).generate(schema, 10);
//! assert_eq!(dataset.depth(), 10);
//! assert_eq!(dataset.schema().len(), 4);
//! ```
//!
//! # Generators
//!
//! - `identifier` - Random UUID v4
//! - `text` - Pronounceable word of one to three syllables
//! - `number` - Float in `[0, 10000)`
//! - `datetime` - Timestamp between the Unix epoch and now
//! - `logical` - Fair coin flip

pub mod generator;
pub mod generators;
pub mod synthesizer;

// Re-exports for convenience
pub use generator::{DatasetGenerator, RowIterator};
pub use generators::generate_value;
pub use synthesizer::synthesize;
