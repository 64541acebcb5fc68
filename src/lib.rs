//! Seeded generator for `city;temperature` measurement files.
//!
//! Output depends only on the record count: the PRNG is ChaCha8, always
//! seeded with [`SEED`], so a given count produces the same bytes on every
//! machine.

pub mod cities;
pub mod config;
pub mod generate;
pub mod record;

pub use cities::CITIES;
pub use config::Config;
pub use generate::{Generator, Summary};
pub use record::Record;

/// Seed every generated file starts from.
pub const SEED: u64 = 10;

pub type SeededRng = rand_chacha::ChaCha8Rng;
