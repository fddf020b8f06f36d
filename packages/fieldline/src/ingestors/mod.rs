//! Ingestor implementations.

mod csv;
mod mock;

// `self::` keeps the module from colliding with the csv crate in the path.
pub use self::csv::CsvIngestor;
pub use self::mock::{MockIngestor, MockIngestorBuilder};
