//! Input/output helpers.
//!
//! - CSV ingest of lifted sets (`ingest`)
//! - CSV export of batch results (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
