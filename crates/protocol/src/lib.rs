//! # Depscope Protocol
//!
//! The extraction record model: the wire schema produced by the external
//! source analyzer and consumed by the graph store.
//!
//! Two wire variants exist in practice — an older one that ships file text
//! per record (`fileContent`), and a newer one that ships a batch-level
//! `filesContent` path→content list. Both deserialize here and normalize
//! into the single [`ExtractionBatch`] model.

mod error;
mod extraction;

pub use error::{ExtractionError, Result};
pub use extraction::{ExtractionBatch, ExtractionRecord};
