//! # Depscope Graph
//!
//! The dependency context graph engine: graph store, depth-range parsing,
//! bounded bidirectional traversal, and context-report assembly.
//!
//! ## Pipeline
//!
//! ```text
//! ExtractionBatch
//!     │
//!     ├──> DependencyGraph (full rebuild per batch)
//!     │      ├─ Nodes: functions, unresolved placeholders, externals
//!     │      └─ Edges: DEPENDS_ON (merge semantics)
//!     │
//!     ├──> DepthSpec ("PARENTS:CHILDREN" hop windows)
//!     │
//!     ├──> traverse (BFS both directions, id-keyed dedup)
//!     │      └─ ContextResult
//!     │
//!     └──> render (sorted, verbosity-flagged report text)
//! ```
//!
//! Loads and queries typically run in separate process invocations; the
//! graph snapshot file ([`DependencyGraph::save`] / [`DependencyGraph::open`])
//! is the handoff between them.

mod depth;
mod error;
mod report;
mod store;
mod traverse;
mod types;

pub use depth::{DepthSpec, HopRange};
pub use error::{GraphError, Result};
pub use report::{render, RenderOptions};
pub use store::DependencyGraph;
pub use traverse::{traverse, ContextResult};
pub use types::{DepNode, GROUP_EXTERNAL, GROUP_UNKNOWN};
