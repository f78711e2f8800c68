//! # docgraph-gen
//!
//! Walks a source tree, extracts documentation from every supported file and
//! writes one markdown page per file.
//!
//! ## Pipeline
//!
//! ```text
//! discover sources (walkdir, extension allow-list)
//!     ↓
//! extract items (Python: syntax tree, others: comment scanning)
//!     ↓
//! index into DocGraph (file ◀─for_file── doc)
//!     ↓
//! mirror to graph runtime + run script (optional, best effort)
//!     ↓
//! render <output>/<file name>.md
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use docgraph_gen::{DocgenConfig, Pipeline};
//!
//! # fn main() -> Result<(), docgraph_gen::DocgenError> {
//! let mut pipeline = Pipeline::new(DocgenConfig::default())?;
//! let summary = pipeline.run()?;
//! println!("wrote {} pages", summary.written.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod runtime;
pub mod walker;

pub use config::DocgenConfig;
pub use error::{DocgenError, Result};
pub use pipeline::{Pipeline, RunSummary};
pub use runtime::{ExternalGraphBridge, GraphRuntime, RuntimeError, ScriptStatus};
