//! Core graph types and operations.
//!
//! - [`Node`]: a scanned file or an extracted doc item
//! - [`Edge`]: a directed `for_file` link from a doc to its file
//! - [`DocGraph`]: the append-only arena that owns both

mod docgraph;
mod property;
mod types;

pub use docgraph::DocGraph;
pub use property::PropertyMap;
pub use types::{Edge, EdgeId, EdgeType, Node, NodeId, NodeType};
