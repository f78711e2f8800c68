//! # docgraph
//!
//! An in-memory graph that records which pieces of documentation were
//! extracted from which source files.
//!
//! ## Model
//!
//! ```text
//! doc node ──for_file──▶ file node
//! doc node ──for_file──▶ file node
//! ```
//!
//! - `file` nodes carry `path` and `content`
//! - `doc` nodes carry `title`, `body` and `lang`
//! - nodes are addressed by integer handles and are never mutated or removed
//!
//! ## Example
//!
//! ```rust
//! use docgraph::{DocGraph, EdgeType, NodeType, PropertyMap};
//!
//! let mut graph = DocGraph::new();
//! let file = graph.add_node(
//!     NodeType::File,
//!     PropertyMap::new().with("path", "src/app.py").with("content", ""),
//! );
//! let doc = graph.add_node(
//!     NodeType::Doc,
//!     PropertyMap::new().with("title", "module").with("body", "App entry point."),
//! );
//! graph.add_edge(EdgeType::ForFile, doc, file);
//!
//! assert_eq!(graph.linked_sources(file, EdgeType::ForFile), vec![doc]);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod graph;

pub use error::{GraphError, Result};
pub use graph::{DocGraph, Edge, EdgeId, EdgeType, Node, NodeId, NodeType, PropertyMap};
