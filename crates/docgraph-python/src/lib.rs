//! # docgraph-python
//!
//! Python docstring extractor for docgraph.
//!
//! Produces, in declaration order:
//!
//! - `module`: the module docstring, when present
//! - `def name()` / `async def name()`: one item per top-level function
//! - `class Name`: one item per top-level class, with a `Methods:` summary
//!
//! Sources that do not parse cleanly fall back to comment-block scanning.
//!
//! ## Quick Start
//!
//! ```rust
//! use docgraph_python::{DocExtractor, PythonExtractor};
//!
//! let items = PythonExtractor::new().extract("def f():\n    \"\"\"Does X.\"\"\"\n");
//! assert_eq!(items.len(), 1);
//! assert_eq!(items[0].title, "def f()");
//! assert_eq!(items[0].body, "Does X.");
//! ```

mod docstring;
mod extractor;
mod visitor;

pub use docgraph_parser_api::{DocExtractor, DocItem, ExtractError};
pub use extractor::PythonExtractor;
