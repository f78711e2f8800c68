//! docgraph Parser API
//!
//! Shared trait and types for docgraph extractors.
//!
//! - **DocItem**: one extracted `(title, body)` pair
//! - **DocExtractor trait**: the interface every language extractor implements
//! - **CommentExtractor**: block-comment and line-comment scanning, used for
//!   every language without a structured extractor and as the fallback when
//!   structured parsing fails
//!
//! # Example
//!
//! ```rust
//! use docgraph_parser_api::{CommentExtractor, DocExtractor};
//!
//! let items = CommentExtractor::new().extract("/* A */\n// one\n// two\n");
//! assert_eq!(items.len(), 2);
//! assert_eq!(items[0].body, "A");
//! assert_eq!(items[1].body, "one\ntwo");
//! ```

pub mod comments;
pub mod errors;
pub mod item;
pub mod traits;

pub use comments::CommentExtractor;
pub use errors::{ExtractError, ExtractResult};
pub use item::DocItem;
pub use traits::DocExtractor;
