use crate::{comments::CommentExtractor, errors::ExtractResult, item::DocItem};

/// Core trait that all doc extractors implement
///
/// An extractor turns the full text of one source file into an ordered list
/// of [`DocItem`]s. Extractors never touch the file system or the graph;
/// the caller decides where the text comes from and where the items go.
///
/// # Example
/// ```rust
/// use docgraph_parser_api::{DocExtractor, DocItem, ExtractResult};
///
/// struct Headings;
///
/// impl DocExtractor for Headings {
///     fn language(&self) -> &str {
///         "markdown"
///     }
///
///     fn file_extensions(&self) -> &[&str] {
///         &[".md"]
///     }
///
///     fn try_extract(&self, source: &str) -> ExtractResult<Vec<DocItem>> {
///         Ok(source
///             .lines()
///             .filter_map(|l| l.strip_prefix("# "))
///             .map(|h| DocItem::new(h, ""))
///             .collect())
///     }
/// }
///
/// assert_eq!(Headings.extract("# Intro\ntext").len(), 1);
/// ```
pub trait DocExtractor {
    /// Returns the language identifier (lowercase, e.g., "python")
    fn language(&self) -> &str;

    /// Returns supported file extensions (e.g., [".py"])
    fn file_extensions(&self) -> &[&str];

    /// Extract items, reporting why the source could not be handled
    ///
    /// # Errors
    /// Returns `ExtractError` when the source cannot be parsed by this
    /// extractor.
    fn try_extract(&self, source: &str) -> ExtractResult<Vec<DocItem>>;

    /// Extract items, falling back to comment scanning on failure
    ///
    /// The fallback is the normal path for sources a structured extractor
    /// cannot parse, so it is not an error.
    fn extract(&self, source: &str) -> Vec<DocItem> {
        match self.try_extract(source) {
            Ok(items) => items,
            Err(_) => CommentExtractor::new().scan(source),
        }
    }
}
