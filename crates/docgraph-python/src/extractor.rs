//! Docstring extraction for Python source code

use crate::visitor::DocVisitor;
use docgraph_parser_api::{CommentExtractor, DocExtractor, DocItem, ExtractError, ExtractResult};
use tracing::debug;
use tree_sitter::{Node, Parser};

/// Structured extractor for Python sources
///
/// Builds a tree-sitter syntax tree and reads docstrings from it. Sources
/// that do not parse cleanly are handed to [`CommentExtractor`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonExtractor;

impl PythonExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl DocExtractor for PythonExtractor {
    fn language(&self) -> &str {
        "python"
    }

    fn file_extensions(&self) -> &[&str] {
        &[".py"]
    }

    fn try_extract(&self, source: &str) -> ExtractResult<Vec<DocItem>> {
        extract(source)
    }

    fn extract(&self, source: &str) -> Vec<DocItem> {
        match extract(source) {
            Ok(items) => items,
            Err(e) => {
                debug!(error = %e, "Falling back to comment extraction");
                CommentExtractor::new().scan(source)
            }
        }
    }
}

/// Extract module, function and class docstrings (strict: any syntax error fails)
pub fn extract(source: &str) -> ExtractResult<Vec<DocItem>> {
    if let Some(offset) = source.find('\0') {
        let (line, column) = position_of(source, offset);
        return Err(ExtractError::syntax(line, column, "source code cannot contain null bytes"));
    }

    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::language())
        .map_err(|e| ExtractError::language(e.to_string()))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| ExtractError::syntax(0, 0, "Failed to parse"))?;

    let root_node = tree.root_node();
    if root_node.has_error() {
        let (line, column) = first_error(root_node)
            .map(|node| {
                let pos = node.start_position();
                (pos.row + 1, pos.column + 1)
            })
            .unwrap_or((0, 0));
        return Err(ExtractError::syntax(line, column, "Syntax error in source code"));
    }
    if let Some((node, message)) = first_rejected(root_node) {
        let pos = node.start_position();
        return Err(ExtractError::syntax(pos.row + 1, pos.column + 1, message));
    }

    let mut visitor = DocVisitor::new(source.as_bytes());
    visitor.visit_module(root_node);

    Ok(visitor.items)
}

/// First ERROR or MISSING node in document order
fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

/// First construct the grammar accepts but Python 3 does not.
///
/// The grammar keeps Python 2 `print`/`exec` statements and does not check
/// `del` targets.
fn first_rejected(node: Node) -> Option<(Node, &'static str)> {
    match node.kind() {
        "print_statement" => return Some((node, "Missing parentheses in call to 'print'")),
        "exec_statement" => return Some((node, "Missing parentheses in call to 'exec'")),
        "delete_statement" => {
            let mut cursor = node.walk();
            let invalid = node
                .named_children(&mut cursor)
                .filter(|target| target.kind() != "comment")
                .find(|target| !is_delete_target(*target));
            if let Some(target) = invalid {
                return Some((target, "cannot delete expression"));
            }
        }
        _ => {}
    }
    let mut cursor = node.walk();
    let children: Vec<Node> = node.named_children(&mut cursor).collect();
    children.into_iter().find_map(first_rejected)
}

fn is_delete_target(node: Node) -> bool {
    match node.kind() {
        "identifier" | "attribute" | "subscript" => true,
        "expression_list" | "tuple" | "list" | "parenthesized_expression" => {
            let mut cursor = node.walk();
            let children: Vec<Node> = node.named_children(&mut cursor).collect();
            children
                .into_iter()
                .filter(|child| child.kind() != "comment")
                .all(is_delete_target)
        }
        _ => false,
    }
}

/// 1-based line and column of a byte offset
fn position_of(source: &str, offset: usize) -> (usize, usize) {
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let column = before.len() - before.rfind('\n').map_or(0, |i| i + 1) + 1;
    (line, column)
}
