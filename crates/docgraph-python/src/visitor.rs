//! Syntax-tree visitor collecting docstrings from top-level definitions.
//!
//! Only the statements directly under the module are visited. Classes
//! additionally contribute the methods declared directly in their body.

use crate::docstring;
use docgraph_parser_api::DocItem;
use tree_sitter::Node;

const NO_DOC: &str = "(no doc)";

/// Collects [`DocItem`]s from a parsed Python module.
pub struct DocVisitor<'a> {
    source: &'a [u8],
    pub items: Vec<DocItem>,
}

impl<'a> DocVisitor<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            items: Vec::new(),
        }
    }

    fn node_text(&self, node: Node) -> &'a str {
        node.utf8_text(self.source).unwrap_or("")
    }

    /// Visit the `module` root node.
    pub fn visit_module(&mut self, module: Node) {
        if let Some(doc) = extract_docstring(self.source, module) {
            if !doc.is_empty() {
                self.items.push(DocItem::new("module", doc.trim()));
            }
        }

        let mut cursor = module.walk();
        for child in module.named_children(&mut cursor) {
            let Some(definition) = unwrap_definition(child) else {
                continue;
            };
            match definition.kind() {
                "function_definition" => self.visit_function(definition),
                "class_definition" => self.visit_class(definition),
                _ => {}
            }
        }
    }

    fn visit_function(&mut self, node: Node) {
        let name = self.definition_name(node);
        let title = if is_async(node) {
            format!("async def {name}()")
        } else {
            format!("def {name}()")
        };
        let doc = self.body_docstring(node);

        self.items.push(DocItem::new(title, doc.trim()));
    }

    fn visit_class(&mut self, node: Node) {
        let name = self.definition_name(node);
        let mut body = self.body_docstring(node).trim().to_string();

        let methods = self.class_methods(node);
        if !methods.is_empty() {
            body.push_str("\n\nMethods:\n");
            for (method, doc) in &methods {
                let doc = if doc.is_empty() { NO_DOC } else { doc.as_str() };
                body.push_str(&format!("- {method}(): {doc}\n"));
            }
        }

        let body = body.trim();
        let body = if body.is_empty() { NO_DOC } else { body };
        self.items.push(DocItem::new(format!("class {name}"), body));
    }

    /// `(name, docstring)` for every function declared directly in the class body.
    fn class_methods(&self, class: Node) -> Vec<(String, String)> {
        let Some(block) = class.child_by_field_name("body") else {
            return Vec::new();
        };

        let mut methods = Vec::new();
        let mut cursor = block.walk();
        for child in block.named_children(&mut cursor) {
            if let Some(method) = unwrap_definition(child) {
                if method.kind() == "function_definition" {
                    let doc = self.body_docstring(method).trim().to_string();
                    methods.push((self.definition_name(method).to_string(), doc));
                }
            }
        }
        methods
    }

    fn definition_name(&self, node: Node) -> &'a str {
        node.child_by_field_name("name")
            .map(|n| self.node_text(n))
            .unwrap_or("")
    }

    fn body_docstring(&self, node: Node) -> String {
        node.child_by_field_name("body")
            .and_then(|body| extract_docstring(self.source, body))
            .unwrap_or_default()
    }
}

/// Extract the cleaned docstring of a module or block node.
///
/// The docstring is the first statement (comments aside) when it is an
/// expression statement holding nothing but a string literal, a parenthesized
/// one, or an implicit concatenation of them.
pub fn extract_docstring(source: &[u8], node: Node) -> Option<String> {
    let mut cursor = node.walk();
    let first = node
        .named_children(&mut cursor)
        .find(|child| child.kind() != "comment")?;

    // A trailing comma adds an anonymous `,` child and makes a tuple.
    if first.kind() != "expression_statement" || first.child_count() != 1 {
        return None;
    }
    let mut expr = first.named_child(0)?;
    while expr.kind() == "parenthesized_expression" && expr.named_child_count() == 1 {
        expr = expr.named_child(0)?;
    }

    let raw = match expr.kind() {
        "string" => docstring::decode_literal(expr.utf8_text(source).ok()?)?,
        "concatenated_string" => {
            let mut joined = String::new();
            let mut parts = expr.walk();
            for part in expr.named_children(&mut parts) {
                if part.kind() == "string" {
                    joined.push_str(&docstring::decode_literal(part.utf8_text(source).ok()?)?);
                }
            }
            joined
        }
        _ => return None,
    };

    Some(docstring::clean(&raw))
}

/// Resolve `@decorator`-wrapped definitions to the definition itself.
fn unwrap_definition(node: Node) -> Option<Node> {
    match node.kind() {
        "function_definition" | "class_definition" => Some(node),
        "decorated_definition" => node.child_by_field_name("definition"),
        _ => None,
    }
}

fn is_async(node: Node) -> bool {
    node.child(0).is_some_and(|first| first.kind() == "async")
}
