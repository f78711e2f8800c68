//! Markdown rendering of file nodes.

use docgraph::{DocGraph, EdgeType, Node, Result};
use std::path::Path;

/// Body shown when a doc node has no `body` property.
pub const NO_DESCRIPTION: &str = "(no description)";

/// Render the markdown page of one `file` node.
///
/// ```text
/// # <file name>
///
/// _path_: `<path>`
///
/// ## <title>
///
/// <body>
/// ```
///
/// One `##` section follows per linked doc node, in edge creation order.
///
/// # Errors
///
/// Fails if the node has no `path` or links to a doc node that is not in
/// the graph.
pub fn render_file(graph: &DocGraph, file: &Node) -> Result<String> {
    let path = file.require_property("path")?;

    let mut lines = vec![
        format!("# {}\n", file_name(path)),
        format!("_path_: `{path}`\n"),
    ];

    let docs = graph.linked_sources(file.id, EdgeType::ForFile);
    if docs.is_empty() {
        lines.push("No extracted docs found.\n".to_string());
    }
    for doc_id in docs {
        let doc = graph.get_node(doc_id)?;
        lines.push(format!("## {}\n", doc.get_property("title").unwrap_or("")));
        lines.push(format!(
            "{}\n",
            doc.get_property("body").unwrap_or(NO_DESCRIPTION)
        ));
    }

    Ok(lines.join("\n"))
}

/// Name of the markdown file written for `path`: `<file name>.md`.
pub fn output_file_name(path: &str) -> String {
    format!("{}.md", file_name(path))
}

fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use docgraph::{NodeType, PropertyMap};

    fn graph_with_file(path: &str) -> (DocGraph, u64) {
        let mut graph = DocGraph::new();
        let file = graph.add_node(
            NodeType::File,
            PropertyMap::new().with("path", path).with("content", ""),
        );
        (graph, file)
    }

    fn link_doc(graph: &mut DocGraph, file: u64, title: &str, body: &str) {
        let doc = graph.add_node(
            NodeType::Doc,
            PropertyMap::new()
                .with("title", title)
                .with("body", body)
                .with("lang", "py"),
        );
        graph.add_edge(EdgeType::ForFile, doc, file);
    }

    #[test]
    fn test_render_with_docs() {
        let (mut graph, file) = graph_with_file("src/pkg/app.py");
        link_doc(&mut graph, file, "module", "App entry.");
        link_doc(&mut graph, file, "def main()", "(no description)");

        let page = render_file(&graph, graph.get_node(file).unwrap()).unwrap();
        assert_eq!(
            page,
            "# app.py\n\n_path_: `src/pkg/app.py`\n\n## module\n\nApp entry.\n\n## def main()\n\n(no description)\n"
        );
    }

    #[test]
    fn test_render_without_docs() {
        let (graph, file) = graph_with_file("src/empty.c");

        let page = render_file(&graph, graph.get_node(file).unwrap()).unwrap();
        assert_eq!(page, "# empty.c\n\n_path_: `src/empty.c`\n\nNo extracted docs found.\n");
    }

    #[test]
    fn test_render_requires_path() {
        let mut graph = DocGraph::new();
        let file = graph.add_node(NodeType::File, PropertyMap::new());

        assert!(render_file(&graph, graph.get_node(file).unwrap()).is_err());
    }

    #[test]
    fn test_output_file_name_keeps_extension() {
        assert_eq!(output_file_name("src/a/b/Main.java"), "Main.java.md");
        assert_eq!(output_file_name("util.h"), "util.h.md");
    }
}
