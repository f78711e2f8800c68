//! The documentation run: discover, extract, index, mirror, render.

use crate::config::DocgenConfig;
use crate::error::{DocgenError, Result};
use crate::render;
use crate::runtime::{ExternalGraphBridge, ScriptStatus};
use crate::walker;
use docgraph::{DocGraph, EdgeType, NodeType, PropertyMap};
use docgraph_parser_api::{CommentExtractor, DocExtractor, DocItem};
use docgraph_python::PythonExtractor;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Outcome of one [`Pipeline::run`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Source files that matched the extension allow-list
    pub files_found: usize,
    /// Doc nodes created across all files
    pub doc_nodes: usize,
    /// Markdown files written, in file-node order
    pub written: Vec<PathBuf>,
    /// Post-indexing script outcome
    pub script: ScriptStatus,
}

impl RunSummary {
    fn empty() -> Self {
        Self {
            files_found: 0,
            doc_nodes: 0,
            written: Vec::new(),
            script: ScriptStatus::Skipped,
        }
    }
}

/// Single-threaded documentation generator
pub struct Pipeline {
    config: DocgenConfig,
    python: PythonExtractor,
    comments: CommentExtractor,
    bridge: ExternalGraphBridge,
}

impl Pipeline {
    /// Create a pipeline without a graph runtime.
    ///
    /// # Errors
    ///
    /// Returns [`DocgenError::InvalidConfig`] if the configuration is invalid.
    pub fn new(config: DocgenConfig) -> Result<Self> {
        config.validate().map_err(DocgenError::InvalidConfig)?;
        Ok(Self {
            config,
            python: PythonExtractor::new(),
            comments: CommentExtractor::new(),
            bridge: ExternalGraphBridge::inactive(),
        })
    }

    /// Use `bridge` to mirror nodes and run the script.
    pub fn with_bridge(mut self, bridge: ExternalGraphBridge) -> Self {
        self.bridge = bridge;
        self
    }

    pub fn bridge(&self) -> &ExternalGraphBridge {
        &self.bridge
    }

    /// Run the whole pipeline.
    ///
    /// # Errors
    ///
    /// Fails only if a directory cannot be created or a markdown file cannot
    /// be written. Unreadable sources, unparsable sources and runtime
    /// failures are logged and do not stop the run.
    #[instrument(skip(self), fields(src = %self.config.source_dir.display()))]
    pub fn run(&mut self) -> Result<RunSummary> {
        self.prepare_dirs()?;

        let sources = walker::discover_sources(&self.config);
        if sources.is_empty() {
            info!("No source files found in {}.", self.config.source_dir.display());
            return Ok(RunSummary::empty());
        }

        let graph = self.build_graph(&sources);

        let script = self
            .bridge
            .run_script(&self.config.script_path, &self.config.walker_name);
        self.bridge.report_degraded();

        let written = self.write_docs(&graph)?;
        info!("Done. Check the {} folder.", self.config.output_dir.display());

        Ok(RunSummary {
            files_found: sources.len(),
            doc_nodes: graph.find_nodes(NodeType::Doc).len(),
            written,
            script,
        })
    }

    /// Index `sources` into a fresh graph, mirroring every node created.
    pub fn build_graph(&mut self, sources: &[PathBuf]) -> DocGraph {
        let mut graph = DocGraph::new();

        for path in sources {
            let content = match walker::read_source(path) {
                Ok(content) => content,
                Err(e) => {
                    warn!("{e}");
                    continue;
                }
            };
            let items = self.extract_items(path, &content);
            let path_str = path.display().to_string();
            debug!(file = %path_str, items = items.len(), "Extracted doc items");

            let file_id = graph.add_node(
                NodeType::File,
                PropertyMap::new()
                    .with("path", path_str)
                    .with("content", content),
            );
            self.mirror(&graph, file_id);

            let lang = language_tag(path);
            for item in items {
                let body = if item.body.is_empty() {
                    render::NO_DESCRIPTION.to_string()
                } else {
                    item.body
                };
                let doc_id = graph.add_node(
                    NodeType::Doc,
                    PropertyMap::new()
                        .with("title", item.title)
                        .with("body", body)
                        .with("lang", lang.clone()),
                );
                graph.add_edge(EdgeType::ForFile, doc_id, file_id);
                self.mirror(&graph, doc_id);
            }
        }

        graph
    }

    /// Extract doc items from one file, substituting a `Summary` placeholder
    /// when nothing is found.
    pub fn extract_items(&self, path: &Path, content: &str) -> Vec<DocItem> {
        let extractor: &dyn DocExtractor = if self.config.is_structured(path) {
            &self.python
        } else {
            &self.comments
        };

        let mut items = extractor.extract(content);
        if items.is_empty() {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            items.push(DocItem::new(
                "Summary",
                format!("No docstrings or comment blocks found in {name}"),
            ));
        }
        items
    }

    /// Write one markdown file per file node, overwriting existing files.
    ///
    /// # Errors
    ///
    /// Returns [`DocgenError::Write`] on the first file that cannot be written.
    pub fn write_docs(&self, graph: &DocGraph) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();

        for file in graph.find_nodes(NodeType::File) {
            let page = render::render_file(graph, file)?;
            let out = self
                .config
                .output_dir
                .join(render::output_file_name(file.require_property("path")?));

            fs::write(&out, page).map_err(|e| DocgenError::write(&out, e))?;
            info!("Wrote {}", out.display());
            written.push(out);
        }

        Ok(written)
    }

    fn prepare_dirs(&self) -> Result<()> {
        for dir in [&self.config.source_dir, &self.config.output_dir] {
            fs::create_dir_all(dir).map_err(|e| DocgenError::create_dir(dir, e))?;
        }
        Ok(())
    }

    fn mirror(&mut self, graph: &DocGraph, id: docgraph::NodeId) {
        if let Ok(node) = graph.get_node(id) {
            self.bridge.mirror_node(node);
        }
    }
}

/// Extension without the leading dot, as written (`py`, `JS`, ...).
fn language_tag(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default()
}
