//! Optional external graph runtime.
//!
//! A runtime can mirror the nodes created during a run and execute a script
//! afterwards. Every capability is optional: the default method bodies
//! report [`RuntimeError::Unsupported`], which the bridge treats as "not
//! available" and skips silently. Running without any runtime is the normal
//! case.

use docgraph::Node;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors reported by a graph runtime
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// The runtime does not provide this capability
    #[error("runtime does not support {0}")]
    Unsupported(&'static str),

    /// The runtime could not be constructed
    #[error("{0}")]
    Init(String),

    /// A supported call failed
    #[error("{0}")]
    Failed(String),
}

impl RuntimeError {
    pub fn failed(message: impl Into<String>) -> Self {
        RuntimeError::Failed(message.into())
    }
}

/// Entry points an external graph runtime may provide
pub trait GraphRuntime {
    /// Create a runtime node mirroring `node` (its type and properties).
    fn create_node(&mut self, _node: &Node) -> Result<(), RuntimeError> {
        Err(RuntimeError::Unsupported("create_node"))
    }

    /// Load script source into the runtime.
    fn load_script(&mut self, _source: &str) -> Result<(), RuntimeError> {
        Err(RuntimeError::Unsupported("load_script"))
    }

    /// Run a named walker against the runtime's graph.
    fn run_walker(&mut self, _name: &str) -> Result<(), RuntimeError> {
        Err(RuntimeError::Unsupported("run_walker"))
    }
}

/// What happened to the post-indexing script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStatus {
    /// No runtime, or no script file on disk
    Skipped,
    /// Script loaded and walker invoked (where supported)
    Ran,
    /// Reading, loading or running failed
    Failed,
}

/// Best-effort connection between the doc graph and a [`GraphRuntime`]
///
/// Never fails the run: mirroring errors are counted and reported once by
/// [`report_degraded`](Self::report_degraded), script errors are logged.
#[derive(Default)]
pub struct ExternalGraphBridge {
    runtime: Option<Box<dyn GraphRuntime>>,
    mirrored: usize,
    failed: usize,
    last_error: Option<RuntimeError>,
}

impl ExternalGraphBridge {
    /// A bridge with no runtime; every call is a no-op.
    pub fn inactive() -> Self {
        Self::default()
    }

    /// A bridge around an already constructed runtime.
    pub fn with_runtime(runtime: Box<dyn GraphRuntime>) -> Self {
        Self {
            runtime: Some(runtime),
            ..Self::default()
        }
    }

    /// Attempt to construct a runtime; failure leaves the bridge inactive.
    pub fn connect<F>(init: F) -> Self
    where
        F: FnOnce() -> Result<Box<dyn GraphRuntime>, RuntimeError>,
    {
        match init() {
            Ok(runtime) => {
                info!("Graph runtime detected and initialized.");
                Self::with_runtime(runtime)
            }
            Err(e) => {
                info!("Graph runtime initialization failed: {e}");
                Self::inactive()
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.runtime.is_some()
    }

    /// Number of nodes the runtime accepted.
    pub fn mirrored(&self) -> usize {
        self.mirrored
    }

    /// Number of nodes the runtime rejected.
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Forward one node to the runtime, if any.
    pub fn mirror_node(&mut self, node: &Node) {
        let Some(runtime) = self.runtime.as_mut() else {
            return;
        };
        match runtime.create_node(node) {
            Ok(()) => self.mirrored += 1,
            Err(RuntimeError::Unsupported(_)) => {}
            Err(e) => {
                debug!(node = node.id, error = %e, "Node mirroring failed");
                self.failed += 1;
                self.last_error = Some(e);
            }
        }
    }

    /// Load `script_path` into the runtime and run `walker`.
    ///
    /// Skipped when there is no runtime or the script does not exist.
    pub fn run_script(&mut self, script_path: &Path, walker: &str) -> ScriptStatus {
        let Some(runtime) = self.runtime.as_mut() else {
            return ScriptStatus::Skipped;
        };
        if !script_path.exists() {
            debug!(script = %script_path.display(), "No script to run");
            return ScriptStatus::Skipped;
        }

        match execute_script(&mut **runtime, script_path, walker) {
            Ok(()) => {
                info!("Ran walker '{walker}'.");
                ScriptStatus::Ran
            }
            Err(e) => {
                warn!("Walker run failed: {e}");
                ScriptStatus::Failed
            }
        }
    }

    /// Log a single line if any node could not be mirrored.
    pub fn report_degraded(&self) {
        if let Some(e) = &self.last_error {
            warn!(
                failed = self.failed,
                mirrored = self.mirrored,
                "Graph runtime mirroring degraded: {e}"
            );
        }
    }
}

fn execute_script(
    runtime: &mut dyn GraphRuntime,
    script_path: &Path,
    walker: &str,
) -> Result<(), RuntimeError> {
    let source = fs::read_to_string(script_path)
        .map_err(|e| RuntimeError::failed(format!("reading {}: {e}", script_path.display())))?;

    skip_unsupported(runtime.load_script(&source))?;
    skip_unsupported(runtime.run_walker(walker))
}

fn skip_unsupported(result: Result<(), RuntimeError>) -> Result<(), RuntimeError> {
    match result {
        Err(RuntimeError::Unsupported(_)) => Ok(()),
        other => other,
    }
}
