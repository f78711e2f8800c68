use std::path::{Path, PathBuf};

/// Configuration for a documentation run
///
/// The defaults are the fixed locations the `docgen` binary uses.
#[derive(Debug, Clone)]
pub struct DocgenConfig {
    /// Root of the source tree to scan
    pub source_dir: PathBuf,

    /// Directory receiving one `<file name>.md` per source file
    pub output_dir: PathBuf,

    /// Script handed to the graph runtime after indexing, if it exists
    pub script_path: PathBuf,

    /// Walker invoked on the graph runtime after the script is loaded
    pub walker_name: String,

    /// File extensions to scan (matched case-insensitively against the file name)
    pub extensions: Vec<String>,

    /// Extension handled by the structured Python extractor (matched exactly)
    pub structured_extension: String,
}

impl Default for DocgenConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("src"),
            output_dir: PathBuf::from("docs"),
            script_path: PathBuf::from("Assignment2.jac"),
            walker_name: "docger".to_string(),
            extensions: [".py", ".js", ".java", ".ts", ".cpp", ".c", ".h"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            structured_extension: "py".to_string(),
        }
    }
}

impl DocgenConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.extensions.is_empty() {
            return Err("extensions cannot be empty".to_string());
        }

        if self.extensions.iter().any(|ext| ext.trim_start_matches('.').is_empty()) {
            return Err("extensions cannot contain an empty entry".to_string());
        }

        if self.walker_name.is_empty() {
            return Err("walker_name cannot be empty".to_string());
        }

        Ok(())
    }

    /// Check if a file name ends with one of the configured extensions
    pub fn matches_file_name(&self, file_name: &str) -> bool {
        let lower = file_name.to_lowercase();
        self.extensions.iter().any(|ext| {
            let ext = ext.trim_start_matches('.').to_lowercase();
            lower.ends_with(&format!(".{ext}"))
        })
    }

    /// Check if a path goes through the structured extractor
    pub fn is_structured(&self, path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext.to_string_lossy() == self.structured_extension)
    }
}
