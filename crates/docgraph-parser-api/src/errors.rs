use thiserror::Error;

/// Errors a structured extractor can report before falling back
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// Source did not produce a clean syntax tree
    #[error("Syntax error at line {line}, column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// The grammar could not be loaded into the parser
    #[error("Language error: {0}")]
    Language(String),
}

impl ExtractError {
    /// Create a Syntax error
    pub fn syntax(line: usize, column: usize, message: impl Into<String>) -> Self {
        ExtractError::Syntax {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a Language error
    pub fn language(message: impl Into<String>) -> Self {
        ExtractError::Language(message.into())
    }
}

/// Result type for extractor operations
pub type ExtractResult<T> = Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_message() {
        let err = ExtractError::syntax(3, 7, "unexpected indent");
        assert_eq!(
            err.to_string(),
            "Syntax error at line 3, column 7: unexpected indent"
        );
    }
}
