use serde::{Deserialize, Serialize};

/// Title used for every item produced by comment scanning.
pub const COMMENT_BLOCK: &str = "comment_block";

/// One extracted piece of documentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocItem {
    /// Heading, e.g. `module`, `def main()`, `class Config`, `comment_block`
    pub title: String,
    /// Documentation text; may be empty
    pub body: String,
}

impl DocItem {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// A `comment_block` item.
    pub fn comment_block(body: impl Into<String>) -> Self {
        Self::new(COMMENT_BLOCK, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_block_title() {
        let item = DocItem::comment_block("text");
        assert_eq!(item.title, COMMENT_BLOCK);
        assert_eq!(item.body, "text");
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(DocItem::new("def f()", "Does X.")).unwrap();
        assert_eq!(json, serde_json::json!({"title": "def f()", "body": "Does X."}));
    }
}
