//! Serialized text blocks embedded in the generated module.

use serde::Serialize;

/// The four text fragments spliced verbatim into the generated module.
///
/// Each field holds a JavaScript expression (an object literal or a call
/// wrapping one). Field names serialize to the export names used by the
/// module template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedBlocks {
    pub styles: String,
    pub at_rules: String,
    pub masks: String,
    pub topics: String,
}

impl SerializedBlocks {
    /// Create blocks from their text.
    pub fn new(
        styles: impl Into<String>,
        at_rules: impl Into<String>,
        masks: impl Into<String>,
        topics: impl Into<String>,
    ) -> Self {
        Self {
            styles: styles.into(),
            at_rules: at_rules.into(),
            masks: masks.into(),
            topics: topics.into(),
        }
    }

    /// Four empty object literals.
    pub fn empty() -> Self {
        Self::new("{}", "{}", "{}", "{}")
    }

    /// Total length of all blocks in bytes.
    pub fn byte_len(&self) -> usize {
        self.styles.len() + self.at_rules.len() + self.masks.len() + self.topics.len()
    }
}

impl Default for SerializedBlocks {
    fn default() -> Self {
        Self::empty()
    }
}
