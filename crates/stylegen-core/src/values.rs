//! Style values extracted from utility-class markup.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Declarations for a single class selector, in declaration order.
pub type StyleRecord = IndexMap<String, StyleValue>;

/// Style data extracted from markup.
///
/// Every map keeps insertion order so that the generated module is stable
/// across runs for the same input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractedValues {
    /// Class selector to style declarations.
    pub styles: IndexMap<String, StyleRecord>,
    /// Class selector to groups of at-rule conditions.
    pub at_rules: IndexMap<String, Vec<Vec<AtRule>>>,
    /// Class selector to a bitmask of runtime conditions.
    pub masks: IndexMap<String, u64>,
    /// Class selector to the runtime topics it subscribes to.
    pub topics: IndexMap<String, Vec<String>>,
}

impl ExtractedValues {
    /// Create an empty set of values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse values from the extractor's JSON output.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Add the declarations for a selector, replacing any previous ones.
    pub fn add_style(&mut self, selector: impl Into<String>, record: StyleRecord) {
        self.styles.insert(selector.into(), record);
    }

    /// Append a group of at-rule conditions for a selector.
    pub fn add_at_rules(&mut self, selector: impl Into<String>, group: Vec<AtRule>) {
        self.at_rules.entry(selector.into()).or_default().push(group);
    }

    /// Set the condition mask for a selector.
    pub fn set_mask(&mut self, selector: impl Into<String>, mask: u64) {
        self.masks.insert(selector.into(), mask);
    }

    /// Subscribe a selector to a runtime topic. Duplicate topics are ignored.
    pub fn add_topic(&mut self, selector: impl Into<String>, topic: impl Into<String>) {
        let topic = topic.into();
        let topics = self.topics.entry(selector.into()).or_default();
        if !topics.contains(&topic) {
            topics.push(topic);
        }
    }

    /// Whether nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
            && self.at_rules.is_empty()
            && self.masks.is_empty()
            && self.topics.is_empty()
    }
}

/// A single at-rule condition, e.g. `("media", "(min-width: 640px)")` or
/// `("pseudo-class", "hover")`.
///
/// Serialized as a two element array, matching the extractor's tuples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtRule(pub String, pub String);

impl AtRule {
    /// Create a new at-rule condition.
    pub fn new(rule: impl Into<String>, params: impl Into<String>) -> Self {
        Self(rule.into(), params.into())
    }

    /// Rule name (`media`, `pseudo-class`, ...).
    pub fn rule(&self) -> &str {
        &self.0
    }

    /// Rule parameters.
    pub fn params(&self) -> &str {
        &self.1
    }
}

/// Value of a style property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// A member of the runtime's `StyleSheet`, e.g. `StyleSheet.hairlineWidth`.
    StyleSheet(StyleSheetRef),
    /// A plain literal.
    Literal(serde_json::Value),
}

impl StyleValue {
    /// Reference a `StyleSheet` constant.
    pub fn style_sheet(name: impl Into<String>) -> Self {
        Self::StyleSheet(StyleSheetRef {
            style_sheet: name.into(),
        })
    }
}

impl From<serde_json::Value> for StyleValue {
    fn from(value: serde_json::Value) -> Self {
        Self::Literal(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Literal(value.into())
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Literal(value.into())
    }
}

impl From<i64> for StyleValue {
    fn from(value: i64) -> Self {
        Self::Literal(value.into())
    }
}

/// JSON form of a `StyleSheet` constant: `{"styleSheet": "hairlineWidth"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StyleSheetRef {
    /// Name of the `StyleSheet` member.
    pub style_sheet: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json() {
        let values = ExtractedValues::from_json(
            r##"{
                "styles": { "text-red-500": { "color": "#ef4444" } },
                "atRules": { "sm:p-4": [[["media", "(min-width: 640px)"]]] },
                "masks": { "hover:text-red-500": 1 },
                "topics": { "dark:bg-black": ["colorScheme"] }
            }"##,
        )
        .unwrap();

        assert_eq!(
            values.styles["text-red-500"]["color"],
            StyleValue::Literal(json!("#ef4444"))
        );
        assert_eq!(
            values.at_rules["sm:p-4"][0][0],
            AtRule::new("media", "(min-width: 640px)")
        );
        assert_eq!(values.masks["hover:text-red-500"], 1);
        assert_eq!(values.topics["dark:bg-black"], vec!["colorScheme"]);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let values = ExtractedValues::from_json("{}").unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_style_sheet_reference() {
        let values = ExtractedValues::from_json(
            r#"{ "styles": { "border-hairline": {
                "borderWidth": { "styleSheet": "hairlineWidth" },
                "shadowOffset": { "width": 0, "height": 1 }
            } } }"#,
        )
        .unwrap();

        let record = &values.styles["border-hairline"];
        assert_eq!(record["borderWidth"], StyleValue::style_sheet("hairlineWidth"));
        // Plain objects stay literals.
        assert_eq!(
            record["shadowOffset"],
            StyleValue::Literal(json!({ "width": 0, "height": 1 }))
        );
    }

    #[test]
    fn test_builders_keep_insertion_order() {
        let mut values = ExtractedValues::new();
        values.add_style("b", StyleRecord::new());
        values.add_style("a", StyleRecord::new());
        values.add_topic("a", "width");
        values.add_topic("a", "width");
        values.add_topic("a", "colorScheme");
        values.add_at_rules("a", vec![AtRule::new("pseudo-class", "hover")]);

        let selectors: Vec<_> = values.styles.keys().map(String::as_str).collect();
        assert_eq!(selectors, ["b", "a"]);
        assert_eq!(values.topics["a"], vec!["width", "colorScheme"]);
        assert_eq!(values.at_rules["a"][0][0].rule(), "pseudo-class");
        assert!(!values.is_empty());
    }
}
