//! Serialization of extracted values into module blocks.

mod literal;

use crate::error::{CodegenError, Result};
use crate::templates::double_quoted;
use literal::{is_identifier, write_array, write_json, write_object};
use serde::{Deserialize, Serialize};
use stylegen_core::{ExtractedValues, SerializedBlocks, StyleValue};

/// Trait for block serializers.
///
/// Implement this trait to change how extracted values are rendered into the
/// `styles`, `atRules`, `masks` and `topics` blocks. The formatter splices
/// whatever text comes back into the module verbatim, and any error is
/// returned to the caller unchanged.
pub trait BlockSerializer {
    /// Render the four blocks for `values`.
    fn serialize(&self, values: &ExtractedValues) -> Result<SerializedBlocks>;
}

impl<F> BlockSerializer for F
where
    F: Fn(&ExtractedValues) -> Result<SerializedBlocks>,
{
    fn serialize(&self, values: &ExtractedValues) -> Result<SerializedBlocks> {
        self(values)
    }
}

/// Options for [`ObjectLiteralSerializer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SerializerConfig {
    /// Wrap the styles block in `StyleSheet.create(...)`.
    pub stylesheet_create: bool,
}

impl SerializerConfig {
    /// Create default serializer options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit the styles block as a plain object literal.
    pub fn without_stylesheet_create(mut self) -> Self {
        self.stylesheet_create = false;
        self
    }
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            stylesheet_create: true,
        }
    }
}

/// Serializer producing compact JavaScript object literals.
///
/// Keys that are valid identifiers are written bare, everything else is
/// double-quoted. Map order is preserved, so equal inputs give equal text.
#[derive(Debug, Clone, Default)]
pub struct ObjectLiteralSerializer {
    config: SerializerConfig,
}

impl ObjectLiteralSerializer {
    /// Create a serializer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a serializer with the given options.
    pub fn with_config(config: SerializerConfig) -> Self {
        Self { config }
    }

    /// Serializer options.
    pub fn config(&self) -> &SerializerConfig {
        &self.config
    }

    fn styles(&self, values: &ExtractedValues) -> Result<String> {
        let mut out = String::new();
        write_object(&mut out, &values.styles, |out, selector, record| {
            write_object(out, record, |out, property, value| {
                write_style_value(out, selector, property, value)
            })
        })?;

        if self.config.stylesheet_create {
            Ok(format!("StyleSheet.create({out})"))
        } else {
            Ok(out)
        }
    }

    fn at_rules(&self, values: &ExtractedValues) -> Result<String> {
        let mut out = String::new();
        write_object(&mut out, &values.at_rules, |out, _, groups| {
            write_array(out, groups, |out, group| {
                write_array(out, group, |out, at_rule| {
                    out.push('[');
                    out.push_str(&double_quoted(at_rule.rule()));
                    out.push(',');
                    out.push_str(&double_quoted(at_rule.params()));
                    out.push(']');
                    Ok(())
                })
            })
        })?;
        Ok(out)
    }

    fn masks(&self, values: &ExtractedValues) -> Result<String> {
        let mut out = String::new();
        write_object(&mut out, &values.masks, |out, _, mask| {
            out.push_str(&mask.to_string());
            Ok(())
        })?;
        Ok(out)
    }

    fn topics(&self, values: &ExtractedValues) -> Result<String> {
        let mut out = String::new();
        write_object(&mut out, &values.topics, |out, _, topics| {
            write_array(out, topics, |out, topic| {
                out.push_str(&double_quoted(topic));
                Ok(())
            })
        })?;
        Ok(out)
    }
}

impl BlockSerializer for ObjectLiteralSerializer {
    fn serialize(&self, values: &ExtractedValues) -> Result<SerializedBlocks> {
        Ok(SerializedBlocks {
            styles: self.styles(values)?,
            at_rules: self.at_rules(values)?,
            masks: self.masks(values)?,
            topics: self.topics(values)?,
        })
    }
}

fn write_style_value(
    out: &mut String,
    selector: &str,
    property: &str,
    value: &StyleValue,
) -> Result<()> {
    match value {
        StyleValue::Literal(literal) => write_json(out, literal),
        StyleValue::StyleSheet(reference) => {
            if !is_identifier(&reference.style_sheet) {
                return Err(CodegenError::invalid_value(
                    selector,
                    property,
                    format!("'{}' is not a StyleSheet member", reference.style_sheet),
                ));
            }
            out.push_str("StyleSheet.");
            out.push_str(&reference.style_sheet);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use serde_json::json;
    use stylegen_core::{AtRule, StyleRecord};

    fn record(entries: &[(&str, StyleValue)]) -> StyleRecord {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect::<IndexMap<_, _>>()
    }

    #[test]
    fn test_empty_values() {
        let blocks = ObjectLiteralSerializer::new()
            .serialize(&ExtractedValues::new())
            .unwrap();
        assert_eq!(blocks.styles, "StyleSheet.create({})");
        assert_eq!(blocks.at_rules, "{}");
        assert_eq!(blocks.masks, "{}");
        assert_eq!(blocks.topics, "{}");
    }

    #[test]
    fn test_plain_styles_block() {
        let serializer =
            ObjectLiteralSerializer::with_config(SerializerConfig::new().without_stylesheet_create());
        let blocks = serializer.serialize(&ExtractedValues::new()).unwrap();
        assert_eq!(blocks, SerializedBlocks::empty());
    }

    #[test]
    fn test_styles_block() {
        let mut values = ExtractedValues::new();
        values.add_style(
            "text-red-500",
            record(&[("color", "#ef4444".into()), ("fontSize", 14i64.into())]),
        );
        values.add_style(
            "border-hairline",
            record(&[("borderWidth", StyleValue::style_sheet("hairlineWidth"))]),
        );

        let blocks = ObjectLiteralSerializer::new().serialize(&values).unwrap();
        assert_eq!(
            blocks.styles,
            r##"StyleSheet.create({"text-red-500":{color:"#ef4444",fontSize:14},"border-hairline":{borderWidth:StyleSheet.hairlineWidth}})"##
        );
    }

    #[test]
    fn test_at_rules_masks_and_topics() {
        let mut values = ExtractedValues::new();
        values.add_at_rules(
            "sm:p-4",
            vec![
                AtRule::new("media", "(min-width: 640px)"),
                AtRule::new("pseudo-class", "hover"),
            ],
        );
        values.set_mask("hover:text-white", 3);
        values.add_topic("dark:bg-black", "colorScheme");
        values.add_topic("dark:bg-black", "width");

        let blocks = ObjectLiteralSerializer::new().serialize(&values).unwrap();
        assert_eq!(
            blocks.at_rules,
            r#"{"sm:p-4":[[["media","(min-width: 640px)"],["pseudo-class","hover"]]]}"#
        );
        assert_eq!(blocks.masks, r#"{"hover:text-white":3}"#);
        assert_eq!(blocks.topics, r#"{"dark:bg-black":["colorScheme","width"]}"#);
    }

    #[test]
    fn test_nested_literal_values() {
        let mut values = ExtractedValues::new();
        values.add_style(
            "shadow",
            record(&[("shadowOffset", json!({ "height": 1, "width": 0 }).into())]),
        );

        let blocks = ObjectLiteralSerializer::new().serialize(&values).unwrap();
        assert_eq!(
            blocks.styles,
            "StyleSheet.create({shadow:{shadowOffset:{height:1,width:0}}})"
        );
    }

    #[test]
    fn test_invalid_style_sheet_member() {
        let mut values = ExtractedValues::new();
        values.add_style(
            "broken",
            record(&[("borderWidth", StyleValue::style_sheet("hairline-width"))]),
        );

        let err = ObjectLiteralSerializer::new().serialize(&values).unwrap_err();
        match err {
            CodegenError::InvalidValue {
                selector, property, ..
            } => {
                assert_eq!(selector, "broken");
                assert_eq!(property, "borderWidth");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_closure_serializer() {
        let serializer =
            |_: &ExtractedValues| -> Result<SerializedBlocks> { Ok(SerializedBlocks::new("a", "b", "c", "d")) };
        let blocks = serializer.serialize(&ExtractedValues::new()).unwrap();
        assert_eq!(blocks.topics, "d");
    }
}
