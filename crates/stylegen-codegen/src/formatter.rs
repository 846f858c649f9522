//! Output formatter producing the generated style module.

use crate::error::{CodegenError, Result};
use crate::serializer::{BlockSerializer, ObjectLiteralSerializer};
use crate::templates::TemplateEngine;
use serde::{Deserialize, Serialize};
use stylegen_core::{ExtractedValues, SerializedBlocks};

const MODULE_TEMPLATE_NAME: &str = "module";

/// The generated module. Blocks are inserted verbatim; the platform line is
/// only present when a platform was supplied.
const MODULE_TEMPLATE: &str = r#"// This file was generated by {{tool}}. Do not edit!
const { StyleSheet } = require({{js_string framework}})
module.exports = {
{{#if platform}}  platform: {{js_quote platform}},
{{/if}}  styles: {{styles}},
  atRules: {{atRules}},
  masks: {{masks}},
  topics: {{topics}},
}
"#;

/// Options for [`OutputFormatter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatterConfig {
    /// Tool named in the generated header comment.
    pub tool_name: String,
    /// Module the generated file requires `StyleSheet` from.
    pub ui_framework: String,
}

impl FormatterConfig {
    /// Create default formatter options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tool named in the header comment.
    pub fn with_tool_name(mut self, tool_name: impl Into<String>) -> Self {
        self.tool_name = tool_name.into();
        self
    }

    /// Set the UI framework module.
    pub fn with_ui_framework(mut self, ui_framework: impl Into<String>) -> Self {
        self.ui_framework = ui_framework.into();
        self
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            tool_name: "tailwindcss-react-native".to_string(),
            ui_framework: "react-native".to_string(),
        }
    }
}

/// A generated module for one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    /// Target platform, if any.
    pub platform: Option<String>,
    /// Module source.
    pub content: String,
}

impl GeneratedModule {
    /// Conventional file name: `styles.js`, or `styles.<platform>.js` so that
    /// the bundler's platform-specific resolution picks it up.
    pub fn file_name(&self) -> String {
        match &self.platform {
            Some(platform) => format!("styles.{platform}.js"),
            None => "styles.js".to_string(),
        }
    }
}

#[derive(Serialize)]
struct ModuleData<'a> {
    tool: &'a str,
    framework: &'a str,
    platform: Option<&'a str>,
    #[serde(flatten)]
    blocks: &'a SerializedBlocks,
}

/// Formats extracted values into the module loaded by the runtime.
///
/// Formatting is a pure function of the values, the platform and the
/// configuration: no I/O is performed and the values are only borrowed.
pub struct OutputFormatter<S = ObjectLiteralSerializer> {
    config: FormatterConfig,
    serializer: S,
    engine: TemplateEngine<'static>,
}

impl OutputFormatter {
    /// Create a formatter with the default serializer and options.
    pub fn new() -> Result<Self> {
        Self::with_serializer(FormatterConfig::default(), ObjectLiteralSerializer::new())
    }

    /// Create a formatter with the default serializer.
    pub fn with_config(config: FormatterConfig) -> Result<Self> {
        Self::with_serializer(config, ObjectLiteralSerializer::new())
    }
}

impl<S: BlockSerializer> OutputFormatter<S> {
    /// Create a formatter using `serializer` to render the blocks.
    pub fn with_serializer(config: FormatterConfig, serializer: S) -> Result<Self> {
        if config.tool_name.contains(is_line_terminator) {
            return Err(CodegenError::invalid_value(
                "header",
                "toolName",
                "line breaks would end the header comment",
            ));
        }

        let mut engine = TemplateEngine::new();
        engine.register_template(MODULE_TEMPLATE_NAME, MODULE_TEMPLATE)?;

        Ok(Self {
            config,
            serializer,
            engine,
        })
    }

    /// Formatter options.
    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Serializer used to render the blocks.
    pub fn serializer(&self) -> &S {
        &self.serializer
    }

    /// Generate the module source for `values`.
    ///
    /// An empty `platform` is treated like `None`. Serializer errors are
    /// returned as-is.
    pub fn format(&self, values: &ExtractedValues, platform: Option<&str>) -> Result<String> {
        let blocks = self.serializer.serialize(values)?;
        self.format_blocks(&blocks, platform)
    }

    /// Parse the extractor's JSON output and generate the module source.
    pub fn format_json(&self, json: &str, platform: Option<&str>) -> Result<String> {
        let values = ExtractedValues::from_json(json)?;
        self.format(&values, platform)
    }

    /// Generate the module source from already serialized blocks.
    pub fn format_blocks(&self, blocks: &SerializedBlocks, platform: Option<&str>) -> Result<String> {
        let platform = platform.filter(|p| !p.is_empty());
        log::debug!(
            "formatting style module (platform: {}, {} bytes of blocks)",
            platform.unwrap_or("none"),
            blocks.byte_len()
        );

        let data = ModuleData {
            tool: &self.config.tool_name,
            framework: &self.config.ui_framework,
            platform,
            blocks,
        };
        self.engine.render(MODULE_TEMPLATE_NAME, &data)
    }

    /// Generate one module per platform.
    ///
    /// With no platforms a single platform-less module is produced. Values
    /// are serialized once and shared by every module. Repeated platforms
    /// are skipped, and platforms that cannot be part of a file name are
    /// rejected.
    pub fn format_all(&self, values: &ExtractedValues, platforms: &[&str]) -> Result<Vec<GeneratedModule>> {
        let blocks = self.serializer.serialize(values)?;

        if platforms.is_empty() {
            return Ok(vec![GeneratedModule {
                platform: None,
                content: self.format_blocks(&blocks, None)?,
            }]);
        }

        let mut seen: Vec<Option<&str>> = Vec::with_capacity(platforms.len());
        let mut modules = Vec::with_capacity(platforms.len());
        for platform in platforms {
            let platform = Some(*platform).filter(|p| !p.is_empty());
            if seen.contains(&platform) {
                log::warn!("skipping repeated platform {}", platform.unwrap_or("none"));
                continue;
            }
            if let Some(platform) = platform {
                check_file_name_part(platform)?;
            }
            seen.push(platform);

            modules.push(GeneratedModule {
                platform: platform.map(str::to_string),
                content: self.format_blocks(&blocks, platform)?,
            });
        }
        Ok(modules)
    }
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Platforms end up in `styles.<platform>.js`.
fn check_file_name_part(platform: &str) -> Result<()> {
    if platform == "."
        || platform == ".."
        || platform.contains(|c: char| matches!(c, '/' | '\\' | '\0'))
    {
        return Err(CodegenError::invalid_value(
            platform,
            "platform",
            "not usable as part of a file name",
        ));
    }
    Ok(())
}
