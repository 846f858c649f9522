//! Generation of the style module loaded by the React Native runtime.
//!
//! Extracted style values are rendered into four object-literal blocks by a
//! [`BlockSerializer`], then spliced into a fixed module template by the
//! [`OutputFormatter`]. Formatting is pure: the same values and platform
//! always produce byte-identical text, and nothing is written to disk.
//!
//! # Example
//!
//! ```ignore
//! use stylegen_codegen::{ExtractedValues, OutputFormatter};
//!
//! let formatter = OutputFormatter::new()?;
//! let source = formatter.format(&ExtractedValues::new(), Some("ios"))?;
//! std::fs::write("styles.ios.js", source)?;
//! ```

pub mod error;
pub mod formatter;
pub mod serializer;
pub mod templates;

pub use error::{CodegenError, Result};
pub use formatter::{FormatterConfig, GeneratedModule, OutputFormatter};
pub use serializer::{BlockSerializer, ObjectLiteralSerializer, SerializerConfig};
pub use templates::TemplateEngine;

pub use stylegen_core::{
    AtRule, ExtractedValues, SerializedBlocks, StyleRecord, StyleSheetRef, StyleValue,
};
