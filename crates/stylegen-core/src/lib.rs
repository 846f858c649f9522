//! Core types for the style module generator.
//!
//! The upstream extractor walks utility-class markup and hands over an
//! [`ExtractedValues`] record, usually as JSON. The code generator turns
//! that record into [`SerializedBlocks`] and then into the module text
//! loaded by the React Native runtime.

pub mod blocks;
pub mod values;

pub use blocks::SerializedBlocks;
pub use values::{AtRule, ExtractedValues, StyleRecord, StyleSheetRef, StyleValue};
