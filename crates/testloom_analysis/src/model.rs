//! Analysis result types.
//!
//! Every record is a plain owned value: the analyzer produces one
//! [`FileAnalysisResult`] per file and the records inside it never reference
//! the syntax tree they were derived from, so results can outlive the parse
//! arena and cross thread boundaries freely.

use serde::{Deserialize, Serialize};
use testloom_kit::CompactString;

/// A resolved type rendered as a normalized tag (`"string"`, `"number"`,
/// `"string | number"`, `"Props[]"`, ...). `"any"` is the universal fallback.
pub type TypeDescriptor = CompactString;

/// One import statement, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRecord {
    /// Module specifier as written (`'react'`, `'./utils'`).
    pub source: CompactString,
    /// Local names bound by the import, in declaration order.
    pub specifiers: Vec<CompactString>,
    /// Whether the statement binds a default import.
    pub is_default: bool,
}

/// One function parameter.
///
/// `name` encodes destructuring shape textually: `"{ a, b }"` for object
/// patterns, `"[...]"` for array patterns, `"...rest"` for rest parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamDescriptor {
    pub name: CompactString,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    pub optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<CompactString>,
}

/// One component prop, from destructuring and/or a props type literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropDescriptor {
    pub name: CompactString,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<CompactString>,
}

/// How a component was bound in source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// `function Button() { ... }`
    Declaration,
    /// `const Button = () => ...` (including wrapped forms)
    Expression,
}

/// Structured description of one detected UI component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRecord {
    pub name: CompactString,
    pub kind: ComponentKind,
    pub props: Vec<PropDescriptor>,
    /// `use*` calls found in the body, first-seen order, deduplicated.
    pub hooks: Vec<CompactString>,
    /// Props following the `onXxx` handler convention, in prop order.
    pub events: Vec<CompactString>,
    pub accepts_children: bool,
    /// Recognized higher-order wrappers unwrapped to reach the component,
    /// outermost first (`["memo", "forwardRef"]`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub wrappers: Vec<CompactString>,
    /// Copy of the file's imports (filled in when the file scan finishes).
    pub imports: Vec<ImportRecord>,
    pub file_path: CompactString,
}

/// Structured description of one plain (non-component) function binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionRecord {
    pub name: CompactString,
    pub params: Vec<ParamDescriptor>,
    pub return_type: TypeDescriptor,
    pub is_async: bool,
    pub is_exported: bool,
    pub imports: Vec<ImportRecord>,
    pub file_path: CompactString,
}

/// Dominant content of an analyzed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Component,
    Function,
    Unknown,
}

/// Target UI framework, inferred from import sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Framework {
    React,
    ReactNative,
    Vanilla,
}

impl Framework {
    pub fn as_str(self) -> &'static str {
        match self {
            Framework::React => "react",
            Framework::ReactNative => "react-native",
            Framework::Vanilla => "vanilla",
        }
    }
}

/// Complete analysis of one source file.
///
/// `file_type` is `Component` iff `components` is non-empty, else `Function`
/// iff `functions` is non-empty, else `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileAnalysisResult {
    pub file_path: CompactString,
    pub file_type: FileType,
    pub framework: Framework,
    pub components: Vec<ComponentRecord>,
    pub functions: Vec<FunctionRecord>,
    pub imports: Vec<ImportRecord>,
}

impl FileAnalysisResult {
    /// Empty result for a file that could not be analyzed at all.
    pub fn empty(file_path: &str) -> Self {
        Self {
            file_path: CompactString::new(file_path),
            file_type: FileType::Unknown,
            framework: Framework::Vanilla,
            components: Vec::new(),
            functions: Vec::new(),
            imports: Vec::new(),
        }
    }
}
