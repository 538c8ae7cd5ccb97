//! # testloom_analysis
//!
//! Static analysis of React / React Native source files.
//!
//! Given a parsed JS/TS syntax tree, this crate produces a
//! [`FileAnalysisResult`]: the components (with props, hooks, event-handler
//! props and wrapper metadata), plain functions (with full signatures),
//! imports, and the inferred target framework of one source file. The result
//! is the structured input the scaffold emitter turns into test boilerplate.
//!
//! ## Architecture
//!
//! ```text
//! source text
//!      ↓ oxc_parser
//! Program (typed AST)
//!      ↓ program::analyze_program      one pass per bound name
//! classify → hoc → component/signature
//!      ↓
//! FileAnalysisResult (owned records, serde-serializable)
//! ```
//!
//! The analysis never fails on a syntactically valid tree: unresolvable
//! types degrade to `"any"`, unnameable bindings are skipped, and a parser
//! panic yields an empty result for the file.

pub mod builtins;
pub mod classify;
pub mod component;
pub mod hoc;
pub mod model;
pub mod program;
pub mod signature;
pub mod types;
pub mod walk;

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;

pub use model::{
    ComponentKind, ComponentRecord, FileAnalysisResult, FileType, Framework, FunctionRecord,
    ImportRecord, ParamDescriptor, PropDescriptor, TypeDescriptor,
};
pub use program::{analyze_program, infer_framework};

/// Parse and analyze one source file.
///
/// `file_path` selects the dialect (ts/tsx/js/jsx) and is propagated into
/// the result records as a label; it is never read from disk here.
pub fn analyze_source(source: &str, file_path: &str) -> FileAnalysisResult {
    let allocator = Allocator::default();
    let source_type = SourceType::from_path(file_path)
        .unwrap_or_default()
        .with_typescript(true)
        .with_jsx(true);

    let ret = Parser::new(&allocator, source, source_type).parse();

    if ret.panicked {
        return FileAnalysisResult::empty(file_path);
    }

    analyze_program(&ret.program, file_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparseable_source_degrades_to_empty() {
        let result = analyze_source("const = = =", "broken.ts");
        assert_eq!(result.file_type, FileType::Unknown);
        assert!(result.components.is_empty());
        assert!(result.functions.is_empty());
    }

    #[test]
    fn result_serializes_to_camel_case_json() {
        let result = analyze_source(
            "import React from 'react';\nexport const Chip = ({ label }) => <span>{label}</span>;",
            "Chip.tsx",
        );
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["fileType"], "component");
        assert_eq!(json["framework"], "react");
        assert_eq!(json["components"][0]["acceptsChildren"], false);
        assert_eq!(json["components"][0]["props"][0]["type"], "any");
    }
}
