//! Whole-file analysis.
//!
//! Walks a parsed program twice: one pass collecting import records, one
//! pass dispatching every function-like binding (named declarations,
//! variable declarators bound to function expressions, and default-exported
//! default-exported values) through classification and analysis.
//! A per-file [`AnalysisContext`] owns the seen-names set, so a binding
//! discovered through one syntactic path is never re-processed through
//! another.

use oxc_ast::ast::{
    Declaration, ExportDefaultDeclarationKind, Expression, ImportDeclaration,
    ImportDeclarationSpecifier, Program, Statement, VariableDeclarator,
};
use testloom_kit::{CompactString, FxHashSet};

use crate::classify::{is_component, peel_expression, FunctionLike};
use crate::component::{analyze_component, analyze_function};
use crate::hoc::resolve_wrapped;
use crate::model::{
    ComponentKind, ComponentRecord, FileAnalysisResult, FileType, Framework, FunctionRecord,
    ImportRecord,
};

/// Mutable state for one file analysis. Never shared across files.
struct AnalysisContext {
    file_path: CompactString,
    seen: FxHashSet<CompactString>,
    components: Vec<ComponentRecord>,
    functions: Vec<FunctionRecord>,
    imports: Vec<ImportRecord>,
}

impl AnalysisContext {
    fn new(file_path: &str) -> Self {
        Self {
            file_path: CompactString::new(file_path),
            seen: FxHashSet::default(),
            components: Vec::new(),
            functions: Vec::new(),
            imports: Vec::new(),
        }
    }

    fn is_seen(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    fn push_component(&mut self, record: ComponentRecord) {
        self.seen.insert(record.name.clone());
        self.components.push(record);
    }

    fn push_function(&mut self, record: FunctionRecord) {
        self.seen.insert(record.name.clone());
        self.functions.push(record);
    }

    fn finish(mut self) -> FileAnalysisResult {
        let framework = infer_framework(&self.imports);
        let file_type = if !self.components.is_empty() {
            FileType::Component
        } else if !self.functions.is_empty() {
            FileType::Function
        } else {
            FileType::Unknown
        };

        for component in &mut self.components {
            component.imports = self.imports.clone();
            component.file_path = self.file_path.clone();
        }
        for function in &mut self.functions {
            function.imports = self.imports.clone();
            function.file_path = self.file_path.clone();
        }

        FileAnalysisResult {
            file_path: self.file_path,
            file_type,
            framework,
            components: self.components,
            functions: self.functions,
            imports: self.imports,
        }
    }
}

/// Analyze one parsed program.
pub fn analyze_program(program: &Program<'_>, file_path: &str) -> FileAnalysisResult {
    let mut ctx = AnalysisContext::new(file_path);

    for stmt in program.body.iter() {
        if let Statement::ImportDeclaration(import) = stmt {
            collect_import(&mut ctx, import);
        }
    }

    for stmt in program.body.iter() {
        process_statement(&mut ctx, stmt);
    }

    ctx.finish()
}

/// Infer the target framework from import sources, in source order. Within
/// each import the `react-native` prefix is tested before the `react`
/// prefix, so the earliest matching import decides.
pub fn infer_framework(imports: &[ImportRecord]) -> Framework {
    for import in imports {
        if import.source.starts_with("react-native") {
            return Framework::ReactNative;
        }
        if import.source.starts_with("react") {
            return Framework::React;
        }
    }
    Framework::Vanilla
}

fn collect_import(ctx: &mut AnalysisContext, import: &ImportDeclaration<'_>) {
    let mut specifiers: Vec<CompactString> = Vec::new();
    let mut is_default = false;

    if let Some(specs) = &import.specifiers {
        for spec in specs.iter() {
            match spec {
                ImportDeclarationSpecifier::ImportSpecifier(s) => {
                    specifiers.push(CompactString::new(s.local.name.as_str()));
                }
                ImportDeclarationSpecifier::ImportDefaultSpecifier(s) => {
                    is_default = true;
                    specifiers.push(CompactString::new(s.local.name.as_str()));
                }
                ImportDeclarationSpecifier::ImportNamespaceSpecifier(s) => {
                    specifiers.push(CompactString::new(s.local.name.as_str()));
                }
            }
        }
    }

    ctx.imports.push(ImportRecord {
        source: CompactString::new(import.source.value.as_str()),
        specifiers,
        is_default,
    });
}

fn process_statement(ctx: &mut AnalysisContext, stmt: &Statement<'_>) {
    match stmt {
        Statement::FunctionDeclaration(func) => {
            if let Some(id) = &func.id {
                dispatch_binding(
                    ctx,
                    id.name.as_str(),
                    FunctionLike::Function(func),
                    ComponentKind::Declaration,
                    false,
                );
            }
        }

        Statement::VariableDeclaration(decl) => {
            for declarator in decl.declarations.iter() {
                process_declarator(ctx, declarator, false);
            }
        }

        Statement::ExportNamedDeclaration(export) => match &export.declaration {
            Some(Declaration::FunctionDeclaration(func)) => {
                if let Some(id) = &func.id {
                    dispatch_binding(
                        ctx,
                        id.name.as_str(),
                        FunctionLike::Function(func),
                        ComponentKind::Declaration,
                        true,
                    );
                }
            }
            Some(Declaration::VariableDeclaration(decl)) => {
                for declarator in decl.declarations.iter() {
                    process_declarator(ctx, declarator, true);
                }
            }
            _ => {}
        },

        Statement::ExportDefaultDeclaration(export) => match &export.declaration {
            ExportDefaultDeclarationKind::FunctionDeclaration(func) => {
                let name = func
                    .id
                    .as_ref()
                    .map(|id| id.name.as_str())
                    .unwrap_or("default");
                dispatch_binding(
                    ctx,
                    name,
                    FunctionLike::Function(func),
                    ComponentKind::Declaration,
                    true,
                );
            }
            decl => {
                let Some(expr) = decl.as_expression() else {
                    return;
                };
                let expr = peel_expression(expr);
                if let Some(func) = FunctionLike::from_expression(expr) {
                    dispatch_binding(ctx, "default", func, ComponentKind::Expression, true);
                } else if let Expression::CallExpression(call) = expr {
                    if !ctx.is_seen("default") {
                        if let Some(record) = resolve_wrapped(call, "default") {
                            ctx.push_component(record);
                        }
                    }
                }
            }
        },

        _ => {}
    }
}

/// Variable declarators: `const X = () => ...` and `const X = memo(...)`.
fn process_declarator(
    ctx: &mut AnalysisContext,
    declarator: &VariableDeclarator<'_>,
    is_exported: bool,
) {
    let oxc_ast::ast::BindingPatternKind::BindingIdentifier(id) = &declarator.id.kind else {
        return;
    };
    let name = id.name.as_str();

    let Some(init) = &declarator.init else {
        return;
    };
    let init = peel_expression(init);

    if let Some(func) = FunctionLike::from_expression(init) {
        dispatch_binding(ctx, name, func, ComponentKind::Expression, is_exported);
    } else if let Expression::CallExpression(call) = init {
        if !ctx.is_seen(name) {
            if let Some(record) = resolve_wrapped(call, name) {
                ctx.push_component(record);
            }
        }
    }
}

/// Shared classification + analysis for a named function-like binding.
fn dispatch_binding(
    ctx: &mut AnalysisContext,
    name: &str,
    func: FunctionLike<'_, '_>,
    kind: ComponentKind,
    is_exported: bool,
) {
    if ctx.is_seen(name) {
        return;
    }

    if is_component(&func) {
        if let Some(record) = analyze_component(&func, Some(name), kind) {
            ctx.push_component(record);
        }
    } else if let Some(record) = analyze_function(&func, Some(name), is_exported) {
        ctx.push_function(record);
    }
}

#[cfg(test)]
mod tests {
    use crate::analyze_source;
    use crate::model::{FileType, Framework};

    #[test]
    fn exported_function_scenario() {
        let source = "export function add(a: number, b: number): number { return a + b; }";
        let result = analyze_source(source, "add.ts");

        assert_eq!(result.file_type, FileType::Function);
        assert_eq!(result.functions.len(), 1);

        let function = &result.functions[0];
        assert_eq!(function.name, "add");
        assert_eq!(function.params.len(), 2);
        assert_eq!(function.params[0].name, "a");
        assert_eq!(function.params[0].ty, "number");
        assert!(!function.params[0].optional);
        assert_eq!(function.params[1].name, "b");
        assert_eq!(function.return_type, "number");
        assert!(!function.is_async);
        assert!(function.is_exported);
    }

    #[test]
    fn export_status_is_tracked() {
        let source = r#"
            export const publicHelper = (x) => x + 1;
            const privateHelper = (x) => x - 1;
        "#;
        let result = analyze_source(source, "helpers.ts");
        assert!(result.functions[0].is_exported);
        assert!(!result.functions[1].is_exported);
    }

    #[test]
    fn default_exported_wrapper_call() {
        let source = "export default memo(({ title }) => <h1>{title}</h1>);";
        let result = analyze_source(source, "Title.tsx");
        assert_eq!(result.components.len(), 1);
        assert_eq!(result.components[0].name, "default");
        assert_eq!(result.components[0].wrappers, ["memo"]);
    }

    #[test]
    fn default_exported_named_function_keeps_its_name() {
        let source = "export default function Header() { return <header />; }";
        let result = analyze_source(source, "Header.tsx");
        assert_eq!(result.components[0].name, "Header");
    }

    #[test]
    fn each_binding_is_analyzed_once() {
        // The memo declarator is handled as a wrapper call; the generic pass
        // must not produce a second record for the same name.
        let source = r#"
            const Toolbar = memo(({ items }) => <nav>{items.length}</nav>);
            export function formatLabel(label: string): string { return label.trim(); }
        "#;
        let result = analyze_source(source, "Toolbar.tsx");
        assert_eq!(result.components.len(), 1);
        assert_eq!(result.functions.len(), 1);
        assert_eq!(result.components[0].name, "Toolbar");
    }

    #[test]
    fn imports_are_collected_in_order() {
        let source = r#"
            import React, { useState } from 'react';
            import { View } from 'react-native';
            import helper from './helper';
        "#;
        let result = analyze_source(source, "imports.tsx");
        assert_eq!(result.imports.len(), 3);

        assert_eq!(result.imports[0].source, "react");
        assert_eq!(result.imports[0].specifiers, ["React", "useState"]);
        assert!(result.imports[0].is_default);

        assert_eq!(result.imports[1].source, "react-native");
        assert!(!result.imports[1].is_default);

        assert_eq!(result.imports[2].source, "./helper");
        assert!(result.imports[2].is_default);
    }

    #[test]
    fn framework_inference_follows_import_order() {
        let rn_first = "import { View } from 'react-native';\nimport React from 'react';";
        assert_eq!(
            analyze_source(rn_first, "a.tsx").framework,
            Framework::ReactNative
        );

        let react_first = "import React from 'react';\nimport { View } from 'react-native';";
        assert_eq!(analyze_source(react_first, "b.tsx").framework, Framework::React);

        let react_only = "import React from 'react';";
        assert_eq!(analyze_source(react_only, "c.tsx").framework, Framework::React);

        // Prefixes count: scoped react-native packages still mean react-native.
        let rn_pkg = "import { Camera } from 'react-native-vision-camera';";
        assert_eq!(
            analyze_source(rn_pkg, "d.tsx").framework,
            Framework::ReactNative
        );

        let vanilla = "import { chunk } from 'lodash';";
        assert_eq!(analyze_source(vanilla, "e.ts").framework, Framework::Vanilla);
    }

    #[test]
    fn file_type_reflects_contents() {
        assert_eq!(
            analyze_source("const A = () => <div />;", "A.tsx").file_type,
            FileType::Component
        );
        assert_eq!(
            analyze_source("export const f = () => 1;", "f.ts").file_type,
            FileType::Function
        );
        assert_eq!(
            analyze_source("const LIMIT = 10;", "consts.ts").file_type,
            FileType::Unknown
        );
    }

    #[test]
    fn records_carry_file_path_and_imports() {
        let source = "import React from 'react';\nexport const Tag = () => <em />;";
        let result = analyze_source(source, "src/Tag.tsx");
        assert_eq!(result.components[0].file_path, "src/Tag.tsx");
        assert_eq!(result.components[0].imports.len(), 1);
    }

    #[test]
    fn analysis_is_deterministic() {
        let source = r#"
            import React, { useState } from 'react';
            const Counter = ({ start = 0 }) => {
                const [count, setCount] = useState(start);
                return <button onClick={() => setCount(count + 1)}>{count}</button>;
            };
            export default Counter;
        "#;
        let first = analyze_source(source, "Counter.tsx");
        let second = analyze_source(source, "Counter.tsx");
        assert_eq!(first, second);
    }
}
