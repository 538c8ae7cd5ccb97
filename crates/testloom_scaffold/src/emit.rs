//! Test-file rendering.

use std::path::Path;

use testloom_analysis::{
    ComponentRecord, FileAnalysisResult, FileType, Framework, FunctionRecord,
};
use testloom_analysis::builtins::is_builtin_hook;
use testloom_kit::{is_event_handler_name, to_pascal_case};

use crate::sample::sample_value;
use crate::{ScaffoldOptions, Suffix};

/// Derive the test file name: `src/Button.tsx` → `Button.test.tsx`.
pub fn scaffold_file_name(file_path: &str, suffix: Suffix) -> String {
    let path = Path::new(file_path);
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("index");
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("js");
    format!("{}.{}.{}", stem, suffix.as_str(), ext)
}

/// Render the full test-file text for one analysis result.
pub fn render_test_file(result: &FileAnalysisResult, options: &ScaffoldOptions) -> String {
    let framework = options.framework.unwrap_or(result.framework);
    let stem = Path::new(result.file_path.as_str())
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("index");

    let mut out = String::with_capacity(1024);
    out.push_str("// Generated by testloom. Replace the TODOs with real assertions.\n");

    match result.file_type {
        FileType::Component => render_component_file(&mut out, result, framework, stem),
        FileType::Function => render_function_file(&mut out, result, stem),
        FileType::Unknown => {
            out.push_str("// No components or functions were found in ");
            out.push_str(result.file_path.as_str());
            out.push('\n');
        }
    }

    out
}

fn testing_library(framework: Framework) -> &'static str {
    match framework {
        Framework::ReactNative => "@testing-library/react-native",
        _ => "@testing-library/react",
    }
}

fn render_component_file(
    out: &mut String,
    result: &FileAnalysisResult,
    framework: Framework,
    stem: &str,
) {
    out.push_str("import React from 'react';\n");
    out.push_str(&format!(
        "import {{ render, fireEvent }} from '{}';\n",
        testing_library(framework)
    ));

    let named: Vec<&str> = result
        .components
        .iter()
        .filter(|c| c.name != "default")
        .map(|c| c.name.as_str())
        .collect();
    let has_default = result.components.iter().any(|c| c.name == "default");

    let default_name = to_pascal_case(stem);
    if has_default {
        out.push_str(&format!("import {} from './{}';\n", default_name, stem));
    }
    if !named.is_empty() {
        out.push_str(&format!("import {{ {} }} from './{}';\n", named.join(", "), stem));
    }

    let custom_hooks: Vec<&str> = result
        .components
        .iter()
        .flat_map(|c| c.hooks.iter())
        .map(|h| h.as_str())
        .filter(|h| !is_builtin_hook(h))
        .collect();
    if !custom_hooks.is_empty() {
        out.push_str(&format!(
            "// TODO: mock custom hooks with jest.mock: {}\n",
            custom_hooks.join(", ")
        ));
    }

    for component in &result.components {
        out.push('\n');
        let display_name = if component.name == "default" {
            default_name.as_str()
        } else {
            component.name.as_str()
        };
        render_component_block(out, component, display_name);
    }
}

fn render_component_block(out: &mut String, component: &ComponentRecord, name: &str) {
    let props = render_props(component, &[]);

    out.push_str(&format!("describe('{}', () => {{\n", name));

    out.push_str("  it('renders without crashing', () => {\n");
    out.push_str(&format!("    render(<{}{} />);\n", name, props));
    out.push_str("  });\n");

    for event in &component.events {
        out.push('\n');
        out.push_str(&format!("  it('supports {}', () => {{\n", event));
        out.push_str(&format!("    const {} = jest.fn();\n", event));
        let props = render_props(component, std::slice::from_ref(event));
        out.push_str(&format!("    render(<{}{} />);\n", name, props));
        out.push_str(&format!(
            "    // TODO: drive the interaction that triggers {} and assert on the mock\n",
            event
        ));
        out.push_str("  });\n");
    }

    if component.accepts_children {
        out.push('\n');
        out.push_str("  it('renders its children', () => {\n");
        let props = render_props(component, &[]);
        out.push_str(&format!(
            "    render(<{name}{props}>content</{name}>);\n",
            name = name,
            props = props
        ));
        out.push_str("    // TODO: assert the children are visible\n");
        out.push_str("  });\n");
    }

    out.push_str("});\n");
}

/// Render the JSX attribute list: required props get sample values, event
/// props get mocks, and the handlers listed in `bound_events` reference a
/// local `const` of the same name.
fn render_props(component: &ComponentRecord, bound_events: &[testloom_kit::CompactString]) -> String {
    let mut rendered = String::new();

    for prop in &component.props {
        if prop.name == "children" {
            continue;
        }

        let bound = bound_events.iter().any(|e| *e == prop.name);
        if !prop.required && !bound {
            continue;
        }

        let value = if bound {
            format!("{{{}}}", prop.name)
        } else if is_event_handler_name(&prop.name) || prop.ty == "Function" {
            "{jest.fn()}".to_string()
        } else {
            let sample = sample_value(&prop.ty);
            if sample.starts_with('\'') {
                format!("\"{}\"", sample.trim_matches('\''))
            } else {
                format!("{{{}}}", sample)
            }
        };

        rendered.push_str(&format!(" {}={}", prop.name, value));
    }

    rendered
}

fn render_function_file(out: &mut String, result: &FileAnalysisResult, stem: &str) {
    let exported: Vec<&FunctionRecord> =
        result.functions.iter().filter(|f| f.is_exported).collect();

    if exported.is_empty() {
        out.push_str(&format!(
            "// {} declares no exported functions; nothing to scaffold\n",
            result.file_path
        ));
        return;
    }

    let names: Vec<&str> = exported.iter().map(|f| f.name.as_str()).collect();
    out.push_str(&format!("import {{ {} }} from './{}';\n", names.join(", "), stem));

    for function in exported {
        out.push('\n');
        render_function_block(out, function);
    }
}

fn render_function_block(out: &mut String, function: &FunctionRecord) {
    let args = render_arguments(function);
    let call = if function.is_async {
        format!("await {}({})", function.name, args)
    } else {
        format!("{}({})", function.name, args)
    };
    let marker = if function.is_async { "async " } else { "" };

    out.push_str(&format!("describe('{}', () => {{\n", function.name));
    out.push_str(&format!("  it('returns a value', {}() => {{\n", marker));
    out.push_str(&format!("    const result = {};\n", call));
    out.push_str("    // TODO: replace with a real assertion\n");
    out.push_str("    expect(result).toBeDefined();\n");
    out.push_str("  });\n");
    out.push_str("});\n");
}

fn render_arguments(function: &FunctionRecord) -> String {
    let mut args: Vec<String> = Vec::new();

    for param in &function.params {
        if param.name.starts_with("...") {
            break;
        }
        if param.optional {
            continue;
        }

        let value = if param.name.starts_with('{') {
            "{}".to_string()
        } else if param.name.starts_with('[') {
            "[]".to_string()
        } else if is_event_handler_name(&param.name) || param.ty == "Function" {
            "jest.fn()".to_string()
        } else {
            sample_value(&param.ty)
        };
        args.push(value);
    }

    args.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use testloom_analysis::analyze_source;

    fn scaffold(source: &str, path: &str) -> String {
        let result = analyze_source(source, path);
        render_test_file(&result, &ScaffoldOptions::default())
    }

    #[test]
    fn file_naming() {
        assert_eq!(scaffold_file_name("src/Button.tsx", Suffix::Test), "Button.test.tsx");
        assert_eq!(scaffold_file_name("lib/util.js", Suffix::Spec), "util.spec.js");
    }

    #[test]
    fn component_scaffold_has_render_and_event_tests() {
        let output = scaffold(
            r#"
            import React from 'react';
            export const Button = ({ label, onClick }: { label: string; onClick?: Function }) => (
                <button onClick={onClick}>{label}</button>
            );
            "#,
            "src/Button.tsx",
        );

        assert!(output.contains("import { render, fireEvent } from '@testing-library/react';"));
        assert!(output.contains("import { Button } from './Button';"));
        assert!(output.contains("describe('Button', () => {"));
        assert!(output.contains("render(<Button label=\"test\" />);"));
        assert!(output.contains("it('supports onClick', () => {"));
        assert!(output.contains("const onClick = jest.fn();"));
    }

    #[test]
    fn react_native_uses_native_testing_library() {
        let output = scaffold(
            r#"
            import { View, Text } from 'react-native';
            export const Title = ({ text }) => <Text>{text}</Text>;
            "#,
            "Title.tsx",
        );
        assert!(output.contains("@testing-library/react-native"));
    }

    #[test]
    fn default_export_imports_by_file_stem() {
        let output = scaffold(
            "export default function card() { return <div />; }",
            "src/user-card.tsx",
        );
        // The declaration keeps its own name; default-position bindings
        // without one would fall back to the stem.
        assert!(output.contains("describe('card'"));

        let output = scaffold(
            "export default memo(() => <div />);",
            "src/user-card.tsx",
        );
        assert!(output.contains("import UserCard from './user-card';"));
        assert!(output.contains("describe('UserCard'"));
    }

    #[test]
    fn custom_hooks_are_flagged_for_mocking() {
        let output = scaffold(
            r#"
            const Cart = () => {
                const total = useCartTotal();
                const [open, setOpen] = useState(false);
                return <div>{total}</div>;
            };
            "#,
            "Cart.tsx",
        );
        assert!(output.contains("// TODO: mock custom hooks with jest.mock: useCartTotal"));
        assert!(!output.contains("jest.mock: useState"));
    }

    #[test]
    fn children_test_is_emitted_when_accepted() {
        let output = scaffold(
            "export const Box = ({ children }) => <div>{children}</div>;",
            "Box.tsx",
        );
        assert!(output.contains("it('renders its children', () => {"));
        assert!(output.contains("render(<Box>content</Box>);"));
    }

    #[test]
    fn function_scaffold_invokes_with_sample_arguments() {
        let output = scaffold(
            "export function add(a: number, b: number): number { return a + b; }",
            "src/add.ts",
        );
        assert!(output.contains("import { add } from './add';"));
        assert!(output.contains("const result = add(0, 0);"));
        assert!(output.contains("expect(result).toBeDefined();"));
    }

    #[test]
    fn async_function_scaffold_awaits() {
        let output = scaffold(
            "export async function fetchUser(id: string) { return id; }",
            "api.ts",
        );
        assert!(output.contains("it('returns a value', async () => {"));
        assert!(output.contains("const result = await fetchUser('test');"));
    }

    #[test]
    fn unknown_file_renders_placeholder() {
        let output = scaffold("const LIMIT = 3;", "consts.ts");
        assert!(output.contains("// No components or functions were found in consts.ts"));
    }
}
