//! Higher-order wrapper resolution.
//!
//! Recognizes calls to the component-enhancing wrappers (`memo`,
//! `forwardRef`, `lazy`, bare or `React.`-qualified), unwraps nested chains
//! of them, and analyzes the innermost function-like argument as a component
//! named after the outer binding.

use oxc_ast::ast::{CallExpression, Expression};
use testloom_kit::CompactString;

use crate::classify::{peel_expression, FunctionLike};
use crate::component::analyze_component;
use crate::model::{ComponentKind, ComponentRecord};

/// The fixed set of recognized wrapping functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapperKind {
    Memo,
    ForwardRef,
    Lazy,
}

impl WrapperKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "memo" => Some(Self::Memo),
            "forwardRef" => Some(Self::ForwardRef),
            "lazy" => Some(Self::Lazy),
            _ => None,
        }
    }

    /// Match a callee in either spelling, returning the spelling as written.
    pub fn from_callee(callee: &Expression<'_>) -> Option<(Self, CompactString)> {
        match peel_expression(callee) {
            Expression::Identifier(id) => {
                Self::from_name(id.name.as_str()).map(|kind| (kind, CompactString::new(id.name.as_str())))
            }
            Expression::StaticMemberExpression(member) => {
                if let Expression::Identifier(object) = &member.object {
                    if object.name == "React" {
                        return Self::from_name(member.property.name.as_str()).map(|kind| {
                            (kind, CompactString::from(format!("React.{}", member.property.name)))
                        });
                    }
                }
                None
            }
            _ => None,
        }
    }
}

/// Resolve a wrapper call into a component record named after the outer
/// binding (`fallback_name`).
///
/// Returns `None` when the callee is not a recognized wrapper, when the
/// first argument is a component referenced by name (its own declaration is
/// analyzed independently), or when no function-like argument is found.
pub fn resolve_wrapped(
    call: &CallExpression<'_>,
    fallback_name: &str,
) -> Option<ComponentRecord> {
    let mut wrappers: Vec<CompactString> = Vec::new();
    let mut current = call;

    loop {
        let (_, spelled) = WrapperKind::from_callee(&current.callee)?;
        wrappers.push(spelled);

        let first = current.arguments.first()?;
        let expr = peel_expression(first.as_expression()?);

        // The props parameter is always first; forwardRef's second (ref)
        // parameter is ignored by prop extraction as a consequence.
        if let Some(func) = FunctionLike::from_expression(expr) {
            let mut record =
                analyze_component(&func, Some(fallback_name), ComponentKind::Expression)?;
            record.wrappers = wrappers;
            return Some(record);
        }

        match expr {
            // Nested chain: memo(forwardRef(...)), keep unwrapping.
            Expression::CallExpression(inner) if WrapperKind::from_callee(&inner.callee).is_some() => {
                current = inner;
            }
            _ => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::analyze_source;
    use crate::model::ComponentKind;

    #[test]
    fn memo_wrapped_component_keeps_binding_name() {
        let source = r#"
            const Button = memo(({ label, onPress }) => <button>{label}</button>);
        "#;
        let result = analyze_source(source, "Button.tsx");
        assert_eq!(result.components.len(), 1);

        let component = &result.components[0];
        assert_eq!(component.name, "Button");
        assert_eq!(component.kind, ComponentKind::Expression);
        assert_eq!(component.wrappers, ["memo"]);
        assert_eq!(component.props[0].name, "label");
    }

    #[test]
    fn nested_wrappers_unwrap_to_props_parameter() {
        let source = r#"
            const Input = memo(forwardRef((props: { value: string; onChange?: Function }, ref) => {
                return <input ref={ref} value={props.value} />;
            }));
        "#;
        let result = analyze_source(source, "Input.tsx");
        assert_eq!(result.components.len(), 1);

        let component = &result.components[0];
        assert_eq!(component.name, "Input");
        assert_eq!(component.wrappers, ["memo", "forwardRef"]);

        // Props come from the first parameter; the ref parameter contributes
        // nothing.
        let names: Vec<&str> = component.props.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["value", "onChange"]);
    }

    #[test]
    fn namespaced_spelling_is_recognized() {
        let source = "const Panel = React.memo(() => <section />);";
        let result = analyze_source(source, "Panel.tsx");
        assert_eq!(result.components[0].name, "Panel");
        assert_eq!(result.components[0].wrappers, ["React.memo"]);
    }

    #[test]
    fn wrapper_around_identifier_is_skipped() {
        // `Inner` is declared separately; the memo binding itself produces
        // no record.
        let source = r#"
            const Inner = ({ text }) => <p>{text}</p>;
            const Wrapped = memo(Inner);
        "#;
        let result = analyze_source(source, "Wrapped.tsx");
        assert_eq!(result.components.len(), 1);
        assert_eq!(result.components[0].name, "Inner");
    }

    #[test]
    fn unrecognized_call_is_not_a_wrapper() {
        let source = "const styled = css(() => ({ color: 'red' }));";
        let result = analyze_source(source, "styled.ts");
        assert!(result.components.is_empty());
    }
}
