//! Component and function analysis.
//!
//! Builds the full structured record for a classified binding: props from
//! the first parameter (destructuring and/or a props type literal), hooks
//! from the body scan, event-handler props by naming convention, and plain
//! function signatures.

use oxc_ast::ast::{
    BindingPatternKind, FormalParameters, ObjectPattern, PropertyKey, TSSignature, TSType,
    TSTypeAnnotation,
};
use testloom_kit::{is_event_handler_name, CompactString};

use crate::classify::FunctionLike;
use crate::model::{ComponentKind, ComponentRecord, FunctionRecord, PropDescriptor};
use crate::signature::{extract_params, extract_return_type, render_default_value};
use crate::types::resolve_annotation;

/// Analyze a classified component. Returns `None` when no name can be
/// derived from either the outer binding or the node itself.
pub fn analyze_component(
    func: &FunctionLike<'_, '_>,
    outer_name: Option<&str>,
    kind: ComponentKind,
) -> Option<ComponentRecord> {
    let name = outer_name
        .or_else(|| func.name())
        .map(CompactString::new)?;

    let props = extract_props(func.params());
    let scan = func.scan_body();

    let events: Vec<CompactString> = props
        .iter()
        .filter(|p| is_event_handler_name(&p.name))
        .map(|p| p.name.clone())
        .collect();
    let accepts_children = props.iter().any(|p| p.name == "children");

    Some(ComponentRecord {
        name,
        kind,
        props,
        hooks: scan.hooks,
        events,
        accepts_children,
        wrappers: Vec::new(),
        imports: Vec::new(),
        file_path: CompactString::default(),
    })
}

/// Analyze a plain function binding. Returns `None` when no name can be
/// derived.
pub fn analyze_function(
    func: &FunctionLike<'_, '_>,
    outer_name: Option<&str>,
    is_exported: bool,
) -> Option<FunctionRecord> {
    let name = outer_name
        .or_else(|| func.name())
        .map(CompactString::new)?;

    Some(FunctionRecord {
        name,
        params: extract_params(func.params()),
        return_type: extract_return_type(func.return_type(), func.is_async()),
        is_async: func.is_async(),
        is_exported,
        imports: Vec::new(),
        file_path: CompactString::default(),
    })
}

/// Extract props from the first parameter only.
///
/// Destructured properties come first; a type-literal annotation on the
/// parameter then refines matching descriptors by name (overwriting type and
/// requiredness from the member's own optionality marker) and appends
/// members that were not destructured (bare-identifier parameter case).
fn extract_props(params: &FormalParameters) -> Vec<PropDescriptor> {
    let Some(first) = params.items.first() else {
        return Vec::new();
    };

    let mut props: Vec<PropDescriptor> = Vec::new();
    let mut annotation: Option<&TSTypeAnnotation> = first.pattern.type_annotation.as_deref();

    match &first.pattern.kind {
        BindingPatternKind::ObjectPattern(obj) => {
            collect_destructured_props(&mut props, obj);
        }
        // `({ a, b } = {})`: the pattern sits one level down.
        BindingPatternKind::AssignmentPattern(assign) => {
            if let BindingPatternKind::ObjectPattern(obj) = &assign.left.kind {
                collect_destructured_props(&mut props, obj);
            }
            if annotation.is_none() {
                annotation = assign.left.type_annotation.as_deref();
            }
        }
        BindingPatternKind::BindingIdentifier(_) => {}
        BindingPatternKind::ArrayPattern(_) => return Vec::new(),
    }

    if let Some(ann) = annotation {
        if let TSType::TSTypeLiteral(literal) = &ann.type_annotation {
            for member in literal.members.iter() {
                let TSSignature::TSPropertySignature(signature) = member else {
                    continue;
                };
                let name = match &signature.key {
                    PropertyKey::StaticIdentifier(id) => id.name.as_str(),
                    PropertyKey::StringLiteral(s) => s.value.as_str(),
                    _ => continue,
                };
                let ty = resolve_annotation(signature.type_annotation.as_deref());

                if let Some(existing) = props.iter_mut().find(|p| p.name == name) {
                    existing.ty = ty;
                    existing.required = !signature.optional;
                } else {
                    props.push(PropDescriptor {
                        name: CompactString::new(name),
                        ty,
                        required: !signature.optional,
                        default_value: None,
                    });
                }
            }
        }
    }

    props
}

fn collect_destructured_props(props: &mut Vec<PropDescriptor>, obj: &ObjectPattern) {
    for prop in obj.properties.iter() {
        let name = match &prop.key {
            PropertyKey::StaticIdentifier(id) => id.name.as_str(),
            PropertyKey::StringLiteral(s) => s.value.as_str(),
            _ => continue,
        };

        let descriptor = match &prop.value.kind {
            BindingPatternKind::AssignmentPattern(assign) => PropDescriptor {
                name: CompactString::new(name),
                ty: resolve_annotation(assign.left.type_annotation.as_deref()),
                required: false,
                default_value: Some(render_default_value(&assign.right)),
            },
            _ => PropDescriptor {
                name: CompactString::new(name),
                ty: resolve_annotation(prop.value.type_annotation.as_deref()),
                required: true,
                default_value: None,
            },
        };
        props.push(descriptor);
    }
    // An object rest (`...rest`) collects leftovers and is not itself a prop.
}

#[cfg(test)]
mod tests {
    use crate::analyze_source;

    #[test]
    fn props_from_destructuring_and_type_literal() {
        let source = r#"
            const Profile = ({ name, age = 0 }: { name: string; age?: number }) => {
                return <div>{name}{age}</div>;
            };
        "#;
        let result = analyze_source(source, "Profile.tsx");
        let props = &result.components[0].props;

        assert_eq!(props.len(), 2);
        assert_eq!(props[0].name, "name");
        assert_eq!(props[0].ty, "string");
        assert!(props[0].required);
        assert!(props[0].default_value.is_none());

        assert_eq!(props[1].name, "age");
        assert_eq!(props[1].ty, "number");
        assert!(!props[1].required);
        assert_eq!(props[1].default_value.as_deref(), Some("0"));
    }

    #[test]
    fn bare_identifier_props_come_from_type_literal() {
        let source = r#"
            function Badge(props: { label: string; tone?: string }) {
                return <span>{props.label}</span>;
            }
        "#;
        let result = analyze_source(source, "Badge.tsx");
        let props = &result.components[0].props;

        assert_eq!(props.len(), 2);
        assert_eq!(props[0].name, "label");
        assert!(props[0].required);
        assert_eq!(props[1].name, "tone");
        assert!(!props[1].required);
    }

    #[test]
    fn type_literal_optionality_overwrites_destructured_required() {
        // Observed precedence: the type literal's marker wins, even against a
        // default value that already cleared the flag.
        let source = r#"
            const Counter = ({ step = 1 }: { step: number }) => <button>{step}</button>;
        "#;
        let result = analyze_source(source, "Counter.tsx");
        let props = &result.components[0].props;

        assert_eq!(props[0].name, "step");
        assert!(props[0].required);
        assert_eq!(props[0].default_value.as_deref(), Some("1"));
    }

    #[test]
    fn event_props_follow_naming_convention() {
        let source = r#"
            const Clickable = ({ onClick, onLongPress, once, on, value }) => (
                <button onClick={onClick}>{value}</button>
            );
        "#;
        let result = analyze_source(source, "Clickable.tsx");
        let component = &result.components[0];
        assert_eq!(component.events, ["onClick", "onLongPress"]);
    }

    #[test]
    fn children_prop_sets_accepts_children() {
        let source = "const Card = ({ title, children }) => <div>{title}{children}</div>;";
        let result = analyze_source(source, "Card.tsx");
        assert!(result.components[0].accepts_children);

        let source = "const Leaf = ({ title }) => <div>{title}</div>;";
        let result = analyze_source(source, "Leaf.tsx");
        assert!(!result.components[0].accepts_children);
    }

    #[test]
    fn hooks_are_deduplicated_in_first_seen_order() {
        let source = r#"
            const Form = () => {
                const [value, setValue] = useState('');
                const theme = useTheme();
                useEffect(() => { setValue(''); }, []);
                const other = useState(null);
                return <input value={value} />;
            };
        "#;
        let result = analyze_source(source, "Form.tsx");
        assert_eq!(
            result.components[0].hooks,
            ["useState", "useTheme", "useEffect"]
        );
    }

    #[test]
    fn hooks_inside_callbacks_are_found() {
        let source = r#"
            const Lazy = () => {
                const handler = () => {
                    const value = useStore();
                    return value;
                };
                return <button onClick={handler} />;
            };
        "#;
        let result = analyze_source(source, "Lazy.tsx");
        assert_eq!(result.components[0].hooks, ["useStore"]);
    }
}
