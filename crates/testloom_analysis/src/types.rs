//! Type annotation resolution.
//!
//! Turns a syntactic TypeScript annotation into the normalized
//! [`TypeDescriptor`] tag used throughout the analysis records. This is a
//! total function: anything unrecognized resolves to `"any"`, never an error.

use oxc_ast::ast::{TSLiteral, TSTupleElement, TSType, TSTypeAnnotation, TSTypeName};
use testloom_kit::CompactString;

use crate::model::TypeDescriptor;

/// Resolve an optional annotation; absent annotations are `"any"`.
pub fn resolve_annotation(annotation: Option<&TSTypeAnnotation>) -> TypeDescriptor {
    match annotation {
        Some(ann) => resolve_type(&ann.type_annotation),
        None => CompactString::const_new("any"),
    }
}

/// Resolve a type node to its descriptor tag.
pub fn resolve_type(ty: &TSType) -> TypeDescriptor {
    match ty {
        TSType::TSStringKeyword(_) => CompactString::const_new("string"),
        TSType::TSNumberKeyword(_) => CompactString::const_new("number"),
        TSType::TSBooleanKeyword(_) => CompactString::const_new("boolean"),
        TSType::TSAnyKeyword(_) => CompactString::const_new("any"),
        TSType::TSVoidKeyword(_) => CompactString::const_new("void"),
        TSType::TSNullKeyword(_) => CompactString::const_new("null"),
        TSType::TSUndefinedKeyword(_) => CompactString::const_new("undefined"),
        TSType::TSNeverKeyword(_) => CompactString::const_new("never"),
        TSType::TSUnknownKeyword(_) => CompactString::const_new("unknown"),
        TSType::TSObjectKeyword(_) => CompactString::const_new("object"),

        TSType::TSArrayType(arr) => {
            CompactString::from(format!("{}[]", resolve_type(&arr.element_type)))
        }

        TSType::TSTypeReference(reference) => type_reference_name(&reference.type_name),

        // Member order is preserved as declared; no dedup, no sorting.
        TSType::TSUnionType(union) => join_types(&union.types, " | "),
        TSType::TSIntersectionType(intersection) => join_types(&intersection.types, " & "),

        TSType::TSLiteralType(lit) => literal_descriptor(&lit.literal),

        TSType::TSTupleType(tuple) => {
            let members: Vec<String> = tuple
                .element_types
                .iter()
                .map(|elem| tuple_element_descriptor(elem).to_string())
                .collect();
            CompactString::from(format!("[{}]", members.join(", ")))
        }

        TSType::TSFunctionType(_) => CompactString::const_new("Function"),
        TSType::TSTypeLiteral(_) => CompactString::const_new("object"),

        TSType::TSParenthesizedType(paren) => resolve_type(&paren.type_annotation),

        _ => CompactString::const_new("any"),
    }
}

fn join_types(types: &oxc_allocator::Vec<'_, TSType<'_>>, separator: &str) -> TypeDescriptor {
    let members: Vec<String> = types.iter().map(|t| resolve_type(t).to_string()).collect();
    CompactString::from(members.join(separator))
}

fn tuple_element_descriptor(elem: &TSTupleElement) -> TypeDescriptor {
    match elem {
        TSTupleElement::TSOptionalType(optional) => resolve_type(&optional.type_annotation),
        TSTupleElement::TSRestType(rest) => resolve_type(&rest.type_annotation),
        _ => match elem.as_ts_type() {
            Some(ty) => resolve_type(ty),
            None => CompactString::const_new("any"),
        },
    }
}

/// Referenced name; qualified names join their segments with `.`.
fn type_reference_name(name: &TSTypeName) -> TypeDescriptor {
    match name {
        TSTypeName::IdentifierReference(id) => CompactString::new(id.name.as_str()),
        TSTypeName::QualifiedName(qualified) => CompactString::from(format!(
            "{}.{}",
            type_reference_name(&qualified.left),
            qualified.right.name
        )),
        _ => CompactString::const_new("any"),
    }
}

fn literal_descriptor(literal: &TSLiteral) -> TypeDescriptor {
    match literal {
        TSLiteral::StringLiteral(s) => CompactString::from(format!("'{}'", s.value)),
        TSLiteral::NumericLiteral(n) => format_number(n.value),
        TSLiteral::BooleanLiteral(b) => {
            CompactString::const_new(if b.value { "true" } else { "false" })
        }
        _ => CompactString::const_new("any"),
    }
}

/// Render a numeric value without a trailing `.0` for whole numbers.
pub(crate) fn format_number(value: f64) -> CompactString {
    if value.fract() == 0.0 && value.is_finite() && value.abs() < 9e15 {
        CompactString::from(format!("{}", value as i64))
    } else {
        CompactString::from(format!("{}", value))
    }
}

#[cfg(test)]
mod tests {
    use crate::analyze_source;

    fn first_param_type(source: &str) -> String {
        let result = analyze_source(source, "types.ts");
        result.functions[0].params[0].ty.to_string()
    }

    #[test]
    fn primitive_keywords() {
        for (annotation, expected) in [
            ("string", "string"),
            ("number", "number"),
            ("boolean", "boolean"),
            ("any", "any"),
            ("void", "void"),
            ("null", "null"),
            ("undefined", "undefined"),
            ("never", "never"),
            ("unknown", "unknown"),
            ("object", "object"),
        ] {
            let source = format!("export function f(x: {}) {{ return x; }}", annotation);
            assert_eq!(first_param_type(&source), expected, "for `{}`", annotation);
        }
    }

    #[test]
    fn absent_annotation_is_any() {
        assert_eq!(first_param_type("function f(x) { return x; }"), "any");
    }

    #[test]
    fn array_and_reference_types() {
        assert_eq!(first_param_type("function f(x: string[]) {}"), "string[]");
        assert_eq!(first_param_type("function f(x: User) {}"), "User");
        assert_eq!(
            first_param_type("function f(x: React.ReactNode) {}"),
            "React.ReactNode"
        );
    }

    #[test]
    fn union_preserves_declared_order() {
        let descriptor = first_param_type("function f(x: string | number | boolean) {}");
        assert_eq!(descriptor, "string | number | boolean");
        assert_eq!(descriptor.matches(" | ").count(), 2);

        // No sorting: reversed order stays reversed.
        assert_eq!(
            first_param_type("function f(x: number | string) {}"),
            "number | string"
        );
    }

    #[test]
    fn intersection_tuple_literal_function_object() {
        assert_eq!(first_param_type("function f(x: A & B) {}"), "A & B");
        assert_eq!(
            first_param_type("function f(x: [string, number]) {}"),
            "[string, number]"
        );
        assert_eq!(first_param_type("function f(x: 'left') {}"), "'left'");
        assert_eq!(first_param_type("function f(x: 5) {}"), "5");
        assert_eq!(first_param_type("function f(x: true) {}"), "true");
        assert_eq!(first_param_type("function f(x: () => void) {}"), "Function");
        assert_eq!(
            first_param_type("function f(x: { a: string }) {}"),
            "object"
        );
    }
}
