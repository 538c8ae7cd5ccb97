//! Function signature extraction.
//!
//! Produces ordered [`ParamDescriptor`]s and a resolved return type for any
//! function-like node, keyed purely on syntactic parameter shape.

use oxc_ast::ast::{
    BindingPattern, BindingPatternKind, BindingRestElement, Expression, FormalParameters,
    ObjectPattern, PropertyKey, TSTypeAnnotation,
};
use testloom_kit::{CompactString, SmallVec};

use crate::model::{ParamDescriptor, TypeDescriptor};
use crate::types::{format_number, resolve_annotation, resolve_type};

/// Extract descriptors for every declared parameter, rest parameter included.
pub fn extract_params(params: &FormalParameters) -> Vec<ParamDescriptor> {
    let mut out = Vec::with_capacity(params.items.len() + 1);
    for param in params.items.iter() {
        out.push(describe_pattern(&param.pattern));
    }
    if let Some(rest) = &params.rest {
        out.push(describe_rest(rest));
    }
    out
}

/// Resolve the declared return type; async functions without an annotation
/// yield `"Promise<any>"`, everything else falls back to `"any"`.
pub fn extract_return_type(
    return_annotation: Option<&TSTypeAnnotation>,
    is_async: bool,
) -> TypeDescriptor {
    match return_annotation {
        Some(ann) => resolve_type(&ann.type_annotation),
        None if is_async => CompactString::const_new("Promise<any>"),
        None => CompactString::const_new("any"),
    }
}

fn describe_pattern(pattern: &BindingPattern) -> ParamDescriptor {
    match &pattern.kind {
        BindingPatternKind::BindingIdentifier(id) => ParamDescriptor {
            name: CompactString::new(id.name.as_str()),
            ty: resolve_annotation(pattern.type_annotation.as_deref()),
            optional: false,
            default_value: None,
        },

        // `x = 5` or `{ a } = {}`: a default makes the parameter optional.
        BindingPatternKind::AssignmentPattern(assign) => {
            let mut descriptor = describe_pattern(&assign.left);
            if descriptor.ty == "any" {
                descriptor.ty = resolve_annotation(pattern.type_annotation.as_deref());
            }
            descriptor.optional = true;
            descriptor.default_value = Some(render_default_value(&assign.right));
            descriptor
        }

        BindingPatternKind::ObjectPattern(obj) => ParamDescriptor {
            name: object_pattern_display(obj),
            ty: resolve_annotation(pattern.type_annotation.as_deref()),
            optional: false,
            default_value: None,
        },

        BindingPatternKind::ArrayPattern(_) => ParamDescriptor {
            name: CompactString::const_new("[...]"),
            ty: resolve_annotation(pattern.type_annotation.as_deref()),
            optional: false,
            default_value: None,
        },
    }
}

fn describe_rest(rest: &BindingRestElement) -> ParamDescriptor {
    let inner = match &rest.argument.kind {
        BindingPatternKind::BindingIdentifier(id) => CompactString::new(id.name.as_str()),
        BindingPatternKind::ObjectPattern(obj) => object_pattern_display(obj),
        _ => CompactString::const_new("args"),
    };

    let ty = resolve_annotation(rest.argument.type_annotation.as_deref());
    ParamDescriptor {
        name: CompactString::from(format!("...{}", inner)),
        ty: if ty == "any" {
            CompactString::const_new("any[]")
        } else {
            ty
        },
        optional: true,
        default_value: None,
    }
}

/// Render `{ a, b }` from an object pattern's property keys.
fn object_pattern_display(obj: &ObjectPattern) -> CompactString {
    let mut names: SmallVec<[&str; 4]> = SmallVec::new();
    for prop in obj.properties.iter() {
        match &prop.key {
            PropertyKey::StaticIdentifier(id) => names.push(id.name.as_str()),
            PropertyKey::StringLiteral(s) => names.push(s.value.as_str()),
            _ => {}
        }
    }
    if names.is_empty() {
        return CompactString::const_new("{}");
    }
    CompactString::from(format!("{{ {} }}", names.join(", ")))
}

/// Render a literal default value as text. Only literal node kinds are
/// recognized; the expression is never evaluated, and any non-literal default
/// renders as `"undefined"`.
pub fn render_default_value(expr: &Expression) -> CompactString {
    match expr {
        Expression::StringLiteral(s) => CompactString::from(format!("'{}'", s.value)),
        Expression::NumericLiteral(n) => format_number(n.value),
        Expression::BooleanLiteral(b) => {
            CompactString::const_new(if b.value { "true" } else { "false" })
        }
        Expression::NullLiteral(_) => CompactString::const_new("null"),
        Expression::Identifier(id) if id.name == "undefined" => {
            CompactString::const_new("undefined")
        }
        Expression::ArrayExpression(_) => CompactString::const_new("[]"),
        Expression::ObjectExpression(_) => CompactString::const_new("{}"),
        _ => CompactString::const_new("undefined"),
    }
}
