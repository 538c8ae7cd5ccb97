//! Component classification.
//!
//! A function-like node is a UI component iff its body contains a JSX
//! element or fragment anywhere: directly returned, nested in a
//! conditional, or produced inside a callback. Anything else is a plain
//! function.

use oxc_ast::ast::{
    ArrowFunctionExpression, Expression, FormalParameters, Function, TSTypeAnnotation,
};

use crate::walk::{scan_statement, BodyScan};

/// Uniform view over the two function-like node shapes.
#[derive(Clone, Copy)]
pub enum FunctionLike<'a, 'b> {
    Function(&'b Function<'a>),
    Arrow(&'b ArrowFunctionExpression<'a>),
}

impl<'a, 'b> FunctionLike<'a, 'b> {
    /// Match a (peeled) expression that is itself a function.
    pub fn from_expression(expr: &'b Expression<'a>) -> Option<Self> {
        match peel_expression(expr) {
            Expression::FunctionExpression(func) => Some(FunctionLike::Function(func)),
            Expression::ArrowFunctionExpression(arrow) => Some(FunctionLike::Arrow(arrow)),
            _ => None,
        }
    }

    pub fn params(&self) -> &'b FormalParameters<'a> {
        match self {
            FunctionLike::Function(func) => &func.params,
            FunctionLike::Arrow(arrow) => &arrow.params,
        }
    }

    pub fn return_type(&self) -> Option<&'b TSTypeAnnotation<'a>> {
        match self {
            FunctionLike::Function(func) => func.return_type.as_deref(),
            FunctionLike::Arrow(arrow) => arrow.return_type.as_deref(),
        }
    }

    pub fn is_async(&self) -> bool {
        match self {
            FunctionLike::Function(func) => func.r#async,
            FunctionLike::Arrow(arrow) => arrow.r#async,
        }
    }

    /// Declared identifier, when the node carries one.
    pub fn name(&self) -> Option<&'b str> {
        match self {
            FunctionLike::Function(func) => func.id.as_ref().map(|id| id.name.as_str()),
            FunctionLike::Arrow(_) => None,
        }
    }

    /// Run the generic body descent once over this node's body.
    pub fn scan_body(&self) -> BodyScan {
        let mut scan = BodyScan::new();
        match self {
            FunctionLike::Function(func) => {
                if let Some(body) = &func.body {
                    for stmt in body.statements.iter() {
                        scan_statement(&mut scan, stmt);
                    }
                }
            }
            FunctionLike::Arrow(arrow) => {
                for stmt in arrow.body.statements.iter() {
                    scan_statement(&mut scan, stmt);
                }
            }
        }
        scan
    }
}

/// Unwrap parentheses and TypeScript assertion wrappers around an expression.
pub fn peel_expression<'a, 'b>(expr: &'b Expression<'a>) -> &'b Expression<'a> {
    match expr {
        Expression::ParenthesizedExpression(paren) => peel_expression(&paren.expression),
        Expression::TSAsExpression(ts_as) => peel_expression(&ts_as.expression),
        Expression::TSSatisfiesExpression(ts_satisfies) => {
            peel_expression(&ts_satisfies.expression)
        }
        Expression::TSNonNullExpression(ts_non_null) => peel_expression(&ts_non_null.expression),
        _ => expr,
    }
}

/// True iff the body contains a JSX construct anywhere.
pub fn is_component(func: &FunctionLike<'_, '_>) -> bool {
    func.scan_body().has_markup
}
