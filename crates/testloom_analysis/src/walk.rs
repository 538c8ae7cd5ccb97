//! Generic recursive body descent.
//!
//! A single hand-rolled walker feeds a [`BodyScan`] sink with the two facts
//! the analyzers need about a function body: whether it contains any JSX
//! construct, and which `use*` hooks it calls. The walker descends every
//! child slot of every node kind it knows (conditionals, callbacks, JSX
//! attributes and children, template literals), so it works on arbitrary
//! body fragments without any scope context.

use oxc_ast::ast::{
    Argument, ArrayExpressionElement, BindingPattern, BindingPatternKind, CallExpression,
    ChainElement, ClassElement, Expression, ForStatementInit, JSXAttributeItem, JSXAttributeValue,
    JSXChild, JSXElement, JSXExpression, JSXFragment, ObjectPropertyKind, Statement,
};
use testloom_kit::{CompactString, FxHashSet};

/// Accumulated facts about one function body.
#[derive(Debug, Default)]
pub struct BodyScan {
    /// A JSX element or fragment occurs somewhere in the body.
    pub has_markup: bool,
    /// Bare `use*` callees, first-seen order.
    pub hooks: Vec<CompactString>,
    seen_hooks: FxHashSet<CompactString>,
}

impl BodyScan {
    pub fn new() -> Self {
        Self::default()
    }

    fn record_hook(&mut self, name: &str) {
        if self.seen_hooks.insert(CompactString::new(name)) {
            self.hooks.push(CompactString::new(name));
        }
    }
}

/// Walk a statement and everything nested inside it.
pub fn scan_statement(scan: &mut BodyScan, stmt: &Statement<'_>) {
    match stmt {
        Statement::ExpressionStatement(expr_stmt) => {
            scan_expression(scan, &expr_stmt.expression);
        }

        Statement::VariableDeclaration(decl) => {
            for declarator in decl.declarations.iter() {
                scan_binding_pattern(scan, &declarator.id);
                if let Some(init) = &declarator.init {
                    scan_expression(scan, init);
                }
            }
        }

        Statement::FunctionDeclaration(func) => {
            if let Some(body) = &func.body {
                for stmt in body.statements.iter() {
                    scan_statement(scan, stmt);
                }
            }
        }

        Statement::ClassDeclaration(class) => {
            for element in class.body.body.iter() {
                match element {
                    ClassElement::MethodDefinition(method) => {
                        if let Some(body) = &method.value.body {
                            for stmt in body.statements.iter() {
                                scan_statement(scan, stmt);
                            }
                        }
                    }
                    ClassElement::PropertyDefinition(prop) => {
                        if let Some(value) = &prop.value {
                            scan_expression(scan, value);
                        }
                    }
                    _ => {}
                }
            }
        }

        Statement::ReturnStatement(ret) => {
            if let Some(arg) = &ret.argument {
                scan_expression(scan, arg);
            }
        }

        Statement::ThrowStatement(throw) => {
            scan_expression(scan, &throw.argument);
        }

        Statement::BlockStatement(block) => {
            for stmt in block.body.iter() {
                scan_statement(scan, stmt);
            }
        }

        Statement::IfStatement(if_stmt) => {
            scan_expression(scan, &if_stmt.test);
            scan_statement(scan, &if_stmt.consequent);
            if let Some(alternate) = &if_stmt.alternate {
                scan_statement(scan, alternate);
            }
        }

        Statement::ForStatement(for_stmt) => {
            if let Some(init) = &for_stmt.init {
                match init {
                    ForStatementInit::VariableDeclaration(decl) => {
                        for declarator in decl.declarations.iter() {
                            if let Some(init_expr) = &declarator.init {
                                scan_expression(scan, init_expr);
                            }
                        }
                    }
                    _ => {
                        if let Some(expr) = init.as_expression() {
                            scan_expression(scan, expr);
                        }
                    }
                }
            }
            if let Some(test) = &for_stmt.test {
                scan_expression(scan, test);
            }
            if let Some(update) = &for_stmt.update {
                scan_expression(scan, update);
            }
            scan_statement(scan, &for_stmt.body);
        }

        Statement::ForInStatement(for_in) => {
            scan_expression(scan, &for_in.right);
            scan_statement(scan, &for_in.body);
        }

        Statement::ForOfStatement(for_of) => {
            scan_expression(scan, &for_of.right);
            scan_statement(scan, &for_of.body);
        }

        Statement::WhileStatement(while_stmt) => {
            scan_expression(scan, &while_stmt.test);
            scan_statement(scan, &while_stmt.body);
        }

        Statement::DoWhileStatement(do_while) => {
            scan_statement(scan, &do_while.body);
            scan_expression(scan, &do_while.test);
        }

        Statement::SwitchStatement(switch_stmt) => {
            scan_expression(scan, &switch_stmt.discriminant);
            for case in switch_stmt.cases.iter() {
                if let Some(test) = &case.test {
                    scan_expression(scan, test);
                }
                for stmt in case.consequent.iter() {
                    scan_statement(scan, stmt);
                }
            }
        }

        Statement::TryStatement(try_stmt) => {
            for stmt in try_stmt.block.body.iter() {
                scan_statement(scan, stmt);
            }
            if let Some(handler) = &try_stmt.handler {
                for stmt in handler.body.body.iter() {
                    scan_statement(scan, stmt);
                }
            }
            if let Some(finalizer) = &try_stmt.finalizer {
                for stmt in finalizer.body.iter() {
                    scan_statement(scan, stmt);
                }
            }
        }

        Statement::LabeledStatement(labeled) => {
            scan_statement(scan, &labeled.body);
        }

        _ => {}
    }
}

/// Walk an expression and everything nested inside it.
pub fn scan_expression(scan: &mut BodyScan, expr: &Expression<'_>) {
    match expr {
        Expression::JSXElement(element) => scan_jsx_element(scan, element),
        Expression::JSXFragment(fragment) => scan_jsx_fragment(scan, fragment),

        Expression::ArrowFunctionExpression(arrow) => {
            for stmt in arrow.body.statements.iter() {
                scan_statement(scan, stmt);
            }
        }

        Expression::FunctionExpression(func) => {
            if let Some(body) = &func.body {
                for stmt in body.statements.iter() {
                    scan_statement(scan, stmt);
                }
            }
        }

        Expression::CallExpression(call) => scan_call(scan, call),

        Expression::NewExpression(new_expr) => {
            scan_expression(scan, &new_expr.callee);
            scan_arguments(scan, &new_expr.arguments);
        }

        Expression::ConditionalExpression(cond) => {
            scan_expression(scan, &cond.test);
            scan_expression(scan, &cond.consequent);
            scan_expression(scan, &cond.alternate);
        }

        Expression::LogicalExpression(logical) => {
            scan_expression(scan, &logical.left);
            scan_expression(scan, &logical.right);
        }
        Expression::BinaryExpression(binary) => {
            scan_expression(scan, &binary.left);
            scan_expression(scan, &binary.right);
        }

        Expression::StaticMemberExpression(member) => {
            scan_expression(scan, &member.object);
        }
        Expression::ComputedMemberExpression(member) => {
            scan_expression(scan, &member.object);
            scan_expression(scan, &member.expression);
        }
        Expression::PrivateFieldExpression(field) => {
            scan_expression(scan, &field.object);
        }

        Expression::ChainExpression(chain) => match &chain.expression {
            ChainElement::CallExpression(call) => scan_call(scan, call),
            ChainElement::TSNonNullExpression(inner) => scan_expression(scan, &inner.expression),
            ChainElement::StaticMemberExpression(member) => {
                scan_expression(scan, &member.object);
            }
            ChainElement::ComputedMemberExpression(member) => {
                scan_expression(scan, &member.object);
                scan_expression(scan, &member.expression);
            }
            ChainElement::PrivateFieldExpression(field) => {
                scan_expression(scan, &field.object);
            }
        },

        Expression::ArrayExpression(arr) => {
            for elem in arr.elements.iter() {
                match elem {
                    ArrayExpressionElement::SpreadElement(spread) => {
                        scan_expression(scan, &spread.argument);
                    }
                    ArrayExpressionElement::Elision(_) => {}
                    _ => {
                        if let Some(expr) = elem.as_expression() {
                            scan_expression(scan, expr);
                        }
                    }
                }
            }
        }

        Expression::ObjectExpression(obj) => {
            for prop in obj.properties.iter() {
                match prop {
                    ObjectPropertyKind::ObjectProperty(p) => {
                        scan_expression(scan, &p.value);
                    }
                    ObjectPropertyKind::SpreadProperty(spread) => {
                        scan_expression(scan, &spread.argument);
                    }
                }
            }
        }

        Expression::AwaitExpression(await_expr) => {
            scan_expression(scan, &await_expr.argument);
        }
        Expression::UnaryExpression(unary) => {
            scan_expression(scan, &unary.argument);
        }
        Expression::YieldExpression(yield_expr) => {
            if let Some(arg) = &yield_expr.argument {
                scan_expression(scan, arg);
            }
        }

        Expression::SequenceExpression(seq) => {
            for expr in seq.expressions.iter() {
                scan_expression(scan, expr);
            }
        }

        Expression::ParenthesizedExpression(paren) => {
            scan_expression(scan, &paren.expression);
        }

        Expression::AssignmentExpression(assign) => {
            scan_expression(scan, &assign.right);
        }

        Expression::TemplateLiteral(template) => {
            for expr in template.expressions.iter() {
                scan_expression(scan, expr);
            }
        }
        Expression::TaggedTemplateExpression(tagged) => {
            scan_expression(scan, &tagged.tag);
            for expr in tagged.quasi.expressions.iter() {
                scan_expression(scan, expr);
            }
        }

        Expression::TSAsExpression(ts_as) => {
            scan_expression(scan, &ts_as.expression);
        }
        Expression::TSSatisfiesExpression(ts_satisfies) => {
            scan_expression(scan, &ts_satisfies.expression);
        }
        Expression::TSNonNullExpression(ts_non_null) => {
            scan_expression(scan, &ts_non_null.expression);
        }

        _ => {}
    }
}

fn scan_call(scan: &mut BodyScan, call: &CallExpression<'_>) {
    // A hook is any call whose callee is a bare identifier with the `use`
    // prefix; member calls like `utils.useThing()` do not count.
    if let Expression::Identifier(id) = &call.callee {
        if id.name.as_str().starts_with("use") {
            scan.record_hook(id.name.as_str());
        }
    }

    scan_expression(scan, &call.callee);
    scan_arguments(scan, &call.arguments);
}

fn scan_arguments(scan: &mut BodyScan, arguments: &oxc_allocator::Vec<'_, Argument<'_>>) {
    for arg in arguments.iter() {
        match arg {
            Argument::SpreadElement(spread) => scan_expression(scan, &spread.argument),
            _ => {
                if let Some(expr) = arg.as_expression() {
                    scan_expression(scan, expr);
                }
            }
        }
    }
}

/// Destructuring defaults may hide calls (`const { x = useStore() } = props`).
fn scan_binding_pattern(scan: &mut BodyScan, pattern: &BindingPattern<'_>) {
    match &pattern.kind {
        BindingPatternKind::BindingIdentifier(_) => {}
        BindingPatternKind::ObjectPattern(obj) => {
            for prop in obj.properties.iter() {
                scan_binding_pattern(scan, &prop.value);
            }
            if let Some(rest) = &obj.rest {
                scan_binding_pattern(scan, &rest.argument);
            }
        }
        BindingPatternKind::ArrayPattern(arr) => {
            for elem in arr.elements.iter().flatten() {
                scan_binding_pattern(scan, elem);
            }
            if let Some(rest) = &arr.rest {
                scan_binding_pattern(scan, &rest.argument);
            }
        }
        BindingPatternKind::AssignmentPattern(assign) => {
            scan_binding_pattern(scan, &assign.left);
            scan_expression(scan, &assign.right);
        }
    }
}

fn scan_jsx_element(scan: &mut BodyScan, element: &JSXElement<'_>) {
    scan.has_markup = true;

    for attribute in element.opening_element.attributes.iter() {
        match attribute {
            JSXAttributeItem::Attribute(attr) => {
                if let Some(value) = &attr.value {
                    scan_jsx_attribute_value(scan, value);
                }
            }
            JSXAttributeItem::SpreadAttribute(spread) => {
                scan_expression(scan, &spread.argument);
            }
        }
    }

    scan_jsx_children(scan, &element.children);
}

fn scan_jsx_fragment(scan: &mut BodyScan, fragment: &JSXFragment<'_>) {
    scan.has_markup = true;
    scan_jsx_children(scan, &fragment.children);
}

fn scan_jsx_attribute_value(scan: &mut BodyScan, value: &JSXAttributeValue<'_>) {
    match value {
        JSXAttributeValue::ExpressionContainer(container) => {
            scan_jsx_expression(scan, &container.expression);
        }
        JSXAttributeValue::Element(element) => scan_jsx_element(scan, element),
        JSXAttributeValue::Fragment(fragment) => scan_jsx_fragment(scan, fragment),
        JSXAttributeValue::StringLiteral(_) => {}
    }
}

fn scan_jsx_children(scan: &mut BodyScan, children: &oxc_allocator::Vec<'_, JSXChild<'_>>) {
    for child in children.iter() {
        match child {
            JSXChild::Element(element) => scan_jsx_element(scan, element),
            JSXChild::Fragment(fragment) => scan_jsx_fragment(scan, fragment),
            JSXChild::ExpressionContainer(container) => {
                scan_jsx_expression(scan, &container.expression);
            }
            JSXChild::Spread(spread) => scan_expression(scan, &spread.expression),
            JSXChild::Text(_) => {}
        }
    }
}

fn scan_jsx_expression(scan: &mut BodyScan, expression: &JSXExpression<'_>) {
    if let Some(expr) = expression.as_expression() {
        scan_expression(scan, expr);
    }
}
