use std::sync::Arc;

use tracing::trace;
use tree_sitter::Node;

use crate::{
    ast_helpers::{get_call_expression_arguments, skip_parenthesized_expressions, NodeExtJs},
    kind::{CallExpression, False, SpreadElement, True},
    linter::{QueryMatchContext, Rule},
    return_if_none, rule,
    utils::{
        ast_utils::{get_root_object_name, get_static_property_name},
        ava_utils::{is_in_test_file, is_in_test_node},
        regex_utils::is_regex_expression,
    },
    violation,
};

const ASSERTION_OBJECT_NAME: &str = "t";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum TargetAssertion {
    Regex,
    NotRegex,
}

impl TargetAssertion {
    fn name(self) -> &'static str {
        match self {
            Self::Regex => "regex",
            Self::NotRegex => "notRegex",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum BooleanAssertion {
    True,
    False,
    Truthy,
    Falsy,
}

impl BooleanAssertion {
    const ALL: [Self; 4] = [Self::True, Self::False, Self::Truthy, Self::Falsy];

    fn name(self) -> &'static str {
        match self {
            Self::True => "true",
            Self::False => "false",
            Self::Truthy => "truthy",
            Self::Falsy => "falsy",
        }
    }

    fn target(self) -> TargetAssertion {
        match self {
            Self::True | Self::Truthy => TargetAssertion::Regex,
            Self::False | Self::Falsy => TargetAssertion::NotRegex,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum EqualityAssertion {
    Is,
    DeepEqual,
}

impl EqualityAssertion {
    const ALL: [Self; 2] = [Self::Is, Self::DeepEqual];

    fn name(self) -> &'static str {
        match self {
            Self::Is => "is",
            Self::DeepEqual => "deepEqual",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum AssertionKind {
    Boolean(BooleanAssertion),
    Equality(EqualityAssertion),
}

impl AssertionKind {
    fn from_name(name: &str) -> Option<Self> {
        BooleanAssertion::ALL
            .into_iter()
            .find(|assertion| assertion.name() == name)
            .map(Self::Boolean)
            .or_else(|| {
                EqualityAssertion::ALL
                    .into_iter()
                    .find(|assertion| assertion.name() == name)
                    .map(Self::Equality)
            })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum RegexMethod {
    Test,
    Match,
    Search,
}

impl RegexMethod {
    const ALL: [Self; 3] = [Self::Test, Self::Match, Self::Search];

    fn name(self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::Match => "match",
            Self::Search => "search",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.name() == name)
    }
}

struct RegexAssertionMatch<'a> {
    target: TargetAssertion,
    replacements: Vec<(Node<'a>, String)>,
}

fn get_method_call_parts<'a>(
    node: Node<'a>,
    context: &QueryMatchContext<'a, '_>,
) -> Option<(RegexMethod, Node<'a>, Option<Node<'a>>)> {
    let call = skip_parenthesized_expressions(node);
    if call.kind() != CallExpression {
        return None;
    }
    let callee = call.maybe_field("function")?;
    let method = RegexMethod::from_name(&get_static_property_name(callee, context)?)?;
    let object = callee.maybe_field("object")?;
    let first_argument = get_first_argument(call)?;
    Some((method, object, first_argument))
}

/// `Some(None)` for a call without arguments, `None` when the arguments
/// can't be read statically.
fn get_first_argument(call: Node) -> Option<Option<Node>> {
    let arguments = get_call_expression_arguments(call)?;
    if arguments
        .iter()
        .any(|argument| argument.kind() == SpreadElement)
    {
        return None;
    }
    Some(arguments.first().copied())
}

// t.true(r.test(s)), t.falsy(s.match(r))
fn match_boolean_assertion<'a>(
    arguments: &[Node<'a>],
    context: &QueryMatchContext<'a, '_>,
) -> Option<Vec<(Node<'a>, String)>> {
    let argument = *arguments.first()?;
    let (method, object, first_argument) = get_method_call_parts(argument, context)?;
    let (lookup, variable) = match method {
        RegexMethod::Test => (Some(object), first_argument),
        RegexMethod::Match | RegexMethod::Search => (first_argument, Some(object)),
    };
    let lookup = lookup?;
    let variable = variable?;
    if !is_regex_expression(Some(lookup), context.scope_manager()) {
        return None;
    }

    Some(vec![(
        argument,
        format!(
            "{}, {}",
            context.get_node_text(variable),
            context.get_node_text(lookup)
        ),
    )])
}

// t.is(r.test(s), true), t.deepEqual(false, r.test(s))
fn match_equality_assertion<'a>(
    arguments: &[Node<'a>],
    context: &QueryMatchContext<'a, '_>,
) -> Option<(TargetAssertion, Vec<(Node<'a>, String)>)> {
    let &[first, second, ..] = arguments else {
        return None;
    };
    let (regex_side, matchee) = match (
        is_regex_expression(Some(first), context.scope_manager()),
        is_regex_expression(Some(second), context.scope_manager()),
    ) {
        (true, false) => (first, second),
        (false, true) => (second, first),
        _ => return None,
    };

    let target = match skip_parenthesized_expressions(matchee).kind() {
        True => TargetAssertion::Regex,
        False => TargetAssertion::NotRegex,
        _ => return None,
    };

    let (method, pattern, tested) = get_method_call_parts(regex_side, context)?;
    if method != RegexMethod::Test {
        return None;
    }
    let tested = tested?;

    Some((
        target,
        vec![
            (first, context.get_node_text(tested).into_owned()),
            (second, context.get_node_text(pattern).into_owned()),
        ],
    ))
}

fn match_regex_assertion<'a>(
    node: Node<'a>,
    context: &QueryMatchContext<'a, '_>,
) -> Option<RegexAssertionMatch<'a>> {
    let callee = node.maybe_field("function")?;
    if get_root_object_name(callee, context).as_deref() != Some(ASSERTION_OBJECT_NAME) {
        return None;
    }
    let property = callee.maybe_field("property")?;
    let assertion_kind = AssertionKind::from_name(&property.text(context))?;

    let arguments = get_call_expression_arguments(node)?;
    if arguments
        .iter()
        .any(|argument| argument.kind() == SpreadElement)
    {
        return None;
    }

    let (target, mut replacements) = match assertion_kind {
        AssertionKind::Boolean(assertion) => (
            assertion.target(),
            match_boolean_assertion(&arguments, context)?,
        ),
        AssertionKind::Equality(assertion) => {
            trace!(assertion = assertion.name(), "matching equality assertion");
            match_equality_assertion(&arguments, context)?
        }
    };
    replacements.insert(0, (property, target.name().to_owned()));

    Some(RegexAssertionMatch {
        target,
        replacements,
    })
}

pub fn prefer_t_regex_rule() -> Arc<dyn Rule> {
    rule! {
        name => "prefer-t-regex",
        description => "Prefer using `t.regex()` to test regular expressions.",
        docs_url => "https://github.com/avajs/eslint-plugin-ava/blob/main/docs/rules/prefer-t-regex.md",
        fixable => true,
        messages => [
            prefer_t_regex => "Prefer using the `t.{{assertion}}()` assertion.",
        ],
        listeners => [
            r#"(call_expression
              function: (member_expression
                property: (property_identifier) @assertion (#match? @assertion "^(?:true|false|truthy|falsy|is|deepEqual)$")
              )
            ) @call_expression"# => {
                capture_name => "call_expression",
                callback => |node, context| {
                    let regex_assertion = return_if_none!(match_regex_assertion(node, context));
                    let scope_manager = context.scope_manager();
                    if !is_in_test_file(scope_manager) || !is_in_test_node(node, scope_manager) {
                        return;
                    }

                    context.report(violation! {
                        node => node,
                        message_id => "prefer_t_regex",
                        data => {
                            assertion => regex_assertion.target.name(),
                        },
                        fix => |fixer| {
                            for (node, text) in &regex_assertion.replacements {
                                fixer.replace_text(*node, text.clone());
                            }
                        },
                    });
                },
            },
        ],
    }
}
