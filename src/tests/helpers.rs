use std::sync::Arc;

use derive_builder::Builder;
use tree_sitter::{Node, Tree};

use crate::{
    kind::Kind,
    linter::{self, run_for_slice, ConfigBuilder, Plugin, Rule, ViolationWithContext},
};

pub fn tracing_subscribe() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn parse(source_text: &str) -> Tree {
    linter::parse(source_text).unwrap()
}

/// Nodes of `kind` in pre-order.
pub fn find_nodes_of_kind<'a>(tree: &'a Tree, kind: Kind) -> Vec<Node<'a>> {
    let mut nodes = Vec::new();
    let mut cursor = tree.walk();
    'outer: loop {
        if cursor.node().is_named() && cursor.node().kind() == kind {
            nodes.push(cursor.node());
        }
        if cursor.goto_first_child() || cursor.goto_next_sibling() {
            continue;
        }
        while cursor.goto_parent() {
            if cursor.goto_next_sibling() {
                continue 'outer;
            }
        }
        break;
    }
    nodes
}

pub fn find_first_node_of_kind<'a>(tree: &'a Tree, kind: Kind) -> Option<Node<'a>> {
    find_nodes_of_kind(tree, kind).into_iter().next()
}

/// Wraps `body` in an AVA test callback with `t` in scope.
pub fn ava_test(body: &str) -> String {
    format!("const test = require('ava');\ntest(t => {{ {body} }});")
}

pub struct RuleTests {
    pub valid_tests: Vec<RuleTestValid>,
    pub invalid_tests: Vec<RuleTestInvalid>,
}

pub struct RuleTestValid {
    pub code: String,
}

pub struct RuleTestInvalid {
    pub code: String,
    pub output: Option<String>,
    pub errors: Vec<RuleTestExpectedError>,
}

#[derive(Builder, Clone, Debug, Default)]
#[builder(default, setter(strip_option))]
pub struct RuleTestExpectedError {
    #[builder(setter(into, strip_option))]
    pub message_id: Option<String>,
    #[builder(setter(into, strip_option))]
    pub message: Option<String>,
    pub type_: Option<Kind>,
    pub line: Option<usize>,
    pub column: Option<usize>,
    pub end_line: Option<usize>,
    pub end_column: Option<usize>,
}

impl RuleTestExpectedError {
    fn assert_matches(&self, violation: &ViolationWithContext, code: &str) {
        if let Some(message_id) = self.message_id.as_ref() {
            assert_eq!(&violation.message_id, message_id, "message id for {code:?}");
        }
        if let Some(message) = self.message.as_ref() {
            assert_eq!(&violation.message, message, "message for {code:?}");
        }
        if let Some(type_) = self.type_ {
            assert_eq!(violation.kind, type_, "node kind for {code:?}");
        }
        if let Some(line) = self.line {
            assert_eq!(violation.line, line, "line for {code:?}");
        }
        if let Some(column) = self.column {
            assert_eq!(violation.column, column, "column for {code:?}");
        }
        if let Some(end_line) = self.end_line {
            assert_eq!(violation.end_line, end_line, "end line for {code:?}");
        }
        if let Some(end_column) = self.end_column {
            assert_eq!(violation.end_column, end_column, "end column for {code:?}");
        }
    }
}

pub struct RuleTester;

impl RuleTester {
    pub fn run(rule: Arc<dyn Rule>, rule_tests: RuleTests) {
        tracing_subscribe();

        let plugin = Plugin {
            name: "test".to_owned(),
            rules: vec![rule],
        };
        let config = ConfigBuilder::default().fix(true).build().unwrap();

        for valid_test in rule_tests.valid_tests {
            let result = run_for_slice(&valid_test.code, "test.js", &plugin, &config).unwrap();
            assert!(
                result.violations.is_empty(),
                "Expected no violations for {:?}, got: {:#?}",
                valid_test.code,
                result.violations,
            );
        }

        for invalid_test in rule_tests.invalid_tests {
            let result = run_for_slice(&invalid_test.code, "test.js", &plugin, &config).unwrap();
            assert_eq!(
                result.violations.len(),
                invalid_test.errors.len(),
                "Wrong number of violations for {:?}: {:#?}",
                invalid_test.code,
                result.violations,
            );
            for (expected, violation) in invalid_test.errors.iter().zip(&result.violations) {
                expected.assert_matches(violation, &invalid_test.code);
            }
            assert_eq!(
                result.fixed_source.as_deref(),
                Some(
                    invalid_test
                        .output
                        .as_deref()
                        .unwrap_or(&invalid_test.code)
                ),
                "Wrong fix output for {:?}",
                invalid_test.code,
            );
        }
    }
}

#[macro_export]
macro_rules! rule_tests {
    (
        valid => [
            $($valid:tt),* $(,)?
        ],
        invalid => [
            $($invalid:tt),* $(,)?
        ] $(,)?
    ) => {
        $crate::tests::helpers::RuleTests {
            valid_tests: vec![$($crate::rule_test_valid!($valid)),*],
            invalid_tests: vec![$($crate::rule_test_invalid!($invalid)),*],
        }
    };
}

#[macro_export]
macro_rules! rule_test_valid {
    ({
        code => $code:expr
        $(,)?
    }) => {
        $crate::tests::helpers::RuleTestValid {
            code: ($code).to_string(),
        }
    };
    ($code:expr) => {
        $crate::tests::helpers::RuleTestValid {
            code: ($code).to_string(),
        }
    };
}

#[macro_export]
macro_rules! rule_test_invalid {
    ({
        code => $code:expr
        $(, output => $output:expr)?
        , errors => [$($error:tt),* $(,)?]
        $(,)?
    }) => {
        $crate::tests::helpers::RuleTestInvalid {
            code: ($code).to_string(),
            output: None$(.or(Some(($output).to_string())))?,
            errors: vec![$($crate::rule_test_expected_error!($error)),*],
        }
    };
}

#[macro_export]
macro_rules! rule_test_expected_error {
    ({ $($key:tt => $value:expr),* $(,)? }) => {{
        #[allow(unused_mut)]
        let mut builder = $crate::tests::helpers::RuleTestExpectedErrorBuilder::default();
        $($crate::rule_test_expected_error!(@set builder, $key, $value);)*
        builder.build().unwrap()
    }};
    (@set $builder:ident, type, $value:expr) => {
        $builder.type_($value);
    };
    (@set $builder:ident, $key:ident, $value:expr) => {
        $builder.$key($value);
    };
}
