use std::collections::BTreeMap;

use serde::Serialize;
use tree_sitter::{Node, Point};

use super::{Edit, Fix, Fixer};
use crate::kind::Kind;

/// A finding as reported by a rule, before it is resolved against the file.
#[derive(Debug)]
pub struct Violation<'a> {
    pub node: Node<'a>,
    pub message_id: &'static str,
    pub data: BTreeMap<&'static str, String>,
    pub edits: Option<Vec<Edit>>,
}

impl<'a> Violation<'a> {
    pub fn new(node: Node<'a>, message_id: &'static str) -> Self {
        Self {
            node,
            message_id,
            data: Default::default(),
            edits: None,
        }
    }

    pub fn with_data(mut self, key: &'static str, value: impl ToString) -> Self {
        self.data.insert(key, value.to_string());
        self
    }

    pub fn with_fix(mut self, fix: impl FnOnce(&mut Fixer)) -> Self {
        let mut fixer = Fixer::default();
        fix(&mut fixer);
        self.edits = Some(fixer.into_edits());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ViolationWithContext {
    pub rule_name: String,
    pub message_id: String,
    pub message: String,
    pub start_byte: usize,
    pub end_byte: usize,
    pub line: usize,
    pub column: usize,
    pub end_line: usize,
    pub end_column: usize,
    pub kind: Kind,
    pub fix: Option<Fix>,
}

impl ViolationWithContext {
    pub(crate) fn new(
        rule_name: &str,
        violation: &Violation,
        message: String,
        fix: Option<Fix>,
    ) -> Self {
        let (line, column) = one_based(violation.node.start_position());
        let (end_line, end_column) = one_based(violation.node.end_position());
        Self {
            rule_name: rule_name.to_owned(),
            message_id: violation.message_id.to_owned(),
            message,
            start_byte: violation.node.start_byte(),
            end_byte: violation.node.end_byte(),
            line,
            column,
            end_line,
            end_column,
            kind: violation.node.kind(),
            fix,
        }
    }
}

fn one_based(point: Point) -> (usize, usize) {
    (point.row + 1, point.column + 1)
}

/// Fills `{{key}}` placeholders in a message template.
pub(crate) fn interpolate(template: &str, data: &BTreeMap<&'static str, String>) -> String {
    data.iter().fold(template.to_owned(), |message, (key, value)| {
        message.replace(&format!("{{{{{key}}}}}"), value)
    })
}

#[cfg(test)]
mod tests {
    use speculoos::prelude::*;

    use super::*;

    #[test]
    fn test_interpolate() {
        let data = [("assertion", "notRegex".to_owned())].into_iter().collect();

        assert_that!(interpolate(
            "Prefer using the `t.{{assertion}}()` assertion.",
            &data
        ))
        .is_equal_to("Prefer using the `t.notRegex()` assertion.".to_owned());
        assert_that!(interpolate("No {{placeholders}} filled.", &Default::default()))
            .is_equal_to("No {{placeholders}} filled.".to_owned());
    }
}
