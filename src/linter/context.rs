use std::borrow::Cow;

use tracing::warn;
use tree_sitter::{Node, Tree};

use super::{violation::interpolate, Fix, Rule, Violation, ViolationWithContext};
use crate::{scope::ScopeManager, text::SourceTextProvider};

/// Everything computed once per file and shared by every rule run over it.
pub struct FileRunContext<'a> {
    pub path: &'a str,
    pub file_contents: &'a str,
    pub tree: &'a Tree,
    pub scope_manager: ScopeManager<'a>,
}

impl<'a> FileRunContext<'a> {
    pub fn new(
        path: &'a str,
        file_contents: &'a str,
        tree: &'a Tree,
        scope_manager: ScopeManager<'a>,
    ) -> Self {
        Self {
            path,
            file_contents,
            tree,
            scope_manager,
        }
    }
}

/// What a rule sees while handling one node.
pub struct QueryMatchContext<'a, 'b> {
    pub file_run_context: &'b FileRunContext<'a>,
    rule: &'b dyn Rule,
    violations: &'b mut Vec<ViolationWithContext>,
}

impl<'a, 'b> QueryMatchContext<'a, 'b> {
    pub(crate) fn new(
        file_run_context: &'b FileRunContext<'a>,
        rule: &'b dyn Rule,
        violations: &'b mut Vec<ViolationWithContext>,
    ) -> Self {
        Self {
            file_run_context,
            rule,
            violations,
        }
    }

    pub fn get_node_text(&self, node: Node) -> Cow<'a, str> {
        self.file_run_context.file_contents.node_text(node)
    }

    pub fn scope_manager(&self) -> &'b ScopeManager<'a> {
        &self.file_run_context.scope_manager
    }

    pub fn report(&mut self, violation: Violation) {
        let rule = self.rule;
        let meta = rule.meta();
        let message = meta
            .messages
            .get(violation.message_id)
            .map(|template| interpolate(template, &violation.data))
            .unwrap_or_else(|| violation.message_id.to_owned());

        let fix = violation
            .edits
            .clone()
            .filter(|_| meta.fixable)
            .and_then(|edits| {
                Fix::from_edits(edits, self.file_run_context.file_contents)
                    .map_err(|error| {
                        warn!(
                            rule = %meta.name,
                            path = self.file_run_context.path,
                            %error,
                            "dropping fix"
                        );
                    })
                    .ok()
            });

        self.violations
            .push(ViolationWithContext::new(&meta.name, &violation, message, fix));
    }
}

impl<'a> SourceTextProvider<'a> for QueryMatchContext<'a, '_> {
    fn node_text(&self, node: Node) -> Cow<'a, str> {
        self.get_node_text(node)
    }
}

#[cfg(test)]
mod tests {
    use speculoos::prelude::*;

    use crate::{
        linter::{run_for_slice, ConfigBuilder, Plugin, Rule},
        rule, violation,
    };

    fn regex_literal_rule(fixable: bool) -> std::sync::Arc<dyn Rule> {
        rule! {
            name => "no-regex-literal",
            description => "Disallow regex literals.",
            docs_url => "https://example.com/no-regex-literal",
            fixable => fixable,
            messages => [
                unexpected => "Unexpected regex {{text}}.",
            ],
            listeners => [
                "(regex) @regex" => |node, context| {
                    context.report(violation! {
                        node => node,
                        message_id => "unexpected",
                        data => {
                            text => context.get_node_text(node),
                        },
                        fix => |fixer| {
                            fixer.replace_text(node, "a");
                            fixer.replace_text(node, "b");
                        },
                    });
                },
            ],
        }
    }

    fn run(rule: std::sync::Arc<dyn Rule>) -> crate::linter::FileRunResult {
        let plugin = Plugin {
            name: "test".to_owned(),
            rules: vec![rule],
        };
        let config = ConfigBuilder::default().fix(true).build().unwrap();
        run_for_slice("/x/;", "test.js", &plugin, &config).unwrap()
    }

    #[test]
    fn test_report_keeps_violation_with_colliding_edits() {
        let result = run(regex_literal_rule(true));

        assert_that!(result.violations).has_length(1);
        assert_that!(result.violations[0].message).is_equal_to("Unexpected regex /x/.".to_owned());
        assert_that!(result.violations[0].fix).is_none();
        assert_that!(result.fixed_source).is_equal_to(Some("/x/;".to_owned()));
    }

    #[test]
    fn test_report_ignores_fixes_of_unfixable_rules() {
        let result = run(regex_literal_rule(false));

        assert_that!(result.violations).has_length(1);
        assert_that!(result.violations[0].fix).is_none();
    }
}
