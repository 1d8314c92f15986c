use std::{cmp::Reverse, sync::Arc};

use itertools::Itertools;
use serde::Serialize;
use streaming_iterator::StreamingIterator;
use tracing::{debug, instrument, trace};
use tree_sitter::{Language, Node, Parser, Query, QueryCursor, Tree};

use super::{
    apply_fixes, Config, FileRunContext, Fix, LintError, Plugin, QueryMatchContext, Rule,
    ViolationWithContext,
};
use crate::scope;

/// Upper bound on lint-and-fix passes over one file.
const MAX_FIX_PASSES: usize = 10;

#[derive(Clone, Debug, Default, Serialize)]
pub struct FileRunResult {
    pub violations: Vec<ViolationWithContext>,
    pub fixed_source: Option<String>,
}

fn language() -> Language {
    tree_sitter_javascript::LANGUAGE.into()
}

pub fn parse(source_text: &str) -> Result<Tree, LintError> {
    parse_file(source_text, "<input>")
}

fn parse_file(source_text: &str, path: &str) -> Result<Tree, LintError> {
    let mut parser = Parser::new();
    parser.set_language(&language())?;
    parser
        .parse(source_text, None)
        .ok_or_else(|| LintError::Parse {
            path: path.to_owned(),
        })
}

fn get_enabled_rules(plugin: &Plugin, config: &Config) -> Result<Vec<Arc<dyn Rule>>, LintError> {
    if config.rules.is_empty() {
        return Ok(plugin.rules.clone());
    }
    config
        .rules
        .iter()
        .map(|name| {
            plugin
                .rule(name)
                .cloned()
                .ok_or_else(|| LintError::UnknownRule(name.clone()))
        })
        .collect()
}

struct CompiledListener {
    rule_index: usize,
    listener_index: usize,
    query: Query,
    capture_index: u32,
}

fn compile_listeners(rules: &[Arc<dyn Rule>]) -> Result<Vec<CompiledListener>, LintError> {
    let language = language();
    let mut compiled = Vec::new();
    for (rule_index, rule) in rules.iter().enumerate() {
        let rule_name = &rule.meta().name;
        for (listener_index, listener) in rule.listener_queries().iter().enumerate() {
            let query = Query::new(&language, &listener.query).map_err(|source| {
                LintError::Query {
                    rule: rule_name.clone(),
                    source,
                }
            })?;
            let capture_index = match listener.capture_name.as_deref() {
                Some(capture_name) => query.capture_index_for_name(capture_name),
                None => (query.capture_names().len() == 1).then_some(0),
            }
            .ok_or_else(|| LintError::MissingCapture {
                rule: rule_name.clone(),
            })?;
            compiled.push(CompiledListener {
                rule_index,
                listener_index,
                query,
                capture_index,
            });
        }
    }
    Ok(compiled)
}

/// Captured nodes paired with the listener that captured them, in tree
/// order. A node captured twice by one listener is only listed once.
fn get_listener_matches<'a>(
    tree: &'a Tree,
    source_text: &str,
    listeners: &[CompiledListener],
) -> Vec<(Node<'a>, usize)> {
    let mut cursor = QueryCursor::new();
    let mut listener_matches = Vec::new();
    for (listener_order, listener) in listeners.iter().enumerate() {
        let mut matches = cursor.matches(&listener.query, tree.root_node(), source_text.as_bytes());
        while let Some(query_match) = matches.next() {
            listener_matches.extend(
                query_match
                    .captures
                    .iter()
                    .filter(|capture| capture.index == listener.capture_index)
                    .map(|capture| (capture.node, listener_order)),
            );
        }
    }
    listener_matches
        .into_iter()
        .sorted_by_key(|&(node, listener_order)| {
            (node.start_byte(), Reverse(node.end_byte()), listener_order)
        })
        .dedup()
        .collect()
}

fn lint_source(
    source_text: &str,
    path: &str,
    rules: &[Arc<dyn Rule>],
    listeners: &[CompiledListener],
) -> Result<Vec<ViolationWithContext>, LintError> {
    let tree = parse_file(source_text, path)?;

    let scope_manager = scope::analyze(&tree, source_text);
    let file_run_context = FileRunContext::new(path, source_text, &tree, scope_manager);

    let mut violations = Vec::new();
    for (node, listener_order) in get_listener_matches(&tree, source_text, listeners) {
        let listener = &listeners[listener_order];
        let rule = &rules[listener.rule_index];
        let mut context = QueryMatchContext::new(&file_run_context, &**rule, &mut violations);
        rule.on_query_match(listener.listener_index, node, &mut context);
    }

    Ok(violations
        .into_iter()
        .sorted_by(|a, b| {
            (a.start_byte, a.end_byte, &a.rule_name).cmp(&(b.start_byte, b.end_byte, &b.rule_name))
        })
        .collect())
}

fn get_fixes(violations: &[ViolationWithContext]) -> Vec<Fix> {
    violations
        .iter()
        .filter_map(|violation| violation.fix.clone())
        .collect()
}

/// Applies fixes and re-lints until a pass has nothing left to fix. Fixes
/// nested inside another fix's range are picked up by a later pass.
fn fix_source(
    source_text: &str,
    path: &str,
    rules: &[Arc<dyn Rule>],
    listeners: &[CompiledListener],
    violations: &[ViolationWithContext],
) -> Result<String, LintError> {
    let mut fixed_source = source_text.to_owned();
    let mut fixes = get_fixes(violations);
    for pass in 1..=MAX_FIX_PASSES {
        if fixes.is_empty() {
            break;
        }
        let next_source = apply_fixes(&fixed_source, &fixes);
        if next_source == fixed_source {
            break;
        }
        trace!(pass, fixes = fixes.len(), "applied fixes");
        fixed_source = next_source;
        if pass < MAX_FIX_PASSES {
            fixes = get_fixes(&lint_source(&fixed_source, path, rules, listeners)?);
        }
    }
    Ok(fixed_source)
}

/// Lints a single in-memory file. The reported violations are those of
/// `source_text` as given; `fixed_source` reflects every fix pass.
#[instrument(level = "debug", skip(source_text, plugin, config))]
pub fn run_for_slice(
    source_text: &str,
    path: &str,
    plugin: &Plugin,
    config: &Config,
) -> Result<FileRunResult, LintError> {
    let rules = get_enabled_rules(plugin, config)?;
    let listeners = compile_listeners(&rules)?;

    let violations = lint_source(source_text, path, &rules, &listeners)?;
    debug!(count = violations.len(), "finished linting");

    let fixed_source = config
        .fix
        .then(|| fix_source(source_text, path, &rules, &listeners, &violations))
        .transpose()?;

    Ok(FileRunResult {
        violations,
        fixed_source,
    })
}
