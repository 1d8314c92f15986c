#![allow(non_upper_case_globals)]

mod ast_helpers;
pub mod kind;
pub mod linter;
mod macros;
mod rules;
pub mod scope;
#[cfg(test)]
mod tests;
mod text;
mod utils;
mod visit;

pub use linter::{
    apply_fixes, run_for_slice, Config, ConfigBuilder, FileRunResult, Fix, LintError, Plugin,
    Rule, RuleListenerQuery, RuleMeta, ViolationWithContext,
};
pub use rules::prefer_t_regex_rule;
pub use text::SourceTextProvider;
pub use tree_sitter;

pub fn instantiate() -> Plugin {
    Plugin {
        name: "ava".to_owned(),
        rules: vec![prefer_t_regex_rule()],
    }
}
