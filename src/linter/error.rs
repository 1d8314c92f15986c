use std::ops;

#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error("failed to load the JavaScript grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("failed to parse {path}")]
    Parse { path: String },

    #[error("unknown rule: {0}")]
    UnknownRule(String),

    #[error("invalid listener query in rule {rule}: {source}")]
    Query {
        rule: String,
        source: tree_sitter::QueryError,
    },

    #[error("listener query in rule {rule} doesn't say which capture to listen to")]
    MissingCapture { rule: String },
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FixError {
    #[error("fix has no edits")]
    NoEdits,

    #[error("edit range {range:?} is not valid for a source of {len} bytes")]
    InvalidRange { range: ops::Range<usize>, len: usize },

    #[error("edit ranges {first:?} and {second:?} overlap")]
    OverlappingEdits {
        first: ops::Range<usize>,
        second: ops::Range<usize>,
    },
}
