use std::{collections::BTreeMap, fmt, sync::Arc};

use serde::Serialize;
use tree_sitter::Node;

use super::QueryMatchContext;

#[derive(Clone, Debug, Serialize)]
pub struct RuleMeta {
    pub name: String,
    pub description: String,
    pub docs_url: String,
    pub fixable: bool,
    pub messages: BTreeMap<String, String>,
    pub schema: serde_json::Value,
}

impl RuleMeta {
    /// The schema of a rule that takes no options.
    pub fn no_options_schema() -> serde_json::Value {
        serde_json::Value::Array(Default::default())
    }
}

/// A tree-sitter query a rule listens to. Every node captured as
/// `capture_name` is handed to the rule's callback for this listener.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RuleListenerQuery {
    pub query: String,
    /// May be omitted when the query has exactly one capture.
    pub capture_name: Option<String>,
}

impl RuleListenerQuery {
    pub fn new(query: impl Into<String>, capture_name: Option<&str>) -> Self {
        Self {
            query: query.into(),
            capture_name: capture_name.map(ToOwned::to_owned),
        }
    }
}

pub trait Rule: Send + Sync {
    fn meta(&self) -> &RuleMeta;

    fn listener_queries(&self) -> &[RuleListenerQuery];

    /// Called once per captured node, in tree order. `listener_index`
    /// indexes into `listener_queries()`.
    fn on_query_match<'a>(
        &self,
        listener_index: usize,
        node: Node<'a>,
        context: &mut QueryMatchContext<'a, '_>,
    );
}

impl fmt::Debug for dyn Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.meta().name)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct Plugin {
    pub name: String,
    pub rules: Vec<Arc<dyn Rule>>,
}

impl Plugin {
    pub fn rule(&self, name: &str) -> Option<&Arc<dyn Rule>> {
        self.rules.iter().find(|rule| rule.meta().name == name)
    }
}
