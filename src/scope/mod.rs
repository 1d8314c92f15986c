mod arena;
mod definition;
mod pattern_visitor;
mod reference;
mod referencer;
#[allow(clippy::module_inception)]
mod scope;
mod scope_manager;
mod variable;

pub use definition::Definition;
pub use reference::Reference;
use referencer::Referencer;
pub use scope::{Scope, ScopeType};
pub use scope_manager::ScopeManager;
use tree_sitter::Tree;
pub use variable::{Variable, VariableType};

use crate::visit::walk_tree;

pub fn analyze<'a>(tree: &'a Tree, source_text: &'a str) -> ScopeManager<'a> {
    let mut scope_manager = ScopeManager::new(source_text);
    let mut referencer = Referencer::new(&mut scope_manager);

    walk_tree(tree, &mut referencer);

    assert!(
        scope_manager.maybe_current_scope().is_none(),
        "current_scope should be null."
    );

    scope_manager
}
