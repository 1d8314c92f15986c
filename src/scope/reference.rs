use id_arena::Id;
use tree_sitter::Node;

use super::{
    scope::{Scope, _Scope},
    variable::{Variable, _Variable},
    ScopeManager,
};

/// An identifier occurrence together with the variable it resolves to, if
/// any. An unresolved reference names something the file never declares
/// (a global, or a binding the host provides).
#[derive(Debug)]
pub struct Reference<'a, 'b> {
    identifier: Node<'a>,
    from: Id<_Scope<'a>>,
    resolved: Option<Id<_Variable<'a>>>,
    scope_manager: &'b ScopeManager<'a>,
}

impl<'a, 'b> Reference<'a, 'b> {
    pub fn new(
        identifier: Node<'a>,
        from: Id<_Scope<'a>>,
        resolved: Option<Id<_Variable<'a>>>,
        scope_manager: &'b ScopeManager<'a>,
    ) -> Self {
        Self {
            identifier,
            from,
            resolved,
            scope_manager,
        }
    }

    pub fn identifier(&self) -> Node<'a> {
        self.identifier
    }

    pub fn from(&self) -> Scope<'a, 'b> {
        self.scope_manager.borrow_scope(self.from)
    }

    pub fn resolved(&self) -> Option<Variable<'a, 'b>> {
        self.resolved
            .map(|resolved| self.scope_manager.borrow_variable(resolved))
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }
}
