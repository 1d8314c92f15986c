use std::borrow::Cow;

use id_arena::{Arena, Id};
use tree_sitter::Node;

use super::{
    definition::{Definition, _Definition},
    scope::{Scope, _Scope},
    ScopeManager,
};

#[derive(Debug)]
pub struct _Variable<'a> {
    pub name: Cow<'a, str>,
    pub identifiers: Vec<Node<'a>>,
    pub defs: Vec<Id<_Definition<'a>>>,
    pub scope: Id<_Scope<'a>>,
    id: Id<Self>,
}

impl<'a> _Variable<'a> {
    pub fn new(arena: &mut Arena<Self>, name: Cow<'a, str>, scope: Id<_Scope<'a>>) -> Id<Self> {
        arena.alloc_with_id(|id| Self {
            name,
            identifiers: Default::default(),
            defs: Default::default(),
            scope,
            id,
        })
    }
}

#[derive(Clone, Debug)]
pub struct Variable<'a, 'b> {
    variable: &'b _Variable<'a>,
    scope_manager: &'b ScopeManager<'a>,
}

impl<'a, 'b> Variable<'a, 'b> {
    pub fn new(variable: &'b _Variable<'a>, scope_manager: &'b ScopeManager<'a>) -> Self {
        Self {
            variable,
            scope_manager,
        }
    }

    pub fn name(&self) -> &str {
        &self.variable.name
    }

    pub fn scope(&self) -> Scope<'a, 'b> {
        self.scope_manager.borrow_scope(self.variable.scope)
    }

    pub fn defs(&self) -> impl DoubleEndedIterator<Item = Definition<'a, 'b>> + '_ {
        self.variable
            .defs
            .iter()
            .map(|&def| self.scope_manager.borrow_definition(def))
    }

    pub fn identifiers(&self) -> impl Iterator<Item = Node<'a>> + '_ {
        self.variable.identifiers.iter().copied()
    }
}

impl<'a, 'b> PartialEq for Variable<'a, 'b> {
    fn eq(&self, other: &Self) -> bool {
        self.variable.id == other.variable.id
    }
}

impl<'a, 'b> Eq for Variable<'a, 'b> {}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VariableType {
    CatchClause,
    Parameter,
    FunctionName,
    ClassName,
    Variable,
    ImportBinding,
}
