use std::{borrow::Cow, collections::HashMap};

use id_arena::{Arena, Id};
use tracing::{instrument, trace};
use tree_sitter::Node;

use super::{
    arena::AllArenas,
    definition::_Definition,
    variable::{Variable, _Variable},
    ScopeManager,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScopeType {
    Global,
    Function,
    Block,
    For,
    Catch,
    Class,
    Switch,
}

impl ScopeType {
    pub fn is_variable_scope(&self) -> bool {
        matches!(self, Self::Global | Self::Function)
    }
}

#[derive(Debug)]
pub struct _Scope<'a> {
    id: Id<Self>,
    type_: ScopeType,
    block: Node<'a>,
    upper: Option<Id<Self>>,
    variable_scope: Id<Self>,
    child_scopes: Vec<Id<Self>>,
    set: HashMap<Cow<'a, str>, Id<_Variable<'a>>>,
    variables: Vec<Id<_Variable<'a>>>,
}

impl<'a> _Scope<'a> {
    pub fn new(
        arena: &mut Arena<Self>,
        type_: ScopeType,
        upper: Option<Id<Self>>,
        block: Node<'a>,
    ) -> Id<Self> {
        let upper_variable_scope = match (type_.is_variable_scope(), upper) {
            (false, Some(upper)) => Some(arena[upper].variable_scope),
            _ => None,
        };
        let id = arena.alloc_with_id(|id| Self {
            id,
            type_,
            block,
            upper,
            variable_scope: upper_variable_scope.unwrap_or(id),
            child_scopes: Default::default(),
            set: Default::default(),
            variables: Default::default(),
        });
        if let Some(upper) = upper {
            arena[upper].child_scopes.push(id);
        }
        id
    }

    pub fn id(&self) -> Id<Self> {
        self.id
    }

    pub fn type_(&self) -> ScopeType {
        self.type_
    }

    pub fn block(&self) -> Node<'a> {
        self.block
    }

    pub fn maybe_upper(&self) -> Option<Id<Self>> {
        self.upper
    }

    pub fn variable_scope(&self) -> Id<Self> {
        self.variable_scope
    }

    pub fn get(&self, name: &str) -> Option<Id<_Variable<'a>>> {
        self.set.get(name).copied()
    }

    #[instrument(level = "trace", skip_all, fields(?name))]
    pub fn __define(
        arena: &mut AllArenas<'a>,
        scope: Id<Self>,
        name: Cow<'a, str>,
        identifier: Node<'a>,
        definition: Id<_Definition<'a>>,
    ) {
        let variable = match arena.get_scope(scope).get(&name) {
            Some(variable) => variable,
            None => {
                trace!("new variable");

                let variable = _Variable::new(&mut arena.variables, name.clone(), scope);
                let scope = arena.get_scope_mut(scope);
                scope.set.insert(name, variable);
                scope.variables.push(variable);
                variable
            }
        };

        let variable = &mut arena.variables[variable];
        variable.defs.push(definition);
        variable.identifiers.push(identifier);
    }
}

#[derive(Clone, Debug)]
pub struct Scope<'a, 'b> {
    scope: &'b _Scope<'a>,
    scope_manager: &'b ScopeManager<'a>,
}

impl<'a, 'b> Scope<'a, 'b> {
    pub fn new(scope: &'b _Scope<'a>, scope_manager: &'b ScopeManager<'a>) -> Self {
        Self {
            scope,
            scope_manager,
        }
    }

    pub fn id(&self) -> Id<_Scope<'a>> {
        self.scope.id
    }

    pub fn type_(&self) -> ScopeType {
        self.scope.type_
    }

    pub fn block(&self) -> Node<'a> {
        self.scope.block
    }

    pub fn maybe_upper(&self) -> Option<Self> {
        self.scope
            .upper
            .map(|upper| self.scope_manager.borrow_scope(upper))
    }

    pub fn variable_scope(&self) -> Self {
        self.scope_manager.borrow_scope(self.scope.variable_scope)
    }

    pub fn child_scopes(&self) -> impl Iterator<Item = Scope<'a, 'b>> + '_ {
        self.scope
            .child_scopes
            .iter()
            .map(|&child_scope| self.scope_manager.borrow_scope(child_scope))
    }

    pub fn variables(&self) -> impl Iterator<Item = Variable<'a, 'b>> + '_ {
        self.scope
            .variables
            .iter()
            .map(|&variable| self.scope_manager.borrow_variable(variable))
    }

    pub fn variable(&self, name: &str) -> Option<Variable<'a, 'b>> {
        self.scope
            .get(name)
            .map(|variable| self.scope_manager.borrow_variable(variable))
    }
}

impl<'a, 'b> PartialEq for Scope<'a, 'b> {
    fn eq(&self, other: &Self) -> bool {
        self.scope.id == other.scope.id
    }
}

impl<'a, 'b> Eq for Scope<'a, 'b> {}
