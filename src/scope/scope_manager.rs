use std::{borrow::Cow, collections::HashMap, fmt};

use id_arena::Id;
use tracing::trace;
use tree_sitter::Node;

use super::{
    arena::AllArenas,
    definition::{Definition, _Definition},
    reference::Reference,
    scope::{Scope, ScopeType, _Scope},
    variable::{Variable, _Variable},
};
use crate::{kind::Identifier, text::SourceTextProvider};

pub type NodeId = usize;

pub struct ScopeManager<'a> {
    pub scopes: Vec<Id<_Scope<'a>>>,
    global_scope: Option<Id<_Scope<'a>>>,
    pub __node_to_scope: HashMap<NodeId, Id<_Scope<'a>>>,
    pub __current_scope: Option<Id<_Scope<'a>>>,
    pub arena: AllArenas<'a>,
    pub source_text: &'a str,
}

impl<'a> ScopeManager<'a> {
    pub fn new(source_text: &'a str) -> Self {
        Self {
            scopes: Default::default(),
            global_scope: Default::default(),
            __node_to_scope: Default::default(),
            __current_scope: Default::default(),
            arena: Default::default(),
            source_text,
        }
    }

    fn __nest_scope(&mut self, type_: ScopeType, node: Node<'a>) -> Id<_Scope<'a>> {
        let scope = _Scope::new(&mut self.arena.scopes, type_, self.__current_scope, node);
        trace!(?scope, ?type_, "nesting scope");

        if type_ == ScopeType::Global {
            assert!(self.__current_scope.is_none());
            self.global_scope = Some(scope);
        }
        self.scopes.push(scope);
        self.__node_to_scope.insert(node.id(), scope);
        self.__current_scope = Some(scope);
        scope
    }

    pub fn __nest_global_scope(&mut self, node: Node<'a>) -> Id<_Scope<'a>> {
        self.__nest_scope(ScopeType::Global, node)
    }

    pub fn __nest_function_scope(&mut self, node: Node<'a>) -> Id<_Scope<'a>> {
        self.__nest_scope(ScopeType::Function, node)
    }

    pub fn __nest_block_scope(&mut self, node: Node<'a>) -> Id<_Scope<'a>> {
        self.__nest_scope(ScopeType::Block, node)
    }

    pub fn __nest_for_scope(&mut self, node: Node<'a>) -> Id<_Scope<'a>> {
        self.__nest_scope(ScopeType::For, node)
    }

    pub fn __nest_catch_scope(&mut self, node: Node<'a>) -> Id<_Scope<'a>> {
        self.__nest_scope(ScopeType::Catch, node)
    }

    pub fn __nest_class_scope(&mut self, node: Node<'a>) -> Id<_Scope<'a>> {
        self.__nest_scope(ScopeType::Class, node)
    }

    pub fn __nest_switch_scope(&mut self, node: Node<'a>) -> Id<_Scope<'a>> {
        self.__nest_scope(ScopeType::Switch, node)
    }

    pub fn maybe_current_scope(&self) -> Option<&_Scope<'a>> {
        self.__current_scope
            .map(|current_scope| self.arena.get_scope(current_scope))
    }

    pub fn __define(
        &mut self,
        scope: Id<_Scope<'a>>,
        identifier: Node<'a>,
        definition: Id<_Definition<'a>>,
    ) {
        let name = self.source_text.node_text(identifier);
        _Scope::__define(&mut self.arena, scope, name, identifier, definition);
    }

    pub(crate) fn borrow_scope<'b>(&'b self, scope: Id<_Scope<'a>>) -> Scope<'a, 'b> {
        Scope::new(self.arena.get_scope(scope), self)
    }

    pub(crate) fn borrow_variable<'b>(&'b self, variable: Id<_Variable<'a>>) -> Variable<'a, 'b> {
        Variable::new(self.arena.get_variable(variable), self)
    }

    pub(crate) fn borrow_definition<'b>(
        &'b self,
        definition: Id<_Definition<'a>>,
    ) -> Definition<'a, 'b> {
        Definition::new(self.arena.get_definition(definition))
    }

    pub fn scopes<'b>(&'b self) -> impl Iterator<Item = Scope<'a, 'b>> {
        self.scopes.iter().map(|&scope| self.borrow_scope(scope))
    }

    pub fn global_scope<'b>(&'b self) -> Option<Scope<'a, 'b>> {
        self.global_scope.map(|scope| self.borrow_scope(scope))
    }

    /// The innermost scope whose block contains `node`.
    pub fn get_scope<'b>(&'b self, node: Node<'a>) -> Option<Scope<'a, 'b>> {
        let mut current = Some(node);
        while let Some(node) = current {
            if let Some(&scope) = self.__node_to_scope.get(&node.id()) {
                return Some(self.borrow_scope(scope));
            }
            current = node.parent();
        }
        self.global_scope()
    }

    /// Resolves an identifier from the scope it appears in outward, the way
    /// a reference's `resolved` variable is determined.
    pub fn find_reference<'b>(&'b self, identifier: Node<'a>) -> Option<Reference<'a, 'b>> {
        if identifier.kind() != Identifier {
            return None;
        }
        let from = self.get_scope(identifier)?;
        let name = self.source_text.node_text(identifier);

        let mut scope = Some(from.clone());
        let mut resolved = None;
        while let Some(current) = scope {
            if let Some(variable) = self.arena.get_scope(current.id()).get(&name) {
                resolved = Some(variable);
                break;
            }
            scope = current.maybe_upper();
        }
        trace!(?name, resolved = resolved.is_some(), "finding reference");

        Some(Reference::new(identifier, from.id(), resolved, self))
    }
}

impl<'a> SourceTextProvider<'a> for ScopeManager<'a> {
    fn node_text(&self, node: Node) -> Cow<'a, str> {
        self.source_text.node_text(node)
    }
}

impl<'a> fmt::Debug for ScopeManager<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeManager")
            .field("scopes", &self.scopes)
            .field("global_scope", &self.global_scope)
            .field("__node_to_scope", &self.__node_to_scope)
            .field("__current_scope", &self.__current_scope)
            .finish()
    }
}
