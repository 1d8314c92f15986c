use id_arena::{Arena, Id};
use tree_sitter::Node;

use super::variable::VariableType;
use crate::{ast_helpers::NodeExtJs, kind::VariableDeclarator};

#[derive(Debug)]
pub struct _Definition<'a> {
    type_: VariableType,
    name: Node<'a>,
    node: Node<'a>,
    parent: Option<Node<'a>>,
}

impl<'a> _Definition<'a> {
    pub fn new(
        arena: &mut Arena<Self>,
        type_: VariableType,
        name: Node<'a>,
        node: Node<'a>,
        parent: Option<Node<'a>>,
    ) -> Id<Self> {
        arena.alloc(Self {
            type_,
            name,
            node,
            parent,
        })
    }
}

#[derive(Debug)]
pub struct Definition<'a, 'b> {
    definition: &'b _Definition<'a>,
}

impl<'a, 'b> Definition<'a, 'b> {
    pub fn new(definition: &'b _Definition<'a>) -> Self {
        Self { definition }
    }

    pub fn type_(&self) -> VariableType {
        self.definition.type_
    }

    pub fn name(&self) -> Node<'a> {
        self.definition.name
    }

    pub fn node(&self) -> Node<'a> {
        self.definition.node
    }

    pub fn parent(&self) -> Option<Node<'a>> {
        self.definition.parent
    }

    /// The expression the bound name is initialized with. Only a plain
    /// `name = value` declarator has one; a name bound by destructuring
    /// doesn't take on the whole right-hand side.
    pub fn init(&self) -> Option<Node<'a>> {
        if self.type_() != VariableType::Variable || self.node().kind() != VariableDeclarator {
            return None;
        }
        if self.node().maybe_field("name")? != self.name() {
            return None;
        }
        self.node().maybe_field("value")
    }
}
