use id_arena::Id;
use tracing::trace;
use tree_sitter::Node;

use super::{
    definition::_Definition,
    pattern_visitor::get_pattern_identifiers,
    scope::_Scope,
    scope_manager::ScopeManager,
    variable::VariableType,
};
use crate::{
    ast_helpers::NodeExtJs,
    kind::{
        ArrowFunction, CatchClause, Class, ClassDeclaration, FormalParameters, ForInStatement,
        ForStatement, Function, FunctionDeclaration, FunctionExpression, GeneratorFunction,
        GeneratorFunctionDeclaration, Identifier, ImportClause, ImportSpecifier, ImportStatement,
        LexicalDeclaration, MethodDefinition, NamedImports, NamespaceImport, Program,
        StatementBlock, SwitchStatement, VariableDeclaration, VariableDeclarator,
    },
    utils::ast_utils,
    visit::TreeEnterLeaveVisitor,
};

pub struct Referencer<'a, 'b> {
    scope_manager: &'b mut ScopeManager<'a>,
}

impl<'a, 'b> Referencer<'a, 'b> {
    pub fn new(scope_manager: &'b mut ScopeManager<'a>) -> Self {
        Self { scope_manager }
    }

    fn current_scope(&self) -> Option<Id<_Scope<'a>>> {
        self.scope_manager.__current_scope
    }

    fn current_variable_scope(&self) -> Option<Id<_Scope<'a>>> {
        self.scope_manager
            .maybe_current_scope()
            .map(|scope| scope.variable_scope())
    }

    fn close(&mut self, node: Node<'a>) {
        while let Some(current_scope) = self.scope_manager.maybe_current_scope() {
            if current_scope.block() != node {
                break;
            }
            trace!(id = ?current_scope.id(), "closing scope");

            let upper = current_scope.maybe_upper();
            self.scope_manager.__current_scope = upper;
        }
    }

    fn define(
        &mut self,
        scope: Option<Id<_Scope<'a>>>,
        identifier: Node<'a>,
        type_: VariableType,
        node: Node<'a>,
        parent: Option<Node<'a>>,
    ) {
        let Some(scope) = scope else {
            return;
        };
        let definition = _Definition::new(
            &mut self.scope_manager.arena.definitions,
            type_,
            identifier,
            node,
            parent,
        );
        self.scope_manager.__define(scope, identifier, definition);
    }

    fn define_pattern(
        &mut self,
        scope: Option<Id<_Scope<'a>>>,
        pattern: Node<'a>,
        type_: VariableType,
        node: Node<'a>,
        parent: Option<Node<'a>>,
    ) {
        for identifier in get_pattern_identifiers(pattern) {
            self.define(scope, identifier, type_, node, parent);
        }
    }

    fn visit_function(&mut self, node: Node<'a>) {
        if matches!(
            node.kind(),
            FunctionDeclaration | GeneratorFunctionDeclaration
        ) {
            if let Some(name) = node.maybe_field("name") {
                self.define(
                    self.current_scope(),
                    name,
                    VariableType::FunctionName,
                    node,
                    None,
                );
            }
        }

        self.scope_manager.__nest_function_scope(node);

        if matches!(node.kind(), Function | FunctionExpression | GeneratorFunction) {
            if let Some(name) = node.maybe_field("name") {
                self.define(
                    self.current_scope(),
                    name,
                    VariableType::FunctionName,
                    node,
                    None,
                );
            }
        }

        if let Some(parameter) = node.maybe_field("parameter") {
            self.define_pattern(
                self.current_scope(),
                parameter,
                VariableType::Parameter,
                parameter,
                None,
            );
        }
        if let Some(parameters) = node
            .maybe_field("parameters")
            .filter(|parameters| parameters.kind() == FormalParameters)
        {
            for parameter in parameters.non_comment_named_children() {
                self.define_pattern(
                    self.current_scope(),
                    parameter,
                    VariableType::Parameter,
                    parameter,
                    None,
                );
            }
        }
    }

    fn visit_class(&mut self, node: Node<'a>) {
        let name = node.maybe_field("name");
        if node.kind() == ClassDeclaration {
            if let Some(name) = name {
                self.define(self.current_scope(), name, VariableType::ClassName, node, None);
            }
        }

        self.scope_manager.__nest_class_scope(node);

        if node.kind() == Class {
            if let Some(name) = name {
                self.define(self.current_scope(), name, VariableType::ClassName, node, None);
            }
        }
    }

    fn visit_variable_declaration(&mut self, node: Node<'a>) {
        let scope = if node.kind() == VariableDeclaration {
            self.current_variable_scope()
        } else {
            self.current_scope()
        };
        for declarator in node.non_comment_named_children() {
            if declarator.kind() != VariableDeclarator {
                continue;
            }
            let Some(name) = declarator.maybe_field("name") else {
                continue;
            };
            self.define_pattern(scope, name, VariableType::Variable, declarator, Some(node));
        }
    }

    fn visit_for_in_statement(&mut self, node: Node<'a>) {
        self.scope_manager.__nest_for_scope(node);

        let Some(kind) = node.maybe_field("kind") else {
            return;
        };
        let Some(left) = node.maybe_field("left") else {
            return;
        };
        let scope = if self.scope_manager.source_text.get(kind.byte_range()) == Some("var") {
            self.current_variable_scope()
        } else {
            self.current_scope()
        };
        self.define_pattern(scope, left, VariableType::Variable, node, None);
    }

    fn visit_catch_clause(&mut self, node: Node<'a>) {
        self.scope_manager.__nest_catch_scope(node);

        if let Some(parameter) = node.maybe_field("parameter") {
            self.define_pattern(
                self.current_scope(),
                parameter,
                VariableType::CatchClause,
                node,
                None,
            );
        }
    }

    fn visit_import_statement(&mut self, node: Node<'a>) {
        let Some(import_clause) = node
            .non_comment_named_children()
            .into_iter()
            .find(|child| child.kind() == ImportClause)
        else {
            return;
        };
        let scope = self.current_scope();
        for child in import_clause.non_comment_named_children() {
            match child.kind() {
                Identifier => {
                    self.define(scope, child, VariableType::ImportBinding, child, Some(node));
                }
                NamespaceImport => {
                    if let Some(identifier) = child
                        .non_comment_named_children()
                        .into_iter()
                        .find(|grandchild| grandchild.kind() == Identifier)
                    {
                        self.define(
                            scope,
                            identifier,
                            VariableType::ImportBinding,
                            child,
                            Some(node),
                        );
                    }
                }
                NamedImports => {
                    for specifier in child.non_comment_named_children() {
                        if specifier.kind() != ImportSpecifier {
                            continue;
                        }
                        let Some(local) = specifier
                            .maybe_field("alias")
                            .or_else(|| specifier.maybe_field("name"))
                            .filter(|local| local.kind() == Identifier)
                        else {
                            continue;
                        };
                        self.define(
                            scope,
                            local,
                            VariableType::ImportBinding,
                            specifier,
                            Some(node),
                        );
                    }
                }
                _ => (),
            }
        }
    }
}

impl<'a, 'b> TreeEnterLeaveVisitor<'a> for Referencer<'a, 'b> {
    fn enter_node(&mut self, node: Node<'a>) {
        // The `function` keyword token shares its kind name with function
        // expressions.
        if !node.is_named() {
            return;
        }
        match node.kind() {
            Program => {
                self.scope_manager.__nest_global_scope(node);
            }
            FunctionDeclaration | GeneratorFunctionDeclaration | Function | FunctionExpression
            | GeneratorFunction | ArrowFunction | MethodDefinition => {
                self.visit_function(node);
            }
            ClassDeclaration | Class => self.visit_class(node),
            StatementBlock => {
                if !node.parent().is_some_and(|parent| {
                    ast_utils::is_function(parent) && parent.maybe_field("body") == Some(node)
                }) {
                    self.scope_manager.__nest_block_scope(node);
                }
            }
            ForStatement => {
                self.scope_manager.__nest_for_scope(node);
            }
            ForInStatement => self.visit_for_in_statement(node),
            CatchClause => self.visit_catch_clause(node),
            SwitchStatement => {
                self.scope_manager.__nest_switch_scope(node);
            }
            VariableDeclaration | LexicalDeclaration => self.visit_variable_declaration(node),
            ImportStatement => self.visit_import_statement(node),
            _ => (),
        }
    }

    fn leave_node(&mut self, node: Node<'a>) {
        self.close(node);
    }
}
