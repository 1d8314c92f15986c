#![allow(dead_code)]

pub type Kind = &'static str;

pub const Arguments: &str = "arguments";
pub const ArrayPattern: &str = "array_pattern";
pub const ArrowFunction: &str = "arrow_function";
pub const AssignmentPattern: &str = "assignment_pattern";
pub const CallExpression: &str = "call_expression";
pub const CatchClause: &str = "catch_clause";
pub const Class: &str = "class";
pub const ClassDeclaration: &str = "class_declaration";
pub const Comment: &str = "comment";
pub const ExpressionStatement: &str = "expression_statement";
pub const False: &str = "false";
pub const ForInStatement: &str = "for_in_statement";
pub const FormalParameters: &str = "formal_parameters";
pub const ForStatement: &str = "for_statement";
pub const Function: &str = "function";
pub const FunctionDeclaration: &str = "function_declaration";
pub const FunctionExpression: &str = "function_expression";
pub const GeneratorFunction: &str = "generator_function";
pub const GeneratorFunctionDeclaration: &str = "generator_function_declaration";
pub const Identifier: &str = "identifier";
pub const ImportClause: &str = "import_clause";
pub const ImportSpecifier: &str = "import_specifier";
pub const ImportStatement: &str = "import_statement";
pub const LexicalDeclaration: &str = "lexical_declaration";
pub const MemberExpression: &str = "member_expression";
pub const MethodDefinition: &str = "method_definition";
pub const NamedImports: &str = "named_imports";
pub const NamespaceImport: &str = "namespace_import";
pub const NewExpression: &str = "new_expression";
pub const Null: &str = "null";
pub const Number: &str = "number";
pub const ObjectAssignmentPattern: &str = "object_assignment_pattern";
pub const ObjectPattern: &str = "object_pattern";
pub const PairPattern: &str = "pair_pattern";
pub const ParenthesizedExpression: &str = "parenthesized_expression";
pub const Program: &str = "program";
pub const PropertyIdentifier: &str = "property_identifier";
pub const Regex: &str = "regex";
pub const SpreadElement: &str = "spread_element";
pub const RestPattern: &str = "rest_pattern";
pub const ShorthandPropertyIdentifierPattern: &str = "shorthand_property_identifier_pattern";
pub const StatementBlock: &str = "statement_block";
pub const String: &str = "string";
pub const StringFragment: &str = "string_fragment";
pub const SwitchStatement: &str = "switch_statement";
pub const TemplateString: &str = "template_string";
pub const True: &str = "true";
pub const Undefined: &str = "undefined";
pub const VariableDeclaration: &str = "variable_declaration";
pub const VariableDeclarator: &str = "variable_declarator";

pub fn is_literal_kind(kind: Kind) -> bool {
    matches!(
        kind,
        Number | String | TemplateString | Regex | True | False | Null | Undefined
    )
}
