#[macro_export]
macro_rules! return_if_none {
    ($expr:expr) => {
        match $expr {
            None => return,
            Some(value) => value,
        }
    };
}

/// Builds a [`Violation`](crate::linter::Violation) for the node being
/// visited.
///
/// ```ignore
/// context.report(violation! {
///     node => node,
///     message_id => "prefer_t_regex",
///     data => {
///         assertion => "regex",
///     },
///     fix => |fixer| {
///         fixer.replace_text(property, "regex");
///     },
/// });
/// ```
#[macro_export]
macro_rules! violation {
    (
        node => $node:expr,
        message_id => $message_id:expr
        $(, data => { $($data_key:ident => $data_value:expr),* $(,)? })?
        $(, fix => |$fixer:ident| $fix_body:block)?
        $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut violation = $crate::linter::Violation::new($node, $message_id);
        $(
            $(
                violation = violation.with_data(stringify!($data_key), $data_value);
            )*
        )?
        $(
            violation = violation.with_fix(|$fixer: &mut $crate::linter::Fixer| $fix_body);
        )?
        violation
    }};
}

/// Declares a [`Rule`](crate::linter::Rule) from its metadata and its
/// listeners. A listener is a tree-sitter query plus a callback, either
/// `query => |node, context| { .. }` for a query with a single capture or
/// `query => { capture_name => "..", callback => |node, context| { .. } }`.
#[macro_export]
macro_rules! rule {
    (@listeners $meta:ident, [$($done:tt)*]) => {
        $crate::rule!(@generate $meta, $($done)*)
    };
    (
        @listeners $meta:ident, [$($done:tt)*]
        $query:expr => {
            capture_name => $capture_name:expr,
            callback => |$node:ident, $context:ident| $callback:block $(,)?
        }
        $(, $($rest:tt)*)?
    ) => {
        $crate::rule!(
            @listeners $meta,
            [$($done)* ($query, Some($capture_name), $node, $context, $callback)]
            $($($rest)*)?
        )
    };
    (
        @listeners $meta:ident, [$($done:tt)*]
        $query:expr => |$node:ident, $context:ident| $callback:block
        $(, $($rest:tt)*)?
    ) => {
        $crate::rule!(
            @listeners $meta,
            [$($done)* ($query, None, $node, $context, $callback)]
            $($($rest)*)?
        )
    };
    (
        @generate $meta:ident,
        $(($query:expr, $capture_name:expr, $node:ident, $context:ident, $callback:block))*
    ) => {{
        struct GeneratedRule {
            meta: $crate::linter::RuleMeta,
            listener_queries: Vec<$crate::linter::RuleListenerQuery>,
        }

        impl $crate::linter::Rule for GeneratedRule {
            fn meta(&self) -> &$crate::linter::RuleMeta {
                &self.meta
            }

            fn listener_queries(&self) -> &[$crate::linter::RuleListenerQuery] {
                &self.listener_queries
            }

            #[allow(unused_variables, unused_assignments)]
            fn on_query_match<'a>(
                &self,
                listener_index: usize,
                node: $crate::tree_sitter::Node<'a>,
                context: &mut $crate::linter::QueryMatchContext<'a, '_>,
            ) {
                let mut index = 0;
                $(
                    if listener_index == index {
                        let $node = node;
                        let $context = &mut *context;
                        $callback
                    }
                    index += 1;
                )*
            }
        }

        let rule: std::sync::Arc<dyn $crate::linter::Rule> = std::sync::Arc::new(GeneratedRule {
            meta: $meta,
            listener_queries: vec![
                $($crate::linter::RuleListenerQuery::new($query, $capture_name)),*
            ],
        });
        rule
    }};
    (
        name => $name:expr,
        description => $description:expr,
        docs_url => $docs_url:expr,
        fixable => $fixable:expr,
        messages => [
            $($message_id:ident => $message:expr),* $(,)?
        ],
        listeners => [
            $($listeners:tt)*
        ] $(,)?
    ) => {{
        let meta = $crate::linter::RuleMeta {
            name: ($name).to_owned(),
            description: ($description).to_owned(),
            docs_url: ($docs_url).to_owned(),
            fixable: $fixable,
            messages: [$((stringify!($message_id).to_owned(), ($message).to_owned())),*]
                .into_iter()
                .collect(),
            schema: $crate::linter::RuleMeta::no_options_schema(),
        };
        $crate::rule!(@listeners meta, [] $($listeners)*)
    }};
}
