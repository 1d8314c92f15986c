use tracing::trace;
use tree_sitter::{Node, Tree};

pub trait TreeEnterLeaveVisitor<'a> {
    fn enter_node(&mut self, node: Node<'a>);
    fn leave_node(&mut self, node: Node<'a>);
}

pub fn walk_tree<'a>(tree: &'a Tree, visitor: &mut impl TreeEnterLeaveVisitor<'a>) {
    let mut node_stack: Vec<Node<'a>> = Default::default();
    let mut cursor = tree.walk();
    'outer: loop {
        let node = cursor.node();
        let depth = cursor.depth() as usize;
        while node_stack.len() > depth {
            let Some(last) = node_stack.pop() else {
                break;
            };
            trace!(node = ?last, "leaving node");

            visitor.leave_node(last);
        }
        trace!(?node, "entering node");

        node_stack.push(node);
        visitor.enter_node(node);

        #[allow(clippy::collapsible_if)]
        if !cursor.goto_first_child() {
            if !cursor.goto_next_sibling() {
                while cursor.goto_parent() {
                    if cursor.goto_next_sibling() {
                        continue 'outer;
                    }
                }
                break;
            }
        }
    }
    while let Some(node) = node_stack.pop() {
        trace!(?node, "leaving node");

        visitor.leave_node(node);
    }
}
