//! Ordered walks used by the top-K query
//!
//! Both walks start at the root and descend; the tree keeps no parent
//! pointers, so the predecessor of a key is recomputed root-down each time
//! rather than read from a cached in-order pointer.

use std::cmp::Ordering;

use super::node::Node;

/// Node holding the maximum power level in the subtree under `node`
/// (rightmost walk).
pub(super) fn max_node(node: &Node) -> &Node {
    let mut current = node;
    while let Some(right) = current.right.as_deref() {
        current = right;
    }
    current
}

/// In-order predecessor of the node keyed `power_level`, searched from the
/// root.
///
/// Tracks the last node whose key is strictly less than the target while
/// descending; at the target key itself the predecessor is the maximum of
/// the left subtree when one exists. Returns `None` when the target is the
/// tree minimum.
pub(super) fn predecessor(root: &Node, power_level: i32) -> Option<&Node> {
    let mut pred = None;
    let mut current = Some(root);

    while let Some(node) = current {
        match node.spell.power_level().cmp(&power_level) {
            Ordering::Equal => {
                if let Some(left) = node.left.as_deref() {
                    pred = Some(max_node(left));
                }
                return pred;
            }
            Ordering::Greater => current = node.left.as_deref(),
            Ordering::Less => {
                pred = Some(node);
                current = node.right.as_deref();
            }
        }
    }

    pred
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spell::Spell;

    /// Hand-built tree:
    ///
    /// ```text
    ///        20
    ///       /  \
    ///     13    25
    ///    /  \
    ///  11    15
    /// ```
    fn sample_tree() -> Box<Node> {
        let spell = |p: i32| Spell::new(format!("s{p}"), "test", p, "w");
        let mut root = Box::new(Node::new(spell(20)));
        let mut left = Box::new(Node::new(spell(13)));
        left.left = Some(Box::new(Node::new(spell(11))));
        left.right = Some(Box::new(Node::new(spell(15))));
        left.update_height();
        root.left = Some(left);
        root.right = Some(Box::new(Node::new(spell(25))));
        root.update_height();
        root
    }

    #[test]
    fn max_node_is_rightmost() {
        let tree = sample_tree();
        assert_eq!(max_node(&tree).spell.power_level(), 25);
    }

    #[test]
    fn predecessor_walks_root_down() {
        let tree = sample_tree();
        let pred = |p| predecessor(&tree, p).map(|n| n.spell.power_level());
        assert_eq!(pred(25), Some(20));
        assert_eq!(pred(20), Some(15));
        assert_eq!(pred(15), Some(13));
        assert_eq!(pred(13), Some(11));
        assert_eq!(pred(11), None);
    }
}
